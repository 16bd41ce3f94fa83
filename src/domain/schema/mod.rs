//! Configuration schema: sections and fields the wizard asks about.
//!
//! The schema is static data. Field kinds and visibility rules are closed
//! enums so every consumer (prompts, defaults, validation) matches on them
//! exhaustively.

mod catalog;
mod defaults;
mod visibility;

pub use catalog::SECTIONS;
pub use defaults::{LOOPBACK_HOST, PROXY_SERVICE_HOST, REDIS_SERVICE_HOST, defaults_for};
pub use visibility::{missing_required, section_visible, visible_fields, visible_sections};

use crate::domain::values::FieldValue;
use crate::domain::{AppError, DeploymentType};

/// Input kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Select,
    Boolean,
    Password,
    Textarea,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Select => "select",
            FieldKind::Boolean => "boolean",
            FieldKind::Password => "password",
            FieldKind::Textarea => "textarea",
        }
    }
}

/// One choice of a select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// A constant value in the schema: a field default or a visibility literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    Text(&'static str),
    Flag(bool),
}

impl Literal {
    /// Strict comparison: text never equals a flag.
    pub fn matches(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (Literal::Text(expected), FieldValue::Text(actual)) => expected == actual,
            (Literal::Flag(expected), FieldValue::Flag(actual)) => expected == actual,
            _ => false,
        }
    }

    pub fn to_value(self) -> FieldValue {
        match self {
            Literal::Text(s) => FieldValue::text(s),
            Literal::Flag(b) => FieldValue::Flag(b),
        }
    }
}

/// Condition under which a field is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityRule {
    /// The referenced field holds exactly this literal.
    Equals { field: &'static str, literal: Literal },
    /// The referenced field holds one of these text values.
    OneOf { field: &'static str, values: &'static [&'static str] },
}

impl VisibilityRule {
    pub fn field(&self) -> &'static str {
        match self {
            VisibilityRule::Equals { field, .. } | VisibilityRule::OneOf { field, .. } => field,
        }
    }
}

/// Declarative description of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
    pub default: Literal,
    pub options: &'static [SelectOption],
    pub placeholder: Option<&'static str>,
    pub required: bool,
    pub generates_secret: bool,
    pub visible_when: Option<VisibilityRule>,
    pub deployment_types: &'static [DeploymentType],
}

impl FieldSpec {
    pub(crate) const fn new(
        name: &'static str,
        label: &'static str,
        kind: FieldKind,
        default: Literal,
    ) -> Self {
        Self {
            name,
            label,
            description: "",
            kind,
            default,
            options: &[],
            placeholder: None,
            required: false,
            generates_secret: false,
            visible_when: None,
            deployment_types: &DeploymentType::ALL,
        }
    }

    pub(crate) const fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub(crate) const fn options(mut self, options: &'static [SelectOption]) -> Self {
        self.options = options;
        self
    }

    pub(crate) const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub(crate) const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub(crate) const fn secret(mut self) -> Self {
        self.generates_secret = true;
        self
    }

    pub(crate) const fn when(mut self, rule: VisibilityRule) -> Self {
        self.visible_when = Some(rule);
        self
    }

    pub(crate) const fn only(mut self, deployment_types: &'static [DeploymentType]) -> Self {
        self.deployment_types = deployment_types;
        self
    }

    pub fn applies_to(&self, deployment: DeploymentType) -> bool {
        self.deployment_types.contains(&deployment)
    }

    /// Label of the option holding `value`, for select fields.
    pub fn option_label(&self, value: &str) -> Option<&'static str> {
        self.options.iter().find(|o| o.value == value).map(|o| o.label)
    }

    /// Convert raw user input into a value of this field's kind.
    ///
    /// Numbers are not parsed: they are stored as the literal text given.
    pub fn parse_value(&self, raw: &str) -> Result<FieldValue, AppError> {
        let invalid = |reason: String| AppError::InvalidFieldValue {
            field: self.name.to_string(),
            value: raw.to_string(),
            reason,
        };

        match self.kind {
            FieldKind::Boolean => parse_flag(raw)
                .map(FieldValue::Flag)
                .ok_or_else(|| invalid("expected true or false".to_string())),
            FieldKind::Select => {
                if self.options.iter().any(|o| o.value == raw) {
                    Ok(FieldValue::text(raw))
                } else {
                    let allowed: Vec<String> = self
                        .options
                        .iter()
                        .map(|o| if o.value.is_empty() { "\"\"".to_string() } else { o.value.to_string() })
                        .collect();
                    Err(invalid(format!("expected one of {}", allowed.join(", "))))
                }
            }
            FieldKind::Text | FieldKind::Number | FieldKind::Password | FieldKind::Textarea => {
                Ok(FieldValue::text(raw))
            }
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Ordered group of fields shown together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Starts collapsed in the wizard.
    pub collapsed: bool,
    /// Restricts the whole section to these deployment types.
    pub deployment_types: Option<&'static [DeploymentType]>,
    pub fields: &'static [FieldSpec],
}

impl SectionSpec {
    pub fn applies_to(&self, deployment: DeploymentType) -> bool {
        self.deployment_types.is_none_or(|types| types.contains(&deployment))
    }
}

/// All sections in display order.
pub fn sections() -> &'static [SectionSpec] {
    SECTIONS
}

/// Every field across all sections, in display order.
pub fn fields() -> impl Iterator<Item = &'static FieldSpec> {
    SECTIONS.iter().flat_map(|section| section.fields.iter())
}

/// Look up a field by name.
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    fields().find(|f| f.name == name)
}

/// Look up a field by name, failing with `UnknownField`.
pub fn require_field(name: &str) -> Result<&'static FieldSpec, AppError> {
    field(name).ok_or_else(|| AppError::UnknownField(name.to_string()))
}
