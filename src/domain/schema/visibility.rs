use super::{FieldSpec, SectionSpec, VisibilityRule, fields, sections};
use crate::domain::DeploymentType;
use crate::domain::values::ConfigurationState;

impl VisibilityRule {
    /// Evaluate the rule against the current values. A missing value never matches.
    pub fn holds(&self, values: &ConfigurationState) -> bool {
        match self {
            VisibilityRule::Equals { field, literal } => {
                values.get(field).is_some_and(|value| literal.matches(value))
            }
            VisibilityRule::OneOf { field, values: allowed } => values
                .get(field)
                .and_then(|value| value.as_text())
                .is_some_and(|current| allowed.contains(&current)),
        }
    }
}

impl FieldSpec {
    pub fn is_visible(&self, deployment: DeploymentType, values: &ConfigurationState) -> bool {
        self.applies_to(deployment) && self.visible_when.is_none_or(|rule| rule.holds(values))
    }
}

/// Fields of `section` shown for this deployment type and these values.
pub fn visible_fields(
    section: &'static SectionSpec,
    deployment: DeploymentType,
    values: &ConfigurationState,
) -> Vec<&'static FieldSpec> {
    section.fields.iter().filter(|f| f.is_visible(deployment, values)).collect()
}

/// A section renders only when it applies to the deployment type and has a visible field.
pub fn section_visible(
    section: &'static SectionSpec,
    deployment: DeploymentType,
    values: &ConfigurationState,
) -> bool {
    section.applies_to(deployment) && !visible_fields(section, deployment, values).is_empty()
}

/// Sections that currently render, paired with their visible fields.
pub fn visible_sections(
    deployment: DeploymentType,
    values: &ConfigurationState,
) -> Vec<(&'static SectionSpec, Vec<&'static FieldSpec>)> {
    sections()
        .iter()
        .filter(|section| section.applies_to(deployment))
        .filter_map(|section| {
            let visible = visible_fields(section, deployment, values);
            (!visible.is_empty()).then_some((section, visible))
        })
        .collect()
}

/// Required fields that are visible but hold no value.
pub fn missing_required(deployment: DeploymentType, values: &ConfigurationState) -> Vec<&'static str> {
    fields()
        .filter(|f| f.required && f.is_visible(deployment, values))
        .filter(|f| values.present(f.name).is_none())
        .map(|f| f.name)
        .collect()
}
