//! Schema listing: sections and fields currently shown for a configuration.

use crate::domain::WizardSession;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReport {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: &'static str,
    pub required: bool,
    pub value: String,
    /// Accepted values, for select fields.
    pub choices: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReport {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub fields: Vec<FieldReport>,
}

pub fn execute(session: &WizardSession) -> Vec<SectionReport> {
    session
        .visible_sections()
        .into_iter()
        .map(|(section, fields)| SectionReport {
            id: section.id,
            title: section.title,
            icon: section.icon,
            fields: fields
                .into_iter()
                .map(|field| FieldReport {
                    name: field.name,
                    label: field.label,
                    kind: field.kind.as_str(),
                    required: field.required,
                    value: session
                        .values()
                        .get(field.name)
                        .map(ToString::to_string)
                        .unwrap_or_default(),
                    choices: field.options.iter().map(|o| o.value).collect(),
                })
                .collect(),
        })
        .collect()
}
