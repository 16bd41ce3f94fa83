//! Interactive wizard: walks the visible sections and asks for each field.

use crate::domain::schema::{self, FieldKind, FieldSpec, SectionSpec};
use crate::domain::{
    AppError, DEFAULT_TOKEN_LENGTH, DeploymentType, FieldValue, WizardSession, generate_token,
};
use crate::ports::Prompter;

/// Run the wizard. Without `deployment` the operator picks one first.
pub fn execute<P: Prompter>(
    prompter: &mut P,
    deployment: Option<DeploymentType>,
) -> Result<WizardSession, AppError> {
    let deployment = match deployment {
        Some(deployment) => deployment,
        None => select_deployment(prompter)?,
    };
    let mut session = WizardSession::new(deployment);

    for section in schema::sections().iter().filter(|s| s.applies_to(deployment)) {
        if !schema::section_visible(section, deployment, session.values()) {
            continue;
        }
        if section.collapsed && !prompter.confirm(&section_prompt(section), false)? {
            tracing::debug!(section = section.id, "kept defaults");
            continue;
        }

        // Visibility is re-checked per field so earlier answers take effect immediately.
        for field in section.fields {
            if !field.is_visible(deployment, session.values()) {
                continue;
            }
            if let Some(value) = ask_field(prompter, field, &session)? {
                session.set_value(field.name, value)?;
            }
        }
    }

    Ok(session)
}

fn select_deployment<P: Prompter>(prompter: &mut P) -> Result<DeploymentType, AppError> {
    let items: Vec<String> = DeploymentType::ALL
        .iter()
        .map(|d| format!("{} - {}", d.name(), d.description()))
        .collect();
    let default = DeploymentType::ALL
        .iter()
        .position(|d| *d == DeploymentType::default())
        .unwrap_or_default();

    let index = prompter.select("Deployment type", &items, default)?;
    DeploymentType::ALL
        .get(index)
        .copied()
        .ok_or_else(|| AppError::Prompt(format!("no deployment type at position {}", index)))
}

fn section_prompt(section: &SectionSpec) -> String {
    format!("Customize {} {} ({})?", section.icon, section.title, section.description)
}

/// Ask for one field. `None` keeps the current value.
fn ask_field<P: Prompter>(
    prompter: &mut P,
    field: &FieldSpec,
    session: &WizardSession,
) -> Result<Option<FieldValue>, AppError> {
    let values = session.values();
    let current = values.get(field.name).map(FieldValue::to_string).unwrap_or_default();

    match field.kind {
        FieldKind::Boolean => {
            let answer = prompter.confirm(field.label, values.is_truthy(field.name))?;
            Ok(Some(FieldValue::Flag(answer)))
        }
        FieldKind::Select => {
            let items: Vec<String> = field.options.iter().map(|o| o.label.to_string()).collect();
            let default = field.options.iter().position(|o| o.value == current).unwrap_or_default();
            let index = prompter.select(field.label, &items, default)?;
            let option = field.options.get(index).ok_or_else(|| {
                AppError::Prompt(format!("no option at position {} for {}", index, field.name))
            })?;
            Ok(Some(FieldValue::text(option.value)))
        }
        FieldKind::Password => {
            if field.generates_secret
                && prompter.confirm(&format!("Generate a random {}?", field.label), current.is_empty())?
            {
                return Ok(Some(FieldValue::text(generate_token(DEFAULT_TOKEN_LENGTH).into_value())));
            }
            let answer = prompter.password(field.label)?;
            Ok((!answer.is_empty()).then(|| FieldValue::text(answer)))
        }
        FieldKind::Text | FieldKind::Number | FieldKind::Textarea => {
            let answer = prompter.input(field.label, &current)?;
            field.parse_value(answer.trim()).map(Some)
        }
    }
}
