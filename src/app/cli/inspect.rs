//! Read-only commands: types, schema, defaults, token.

use std::path::PathBuf;

use crate::app::api::{self, ValuesFormat};
use crate::domain::{AppError, DeploymentType, TokenStrength};

pub fn run_types(detail: bool) {
    for deployment in api::deployment_types() {
        println!("{:<16}{}", deployment.id(), deployment.name());
        println!("{:<16}{}", "", deployment.description());
        if detail {
            for feature in deployment.features() {
                println!("{:<16}  + {}", "", feature);
            }
            for limitation in deployment.limitations() {
                println!("{:<16}  - {}", "", limitation);
            }
            println!();
        }
    }
}

pub fn run_schema(
    deployment: DeploymentType,
    values_file: Option<PathBuf>,
    overrides: &[String],
) -> Result<(), AppError> {
    let sections = api::schema(deployment, values_file.as_deref(), overrides)?;

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} {} [{}]", section.icon, section.title, section.id);
        for field in &section.fields {
            let marker = if field.required { "*" } else { " " };
            println!("  {}{:<28} {:<9} {}", marker, field.name, field.kind, field.value);
            if !field.choices.is_empty() {
                println!("   {:<28} one of: {}", "", field.choices.join(", "));
            }
        }
    }
    Ok(())
}

pub fn run_defaults(deployment: DeploymentType, format: ValuesFormat) -> Result<(), AppError> {
    print!("{}", api::defaults(deployment, format)?);
    Ok(())
}

pub fn run_token(length: usize) {
    let token = api::token(length);
    if token.strength() == TokenStrength::Weak {
        eprintln!("⚠️  System random source unavailable; token is not cryptographically strong");
    }
    println!("{}", token.value());
}
