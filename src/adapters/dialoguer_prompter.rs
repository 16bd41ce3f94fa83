//! Terminal prompts backed by dialoguer.

use std::io::{ErrorKind, IsTerminal};

use dialoguer::{Confirm, Error as DialoguerError, Input, Password, Select};

use crate::domain::AppError;
use crate::ports::Prompter;

#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    /// Prompter for the current terminal; fails when stdin or stderr is not a TTY.
    ///
    /// Prompts are drawn on stderr, so stdout may be redirected.
    pub fn for_terminal() -> Result<Self, AppError> {
        if std::io::stdin().is_terminal() && std::io::stderr().is_terminal() {
            Ok(Self)
        } else {
            Err(AppError::Prompt("the wizard needs an interactive terminal".to_string()))
        }
    }
}

fn prompt_error(what: &str, err: DialoguerError) -> AppError {
    match err {
        DialoguerError::IO(io) if io.kind() == ErrorKind::Interrupted => {
            AppError::Prompt("interrupted".to_string())
        }
        other => AppError::Prompt(format!("failed to read {}: {}", what, other)),
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| prompt_error("confirmation", e))
    }

    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize, AppError> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(|e| prompt_error("selection", e))
    }

    fn input(&mut self, prompt: &str, default: &str) -> Result<String, AppError> {
        Input::<String>::new()
            .with_prompt(prompt)
            .with_initial_text(default)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| prompt_error("input", e))
    }

    fn password(&mut self, prompt: &str) -> Result<String, AppError> {
        Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(|e| prompt_error("password", e))
    }
}
