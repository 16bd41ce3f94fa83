//! Interactive prompting port used by the wizard.

use crate::domain::AppError;

/// Port for asking the operator questions.
///
/// Every method blocks until an answer is given. Implementations map
/// interruption and terminal failures to `AppError::Prompt`.
pub trait Prompter {
    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, AppError>;

    /// Pick one of `items`; returns the chosen index.
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize, AppError>;

    /// Free-form text, pre-filled with `default`. An empty answer is allowed.
    fn input(&mut self, prompt: &str, default: &str) -> Result<String, AppError>;

    /// Hidden text entry. An empty answer keeps the current value.
    fn password(&mut self, prompt: &str) -> Result<String, AppError>;
}
