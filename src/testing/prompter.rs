use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Prompter;

/// One scripted reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Confirm(bool),
    /// Select the item whose text contains this needle.
    Choose(&'static str),
    Text(&'static str),
    /// Accept whatever default the prompt offers.
    Default,
}

/// Prompter that replays answers in order and records every prompt.
///
/// Running out of answers accepts defaults, so scripts only need to cover
/// the prompts a test cares about.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self { answers: answers.into_iter().collect(), prompts: Vec::new() }
    }

    fn next(&mut self, prompt: &str) -> Answer {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().unwrap_or(Answer::Default)
    }

    fn mismatch(prompt: &str, answer: &Answer) -> AppError {
        AppError::Prompt(format!("scripted answer {:?} does not fit prompt '{}'", answer, prompt))
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, AppError> {
        match self.next(prompt) {
            Answer::Confirm(value) => Ok(value),
            Answer::Default => Ok(default),
            other => Err(Self::mismatch(prompt, &other)),
        }
    }

    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize, AppError> {
        match self.next(prompt) {
            Answer::Choose(needle) => items
                .iter()
                .position(|item| item.contains(needle))
                .ok_or_else(|| Self::mismatch(prompt, &Answer::Choose(needle))),
            Answer::Default => Ok(default),
            other => Err(Self::mismatch(prompt, &other)),
        }
    }

    fn input(&mut self, prompt: &str, default: &str) -> Result<String, AppError> {
        match self.next(prompt) {
            Answer::Text(text) => Ok(text.to_string()),
            Answer::Default => Ok(default.to_string()),
            other => Err(Self::mismatch(prompt, &other)),
        }
    }

    fn password(&mut self, prompt: &str) -> Result<String, AppError> {
        match self.next(prompt) {
            Answer::Text(text) => Ok(text.to_string()),
            Answer::Default => Ok(String::new()),
            other => Err(Self::mismatch(prompt, &other)),
        }
    }
}
