//! Read-only accessors over a configuration snapshot, shared by every fragment.

use crate::domain::values::{ConfigurationState, FieldValue};

pub(super) const DEFAULT_IMAGE_TAG: &str = "latest";
pub(super) const DEFAULT_CONFIG_PATH: &str = "./data";
pub(super) const DEFAULT_REDIS_PORT: &str = "6379";
pub(super) const DEFAULT_FPM_PORT: &str = "9000";
pub(super) const DEFAULT_PROXY_PUBLISHED_PORT: &str = "38085";
pub(super) const PROXY_CONTAINER_PORT: &str = "8085";
pub(super) const DEFAULT_PROXY_LOG_LEVEL: &str = "INFO";

#[derive(Clone, Copy)]
pub(super) struct ConfigView<'a> {
    values: &'a ConfigurationState,
}

impl<'a> ConfigView<'a> {
    pub(super) fn new(values: &'a ConfigurationState) -> Self {
        Self { values }
    }

    /// Rendered value when present; `None` for missing or empty text.
    pub(super) fn value(&self, name: &str) -> Option<String> {
        self.values.present(name)
    }

    /// Rendered value for a fixed slot; missing values leave the slot empty.
    pub(super) fn slot(&self, name: &str) -> String {
        self.values.get(name).map(FieldValue::to_string).unwrap_or_default()
    }

    /// Rendered value when truthy, otherwise the generator-level fallback.
    pub(super) fn or(&self, name: &str, fallback: &str) -> String {
        match self.values.get(name) {
            Some(value) if value.is_truthy() => value.to_string(),
            _ => fallback.to_string(),
        }
    }

    pub(super) fn truthy(&self, name: &str) -> bool {
        self.values.is_truthy(name)
    }

    /// True unless the field holds exactly `text`; a missing field differs.
    pub(super) fn differs(&self, name: &str, text: &str) -> bool {
        !self.values.text_equals(name, text)
    }

    pub(super) fn is(&self, name: &str, text: &str) -> bool {
        self.values.text_equals(name, text)
    }

    /// True unless the field holds the flag `false`.
    pub(super) fn not_disabled(&self, name: &str) -> bool {
        self.values.get(name) != Some(&FieldValue::Flag(false))
    }

    pub(super) fn proxy_external(&self) -> bool {
        self.is("M3U_PROXY_ENABLED", "external")
    }

    pub(super) fn redis_external(&self) -> bool {
        self.is("REDIS_MODE", "external")
    }

    pub(super) fn xtream_enabled(&self) -> bool {
        self.truthy("XTREAM_ONLY_ENABLED")
    }

    pub(super) fn image_tag(&self) -> String {
        self.or("IMAGE_TAG", DEFAULT_IMAGE_TAG)
    }

    pub(super) fn config_path(&self) -> String {
        self.or("CONFIG_PATH", DEFAULT_CONFIG_PATH)
    }

    pub(super) fn fpm_port(&self) -> String {
        self.or("FPMPORT", DEFAULT_FPM_PORT)
    }

    pub(super) fn proxy_published_port(&self) -> String {
        self.or("M3U_PROXY_PORT", DEFAULT_PROXY_PUBLISHED_PORT)
    }

    pub(super) fn redis_port(&self) -> String {
        self.or("REDIS_SERVER_PORT", DEFAULT_REDIS_PORT)
    }

    pub(super) fn proxy_log_level(&self) -> String {
        self.or("M3U_PROXY_LOG_LEVEL", DEFAULT_PROXY_LOG_LEVEL)
    }
}

/// One `- KEY=value` entry of a service's environment list.
pub(super) fn env_line(name: &str, value: &str) -> String {
    format!("      - {}={}", name, value)
}

/// Collects environment entries; an entry is kept only when its condition
/// holds and it has a value.
#[derive(Default)]
pub(super) struct EnvLines {
    lines: Vec<String>,
}

impl EnvLines {
    pub(super) fn add(&mut self, name: &str, value: Option<String>) {
        self.add_if(name, value, true);
    }

    pub(super) fn add_if(&mut self, name: &str, value: Option<String>, condition: bool) {
        if let Some(value) = value.filter(|v| condition && !v.is_empty()) {
            self.lines.push(env_line(name, &value));
        }
    }

    pub(super) fn add_flag(&mut self, name: &str, value: bool) {
        self.lines.push(env_line(name, &value.to_string()));
    }

    pub(super) fn add_text(&mut self, name: &str, value: &str) {
        self.add(name, Some(value.to_string()));
    }

    pub(super) fn render(self) -> String {
        self.lines.join("\n")
    }
}
