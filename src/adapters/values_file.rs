//! Values files: flat `NAME = value` mappings in TOML, YAML or JSON.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{AppError, ConfigurationState};

/// Serialization format of a values file, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuesFormat {
    Toml,
    Yaml,
    Json,
}

impl ValuesFormat {
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let extension = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("toml") => Ok(ValuesFormat::Toml),
            Some("yaml") | Some("yml") => Ok(ValuesFormat::Yaml),
            Some("json") => Ok(ValuesFormat::Json),
            _ => Err(AppError::UnsupportedValuesFormat(path.display().to_string())),
        }
    }

    /// Render a configuration in this format; the result loads back unchanged.
    pub fn render(&self, values: &ConfigurationState) -> Result<String, AppError> {
        let rendered = match self {
            ValuesFormat::Toml => toml::to_string(values).map_err(|e| e.to_string()),
            ValuesFormat::Yaml => serde_yaml::to_string(values).map_err(|e| e.to_string()),
            ValuesFormat::Json => serde_json::to_string_pretty(values)
                .map(|json| json + "\n")
                .map_err(|e| e.to_string()),
        };
        rendered.map_err(|details| AppError::ParseError { what: "configuration".into(), details })
    }

    fn parse(&self, content: &str) -> Result<BTreeMap<String, RawValue>, String> {
        match self {
            ValuesFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            ValuesFormat::Yaml if content.trim().is_empty() => Ok(BTreeMap::new()),
            ValuesFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            ValuesFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// A scalar as written in a values file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Null,
    Flag(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawValue {
    /// `None` for a null entry.
    fn into_raw(self) -> Option<String> {
        match self {
            RawValue::Null => None,
            RawValue::Flag(b) => Some(b.to_string()),
            RawValue::Integer(n) => Some(n.to_string()),
            RawValue::Float(n) => Some(n.to_string()),
            RawValue::Text(s) => Some(s),
        }
    }
}

/// Read a values file into `(name, raw value)` pairs, sorted by name.
///
/// Values are returned as raw text; the schema decides how to parse them.
/// A null entry (`KEY: ~`, `"KEY": null`) comes back as `None`.
pub fn load_values_file(path: &Path) -> Result<Vec<(String, Option<String>)>, AppError> {
    let format = ValuesFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let entries = format.parse(&content).map_err(|details| AppError::ParseError {
        what: format!("values file {}", path.display()),
        details,
    })?;
    tracing::debug!(path = %path.display(), entries = entries.len(), "loaded values file");
    Ok(entries.into_iter().map(|(name, value)| (name, value.into_raw())).collect())
}

/// Split a `NAME=VALUE` override. The value may be empty or contain `=`.
pub fn parse_override(raw: &str) -> Result<(String, String), AppError> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(AppError::InvalidOverride(raw.to_string())),
    }
}
