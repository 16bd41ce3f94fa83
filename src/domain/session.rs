use crate::domain::manifest::{self, GeneratedOutput, ReverseProxyConfig};
use crate::domain::schema::{self, FieldSpec, SectionSpec};
use crate::domain::values::{ConfigurationState, FieldValue};
use crate::domain::{AppError, DeploymentType};

/// The state a wizard run edits: one deployment type and its values.
///
/// Switching the deployment type or resetting discards every edit and starts
/// over from that type's defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSession {
    deployment: DeploymentType,
    values: ConfigurationState,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new(DeploymentType::default())
    }
}

impl WizardSession {
    pub fn new(deployment: DeploymentType) -> Self {
        Self { deployment, values: schema::defaults_for(deployment) }
    }

    pub fn deployment(&self) -> DeploymentType {
        self.deployment
    }

    pub fn values(&self) -> &ConfigurationState {
        &self.values
    }

    pub fn switch_deployment(&mut self, deployment: DeploymentType) {
        tracing::debug!(from = %self.deployment, to = %deployment, "switching deployment type");
        *self = Self::new(deployment);
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.deployment);
    }

    /// Parse `raw` according to the field's kind and store it.
    pub fn set(&mut self, name: &str, raw: &str) -> Result<(), AppError> {
        let field = schema::require_field(name)?;
        let value = field.parse_value(raw)?;
        self.values.set(field.name, value);
        Ok(())
    }

    /// Drop the field's value so it counts as undefined.
    pub fn clear(&mut self, name: &str) -> Result<(), AppError> {
        let field = schema::require_field(name)?;
        self.values.remove(field.name);
        Ok(())
    }

    /// Store an already typed value. The field must exist in the schema.
    pub fn set_value(&mut self, name: &str, value: FieldValue) -> Result<(), AppError> {
        let field = schema::require_field(name)?;
        self.values.set(field.name, value);
        Ok(())
    }

    pub fn visible_sections(&self) -> Vec<(&'static SectionSpec, Vec<&'static FieldSpec>)> {
        schema::visible_sections(self.deployment, &self.values)
    }

    pub fn missing_required(&self) -> Vec<&'static str> {
        schema::missing_required(self.deployment, &self.values)
    }

    pub fn output(&self) -> GeneratedOutput {
        manifest::generate(self.deployment, &self.values)
    }

    pub fn reverse_proxy_config(&self) -> Option<ReverseProxyConfig> {
        manifest::reverse_proxy_config(self.deployment, &self.values)
    }
}
