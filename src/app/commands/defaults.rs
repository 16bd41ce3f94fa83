use crate::adapters::values_file::ValuesFormat;
use crate::domain::schema::defaults_for;
use crate::domain::{AppError, DeploymentType};

/// Defaults of a deployment type, rendered as a values file.
pub fn execute(deployment: DeploymentType, format: ValuesFormat) -> Result<String, AppError> {
    format.render(&defaults_for(deployment))
}
