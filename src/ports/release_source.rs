use crate::domain::{AppError, ReleaseChannel};

/// Port for reading a release channel's version config file.
pub trait ReleaseSource {
    /// Raw body of the channel's config file.
    fn fetch_version_config(&self, channel: ReleaseChannel) -> Result<String, AppError>;
}
