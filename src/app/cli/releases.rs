//! Releases command implementation.

use crate::app::api;
use crate::domain::AppError;

pub fn run_releases(base_url: Option<&str>) -> Result<(), AppError> {
    let releases = api::releases(base_url)?;

    for release in releases {
        println!(
            "{:<14}{:<14}{:<14}{}",
            release.channel.name(),
            release.version.to_string(),
            release.channel.status(),
            release.channel.branch_url()
        );
        println!("{:<14}{}", "", release.channel.description());
    }
    Ok(())
}
