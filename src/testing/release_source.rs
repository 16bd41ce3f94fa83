use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::{AppError, ReleaseChannel};
use crate::ports::ReleaseSource;

/// Release source answering from canned bodies; channels without one fail.
#[derive(Debug, Default)]
pub struct FakeReleaseSource {
    bodies: HashMap<&'static str, String>,
    pub requested: RefCell<Vec<ReleaseChannel>>,
}

impl FakeReleaseSource {
    pub fn with_body(mut self, channel: ReleaseChannel, body: &str) -> Self {
        self.bodies.insert(channel.branch(), body.to_string());
        self
    }
}

impl ReleaseSource for FakeReleaseSource {
    fn fetch_version_config(&self, channel: ReleaseChannel) -> Result<String, AppError> {
        self.requested.borrow_mut().push(channel);
        self.bodies.get(channel.branch()).cloned().ok_or_else(|| AppError::ReleaseFetch {
            channel: channel.name().to_string(),
            message: "connection refused".to_string(),
        })
    }
}
