mod env;
mod prompter;
mod release_source;

pub use env::EnvVarGuard;
pub use prompter::{Answer, ScriptedPrompter};
pub use release_source::FakeReleaseSource;
