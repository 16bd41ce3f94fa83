mod prompter;
mod release_source;

pub use prompter::Prompter;
pub use release_source::ReleaseSource;
