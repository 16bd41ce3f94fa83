pub mod defaults;
pub mod generate;
pub mod releases;
pub mod schema;
pub mod wizard;
