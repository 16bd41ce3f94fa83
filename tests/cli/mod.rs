mod defaults;
mod generate;
mod releases;
mod schema;
mod token;
mod types;
mod wizard;
