pub mod dialoguer_prompter;
pub mod release_http;
pub mod values_file;
