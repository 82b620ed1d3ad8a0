pub mod credential;
pub mod settings;
