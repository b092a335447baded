pub mod env;
mod loader;

pub use env::{AppConfig, DirectoryConfig, SinkConfig};
pub use loader::load_config;
