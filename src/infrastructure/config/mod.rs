//! Application configuration.

pub mod app_config;
pub mod args;
pub mod storage;

pub use app_config::{ApiConfig, AppConfig, LogLevel, UiConfig};
pub use args::{CliArgs, StartScreen};
pub use storage::{ConfigError, StorageManager};
