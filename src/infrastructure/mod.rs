//! Infrastructure layer with external service adapters.

/// Studio backend REST client.
pub mod api;
/// Application configuration.
pub mod config;
/// Local asset downloads.
pub mod downloads;

pub use api::{DEFAULT_API_URL, StudioApiClient};
pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StartScreen, StorageManager};
pub use downloads::FileAssetSink;
