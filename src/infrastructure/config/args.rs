use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Screen to open on startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StartScreen {
    #[default]
    Home,
    Studio,
    Campaigns,
    Personas,
    CreatePersona,
}

#[derive(Debug, Parser)]
#[command(
    name = "digi-studio",
    version,
    about = "Terminal studio for DigiInfluencer personas, campaigns and assets",
    long_about = None
)]
pub struct CliArgs {
    /// Studio backend base URL.
    #[arg(long, value_name = "URL", env = "DIGI_STUDIO_API_URL")]
    pub api_url: Option<String>,

    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Screen shown on startup.
    #[arg(long, value_enum)]
    pub screen: Option<StartScreen>,

    /// Persona preselected in the studio. Opens the studio unless --screen is given.
    #[arg(long, value_name = "ID")]
    pub persona: Option<String>,

    /// Directory for downloaded assets.
    #[arg(long, value_name = "PATH")]
    pub download_dir: Option<PathBuf>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}
