use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use digi_studio::infrastructure::{
    AppConfig, CliArgs, FileAssetSink, StorageManager, StudioApiClient,
};
use digi_studio::presentation::{App, BackendPorts, Route};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();
    let args = CliArgs::parse();

    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn create_app(config: AppConfig) -> Result<App> {
    let client = StudioApiClient::with_base_url(
        config.api.base_url.as_str(),
        Duration::from_secs(config.api.timeout_secs),
    )?;
    let sink = config
        .ui
        .download_dir
        .map_or_else(FileAssetSink::default_location, FileAssetSink::new);

    info!(
        api = %client.base_url(),
        downloads = %sink.dir().display(),
        "Backend configured"
    );

    let backend_label = client.base_url().to_string();
    let ports = BackendPorts::shared(Arc::new(client), Arc::new(sink));
    let start = Route::initial(config.start_screen, config.preselected_persona);

    Ok(App::new(
        ports,
        start,
        Duration::from_secs(config.ui.notification_duration),
    )
    .with_backend_label(backend_label))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = load_config()?;
    init_logging(&config)?;

    info!(version = digi_studio::VERSION, "Starting {}", digi_studio::NAME);

    let app = create_app(config)?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
