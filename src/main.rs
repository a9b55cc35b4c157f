use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use karaoke_launcher::application::services::ServerRegistry;
use karaoke_launcher::infrastructure::{
    AppConfig, CliArgs, HttpContentHost, JsonServerStore, StorageManager, SystemBrowser,
};
use karaoke_launcher::presentation::widgets::Banner;
use karaoke_launcher::presentation::{App, Theme};

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

fn load_config() -> Result<(AppConfig, StorageManager)> {
    let args = CliArgs::parse();
    let mut storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    if let Some(data_dir) = &config.data_dir {
        storage = storage.with_data_dir(data_dir.clone());
    }

    Ok((config, storage))
}

fn create_app(config: &AppConfig, storage: &StorageManager) -> App {
    let store = Arc::new(JsonServerStore::new(storage.data_dir()));
    info!(path = %store.path().display(), "Using server list");

    let registry = ServerRegistry::load(store, config.registry.on_remove());
    let content_host = Arc::new(HttpContentHost::new(config.viewer.load_timeout()));
    let browser = Arc::new(SystemBrowser::new());

    App::new(registry, content_host, browser, config.viewer.options())
        .with_theme(Theme::new(&config.theme.accent_color))
        .with_banner(Banner::load(&storage.banner_path()))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let (config, storage) = load_config()?;
    init_logging(&config)?;

    info!(version = karaoke_launcher::VERSION, "Starting {}", karaoke_launcher::NAME);

    let app = create_app(&config, &storage);

    let mut terminal = ratatui::init();
    if config.mouse {
        crossterm::execute!(std::io::stdout(), EnableMouseCapture)?;
    }

    let result = app.run(&mut terminal, config.launch_default).await;

    if config.mouse {
        crossterm::execute!(std::io::stdout(), DisableMouseCapture)?;
    }
    ratatui::restore();

    result
}
