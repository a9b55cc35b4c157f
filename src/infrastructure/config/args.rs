use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "karaoke-launcher",
    version,
    about = "A TV-remote friendly launcher for Karaoke Eternal servers",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Directory holding the saved server list.
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, env = "KARAOKE_LAUNCHER_LOG_LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Enable mouse support.
    #[arg(long)]
    pub mouse: Option<bool>,

    /// Open the default server right away.
    #[arg(long)]
    pub launch_default: bool,

    /// Milliseconds of inactivity before the viewer overlay hides.
    #[arg(long, value_name = "MS")]
    pub chrome_timeout_ms: Option<u64>,

    /// Seconds to wait for a server page to load.
    #[arg(long, value_name = "SECS")]
    pub load_timeout_secs: Option<u64>,

    /// Show a distinct failed state when a server page cannot be loaded.
    #[arg(long)]
    pub distinguish_load_failure: Option<bool>,

    /// Promote the first remaining server when the default is deleted.
    #[arg(long)]
    pub promote_default_on_remove: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
