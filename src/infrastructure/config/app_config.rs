//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::application::services::{DefaultOnRemove, ViewerOptions};

pub(crate) const APP_NAME: &str = "karaoke-launcher";
pub(crate) const APP_QUALIFIER: &str = "org";
pub(crate) const APP_ORGANIZATION: &str = "karaoke-eternal";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and CLI overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Directory holding the server list.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Enable mouse support.
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Open the default server immediately on start.
    #[serde(default)]
    pub launch_default: bool,

    /// Viewer configuration.
    #[serde(default)]
    pub viewer: ViewerConfig,

    /// Server list configuration.
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Viewer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Milliseconds without activity before the overlay hides.
    #[serde(default = "default_chrome_timeout_ms")]
    pub chrome_timeout_ms: u64,

    /// Seconds to wait for the page before giving up.
    #[serde(default = "default_load_timeout_secs")]
    pub load_timeout_secs: u64,

    /// Show a distinct failed state when the page cannot be loaded.
    #[serde(default)]
    pub distinguish_load_failure: bool,
}

impl ViewerConfig {
    #[must_use]
    pub const fn load_timeout(&self) -> Duration {
        Duration::from_secs(self.load_timeout_secs)
    }

    #[must_use]
    pub const fn options(&self) -> ViewerOptions {
        ViewerOptions {
            chrome_timeout: Duration::from_millis(self.chrome_timeout_ms),
            distinguish_load_failure: self.distinguish_load_failure,
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            chrome_timeout_ms: default_chrome_timeout_ms(),
            load_timeout_secs: default_load_timeout_secs(),
            distinguish_load_failure: false,
        }
    }
}

/// Server list configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Make the first remaining server default when the default is deleted.
    #[serde(default)]
    pub promote_default_on_remove: bool,
}

impl RegistryConfig {
    #[must_use]
    pub const fn on_remove(&self) -> DefaultOnRemove {
        if self.promote_default_on_remove {
            DefaultOnRemove::PromoteFirst
        } else {
            DefaultOnRemove::Preserve
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

fn default_accent_color() -> String {
    "Blue".to_string()
}

fn default_true() -> bool {
    true
}

const fn default_chrome_timeout_ms() -> u64 {
    3000
}

const fn default_load_timeout_secs() -> u64 {
    15
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(data_dir) = args.data_dir {
            self.data_dir = Some(data_dir);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(mouse) = args.mouse {
            self.mouse = mouse;
        }
        if args.launch_default {
            self.launch_default = true;
        }
        if let Some(timeout) = args.chrome_timeout_ms {
            self.viewer.chrome_timeout_ms = timeout;
        }
        if let Some(timeout) = args.load_timeout_secs {
            self.viewer.load_timeout_secs = timeout;
        }
        if let Some(distinguish) = args.distinguish_load_failure {
            self.viewer.distinguish_load_failure = distinguish;
        }
        if let Some(promote) = args.promote_default_on_remove {
            self.registry.promote_default_on_remove = promote;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("karaoke-launcher.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            data_dir: None,
            log_level: LogLevel::Info,
            mouse: true,
            launch_default: false,
            viewer: ViewerConfig::default(),
            registry: RegistryConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}
