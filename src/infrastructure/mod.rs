//! Infrastructure layer with adapters for files, HTTP and the system browser.

/// System browser launching.
pub mod browser;
/// Application configuration.
pub mod config;
/// Embedded content hosts.
pub mod content;
/// Server list persistence.
pub mod storage;

pub use browser::SystemBrowser;
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use content::HttpContentHost;
pub use storage::{JsonServerStore, SERVERS_STORAGE_KEY};
