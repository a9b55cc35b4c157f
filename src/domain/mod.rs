//! Domain layer with core entities, errors and port definitions.

/// Viewer connection states and load signals.
pub mod connection;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Transient user notifications.
pub mod notification;
/// Port definitions.
pub mod ports;

pub use connection::{ConnectionState, LoadOutcome};
pub use entities::{SandboxCapabilities, ServerId, ServerRecord};
pub use errors::{BrowserError, RegistryError, StorageError};
pub use notification::{Notification, NotificationLevel};
pub use ports::{BrowserPort, ContentHostPort, ServerStorePort};
