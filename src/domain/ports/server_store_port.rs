//! Server list persistence port.

use crate::domain::entities::ServerRecord;
use crate::domain::errors::StorageError;

/// Port for durable storage of the server list.
///
/// The list is always read and written as a whole.
pub trait ServerStorePort: Send + Sync {
    /// Loads the stored list.
    ///
    /// Missing or unparseable data yields an empty list.
    fn load(&self) -> Vec<ServerRecord>;

    /// Overwrites the stored list.
    ///
    /// # Errors
    /// Returns error if the list cannot be written.
    fn save(&self, servers: &[ServerRecord]) -> Result<(), StorageError>;
}
