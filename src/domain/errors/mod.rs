//! Domain error types.

mod browser_error;
mod registry_error;
mod storage_error;

pub use browser_error::BrowserError;
pub use registry_error::RegistryError;
pub use storage_error::StorageError;
