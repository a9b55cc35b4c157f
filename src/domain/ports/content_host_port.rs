//! Embedded content host port.

use async_trait::async_trait;

use crate::domain::connection::LoadOutcome;
use crate::domain::entities::SandboxCapabilities;

/// Port for the surface that loads a server's page.
///
/// Only two signals are observed from it: loaded or failed.
#[async_trait]
pub trait ContentHostPort: Send + Sync {
    /// Loads `url` within the given sandbox and reports the outcome.
    async fn load(&self, url: &str, sandbox: SandboxCapabilities) -> LoadOutcome;
}
