//! System browser adapter.

use tracing::{info, warn};

use crate::domain::errors::BrowserError;
use crate::domain::ports::BrowserPort;

/// Opens urls with the platform's default browser.
#[derive(Debug, Clone, Default)]
pub struct SystemBrowser;

impl SystemBrowser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl BrowserPort for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        match opener::open_browser(url) {
            Ok(()) => {
                info!(url = %url, "Opened url in system browser");
                Ok(())
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Failed to open system browser");
                Err(BrowserError::new(url, e.to_string()))
            }
        }
    }
}
