//! External browser error types.

use thiserror::Error;

/// Failure to hand a url to the system browser.
#[derive(Debug, Error)]
#[error("failed to open {url} in browser: {message}")]
pub struct BrowserError {
    pub url: String,
    pub message: String,
}

impl BrowserError {
    #[must_use]
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            message: message.into(),
        }
    }
}
