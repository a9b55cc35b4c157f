use crate::domain::errors::BrowserError;

/// Port for opening a url outside the launcher.
#[cfg_attr(test, mockall::automock)]
pub trait BrowserPort: Send + Sync {
    /// Opens `url` in the system browser.
    ///
    /// # Errors
    /// Returns error if no browser could be launched.
    fn open(&self, url: &str) -> Result<(), BrowserError>;
}
