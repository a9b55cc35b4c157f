mod browser_port;
mod content_host_port;
mod server_store_port;

pub use browser_port::BrowserPort;
pub use content_host_port::ContentHostPort;
pub use server_store_port::ServerStorePort;

#[cfg(test)]
pub use browser_port::MockBrowserPort;

#[cfg(test)]
pub mod mocks {
    pub use super::content_host_port::mock::StaticContentHost;
    pub use super::server_store_port::mock::MemoryServerStore;
}
