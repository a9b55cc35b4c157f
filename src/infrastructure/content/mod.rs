//! Embedded content host adapters.

mod http_content_host;

pub use http_content_host::HttpContentHost;
