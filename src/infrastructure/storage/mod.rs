//! Server list persistence adapters.

mod json_server_store;

pub use json_server_store::{JsonServerStore, SERVERS_STORAGE_KEY};
