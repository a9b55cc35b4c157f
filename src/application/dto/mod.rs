//! Data transfer objects.

mod server_draft;

pub use server_draft::ServerDraft;
