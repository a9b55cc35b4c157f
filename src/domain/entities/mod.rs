//! Domain entity definitions.

mod sandbox;
mod server;

pub use sandbox::SandboxCapabilities;
pub use server::{ServerId, ServerRecord, normalize_url};
