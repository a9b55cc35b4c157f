mod server_registry;
mod viewer_session;

pub use server_registry::{DefaultOnRemove, ServerRegistry};
pub use viewer_session::{
    DEFAULT_CHROME_TIMEOUT, SessionControl, SessionId, ViewerEvent, ViewerOptions, ViewerSession,
};
