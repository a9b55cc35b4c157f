//! Application layer with the registry, viewer sessions and use cases.

/// Data transfer objects.
pub mod dto;
/// Stateful application services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::ServerDraft;
pub use services::{DefaultOnRemove, ServerRegistry, ViewerSession};
pub use use_cases::{SaveOutcome, SaveServerUseCase};
