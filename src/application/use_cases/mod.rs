//! Use case implementations.

mod save_server_use_case;

pub use save_server_use_case::{SaveOutcome, SaveServerUseCase};
