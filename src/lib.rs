//! Karaoke Launcher - a TV-remote friendly terminal launcher for Karaoke Eternal servers.
//!
//! Keeps a persisted list of named server endpoints and opens one at a time
//! in a full-screen viewer with auto-hiding controls.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing services, use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for storage, content and the system browser.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "karaoke-launcher";
