//! Add/edit form submission.

use crate::domain::entities::{ServerId, ServerRecord};

/// Values submitted by the add/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDraft {
    /// Record being edited; `None` when adding.
    pub id: Option<ServerId>,
    pub name: String,
    pub url: String,
}

impl ServerDraft {
    /// Creates a draft for a new record.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            url: url.into(),
        }
    }

    /// Creates a draft prefilled from an existing record.
    #[must_use]
    pub fn from_record(record: &ServerRecord) -> Self {
        Self {
            id: Some(record.id().clone()),
            name: record.name().to_string(),
            url: record.url().to_string(),
        }
    }

    #[must_use]
    pub const fn is_edit(&self) -> bool {
        self.id.is_some()
    }
}
