//! Add/edit submission use case.

use tracing::debug;

use crate::application::dto::ServerDraft;
use crate::application::services::ServerRegistry;
use crate::domain::entities::{ServerId, ServerRecord};
use crate::domain::errors::RegistryError;

/// Result of applying a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Added(ServerRecord),
    Updated(ServerId),
    /// The edited record no longer exists.
    Missing(ServerId),
}

/// Applies form drafts to the registry.
pub struct SaveServerUseCase;

impl SaveServerUseCase {
    /// Adds or edits depending on whether the draft carries an id.
    ///
    /// # Errors
    /// Returns error if name or url is empty; the registry is unchanged.
    pub fn execute(
        registry: &mut ServerRegistry,
        draft: ServerDraft,
    ) -> Result<SaveOutcome, RegistryError> {
        debug!(edit = draft.is_edit(), "Applying server draft");

        match draft.id {
            Some(id) => {
                if registry.edit(&id, &draft.name, &draft.url)? {
                    Ok(SaveOutcome::Updated(id))
                } else {
                    Ok(SaveOutcome::Missing(id))
                }
            }
            None => registry
                .add(&draft.name, &draft.url)
                .map(SaveOutcome::Added),
        }
    }
}
