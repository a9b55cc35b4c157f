//! In-memory server collection with persisted mutations.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::entities::{ServerId, ServerRecord};
use crate::domain::errors::RegistryError;
use crate::domain::ports::ServerStorePort;

/// What happens to the default flag when the default record is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultOnRemove {
    /// Leave the collection without a default.
    #[default]
    Preserve,
    /// Promote the first remaining record.
    PromoteFirst,
}

/// Ordered collection of server records.
///
/// All default-flag transitions go through `add`, `set_default` and
/// `remove`; at most one record is default at any time. Every successful
/// mutation writes the whole collection to the store.
pub struct ServerRegistry {
    servers: Vec<ServerRecord>,
    store: Arc<dyn ServerStorePort>,
    on_remove: DefaultOnRemove,
}

impl ServerRegistry {
    /// Loads the registry from `store`.
    #[must_use]
    pub fn load(store: Arc<dyn ServerStorePort>, on_remove: DefaultOnRemove) -> Self {
        let mut servers = store.load();
        let repaired = Self::repair_defaults(&mut servers);
        info!(count = servers.len(), "Server registry loaded");

        let registry = Self {
            servers,
            store,
            on_remove,
        };
        if repaired {
            registry.persist();
        }
        registry
    }

    #[must_use]
    pub fn servers(&self) -> &[ServerRecord] {
        &self.servers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.servers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &ServerId) -> Option<&ServerRecord> {
        self.servers.iter().find(|s| s.id() == id)
    }

    #[must_use]
    pub fn position(&self, id: &ServerId) -> Option<usize> {
        self.servers.iter().position(|s| s.id() == id)
    }

    #[must_use]
    pub fn default_server(&self) -> Option<&ServerRecord> {
        self.servers.iter().find(|s| s.is_default())
    }

    #[must_use]
    pub const fn on_remove(&self) -> DefaultOnRemove {
        self.on_remove
    }

    /// Appends a new record; the first record of an empty registry is default.
    ///
    /// # Errors
    /// Returns error if name or url is empty.
    pub fn add(&mut self, name: &str, url: &str) -> Result<ServerRecord, RegistryError> {
        let (name, url) = RegistryError::validate(name, url)?;

        let record = ServerRecord::new(name, url, self.servers.is_empty());
        info!(id = %record.id(), name = %record.name(), url = %record.url(), "Server added");

        self.servers.push(record.clone());
        self.persist();
        Ok(record)
    }

    /// Replaces name and url of the record with `id`.
    ///
    /// Returns `Ok(false)` when no record matches.
    ///
    /// # Errors
    /// Returns error if name or url is empty.
    pub fn edit(&mut self, id: &ServerId, name: &str, url: &str) -> Result<bool, RegistryError> {
        let (name, url) = RegistryError::validate(name, url)?;

        let Some(record) = self.servers.iter_mut().find(|s| s.id() == id) else {
            debug!(id = %id, "Edit ignored, unknown server");
            return Ok(false);
        };

        record.update(name, url);
        info!(id = %id, name = %record.name(), url = %record.url(), "Server edited");
        self.persist();
        Ok(true)
    }

    /// Deletes the record with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &ServerId) -> bool {
        let Some(index) = self.position(id) else {
            debug!(id = %id, "Remove ignored, unknown server");
            return false;
        };

        let removed = self.servers.remove(index);
        info!(id = %id, was_default = removed.is_default(), "Server removed");

        if removed.is_default() && self.on_remove == DefaultOnRemove::PromoteFirst {
            if let Some(first) = self.servers.first_mut() {
                first.set_default(true);
                info!(id = %first.id(), "Promoted server to default");
            }
        }

        self.persist();
        true
    }

    /// Makes `id` the only default record. Unknown ids leave flags untouched.
    pub fn set_default(&mut self, id: &ServerId) -> bool {
        if self.get(id).is_none() {
            debug!(id = %id, "Set default ignored, unknown server");
            return false;
        }

        for server in &mut self.servers {
            let is_target = server.id() == id;
            server.set_default(is_target);
        }

        info!(id = %id, "Default server changed");
        self.persist();
        true
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.servers) {
            error!(error = %e, "Failed to persist server list");
        }
    }

    /// Clears extra default flags from stored data, keeping the first one.
    fn repair_defaults(servers: &mut [ServerRecord]) -> bool {
        let mut seen = false;
        let mut repaired = false;
        for server in servers.iter_mut().filter(|s| s.is_default()) {
            if seen {
                server.set_default(false);
                repaired = true;
            }
            seen = true;
        }
        if repaired {
            warn!("Stored server list had several defaults, kept the first");
        }
        repaired
    }
}
