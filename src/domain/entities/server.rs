//! Server record entity.

use std::fmt;

use serde::{Deserialize, Serialize};

const DEFAULT_SCHEME: &str = "https://";

/// Opaque identifier of a registered server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerId(String);

impl ServerId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ServerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ServerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Prefixes `https://` unless the address already starts with `http`.
#[must_use]
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{url}")
    }
}

/// A named endpoint the launcher can open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerRecord {
    id: ServerId,
    name: String,
    url: String,
    is_default: bool,
}

impl ServerRecord {
    /// Creates a record with a fresh id and a normalized url.
    #[must_use]
    pub fn new(name: impl Into<String>, url: &str, is_default: bool) -> Self {
        Self {
            id: ServerId::generate(),
            name: name.into(),
            url: normalize_url(url),
            is_default,
        }
    }

    /// Creates a record from already stored parts.
    #[must_use]
    pub fn from_parts(
        id: impl Into<ServerId>,
        name: impl Into<String>,
        url: impl Into<String>,
        is_default: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            is_default,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &ServerId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.is_default
    }

    /// Replaces name and url, keeping id and default flag.
    pub(crate) fn update(&mut self, name: impl Into<String>, url: &str) {
        self.name = name.into();
        self.url = normalize_url(url);
    }

    pub(crate) const fn set_default(&mut self, is_default: bool) {
        self.is_default = is_default;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("192.168.1.50:3000", "https://192.168.1.50:3000" ; "bare_host_port")]
    #[test_case("karaoke.local", "https://karaoke.local" ; "bare_hostname")]
    #[test_case("http://10.0.0.2", "http://10.0.0.2" ; "keeps_http")]
    #[test_case("https://karaoke.example", "https://karaoke.example" ; "keeps_https")]
    fn test_normalize_url(input: &str, expected: &str) {
        assert_eq!(normalize_url(input), expected);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(ServerId::generate(), ServerId::generate());
    }

    #[test]
    fn test_serialized_field_names() {
        let record = ServerRecord::from_parts("abc", "Den", "https://den.local", true);
        let json = serde_json::to_string(&record).unwrap();

        assert_eq!(
            json,
            r#"{"id":"abc","name":"Den","url":"https://den.local","isDefault":true}"#
        );
    }

    #[test]
    fn test_update_keeps_identity() {
        let mut record = ServerRecord::from_parts("abc", "Den", "https://den.local", true);
        record.update("Basement", "10.0.0.9:8080");

        assert_eq!(record.id().as_str(), "abc");
        assert_eq!(record.name(), "Basement");
        assert_eq!(record.url(), "https://10.0.0.9:8080");
        assert!(record.is_default());
    }
}
