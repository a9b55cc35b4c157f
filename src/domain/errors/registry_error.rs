//! Registry validation errors.

use thiserror::Error;

/// Reasons a registry mutation is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("server name must not be empty")]
    EmptyName,

    #[error("server url must not be empty")]
    EmptyUrl,
}

impl RegistryError {
    /// Validates a name/url pair, returning the trimmed values.
    ///
    /// # Errors
    /// Returns the first empty field.
    pub fn validate<'a>(name: &'a str, url: &'a str) -> Result<(&'a str, &'a str), Self> {
        let name = name.trim();
        let url = url.trim();

        if name.is_empty() {
            return Err(Self::EmptyName);
        }
        if url.is_empty() {
            return Err(Self::EmptyUrl);
        }

        Ok((name, url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims() {
        assert_eq!(
            RegistryError::validate("  Den ", " den.local "),
            Ok(("Den", "den.local"))
        );
    }

    #[test]
    fn test_validate_rejects_blank() {
        assert_eq!(
            RegistryError::validate("   ", "den.local"),
            Err(RegistryError::EmptyName)
        );
        assert_eq!(RegistryError::validate("Den", ""), Err(RegistryError::EmptyUrl));
    }
}
