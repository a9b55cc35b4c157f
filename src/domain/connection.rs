//! Viewer connection state and load signals.

/// Connection state of a viewer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Connecting,
    Connected,
    Failed,
}

impl ConnectionState {
    /// Whether the loading indicator should be shown.
    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Connecting)
    }
}

/// Signal reported by the content host once a load settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded {
        status: u16,
        title: Option<String>,
    },
    Failed {
        reason: String,
    },
}

impl LoadOutcome {
    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_connecting_is_loading() {
        assert!(ConnectionState::Connecting.is_loading());
        assert!(!ConnectionState::Connected.is_loading());
        assert!(!ConnectionState::Failed.is_loading());
    }
}
