//! Error types for dirpager
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for dirpager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Search Spec Errors
    // ============================================================================
    /// Scope was neither of the two recognized values
    #[error("Unrecognized search scope: '{scope}' (expected 'subtree' or 'onelevel')")]
    InvalidScope {
        /// The rejected scope string
        scope: String,
    },

    /// Alias-dereference policy name was not recognized
    #[error("Unrecognized alias dereference policy: '{policy}'")]
    InvalidDerefPolicy {
        /// The rejected policy string
        policy: String,
    },

    /// Search filter was empty at spec construction
    #[error("Search filter must not be empty")]
    EmptyFilter,

    /// A YAML spec definition failed to parse
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Paging Errors
    // ============================================================================
    /// The paging control could not be established, or the server omitted
    /// the paging response from a fetched page
    #[error("Failed to establish paging control: {message}")]
    PagingSetup {
        /// What went wrong
        message: String,
    },

    // ============================================================================
    // Collaborator Errors
    // ============================================================================
    /// Transport-level failure reported by the directory client
    #[error("Transport error: {message}")]
    Transport {
        /// What went wrong
        message: String,
    },

    /// Protocol-level failure reported by the directory client
    #[error("Directory protocol error: {message}")]
    Protocol {
        /// What went wrong
        message: String,
    },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Catch-all with a plain message, used by [`ResultExt`]
    #[error("{0}")]
    Other(String),

    /// Escape hatch for directory client implementations
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an invalid-scope error
    pub fn invalid_scope(scope: impl Into<String>) -> Self {
        Self::InvalidScope {
            scope: scope.into(),
        }
    }

    /// Create an invalid-deref-policy error
    pub fn invalid_deref(policy: impl Into<String>) -> Self {
        Self::InvalidDerefPolicy {
            policy: policy.into(),
        }
    }

    /// Create a paging-setup error
    pub fn paging_setup(message: impl Into<String>) -> Self {
        Self::PagingSetup {
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a protocol error
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }
}

/// Result type alias for dirpager
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_scope("base");
        assert_eq!(
            err.to_string(),
            "Unrecognized search scope: 'base' (expected 'subtree' or 'onelevel')"
        );

        let err = Error::paging_setup("control rejected");
        assert_eq!(
            err.to_string(),
            "Failed to establish paging control: control rejected"
        );

        let err = Error::EmptyFilter;
        assert_eq!(err.to_string(), "Search filter must not be empty");
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::transport("connection reset"));
        let with_context = result.context("fetching page 2");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("fetching page 2: Transport error: connection reset"));
    }
}
