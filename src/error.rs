//! Error types for the scope inspector
//!
//! The matching and indexing core never fails; every error here belongs to
//! the boundary with the external authorization service or to navigation
//! token parsing.

use thiserror::Error;

/// Scope inspector errors
#[derive(Debug, Error)]
pub enum InspectorError {
    /// Listing roles or clients failed; any previously loaded state for
    /// the failed side has been discarded
    #[error("Failed to load {what}: {reason}")]
    LoadFailure {
        /// Which listing failed ("roles" or "clients")
        what: &'static str,
        /// Underlying service failure
        reason: String,
    },

    /// A delete issued against the authorization service failed
    #[error("Failed to delete {what}: {reason}")]
    MutationFailure {
        /// Entity token the mutation targeted
        what: String,
        /// Underlying service failure
        reason: String,
    },

    /// Navigation token did not carry a `role:` or `client:` tag
    #[error("Invalid entity reference: {0}")]
    InvalidEntityRef(String),

    /// Match mode label was not one of the three known modes
    #[error("Unknown match mode: {0}")]
    UnknownMatchMode(String),
}

/// Result type for inspector operations
pub type Result<T> = std::result::Result<T, InspectorError>;
