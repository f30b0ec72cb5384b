//! Core error types for anchor interception.
//!
//! A missing scroll target is never an error; these variants only cover
//! host capabilities that can actually fail.

use thiserror::Error;

/// Core error type for smooth-anchor operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("host capability unavailable: {what}")]
    HostUnavailable { what: String },

    #[error("failed to query '{selector}': {reason}")]
    QueryFailed { selector: String, reason: String },

    #[error("failed to register click listener: {reason}")]
    ListenerFailed { reason: String },

    #[error("failed to update location fragment '{fragment}': {reason}")]
    HistoryFailed { fragment: String, reason: String },
}

impl Error {
    /// Create an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create a host-unavailable error (no window, no document, no history).
    pub fn host_unavailable(what: impl Into<String>) -> Self {
        Self::HostUnavailable { what: what.into() }
    }

    /// Create a selector query error.
    pub fn query_failed(selector: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::QueryFailed {
            selector: selector.into(),
            reason: reason.into(),
        }
    }

    /// Create a listener registration error.
    pub fn listener_failed(reason: impl Into<String>) -> Self {
        Self::ListenerFailed {
            reason: reason.into(),
        }
    }

    /// Create a history update error.
    pub fn history_failed(fragment: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::HistoryFailed {
            fragment: fragment.into(),
            reason: reason.into(),
        }
    }
}

/// The standard Result type for smooth-anchor operations.
pub type Result<T> = std::result::Result<T, Error>;
