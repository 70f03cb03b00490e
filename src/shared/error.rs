//! Shared Error Types
//!
//! This module defines the error type used by both the host-side page model
//! and the browser build. None of these errors ever reach the page visitor:
//! the initializer logs them and leaves the page untouched.
//!
//! # Error Categories
//!
//! - `MissingElements` - The host page lacks one of the required elements
//! - `Dom` - A DOM call (class list or attribute write) failed
//! - `Url` - The join link could not be built
//!
//! # Usage
//!
//! ```rust
//! use community_join::shared::error::JoinError;
//!
//! let error = JoinError::missing(vec!["join-btn"]);
//! assert!(error.to_string().contains("join-btn"));
//! ```
use thiserror::Error;

/// Errors raised while preparing or updating the page
#[derive(Debug, Error, Clone, PartialEq)]
pub enum JoinError {
    /// One or more required elements are absent from the page
    #[error("Missing DOM elements: {}", .ids.join(", "))]
    MissingElements {
        /// Identifiers that could not be found
        ids: Vec<&'static str>,
    },

    /// A DOM operation failed
    #[error("DOM error: {message}")]
    Dom {
        /// Human-readable error message
        message: String,
    },

    /// The join link is not a valid URL
    #[error("Invalid join link: {0}")]
    Url(#[from] url::ParseError),
}

impl JoinError {
    /// Create a missing-elements error
    pub fn missing(ids: Vec<&'static str>) -> Self {
        Self::MissingElements { ids }
    }

    /// Create a new DOM error
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom {
            message: message.into(),
        }
    }
}
