//! Shared Module
//!
//! Platform-agnostic pieces used by both the browser build and the host-side
//! page model: invite validation, configuration and errors.

/// Invite code validation
pub mod invite;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use invite::{validate_invite, validate_invite_value, InviteCode, INVITE_BASE_URL};
pub use error::JoinError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
