//! Application configuration module
//!
//! The page reads exactly two settings, an optional invite and a development
//! flag. They are edited in `join.toml` at the crate root, embedded at compile
//! time and parsed once into a process-wide [`AppConfig`].

use std::sync::LazyLock;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::shared::invite::{validate_invite_value, InviteCode};

/// Settings file compiled into the crate
const EMBEDDED_CONFIG: &str = include_str!("../../../join.toml");

static GLOBAL_CONFIG: LazyLock<AppConfig> = LazyLock::new(|| match AppConfig::embedded() {
    Ok(config) => config,
    Err(err) => {
        tracing::error!(error = %err, "embedded join.toml unreadable, using defaults");
        AppConfig::default()
    }
});

/// Application configuration
///
/// Immutable once built; fields are only readable through accessors.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Invite code or link. Kept loosely typed so that a non-string value
    /// is reported as "not configured" instead of failing the whole file.
    invite: Option<Value>,
    dev_mode: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    community: AppConfig,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// The configuration compiled into this build, parsed once
    pub fn global() -> &'static AppConfig {
        &GLOBAL_CONFIG
    }

    /// Parse the embedded `join.toml`
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }

    /// Parse a settings file with a `[community]` table
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(raw)?;
        Ok(file.community)
    }

    /// Raw invite value as configured
    pub fn invite(&self) -> Option<&Value> {
        self.invite.as_ref()
    }

    pub fn dev_mode(&self) -> bool {
        self.dev_mode
    }

    /// Run the configured invite through the validator
    pub fn invite_code(&self) -> Option<InviteCode> {
        validate_invite_value(self.invite.as_ref())
    }

    /// Validate the configuration
    ///
    /// Development mode never needs an invite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dev_mode {
            return Ok(());
        }
        match &self.invite {
            None | Some(Value::Null) => Err(ConfigError::MissingValue("invite")),
            Some(raw) if validate_invite_value(Some(raw)).is_none() => {
                Err(ConfigError::InvalidInvite(raw.to_string()))
            }
            Some(_) => Ok(()),
        }
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    invite: Option<Value>,
    dev_mode: bool,
}

impl AppConfigBuilder {
    /// Set the invite code or link
    pub fn invite(mut self, invite: impl Into<String>) -> Self {
        self.invite = Some(Value::String(invite.into()));
        self
    }

    /// Set an arbitrary invite value, as a settings file could
    pub fn invite_value(mut self, invite: Value) -> Self {
        self.invite = Some(invite);
        self
    }

    pub fn dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        AppConfig {
            invite: self.invite,
            dev_mode: self.dev_mode,
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid join.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid invite: {0}")]
    InvalidInvite(String),
}
