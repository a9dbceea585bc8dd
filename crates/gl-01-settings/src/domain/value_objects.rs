//! # Domain Value Objects
//!
//! Field addressing and subsystem configuration.

use super::entities::KNOWN_FLAGS;
use super::errors::SettingsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Prefix addressing a module toggle.
pub const MODULES_PREFIX: &str = "modules";

/// Prefix addressing a top-level flag.
pub const FLAGS_PREFIX: &str = "flags";

/// A single addressable boolean inside [`CommunitySettings`].
///
/// Accepted paths:
///
/// - `modules.<name>` addresses a module;
/// - `flags.<name>` addresses a flag;
/// - a bare `<name>` addresses a flag when it is one of [`KNOWN_FLAGS`], and a
///   module otherwise (unknown module names are tolerated).
///
/// [`CommunitySettings`]: super::entities::CommunitySettings
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingField {
    /// Entry of the `modules` map.
    Module(String),
    /// Entry of the `flags` map.
    Flag(String),
}

impl SettingField {
    /// Parse a caller-supplied field path.
    pub fn parse(path: &str) -> Result<Self, SettingsError> {
        let invalid = || SettingsError::InvalidFieldPath(path.to_string());

        match path.split_once('.') {
            Some((prefix, name)) => {
                if name.is_empty() || name.contains('.') {
                    return Err(invalid());
                }
                match prefix {
                    MODULES_PREFIX => Ok(SettingField::Module(name.to_string())),
                    FLAGS_PREFIX => Ok(SettingField::Flag(name.to_string())),
                    _ => Err(invalid()),
                }
            }
            None if path.is_empty() => Err(invalid()),
            None if KNOWN_FLAGS.contains(&path) => Ok(SettingField::Flag(path.to_string())),
            None => Ok(SettingField::Module(path.to_string())),
        }
    }

    /// Leaf name without prefix.
    pub fn name(&self) -> &str {
        match self {
            SettingField::Module(name) | SettingField::Flag(name) => name,
        }
    }
}

impl FromStr for SettingField {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SettingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingField::Module(name) => write!(f, "{}.{}", MODULES_PREFIX, name),
            SettingField::Flag(name) => write!(f, "{}.{}", FLAGS_PREFIX, name),
        }
    }
}

/// Settings Normalizer configuration.
#[derive(Clone, Debug)]
pub struct SettingsConfig {
    /// Upper bound for every settings store call.
    pub store_timeout: Duration,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            store_timeout: Duration::from_secs(5),
        }
    }
}
