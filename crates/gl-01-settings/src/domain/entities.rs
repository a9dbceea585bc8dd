//! # Domain Entities
//!
//! The per-community settings document and validated patches.

use super::coercion::coerce_bool;
use super::errors::{CoercionError, SettingsError};
use super::value_objects::SettingField;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared_types::CommunityId;
use std::collections::BTreeMap;

/// Modules every community starts with, all disabled.
pub const KNOWN_MODULES: &[&str] = &[
    "messageLog",
    "roleStats",
    "welcome",
    "moderation",
    "autoRole",
    "starboard",
];

/// Top-level flags every community starts with, all unset (`false`).
pub const KNOWN_FLAGS: &[&str] = &["logDeletedOnly"];

/// Settings document for one community.
///
/// Every value is a canonical `bool`; the type itself rules out any other
/// stored representation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunitySettings {
    /// Owning community. Unique key.
    pub community_id: CommunityId,
    /// Module name -> enabled.
    pub modules: BTreeMap<String, bool>,
    /// Additional top-level booleans.
    pub flags: BTreeMap<String, bool>,
}

impl CommunitySettings {
    /// Fresh document with every known module and flag set to `false`.
    pub fn with_defaults(community_id: CommunityId) -> Self {
        Self {
            community_id,
            modules: KNOWN_MODULES.iter().map(|m| (m.to_string(), false)).collect(),
            flags: KNOWN_FLAGS.iter().map(|f| (f.to_string(), false)).collect(),
        }
    }

    /// Current value of a module, if present.
    pub fn module_enabled(&self, name: &str) -> Option<bool> {
        self.modules.get(name).copied()
    }

    /// Current value of a flag, if present.
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.flags.get(name).copied()
    }

    /// Current value of any field.
    pub fn get(&self, field: &SettingField) -> Option<bool> {
        match field {
            SettingField::Module(name) => self.module_enabled(name),
            SettingField::Flag(name) => self.flag(name),
        }
    }

    /// Merge a validated patch. Fields not named by the patch are untouched.
    pub fn apply(&mut self, patch: &NormalizedPatch) {
        for (field, value) in &patch.changes {
            let target = match field {
                SettingField::Module(_) => &mut self.modules,
                SettingField::Flag(_) => &mut self.flags,
            };
            target.insert(field.name().to_string(), *value);
        }
    }
}

/// A patch whose paths are parsed and whose values are canonical booleans.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NormalizedPatch {
    /// Field -> coerced value, in the patch's key order.
    pub changes: Vec<(SettingField, bool)>,
}

impl NormalizedPatch {
    /// Number of fields in the patch.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// True when the patch carries no fields.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Validate and coerce every field of a raw patch.
///
/// Fails on the first field (in key order) whose path is invalid or whose
/// value is not coercible; no partial patch is ever returned.
pub fn normalize_patch(patch: &Map<String, Value>) -> Result<NormalizedPatch, SettingsError> {
    if patch.is_empty() {
        return Err(SettingsError::EmptyPatch);
    }

    let mut changes = Vec::with_capacity(patch.len());
    for (path, raw) in patch {
        let field = SettingField::parse(path)?;
        let value = coerce_bool(raw).map_err(|err| match err {
            CoercionError::TypeMismatch { found } => SettingsError::InvalidFieldType {
                field: path.clone(),
                found,
            },
        })?;
        changes.push((field, value));
    }

    Ok(NormalizedPatch { changes })
}
