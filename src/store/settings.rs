//! The shared Claude Code `settings.json` document.
//!
//! The document is owned by Claude Code, not by us: every field we do not
//! understand is carried through untouched, in its original order.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ResourceKind, StoreError};
use crate::store::json;

/// Top-level key recording the id of the last applied profile.
pub const CURRENT_PROFILE_KEY: &str = "currentProfileId";

const ENV_KEY: &str = "env";
const TEAMMATE_MODE_KEY: &str = "teammateMode";

/// In-memory copy of `settings.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsDocument(Map<String, Value>);

impl SettingsDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `env` mapping, if present and an object.
    pub fn env(&self) -> Option<&Map<String, Value>> {
        self.0.get(ENV_KEY).and_then(Value::as_object)
    }

    /// A single string-valued env var.
    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.env()?.get(key)?.as_str()
    }

    /// All string-valued env vars. Non-string values are skipped.
    pub fn env_strings(&self) -> BTreeMap<String, String> {
        self.env()
            .map(|env| {
                env.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Mutable `env` mapping, created empty when absent or not an object.
    pub fn env_mut(&mut self) -> &mut Map<String, Value> {
        let slot = self
            .0
            .entry(ENV_KEY)
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        match slot {
            Value::Object(map) => map,
            _ => unreachable!("env slot was just normalized to an object"),
        }
    }

    pub fn current_profile_id(&self) -> Option<&str> {
        self.0
            .get(CURRENT_PROFILE_KEY)
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
    }

    pub fn set_current_profile_id(&mut self, id: &str) {
        self.0
            .insert(CURRENT_PROFILE_KEY.to_string(), Value::String(id.to_string()));
    }

    pub fn teammate_mode(&self) -> Option<&str> {
        self.0
            .get(TEAMMATE_MODE_KEY)
            .and_then(Value::as_str)
            .filter(|mode| !mode.is_empty())
    }

    pub fn set_teammate_mode(&mut self, mode: &str) {
        self.0
            .insert(TEAMMATE_MODE_KEY.to_string(), Value::String(mode.to_string()));
    }

    /// Raw access to any top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for SettingsDocument {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Reads and rewrites `settings.json` in place.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load the live document.
    ///
    /// # Errors
    /// `NotFound` when the file does not exist (we never create it from
    /// nothing), `Malformed` when it is not a JSON object.
    pub fn load(&self) -> Result<SettingsDocument, StoreError> {
        json::read_json(&self.path, ResourceKind::Settings, &self.display_id())
    }

    /// Persist the whole document, pretty-printed.
    pub fn save(&self, document: &SettingsDocument) -> Result<(), StoreError> {
        json::write_json_atomic(&self.path, document)?;
        tracing::debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }

    /// Replace the live document with `bytes` exactly.
    pub(crate) fn overwrite_raw(&self, bytes: &[u8]) -> Result<(), StoreError> {
        json::write_bytes_atomic(&self.path, bytes)
    }

    /// Raw bytes of the live document.
    pub(crate) fn read_raw(&self) -> Result<Vec<u8>, StoreError> {
        json::read_bytes(&self.path, ResourceKind::Settings, &self.display_id())
    }

    fn display_id(&self) -> String {
        self.path.display().to_string()
    }
}
