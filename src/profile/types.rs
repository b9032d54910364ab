use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::store::profiles::is_plain_file_name;

pub const AUTH_TOKEN: &str = "ANTHROPIC_AUTH_TOKEN";
pub const BASE_URL: &str = "ANTHROPIC_BASE_URL";
pub const HAIKU_MODEL: &str = "ANTHROPIC_DEFAULT_HAIKU_MODEL";
pub const SONNET_MODEL: &str = "ANTHROPIC_DEFAULT_SONNET_MODEL";
pub const OPUS_MODEL: &str = "ANTHROPIC_DEFAULT_OPUS_MODEL";
pub const API_TIMEOUT: &str = "API_TIMEOUT_MS";
pub const DISABLE_TRAFFIC: &str = "CLAUDE_CODE_DISABLE_NONESSENTIAL_TRAFFIC";

/// Env vars owned by profiles. Every switch clears all of them before the
/// incoming profile's values are written.
pub const KNOWN_PROFILE_KEYS: [&str; 7] = [
    AUTH_TOKEN,
    BASE_URL,
    HAIKU_MODEL,
    SONNET_MODEL,
    OPUS_MODEL,
    API_TIMEOUT,
    DISABLE_TRAFFIC,
];

pub fn is_known_profile_key(key: &str) -> bool {
    KNOWN_PROFILE_KEYS.contains(&key)
}

/// A saved provider configuration, stored as `profiles/<id>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique id; also the file name stem.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub config: ProfileConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Env vars to apply. `None` (JSON `null`) entries are skipped on apply.
    #[serde(default)]
    pub env: BTreeMap<String, Option<String>>,
}

impl Profile {
    /// Minimal profile carrying only an auth token.
    pub fn new(id: impl Into<String>, name: impl Into<String>, token: impl Into<String>) -> Self {
        let mut env = BTreeMap::new();
        env.insert(AUTH_TOKEN.to_string(), Some(token.into()));
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            icon: None,
            config: ProfileConfig { env },
        }
    }

    /// Builder-style env setter.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.env.insert(key.into(), Some(value.into()));
        self
    }

    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.config.env.get(key)?.as_deref()
    }

    /// Checks what every stored profile must carry: a file-safe id, a
    /// non-blank name and a non-blank auth token.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.id.is_empty() {
            return Err(StoreError::invalid_profile("id must not be empty"));
        }
        if !is_plain_file_name(&self.id) {
            return Err(StoreError::invalid_profile(format!(
                "id '{}' is not a plain file name",
                self.id
            )));
        }
        if self.name.trim().is_empty() {
            return Err(StoreError::invalid_profile("name must not be empty"));
        }
        if !self.env_var(AUTH_TOKEN).is_some_and(|t| !t.trim().is_empty()) {
            return Err(StoreError::MissingAuthToken);
        }
        Ok(())
    }

    /// Icon for display, with the generic package fallback.
    pub fn display_icon(&self) -> &str {
        self.icon.as_deref().filter(|i| !i.is_empty()).unwrap_or("📦")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_and_null_env_keys_round_trip() {
        let raw = json!({
            "id": "p1",
            "name": "P1",
            "config": {"env": {
                "ANTHROPIC_AUTH_TOKEN": "tok",
                "EXTRA_FLAG": "on",
                "ANTHROPIC_BASE_URL": null
            }}
        });
        let profile: Profile = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(profile.env_var("EXTRA_FLAG"), Some("on"));
        assert_eq!(profile.env_var(BASE_URL), None);
        assert_eq!(serde_json::to_value(&profile).unwrap(), raw);
    }

    #[test]
    fn display_icon_falls_back() {
        let mut profile = Profile::new("p", "P", "t");
        assert_eq!(profile.display_icon(), "📦");
        profile.icon = Some("🔷".into());
        assert_eq!(profile.display_icon(), "🔷");
    }

    #[test]
    fn validate_requires_id_name_and_token() {
        assert!(Profile::new("p", "P", "t").validate().is_ok());
        assert!(matches!(
            Profile::new("", "P", "t").validate(),
            Err(StoreError::InvalidProfile { .. })
        ));
        assert!(matches!(
            Profile::new("a/b", "P", "t").validate(),
            Err(StoreError::InvalidProfile { .. })
        ));
        assert!(matches!(
            Profile::new("p", "  ", "t").validate(),
            Err(StoreError::InvalidProfile { .. })
        ));
        assert!(matches!(
            Profile::new("p", "P", " ").validate(),
            Err(StoreError::MissingAuthToken)
        ));

        let mut nulled = Profile::new("p", "P", "t");
        nulled.config.env.insert(AUTH_TOKEN.to_string(), None);
        assert!(matches!(nulled.validate(), Err(StoreError::MissingAuthToken)));
    }

    #[test]
    fn known_keys_cover_token_and_models() {
        assert!(is_known_profile_key(AUTH_TOKEN));
        assert!(is_known_profile_key(OPUS_MODEL));
        assert!(!is_known_profile_key("SOME_OTHER_VAR"));
    }
}
