//! Turning the live settings back into a saved profile.

use std::collections::BTreeMap;

use chrono::Utc;
use url::Url;

use crate::error::StoreError;
use crate::profile::presets::{find_preset, sanitize_id};
use crate::profile::provider::ProviderTag;
use crate::profile::types::{Profile, ProfileConfig, AUTH_TOKEN, BASE_URL, KNOWN_PROFILE_KEYS};
use crate::store::SettingsDocument;

const TOKEN_PREFIX_CHARS: usize = 10;

/// Non-empty known profile keys present in the live settings.
pub fn extract_known_fields(settings: &SettingsDocument) -> BTreeMap<String, String> {
    KNOWN_PROFILE_KEYS
        .iter()
        .filter_map(|key| {
            settings
                .env_var(key)
                .filter(|v| !v.is_empty())
                .map(|v| (key.to_string(), v.to_string()))
        })
        .collect()
}

/// `sk-ant-...wxyz` style preview of a secret.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 10 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Suggested id for a captured profile.
pub fn suggest_id(provider: ProviderTag, fields: &BTreeMap<String, String>) -> String {
    suggest_id_at(provider, fields, Utc::now().timestamp_millis())
}

fn suggest_id_at(provider: ProviderTag, fields: &BTreeMap<String, String>, now_ms: i64) -> String {
    match provider {
        ProviderTag::Custom => fields
            .get(BASE_URL)
            .and_then(|url| Url::parse(url).ok())
            .and_then(|url| url.host_str().map(str::to_string))
            .map(|host| sanitize_id(&host.replacen("api.", "", 1).replacen(".com", "", 1)))
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| provider.as_str().to_string()),
        ProviderTag::Anthropic => format!("anthropic-{now_ms}"),
        other => other.as_str().to_string(),
    }
}

pub fn suggest_name(provider: ProviderTag) -> String {
    find_preset(provider)
        .map(|p| p.name)
        .unwrap_or("Custom Provider")
        .to_string()
}

/// Why a stored profile looks like the captured fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Similarity {
    SameBaseUrl,
    SameTokenPrefix,
}

impl Similarity {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::SameBaseUrl => "same base URL",
            Self::SameTokenPrefix => "same token prefix",
        }
    }
}

pub fn similarity(profile: &Profile, fields: &BTreeMap<String, String>) -> Option<Similarity> {
    if let (Some(ours), Some(theirs)) = (profile.env_var(BASE_URL), fields.get(BASE_URL)) {
        if !ours.is_empty() && ours == theirs {
            return Some(Similarity::SameBaseUrl);
        }
    }
    if let (Some(ours), Some(theirs)) = (profile.env_var(AUTH_TOKEN), fields.get(AUTH_TOKEN)) {
        if !ours.is_empty() && !theirs.is_empty() && token_prefix(ours) == token_prefix(theirs) {
            return Some(Similarity::SameTokenPrefix);
        }
    }
    None
}

/// Profiles sharing a base URL or token prefix with `fields`.
pub fn find_similar_profiles<'a>(
    profiles: &'a [Profile],
    fields: &BTreeMap<String, String>,
) -> Vec<(&'a Profile, Similarity)> {
    profiles
        .iter()
        .filter_map(|p| similarity(p, fields).map(|s| (p, s)))
        .collect()
}

fn token_prefix(token: &str) -> String {
    token.chars().take(TOKEN_PREFIX_CHARS).collect()
}

/// Build a profile from the live settings' known fields.
///
/// # Errors
/// `MissingAuthToken` when the settings carry no auth token.
pub fn profile_from_settings(
    settings: &SettingsDocument,
    id: &str,
    name: &str,
    description: Option<String>,
    icon: Option<String>,
) -> Result<Profile, StoreError> {
    let fields = extract_known_fields(settings);
    if !fields.contains_key(AUTH_TOKEN) {
        return Err(StoreError::MissingAuthToken);
    }

    Ok(Profile {
        id: sanitize_id(id),
        name: name.to_string(),
        description: description.filter(|d| !d.is_empty()),
        icon,
        config: ProfileConfig {
            env: fields.into_iter().map(|(k, v)| (k, Some(v))).collect(),
        },
    })
}
