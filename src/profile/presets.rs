//! Built-in provider presets and profile construction from them.

use crate::profile::provider::ProviderTag;
use crate::profile::types::{
    Profile, API_TIMEOUT, BASE_URL, DISABLE_TRAFFIC, HAIKU_MODEL, OPUS_MODEL, SONNET_MODEL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultModels {
    pub haiku: &'static str,
    pub sonnet: &'static str,
    pub opus: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderPreset {
    pub tag: ProviderTag,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub base_url: Option<&'static str>,
    pub default_models: Option<DefaultModels>,
}

pub const PROVIDER_PRESETS: &[ProviderPreset] = &[
    ProviderPreset {
        tag: ProviderTag::Anthropic,
        name: "Anthropic (Official)",
        description: "Official Anthropic API",
        icon: "🔷",
        base_url: None,
        default_models: Some(DefaultModels {
            haiku: "claude-3-5-haiku-20241022",
            sonnet: "claude-3-5-sonnet-20241022",
            opus: "claude-3-5-opus-20241022",
        }),
    },
    ProviderPreset {
        tag: ProviderTag::ZhipuCoding,
        name: "Zhipu GLM Coding Plan",
        description: "GLM Coding Plan",
        icon: "💻",
        base_url: Some("https://open.bigmodel.cn/api/anthropic"),
        default_models: Some(DefaultModels {
            haiku: "glm-4.5-air",
            sonnet: "glm-4.7",
            opus: "glm-4.7",
        }),
    },
    ProviderPreset {
        tag: ProviderTag::OpenRouter,
        name: "OpenRouter",
        description: "OpenRouter AI (200+ models)",
        icon: "🔀",
        base_url: Some("https://openrouter.ai/api/v1"),
        default_models: Some(DefaultModels {
            haiku: "anthropic/claude-3.5-haiku",
            sonnet: "anthropic/claude-3.5-sonnet",
            opus: "anthropic/claude-3.5-opus",
        }),
    },
    ProviderPreset {
        tag: ProviderTag::CloudflareWorker,
        name: "Cloudflare Worker Proxy",
        description: "Cloudflare Worker Claude Proxy",
        icon: "☁️",
        base_url: None,
        default_models: None,
    },
    ProviderPreset {
        tag: ProviderTag::Custom,
        name: "Custom Provider",
        description: "Custom API endpoint",
        icon: "🔌",
        base_url: None,
        default_models: None,
    },
];

pub fn find_preset(tag: ProviderTag) -> Option<&'static ProviderPreset> {
    PROVIDER_PRESETS.iter().find(|p| p.tag == tag)
}

/// Lowercase, collapse runs of non-alphanumerics into `-`, trim `-` at the ends.
pub fn sanitize_id(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_dash = false;
    for c in input.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c);
        } else {
            pending_dash = true;
        }
    }
    out
}

/// User-supplied values that take precedence over the preset's.
#[derive(Debug, Clone, Default)]
pub struct PresetOverrides {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub base_url: Option<String>,
    pub haiku: Option<String>,
    pub sonnet: Option<String>,
    pub opus: Option<String>,
    pub api_timeout_ms: Option<String>,
    pub disable_nonessential_traffic: Option<String>,
}

impl Profile {
    /// Build a profile from a preset. The id is derived from the custom name
    /// (or explicit id) when given, otherwise from the preset tag.
    pub fn from_preset(preset: &ProviderPreset, token: &str, overrides: PresetOverrides) -> Self {
        let pick = |custom: Option<String>, fallback: Option<&str>| {
            custom
                .filter(|v| !v.is_empty())
                .or_else(|| fallback.map(str::to_string))
        };

        let non_blank = |v: &String| !v.trim().is_empty();
        let id_source = overrides
            .id
            .clone()
            .filter(non_blank)
            .or_else(|| overrides.name.clone().filter(non_blank))
            .unwrap_or_else(|| preset.tag.as_str().to_string());
        let name = pick(overrides.name, Some(preset.name)).unwrap_or_default();

        let mut profile = Profile::new(sanitize_id(&id_source), name, token);
        profile.description = pick(overrides.description, Some(preset.description));
        profile.icon = pick(overrides.icon, Some(preset.icon));

        let models = preset.default_models;
        let env = [
            (BASE_URL, pick(overrides.base_url, preset.base_url)),
            (HAIKU_MODEL, pick(overrides.haiku, models.map(|m| m.haiku))),
            (SONNET_MODEL, pick(overrides.sonnet, models.map(|m| m.sonnet))),
            (OPUS_MODEL, pick(overrides.opus, models.map(|m| m.opus))),
            (API_TIMEOUT, pick(overrides.api_timeout_ms, None)),
            (DISABLE_TRAFFIC, pick(overrides.disable_nonessential_traffic, None)),
        ];
        for (key, value) in env {
            if let Some(value) = value {
                profile = profile.with_env(key, value);
            }
        }
        profile
    }
}
