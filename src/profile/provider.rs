//! Classify a base URL into one of the providers we ship presets for.

use std::fmt;

use crate::profile::types::BASE_URL;
use crate::store::SettingsDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderTag {
    Anthropic,
    ZhipuCoding,
    OpenRouter,
    CloudflareWorker,
    Custom,
}

impl ProviderTag {
    /// Stable id, shared with the preset table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anthropic => "anthropic",
            Self::ZhipuCoding => "zhipu-coding",
            Self::OpenRouter => "openrouter",
            Self::CloudflareWorker => "cloudflare-worker",
            Self::Custom => "custom",
        }
    }

    pub fn all() -> &'static [ProviderTag] {
        &[
            Self::Anthropic,
            Self::ZhipuCoding,
            Self::OpenRouter,
            Self::CloudflareWorker,
            Self::Custom,
        ]
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|tag| tag.as_str() == s)
    }

    /// Match known provider hostnames in `url`. Unmatched URLs are `Custom`.
    pub fn from_base_url(url: &str) -> Self {
        if url.contains("bigmodel.cn") {
            Self::ZhipuCoding
        } else if url.contains("openrouter.ai") {
            Self::OpenRouter
        } else if url.contains("api.anthropic.com") {
            Self::Anthropic
        } else if url.contains("workers.dev") {
            Self::CloudflareWorker
        } else {
            Self::Custom
        }
    }
}

impl fmt::Display for ProviderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider the live settings point at. No base URL means the official API.
pub fn current_provider(settings: &SettingsDocument) -> ProviderTag {
    match settings.env_var(BASE_URL).filter(|url| !url.is_empty()) {
        Some(url) => ProviderTag::from_base_url(url),
        None => ProviderTag::Anthropic,
    }
}
