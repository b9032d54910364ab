//! Provider profiles: the stored document shape, provider detection,
//! presets and capture of the live settings.

pub mod capture;
pub mod presets;
pub mod provider;
mod types;

pub use capture::{
    extract_known_fields, find_similar_profiles, mask_token, profile_from_settings, suggest_id,
    suggest_name, Similarity,
};
pub use presets::{find_preset, sanitize_id, PresetOverrides, ProviderPreset, PROVIDER_PRESETS};
pub use provider::{current_provider, ProviderTag};
pub use types::*;
