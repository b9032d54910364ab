//! Entry point used by the CLI: one handle over the settings, profile and
//! backup stores.

pub mod agent_teams;
pub mod apply;

use crate::config::Paths;
use crate::error::StoreError;
use crate::profile::{
    current_provider, extract_known_fields, find_preset, profile_from_settings, suggest_id,
    suggest_name, Profile, ProviderTag, AUTH_TOKEN,
};
use crate::store::{BackupManager, ProfileStore, SettingsDocument, SettingsStore};

pub use agent_teams::{AgentTeams, AgentTeamsStatus};
pub use apply::{merge_profile, ProfileApplier};

/// Id of the profile last applied to `settings`.
pub fn current_profile_id(settings: &SettingsDocument) -> Option<&str> {
    settings.current_profile_id()
}

pub fn infer_provider_from_base_url(url: &str) -> ProviderTag {
    ProviderTag::from_base_url(url)
}

/// Options for saving the live settings as a new profile. Unset id, name
/// and icon are derived from the detected provider.
#[derive(Debug, Clone, Default)]
pub struct CaptureRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    /// Save even when the current profile id is already stored.
    pub allow_copy: bool,
}

#[derive(Debug, Clone)]
pub struct Switcher {
    settings: SettingsStore,
    profiles: ProfileStore,
    backups: BackupManager,
    applier: ProfileApplier,
}

impl Switcher {
    pub fn new(paths: &Paths) -> Self {
        let settings = SettingsStore::new(&paths.settings_file);
        let backups = BackupManager::new(&paths.backups_dir, settings.clone());
        Self {
            profiles: ProfileStore::new(&paths.profiles_dir),
            applier: ProfileApplier::new(settings.clone(), backups.clone()),
            settings,
            backups,
        }
    }

    pub fn profiles(&self) -> &ProfileStore {
        &self.profiles
    }

    pub fn backups(&self) -> &BackupManager {
        &self.backups
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn list_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        self.profiles.list()
    }

    pub fn load_profile(&self, id: &str) -> Result<Profile, StoreError> {
        self.profiles.load(id)
    }

    pub fn create_profile(&self, profile: &Profile) -> Result<(), StoreError> {
        self.profiles.create(profile)
    }

    pub fn update_profile(&self, profile: &Profile) -> Result<(), StoreError> {
        self.profiles.update(profile)
    }

    pub fn delete_profile(&self, id: &str) -> Result<(), StoreError> {
        self.profiles.delete(id)
    }

    pub fn load_settings(&self) -> Result<SettingsDocument, StoreError> {
        self.settings.load()
    }

    /// Apply `profile`, returning the id of the backup taken beforehand.
    pub fn apply_profile(&self, profile: &Profile) -> Result<String, StoreError> {
        self.applier.apply(profile)
    }

    /// Load the profile `id` and apply it.
    pub fn use_profile(&self, id: &str) -> Result<Profile, StoreError> {
        let profile = self.profiles.load(id)?;
        self.apply_profile(&profile)?;
        Ok(profile)
    }

    pub fn list_backups(&self) -> Result<Vec<String>, StoreError> {
        self.backups.list()
    }

    pub fn restore_backup(&self, id: &str) -> Result<Option<String>, StoreError> {
        self.backups.restore(id)
    }

    pub fn agent_teams(&self) -> AgentTeams {
        AgentTeams::new(self.settings.clone(), self.backups.clone())
    }

    /// Save the known fields of the live settings as a new profile.
    ///
    /// # Errors
    /// `MissingAuthToken` when there is no token to save, `AlreadySaved`
    /// when the current profile is stored and `allow_copy` is off,
    /// `AlreadyExists` when the chosen id is taken, `InvalidProfile` when
    /// the id or name ends up blank.
    pub fn capture_current(&self, request: CaptureRequest) -> Result<Profile, StoreError> {
        let settings = self.settings.load()?;
        let fields = extract_known_fields(&settings);
        if !fields.get(AUTH_TOKEN).is_some_and(|t| !t.trim().is_empty()) {
            return Err(StoreError::MissingAuthToken);
        }

        if !request.allow_copy {
            if let Some(id) = current_profile_id(&settings) {
                if self.profiles.exists(id) {
                    return Err(StoreError::AlreadySaved { id: id.to_string() });
                }
            }
        }

        let provider = current_provider(&settings);
        let id = request.id.unwrap_or_else(|| suggest_id(provider, &fields));
        let name = request.name.unwrap_or_else(|| suggest_name(provider));
        let icon = request
            .icon
            .or_else(|| find_preset(provider).map(|p| p.icon.to_string()));

        let profile = profile_from_settings(&settings, &id, &name, request.description, icon)?;
        self.profiles.create(&profile)?;
        Ok(profile)
    }
}
