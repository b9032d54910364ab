//! Applying a profile to the live settings.
//!
//! Two phases: snapshot the live document through the backup manager, then
//! rewrite it. The rewrite itself is the pure [`merge_profile`].

use crate::error::StoreError;
use crate::profile::{Profile, KNOWN_PROFILE_KEYS};
use crate::store::{BackupManager, SettingsDocument, SettingsStore};
use serde_json::Value;

/// Reset every known profile key in `env`, then write the profile's env.
///
/// Keys outside the known set that the profile does not mention are left
/// as they were. `None` values in the profile are skipped.
pub fn merge_profile(mut settings: SettingsDocument, profile: &Profile) -> SettingsDocument {
    let env = settings.env_mut();
    for key in KNOWN_PROFILE_KEYS {
        env.shift_remove(key);
    }
    for (key, value) in &profile.config.env {
        if let Some(value) = value {
            env.insert(key.clone(), Value::String(value.clone()));
        }
    }
    settings.set_current_profile_id(&profile.id);
    settings
}

#[derive(Debug, Clone)]
pub struct ProfileApplier {
    settings: SettingsStore,
    backups: BackupManager,
}

impl ProfileApplier {
    pub fn new(settings: SettingsStore, backups: BackupManager) -> Self {
        Self { settings, backups }
    }

    /// Back up, merge, persist. Returns the id of the backup taken.
    ///
    /// A failed backup leaves the live settings untouched. A failure after
    /// the backup can be undone by restoring the returned id.
    pub fn apply(&self, profile: &Profile) -> Result<String, StoreError> {
        let backup_id = self.backups.backup()?;
        let current = self.settings.load()?;
        let next = merge_profile(current, profile);
        self.settings.save(&next)?;
        tracing::info!(profile = %profile.id, backup = %backup_id, "profile applied");
        Ok(backup_id)
    }
}
