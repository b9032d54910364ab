//! File-backed stores: the live settings document, saved profiles and
//! settings backups.

mod json;

pub mod backups;
pub mod profiles;
pub mod settings;

pub use backups::BackupManager;
pub use profiles::ProfileStore;
pub use settings::{SettingsDocument, SettingsStore, CURRENT_PROFILE_KEY};
