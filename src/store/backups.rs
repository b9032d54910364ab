//! Timestamped, append-only copies of `settings.json`.
//!
//! Backup ids are file names of the form `settings-<timestamp>.json`, where
//! the timestamp is UTC with millisecond precision and no colons or dots.
//! The fixed-width format makes lexical order equal chronological order.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

use crate::error::{ResourceKind, StoreError};
use crate::store::json;
use crate::store::profiles::is_plain_file_name;
use crate::store::settings::SettingsStore;

const BACKUP_PREFIX: &str = "settings-";
const BACKUP_EXT: &str = ".json";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S-%3fZ";

/// Create-new collisions tolerated before giving up. Each retry moves the
/// candidate one millisecond forward.
const MAX_COLLISION_RETRIES: u32 = 1000;

#[derive(Debug, Clone)]
pub struct BackupManager {
    dir: PathBuf,
    settings: SettingsStore,
}

impl BackupManager {
    pub fn new(dir: impl Into<PathBuf>, settings: SettingsStore) -> Self {
        Self {
            dir: dir.into(),
            settings,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Copy the live settings byte-for-byte into a new backup file.
    ///
    /// Ids are strictly increasing: a backup taken within the same
    /// millisecond as (or, after a clock step, before) the newest existing
    /// one is stamped one millisecond after it.
    ///
    /// # Errors
    /// `NotFound` if there is no live settings document to copy.
    pub fn backup(&self) -> Result<String, StoreError> {
        let bytes = self.settings.read_raw()?;
        json::ensure_dir(&self.dir)?;

        let newest = self.list()?.iter().find_map(|id| parse_backup_id(id));
        let mut stamp = next_timestamp(Utc::now(), newest);

        for _ in 0..MAX_COLLISION_RETRIES {
            let id = format_backup_id(stamp);
            match json::write_new(&self.dir.join(&id), &bytes) {
                Ok(()) => {
                    tracing::info!(backup = %id, "settings backed up");
                    return Ok(id);
                }
                Err(StoreError::Io { source, .. }) if source.kind() == ErrorKind::AlreadyExists => {
                    stamp = stamp + TimeDelta::milliseconds(1);
                }
                Err(e) => return Err(e),
            }
        }

        Err(StoreError::io(
            &self.dir,
            std::io::Error::new(ErrorKind::AlreadyExists, "no free backup name"),
        ))
    }

    /// Backup ids, most recent first. Empty when the directory is missing.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&self.dir, e)),
        };

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io(&self.dir, e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(BACKUP_EXT) && entry.path().is_file() {
                ids.push(name);
            }
        }
        ids.sort_unstable_by(|a, b| b.cmp(a));
        Ok(ids)
    }

    /// Overwrite the live settings with a backup's bytes, verbatim.
    ///
    /// The live document is itself backed up first (when it exists), so a
    /// restore can be undone. Returns the id of that safety backup.
    pub fn restore(&self, id: &str) -> Result<Option<String>, StoreError> {
        let path = self.existing_path(id)?;
        let bytes = json::read_bytes(&path, ResourceKind::Backup, id)?;

        let safety = if self.settings.exists() {
            Some(self.backup()?)
        } else {
            None
        };

        self.settings.overwrite_raw(&bytes)?;
        tracing::info!(backup = %id, "settings restored");
        Ok(safety)
    }

    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(id)
    }

    fn existing_path(&self, id: &str) -> Result<PathBuf, StoreError> {
        Some(id)
            .filter(|id| is_plain_file_name(id))
            .map(|id| self.path_for(id))
            .filter(|path| path.is_file())
            .ok_or_else(|| StoreError::not_found(ResourceKind::Backup, id))
    }
}

pub(crate) fn format_backup_id(stamp: DateTime<Utc>) -> String {
    format!(
        "{BACKUP_PREFIX}{}{BACKUP_EXT}",
        stamp.format(TIMESTAMP_FORMAT)
    )
}

/// Timestamp encoded in a backup id, if it follows our naming scheme.
pub(crate) fn parse_backup_id(id: &str) -> Option<DateTime<Utc>> {
    let stamp = id.strip_prefix(BACKUP_PREFIX)?.strip_suffix(BACKUP_EXT)?;
    NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

fn next_timestamp(now: DateTime<Utc>, newest: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let now = DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now);
    match newest {
        Some(last) if now <= last => last + TimeDelta::milliseconds(1),
        _ => now,
    }
}
