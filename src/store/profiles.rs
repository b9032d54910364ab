//! One JSON file per profile under the profiles directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{ResourceKind, StoreError};
use crate::profile::Profile;
use crate::store::json;

const PROFILE_EXT: &str = "json";

#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// All stored profiles, ordered by file name.
    ///
    /// A missing directory is created and yields an empty list.
    pub fn list(&self) -> Result<Vec<Profile>, StoreError> {
        if !self.dir.is_dir() {
            json::ensure_dir(&self.dir)?;
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir).map_err(|e| StoreError::io(&self.dir, e))?;
        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| StoreError::io(&self.dir, e))?.path();
            if path.is_file() && has_profile_ext(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        paths
            .iter()
            .map(|path| {
                let id = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                json::read_json(path, ResourceKind::Profile, &id)
            })
            .collect()
    }

    pub fn exists(&self, id: &str) -> bool {
        self.path_for(id).map(|p| p.is_file()).unwrap_or(false)
    }

    pub fn load(&self, id: &str) -> Result<Profile, StoreError> {
        let path = self.existing_path(id)?;
        json::read_json(&path, ResourceKind::Profile, id)
    }

    /// Store a new profile. Never overwrites an existing one, and refuses
    /// profiles that fail [`Profile::validate`].
    pub fn create(&self, profile: &Profile) -> Result<(), StoreError> {
        profile.validate()?;
        let path = self
            .path_for(&profile.id)
            .ok_or_else(|| StoreError::invalid_profile("id is not a plain file name"))?;
        json::ensure_dir(&self.dir)?;
        let bytes = json::to_pretty_bytes(&path, profile)?;
        match json::write_new(&path, &bytes) {
            Err(StoreError::Io { source, .. }) if source.kind() == ErrorKind::AlreadyExists => {
                Err(StoreError::AlreadyExists {
                    id: profile.id.clone(),
                })
            }
            other => other,
        }?;
        tracing::info!(profile = %profile.id, "profile created");
        Ok(())
    }

    /// Overwrite an existing profile. Never creates one.
    pub fn update(&self, profile: &Profile) -> Result<(), StoreError> {
        let path = self.existing_path(&profile.id)?;
        profile.validate()?;
        json::write_json_atomic(&path, profile)?;
        tracing::info!(profile = %profile.id, "profile updated");
        Ok(())
    }

    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let path = self.existing_path(id)?;
        fs::remove_file(&path).map_err(|e| StoreError::io(&path, e))?;
        tracing::info!(profile = %id, "profile deleted");
        Ok(())
    }

    fn existing_path(&self, id: &str) -> Result<PathBuf, StoreError> {
        self.path_for(id)
            .filter(|p| p.is_file())
            .ok_or_else(|| StoreError::not_found(ResourceKind::Profile, id))
    }

    /// `<dir>/<id>.json`, or `None` for ids that would escape the directory.
    fn path_for(&self, id: &str) -> Option<PathBuf> {
        if !is_plain_file_name(id) {
            return None;
        }
        Some(self.dir.join(format!("{id}.{PROFILE_EXT}")))
    }
}

fn has_profile_ext(path: &Path) -> bool {
    path.extension().map(|e| e == PROFILE_EXT).unwrap_or(false)
}

/// Rejects empty names, `.`/`..` and anything containing a path separator.
pub(crate) fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_file_names() {
        assert!(is_plain_file_name("openrouter"));
        assert!(is_plain_file_name("settings-2024.json"));
        assert!(!is_plain_file_name(""));
        assert!(!is_plain_file_name(".."));
        assert!(!is_plain_file_name("../settings"));
        assert!(!is_plain_file_name("a\\b"));
    }
}
