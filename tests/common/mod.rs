//! Shared test fixtures: a throwaway Claude directory.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use cc_switch::config::Paths;
use cc_switch::profile::Profile;
use cc_switch::Switcher;
use serde_json::Value;
use tempfile::TempDir;

pub struct Fixture {
    pub dir: TempDir,
    pub paths: Paths,
    pub switcher: Switcher,
}

impl Fixture {
    /// Empty Claude directory with no settings yet.
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let paths = Paths::under(dir.path());
        let switcher = Switcher::new(&paths);
        Self {
            dir,
            paths,
            switcher,
        }
    }

    /// Claude directory whose `settings.json` holds `settings`.
    pub fn with_settings(settings: Value) -> Self {
        let fixture = Self::empty();
        fixture.write_settings(&settings);
        fixture
    }

    pub fn claude_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_settings(&self, settings: &Value) {
        let text = serde_json::to_string_pretty(settings).unwrap();
        std::fs::write(&self.paths.settings_file, text).unwrap();
    }

    pub fn write_settings_raw(&self, text: &str) {
        std::fs::write(&self.paths.settings_file, text).unwrap();
    }

    pub fn read_settings(&self) -> Value {
        serde_json::from_str(&self.read_settings_raw()).unwrap()
    }

    pub fn read_settings_raw(&self) -> String {
        std::fs::read_to_string(&self.paths.settings_file).unwrap()
    }

    pub fn backup_path(&self, id: &str) -> PathBuf {
        self.paths.backups_dir.join(id)
    }

    pub fn add_profile(&self, profile: &Profile) {
        self.switcher.create_profile(profile).unwrap();
    }
}
