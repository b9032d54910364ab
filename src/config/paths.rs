//! Resolution of the on-disk layout.

use std::path::{Path, PathBuf};

use crate::config::types::Config;

/// Env var overriding the Claude directory.
pub const CLAUDE_DIR_ENV: &str = "CC_SWITCH_CLAUDE_DIR";

const CLAUDE_DIR_NAME: &str = ".claude";
const SETTINGS_FILE: &str = "settings.json";
const PROFILES_DIR: &str = "profiles";
const BACKUPS_DIR: &str = "cc-switch-backups";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub settings_file: PathBuf,
    pub profiles_dir: PathBuf,
    pub backups_dir: PathBuf,
}

impl Paths {
    /// Standard layout under `claude_dir`.
    pub fn under(claude_dir: &Path) -> Self {
        Self {
            settings_file: claude_dir.join(SETTINGS_FILE),
            profiles_dir: claude_dir.join(PROFILES_DIR),
            backups_dir: claude_dir.join(BACKUPS_DIR),
        }
    }

    /// Precedence for the Claude directory: `explicit` (CLI flag or env),
    /// then the config file, then `~/.claude`. Profile and backup directory
    /// overrides from the config file apply on top.
    pub fn resolve(config: &Config, explicit: Option<PathBuf>) -> Self {
        let claude_dir = explicit
            .or_else(|| config.paths.claude_dir.clone())
            .unwrap_or_else(default_claude_dir);

        let mut paths = Self::under(&claude_dir);
        if let Some(dir) = &config.paths.profiles_dir {
            paths.profiles_dir = dir.clone();
        }
        if let Some(dir) = &config.paths.backups_dir {
            paths.backups_dir = dir.clone();
        }
        paths
    }
}

fn default_claude_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CLAUDE_DIR_NAME)
}
