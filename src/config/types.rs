use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container for `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Where the Claude settings, profiles and backups live.
///
/// Unset fields fall back to the layout under `~/.claude`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Claude Code directory (default: `~/.claude`).
    #[serde(default)]
    pub claude_dir: Option<PathBuf>,
    /// Profile directory (default: `<claude_dir>/profiles`).
    #[serde(default)]
    pub profiles_dir: Option<PathBuf>,
    /// Backup directory (default: `<claude_dir>/cc-switch-backups`).
    #[serde(default)]
    pub backups_dir: Option<PathBuf>,
}
