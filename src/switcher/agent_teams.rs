//! Experimental agent-teams toggle stored in the live settings.

use serde_json::Value;

use crate::error::StoreError;
use crate::store::{BackupManager, SettingsDocument, SettingsStore};

pub const AGENT_TEAMS_ENV_KEY: &str = "CLAUDE_CODE_EXPERIMENTAL_AGENT_TEAMS";
pub const DEFAULT_TEAMMATE_MODE: &str = "tmux";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentTeamsStatus {
    pub enabled: bool,
    pub teammate_mode: Option<String>,
}

impl AgentTeamsStatus {
    pub fn from_settings(settings: &SettingsDocument) -> Self {
        Self {
            enabled: settings.env_var(AGENT_TEAMS_ENV_KEY) == Some("1"),
            teammate_mode: settings.teammate_mode().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AgentTeams {
    settings: SettingsStore,
    backups: BackupManager,
}

impl AgentTeams {
    pub fn new(settings: SettingsStore, backups: BackupManager) -> Self {
        Self { settings, backups }
    }

    /// Missing settings read as disabled rather than an error.
    pub fn status(&self) -> Result<AgentTeamsStatus, StoreError> {
        match self.settings.load() {
            Ok(settings) => Ok(AgentTeamsStatus::from_settings(&settings)),
            Err(e) if e.is_not_found() => Ok(AgentTeamsStatus {
                enabled: false,
                teammate_mode: None,
            }),
            Err(e) => Err(e),
        }
    }

    /// Enable, defaulting the teammate mode when none is set.
    pub fn enable(&self) -> Result<(), StoreError> {
        self.mutate(|settings| {
            settings
                .env_mut()
                .insert(AGENT_TEAMS_ENV_KEY.to_string(), Value::String("1".into()));
            if settings.teammate_mode().is_none() {
                settings.set_teammate_mode(DEFAULT_TEAMMATE_MODE);
            }
        })
    }

    pub fn disable(&self) -> Result<(), StoreError> {
        self.mutate(|settings| {
            settings.env_mut().shift_remove(AGENT_TEAMS_ENV_KEY);
        })
    }

    pub fn set_teammate_mode(&self, mode: &str) -> Result<(), StoreError> {
        self.mutate(|settings| settings.set_teammate_mode(mode))
    }

    fn mutate(&self, change: impl FnOnce(&mut SettingsDocument)) -> Result<(), StoreError> {
        self.backups.backup()?;
        let mut settings = self.settings.load()?;
        change(&mut settings);
        self.settings.save(&settings)
    }
}
