//! Command-line surface.

pub mod commands;
pub mod theme;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use commands::run;

#[derive(Parser, Debug)]
#[command(
    name = "cc-switch",
    version,
    about = "Quick Claude Code configuration switcher"
)]
pub struct Cli {
    /// Claude Code directory (default: ~/.claude)
    #[arg(long, global = true, env = "CC_SWITCH_CLAUDE_DIR", value_name = "DIR")]
    pub claude_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available profiles
    List,
    /// Switch to a provider profile
    Use {
        /// Profile id
        profile_id: String,
    },
    /// Show current configuration
    Current,
    /// Show a stored profile (token masked)
    Show {
        /// Profile id
        profile_id: String,
    },
    /// Create a profile from a provider preset
    Add(AddArgs),
    /// Save the current configuration as a new profile
    Save(SaveArgs),
    /// Delete a stored profile
    Delete {
        /// Profile id
        profile_id: String,
    },
    /// Show backup history
    History,
    /// Restore settings from a backup
    Restore {
        /// Backup file name, as listed by `history`
        backup_file: String,
    },
    /// Inspect or toggle experimental agent teams
    AgentTeams {
        #[command(subcommand)]
        action: Option<AgentTeamsAction>,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Preset: anthropic, zhipu-coding, openrouter, cloudflare-worker, custom
    pub preset: String,
    /// API token (ANTHROPIC_AUTH_TOKEN)
    #[arg(long)]
    pub token: String,
    /// Profile id (default: derived from name or preset)
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub icon: Option<String>,
    #[arg(long)]
    pub base_url: Option<String>,
    #[arg(long)]
    pub haiku: Option<String>,
    #[arg(long)]
    pub sonnet: Option<String>,
    #[arg(long)]
    pub opus: Option<String>,
    /// API_TIMEOUT_MS
    #[arg(long, value_name = "MS")]
    pub timeout: Option<String>,
    /// CLAUDE_CODE_DISABLE_NONESSENTIAL_TRAFFIC
    #[arg(long, value_name = "VALUE")]
    pub disable_traffic: Option<String>,
    /// Apply the profile right after creating it
    #[arg(long = "use")]
    pub apply: bool,
}

#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Profile id (default: suggested from the detected provider)
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub icon: Option<String>,
    /// Save even if the current profile is already stored
    #[arg(long)]
    pub copy: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum AgentTeamsAction {
    Status,
    Enable,
    Disable,
    /// Set teammateMode
    Mode { value: String },
}
