use anyhow::{anyhow, Context, Result};

use crate::cli::theme;
use crate::cli::{AddArgs, AgentTeamsAction, Cli, Command, SaveArgs};
use crate::config::{Config, Paths};
use crate::profile::{
    current_provider, extract_known_fields, find_preset, find_similar_profiles, mask_token,
    PresetOverrides, Profile, ProviderTag, AUTH_TOKEN, BASE_URL, HAIKU_MODEL, OPUS_MODEL,
    SONNET_MODEL,
};
use crate::switcher::{current_profile_id, CaptureRequest, Switcher};

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load().context("Failed to load cc-switch config")?;
    let paths = Paths::resolve(&config, cli.claude_dir);
    tracing::debug!(?paths, "resolved paths");
    let switcher = Switcher::new(&paths);

    match cli.command.unwrap_or(Command::List) {
        Command::List => list(&switcher),
        Command::Use { profile_id } => use_profile(&switcher, &profile_id),
        Command::Current => current(&switcher),
        Command::Show { profile_id } => show(&switcher, &profile_id),
        Command::Add(args) => add(&switcher, args),
        Command::Save(args) => save(&switcher, args),
        Command::Delete { profile_id } => delete(&switcher, &profile_id),
        Command::History => history(&switcher),
        Command::Restore { backup_file } => restore(&switcher, &backup_file),
        Command::AgentTeams { action } => {
            agent_teams(&switcher, action.unwrap_or(AgentTeamsAction::Status))
        }
    }
}

fn list(switcher: &Switcher) -> Result<()> {
    let profiles = switcher.list_profiles()?;
    if profiles.is_empty() {
        println!(
            "{}",
            theme::warn(format!(
                "No profiles found. Create profiles in {}",
                switcher.profiles().dir().display()
            ))
        );
        return Ok(());
    }

    let settings = switcher.load_settings().ok();
    let current = settings.as_ref().and_then(current_profile_id);

    println!("{}", theme::heading("Available Profiles:"));
    for profile in &profiles {
        let marker = if Some(profile.id.as_str()) == current {
            theme::ok("✓").to_string()
        } else {
            " ".to_string()
        };
        println!(
            "  {} {} {} ({})",
            marker,
            profile.display_icon(),
            theme::heading(&profile.name),
            theme::muted(&profile.id)
        );
        if let Some(description) = profile.description.as_deref().filter(|d| !d.is_empty()) {
            println!("      {}", description);
        }
    }
    Ok(())
}

fn use_profile(switcher: &Switcher, id: &str) -> Result<()> {
    let profile = switcher.use_profile(id)?;
    println!("{}", theme::ok(format!("✓ Switched to {}", profile.name)));
    Ok(())
}

fn current(switcher: &Switcher) -> Result<()> {
    let settings = switcher.load_settings()?;
    let env_or_default = |key: &str| settings.env_var(key).unwrap_or("default").to_string();

    println!("{}", theme::heading("Current Configuration:"));
    println!(
        "  Provider: {}",
        theme::accent(current_provider(&settings).as_str())
    );
    println!(
        "  Profile: {}",
        theme::muted(current_profile_id(&settings).unwrap_or("none"))
    );
    println!("  Base URL: {}", theme::muted(env_or_default(BASE_URL)));
    println!("  Haiku Model: {}", theme::muted(env_or_default(HAIKU_MODEL)));
    println!("  Sonnet Model: {}", theme::muted(env_or_default(SONNET_MODEL)));
    println!("  Opus Model: {}", theme::muted(env_or_default(OPUS_MODEL)));
    if let Some(token) = settings.env_var(AUTH_TOKEN) {
        println!("  Token: {}", theme::muted(mask_token(token)));
    }
    Ok(())
}

fn show(switcher: &Switcher, id: &str) -> Result<()> {
    let profile = switcher.load_profile(id)?;
    println!(
        "{} {} ({})",
        profile.display_icon(),
        theme::heading(&profile.name),
        theme::muted(&profile.id)
    );
    if let Some(description) = &profile.description {
        println!("  {}", description);
    }
    for (key, value) in &profile.config.env {
        let Some(value) = value else { continue };
        let shown = if key == AUTH_TOKEN {
            mask_token(value)
        } else {
            value.clone()
        };
        println!("  {} = {}", key, theme::muted(shown));
    }
    Ok(())
}

fn add(switcher: &Switcher, args: AddArgs) -> Result<()> {
    let tag = ProviderTag::parse(&args.preset).ok_or_else(|| {
        let known: Vec<_> = ProviderTag::all().iter().map(|t| t.as_str()).collect();
        anyhow!(
            "Unknown preset '{}'. Available presets: {}",
            args.preset,
            known.join(", ")
        )
    })?;
    let preset = find_preset(tag).ok_or_else(|| anyhow!("No preset for '{}'", tag))?;

    let overrides = PresetOverrides {
        id: args.id,
        name: args.name,
        description: args.description,
        icon: args.icon,
        base_url: args.base_url,
        haiku: args.haiku,
        sonnet: args.sonnet,
        opus: args.opus,
        api_timeout_ms: args.timeout,
        disable_nonessential_traffic: args.disable_traffic,
    };
    let profile = Profile::from_preset(preset, &args.token, overrides);

    switcher.create_profile(&profile)?;
    println!(
        "{}",
        theme::ok(format!("✓ Created {} ({})", profile.name, profile.id))
    );

    if args.apply {
        switcher.apply_profile(&profile)?;
        println!("{}", theme::ok(format!("✓ Switched to {}", profile.name)));
    }
    Ok(())
}

fn save(switcher: &Switcher, args: SaveArgs) -> Result<()> {
    let settings = switcher.load_settings()?;
    let fields = extract_known_fields(&settings);

    if let Some(preset) = find_preset(current_provider(&settings)) {
        println!("{}", theme::heading("Current Configuration Detected"));
        println!("  {}", theme::muted(format!("Provider: {}", preset.name)));
    }
    if let Some(token) = fields.get(AUTH_TOKEN) {
        println!("  {}", theme::muted(format!("Token:    {}", mask_token(token))));
    }

    let profiles = switcher.list_profiles()?;
    let similar = find_similar_profiles(&profiles, &fields);
    if !similar.is_empty() {
        println!("{}", theme::warn("⚠ Similar configurations found:"));
        for (profile, why) in &similar {
            println!("  • \"{}\" - {}", profile.name, why.reason());
        }
    }

    let profile = switcher.capture_current(CaptureRequest {
        id: args.id,
        name: args.name,
        description: args.description,
        icon: args.icon,
        allow_copy: args.copy,
    })?;
    println!(
        "{}",
        theme::ok(format!("✓ Saved as \"{}\" ({})", profile.name, profile.id))
    );
    Ok(())
}

fn delete(switcher: &Switcher, id: &str) -> Result<()> {
    switcher.delete_profile(id)?;
    println!("{}", theme::ok(format!("✓ Deleted {}", id)));
    Ok(())
}

fn history(switcher: &Switcher) -> Result<()> {
    let backups = switcher.list_backups()?;
    if backups.is_empty() {
        println!("{}", theme::warn("No backups found"));
        return Ok(());
    }
    println!("{}", theme::heading("Backup History:"));
    for (i, backup) in backups.iter().enumerate() {
        println!("  {} {}", theme::muted(format!("{}.", i + 1)), backup);
    }
    Ok(())
}

fn restore(switcher: &Switcher, backup: &str) -> Result<()> {
    let safety = switcher.restore_backup(backup)?;
    println!("{}", theme::ok(format!("✓ Restored from {}", backup)));
    if let Some(safety) = safety {
        println!(
            "  {}",
            theme::muted(format!("Previous settings saved as {}", safety))
        );
    }
    Ok(())
}

fn agent_teams(switcher: &Switcher, action: AgentTeamsAction) -> Result<()> {
    let teams = switcher.agent_teams();
    match action {
        AgentTeamsAction::Status => {
            let status = teams.status()?;
            let state = if status.enabled {
                theme::ok("enabled")
            } else {
                theme::muted("disabled")
            };
            println!("Agent teams: {}", state);
            println!(
                "Teammate mode: {}",
                theme::muted(status.teammate_mode.as_deref().unwrap_or("unset"))
            );
        }
        AgentTeamsAction::Enable => {
            teams.enable()?;
            println!("{}", theme::ok("✓ Agent teams enabled"));
        }
        AgentTeamsAction::Disable => {
            teams.disable()?;
            println!("{}", theme::ok("✓ Agent teams disabled"));
        }
        AgentTeamsAction::Mode { value } => {
            teams.set_teammate_mode(&value)?;
            println!("{}", theme::ok(format!("✓ Teammate mode set to {}", value)));
        }
    }
    Ok(())
}
