use std::path::PathBuf;

use clap::{Parser, Subcommand};
use digest_pipeline::{ChannelRegistry, DEFAULT_CONFIG_PATH};

#[derive(Parser)]
#[command(name = "tube-digest-channels", about = "Manage tracked YouTube channels")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, env = "DIGEST_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List channels
    List {
        /// Show all channels including disabled ones
        #[arg(long, short)]
        all: bool,
    },
    /// Add a new channel
    Add {
        /// Platform-assigned channel ID
        channel_id: String,
        /// Channel name/description
        name: String,
        /// Add the channel in disabled state
        #[arg(long)]
        disabled: bool,
    },
    /// Remove a channel
    Remove { channel_id: String },
    /// Enable a channel
    Enable { channel_id: String },
    /// Disable a channel
    Disable { channel_id: String },
    /// Rename a channel
    Rename { channel_id: String, name: String },
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut registry = ChannelRegistry::open(&cli.config)?;

    match cli.command {
        Command::List { all } => list_channels(&registry, all),
        Command::Add {
            channel_id,
            name,
            disabled,
        } => {
            let enabled = !disabled;
            registry.add_channel(&channel_id, &name, enabled)?;
            let status = if enabled { "enabled" } else { "disabled" };
            println!("Added channel '{name}' ({channel_id}) - {status}");
        }
        Command::Remove { channel_id } => {
            registry.remove_channel(&channel_id)?;
            println!("Removed channel {channel_id}");
        }
        Command::Enable { channel_id } => {
            registry.enable_channel(&channel_id)?;
            println!("Enabled channel {channel_id}");
        }
        Command::Disable { channel_id } => {
            registry.disable_channel(&channel_id)?;
            println!("Disabled channel {channel_id}");
        }
        Command::Rename { channel_id, name } => {
            registry.rename_channel(&channel_id, &name)?;
            println!("Renamed channel {channel_id} to '{name}'");
        }
    }

    Ok(())
}

fn list_channels(registry: &ChannelRegistry, all: bool) {
    let channels = registry.channels(!all);

    if channels.is_empty() {
        println!("No channels configured.");
        return;
    }

    let line = "=".repeat(80);
    println!("\n{line}");
    println!("{:<30} {:<30} {:<10}", "ID", "Name", "Status");
    println!("{line}");

    for channel in &channels {
        let status = if channel.enabled { "Enabled" } else { "Disabled" };
        println!("{:<30} {:<30} {:<10}", channel.id, channel.name, status);
    }

    println!("{line}");
    println!("Total: {} channel(s)", channels.len());

    if !all {
        println!("\nShowing enabled channels only. Use --all to see all channels.");
    }
    println!();
}
