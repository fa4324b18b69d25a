//! Binary entrypoint for the Labyrinth CLI.
//!
//! Commands:
//! - `play [--rooms <path>] [--start <room>] [--script <path>]` - play a game
//! - `init [--rooms <path>]` - write a starter `config.toml` and optionally the built-in room table
//! - `check [--rooms <path>]` - validate config and room table and print a summary
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use labyrinth::config::{Config, DEFAULT_CONFIG_PATH};
use labyrinth::game::{
    default_commands, default_registry, load_rooms_from_json, rooms_to_json, RoomRegistry,
    ScriptedConsole, Session, StdConsole,
};
use labyrinth::logutil::init_logging;

#[derive(Parser)]
#[command(name = "labyrinth")]
#[command(about = "A text treasure hunt through a small labyrinth")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game on the console
    Play {
        /// JSON room table to use instead of the configured one
        #[arg(short, long)]
        rooms: Option<String>,

        /// Room to start in
        #[arg(short, long)]
        start: Option<String>,

        /// Read commands from a file instead of stdin and print the transcript
        #[arg(long)]
        script: Option<String>,
    },
    /// Write a default configuration file
    Init {
        /// Also write the built-in room table as JSON to this path
        #[arg(short, long)]
        rooms: Option<String>,
    },
    /// Validate configuration and room table
    Check {
        /// JSON room table to check instead of the configured one
        #[arg(short, long)]
        rooms: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    match cli.command {
        Commands::Play {
            rooms,
            start,
            script,
        } => {
            let mut config = Config::load_or_default(&config_path, cli.config.is_some())?;
            init_logging(Some(&config.logging), cli.verbose);
            if let Some(start) = start {
                config.game.start_room = start;
            }
            let registry = load_registry(rooms.as_deref().or(config.game.rooms_file.as_deref()))?;
            let rules = config.rules();

            match script {
                Some(path) => {
                    let body = std::fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read script {}", path))?;
                    let mut session = Session::new(
                        registry,
                        default_commands(),
                        rules,
                        ScriptedConsole::from_script(&body),
                    )?;
                    session.run();
                    let console = session.into_console();
                    println!("{}", console.transcript());
                }
                None => {
                    let mut session =
                        Session::new(registry, default_commands(), rules, StdConsole::new())?;
                    session.run();
                }
            }
        }
        Commands::Init { rooms } => {
            init_logging(None, cli.verbose);
            Config::create_default(&config_path)?;
            println!("Configuration file created at {}", config_path);
            if let Some(path) = rooms {
                let json = rooms_to_json(&default_registry())?;
                std::fs::write(&path, json)
                    .with_context(|| format!("Failed to write room table {}", path))?;
                println!("Room table written to {}", path);
            }
        }
        Commands::Check { rooms } => {
            let config = Config::load_or_default(&config_path, cli.config.is_some())?;
            init_logging(Some(&config.logging), cli.verbose);
            let registry = load_registry(rooms.as_deref().or(config.game.rooms_file.as_deref()))?;
            if !registry.contains(&config.game.start_room) {
                anyhow::bail!(
                    "start room '{}' is not in the room table",
                    config.game.start_room
                );
            }
            println!(
                "OK: {} rooms, {} puzzles, {} items, start '{}'",
                registry.len(),
                registry.puzzle_count(),
                registry.item_count(),
                config.game.start_room
            );
        }
    }

    Ok(())
}

fn load_registry(path: Option<&str>) -> Result<RoomRegistry> {
    match path {
        Some(path) => {
            info!("Loading room table from {}", path);
            load_rooms_from_json(path).with_context(|| format!("Invalid room table {}", path))
        }
        None => Ok(default_registry()),
    }
}
