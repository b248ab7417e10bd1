use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tube_tally::{OutputFormat, commands, config};

#[derive(Parser)]
#[command(name = "tubetally")]
#[command(about = "Total a YouTube playlist's watch time across playback speeds")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate watch time for a playlist
    Calculate {
        #[arg(help = "Playlist URL or bare playlist id")]
        url: String,
        #[arg(long, default_value = "1", help = "First video position (1-based)")]
        from: usize,
        #[arg(long, help = "Last video position (inclusive; defaults to the end)")]
        to: Option<usize>,
        #[arg(
            long,
            value_delimiter = ',',
            help = "Playback speeds to project (e.g. 1.0,1.5,2.0)"
        )]
        speeds: Option<Vec<f64>>,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// List configuration
    Config(ConfigArgs),
    /// Manage the YouTube API key
    Key(KeyArgs),
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Set { key: String, value: String },
    Get { key: String },
}

#[derive(Args)]
struct KeyArgs {
    #[command(subcommand)]
    action: KeyAction,
}

#[derive(Subcommand)]
enum KeyAction {
    /// Store the API key
    Set {
        #[arg(help = "YouTube Data API key")]
        key: String,
    },
    /// Show where the key is stored
    Status,
    /// Remove the stored key
    Clear,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load()?;

    match &cli.command {
        Commands::Calculate {
            url,
            from,
            to,
            speeds,
            format,
        } => {
            commands::calculate::run(&config, url, *from, *to, speeds.as_deref(), *format)?;
        }
        Commands::Config(args) => match &args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Set { key, value } => commands::config::set(key, value, &config)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
        },
        Commands::Key(args) => match &args.action {
            KeyAction::Set { key } => commands::key::set(&config, key)?,
            KeyAction::Status => commands::key::status(&config)?,
            KeyAction::Clear => commands::key::clear(&config)?,
        },
    }

    Ok(())
}
