mod commands;
mod output;
mod seed;
mod theme;

use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};

use commands::{
    feed::{handle_feed, FeedArgs},
    notifications::{handle_notifications, NotificationsArgs},
    stories::{handle_stories, StoriesArgs},
};
use output::{GlobalOptions, OutputFormat, OutputManager};
use seed::Seed;

#[derive(Parser)]
#[command(name = "townhall")]
#[command(version = "0.1.0")]
#[command(
    about = "Inspect a townhall social session",
    long_about = r#"Seeds an in-memory social session and renders the views a client would
show: the visibility-filtered feed, the story bar, and the notification inbox.

Commands:
  feed            Posts visible to a viewer, newest first
  stories         Active stories grouped per author, with seen/unseen state
  notifications   Inbox, unread first
"#
)]
#[command(subcommand_required = true, arg_required_else_help = true)]
struct Cli {
    /// Seed file (TOML); the built-in demo dataset is used when omitted
    #[arg(long, env = "TOWNHALL_SEED")]
    seed: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    output: OutputFormat,

    /// Suppress output (only errors will be shown)
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the feed visible to a viewer
    Feed(FeedArgs),

    /// Show the story bar for a viewer
    Stories(StoriesArgs),

    /// Show the notification inbox
    Notifications(NotificationsArgs),
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let output = OutputManager::new(GlobalOptions {
        output_format: cli.output.clone(),
        quiet: cli.quiet,
        no_color: cli.no_color,
    });

    if let Err(err) = execute(cli, &output) {
        output.error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

fn execute(cli: Cli, output: &OutputManager) -> Result<()> {
    let seed = match &cli.seed {
        Some(path) => Seed::load(path)?,
        None => Seed::demo(),
    };
    let (session, store) = seed.into_state(Utc::now())?;

    match cli.command {
        Commands::Feed(args) => handle_feed(args, &session, &store, output),
        Commands::Stories(args) => handle_stories(args, &session, &store, output),
        Commands::Notifications(args) => handle_notifications(args, &session, &store, output),
    }
}
