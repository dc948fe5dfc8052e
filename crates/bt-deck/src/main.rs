//! BlockTrace pitch deck CLI

use bt_core::deck::{self, pitch, Deck, DeckFormat};
use bt_core::SiteResult;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "bt-deck")]
#[command(about = "BlockTrace investor deck outline")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the full slide outline
    Outline {
        /// Output format (markdown, json)
        #[arg(short, long, default_value = "markdown")]
        output: String,

        /// Output file (defaults to stdout)
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,

        /// Include the platform slide after the architecture slide
        #[arg(long)]
        platform: bool,
    },

    /// List slide names in order
    List {
        /// Include the platform slide after the architecture slide
        #[arg(long)]
        platform: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set subscriber: {}", e);
    }

    let result = match cli.command {
        Commands::Outline { output, output_file, platform } => {
            cmd_outline(&output, output_file, platform)
        }
        Commands::List { platform } => {
            cmd_list(platform);
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn build(platform: bool) -> Deck {
    let deck = pitch::deck();
    if platform {
        deck.with_platform()
    } else {
        deck
    }
}

fn cmd_outline(output: &str, output_file: Option<PathBuf>, platform: bool) -> SiteResult<()> {
    let format: DeckFormat = output.parse()?;
    let deck = build(platform);
    let content = deck::generate(&deck, format)?;

    match output_file {
        Some(path) => {
            std::fs::write(&path, &content)?;
            info!("Wrote {} slides to: {}", deck.len(), path.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}

fn cmd_list(platform: bool) {
    for slide in build(platform).slides() {
        println!("{}", slide.heading());
    }
}
