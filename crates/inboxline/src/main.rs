//! `inboxline` - Sectioned conversation list browser
//!
//! Loads a conversation snapshot, groups it under Pinned / Today / Yesterday /
//! Last Week / Last Month / Older headers and lets you query or remove rows by
//! their flat list position.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod render;
mod snapshot;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::DateTime;
use clap::{Parser, Subcommand};
use inboxline_core::{
    Classifier, Conversation, ConversationId, ListListener, RemovalReason, SectionConfig,
    SectionIndex, SectionKind,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Sectioned conversation list browser
#[derive(Parser, Debug)]
#[command(name = "inboxline")]
#[command(about = "Browse a conversation snapshot grouped by recency", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (defaults to the user config directory)
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Classify relative to this RFC 3339 instant instead of the current time
    #[arg(long, value_name = "TIME", global = true)]
    now: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(
        short,
        long,
        value_name = "FILTER",
        default_value = "inboxline=info,inboxline_core=info",
        global = true
    )]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the sectioned list
    Show {
        /// Snapshot file (JSON array of conversations)
        snapshot: PathBuf,
    },

    /// Print the flat row position of a conversation
    Locate {
        /// Snapshot file (JSON array of conversations)
        snapshot: PathBuf,

        /// Conversation ID
        #[arg(long)]
        id: i64,
    },

    /// Remove the conversation at a flat row position and print the result
    Remove {
        /// Snapshot file (JSON array of conversations)
        snapshot: PathBuf,

        /// Flat row position, headers included
        #[arg(short, long)]
        position: usize,

        /// Why the conversation is removed (delete or archive)
        #[arg(short, long, default_value = "delete", value_parser = parse_reason)]
        reason: RemovalReason,
    },

    /// Print the conversation count of every section
    Counts {
        /// Snapshot file (JSON array of conversations)
        snapshot: PathBuf,
    },
}

fn parse_reason(s: &str) -> std::result::Result<RemovalReason, String> {
    RemovalReason::parse(s).ok_or_else(|| format!("unknown removal reason: {s}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = SectionConfig::load(&config_path)
        .with_context(|| format!("Failed to load settings from {}", config_path.display()))?;
    let classifier = classifier(cli.now.as_deref())?;

    info!(now = %classifier.now(), ?config, "Starting inboxline");

    match cli.command {
        Command::Show { snapshot } => {
            let index = build_index(&snapshot, config, &classifier)?;
            print!("{}", render::render_list(&index, &classifier));
        }
        Command::Locate { snapshot, id } => {
            let index = build_index(&snapshot, config, &classifier)?;
            match index.flat_position_for_id(ConversationId::new(id)) {
                Some(position) => println!("{position}"),
                None => bail!("Conversation {id} is not in the list"),
            }
        }
        Command::Remove {
            snapshot,
            position,
            reason,
        } => {
            let mut index = build_index(&snapshot, config, &classifier)?;
            let mut printer = RemovalPrinter;
            let removed_header = index.remove_at(position, reason, &mut printer);
            if removed_header {
                println!("section header removed");
            }
            print!("{}", render::render_list(&index, &classifier));
        }
        Command::Counts { snapshot } => {
            let index = build_index(&snapshot, config, &classifier)?;
            for kind in SectionKind::CLASSIFIED {
                println!(
                    "{:<12} {}",
                    kind.display_name(),
                    index.count_for_section_kind(kind)
                );
            }
        }
    }

    Ok(())
}

/// Settings file in the user config directory.
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("inboxline")
        .join("settings.json")
}

fn classifier(now: Option<&str>) -> Result<Classifier> {
    match now {
        Some(raw) => {
            let now = DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("Invalid --now timestamp: {raw}"))?;
            Ok(Classifier::new(&now))
        }
        None => Ok(Classifier::local()),
    }
}

fn build_index(path: &Path, config: SectionConfig, classifier: &Classifier) -> Result<SectionIndex> {
    let conversations = snapshot::load(path)?;
    let mut index = SectionIndex::new(config);
    index
        .rebuild(conversations, classifier)
        .context("Failed to section the snapshot")?;
    Ok(index)
}

/// Prints list notifications as they happen.
struct RemovalPrinter;

impl ListListener for RemovalPrinter {
    fn rows_removed(&mut self, start: usize, count: usize) {
        println!("rows removed: {start}..{}", start + count);
    }

    fn removed_for_delete(&mut self, index: &SectionIndex, conversation: &Conversation) {
        println!(
            "deleted {} ({}), {} conversations left",
            conversation.title,
            conversation.id,
            index.len()
        );
    }

    fn removed_for_archive(&mut self, index: &SectionIndex, conversation: &Conversation) {
        println!(
            "archived {} ({}), {} conversations left",
            conversation.title,
            conversation.id,
            index.len()
        );
    }
}
