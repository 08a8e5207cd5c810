//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Smartie - should you buy it?
#[derive(Parser)]
#[command(name = "smartie")]
#[command(about = "Purchase decision coach: buy, wait or skip", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Scoring config override (defaults to the data-dir override, then built-in tuning)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a purchase
    Decide(DecideArgs),

    /// Show recorded decisions
    History {
        /// Decision log (defaults to the data directory)
        #[arg(long)]
        log: Option<PathBuf>,

        /// Maximum number of records to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Inspect the scoring configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },

    /// List categories and emotional states
    Vocab,
}

#[derive(Args, Debug, Clone)]
pub struct DecideArgs {
    /// What you want to buy
    #[arg(short, long)]
    pub item: String,

    /// Price (e.g. 49.99 or "£1,200")
    #[arg(short, long)]
    pub cost: String,

    /// Category: food, tech, entertainment, clothing, health, transport, home, other
    #[arg(long, default_value = "other")]
    pub category: String,

    /// How much you want it (1-10)
    #[arg(long, allow_hyphen_values = true)]
    pub desire: i64,

    /// How soon you need it (1-10)
    #[arg(long, allow_hyphen_values = true)]
    pub urgency: i64,

    /// How useful it will be (1-10)
    #[arg(long, allow_hyphen_values = true)]
    pub usefulness: i64,

    /// How you feel right now (happy, stressed, bored, excited, sad, calm, anxious, tired)
    #[arg(short, long)]
    pub emotion: Option<String>,

    /// The offer expires soon (suppresses the wait suggestion)
    #[arg(long)]
    pub time_sensitive: bool,

    /// Budgets, goals and recent spending as JSON
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Append the decision to this log (use --record-default for the data directory log)
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Append the decision to the default log in the data directory
    #[arg(long, conflicts_with = "record")]
    pub record_default: bool,

    /// Print the decision as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective scoring config as TOML
    Show,
    /// Show where the override file is read from
    Path,
}
