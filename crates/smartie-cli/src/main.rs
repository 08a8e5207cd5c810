//! Smartie CLI - purchase decision coach
//!
//! Usage:
//!   smartie decide --item "Headphones" --cost 120 --category tech \
//!       --desire 8 --urgency 3 --usefulness 6 --snapshot me.json
//!   smartie history           Show recorded decisions
//!   smartie config show       Print effective scoring config
//!   smartie vocab             List categories and emotions

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();

    match cli.command {
        Commands::Decide(args) => commands::cmd_decide(cli.config.as_deref(), &args).map(|_| ()),
        Commands::History { log, limit } => commands::cmd_history(log.as_deref(), limit),
        Commands::Config { action } => match action {
            None | Some(ConfigAction::Show) => commands::cmd_config_show(cli.config.as_deref()),
            Some(ConfigAction::Path) => commands::cmd_config_path(cli.config.as_deref()),
        },
        Commands::Vocab => commands::cmd_vocab(),
    }
}
