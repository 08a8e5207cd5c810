//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `config` - Scoring config commands (show, path)
//! - `core` - Shared utilities (load_config, load_snapshot)
//! - `decide` - Evaluate a purchase and optionally record it
//! - `history` - List recorded decisions
//! - `vocab` - List categories and emotions

pub mod config;
pub mod core;
pub mod decide;
pub mod history;
pub mod vocab;

// Re-export command functions for main.rs
pub use config::*;
pub use core::*;
pub use decide::*;
pub use history::*;
pub use vocab::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
