//! Shared utilities for command implementations
//!
//! - `load_config` - Resolve the scoring config (explicit file, data-dir override, built-in)
//! - `load_snapshot` - Read the financial snapshot, or start from an empty one

use std::path::Path;

use anyhow::{bail, Context, Result};
use smartie_core::{FinancialSnapshot, JsonSnapshotFile, ScoringConfig, SnapshotSource};

/// Load the scoring config; an explicitly named file must exist
pub fn load_config(config_path: Option<&Path>) -> Result<ScoringConfig> {
    if let Some(path) = config_path {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
    }
    ScoringConfig::load(config_path).context("Failed to load scoring config")
}

/// Load a snapshot file, or an empty snapshot when none was given
pub fn load_snapshot(snapshot_path: Option<&Path>) -> Result<FinancialSnapshot> {
    match snapshot_path {
        Some(path) => JsonSnapshotFile::new(path)
            .load()
            .with_context(|| format!("Failed to load snapshot from {}", path.display())),
        None => {
            tracing::debug!("No snapshot given, evaluating without budgets or goals");
            Ok(FinancialSnapshot::default())
        }
    }
}
