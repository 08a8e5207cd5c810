//! Financial snapshot read from a local JSON file

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::SnapshotSource;
use crate::error::{Error, Result};
use crate::models::FinancialSnapshot;

/// Snapshot exported as a single JSON document
pub struct JsonSnapshotFile {
    path: PathBuf,
}

impl JsonSnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSource for JsonSnapshotFile {
    fn name(&self) -> &str {
        "json-file"
    }

    fn load(&self) -> Result<FinancialSnapshot> {
        if !self.path.exists() {
            return Err(Error::Store(format!(
                "Snapshot file not found: {}",
                self.path.display()
            )));
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let snapshot: FinancialSnapshot = serde_json::from_reader(reader)?;

        debug!(
            budgets = snapshot.budgets.len(),
            goals = snapshot.goals.len(),
            history = snapshot.recent_spending.len(),
            "Loaded snapshot from {}",
            self.path.display()
        );

        Ok(snapshot)
    }
}
