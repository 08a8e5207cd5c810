//! Collaborator seams around the decision engine
//!
//! The engine itself performs no I/O. Callers feed it a snapshot from a
//! [`SnapshotSource`] and may hand the result to a [`DecisionSink`] if the user
//! chooses to record it.
//!
//! # Implementations
//!
//! - `JsonSnapshotFile` reads a snapshot exported as JSON
//! - `JsonlDecisionLog` appends records to a JSON-lines file
//!
//! Record ids follow `dec-YYYYMMDD-HHMMSS-mmm-<first 8 hex chars of the request hash>`.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::decision::Decision;
use crate::error::Result;
use crate::models::{FinancialSnapshot, PurchaseRequest};

mod decision_log;
mod snapshot_file;

pub use decision_log::JsonlDecisionLog;
pub use snapshot_file::JsonSnapshotFile;

/// A decision the user chose to keep, alongside the request that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRecord {
    pub id: String,
    pub recorded_at: DateTime<Utc>,
    /// SHA-256 of the request, for spotting repeat evaluations of the same purchase
    pub request_hash: String,
    pub request: PurchaseRequest,
    pub decision: Decision,
}

impl DecisionRecord {
    /// Wrap a decision for persistence, stamped with the current time
    pub fn new(request: PurchaseRequest, decision: Decision) -> Result<Self> {
        Self::at(request, decision, Utc::now())
    }

    /// Wrap a decision with an explicit timestamp
    pub fn at(
        request: PurchaseRequest,
        decision: Decision,
        recorded_at: DateTime<Utc>,
    ) -> Result<Self> {
        let request_hash = request_hash(&request)?;
        Ok(Self {
            id: format!(
                "dec-{}-{}",
                recorded_at.format("%Y%m%d-%H%M%S-%3f"),
                &request_hash[..8]
            ),
            recorded_at,
            request_hash,
            request,
            decision,
        })
    }
}

/// Default decision log location (~/.local/share/smartie/decisions.jsonl on Linux)
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("smartie").join("decisions.jsonl"))
}

/// Hex SHA-256 of a request's canonical JSON form
pub fn request_hash(request: &PurchaseRequest) -> Result<String> {
    let bytes = serde_json::to_vec(request)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

/// Read-only source of the user's financial snapshot
pub trait SnapshotSource: Send + Sync {
    /// Human-readable name for this source
    fn name(&self) -> &str;

    /// Load the current snapshot
    fn load(&self) -> Result<FinancialSnapshot>;
}

/// Destination for decisions the user chose to record
pub trait DecisionSink: Send + Sync {
    /// Human-readable name for this sink
    fn name(&self) -> &str;

    /// Persist a record
    fn record(&self, record: &DecisionRecord) -> Result<()>;

    /// List stored records, newest first
    fn list(&self) -> Result<Vec<DecisionRecord>>;
}
