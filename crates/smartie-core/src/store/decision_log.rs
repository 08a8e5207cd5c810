//! Append-only JSON-lines decision log

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use super::{DecisionRecord, DecisionSink};
use crate::error::{Error, Result};

/// One JSON record per line in a local file
pub struct JsonlDecisionLog {
    path: PathBuf,
}

impl JsonlDecisionLog {
    /// Create a log at `path`
    ///
    /// Creates the parent directory if it doesn't exist. The file itself is
    /// created on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::Store(format!(
                        "Failed to create log directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
                info!("Created decision log directory: {}", parent.display());
            }
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DecisionSink for JsonlDecisionLog {
    fn name(&self) -> &str {
        "jsonl"
    }

    fn record(&self, record: &DecisionRecord) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        info!(id = record.id, "Recorded decision to {}", self.path.display());
        Ok(())
    }

    fn list(&self) -> Result<Vec<DecisionRecord>> {
        let mut records = Vec::new();

        if !self.path.exists() {
            return Ok(records);
        }

        let reader = BufReader::new(File::open(&self.path)?);
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: DecisionRecord = serde_json::from_str(&line).map_err(|e| {
                Error::Store(format!(
                    "Corrupt record on line {} of {}: {}",
                    index + 1,
                    self.path.display(),
                    e
                ))
            })?;
            records.push(record);
        }

        // Newest first
        records.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::DecisionEngine;
    use crate::models::{Category, FinancialSnapshot, GoalPriority, GoalSnapshot};
    use crate::test_utils::request;
    use chrono::{Duration, TimeZone, Utc};
    use tempfile::TempDir;

    fn setup_test_log() -> (TempDir, JsonlDecisionLog) {
        let dir = TempDir::new().unwrap();
        let log = JsonlDecisionLog::new(dir.path().join("logs").join("decisions.jsonl")).unwrap();
        (dir, log)
    }

    fn record(cost: f64, minutes: i64) -> DecisionRecord {
        let req = request(cost, Category::Tech, 7, 4, 5, None);
        let decision = DecisionEngine::default().evaluate(&req, &FinancialSnapshot::default());
        let at = Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap() + Duration::minutes(minutes);
        DecisionRecord::at(req, decision, at).unwrap()
    }

    #[test]
    fn test_new_creates_directory() {
        let dir = TempDir::new().unwrap();
        let log_dir = dir.path().join("nested").join("dir");
        assert!(!log_dir.exists());

        let _log = JsonlDecisionLog::new(log_dir.join("decisions.jsonl")).unwrap();
        assert!(log_dir.exists());
    }

    #[test]
    fn test_list_empty() {
        let (_dir, log) = setup_test_log();
        assert!(log.list().unwrap().is_empty());
    }

    #[test]
    fn test_record_and_list_newest_first() {
        let (_dir, log) = setup_test_log();
        let older = record(100.0, 0);
        let newer = record(250.0, 30);

        log.record(&older).unwrap();
        log.record(&newer).unwrap();

        let records = log.list().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], newer);
        assert_eq!(records[1], older);
    }

    #[test]
    fn test_extreme_cost_record_lists_back() {
        let (_dir, log) = setup_test_log();
        let snapshot = FinancialSnapshot {
            goals: vec![GoalSnapshot {
                name: "Tiny goal".to_string(),
                target_amount: 1.0,
                current_amount: 0.0,
                priority: GoalPriority::High,
                weekly_contribution: None,
            }],
            ..Default::default()
        };
        let req = request(1e308, Category::Other, 5, 5, 5, None);
        let decision = DecisionEngine::default().evaluate(&req, &snapshot);
        let at = Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap();
        let extreme = DecisionRecord::at(req, decision, at).unwrap();

        log.record(&extreme).unwrap();
        log.record(&record(100.0, 5)).unwrap();

        let records = log.list().unwrap();
        assert_eq!(records.len(), 2);
        let listed = records.iter().find(|r| r.id == extreme.id).unwrap();
        assert!(listed.decision.goal_impacts[0].delay_weeks_estimate.is_finite());
        assert_eq!(listed, &extreme);
    }

    #[test]
    fn test_corrupt_line_reported() {
        let (_dir, log) = setup_test_log();
        log.record(&record(100.0, 0)).unwrap();
        let mut file = OpenOptions::new().append(true).open(log.path()).unwrap();
        writeln!(file, "{{ broken").unwrap();

        let err = log.list().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
