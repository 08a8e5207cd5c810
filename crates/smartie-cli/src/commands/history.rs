//! History command: list recorded decisions

use std::path::Path;

use anyhow::{anyhow, Result};
use smartie_core::{default_log_path, DecisionSink, JsonlDecisionLog};

use super::truncate;

pub fn cmd_history(log_path: Option<&Path>, limit: usize) -> Result<()> {
    let path = match log_path {
        Some(path) => path.to_path_buf(),
        None => default_log_path().ok_or_else(|| anyhow!("No data directory available"))?,
    };

    let log = JsonlDecisionLog::new(&path)?;
    let records = log.list()?;

    if records.is_empty() {
        println!("No recorded decisions in {}.", path.display());
        println!("Record one with:");
        println!("  smartie decide ... --record {}", path.display());
        return Ok(());
    }

    println!();
    println!("📜 Decision History ({} total)", records.len());
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:<17} {:<28} {:>9}  {:<5} {:>4}",
        "WHEN", "ITEM", "COST", "CALL", "CONF"
    );

    for record in records.iter().take(limit) {
        println!(
            "   {:<17} {:<28} {:>9}  {:<5} {:>3}%",
            record.recorded_at.format("%Y-%m-%d %H:%M"),
            truncate(record.request.item_name(), 28),
            format!("£{:.2}", record.request.cost()),
            record.decision.recommendation.as_str(),
            record.decision.confidence
        );
    }

    if records.len() > limit {
        println!("   ... and {} more (use --limit)", records.len() - limit);
    }
    println!();

    Ok(())
}
