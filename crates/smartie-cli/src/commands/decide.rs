//! Decide command: evaluate a purchase and optionally record it

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use smartie_core::decision::{normalize, RawAmount, RawPurchaseInput};
use smartie_core::{
    default_log_path, Decision, DecisionEngine, DecisionRecord, DecisionSink, JsonlDecisionLog,
    Recommendation,
};

use super::{load_config, load_snapshot};
use crate::cli::DecideArgs;

/// Turn CLI arguments into raw input for the normalizer
pub fn raw_input(args: &DecideArgs) -> RawPurchaseInput {
    RawPurchaseInput {
        item_name: args.item.clone(),
        cost: RawAmount::Text(args.cost.clone()),
        category: args.category.clone(),
        desire: args.desire,
        urgency: args.urgency,
        usefulness: args.usefulness,
        emotional_state: args.emotion.clone(),
        is_time_sensitive: args.time_sensitive,
    }
}

pub fn cmd_decide(config_path: Option<&Path>, args: &DecideArgs) -> Result<Decision> {
    let engine = DecisionEngine::new(load_config(config_path)?);
    let snapshot = load_snapshot(args.snapshot.as_deref())?;

    let request = match normalize(&raw_input(args)) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("❌ Can't evaluate this purchase:");
            for violation in err.violations() {
                eprintln!("   • {}: {}", violation.field, violation.message);
            }
            return Err(anyhow!("Invalid purchase input"));
        }
    };

    let decision = engine.evaluate(&request, &snapshot);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else {
        print_decision(request.item_name(), request.cost(), &decision);
    }

    if let Some(log_path) = record_target(args)? {
        let log = JsonlDecisionLog::new(&log_path)?;
        let record = DecisionRecord::new(request, decision.clone())?;
        log.record(&record)
            .with_context(|| format!("Failed to record decision to {}", log_path.display()))?;
        if !args.json {
            println!("   📝 Recorded as {} in {}", record.id, log_path.display());
        }
    }

    Ok(decision)
}

fn record_target(args: &DecideArgs) -> Result<Option<PathBuf>> {
    if let Some(ref path) = args.record {
        return Ok(Some(path.clone()));
    }
    if args.record_default {
        return default_log_path()
            .map(Some)
            .ok_or_else(|| anyhow!("No data directory available for the default log"));
    }
    Ok(None)
}

fn print_decision(item: &str, cost: f64, decision: &Decision) {
    let (icon, verdict) = match decision.recommendation {
        Recommendation::Buy => ("✅", "Go for it"),
        Recommendation::Wait => ("⏳", "Hold off for now"),
        Recommendation::Skip => ("🛑", "Skip this one"),
    };

    println!();
    println!("🧠 Smartie on {} (£{:.2})", item, cost);
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {} {} ({}, {}% confident, score {}/100)",
        icon, verdict, decision.recommendation, decision.confidence, decision.score
    );
    println!();

    println!("   Why:");
    for reason in &decision.reasoning {
        println!("   • {}", reason);
    }
    println!();

    println!("   💭 {}", decision.emotional_insight);
    println!("   💷 {}", decision.financial_impact);
    println!("   🎲 Regret risk: {}%", decision.regret_risk);

    if !decision.alternatives.is_empty() {
        println!();
        println!("   Instead, you could:");
        for alt in &decision.alternatives {
            println!("   • {}", alt);
        }
    }

    if let Some(ref suggestion) = decision.wait_suggestion {
        println!();
        println!("   ⏰ {}", suggestion);
    }
    println!();
}
