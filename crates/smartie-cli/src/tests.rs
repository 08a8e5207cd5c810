//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use smartie_core::test_utils::sample_snapshot;
use smartie_core::{DecisionSink, JsonlDecisionLog, Recommendation};
use tempfile::TempDir;

use crate::cli::{Cli, Commands, DecideArgs};
use crate::commands::{self, truncate};

fn decide_args(item: &str, cost: &str, category: &str) -> DecideArgs {
    DecideArgs {
        item: item.to_string(),
        cost: cost.to_string(),
        category: category.to_string(),
        desire: 5,
        urgency: 5,
        usefulness: 5,
        emotion: None,
        time_sensitive: false,
        snapshot: None,
        record: None,
        record_default: false,
        json: true,
    }
}

/// Write the sample snapshot to a temp dir, returning its path
fn write_snapshot(dir: &Path) -> PathBuf {
    let path = dir.join("snapshot.json");
    fs::write(&path, serde_json::to_string(&sample_snapshot()).unwrap()).unwrap();
    path
}

// ========== Decide Command Tests ==========

#[test]
fn test_cmd_decide_overrun_is_skipped() {
    let dir = TempDir::new().unwrap();
    let mut args = decide_args("Takeaway feast", "£120", "food");
    args.desire = 9;
    args.urgency = 8;
    args.usefulness = 3;
    args.emotion = Some("stressed".to_string());
    args.snapshot = Some(write_snapshot(dir.path()));

    let decision = commands::cmd_decide(None, &args).unwrap();
    assert_eq!(decision.recommendation, Recommendation::Skip);
    assert!(decision.wait_suggestion.is_some());
    assert!(!decision.alternatives.is_empty());
}

#[test]
fn test_cmd_decide_without_snapshot() {
    let mut args = decide_args("Bus pass", "15", "transport");
    args.desire = 4;
    args.urgency = 2;
    args.usefulness = 8;
    args.emotion = Some("calm".to_string());

    let decision = commands::cmd_decide(None, &args).unwrap();
    // No budget, so light impact: 50 + 15 + 20 + 5 + 5
    assert_eq!(decision.score, 95);
    assert_eq!(decision.recommendation, Recommendation::Buy);
    assert!(decision.financial_impact.contains("No budget set"));
}

#[test]
fn test_cmd_decide_invalid_input() {
    let args = decide_args("", "abc", "yachts");
    assert!(commands::cmd_decide(None, &args).is_err());
}

#[test]
fn test_cmd_decide_missing_snapshot_file() {
    let dir = TempDir::new().unwrap();
    let mut args = decide_args("Lamp", "30", "home");
    args.snapshot = Some(dir.path().join("missing.json"));
    assert!(commands::cmd_decide(None, &args).is_err());
}

#[test]
fn test_cmd_decide_records_to_log() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("logs").join("decisions.jsonl");
    let mut args = decide_args("Keyboard", "85", "tech");
    args.record = Some(log_path.clone());

    let decision = commands::cmd_decide(None, &args).unwrap();

    let records = JsonlDecisionLog::new(&log_path).unwrap().list().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].request.item_name(), "Keyboard");
    assert_eq!(records[0].decision, decision);
}

#[test]
fn test_cmd_decide_with_config_override() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("decision.toml");
    fs::write(&config_path, "[tiers]\nbuy_threshold = 98\n").unwrap();

    let mut args = decide_args("Bus pass", "15", "transport");
    args.desire = 4;
    args.urgency = 2;
    args.usefulness = 8;
    args.emotion = Some("calm".to_string());

    let decision = commands::cmd_decide(Some(&config_path), &args).unwrap();
    assert_eq!(decision.score, 95);
    assert_eq!(decision.recommendation, Recommendation::Wait);
}

#[test]
fn test_cmd_decide_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let args = decide_args("Lamp", "30", "home");
    let result = commands::cmd_decide(Some(&dir.path().join("nope.toml")), &args);
    assert!(result.is_err());
}

// ========== History Command Tests ==========

#[test]
fn test_cmd_history_empty() {
    let dir = TempDir::new().unwrap();
    let result = commands::cmd_history(Some(&dir.path().join("decisions.jsonl")), 20);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_history_with_records() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("decisions.jsonl");
    for item in ["Trainers", "A very long item name that will need truncating"] {
        let mut args = decide_args(item, "60", "clothing");
        args.record = Some(log_path.clone());
        commands::cmd_decide(None, &args).unwrap();
    }

    assert!(commands::cmd_history(Some(&log_path), 1).is_ok());
}

// ========== Config & Vocab Command Tests ==========

#[test]
fn test_cmd_config_show_and_path() {
    assert!(commands::cmd_config_show(None).is_ok());
    assert!(commands::cmd_config_path(None).is_ok());
}

#[test]
fn test_cmd_vocab() {
    assert!(commands::cmd_vocab().is_ok());
}

#[test]
fn test_load_snapshot_defaults_to_empty() {
    let snapshot = commands::load_snapshot(None).unwrap();
    assert!(snapshot.budgets.is_empty());
    assert!(snapshot.goals.is_empty());
}

// ========== Argument Parsing Tests ==========

#[test]
fn test_parse_decide_args() {
    let cli = Cli::try_parse_from([
        "smartie",
        "decide",
        "--item",
        "Headphones",
        "--cost",
        "120",
        "--category",
        "tech",
        "--desire",
        "8",
        "--urgency",
        "3",
        "--usefulness",
        "6",
        "--emotion",
        "bored",
        "--time-sensitive",
    ])
    .unwrap();

    match cli.command {
        Commands::Decide(args) => {
            assert_eq!(args.item, "Headphones");
            assert_eq!(args.desire, 8);
            assert_eq!(args.emotion.as_deref(), Some("bored"));
            assert!(args.time_sensitive);
            assert!(!args.json);
        }
        _ => panic!("expected decide"),
    }
}

#[test]
fn test_parse_rejects_conflicting_record_flags() {
    let result = Cli::try_parse_from([
        "smartie",
        "decide",
        "--item",
        "Lamp",
        "--cost",
        "30",
        "--desire",
        "5",
        "--urgency",
        "5",
        "--usefulness",
        "5",
        "--record",
        "log.jsonl",
        "--record-default",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_parse_negative_slider_is_accepted_for_clamping() {
    let cli = Cli::try_parse_from([
        "smartie",
        "decide",
        "--item",
        "Lamp",
        "--cost",
        "30",
        "--desire",
        "-2",
        "--urgency",
        "5",
        "--usefulness",
        "5",
    ])
    .unwrap();
    match cli.command {
        Commands::Decide(args) => assert_eq!(args.desire, -2),
        _ => panic!("expected decide"),
    }
}

// ========== Helper Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a longer string", 8), "a lon...");
    assert_eq!(truncate("£££££", 4), "£...");
}
