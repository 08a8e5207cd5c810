//! Vocab command: the closed sets of categories and emotions

use anyhow::Result;
use smartie_core::{decision::alternatives_for, Category, Emotion};

pub fn cmd_vocab() -> Result<()> {
    println!();
    println!("🏷️  Categories");
    println!("   ─────────────────────────────────────────────");
    for category in Category::all() {
        println!(
            "   {:<14} {:<22} {} alternatives",
            category.as_str(),
            category.label(),
            alternatives_for(*category).len()
        );
    }

    println!();
    println!("💭 Emotional states (impulse risk 1-10, 5 when not given)");
    println!("   ─────────────────────────────────────────────");
    for emotion in Emotion::all() {
        let weight = emotion.impulsiveness_weight();
        println!(
            "   {:<10} {:>2}  {}",
            emotion.as_str(),
            weight,
            "▮".repeat(weight as usize)
        );
    }
    println!();

    Ok(())
}
