//! Config-related command implementations (show, path)

use std::path::Path;

use anyhow::{Context, Result};
use smartie_core::default_config_path;

use super::load_config;

/// Print the effective scoring config
pub fn cmd_config_show(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;
    println!("{}", rendered);
    Ok(())
}

/// Show which override file is (or would be) used
pub fn cmd_config_path(config_path: Option<&Path>) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .or_else(default_config_path);

    match path {
        Some(path) => {
            let status = if path.exists() {
                "✓ Custom"
            } else {
                "not present, using built-in defaults"
            };
            println!("Override file: {} ({})", path.display(), status);
        }
        None => println!("Override file: (not available, using built-in defaults)"),
    }

    println!();
    println!("To customize scoring:");
    println!("  1. smartie config show > <override file>");
    println!("  2. Edit the values you want to change (others can be deleted)");

    Ok(())
}
