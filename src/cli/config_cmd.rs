use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output::{to_json, OutputFormat, OutputOptions};
use crate::core::config::AppConfig;

fn init_report(path: &Path, created: bool) -> serde_json::Value {
    serde_json::json!({
        "path": path.display().to_string(),
        "created": created,
    })
}

pub fn init(opts: &OutputOptions) -> Result<()> {
    let path = AppConfig::config_path();
    let created = if path.exists() {
        false
    } else {
        AppConfig::default()
            .save()
            .context("Failed to generate config")?;
        true
    };

    match opts.format {
        OutputFormat::Json => println!("{}", to_json(&init_report(&path, created), opts)?),
        OutputFormat::Text if created => println!("Generated config at {}", path.display()),
        OutputFormat::Text => {
            eprintln!("Config file already exists at {}", path.display());
            eprintln!("Remove it first if you want to regenerate.");
        }
    }
    Ok(())
}

pub fn check(opts: &OutputOptions) -> Result<()> {
    let path = AppConfig::config_path();
    if !path.exists() {
        println!("No config file at {} (defaults in use)", path.display());
        return Ok(());
    }

    let config = AppConfig::load().context("Failed to load config")?;
    let issues = config.validate();

    match opts.format {
        OutputFormat::Json => println!("{}", to_json(&issues, opts)?),
        OutputFormat::Text => {
            if issues.is_empty() {
                println!("Config OK: {}", path.display());
            } else {
                eprintln!("Config issues in {}:", path.display());
                for issue in &issues {
                    eprintln!("  - {}", issue);
                }
            }
        }
    }

    if !issues.is_empty() {
        anyhow::bail!("{} config issue(s) found", issues.len());
    }
    Ok(())
}

pub fn show(opts: &OutputOptions) -> Result<()> {
    let config = AppConfig::load().context("Failed to load config")?;
    match opts.format {
        OutputFormat::Json => println!("{}", to_json(&config, opts)?),
        OutputFormat::Text => {
            let text = toml::to_string_pretty(&config).context("Failed to serialize config")?;
            println!("# {}", AppConfig::config_path().display());
            print!("{}", text);
        }
    }
    Ok(())
}
