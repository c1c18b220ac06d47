use anyhow::Result;
use colored::Colorize;
use humansize::{format_size, BINARY};

use crate::core::config::load_dotenv;
use crate::core::error_log::MAX_LOG_SIZE;
use crate::core::MonitorConfig;

/// Handle 'config' command - print the effective configuration
pub fn execute() -> Result<()> {
    let source = load_dotenv(std::path::Path::new("."));
    let config = MonitorConfig::from_env();

    println!("{}", "Effective configuration".white().bold());
    println!("{}", "━".repeat(40).dimmed());
    match source {
        Some(path) => println!("{} {}", "Loaded from:".dimmed(), path.display()),
        None => println!("{}", "No .env file found, using environment and defaults".dimmed()),
    }
    println!();

    for (key, value) in describe(&config) {
        println!("  {:<24} {}", key.cyan(), value);
    }
    println!();

    match config.validate() {
        Ok(()) => println!("{}", "✓ Configuration is valid".green()),
        Err(e) => println!("{} {}", "✗".red().bold(), e.to_string().red()),
    }

    Ok(())
}

/// Key/value rows shown by the config command
pub fn describe(config: &MonitorConfig) -> Vec<(&'static str, String)> {
    let log_size = std::fs::metadata(&config.log_file)
        .map(|meta| format_size(meta.len(), BINARY))
        .unwrap_or_else(|_| "not created yet".to_string());

    vec![
        ("URL", config.url.clone()),
        ("SENSOR_ID", config.sensor_id.clone()),
        ("SOUND_HIGH_THRESHOLD", config.sound_high_threshold.to_string()),
        ("SOUND_MEDIUM_THRESHOLD", config.sound_medium_threshold.to_string()),
        ("FANOUT", config.fanout.to_string()),
        ("POLL_INTERVAL_MS", config.poll_interval_ms.to_string()),
        ("REQUEST_TIMEOUT_SECS", config.request_timeout_secs.to_string()),
        ("LOG_FILE", config.log_file.display().to_string()),
        ("  size", log_size),
        ("  rotates above", format_size(MAX_LOG_SIZE, BINARY)),
    ]
}
