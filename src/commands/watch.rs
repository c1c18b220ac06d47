//! Watch command handler.
//!
//! Wires configuration, the fetch pipeline, the poll loop, the renderer and
//! the alert dispatcher together and runs until Ctrl+C.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::{
    AlertDispatcher, ErrorLog, HttpFetcher, MonitorConfig, PollState, Poller, Reading,
    ReadingSource, SensorFeed,
};
use crate::platform;
use crate::ui;

/// Execute the watch command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let mut config = MonitorConfig::load();
    apply_overrides(&mut config, matches);
    config.validate().context("Invalid configuration")?;

    let no_sound = matches.get_flag("no-sound");
    let no_wait = matches.get_flag("no-wait");

    let error_log = Arc::new(ErrorLog::new(&config.log_file));
    let fetcher = HttpFetcher::new(&config.url, config.request_timeout(), Arc::clone(&error_log))
        .context("Failed to build HTTP client")?;
    let source: Arc<dyn ReadingSource> = Arc::new(SensorFeed::new(fetcher, &config.sensor_id));
    let dispatcher = AlertDispatcher::new(
        config.alert_config(),
        platform::default_sink(no_sound),
        Arc::clone(&error_log),
    );
    let poller = Poller::new(source, Arc::new(PollState::new()), config.poller_config())
        .context("Failed to start poll runtime")?;

    log::info!(
        "Watching sensor {} at {} (errors -> {})",
        config.sensor_id,
        config.url,
        config.log_file.display()
    );

    if !no_wait {
        print!("{}", ui::full_legend());
        ui::wait_for_enter("Press Enter to start.")?;
    }

    let shutdown = Arc::new(AtomicBool::new(false));
    let shutdown_flag = Arc::clone(&shutdown);
    ctrlc::set_handler(move || {
        println!();
        println!("{}", "Stopping after the current cycle...".yellow().bold());
        shutdown_flag.store(true, Ordering::Relaxed);
    })
    .map_err(|e| anyhow::anyhow!("Failed to set Ctrl+C handler: {}", e))?;

    ui::clear_screen()?;
    ui::dimmed(&format!(
        "Waiting for readings from {}... (Ctrl+C to quit)",
        config.sensor_id
    ));

    poller.run(&shutdown, |reading| present(reading, &dispatcher, &error_log));

    Ok(())
}

/// Draw an admitted reading and sound its alert.
fn present(reading: &Reading, dispatcher: &AlertDispatcher, error_log: &ErrorLog) {
    if let Err(e) = ui::redraw(&ui::format_reading(reading)) {
        error_log.record(&format!("Error drawing reading: {}", e));
    }

    let level = dispatcher.dispatch(reading);
    log::debug!("Alert level {} for {}", level.as_str(), reading.timestamp_millis);
}

/// Apply command-line overrides on top of the environment configuration.
pub fn apply_overrides(config: &mut MonitorConfig, matches: &ArgMatches) {
    if let Some(url) = matches.get_one::<String>("url") {
        config.url = url.clone();
    }
    if let Some(sensor) = matches.get_one::<String>("sensor") {
        config.sensor_id = sensor.clone();
    }
    if let Some(&fanout) = matches.get_one::<usize>("fanout") {
        config.fanout = fanout;
    }
    if let Some(&interval) = matches.get_one::<u64>("interval") {
        config.poll_interval_ms = interval;
    }
    if let Some(log_file) = matches.get_one::<String>("log-file") {
        config.log_file = PathBuf::from(log_file);
    }
}
