use chrono::{DateTime, SecondsFormat};
use colored::Colorize;

use crate::core::classifier::{acceleration_colors, velocity_colors};
use crate::core::reading::Reading;

const RULE_WIDTH: usize = 40;

/// Format a reading as the on-screen ground motion block.
///
/// Acceleration and velocity are coloured by their threshold tables. The
/// caller clears the screen before printing.
pub fn format_reading(reading: &Reading) -> String {
    let acc_color = acceleration_colors().classify(reading.acceleration);
    let vel_color = velocity_colors().classify(reading.velocity);
    let rule = "=".repeat(RULE_WIDTH);

    format!(
        "\r\nGround Motion\n{}\nData Time: {}\nAcceleration: {}\nVelocity: {}\nDisplacement: {}\n{}\n",
        rule,
        format_timestamp(reading.timestamp_millis),
        format!("{:.2} µm/s²", reading.acceleration).color(acc_color),
        format!("{:.2} µm/s", reading.velocity).color(vel_color),
        format_displacement(reading.displacement),
        rule,
    )
}

/// RFC 3339 UTC with whole seconds, e.g. `2024-03-01T12:00:05Z`
pub fn format_timestamp(timestamp_millis: i64) -> String {
    match DateTime::from_timestamp(timestamp_millis.div_euclid(1000), 0) {
        Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Secs, true),
        None => format!("{} ms", timestamp_millis),
    }
}

pub fn format_displacement(displacement: f64) -> String {
    format!("{:.2} µm", displacement)
}
