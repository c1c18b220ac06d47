//! Startup banner and colour legends.

use colored::{Color, Colorize};

use crate::core::classifier::{acceleration_colors, velocity_colors, ThresholdTable};

const RULE: &str = "========================================";
const THIN_RULE: &str = "----------------------------------------";

pub fn intro() -> String {
    format!(
        "\nWelcome to the Ground Motion Monitoring System!\n{RULE}\n\
         This tool fetches data from the sensor and displays\n\
         ground motion information in real time.\n{RULE}\n"
    )
}

/// Parameter table describing what each reading field means.
pub fn parameter_legend() -> String {
    format!(
        "\nGround Motion Legend\n{RULE}\n\
         {:<15} {:<40} {:<20} {}\n{THIN_RULE}\n\
         {:<15} {:<40} {:<20} {}\n\
         {:<15} {:<40} {:<20} {}\n\
         {:<15} {:<40} {:<20} {}\n{RULE}\n",
        "Parameter",
        "Description",
        "Units",
        "Desired Range",
        "Acceleration",
        "Peak ground acceleration in last 10s",
        "micrometers/sec²",
        "Noise level < 0.5",
        "Velocity",
        "Peak ground velocity in last 10s",
        "micrometers/sec",
        "Noise level < 0.1",
        "Displacement",
        "Peak ground displacement in last 10s",
        "micrometers",
        "Noise level ~0",
    )
}

/// One coloured line per band of `table`.
pub fn color_legend(title: &str, table: &ThresholdTable<Color>, unit: &str, precision: usize) -> String {
    let mut out = format!("\n{}\n{}\n", title, THIN_RULE);
    for (lower, upper, color) in table.bands() {
        let band = format!(
            "{:.prec$} - {:.prec$} {}",
            lower,
            upper,
            unit,
            prec = precision
        );
        out.push_str(&format!("{}\n", band.color(color)));
    }
    out.push_str(THIN_RULE);
    out.push('\n');
    out
}

/// Everything shown before monitoring starts.
pub fn full_legend() -> String {
    let mut out = intro();
    out.push_str(&parameter_legend());
    out.push_str(&color_legend(
        "Velocity Color Legend",
        &velocity_colors(),
        "µm/s",
        1,
    ));
    out.push_str(&color_legend(
        "Acceleration Color Legend",
        &acceleration_colors(),
        "µm/s²",
        0,
    ));
    out
}
