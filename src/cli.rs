// Command-line definition

use clap::{Arg, ArgAction, Command};

/// Flags shared by `shakewatch` and `shakewatch watch`
fn watch_args() -> Vec<Arg> {
    vec![
        Arg::new("url")
            .long("url")
            .value_name("URL")
            .help("Data source endpoint (overrides URL)"),
        Arg::new("sensor")
            .short('s')
            .long("sensor")
            .value_name("SENSOR_ID")
            .help("Sensor identifier to follow (overrides SENSOR_ID)"),
        Arg::new("fanout")
            .short('f')
            .long("fanout")
            .value_name("N")
            .help("Concurrent redundant fetches per cycle (overrides FANOUT)")
            .value_parser(clap::value_parser!(usize)),
        Arg::new("interval")
            .short('i')
            .long("interval")
            .value_name("MS")
            .help("Pause between poll cycles in milliseconds (overrides POLL_INTERVAL_MS)")
            .value_parser(clap::value_parser!(u64)),
        Arg::new("log-file")
            .long("log-file")
            .value_name("PATH")
            .help("Error log path (overrides LOG_FILE)"),
        Arg::new("no-sound")
            .long("no-sound")
            .help("Never play alert sounds")
            .action(ArgAction::SetTrue),
        Arg::new("no-wait")
            .long("no-wait")
            .help("Skip the legend and start polling immediately")
            .action(ArgAction::SetTrue),
    ]
}

pub fn build_cli() -> Command {
    Command::new("shakewatch")
        .about("Near-real-time ground motion monitor for a single seismic sensor")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .args(watch_args())
        .subcommand(
            Command::new("watch")
                .about("Poll the sensor and display readings (default)")
                .args(watch_args()),
        )
        .subcommand(Command::new("legend").about("Show the ground motion and colour legends"))
        .subcommand(
            Command::new("config").about("Show the effective configuration and check it"),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}
