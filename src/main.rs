use anyhow::Result;

use shakewatch::cli::build_cli;
use shakewatch::commands;

fn main() -> Result<()> {
    shakewatch::init_logging();

    let matches = build_cli().get_matches();

    if matches.get_flag("version") {
        return commands::version();
    }

    match matches.subcommand() {
        Some(("watch", sub_matches)) => commands::watch(sub_matches),
        Some(("legend", _)) => commands::legend(),
        Some(("config", _)) => commands::config(),
        Some(("version", _)) => commands::version(),
        _ => commands::watch(&matches),
    }
}
