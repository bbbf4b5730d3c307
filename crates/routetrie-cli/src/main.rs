use std::process::ExitCode;

use clap::Parser;

use routetrie_cli::{run, Cli, RouteTable};
use routetrie_core::logging::setup_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut table = match RouteTable::load(cli.command.routes()) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };
    if cli.verbose {
        table.settings.debug = true;
        table.settings.log_level = "debug".to_string();
    }
    setup_logging(&table.settings);

    let mut stdout = std::io::stdout().lock();
    match run(&cli.command, &table, &mut stdout) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
