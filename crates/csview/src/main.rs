use std::process::ExitCode;

use clap::Parser;
use csview::{logging, Cli};

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match csview::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "csview failed");
            eprintln!("csview: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
