//! Main application entry point.

use clap::Parser;
use sketchpad_app::{Cli, run};

fn main() {
    env_logger::init();
    log::info!("Starting Sketchpad");

    let cli = Cli::parse();
    match run(&cli) {
        Ok(report) => log::info!("{report}"),
        Err(e) => {
            log::error!("{e}");
            eprintln!("sketchpad: {e}");
            std::process::exit(1);
        }
    }
}
