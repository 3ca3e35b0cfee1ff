//! Sortscope CLI - Animate sorting algorithms in the terminal

mod cli;
mod colorizer;

use clap::Parser;
use sortscope::core::logging::init_logging;

fn main() {
    let cli_args = cli::Cli::parse();

    // Flags win over SORTSCOPE_LOG_LEVEL / SORTSCOPE_LOG_FORMAT / RUST_LOG.
    let level = cli_args.log_level.map(|l| l.as_str());
    let format = cli_args.log_format.map(|f| f.as_str());
    if let Err(e) = init_logging(level, format) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let mut app = cli::SortscopeApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
