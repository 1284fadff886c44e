use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;
mod error;
mod exits;
mod pass;
mod settings;
mod terminal;
mod tui;

use cli::CliFlags;

fn setup_logging(level: &str) {
    // RUST_LOG wins over -v/-q
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    exits::install_handlers();
    exits::disable_core_dumps();

    let flags = CliFlags::parse();
    setup_logging(flags.log_level());
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting strongpass");

    cli::run(&flags)
}
