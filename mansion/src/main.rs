//! Mansion mystery terminal game.
//!
//! Explore the mansion one room at a time, collect clues, and when you quit
//! the ledger names the suspect the evidence points to most.
//!
//! ```bash
//! cargo run -p mansion
//! printf 'left\nleft\nreview\nquit\n' | cargo run -p mansion -- --format json
//! ```

mod cli;
mod repl;

use clap::Parser;
use cli::Cli;
use std::io;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `--debug` turns on everything; otherwise `RUST_LOG` decides, if set.
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(io::stderr)
            .init();
    } else if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.debug);

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(cli.session_config(), cli.format, stdin.lock(), stdout.lock())?;

    Ok(())
}
