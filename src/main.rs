use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use planar::cli::{Cli, Command};
use planar::demo;

fn main() -> io::Result<()> {
    // Transcript goes to stdout; construction and lifetime events go to
    // stderr, enabled through RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match Cli::parse().command.unwrap_or(Command::All) {
        Command::Owned => demo::owned::run(&mut out)?,
        Command::Shared => demo::shared::run(&mut out)?,
        Command::All => {
            demo::owned::run(&mut out)?;
            writeln!(out)?;
            demo::shared::run(&mut out)?;
        }
    }

    Ok(())
}
