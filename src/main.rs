use std::io::IsTerminal;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use command::*;

mod command;
mod document;
mod openapi;

const USAGE: &str = "Usage: fix-sortvals <openapi.yaml>";

/// Make `sortValues` arrays in an OpenAPI document accept string | integer | number items
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[clap(flatten)]
    command: FixSortValues,

    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprint!("{}", e.render());
            println!("{}", USAGE);
            std::process::exit(1);
        }
    };

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(filter)
        .init();

    debug!(input = %cli.command.input.display(), "Starting");
    cli.command.run()
}
