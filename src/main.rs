mod cli;
mod config;
mod convert;
mod generate;
mod logging;
mod verify_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command, GenerateArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match cli.command {
        None => generate::run(&GenerateArgs::default(), &config),
        Some(Command::Generate(args)) => generate::run(&args, &config),
        Some(Command::Verify(args)) => verify_cmd::run(&args, &config),
    }
}
