//! Card battle bot

use std::io::{stdin, stdout};

use anyhow::{Context, Result};
use clap::Parser;

use contest_bots::cards::{self, Agent};
use contest_bots::cli;

#[derive(Parser)]
#[command(name = "cards", version, about = "Plays the card battle game over stdin/stdout")]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    cli::init_logging();

    let mut agent = Agent::new();
    cards::run(stdin().lock(), &mut stdout().lock(), &mut agent).context("card game aborted")
}
