//! Planetary conquest bot

use std::io::{stdin, stdout};

use anyhow::{Context, Result};
use clap::Parser;

use contest_bots::cli::{self, SearchArgs};
use contest_bots::planets::{self, agent, Agent};

#[derive(Parser)]
#[command(name = "planets", version, about = "Plays the planetary conquest game over stdin/stdout")]
struct Cli {
    #[command(flatten)]
    search: SearchArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging();

    let config = cli.search.search_config(agent::SEARCH).context("invalid search options")?;
    let mut agent = Agent::new(config, cli.search.seed);
    planets::run(stdin().lock(), &mut stdout().lock(), &mut agent).context("planets game aborted")
}
