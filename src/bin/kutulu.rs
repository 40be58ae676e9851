//! Maze-chase bot

use std::io::{stdin, stdout};

use anyhow::{Context, Result};
use clap::Parser;

use contest_bots::cli::{self, SearchArgs};
use contest_bots::kutulu::{self, agent, Agent, Policy};

#[derive(Parser)]
#[command(name = "kutulu", version, about = "Plays the maze-chase game over stdin/stdout")]
struct Cli {
    #[command(flatten)]
    search: SearchArgs,

    /// How to choose each move
    #[arg(long, value_enum, default_value_t = Policy::Beam)]
    policy: Policy,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging();

    let config = cli.search.search_config(agent::SEARCH).context("invalid search options")?;
    let mut agent = Agent::new(cli.policy, config);
    kutulu::run(stdin().lock(), &mut stdout().lock(), &mut agent).context("kutulu game aborted")
}
