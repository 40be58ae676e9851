//! Planetary conquest bot: each turn places five units on a planet graph, then optionally
//! spreads one planet's units to its neighbors.

pub mod agent;
pub mod evaluation;
pub mod interface;
pub mod model;
pub mod simulation;
pub mod strategy;

use std::io::{BufRead, Write};

use log::info;

use crate::error::Result;
use crate::interface::Tokens;

pub use agent::Agent;

/// Play until the judge closes stdin
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W, agent: &mut Agent) -> Result<()> {
    let mut tokens = Tokens::new(input);
    let layout = interface::read_layout(&mut tokens)?;
    info!("{} planets", layout.num_planets());

    let mut turn = 0;
    while !tokens.at_eof()? {
        let state = interface::read_turn(&layout, &mut tokens)?;
        turn += 1;

        let actions = agent.act(&layout, &state)?;
        for action in actions.iter() {
            writeln!(output, "{}", interface::format_action(action))?;
        }
        output.flush()?;
        info!("turn {} done", turn);
    }
    Ok(())
}
