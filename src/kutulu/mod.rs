//! Maze-chase bot: keep my explorer sane while minions hunt it through the maze.

pub mod agent;
pub mod evaluation;
pub mod interface;
pub mod model;
pub mod pathing;
pub mod policies;
pub mod simulation;

use std::io::{BufRead, Write};

use log::info;

use crate::error::Result;
use crate::interface::Tokens;

pub use agent::{Agent, Policy};

pub fn run<R: BufRead, W: Write>(input: R, output: &mut W, agent: &mut Agent) -> Result<()> {
    let mut tokens = Tokens::new(input);
    let (maze, constants) = interface::read_game(&mut tokens)?;
    info!("{}x{} maze, wanderers spawn in {} and last {} turns", maze.width, maze.height, constants.wanderer_spawn_time, constants.wanderer_life_time);

    let mut turn = 0;
    while !tokens.at_eof()? {
        let state = interface::read_turn(turn, &mut tokens)?;
        let action = agent.act(&maze, &constants, state)?;
        writeln!(output, "{}", interface::format_action(&action))?;
        output.flush()?;
        turn += 1;
    }
    Ok(())
}
