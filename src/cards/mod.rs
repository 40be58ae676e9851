//! Card battle bot: drafts a deck over the first turns, then summons, buffs and attacks.

pub mod agent;
pub mod battle;
pub mod draft;
pub mod interface;
pub mod model;
pub mod rules;

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::interface::Tokens;

pub use agent::Agent;

pub fn run<R: BufRead, W: Write>(input: R, output: &mut W, agent: &mut Agent) -> Result<()> {
    let mut tokens = Tokens::new(input);
    while !tokens.at_eof()? {
        let state = interface::read_turn(&mut tokens)?;
        let actions = agent.act(&state)?;
        writeln!(output, "{}", interface::format_actions(&actions))?;
        output.flush()?;
    }
    Ok(())
}
