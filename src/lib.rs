//! Bots for three turn-based contest games, sharing a generic beam search, a token reader for
//! the judge protocols and the command-line plumbing.

pub mod beam;
pub mod cards;
pub mod cli;
pub mod error;
pub mod interface;
pub mod kutulu;
pub mod planets;

pub use beam::{BeamSearch, Outcome, SearchConfig, SearchStats, Simulation};
pub use error::{Error, Result};
