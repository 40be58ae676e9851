use std::time::Duration;

use log::{debug, info, warn};
use rand::prelude::*;

use crate::beam::{BeamSearch, SearchConfig};
use crate::error::{Error, Result};

use super::model::*;
use super::strategy::{self, Strategy};

pub const SEARCH: SearchConfig = SearchConfig {
    max_depth: ASSIGNMENTS_PER_TURN,
    beam_width: 8,
    time_limit: Some(Duration::from_millis(40)),
};

pub struct Agent {
    search: BeamSearch,
    rng: StdRng,
}
impl Agent {
    pub fn new(config: SearchConfig, seed: u64) -> Self {
        Self {
            search: BeamSearch::new(config),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn act(&mut self, layout: &Layout, state: &State) -> Result<Vec<Action>> {
        let mut candidates = Vec::new();
        candidates.push((Strategy::Greedy, strategy::greedy(layout, state)?));

        if let Some(plan) = strategy::concentrate(layout, state, &mut self.rng) {
            candidates.push((Strategy::Concentrate, plan));
        }

        match strategy::beam(layout, state, &self.search) {
            Ok(plan) => candidates.push((Strategy::Beam, plan)),
            Err(Error::NoMoveAvailable) => warn!("no assignable planet for the beam search"),
            Err(err) => return Err(err),
        }

        for (strategy, plan) in candidates.iter() {
            debug!("{}: score {}", strategy, plan.score);
        }

        let (strategy, plan) = candidates.into_iter()
            .reduce(|best, candidate| if candidate.1.score > best.1.score { candidate } else { best })
            .ok_or(Error::NoMoveAvailable)?;
        info!("{} strategy, score {}", strategy, plan.score);

        Ok(plan.actions)
    }
}
