use log::info;

use crate::error::Result;

use super::battle::battle;
use super::draft::Drafter;
use super::interface::format_actions;
use super::model::*;

pub struct Agent {
    drafter: Drafter,
    round: u32,
}
impl Agent {
    pub fn new() -> Self {
        Self {
            drafter: Drafter::new(),
            round: 0,
        }
    }

    pub fn is_drafting(&self) -> bool {
        self.round < DRAFT_TURNS
    }

    pub fn act(&mut self, state: &State) -> Result<Vec<Action>> {
        let actions = if self.is_drafting() {
            let pick = self.drafter.pick(state)?;
            info!("Draft {}: {} creatures, curve {:?}", self.round, self.drafter.num_creatures(), self.drafter.curve());
            vec![pick]
        } else {
            let actions = battle(state);
            info!("Battle {}: health {} vs {}, {}", self.round - DRAFT_TURNS, state.me.health, state.opponent.health, format_actions(&actions));
            actions
        };
        self.round += 1;
        Ok(actions)
    }
}
impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}
