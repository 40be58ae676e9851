use std::fmt::Display;
use std::time::Duration;

use clap::ValueEnum;
use log::{debug, info, warn};

use crate::beam::{BeamSearch, SearchConfig, Simulation};
use crate::error::{Error, Result};

use super::evaluation;
use super::model::*;
use super::policies;
use super::simulation;

pub const SEARCH: SearchConfig = SearchConfig {
    max_depth: 20,
    beam_width: 20,
    time_limit: Some(Duration::from_millis(40)),
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Policy {
    /// Look ahead with the beam search
    Beam,
    /// Only run from the nearest minion
    Flee,
}
impl Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Policy::Beam => write!(f, "beam"),
            Policy::Flee => write!(f, "flee"),
        }
    }
}

pub struct KutuluSimulation<'a> {
    pub maze: &'a Maze,
    pub constants: &'a Constants,
}
impl<'a> Simulation for KutuluSimulation<'a> {
    type State = State;
    type Move = Action;
    type Score = f32;

    fn expand(&self, state: &State) -> Vec<(Action, State)> {
        simulation::legal_actions(self.maze, state).into_iter()
            .map(|action| {
                let next = simulation::forward(self.maze, self.constants, state, &action);
                (action, next)
            })
            .collect()
    }

    fn score(&self, state: &State) -> f32 {
        evaluation::evaluate(self.maze, state)
    }
}

/// Remembers my effect durations between turns, since the input does not repeat them
pub struct Agent {
    policy: Policy,
    search: BeamSearch,
    plan_remaining: i32,
    light_remaining: i32,
}
impl Agent {
    pub fn new(policy: Policy, config: SearchConfig) -> Self {
        Self {
            policy,
            search: BeamSearch::new(config),
            plan_remaining: 0,
            light_remaining: 0,
        }
    }

    pub fn act(&mut self, maze: &Maze, constants: &Constants, mut state: State) -> Result<Action> {
        state.plan_remaining = self.plan_remaining;
        state.light_remaining = self.light_remaining;
        info!("Sanity: {}, plans={}, lights={}", state.me.sanity, state.me.plans, state.me.lights);

        let action = match self.policy {
            Policy::Flee => policies::flee(maze, &state),
            Policy::Beam => {
                let sim = KutuluSimulation { maze, constants };
                match self.search.search(&sim, state.clone()) {
                    Ok(outcome) => {
                        debug!("beam {}: score {:.1}, {} moves", outcome.stats, outcome.score, outcome.path.len());
                        outcome.first_move
                    },
                    Err(Error::NoMoveAvailable) => {
                        warn!("beam search found no move, fleeing");
                        policies::flee(maze, &state)
                    },
                    Err(err) => return Err(err),
                }
            },
        };

        self.record(&action);
        Ok(action)
    }

    fn record(&mut self, action: &Action) {
        match action {
            Action::Plan => self.plan_remaining = PLAN_DURATION,
            Action::Light => self.light_remaining = LIGHT_DURATION,
            _ => (),
        }
        self.plan_remaining = (self.plan_remaining - 1).max(0);
        self.light_remaining = (self.light_remaining - 1).max(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Maze, Constants, State) {
        let rows: Vec<String> = ["#######", "#.....#", "#######"].iter().map(|row| row.to_string()).collect();
        let maze = Maze::parse(7, 3, &rows).unwrap();
        let constants = Constants { sanity_loss_lonely: 3, sanity_loss_group: 1, wanderer_spawn_time: 3, wanderer_life_time: 40 };
        let state = State {
            turn: 0,
            me: Explorer { id: 0, pos: Pos::new(3, 1), sanity: 200, plans: 0, lights: 0 },
            others: Vec::new(),
            minions: vec![Minion { id: 4, kind: MinionKind::Wanderer, pos: Pos::new(1, 1), time: 30, state: MinionState::Wandering, target: 0 }],
            plan_remaining: 0,
            light_remaining: 0,
        };
        (maze, constants, state)
    }

    fn config() -> SearchConfig {
        SearchConfig { time_limit: None, ..SEARCH }
    }

    #[test]
    fn test_beam_moves_away_from_wanderer() {
        let (maze, constants, state) = setup();
        let mut agent = Agent::new(Policy::Beam, SearchConfig { max_depth: 3, ..config() });
        assert_eq!(agent.act(&maze, &constants, state).unwrap(), Action::Move(Pos::new(4, 1)));
    }

    #[test]
    fn test_first_move_is_legal() {
        let (maze, constants, state) = setup();
        let legal = simulation::legal_actions(&maze, &state);
        let mut agent = Agent::new(Policy::Beam, config());
        let action = agent.act(&maze, &constants, state).unwrap();
        assert!(legal.contains(&action));
    }

    #[test]
    fn test_dead_explorer_falls_back_to_flee() {
        let (maze, constants, mut state) = setup();
        state.me.sanity = 0;
        let mut agent = Agent::new(Policy::Beam, config());
        assert_eq!(agent.act(&maze, &constants, state).unwrap(), Action::Move(Pos::new(4, 1)));
    }

    #[test]
    fn test_plan_duration_is_remembered() {
        let (maze, constants, mut state) = setup();
        state.minions.clear();
        state.me.plans = 1;
        let mut agent = Agent::new(Policy::Beam, SearchConfig { max_depth: 1, ..config() });

        // Planning heals, so the one-step search takes it straight away
        assert_eq!(agent.act(&maze, &constants, state.clone()).unwrap(), Action::Plan);
        assert_eq!(agent.plan_remaining, PLAN_DURATION - 1);

        state.me.plans = 1;
        let action = agent.act(&maze, &constants, state).unwrap();
        assert_ne!(action, Action::Plan);
    }
}
