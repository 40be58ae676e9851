use std::fmt::Display;

use rand::prelude::*;

use crate::beam::{BeamSearch, Simulation};
use crate::error::{Error, Result};

use super::evaluation;
use super::model::*;
use super::simulation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Greedy,
    Concentrate,
    Beam,
}
impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Greedy => write!(f, "greedy"),
            Strategy::Concentrate => write!(f, "concentrate"),
            Strategy::Beam => write!(f, "beam"),
        }
    }
}

/// Place each unit on whichever planet currently wants it most
pub fn greedy(layout: &Layout, state: &State) -> Result<Plan> {
    let mut current = state.clone();
    let mut actions = Vec::with_capacity(ASSIGNMENTS_PER_TURN + 1);
    for _ in 0..ASSIGNMENTS_PER_TURN {
        let priorities = evaluation::evaluate_planets(layout, &current);
        let target = first_max_index(&priorities).ok_or(Error::NoMoveAvailable)?;

        let action = Action::Assign(target);
        current = simulation::advance(layout, &current, &action);
        actions.push(action);
    }
    Ok(finish_with_spread(layout, &current, actions))
}

/// Stack every unit on one planet, trying each assignable planet in turn
pub fn concentrate(layout: &Layout, state: &State, rng: &mut StdRng) -> Option<Plan> {
    let mut best: Option<Plan> = None;
    for (target, planet) in state.planets.iter().enumerate() {
        if !planet.can_assign { continue }

        let mut current = state.clone();
        let mut actions = Vec::with_capacity(ASSIGNMENTS_PER_TURN + 1);
        for _ in 0..ASSIGNMENTS_PER_TURN {
            let action = Action::Assign(target);
            current = simulation::advance(layout, &current, &action);
            actions.push(action);
        }
        let candidate = finish_with_spread(layout, &current, actions);

        best = match best {
            None => Some(candidate),
            Some(previous) => {
                if candidate.score > previous.score || (candidate.score == previous.score && rng.gen_bool(0.5)) {
                    Some(candidate)
                } else {
                    Some(previous)
                }
            },
        };
    }
    best
}

/// Search over the order and placement of this turn's assignments
pub fn beam(layout: &Layout, state: &State, search: &BeamSearch) -> Result<Plan> {
    let sim = AssignmentSimulation { layout };
    let initial = Placement { state: state.clone(), remaining: ASSIGNMENTS_PER_TURN };
    let outcome = search.search(&sim, initial)?;
    log::debug!("assignment search: {}", outcome.stats);

    let mut actions = outcome.path;
    let mut current = outcome.state.state;

    // Cut short, e.g. by the depth setting; fill the rest greedily
    for _ in 0..outcome.state.remaining {
        let priorities = evaluation::evaluate_planets(layout, &current);
        let target = first_max_index(&priorities).ok_or(Error::NoMoveAvailable)?;
        let action = Action::Assign(target);
        current = simulation::advance(layout, &current, &action);
        actions.push(action);
    }

    Ok(finish_with_spread(layout, &current, actions))
}

/// The spread (or `NONE`) that leaves the best position, and that position's score
pub fn best_spread(layout: &Layout, state: &State) -> (Action, i32) {
    let mut best = (Action::Spread(None), evaluation::evaluate_state(layout, state));
    for (id, planet) in state.planets.iter().enumerate() {
        if !planet.can_assign || planet.my_units < SPREAD_COST { continue }

        let action = Action::Spread(Some(id));
        let score = evaluation::evaluate_state(layout, &simulation::advance(layout, state, &action));
        if score > best.1 {
            best = (action, score);
        }
    }
    best
}

fn finish_with_spread(layout: &Layout, state: &State, mut actions: Vec<Action>) -> Plan {
    let (spread, score) = best_spread(layout, state);
    actions.push(spread);
    Plan { actions, score }
}

fn first_max_index(values: &[i32]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, &value) in values.iter().enumerate() {
        match best {
            Some(previous) if values[previous] >= value => (),
            _ => best = Some(index),
        }
    }
    best
}

#[derive(Clone)]
struct Placement {
    state: State,
    remaining: usize,
}

struct AssignmentSimulation<'a> {
    layout: &'a Layout,
}
impl<'a> Simulation for AssignmentSimulation<'a> {
    type State = Placement;
    type Move = Action;
    type Score = i32;

    fn expand(&self, placement: &Placement) -> Vec<(Action, Placement)> {
        if placement.remaining == 0 { return Vec::new() }

        placement.state.planets.iter().enumerate()
            .filter(|(_, planet)| planet.can_assign)
            .map(|(id, _)| {
                let action = Action::Assign(id);
                let next = Placement {
                    state: simulation::advance(self.layout, &placement.state, &action),
                    remaining: placement.remaining - 1,
                };
                (action, next)
            })
            .collect()
    }

    fn score(&self, placement: &Placement) -> i32 {
        evaluation::evaluate_state(self.layout, &placement.state)
    }
}
