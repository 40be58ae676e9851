//! Bounded-width frontier search over a turn-based simulation.
//!
//! Every level expands all surviving states, ranks the children by score and keeps the best
//! `beam_width` of them. Moves and parent links are kept in an arena indexed by [`NodeId`] so the
//! first move of the winning line can be recovered once the states themselves have been dropped.

use std::cmp::Ordering;
use std::fmt::Display;
use std::time::{Duration, Instant};

use log::debug;

use super::error::{Error, Result};

pub trait Simulation {
    type State;
    type Move: Clone;
    /// Scores are compared with `PartialOrd`, so they must never be NaN.
    type Score: PartialOrd + Copy;

    /// Produce every legal move from `state` with the state it leads to.
    /// The search trusts this completely and never validates a move itself.
    fn expand(&self, state: &Self::State) -> Vec<(Self::Move, Self::State)>;

    fn score(&self, state: &Self::State) -> Self::Score;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: usize,
    pub beam_width: usize,
    /// Checked between levels. The first level always completes.
    pub time_limit: Option<Duration>,
}
impl SearchConfig {
    pub fn new(max_depth: usize, beam_width: usize, time_limit: Option<Duration>) -> Result<Self> {
        if max_depth == 0 {
            return Err(Error::InvalidConfiguration { message: "max depth must be at least 1".to_string() });
        }
        if beam_width == 0 {
            return Err(Error::InvalidConfiguration { message: "beam width must be at least 1".to_string() });
        }
        Ok(Self { max_depth, beam_width, time_limit })
    }
}

pub type NodeId = usize;

struct Node<M> {
    parent: Option<NodeId>,
    action: M,
}

struct Entry<S, C> {
    node: Option<NodeId>,
    state: S,
    score: C,
}

struct Child<M, S, C> {
    parent: Option<NodeId>,
    action: M,
    state: S,
    score: C,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub depth_reached: usize,
    pub num_expanded: usize,
    /// Number of states kept at each depth, starting from depth 1
    pub frontier_sizes: Vec<usize>,
    pub elapsed_ms: u128,
}
impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "depth {} in {} ms ({} expanded)", self.depth_reached, self.elapsed_ms, self.num_expanded)
    }
}

pub struct Outcome<M, S, C> {
    pub first_move: M,
    /// Every move from the initial state to `state`
    pub path: Vec<M>,
    pub score: C,
    pub state: S,
    pub stats: SearchStats,
}

pub struct BeamSearch {
    config: SearchConfig,
}
impl BeamSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn search<Sim: Simulation>(&self, sim: &Sim, initial: Sim::State) -> Result<Outcome<Sim::Move, Sim::State, Sim::Score>> {
        let start = Instant::now();
        let mut stats = SearchStats::default();
        let mut arena: Vec<Node<Sim::Move>> = Vec::with_capacity(self.config.max_depth * self.config.beam_width);

        let score = sim.score(&initial);
        let mut frontier = vec![Entry { node: None, state: initial, score }];

        for depth in 0..self.config.max_depth {
            if depth > 0 && self.is_out_of_time(start) {
                debug!("beam search stopped by time limit at depth {}", depth);
                break;
            }

            let mut children = Vec::new();
            for entry in frontier.iter() {
                for (action, state) in sim.expand(&entry.state) {
                    let score = sim.score(&state);
                    children.push(Child { parent: entry.node, action, state, score });
                }
            }
            stats.num_expanded += children.len();
            if children.is_empty() { break } // keep the last non-empty frontier

            // Stable, so equal scores keep insertion order
            children.sort_by(|a, b| descending(&a.score, &b.score));
            children.truncate(self.config.beam_width);

            frontier = children.into_iter().map(|child| {
                let id = arena.len();
                arena.push(Node { parent: child.parent, action: child.action });
                Entry { node: Some(id), state: child.state, score: child.score }
            }).collect();

            stats.frontier_sizes.push(frontier.len());
            stats.depth_reached = depth + 1;
        }

        stats.elapsed_ms = start.elapsed().as_millis();
        if stats.depth_reached == 0 {
            return Err(Error::NoMoveAvailable);
        }

        let best = frontier.into_iter()
            .reduce(|best, entry| if entry.score > best.score { entry } else { best })
            .ok_or(Error::NoMoveAvailable)?;

        let path = reconstruct_path(&arena, best.node);
        let first_move = path.first().cloned().ok_or(Error::NoMoveAvailable)?;

        Ok(Outcome {
            first_move,
            path,
            score: best.score,
            state: best.state,
            stats,
        })
    }

    fn is_out_of_time(&self, start: Instant) -> bool {
        match self.config.time_limit {
            Some(limit) => start.elapsed() >= limit,
            None => false,
        }
    }
}

fn descending<C: PartialOrd>(a: &C, b: &C) -> Ordering {
    b.partial_cmp(a).unwrap_or(Ordering::Equal)
}

fn reconstruct_path<M: Clone>(arena: &[Node<M>], leaf: Option<NodeId>) -> Vec<M> {
    let mut path = Vec::new();
    let mut current = leaf;
    while let Some(id) = current {
        let node = &arena[id];
        path.push(node.action.clone());
        current = node.parent;
    }
    path.reverse();
    path
}
