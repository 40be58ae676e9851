use std::time::Duration;

use contest_bots::{BeamSearch, Error, SearchConfig, Simulation};

/// A tree with a fixed branching factor and scrambled scores, so greedy and deep searches
/// disagree often enough to be interesting
struct Scrambled {
    branching: u64,
}
impl Simulation for Scrambled {
    type State = u64;
    type Move = u64;
    type Score = i64;

    fn expand(&self, state: &u64) -> Vec<(u64, u64)> {
        (0..self.branching).map(|m| (m, state.wrapping_mul(31).wrapping_add(m + 1))).collect()
    }

    fn score(&self, state: &u64) -> i64 {
        let mixed = state.wrapping_mul(0x9e3779b97f4a7c15) >> 40;
        (mixed % 1000) as i64
    }
}

struct DeadEnd;
impl Simulation for DeadEnd {
    type State = ();
    type Move = ();
    type Score = i32;

    fn expand(&self, _state: &()) -> Vec<((), ())> {
        Vec::new()
    }

    fn score(&self, _state: &()) -> i32 {
        0
    }
}

fn config(max_depth: usize, beam_width: usize) -> SearchConfig {
    SearchConfig::new(max_depth, beam_width, None).unwrap()
}

#[test]
fn first_move_is_a_legal_move() {
    let sim = Scrambled { branching: 5 };
    for initial in 0..20 {
        let outcome = BeamSearch::new(config(6, 4)).search(&sim, initial).unwrap();
        let legal: Vec<u64> = sim.expand(&initial).into_iter().map(|(m, _)| m).collect();
        assert!(legal.contains(&outcome.first_move));
        assert_eq!(outcome.path.len(), 6);
        assert_eq!(outcome.path[0], outcome.first_move);
    }
}

#[test]
fn frontier_never_exceeds_beam_width() {
    let sim = Scrambled { branching: 7 };
    for beam_width in 1..6 {
        let outcome = BeamSearch::new(config(5, beam_width)).search(&sim, 42).unwrap();
        assert_eq!(outcome.stats.frontier_sizes.len(), 5);
        assert!(outcome.stats.frontier_sizes.iter().all(|&size| size <= beam_width));
    }
}

#[test]
fn depth_one_matches_greedy_choice() {
    let sim = Scrambled { branching: 6 };
    for initial in 0..20 {
        let outcome = BeamSearch::new(config(1, 3)).search(&sim, initial).unwrap();

        let mut greedy: Option<(u64, i64)> = None;
        for (m, state) in sim.expand(&initial) {
            let score = sim.score(&state);
            if greedy.map_or(true, |(_, best)| score > best) {
                greedy = Some((m, score));
            }
        }
        let (best_move, best_score) = greedy.unwrap();
        assert_eq!(outcome.first_move, best_move);
        assert_eq!(outcome.score, best_score);
        assert_eq!(outcome.stats.depth_reached, 1);
    }
}

#[test]
fn repeated_searches_agree() {
    let sim = Scrambled { branching: 4 };
    let search = BeamSearch::new(config(8, 5));
    let first = search.search(&sim, 7).unwrap();
    let second = search.search(&sim, 7).unwrap();
    assert_eq!(first.first_move, second.first_move);
    assert_eq!(first.path, second.path);
    assert_eq!(first.score, second.score);
    assert_eq!(first.state, second.state);
    assert_eq!(first.stats.frontier_sizes, second.stats.frontier_sizes);
}

#[test]
fn no_moves_is_an_error() {
    let result = BeamSearch::new(config(3, 2)).search(&DeadEnd, ());
    assert!(matches!(result, Err(Error::NoMoveAvailable)));
}

#[test]
fn expired_time_limit_still_completes_first_level() {
    let sim = Scrambled { branching: 3 };
    let config = SearchConfig::new(10, 2, Some(Duration::ZERO)).unwrap();
    let outcome = BeamSearch::new(config).search(&sim, 1).unwrap();
    assert_eq!(outcome.stats.depth_reached, 1);
    assert_eq!(outcome.path.len(), 1);
}

#[test]
fn zero_width_or_depth_is_rejected() {
    assert!(matches!(SearchConfig::new(0, 4, None), Err(Error::InvalidConfiguration { .. })));
    assert!(matches!(SearchConfig::new(4, 0, None), Err(Error::InvalidConfiguration { .. })));
}
