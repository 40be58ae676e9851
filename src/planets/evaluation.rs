use super::model::*;

pub const INF: i32 = 1 << 28;

const BALANCE_WEIGHT: i32 = 3;
const CAPTURE_PAYOFF: i32 = 20;

/// How much each planet wants the next unit. Higher is better.
pub fn evaluate_planets(layout: &Layout, state: &State) -> Box<[i32]> {
    let mut priorities = vec![0; layout.num_planets()];
    for (id, planet) in state.planets.iter().enumerate() {
        let priority = &mut priorities[id];

        // Contested planets first
        *priority -= BALANCE_WEIGHT * planet.advantage().abs();
        *priority += planet.my_tolerance - planet.other_tolerance;
        if !planet.can_assign {
            *priority -= INF;
        }

        for &neighbor in layout.neighbors(id) {
            *priority += state.planets[neighbor].advantage().signum();
        }
    }
    priorities.into_boxed_slice()
}

pub fn evaluate_state(layout: &Layout, state: &State) -> i32 {
    let mut score = 0;
    for (id, planet) in state.planets.iter().enumerate() {
        let mut advantage = planet.advantage();
        if advantage <= 0 { continue }

        let mut num_friends = 0;
        let mut num_enemies = 0;
        for &neighbor in layout.neighbors(id) {
            let neighbor_advantage = state.planets[neighbor].advantage();
            if neighbor_advantage > 0 {
                num_friends += 1;
            } else if neighbor_advantage < 0 {
                num_enemies += 1;
            }
        }

        if num_friends > num_enemies {
            advantage += 1;
        } else if num_friends < num_enemies {
            advantage -= 1;
        }

        if advantage > 0 {
            score += CAPTURE_PAYOFF;
        }
        score -= num_enemies;
    }
    score
}
