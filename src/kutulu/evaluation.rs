use super::model::*;
use super::pathing::UNREACHABLE;
use super::simulation;

pub const DEAD: f32 = -1.0e9;

const DANGER_WEIGHT: f32 = 30.0;
const DANGER_DECAY: f32 = 0.5;
const COMPANY_BONUS: f32 = 2.0;
const PLAN_CHARGE_VALUE: f32 = 2.0;
const LIGHT_CHARGE_VALUE: f32 = 1.0;

pub fn evaluate(maze: &Maze, state: &State) -> f32 {
    if state.me.sanity <= 0 { return DEAD }

    let mut score = state.me.sanity as f32;

    let distance = simulation::distance_to_danger(maze, state);
    if distance != UNREACHABLE {
        score -= DANGER_WEIGHT * DANGER_DECAY.powi(distance);
    }

    score += COMPANY_BONUS * state.num_nearby_explorers() as f32;
    score += PLAN_CHARGE_VALUE * state.me.plans as f32;
    score += LIGHT_CHARGE_VALUE * state.me.lights as f32;
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze(row: &str) -> Maze {
        Maze::parse(row.len() as i32, 1, &[row.to_string()]).unwrap()
    }

    fn state(minion_x: Option<i32>) -> State {
        State {
            turn: 0,
            me: Explorer { id: 0, pos: Pos::new(0, 0), sanity: 100, plans: 0, lights: 0 },
            others: Vec::new(),
            minions: minion_x.map(|x| Minion {
                id: 9,
                kind: MinionKind::Wanderer,
                pos: Pos::new(x, 0),
                time: 10,
                state: MinionState::Wandering,
                target: 0,
            }).into_iter().collect(),
            plan_remaining: 0,
            light_remaining: 0,
        }
    }

    #[test]
    fn test_safe_state_scores_its_sanity() {
        let maze = maze(".....");
        assert_eq!(evaluate(&maze, &state(None)), 100.0);
    }

    #[test]
    fn test_closer_danger_scores_lower() {
        let maze = maze(".....");
        let near = evaluate(&maze, &state(Some(1)));
        let far = evaluate(&maze, &state(Some(4)));
        assert!(near < far);
        assert!(far < 100.0);
    }

    #[test]
    fn test_dead_is_worst() {
        let maze = maze(".....");
        let mut dead = state(None);
        dead.me.sanity = 0;
        assert_eq!(evaluate(&maze, &dead), DEAD);
        assert!(evaluate(&maze, &state(Some(1))) > DEAD);
    }
}
