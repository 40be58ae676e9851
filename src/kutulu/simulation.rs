use super::model::*;
use super::pathing::{DistanceMap, UNREACHABLE};

pub fn legal_actions(maze: &Maze, state: &State) -> Vec<Action> {
    if state.me.sanity <= 0 { return Vec::new() }

    let mut actions = vec![Action::Wait];
    for n in state.me.pos.neighbors() {
        if maze.is_walkable(n) {
            actions.push(Action::Move(n));
        }
    }
    if state.me.plans > 0 && state.plan_remaining <= 0 {
        actions.push(Action::Plan);
    }
    if state.me.lights > 0 && state.light_remaining <= 0 {
        actions.push(Action::Light);
    }
    actions
}

/// Predict the next turn. Other explorers are assumed to stand still.
pub fn forward(maze: &Maze, constants: &Constants, state: &State, action: &Action) -> State {
    let mut next = state.clone();
    next.turn += 1;

    apply_action(&mut next, action);
    move_minions(maze, constants, &mut next);
    apply_collisions(&mut next);
    apply_sanity(constants, &mut next);

    next.plan_remaining = (next.plan_remaining - 1).max(0);
    next.light_remaining = (next.light_remaining - 1).max(0);
    next
}

fn apply_action(state: &mut State, action: &Action) {
    match *action {
        Action::Wait => (),
        Action::Move(pos) => state.me.pos = pos,
        Action::Plan => {
            state.me.plans -= 1;
            state.plan_remaining = PLAN_DURATION;
        },
        Action::Light => {
            state.me.lights -= 1;
            state.light_remaining = LIGHT_DURATION;
        },
    }
}

fn move_minions(maze: &Maze, constants: &Constants, state: &mut State) {
    let to_me = DistanceMap::generate(maze, [state.me.pos]);
    let to_others = DistanceMap::generate(maze, state.others.iter().map(|other| other.pos));
    let light_factor = if state.light_remaining > 0 { 2 } else { 1 };

    for minion in state.minions.iter_mut() {
        match minion.state {
            MinionState::Spawning => {
                minion.time -= 1;
                if minion.time <= 0 {
                    minion.state = MinionState::Wandering;
                    minion.time = constants.wanderer_life_time;
                }
                continue;
            },
            MinionState::Stunned => {
                minion.time -= 1;
                if minion.time <= 0 {
                    minion.state = MinionState::Wandering;
                }
                continue;
            },
            _ => (),
        }

        // A lit explorer looks twice as far away
        let my_distance = to_me.distance_to(maze, minion.pos).saturating_mul(light_factor);
        let other_distance = to_others.distance_to(maze, minion.pos);
        let target_map = if my_distance <= other_distance { &to_me } else { &to_others };

        if let Some(step) = target_map.step_towards_source(maze, minion.pos) {
            minion.pos = step;
        }

        if minion.kind == MinionKind::Wanderer {
            minion.time -= 1;
        }
    }

    // Recalled wanderers vanish
    state.minions.retain(|minion| minion.kind != MinionKind::Wanderer || minion.state == MinionState::Spawning || minion.time > 0);
}

fn apply_collisions(state: &mut State) {
    let me = state.me.pos;
    let mut hits = 0;
    state.minions.retain(|minion| {
        let hit = minion.state.is_active() && minion.pos == me;
        if hit {
            hits += 1;
        }
        !hit
    });
    state.me.sanity -= hits * MINION_DAMAGE;
}

fn apply_sanity(constants: &Constants, state: &mut State) {
    let nearby = state.num_nearby_explorers();
    state.me.sanity -= if nearby > 0 { constants.sanity_loss_group } else { constants.sanity_loss_lonely };
    if state.plan_remaining > 0 && state.me.sanity > 0 {
        state.me.sanity += PLAN_HEAL + nearby;
    }
    state.me.sanity = state.me.sanity.min(MAX_SANITY);
}

/// Walking distance from my explorer to the closest chasing minion
pub fn distance_to_danger(maze: &Maze, state: &State) -> i32 {
    let danger = DistanceMap::generate(maze, state.active_minions().map(|minion| minion.pos));
    danger.distance_to(maze, state.me.pos)
}

pub fn is_safe(maze: &Maze, state: &State) -> bool {
    distance_to_danger(maze, state) == UNREACHABLE
}
