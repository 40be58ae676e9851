use super::model::*;
use super::pathing::DistanceMap;

/// Step to whichever adjacent cell is farthest from every chasing minion, or stay put
pub fn flee(maze: &Maze, state: &State) -> Action {
    let danger = DistanceMap::generate(maze, state.active_minions().map(|minion| minion.pos));

    let mut best = state.me.pos;
    let mut best_distance = danger.distance_to(maze, best);
    for n in state.me.pos.neighbors() {
        if !maze.is_walkable(n) { continue }

        let distance = danger.distance_to(maze, n);
        if distance > best_distance {
            best = n;
            best_distance = distance;
        }
    }

    if best == state.me.pos {
        Action::Wait
    } else {
        Action::Move(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(rows: &[&str], me: Pos, minions: &[Pos]) -> (Maze, State) {
        let rows: Vec<String> = rows.iter().map(|row| row.to_string()).collect();
        let maze = Maze::parse(rows[0].len() as i32, rows.len() as i32, &rows).unwrap();
        let state = State {
            turn: 0,
            me: Explorer { id: 0, pos: me, sanity: 250, plans: 2, lights: 3 },
            others: Vec::new(),
            minions: minions.iter().enumerate().map(|(id, &pos)| Minion {
                id: id as i32,
                kind: MinionKind::Wanderer,
                pos,
                time: 10,
                state: MinionState::Wandering,
                target: 0,
            }).collect(),
            plan_remaining: 0,
            light_remaining: 0,
        };
        (maze, state)
    }

    #[test]
    fn test_runs_away_from_wanderer() {
        let (maze, state) = setup(&["....."], Pos::new(2, 0), &[Pos::new(0, 0)]);
        assert_eq!(flee(&maze, &state), Action::Move(Pos::new(3, 0)));
    }

    #[test]
    fn test_waits_when_cornered() {
        let (maze, state) = setup(&["#..#"], Pos::new(2, 0), &[Pos::new(1, 0)]);
        assert_eq!(flee(&maze, &state), Action::Wait);
    }

    #[test]
    fn test_waits_without_danger() {
        let (maze, state) = setup(&["..."], Pos::new(1, 0), &[]);
        assert_eq!(flee(&maze, &state), Action::Wait);
    }
}
