use std::io::BufRead;

use crate::error::{Error, Result};
use crate::interface::Tokens;

use super::model::*;

pub fn read_game<R: BufRead>(tokens: &mut Tokens<R>) -> Result<(Maze, Constants)> {
    let width: i32 = tokens.next()?;
    let height: i32 = tokens.next()?;

    let mut rows = Vec::new();
    for _ in 0..height.max(0) {
        rows.push(tokens.line()?);
    }
    let maze = Maze::parse(width, height, &rows)?;

    let constants = Constants {
        sanity_loss_lonely: tokens.next()?,
        sanity_loss_group: tokens.next()?,
        wanderer_spawn_time: tokens.next()?,
        wanderer_life_time: tokens.next()?,
    };
    Ok((maze, constants))
}

/// Effect durations are not part of the input and start at zero
pub fn read_turn<R: BufRead>(turn: u32, tokens: &mut Tokens<R>) -> Result<State> {
    let num_entities: usize = tokens.next()?;

    let mut explorers = Vec::new();
    let mut minions = Vec::new();
    for index in 0..num_entities {
        let entity_type = tokens.token()?;
        let id: i32 = tokens.next()?;
        let pos = Pos::new(tokens.next()?, tokens.next()?);
        let param0: i32 = tokens.next()?;
        let param1: i32 = tokens.next()?;
        let param2: i32 = tokens.next()?;

        match entity_type.as_str() {
            "EXPLORER" => explorers.push(Explorer { id, pos, sanity: param0, plans: param1, lights: param2 }),
            "WANDERER" | "SLASHER" => {
                let kind = if entity_type == "WANDERER" { MinionKind::Wanderer } else { MinionKind::Slasher };
                minions.push(Minion { id, kind, pos, time: param0, state: MinionState::from_code(param1)?, target: param2 });
            },
            effect if effect.starts_with("EFFECT_") => (),
            wrong => return Err(Error::InvalidInput { message: format!("unknown entity type {}", wrong) }),
        }

        if index == 0 && explorers.is_empty() {
            return Err(Error::InvalidInput { message: "first entity must be my explorer".to_string() });
        }
    }

    if explorers.is_empty() {
        return Err(Error::InvalidInput { message: "no explorer in turn".to_string() });
    }
    let me = explorers.remove(0);

    Ok(State {
        turn,
        me,
        others: explorers,
        minions,
        plan_remaining: 0,
        light_remaining: 0,
    })
}

pub fn format_action(action: &Action) -> String {
    match action {
        Action::Wait => "WAIT".to_string(),
        Action::Move(pos) => format!("MOVE {}", pos),
        Action::Plan => "PLAN".to_string(),
        Action::Light => "LIGHT".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "4\n3\n####\n#.w#\n####\n3 1 3 40\n";

    #[test]
    fn test_reads_header() {
        let mut tokens = Tokens::new(HEADER.as_bytes());
        let (maze, constants) = read_game(&mut tokens).unwrap();
        assert_eq!((maze.width, maze.height), (4, 3));
        assert!(maze.is_walkable(Pos::new(1, 1)));
        assert!(maze.tile(Pos::new(2, 1)).contains(Occupancy::SPAWN));
        assert!(!maze.is_walkable(Pos::new(0, 1)));
        assert_eq!(constants.sanity_loss_lonely, 3);
        assert_eq!(constants.wanderer_life_time, 40);
    }

    #[test]
    fn test_reads_entities() {
        let input = "4\nEXPLORER 0 1 1 250 2 3\nEXPLORER 1 2 1 240 1 0\nWANDERER 5 2 1 3 0 -1\nEFFECT_PLAN 9 1 1 4 0 0\n";
        let mut tokens = Tokens::new(input.as_bytes());
        let state = read_turn(3, &mut tokens).unwrap();
        assert_eq!(state.turn, 3);
        assert_eq!(state.me, Explorer { id: 0, pos: Pos::new(1, 1), sanity: 250, plans: 2, lights: 3 });
        assert_eq!(state.others.len(), 1);
        assert_eq!(state.minions.len(), 1);
        assert_eq!(state.minions[0].state, MinionState::Spawning);
        assert_eq!(state.minions[0].time, 3);
    }

    #[test]
    fn test_first_entity_must_be_an_explorer() {
        let input = "2\nWANDERER 5 2 1 3 0 -1\nEXPLORER 0 1 1 250 2 3\n";
        let mut tokens = Tokens::new(input.as_bytes());
        assert!(matches!(read_turn(0, &mut tokens), Err(Error::InvalidInput { .. })));
    }

    #[test]
    fn test_formats_actions() {
        assert_eq!(format_action(&Action::Move(Pos::new(3, 4))), "MOVE 3 4");
        assert_eq!(format_action(&Action::Wait), "WAIT");
        assert_eq!(format_action(&Action::Plan), "PLAN");
        assert_eq!(format_action(&Action::Light), "LIGHT");
    }
}
