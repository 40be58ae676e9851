use std::fmt::Display;
use std::ops::BitOr;

use crate::error::{Error, Result};

pub const MAX_SANITY: i32 = 250;
pub const PLAN_DURATION: i32 = 5;
pub const LIGHT_DURATION: i32 = 3;
pub const PLAN_HEAL: i32 = 3;
pub const MINION_DAMAGE: i32 = 20;
/// Explorers this close count as a group
pub const GROUP_RADIUS: i32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}
impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn manhattan(self, other: Pos) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn neighbors(self) -> [Pos; 4] {
        [
            Pos::new(self.x + 1, self.y),
            Pos::new(self.x, self.y + 1),
            Pos::new(self.x - 1, self.y),
            Pos::new(self.x, self.y - 1),
        ]
    }
}
impl Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Bitmask of what occupies a tile
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Occupancy(u8);
impl Occupancy {
    pub const BLANK: Occupancy = Occupancy(0);
    pub const EXPLORER: Occupancy = Occupancy(1 << 0);
    pub const WANDERER: Occupancy = Occupancy(1 << 1);
    pub const SLASHER: Occupancy = Occupancy(1 << 2);
    pub const WALL: Occupancy = Occupancy(1 << 3);
    pub const SPAWN: Occupancy = Occupancy(1 << 4);

    pub fn contains(self, other: Occupancy) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn intersects(self, other: Occupancy) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, other: Occupancy) {
        self.0 |= other.0;
    }
}
impl BitOr for Occupancy {
    type Output = Occupancy;

    fn bitor(self, other: Occupancy) -> Occupancy {
        Occupancy(self.0 | other.0)
    }
}

/// The fixed part of the map, sized from the header
pub struct Maze {
    pub width: i32,
    pub height: i32,
    tiles: Box<[Occupancy]>,
}
impl Maze {
    pub fn parse(width: i32, height: i32, rows: &[String]) -> Result<Self> {
        if width <= 0 || height <= 0 || rows.len() != height as usize {
            return Err(Error::InvalidInput { message: format!("maze of {}x{} with {} rows", width, height, rows.len()) });
        }

        let mut tiles = Vec::with_capacity((width * height) as usize);
        for row in rows.iter() {
            let row: Vec<char> = row.chars().collect();
            if row.len() < width as usize {
                return Err(Error::InvalidInput { message: format!("maze row '{}' shorter than {}", row.iter().collect::<String>(), width) });
            }
            for &c in row.iter().take(width as usize) {
                tiles.push(match c {
                    '#' => Occupancy::WALL,
                    'w' => Occupancy::SPAWN,
                    _ => Occupancy::BLANK,
                });
            }
        }

        Ok(Self {
            width,
            height,
            tiles: tiles.into_boxed_slice(),
        })
    }

    pub fn num_cells(&self) -> usize {
        self.tiles.len()
    }

    pub fn index(&self, pos: Pos) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height { return None }
        Some((pos.y * self.width + pos.x) as usize)
    }

    pub fn tile(&self, pos: Pos) -> Occupancy {
        match self.index(pos) {
            Some(index) => self.tiles[index],
            None => Occupancy::WALL,
        }
    }

    pub fn is_walkable(&self, pos: Pos) -> bool {
        !self.tile(pos).contains(Occupancy::WALL)
    }
}

pub struct Constants {
    pub sanity_loss_lonely: i32,
    pub sanity_loss_group: i32,
    pub wanderer_spawn_time: i32,
    pub wanderer_life_time: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Explorer {
    pub id: i32,
    pub pos: Pos,
    pub sanity: i32,
    pub plans: i32,
    pub lights: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MinionKind {
    Wanderer,
    Slasher,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MinionState {
    Spawning,
    Wandering,
    Stalking,
    Rushing,
    Stunned,
}
impl MinionState {
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(MinionState::Spawning),
            1 => Ok(MinionState::Wandering),
            2 => Ok(MinionState::Stalking),
            3 => Ok(MinionState::Rushing),
            4 => Ok(MinionState::Stunned),
            wrong => Err(Error::InvalidInput { message: format!("unknown minion state {}", wrong) }),
        }
    }

    /// Whether the minion is chasing explorers this turn
    pub fn is_active(self) -> bool {
        matches!(self, MinionState::Wandering | MinionState::Stalking | MinionState::Rushing)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Minion {
    pub id: i32,
    pub kind: MinionKind,
    pub pos: Pos,
    /// Turns until it spawns, or until it is recalled once wandering
    pub time: i32,
    pub state: MinionState,
    pub target: i32,
}

/// Everything known about one turn
#[derive(Clone, Debug)]
pub struct State {
    pub turn: u32,
    pub me: Explorer,
    pub others: Vec<Explorer>,
    pub minions: Vec<Minion>,
    pub plan_remaining: i32,
    pub light_remaining: i32,
}
impl State {
    /// The maze with every explorer and minion marked on it
    pub fn occupancy(&self, maze: &Maze) -> Box<[Occupancy]> {
        let mut tiles = maze.tiles.clone();
        for explorer in std::iter::once(&self.me).chain(self.others.iter()) {
            if let Some(index) = maze.index(explorer.pos) {
                tiles[index].insert(Occupancy::EXPLORER);
            }
        }
        for minion in self.minions.iter() {
            if let Some(index) = maze.index(minion.pos) {
                tiles[index].insert(match minion.kind {
                    MinionKind::Wanderer => Occupancy::WANDERER,
                    MinionKind::Slasher => Occupancy::SLASHER,
                });
            }
        }
        tiles
    }

    pub fn active_minions(&self) -> impl Iterator<Item=&Minion> + '_ {
        self.minions.iter().filter(|minion| minion.state.is_active())
    }

    pub fn num_nearby_explorers(&self) -> i32 {
        self.others.iter().filter(|other| other.pos.manhattan(self.me.pos) <= GROUP_RADIUS).count() as i32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Wait,
    Move(Pos),
    Plan,
    Light,
}
