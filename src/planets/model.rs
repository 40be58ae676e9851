/// Units placed one at a time at the start of every turn
pub const ASSIGNMENTS_PER_TURN: usize = 5;
/// Units taken from a planet to give one to each neighbor
pub const SPREAD_COST: i32 = 5;

pub struct Layout {
    pub planets: Box<[PlanetLayout]>,
}
impl Layout {
    pub fn num_planets(&self) -> usize {
        self.planets.len()
    }

    pub fn neighbors(&self, planet: usize) -> &[usize] {
        &self.planets[planet].neighbors
    }
}

pub struct PlanetLayout {
    pub neighbors: Box<[usize]>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanetState {
    pub my_units: i32,
    pub my_tolerance: i32,
    pub other_units: i32,
    pub other_tolerance: i32,
    pub can_assign: bool,
}
impl PlanetState {
    pub fn advantage(&self) -> i32 {
        self.my_units - self.other_units
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub planets: Box<[PlanetState]>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Assign(usize),
    Spread(Option<usize>),
}

#[derive(Clone, Debug)]
pub struct Plan {
    pub actions: Vec<Action>,
    pub score: i32,
}
