use std::fmt::Display;

use crate::error::{Error, Result};

/// Turns spent picking cards before the battle starts
pub const DRAFT_TURNS: u32 = 30;
pub const MAX_BOARD_SIZE: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    MyHand,
    MySide,
    OpponentSide,
}
impl Location {
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Location::MyHand),
            1 => Ok(Location::MySide),
            -1 => Ok(Location::OpponentSide),
            wrong => Err(Error::InvalidInput { message: format!("unknown card location {}", wrong) }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardType {
    Creature,
    GreenItem,
    RedItem,
    BlueItem,
}
impl CardType {
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(CardType::Creature),
            1 => Ok(CardType::GreenItem),
            2 => Ok(CardType::RedItem),
            3 => Ok(CardType::BlueItem),
            wrong => Err(Error::InvalidInput { message: format!("unknown card type {}", wrong) }),
        }
    }
}

/// Keyword abilities, written by the judge as `BCDGLW` with `-` for each missing one
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Abilities(u8);
impl Abilities {
    pub const BREAKTHROUGH: Abilities = Abilities(1 << 0);
    pub const CHARGE: Abilities = Abilities(1 << 1);
    pub const DRAIN: Abilities = Abilities(1 << 2);
    pub const GUARD: Abilities = Abilities(1 << 3);
    pub const LETHAL: Abilities = Abilities(1 << 4);
    pub const WARD: Abilities = Abilities(1 << 5);

    const LETTERS: [char; 6] = ['B', 'C', 'D', 'G', 'L', 'W'];

    pub fn parse(text: &str) -> Result<Self> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != Self::LETTERS.len() {
            return Err(Error::InvalidInput { message: format!("abilities '{}' should have {} characters", text, Self::LETTERS.len()) });
        }

        let mut abilities = Abilities::default();
        for (index, (&c, &letter)) in chars.iter().zip(Self::LETTERS.iter()).enumerate() {
            if c == letter {
                abilities.0 |= 1 << index;
            } else if c != '-' {
                return Err(Error::InvalidInput { message: format!("unexpected '{}' in abilities '{}'", c, text) });
            }
        }
        Ok(abilities)
    }

    pub fn has(self, ability: Abilities) -> bool {
        self.0 & ability.0 == ability.0
    }

    pub fn insert(&mut self, abilities: Abilities) {
        self.0 |= abilities.0;
    }

    pub fn remove(&mut self, abilities: Abilities) {
        self.0 &= !abilities.0;
    }
}
impl Display for Abilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, &letter) in Self::LETTERS.iter().enumerate() {
            let c = if self.0 & (1 << index) != 0 { letter } else { '-' };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub number: i32,
    pub id: i32,
    pub location: Location,
    pub card_type: CardType,
    pub cost: i32,
    pub attack: i32,
    pub defense: i32,
    pub abilities: Abilities,
    pub my_health_change: i32,
    pub opponent_health_change: i32,
    pub card_draw: i32,
    /// Creatures: may still attack this turn. Items: still in hand and unused.
    pub can_use: bool,
}
impl Card {
    pub fn is_alive(&self) -> bool {
        self.defense > 0
    }

    pub fn is_dead(&self) -> bool {
        !self.is_alive()
    }

    pub fn is_attacker(&self) -> bool {
        self.location == Location::MySide && self.card_type == CardType::Creature && self.can_use && self.is_alive()
    }

    pub fn is_enemy(&self) -> bool {
        self.location == Location::OpponentSide && self.is_alive()
    }

    /// An enemy guard that must be killed before anything else can be attacked
    pub fn is_obstacle(&self) -> bool {
        self.is_enemy() && self.abilities.has(Abilities::GUARD)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub health: i32,
    pub mana: i32,
    pub deck: i32,
    pub rune: i32,
}

#[derive(Clone, Debug)]
pub struct State {
    pub me: Player,
    pub opponent: Player,
    pub opponent_hand: i32,
    pub cards: Vec<Card>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Pass,
    Pick(usize),
    Summon(i32),
    /// A target of `None` is the opponent's hero
    Attack { attacker: i32, target: Option<i32> },
    Use { item: i32, target: Option<i32> },
}
