use log::debug;

use crate::error::{Error, Result};

use super::model::*;

/// Wanted number of cards per mana cost, with every cost of 7 or more sharing the last slot
pub const IDEAL_CURVE: [i32; 8] = [1, 4, 7, 6, 5, 3, 2, 2];
/// Card numbers worth taking whenever they are offered
pub const PRIORITY_PICKS: [i32; 2] = [80, 81];
const NUM_CHOICES: usize = 3;

/// Lower is better
pub fn creature_price(card: &Card) -> f32 {
    let mut price = 1.5 * card.cost as f32 - ((card.attack + card.defense) / 2) as f32;
    if card.abilities.has(Abilities::GUARD) {
        price -= card.defense as f32;
    } else {
        price -= card.attack as f32;
    }

    if card.abilities.has(Abilities::CHARGE) {
        price -= (5 + card.attack) as f32;
    }
    price -= 3.0 * card.card_draw as f32;

    if card.abilities.has(Abilities::LETHAL) { price -= 20.0 }
    if card.abilities.has(Abilities::WARD) { price -= 5.0 }
    price
}

fn curve_slot(card: &Card) -> usize {
    card.cost.clamp(0, IDEAL_CURVE.len() as i32 - 1) as usize
}

/// Tracks the deck built so far across the draft turns
#[derive(Clone, Debug, Default)]
pub struct Drafter {
    curve: [i32; 8],
    num_creatures: u32,
}
impl Drafter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_creatures(&self) -> u32 {
        self.num_creatures
    }

    pub fn curve(&self) -> &[i32; 8] {
        &self.curve
    }

    pub fn pick(&mut self, state: &State) -> Result<Action> {
        let choices = &state.cards[..state.cards.len().min(NUM_CHOICES)];
        if choices.is_empty() {
            return Err(Error::InvalidInput { message: "no cards offered during the draft".to_string() });
        }

        let mut reserve = 0;
        let mut best: Option<(usize, f32)> = None;
        for (index, card) in choices.iter().enumerate() {
            if PRIORITY_PICKS.contains(&card.number) {
                debug!("priority pick {}", card.number);
                return Ok(self.take(index, card));
            }

            match card.card_type {
                CardType::GreenItem => reserve = index,
                CardType::Creature => {
                    let slot = curve_slot(card);
                    if self.curve[slot] >= IDEAL_CURVE[slot] {
                        reserve = index;
                        continue;
                    }
                    let price = creature_price(card);
                    if best.map_or(true, |(_, best_price)| price < best_price) {
                        best = Some((index, price));
                    }
                },
                _ => (),
            }
        }

        let index = best.map_or(reserve, |(index, _)| index);
        Ok(self.take(index, &choices[index]))
    }

    fn take(&mut self, index: usize, card: &Card) -> Action {
        if card.card_type == CardType::Creature {
            self.num_creatures += 1;
        }
        self.curve[curve_slot(card)] += 1;
        Action::Pick(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(number: i32, card_type: CardType, cost: i32, attack: i32, defense: i32, abilities: &str) -> Card {
        Card {
            number,
            id: -1,
            location: Location::MyHand,
            card_type,
            cost,
            attack,
            defense,
            abilities: Abilities::parse(abilities).unwrap(),
            my_health_change: 0,
            opponent_health_change: 0,
            card_draw: 0,
            can_use: false,
        }
    }

    fn offer(cards: Vec<Card>) -> State {
        State {
            me: Player { health: 30, mana: 0, deck: 0, rune: 25 },
            opponent: Player { health: 30, mana: 0, deck: 0, rune: 25 },
            opponent_hand: 0,
            cards,
        }
    }

    #[test]
    fn test_prices_creatures() {
        assert_eq!(creature_price(&card(1, CardType::Creature, 2, 3, 2, "------")), 3.0 - 2.0 - 3.0);
        assert_eq!(creature_price(&card(2, CardType::Creature, 4, 2, 7, "---G--")), 6.0 - 4.0 - 7.0);
        assert_eq!(creature_price(&card(3, CardType::Creature, 3, 2, 1, "-C--L-")), 4.5 - 1.0 - 2.0 - 7.0 - 20.0);
    }

    #[test]
    fn test_picks_cheapest_creature_by_price() {
        let mut drafter = Drafter::new();
        let state = offer(vec![
            card(1, CardType::Creature, 2, 1, 1, "------"),
            card(2, CardType::Creature, 2, 3, 3, "-----W"),
            card(3, CardType::RedItem, 1, 0, -2, "------"),
        ]);
        assert_eq!(drafter.pick(&state).unwrap(), Action::Pick(1));
        assert_eq!(drafter.num_creatures(), 1);
        assert_eq!(drafter.curve()[2], 1);
    }

    #[test]
    fn test_priority_picks_come_first() {
        let mut drafter = Drafter::new();
        let state = offer(vec![
            card(1, CardType::Creature, 2, 9, 9, "----LW"),
            card(80, CardType::Creature, 8, 8, 8, "---G--"),
            card(3, CardType::Creature, 2, 1, 1, "------"),
        ]);
        assert_eq!(drafter.pick(&state).unwrap(), Action::Pick(1));
        assert_eq!(drafter.curve()[7], 1);
    }

    #[test]
    fn test_full_slots_fall_back_to_reserve() {
        let mut drafter = Drafter::new();
        let state = offer(vec![
            card(1, CardType::Creature, 0, 1, 1, "------"),
            card(2, CardType::RedItem, 0, 0, -1, "------"),
            card(3, CardType::Creature, 0, 2, 2, "------"),
        ]);
        // The single zero cost slot fills on the first pick
        assert_eq!(drafter.pick(&state).unwrap(), Action::Pick(2));
        assert_eq!(drafter.pick(&state).unwrap(), Action::Pick(2));
        assert_eq!(drafter.curve()[0], 2);

        let state = offer(vec![
            card(4, CardType::Creature, 0, 1, 1, "------"),
            card(5, CardType::GreenItem, 1, 1, 1, "------"),
            card(6, CardType::BlueItem, 0, 0, 0, "------"),
        ]);
        assert_eq!(drafter.pick(&state).unwrap(), Action::Pick(1));
        assert_eq!(drafter.num_creatures(), 2);
    }

    #[test]
    fn test_empty_offer_is_an_error() {
        assert!(Drafter::new().pick(&offer(Vec::new())).is_err());
    }
}
