//! Card game rules applied to a scratch copy of the turn's state. Cards are addressed by their
//! index in `State::cards`; each operation returns `false` without changing anything if the
//! move is not allowed.

use super::model::*;

impl State {
    pub fn board_size(&self) -> usize {
        self.cards.iter().filter(|card| card.location == Location::MySide && card.is_alive()).count()
    }

    pub fn has_obstacle(&self) -> bool {
        self.cards.iter().any(|card| card.is_obstacle())
    }

    pub fn summon(&mut self, index: usize) -> bool {
        let creature = &self.cards[index];
        if creature.location != Location::MyHand || creature.card_type != CardType::Creature { return false }
        if self.me.mana < creature.cost { return false }
        if self.board_size() >= MAX_BOARD_SIZE { return false }

        self.me.mana -= creature.cost;
        self.me.health += creature.my_health_change;
        self.opponent.health += creature.opponent_health_change;

        let creature = &mut self.cards[index];
        creature.location = Location::MySide;
        creature.can_use = creature.abilities.has(Abilities::CHARGE);
        true
    }

    pub fn use_green_item(&mut self, item_index: usize, target_index: usize) -> bool {
        let item = &self.cards[item_index];
        let target = &self.cards[target_index];
        if item.card_type != CardType::GreenItem || !item.can_use { return false }
        if self.me.mana < item.cost { return false }
        if target.location != Location::MySide || target.is_dead() { return false }

        let (cost, attack, defense, abilities) = (item.cost, item.attack, item.defense, item.abilities);
        self.me.mana -= cost;
        self.cards[item_index].can_use = false;

        let target = &mut self.cards[target_index];
        target.attack += attack;
        target.defense += defense;
        target.abilities.insert(abilities);
        true
    }

    /// `target` of `None` attacks the opponent directly
    pub fn attack(&mut self, attacker_index: usize, target_index: Option<usize>) -> bool {
        if !self.cards[attacker_index].is_attacker() { return false }

        let target_index = match target_index {
            Some(target_index) => target_index,
            None => {
                if self.has_obstacle() { return false }
                let attacker = &mut self.cards[attacker_index];
                attacker.can_use = false;
                self.opponent.health -= attacker.attack;
                return true;
            },
        };
        if !self.cards[target_index].is_enemy() { return false }

        let attacker = self.cards[attacker_index].clone();
        let defender = self.cards[target_index].clone();

        let dealt = strike(&attacker, &mut self.cards[target_index]);
        strike(&defender, &mut self.cards[attacker_index]);
        self.cards[attacker_index].can_use = false;

        if dealt > 0 && attacker.abilities.has(Abilities::DRAIN) {
            self.me.health += dealt;
        }
        if attacker.abilities.has(Abilities::BREAKTHROUGH) && dealt > 0 {
            let excess = attacker.attack - defender.defense;
            if excess > 0 {
                self.opponent.health -= excess;
            }
        }
        true
    }
}

/// Damage dealt by `source` to `target`, after ward and lethal
fn strike(source: &Card, target: &mut Card) -> i32 {
    if source.attack <= 0 { return 0 }
    if target.abilities.has(Abilities::WARD) {
        target.abilities.remove(Abilities::WARD);
        return 0;
    }

    let dealt = source.attack.min(target.defense);
    target.defense -= source.attack;
    if source.abilities.has(Abilities::LETHAL) {
        target.defense = 0;
    }
    dealt
}
