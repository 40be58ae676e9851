use std::cmp::Ordering;

use log::{debug, warn};

use super::draft::creature_price;
use super::model::*;

/// Below this the opponent hero is attacked directly
const LOW_HEALTH: i32 = 10;
/// Enemy attack that our guards can soak up before we start trading
const SAFE_PRESSURE: i32 = 5;

/// Plan a full battle turn on a scratch copy of the state
pub fn battle(state: &State) -> Vec<Action> {
    let mut state = state.clone();
    state.cards.sort_by(|a, b| creature_price(a).partial_cmp(&creature_price(b)).unwrap_or(Ordering::Equal));

    let mut actions = Vec::new();
    actions.extend(summon(&mut state));
    actions.extend(use_green_items(&mut state));
    actions.extend(attack(&mut state));

    if actions.is_empty() {
        actions.push(Action::Pass);
    }
    actions
}

fn summon(state: &mut State) -> Vec<Action> {
    let mut actions = Vec::new();
    for index in 0..state.cards.len() {
        let card = &state.cards[index];
        if card.location != Location::MyHand || card.card_type != CardType::Creature { continue }
        if state.summon(index) {
            actions.push(Action::Summon(state.cards[index].id));
        }
    }
    actions
}

fn use_green_items(state: &mut State) -> Vec<Action> {
    let mut actions = Vec::new();
    for index in 0..state.cards.len() {
        let item = &state.cards[index];
        if item.card_type != CardType::GreenItem || !item.can_use { continue }

        let Some(attacker) = find_attacker(state) else { break };
        if state.use_green_item(index, attacker) {
            actions.push(Action::Use { item: state.cards[index].id, target: Some(state.cards[attacker].id) });
        }
    }
    actions
}

fn find_attacker(state: &State) -> Option<usize> {
    state.cards.iter().position(|card| card.is_attacker())
}

fn find_obstacle(state: &State) -> Option<usize> {
    state.cards.iter().position(|card| card.is_obstacle())
}

/// Guards go down first, sending whoever kills them most cheaply
fn kill_guards(state: &mut State) -> Vec<Action> {
    let mut actions = Vec::new();
    while let Some(obstacle) = find_obstacle(state) {
        let guard_defense = state.cards[obstacle].defense;

        let mut best: Option<(usize, i32)> = None;
        for index in 0..state.cards.len() {
            let attacker = &mut state.cards[index];
            if !attacker.is_attacker() { continue }
            if attacker.attack == 0 {
                attacker.can_use = false;
                continue;
            }

            let kills = attacker.abilities.has(Abilities::LETHAL) || attacker.attack >= guard_defense;
            let score = -(20 * kills as i32 - (attacker.attack + attacker.defense));
            if best.map_or(true, |(_, best_score)| score < best_score) {
                best = Some((index, score));
            }
        }

        let Some((attacker, _)) = best else { break };
        if state.attack(attacker, Some(obstacle)) {
            actions.push(Action::Attack { attacker: state.cards[attacker].id, target: Some(state.cards[obstacle].id) });
        } else {
            state.cards[attacker].can_use = false;
        }
    }
    actions
}

/// The enemy with the most attack for its defense, drainers first
fn find_target(state: &State) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (index, card) in state.cards.iter().enumerate() {
        if !card.is_enemy() { continue }
        let score = card.attack - card.defense + 3 * card.abilities.has(Abilities::DRAIN) as i32;
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index)
}

fn find_best_attacker(state: &State, target: Option<usize>) -> Option<usize> {
    let Some(target) = target else { return find_attacker(state) };
    let target = &state.cards[target];

    let mut best: Option<(usize, i32)> = None;
    for (index, card) in state.cards.iter().enumerate() {
        if !card.is_attacker() { continue }

        let score = if target.abilities.has(Abilities::WARD) {
            // Break the ward with the weakest attacker
            -card.attack * card.attack * 5
        } else if card.abilities.has(Abilities::LETHAL) || card.attack >= target.attack {
            -(card.attack + card.defense) / 2 + 10
        } else {
            -(card.attack + card.defense) / 2
        };
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index)
}

fn attack(state: &mut State) -> Vec<Action> {
    let mut actions = kill_guards(state);

    let mut opponent_attack = 0;
    let mut my_defense = 0;
    for card in state.cards.iter() {
        if card.is_enemy() {
            opponent_attack += card.attack;
        } else if card.location == Location::MySide && card.is_alive() && card.abilities.has(Abilities::GUARD) {
            my_defense += card.defense;
        }
    }
    debug!("opponent attack {}, my guard defense {}", opponent_attack, my_defense);

    loop {
        let target = if let Some(obstacle) = find_obstacle(state) {
            Some(obstacle)
        } else if state.opponent.health < LOW_HEALTH || opponent_attack - my_defense < SAFE_PRESSURE {
            None
        } else {
            find_target(state)
        };
        let Some(attacker) = find_best_attacker(state, target) else { break };

        let attacker_defense = state.cards[attacker].defense;
        if !state.attack(attacker, target) {
            warn!("attack by {} failed", state.cards[attacker].id);
            state.cards[attacker].can_use = false;
            continue;
        }
        actions.push(Action::Attack { attacker: state.cards[attacker].id, target: target.map(|target| state.cards[target].id) });

        let attacker_card = &state.cards[attacker];
        if attacker_card.is_dead() && attacker_card.abilities.has(Abilities::GUARD) {
            my_defense -= attacker_defense;
        }
        if let Some(target) = target {
            if state.cards[target].is_dead() {
                opponent_attack -= state.cards[target].attack;
            }
        }
    }
    actions
}
