use std::io::BufRead;

use crate::interface::Tokens;
use crate::error::Result;

use super::model::*;

pub fn read_turn<R: BufRead>(tokens: &mut Tokens<R>) -> Result<State> {
    let me = read_player(tokens)?;
    let opponent = read_player(tokens)?;
    let opponent_hand: i32 = tokens.next()?;

    let num_cards: usize = tokens.next()?;
    let mut cards = Vec::with_capacity(num_cards);
    for _ in 0..num_cards {
        cards.push(read_card(tokens)?);
    }

    Ok(State { me, opponent, opponent_hand, cards })
}

fn read_player<R: BufRead>(tokens: &mut Tokens<R>) -> Result<Player> {
    Ok(Player {
        health: tokens.next()?,
        mana: tokens.next()?,
        deck: tokens.next()?,
        rune: tokens.next()?,
    })
}

fn read_card<R: BufRead>(tokens: &mut Tokens<R>) -> Result<Card> {
    let number: i32 = tokens.next()?;
    let id: i32 = tokens.next()?;
    let location = Location::from_code(tokens.next()?)?;
    let card_type = CardType::from_code(tokens.next()?)?;
    let cost: i32 = tokens.next()?;
    let attack: i32 = tokens.next()?;
    let defense: i32 = tokens.next()?;
    let abilities = Abilities::parse(&tokens.token()?)?;
    let my_health_change: i32 = tokens.next()?;
    let opponent_health_change: i32 = tokens.next()?;
    let card_draw: i32 = tokens.next()?;

    let can_use = match card_type {
        CardType::Creature => location == Location::MySide,
        _ => location == Location::MyHand,
    };

    Ok(Card {
        number,
        id,
        location,
        card_type,
        cost,
        attack,
        defense,
        abilities,
        my_health_change,
        opponent_health_change,
        card_draw,
        can_use,
    })
}

pub fn format_action(action: &Action) -> String {
    match action {
        Action::Pass => "PASS".to_string(),
        Action::Pick(index) => format!("PICK {}", index),
        Action::Summon(id) => format!("SUMMON {}", id),
        Action::Attack { attacker, target } => format!("ATTACK {} {}", attacker, target.unwrap_or(-1)),
        Action::Use { item, target } => format!("USE {} {}", item, target.unwrap_or(-1)),
    }
}

pub fn format_actions(actions: &[Action]) -> String {
    if actions.is_empty() {
        return format_action(&Action::Pass);
    }
    actions.iter().map(format_action).collect::<Vec<_>>().join("; ")
}
