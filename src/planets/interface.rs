use std::io::BufRead;

use crate::error::{Error, Result};
use crate::interface::Tokens;

use super::model::*;

pub fn read_layout<R: BufRead>(tokens: &mut Tokens<R>) -> Result<Layout> {
    let num_planets: usize = tokens.next()?;
    let num_edges: usize = tokens.next()?;

    let mut neighbors = vec![Vec::new(); num_planets];
    for _ in 0..num_edges {
        let a: usize = tokens.next()?;
        let b: usize = tokens.next()?;
        if a >= num_planets || b >= num_planets {
            return Err(Error::InvalidInput { message: format!("edge {}-{} outside of {} planets", a, b, num_planets) });
        }
        neighbors[a].push(b);
        neighbors[b].push(a);
    }

    Ok(Layout {
        planets: neighbors.into_iter().map(|neighbors| PlanetLayout { neighbors: neighbors.into_boxed_slice() }).collect(),
    })
}

pub fn read_turn<R: BufRead>(layout: &Layout, tokens: &mut Tokens<R>) -> Result<State> {
    let mut planets = Vec::with_capacity(layout.num_planets());
    for _ in 0..layout.num_planets() {
        planets.push(PlanetState {
            my_units: tokens.next()?,
            my_tolerance: tokens.next()?,
            other_units: tokens.next()?,
            other_tolerance: tokens.next()?,
            can_assign: tokens.next::<i32>()? != 0,
        });
    }
    Ok(State { planets: planets.into_boxed_slice() })
}

pub fn format_action(action: &Action) -> String {
    match action {
        Action::Assign(planet) => format!("{}", planet),
        Action::Spread(Some(planet)) => format!("{}", planet),
        Action::Spread(None) => "NONE".to_string(),
    }
}
