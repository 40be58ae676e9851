use super::model::*;

/// Returns the state after `action`, leaving `state` untouched
pub fn advance(layout: &Layout, state: &State, action: &Action) -> State {
    let mut next = state.clone();
    match *action {
        Action::Assign(planet) => {
            next.planets[planet].my_units += 1;
        },
        Action::Spread(Some(planet)) => {
            next.planets[planet].my_units -= SPREAD_COST;
            for &neighbor in layout.neighbors(planet) {
                next.planets[neighbor].my_units += 1;
            }
        },
        Action::Spread(None) => (),
    }
    next
}
