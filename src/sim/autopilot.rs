//! Demo driver
//!
//! Picks the lane with the most open road ahead and steers there one lane
//! per tick. Boosts only while a police car is on its tail and the gauge
//! has some reserve. Deterministic: reads state only, never the RNG.

use super::lane::Lane;
use super::state::GameState;
use super::tick::InputEvent;
use crate::consts::*;

/// Nitro the autopilot keeps in reserve
const BOOST_RESERVE: u32 = 30;

/// Open road ahead of the player in `lane` (infinite if nothing is coming)
pub fn headroom(state: &GameState, lane: Lane) -> f32 {
    state
        .enemies
        .iter()
        .filter(|e| e.lane == lane && e.pos.y < PLAYER_Y + CAR_HEIGHT)
        .map(|e| PLAYER_Y - (e.pos.y + CAR_HEIGHT))
        .fold(f32::INFINITY, f32::min)
}

/// Inputs the autopilot wants to send this tick
pub fn plan(state: &GameState) -> Vec<InputEvent> {
    let mut events = Vec::new();
    if state.phase.is_over() {
        return events;
    }

    let current = state.player.target_lane;
    let best = Lane::ALL
        .into_iter()
        .max_by(|a, b| {
            headroom(state, *a)
                .partial_cmp(&headroom(state, *b))
                .unwrap_or(std::cmp::Ordering::Equal)
                // Prefer staying put, then the lane closest to the current one
                .then_with(|| (*a == current).cmp(&(*b == current)))
                .then_with(|| {
                    let da = a.index().abs_diff(current.index());
                    let db = b.index().abs_diff(current.index());
                    db.cmp(&da)
                })
        })
        .unwrap_or(current);

    if headroom(state, best) > headroom(state, current) {
        if best < current {
            events.push(InputEvent::LaneLeft);
        } else if best > current {
            events.push(InputEvent::LaneRight);
        }
    }

    let want_boost = state.police.active && state.player.nitro > BOOST_RESERVE;
    if want_boost != state.player.boost_held {
        events.push(if want_boost {
            InputEvent::BoostDown
        } else {
            InputEvent::BoostUp
        });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{GameConfig, GameMode};
    use crate::sim::state::Enemy;

    fn state_with(enemies: Vec<Enemy>) -> GameState {
        let mut state = GameState::new(GameConfig::for_mode(GameMode::Roaming));
        state.enemies = enemies;
        state
    }

    #[test]
    fn test_headroom() {
        let state = state_with(vec![Enemy::new(0, Lane::MIDDLE, 200.0)]);
        assert_eq!(headroom(&state, Lane::MIDDLE), PLAYER_Y - 300.0);
        assert_eq!(headroom(&state, Lane::LEFT), f32::INFINITY);
    }

    #[test]
    fn test_dodges_oncoming_car() {
        let state = state_with(vec![
            Enemy::new(0, Lane::MIDDLE, 250.0),
            Enemy::new(1, Lane::LEFT, 100.0),
        ]);
        assert_eq!(plan(&state), vec![InputEvent::LaneRight]);
    }

    #[test]
    fn test_stays_put_on_open_road() {
        let state = state_with(vec![Enemy::new(0, Lane::LEFT, 250.0)]);
        assert!(plan(&state).is_empty());
    }

    #[test]
    fn test_boosts_away_from_police() {
        let mut state = state_with(Vec::new());
        state.police.active = true;
        assert_eq!(plan(&state), vec![InputEvent::BoostDown]);

        state.player.boost_held = true;
        state.player.nitro = BOOST_RESERVE;
        assert_eq!(plan(&state), vec![InputEvent::BoostUp]);
    }
}
