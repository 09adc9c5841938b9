//! Police pursuit (pursuit mode only)
//!
//! A police car appears behind the player every few points and creeps up the
//! road. Staying close to it builds pressure; pressure drains twice as fast as
//! it builds once the gap opens up. Maxed pressure ends the run outright.

use glam::Vec2;

use super::lane::car_x_for_lane;
use super::motion::approach;
use super::state::GameState;
use crate::consts::*;

/// What the pursuit did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PursuitEvent {
    Spawned,
    Escaped,
    /// Pressure hit the cap
    Caught,
}

/// Spawn the police car once the score passes the next multiple
pub fn maybe_spawn(state: &mut GameState) -> Option<PursuitEvent> {
    let police = &mut state.police;
    if state.score < police.last_spawn_score + state.config.police_every {
        return None;
    }
    police.last_spawn_score = state.score;
    police.active = true;
    police.pressure = 0;
    police.pos = Vec2::new(
        car_x_for_lane(state.player.target_lane),
        PLAYER_Y + POLICE_SPAWN_GAP,
    );
    log::info!("Police pursuit started at score {}", state.score);
    Some(PursuitEvent::Spawned)
}

/// Advance the chase by one tick
pub fn chase(state: &mut GameState, boost: f32) -> Option<PursuitEvent> {
    if !state.police.active {
        return None;
    }
    if state.police.pressure >= MAX_PRESSURE {
        state.police.pressure = MAX_PRESSURE;
        return Some(PursuitEvent::Caught);
    }

    let target_x = car_x_for_lane(state.player.target_lane);
    let police = &mut state.police;
    police.pos.x = approach(police.pos.x, target_x, POLICE_STEER);
    police.pos.y -= state.enemy_speed - boost;

    let gap = police.gap();
    police.pressure = if gap < POLICE_CLOSE_GAP {
        (police.pressure + 1).min(MAX_PRESSURE)
    } else {
        police.pressure.saturating_sub(PRESSURE_DECAY)
    };

    if gap > POLICE_ESCAPE_GAP {
        police.active = false;
        police.pressure = 0;
        log::info!("Escaped the police");
        return Some(PursuitEvent::Escaped);
    }

    if police.pressure >= MAX_PRESSURE {
        log::info!("Busted at pressure {}", police.pressure);
        return Some(PursuitEvent::Caught);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameConfig;
    use crate::sim::lane::Lane;
    use proptest::prelude::*;

    fn pursuit_state() -> GameState {
        GameState::new(GameConfig::default())
    }

    #[test]
    fn test_spawns_every_twenty_points() {
        let mut state = pursuit_state();
        state.score = 19;
        assert_eq!(maybe_spawn(&mut state), None);

        state.player.target_lane = Lane::RIGHT;
        state.score = 20;
        assert_eq!(maybe_spawn(&mut state), Some(PursuitEvent::Spawned));
        assert!(state.police.active);
        assert_eq!(state.police.gap(), POLICE_SPAWN_GAP);
        assert_eq!(state.police.pos.x, car_x_for_lane(Lane::RIGHT));

        state.score = 39;
        assert_eq!(maybe_spawn(&mut state), None);
        state.score = 40;
        assert_eq!(maybe_spawn(&mut state), Some(PursuitEvent::Spawned));
    }

    #[test]
    fn test_pressure_builds_when_close() {
        let mut state = pursuit_state();
        state.police.active = true;
        state.police.pos.y = PLAYER_Y + 50.0;
        // Hold the police still so the gap stays fixed
        state.enemy_speed = 0.0;

        chase(&mut state, 0.0);
        assert_eq!(state.police.pressure, 1);
        chase(&mut state, 0.0);
        assert_eq!(state.police.pressure, 2);
    }

    #[test]
    fn test_pressure_decays_twice_as_fast() {
        let mut state = pursuit_state();
        state.police.active = true;
        state.police.pressure = 5;
        state.police.pos.y = PLAYER_Y + 200.0;
        state.enemy_speed = 0.0;

        chase(&mut state, 0.0);
        assert_eq!(state.police.pressure, 3);
        chase(&mut state, 0.0);
        chase(&mut state, 0.0);
        assert_eq!(state.police.pressure, 0);
    }

    #[test]
    fn test_escape_resets_pressure() {
        let mut state = pursuit_state();
        state.police.active = true;
        state.police.pressure = 50;
        state.police.pos.y = PLAYER_Y + 290.0;
        // Outrun the police with boost faster than traffic
        state.enemy_speed = 2.0;

        assert_eq!(chase(&mut state, NITRO_BOOST * 4.0), Some(PursuitEvent::Escaped));
        assert!(!state.police.active);
        assert_eq!(state.police.pressure, 0);
    }

    #[test]
    fn test_caught_at_max_pressure() {
        let mut state = pursuit_state();
        state.police.active = true;
        state.police.pressure = MAX_PRESSURE - 1;
        state.police.pos.y = PLAYER_Y + 10.0;
        state.enemy_speed = 0.0;

        assert_eq!(chase(&mut state, 0.0), Some(PursuitEvent::Caught));
        assert_eq!(state.police.pressure, MAX_PRESSURE);
    }

    #[test]
    fn test_full_pressure_is_caught_even_when_far() {
        let mut state = pursuit_state();
        state.police.active = true;
        state.police.pressure = MAX_PRESSURE;
        state.police.pos.y = PLAYER_Y + 200.0;
        assert_eq!(chase(&mut state, 0.0), Some(PursuitEvent::Caught));
    }

    #[test]
    fn test_inactive_police_does_nothing() {
        let mut state = pursuit_state();
        let before = state.police.pos;
        assert_eq!(chase(&mut state, 0.0), None);
        assert_eq!(state.police.pos, before);
    }

    proptest! {
        #[test]
        fn pressure_stays_in_bounds(
            start in 0u32..=MAX_PRESSURE,
            gaps in proptest::collection::vec(-400.0f32..290.0, 1..300),
        ) {
            let mut state = pursuit_state();
            state.police.active = true;
            state.police.pressure = start;
            state.enemy_speed = 0.0;
            for gap in gaps {
                state.police.active = true;
                state.police.pos.y = PLAYER_Y + gap;
                chase(&mut state, 0.0);
                prop_assert!(state.police.pressure <= MAX_PRESSURE);
            }
        }
    }
}
