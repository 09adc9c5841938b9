//! Enemy recycling
//!
//! Cars that scroll past the bottom of the road are moved back above the
//! screen in a fresh lane. This is the only place the score goes up.

use rand::Rng;

use super::lane::{Lane, car_x_for_lane};
use super::state::GameState;
use crate::consts::*;

/// Pick a lane for enemy `slot` at height `y`, avoiding lanes another enemy
/// holds within the separation window. Gives up after `MAX_LANE_RETRIES`
/// and keeps the last roll.
pub fn pick_free_lane(state: &mut GameState, slot: usize, y: f32) -> Lane {
    let mut lane = Lane::ALL[state.rng.random_range(0..Lane::ALL.len())];
    for _ in 0..MAX_LANE_RETRIES {
        if !state.lane_contested(lane, y, slot) {
            return lane;
        }
        lane = Lane::ALL[state.rng.random_range(0..Lane::ALL.len())];
    }
    log::debug!("All lanes contested at y={y}, accepting lane {}", lane.index());
    lane
}

/// Recycle every enemy past the bottom edge. Returns how many were recycled.
pub fn recycle_enemies(state: &mut GameState) -> u32 {
    let mut recycled = 0;
    for i in 0..state.enemies.len() {
        if state.enemies[i].pos.y <= SCREEN_HEIGHT {
            continue;
        }
        let lane = pick_free_lane(state, i, ENEMY_RESPAWN_Y);
        let enemy = &mut state.enemies[i];
        enemy.lane = lane;
        enemy.pos.x = car_x_for_lane(lane);
        enemy.pos.y = ENEMY_RESPAWN_Y;
        state.score += 1;
        recycled += 1;
    }
    recycled
}
