//! Vehicle motion
//!
//! Cars never jump between lanes: their x decays toward the target lane's
//! center by a fixed fraction each tick, so they settle without overshoot.

use rand::Rng;

use super::lane::{Lane, car_x_for_lane};
use super::state::GameState;
use crate::consts::*;

/// Move `x` a fraction `k` of the way toward `target`
#[inline]
pub fn approach(x: f32, target: f32, k: f32) -> f32 {
    x + (target - x) * k
}

/// Steer the player toward its target lane, leaving skid marks on hard turns
/// or while boosting
pub fn steer_player(state: &mut GameState) {
    let target_x = car_x_for_lane(state.player.target_lane);
    let dx = target_x - state.player.pos.x;
    state.player.pos.x = approach(state.player.pos.x, target_x, PLAYER_STEER);

    if dx.abs() > SKID_THRESHOLD || state.player.boosting() {
        state.skids.add_pair(state.player.pos);
    }
    state.skids.update();
}

/// Scroll every enemy down the road by `dy`
pub fn advance_enemies(state: &mut GameState, dy: f32) {
    for enemy in &mut state.enemies {
        enemy.pos.y += dy;
    }
}

/// Roaming AI: occasionally pick a new lane, then ease toward it
pub fn roam_enemies(state: &mut GameState) {
    for i in 0..state.enemies.len() {
        let y = state.enemies[i].pos.y;
        if y < LANE_CHANGE_MAX_Y && state.rng.random_ratio(1, LANE_CHANGE_ODDS) {
            let candidate = Lane::ALL[state.rng.random_range(0..Lane::ALL.len())];
            if candidate != state.enemies[i].lane && !state.lane_contested(candidate, y, i) {
                log::debug!(
                    "Enemy {} changing lane {} -> {}",
                    state.enemies[i].id,
                    state.enemies[i].lane.index(),
                    candidate.index()
                );
                state.enemies[i].lane = candidate;
            }
        }
    }

    for enemy in &mut state.enemies {
        enemy.pos.x = approach(enemy.pos.x, car_x_for_lane(enemy.lane), ENEMY_STEER);
    }
}
