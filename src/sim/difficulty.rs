//! Difficulty ratchet
//!
//! The level is a pure function of score. Each level gained speeds up the
//! road and the traffic once; nothing but a restart slows them down again.

use super::state::GameState;
use crate::consts::LEVEL_SPEED_INCREMENT;

/// Level a given score corresponds to
#[inline]
pub fn level_for_score(score: u64, level_step: u64) -> u32 {
    (score / level_step.max(1) + 1).min(u32::MAX as u64) as u32
}

/// Catch the stored level up to the score. Returns the number of levels gained.
pub fn update_difficulty(state: &mut GameState) -> u32 {
    let target = level_for_score(state.score, state.config.level_step);
    let mut gained = 0;
    while state.level < target {
        state.level += 1;
        state.road_speed += LEVEL_SPEED_INCREMENT;
        state.enemy_speed += LEVEL_SPEED_INCREMENT;
        gained += 1;
        log::info!(
            "Level {} (road speed {}, enemy speed {})",
            state.level,
            state.road_speed,
            state.enemy_speed
        );
    }
    gained
}
