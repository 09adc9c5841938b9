//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use serde::{Deserialize, Serialize};

use super::collision::{Impact, find_impact};
use super::difficulty::update_difficulty;
use super::motion::{advance_enemies, roam_enemies, steer_player};
use super::police::{self, PursuitEvent};
use super::spawn::recycle_enemies;
use super::state::{GameOverCause, GamePhase, GameState};
use crate::consts::*;

/// Discrete input from the player (edge-triggered)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    LaneLeft,
    LaneRight,
    BoostDown,
    BoostUp,
    /// Only honoured once the run is over
    Restart,
}

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Events received since the previous tick, in arrival order
    pub events: Vec<InputEvent>,
    /// Idle/demo mode - the autopilot drives
    pub autopilot: bool,
}

impl TickInput {
    pub fn with_events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Default::default()
        }
    }
}

/// Apply one input event to the state
pub fn apply_input(state: &mut GameState, event: InputEvent) {
    match event {
        InputEvent::Restart => {
            if state.phase.is_over() {
                state.restart();
            }
        }
        _ if state.phase.is_over() => {}
        InputEvent::LaneLeft => state.player.target_lane = state.player.target_lane.left(),
        InputEvent::LaneRight => state.player.target_lane = state.player.target_lane.right(),
        InputEvent::BoostDown => state.player.boost_held = true,
        InputEvent::BoostUp => state.player.boost_held = false,
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    let was_over = state.phase.is_over();
    for &event in &input.events {
        apply_input(state, event);
    }
    if input.autopilot {
        for event in super::autopilot::plan(state) {
            apply_input(state, event);
        }
    }

    // Nothing moves once the run is over; a restart shows the fresh layout
    // for one frame before traffic starts moving
    if was_over || state.phase.is_over() {
        return;
    }

    state.time_ticks += 1;

    // --- Motion ---
    steer_player(state);
    let boost = burn_nitro(state);
    state.road_offset = (state.road_offset + state.road_speed + boost) % ROAD_MARK_PERIOD;
    let scroll = state.enemy_speed + boost;
    advance_enemies(state, scroll);
    if state.config.mode.enemies_roam() {
        roam_enemies(state);
    }

    // --- Spawner ---
    recycle_enemies(state);

    // --- Police ---
    let mut busted = false;
    if state.config.mode.has_police() {
        police::maybe_spawn(state);
        busted = police::chase(state, boost) == Some(PursuitEvent::Caught);
    }

    // --- Collision ---
    if state.phase == GamePhase::Playing {
        if let Some(impact) = find_impact(state) {
            match impact {
                Impact::Enemy { id } => log::info!("Crashed into enemy {id} at score {}", state.score),
                Impact::Police => log::info!("Crashed into the police at score {}", state.score),
            }
            state.phase = GamePhase::Exploding { frame: 1 };
        }
    } else if let GamePhase::Exploding { frame } = state.phase {
        // --- Explosion countdown ---
        let frame = frame + 1;
        state.phase = if frame > state.config.explosion_frames {
            log::info!("Game over: crashed (score {}, level {})", state.score, state.level);
            GamePhase::GameOver {
                cause: GameOverCause::Crashed,
            }
        } else {
            GamePhase::Exploding { frame }
        };
    }

    // --- Difficulty ---
    update_difficulty(state);

    // Pressure ends the run immediately, skipping any explosion
    if busted {
        log::info!("Game over: busted (score {}, level {})", state.score, state.level);
        state.phase = GamePhase::GameOver {
            cause: GameOverCause::Busted,
        };
    }
}

/// Spend or refill nitro. Returns the boost for this tick.
fn burn_nitro(state: &mut GameState) -> f32 {
    let player = &mut state.player;
    if player.boosting() {
        player.nitro -= 1;
        NITRO_BOOST
    } else {
        player.nitro = (player.nitro + 1).min(NITRO_MAX);
        0.0
    }
}
