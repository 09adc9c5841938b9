//! Frame snapshot for renderers
//!
//! Renderers never touch [`GameState`] directly; they get a `FrameView` built
//! after each tick. It serialises to JSON for headless tooling.

use glam::Vec2;
use serde::Serialize;

use crate::consts::*;
use crate::sim::{GameOverCause, GamePhase, GameState, Lane, SkidMark};

/// Width of the HUD gauges in pixels
pub const HUD_BAR_WIDTH: u32 = 160;

#[derive(Debug, Clone, Serialize)]
pub struct CarView {
    pub pos: Vec2,
    pub lane: Lane,
}

#[derive(Debug, Clone, Serialize)]
pub struct PoliceView {
    pub pos: Vec2,
    pub pressure: u32,
    /// Filled width of the pressure gauge
    pub pressure_bar: u32,
}

/// Fireball drawn over the player while exploding
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExplosionView {
    pub center: Vec2,
    /// Outer smoke diameter
    pub size: f32,
    pub alpha: u8,
}

impl ExplosionView {
    pub fn new(player_pos: Vec2, frame: u32) -> Self {
        Self {
            center: player_pos + Vec2::new(CAR_WIDTH, CAR_HEIGHT) / 2.0,
            size: frame as f32 * 14.0,
            alpha: 220u32.saturating_sub(frame * 12) as u8,
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameView {
    pub tick: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub level: u32,
    pub nitro: u32,
    /// Filled width of the nitro gauge
    pub nitro_bar: u32,
    pub boosting: bool,
    pub road_offset: f32,
    pub player: CarView,
    pub enemies: Vec<CarView>,
    pub police: Option<PoliceView>,
    pub skids: Vec<SkidMark>,
    pub explosion: Option<ExplosionView>,
    /// Headline text for the game-over screen
    pub banner: Option<&'static str>,
}

impl FrameView {
    pub fn capture(state: &GameState) -> Self {
        let police = state.police.active.then(|| PoliceView {
            pos: state.police.pos,
            pressure: state.police.pressure,
            pressure_bar: gauge_width(state.police.pressure, MAX_PRESSURE),
        });

        let banner = match state.phase {
            GamePhase::GameOver {
                cause: GameOverCause::Busted,
            } => Some("BUSTED!"),
            GamePhase::GameOver {
                cause: GameOverCause::Crashed,
            } => Some("GAME OVER"),
            _ => None,
        };

        Self {
            tick: state.time_ticks,
            phase: state.phase,
            score: state.score,
            level: state.level,
            nitro: state.player.nitro,
            nitro_bar: gauge_width(state.player.nitro, NITRO_MAX),
            boosting: state.player.boosting(),
            road_offset: state.road_offset,
            player: CarView {
                pos: state.player.pos,
                lane: state.player.target_lane,
            },
            enemies: state
                .enemies
                .iter()
                .map(|e| CarView {
                    pos: e.pos,
                    lane: e.lane,
                })
                .collect(),
            police,
            skids: state.skids.iter().copied().collect(),
            explosion: state
                .phase
                .explosion_frame()
                .map(|frame| ExplosionView::new(state.player.pos, frame)),
            banner,
        }
    }

    /// Screen shake is on while boosting or exploding
    pub fn shaking(&self) -> bool {
        self.boosting || self.explosion.is_some()
    }
}

/// Filled part of a HUD gauge for `value` out of `max`
pub fn gauge_width(value: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    value.min(max) * HUD_BAR_WIDTH / max
}
