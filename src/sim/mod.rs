//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by enemy slot)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod lane;
pub mod motion;
pub mod police;
pub mod skid;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Impact, Rect, find_impact, hitbox};
pub use lane::{Lane, car_x_for_lane, lane_center};
pub use skid::{SkidMark, SkidTrail};
pub use state::{Enemy, GameOverCause, GamePhase, GameState, Player, Police};
pub use tick::{InputEvent, TickInput, apply_input, tick};
