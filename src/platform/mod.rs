//! Platform abstraction layer
//!
//! Thin pieces a front end plugs into the simulation:
//! - Input events funnelled into a single-consumer queue
//! - Sprite resolution with solid-colour fallbacks

pub mod assets;
pub mod input;

pub use assets::{Sprite, SpriteSet, VehicleRole};
pub use input::{InputQueue, InputSender};
