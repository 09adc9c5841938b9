//! Lane Rush - A three-lane arcade driving game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, collisions, game state)
//! - `session`: Fixed-step tick driver owning the simulation
//! - `platform`: Input funnel and asset resolution for front ends
//! - `view`: Read-only frame snapshot for renderers
//! - `settings`: Data-driven game configuration

pub mod highscores;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
pub mod view;

pub use highscores::HighScores;
pub use session::Session;
pub use settings::{GameConfig, GameMode};
pub use view::FrameView;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (~60 Hz, 16 ms like the original timer)
    pub const SIM_DT: f32 = 0.016;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will try to catch up on
    pub const MAX_FRAME_TIME: f32 = 0.1;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Road geometry (lane width is an integer third of the road)
    pub const ROAD_X: f32 = 40.0;
    pub const ROAD_WIDTH: f32 = 320.0;
    pub const LANE_WIDTH: f32 = 106.0;
    pub const LANE_COUNT: u8 = 3;
    /// Lane markings repeat every this many pixels
    pub const ROAD_MARK_PERIOD: f32 = 60.0;

    /// Sprite size shared by every vehicle
    pub const CAR_WIDTH: f32 = 80.0;
    pub const CAR_HEIGHT: f32 = 100.0;
    /// Collision box, smaller than the sprite's transparent margins
    pub const HITBOX_WIDTH: f32 = 45.0;
    pub const HITBOX_HEIGHT: f32 = 60.0;
    pub const HITBOX_INSET_Y: f32 = 20.0;

    /// Player car never moves vertically
    pub const PLAYER_Y: f32 = 420.0;

    /// Interpolation factors toward a lane center (per tick)
    pub const PLAYER_STEER: f32 = 0.15;
    pub const ENEMY_STEER: f32 = 0.10;
    pub const POLICE_STEER: f32 = 0.08;

    /// Starting speeds (pixels per tick)
    pub const START_ROAD_SPEED: f32 = 5.0;
    pub const START_ENEMY_SPEED: f32 = 6.0;
    /// Added to road and enemy speed on each level-up
    pub const LEVEL_SPEED_INCREMENT: f32 = 1.0;

    /// Nitro gauge
    pub const NITRO_MAX: u32 = 100;
    pub const NITRO_BOOST: f32 = 4.0;

    /// Enemy layout and recycling
    pub const MAX_ENEMIES: usize = 6;
    pub const ENEMY_SPACING: f32 = 300.0;
    pub const ENEMY_RESPAWN_Y: f32 = -300.0;
    /// Minimum vertical gap between two enemies sharing a lane
    pub const LANE_SEPARATION: f32 = 150.0;
    /// Recycle tries before accepting a contested lane
    pub const MAX_LANE_RETRIES: u32 = 8;

    /// Roaming enemies change lanes 1 in N ticks, only above this line
    pub const LANE_CHANGE_ODDS: u32 = 80;
    pub const LANE_CHANGE_MAX_Y: f32 = 200.0;

    /// Police pursuit
    pub const POLICE_SPAWN_GAP: f32 = 250.0;
    pub const POLICE_CLOSE_GAP: f32 = 120.0;
    pub const POLICE_ESCAPE_GAP: f32 = 300.0;
    pub const MAX_PRESSURE: u32 = 120;
    pub const PRESSURE_DECAY: u32 = 2;

    /// Skid marks
    pub const SKID_LIFE: i32 = 20;
    pub const SKID_SCROLL: f32 = 4.0;
    pub const SKID_THRESHOLD: f32 = 5.0;
    pub const MAX_SKIDS: usize = 256;

    /// Explosion length in ticks
    pub const EXPLOSION_FRAMES: u32 = 18;
}
