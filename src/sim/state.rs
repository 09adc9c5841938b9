//! Game state and core simulation types
//!
//! Everything the tick mutates lives in [`GameState`]; renderers read it
//! through [`crate::view::FrameView`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::lane::{Lane, car_x_for_lane};
use super::skid::SkidTrail;
use crate::consts::*;
use crate::settings::GameConfig;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// Hit another car and the explosion finished
    Crashed,
    /// Police pressure maxed out
    Busted,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Crash animation running; collisions are ignored
    Exploding { frame: u32 },
    /// Run ended, waiting for restart
    GameOver { cause: GameOverCause },
}

impl GamePhase {
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::GameOver { .. })
    }

    pub fn explosion_frame(&self) -> Option<u32> {
        match self {
            GamePhase::Exploding { frame } => Some(*frame),
            _ => None,
        }
    }
}

/// The player's car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the sprite; y never changes
    pub pos: Vec2,
    /// Lane the car is steering toward
    pub target_lane: Lane,
    /// Boost key held
    pub boost_held: bool,
    /// Nitro gauge (0..=NITRO_MAX)
    pub nitro: u32,
}

impl Player {
    pub fn new() -> Self {
        let target_lane = Lane::MIDDLE;
        Self {
            pos: Vec2::new(car_x_for_lane(target_lane), PLAYER_Y),
            target_lane,
            boost_held: false,
            nitro: NITRO_MAX,
        }
    }

    /// Boost only works while there is nitro left
    pub fn boosting(&self) -> bool {
        self.boost_held && self.nitro > 0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A traffic car scrolling toward the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    /// Lane this car is heading for (its x chases the lane center)
    pub lane: Lane,
}

impl Enemy {
    pub fn new(id: u32, lane: Lane, y: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(car_x_for_lane(lane), y),
            lane,
        }
    }
}

/// The pursuing police car (pursuit mode)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Police {
    pub active: bool,
    pub pos: Vec2,
    /// Closeness meter (0..=MAX_PRESSURE)
    pub pressure: u32,
    /// Score at the last spawn
    pub last_spawn_score: u64,
}

impl Default for Police {
    fn default() -> Self {
        Self {
            active: false,
            pos: Vec2::new(car_x_for_lane(Lane::MIDDLE), PLAYER_Y + POLICE_SPAWN_GAP),
            pressure: 0,
            last_spawn_score: 0,
        }
    }
}

impl Police {
    /// Vertical distance behind the player (negative once it has passed)
    pub fn gap(&self) -> f32 {
        self.pos.y - PLAYER_Y
    }
}

/// Complete game state (deterministic given config and inputs)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Settings this run was built from
    pub config: GameConfig,
    /// Seeded RNG for spawning and enemy lane changes
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub level: u32,
    pub road_speed: f32,
    pub enemy_speed: f32,
    /// Lane marking scroll (0..ROAD_MARK_PERIOD)
    pub road_offset: f32,
    pub player: Player,
    /// Fixed collection of traffic cars (sorted by id)
    pub enemies: Vec<Enemy>,
    pub police: Police,
    /// Visual only, never affects gameplay
    pub skids: SkidTrail,
}

impl GameState {
    /// Create a new game state from a config
    pub fn new(config: GameConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(config.seed);
        let enemies = initial_enemies(&mut rng, config.enemy_count);

        Self {
            road_speed: config.start_road_speed,
            enemy_speed: config.start_enemy_speed,
            config,
            rng,
            time_ticks: 0,
            phase: GamePhase::Playing,
            score: 0,
            level: 1,
            road_offset: 0.0,
            player: Player::new(),
            enemies,
            police: Police::default(),
            skids: SkidTrail::new(),
        }
    }

    /// Throw away the current run and start over from the config
    pub fn restart(&mut self) {
        log::info!(
            "Restarting (previous run: score {}, level {}, {} ticks)",
            self.score,
            self.level,
            self.time_ticks
        );
        *self = Self::new(self.config.clone());
    }

    /// Current boost in pixels per tick
    pub fn boost(&self) -> f32 {
        if self.player.boosting() { NITRO_BOOST } else { 0.0 }
    }

    /// Whether another enemy already targets `lane` within `LANE_SEPARATION` of `y`
    pub fn lane_contested(&self, lane: Lane, y: f32, skip: usize) -> bool {
        self.enemies
            .iter()
            .enumerate()
            .any(|(i, e)| i != skip && e.lane == lane && (e.pos.y - y).abs() < LANE_SEPARATION)
    }
}

/// Start-of-session layout: one car per slot, stacked above the screen
fn initial_enemies(rng: &mut Pcg32, count: usize) -> Vec<Enemy> {
    use rand::Rng;

    (0..count)
        .map(|i| {
            let lane = Lane::ALL[rng.random_range(0..Lane::ALL.len())];
            Enemy::new(i as u32, lane, -ENEMY_SPACING * (i as f32 + 1.0))
        })
        .collect()
}
