//! Game configuration
//!
//! Loaded from JSON by the headless runner; every field has a default so a
//! partial file only overrides what it names.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which variant of the game to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Straight-line traffic plus a pursuing police car with a pressure meter
    #[default]
    Pursuit,
    /// Enemies wander between lanes, no police
    Roaming,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Pursuit => "pursuit",
            GameMode::Roaming => "roaming",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pursuit" | "police" => Some(GameMode::Pursuit),
            "roaming" | "roam" => Some(GameMode::Roaming),
            _ => None,
        }
    }

    /// Whether a police car can spawn
    pub fn has_police(&self) -> bool {
        matches!(self, GameMode::Pursuit)
    }

    /// Whether enemies pick new lanes on their own
    pub fn enemies_roam(&self) -> bool {
        matches!(self, GameMode::Roaming)
    }

    /// Enemy count used by this mode's preset
    pub fn default_enemy_count(&self) -> usize {
        match self {
            GameMode::Pursuit => 3,
            GameMode::Roaming => 4,
        }
    }
}

/// Tunable session parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    /// RNG seed; restarting replays the same enemy layout
    pub seed: u64,
    pub enemy_count: usize,
    /// Score needed per level
    pub level_step: u64,
    /// Score between police spawns (pursuit only)
    pub police_every: u64,
    pub explosion_frames: u32,
    pub start_road_speed: f32,
    pub start_enemy_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_mode(GameMode::default())
    }
}

impl GameConfig {
    /// Preset for a mode
    pub fn for_mode(mode: GameMode) -> Self {
        Self {
            mode,
            seed: 0x5EED,
            enemy_count: mode.default_enemy_count(),
            level_step: 10,
            police_every: 20,
            explosion_frames: EXPLOSION_FRAMES,
            start_road_speed: START_ROAD_SPEED,
            start_enemy_speed: START_ENEMY_SPEED,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.enemy_count == 0 || self.enemy_count > MAX_ENEMIES {
            bail!("enemy_count must be in 1..={MAX_ENEMIES}, got {}", self.enemy_count);
        }
        if self.level_step == 0 {
            bail!("level_step must be > 0");
        }
        if self.police_every == 0 {
            bail!("police_every must be > 0");
        }
        if self.explosion_frames == 0 {
            bail!("explosion_frames must be > 0");
        }
        if !(self.start_road_speed > 0.0 && self.start_enemy_speed > 0.0) {
            bail!("start speeds must be positive");
        }
        Ok(())
    }

    /// Parse and validate a JSON config. A missing `enemy_count` follows the
    /// configured mode rather than the pursuit preset.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json).context("invalid config JSON")?;
        let count_given = value.get("enemy_count").is_some();
        let mut config: Self = serde_json::from_value(value).context("invalid config JSON")?;
        if !count_given {
            config.enemy_count = config.mode.default_enemy_count();
        }
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        log::info!(
            "Loaded config from {} (mode {}, seed {})",
            path.display(),
            config.mode.as_str(),
            config.seed
        );
        Ok(config)
    }
}
