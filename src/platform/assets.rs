//! Vehicle sprites
//!
//! Images are optional. A missing file resolves to a solid-coloured box of the
//! car's size, so a renderer always has something to draw.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{CAR_HEIGHT, CAR_WIDTH};

/// Which car a sprite is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleRole {
    Player,
    Enemy,
    Police,
}

impl VehicleRole {
    pub const ALL: [VehicleRole; 3] = [VehicleRole::Player, VehicleRole::Enemy, VehicleRole::Police];

    /// Image file looked up in the asset directory
    pub fn file_name(&self) -> &'static str {
        match self {
            VehicleRole::Player => "player.png",
            VehicleRole::Enemy => "enemy.png",
            VehicleRole::Police => "police.png",
        }
    }

    /// RGBA colour drawn when the image is missing
    pub fn fallback_color(&self) -> [u8; 4] {
        match self {
            VehicleRole::Player => [0x2e, 0x86, 0xde, 0xff],
            VehicleRole::Enemy => [0xd6, 0x30, 0x31, 0xff],
            VehicleRole::Police => [0xf5, 0xf6, 0xfa, 0xff],
        }
    }
}

/// Something a renderer can draw for a car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Sprite {
    /// Image file to load
    Image { path: PathBuf },
    /// Flat rectangle of the car's bounding box
    Solid { color: [u8; 4], size: Vec2 },
}

impl Sprite {
    pub fn placeholder(role: VehicleRole) -> Self {
        Sprite::Solid {
            color: role.fallback_color(),
            size: Vec2::new(CAR_WIDTH, CAR_HEIGHT),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Sprite::Solid { .. })
    }
}

/// Sprites for every vehicle role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteSet {
    pub player: Sprite,
    pub enemy: Sprite,
    pub police: Sprite,
}

impl Default for SpriteSet {
    fn default() -> Self {
        Self {
            player: Sprite::placeholder(VehicleRole::Player),
            enemy: Sprite::placeholder(VehicleRole::Enemy),
            police: Sprite::placeholder(VehicleRole::Police),
        }
    }
}

impl SpriteSet {
    /// Look up each role's image under `dir`, falling back to placeholders
    pub fn resolve(dir: &Path) -> Self {
        Self {
            player: resolve_one(dir, VehicleRole::Player),
            enemy: resolve_one(dir, VehicleRole::Enemy),
            police: resolve_one(dir, VehicleRole::Police),
        }
    }

    pub fn get(&self, role: VehicleRole) -> &Sprite {
        match role {
            VehicleRole::Player => &self.player,
            VehicleRole::Enemy => &self.enemy,
            VehicleRole::Police => &self.police,
        }
    }
}

fn resolve_one(dir: &Path, role: VehicleRole) -> Sprite {
    let path = dir.join(role.file_name());
    if path.is_file() {
        log::debug!("Using sprite {}", path.display());
        Sprite::Image { path }
    } else {
        log::warn!("Sprite {} missing, drawing a placeholder", path.display());
        Sprite::placeholder(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dir_gives_placeholders() {
        let set = SpriteSet::resolve(Path::new("/definitely/not/a/real/dir"));
        for role in VehicleRole::ALL {
            let sprite = set.get(role);
            assert!(sprite.is_placeholder());
            assert_eq!(
                *sprite,
                Sprite::Solid {
                    color: role.fallback_color(),
                    size: Vec2::new(CAR_WIDTH, CAR_HEIGHT),
                }
            );
        }
    }

    #[test]
    fn test_present_image_is_used() {
        let dir = std::env::temp_dir().join(format!("lane-rush-sprites-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("enemy.png"), b"not really a png").unwrap();

        let set = SpriteSet::resolve(&dir);
        assert_eq!(
            set.enemy,
            Sprite::Image {
                path: dir.join("enemy.png")
            }
        );
        assert!(set.player.is_placeholder());
        assert!(set.police.is_placeholder());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
