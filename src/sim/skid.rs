//! Skid marks left behind the player's rear wheels

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A single tyre decal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkidMark {
    pub pos: Vec2,
    /// Ticks left before removal
    pub life: i32,
}

/// Ordered skid decals (oldest first)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkidTrail {
    marks: Vec<SkidMark>,
}

impl SkidTrail {
    pub fn new() -> Self {
        Self { marks: Vec::new() }
    }

    /// Drop a pair of marks under the rear wheels of a car at `car_pos`
    pub fn add_pair(&mut self, car_pos: Vec2) {
        let y = car_pos.y + CAR_HEIGHT;
        for x in [car_pos.x + 18.0, car_pos.x + CAR_WIDTH - 22.0] {
            self.marks.push(SkidMark {
                pos: Vec2::new(x, y),
                life: SKID_LIFE,
            });
        }
        if self.marks.len() > MAX_SKIDS {
            let excess = self.marks.len() - MAX_SKIDS;
            self.marks.drain(..excess);
        }
    }

    /// Age every mark: expired ones go, the rest lose a tick and scroll down
    pub fn update(&mut self) {
        self.marks.retain_mut(|mark| {
            let alive = mark.life > 0;
            mark.life -= 1;
            alive
        });
        for mark in &mut self.marks {
            mark.pos.y += SKID_SCROLL;
        }
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkidMark> {
        self.marks.iter()
    }
}
