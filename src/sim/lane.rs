//! Lane geometry
//!
//! The road is split into three fixed corridors. Everything that positions a
//! car horizontally goes through [`lane_center`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One of the three driving corridors (always 0, 1 or 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Lane(u8);

impl Lane {
    pub const LEFT: Lane = Lane(0);
    pub const MIDDLE: Lane = Lane(1);
    pub const RIGHT: Lane = Lane(2);
    pub const ALL: [Lane; 3] = [Lane::LEFT, Lane::MIDDLE, Lane::RIGHT];

    /// Build a lane from an index, `None` if out of range
    pub fn new(index: u8) -> Option<Self> {
        (index < LANE_COUNT).then_some(Lane(index))
    }

    /// Build a lane from any index, clamping to the outer lanes
    pub fn clamped(index: i64) -> Self {
        Lane(index.clamp(0, LANE_COUNT as i64 - 1) as u8)
    }

    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    /// Lane to the left, staying put at the edge
    pub fn left(self) -> Self {
        Lane(self.0.saturating_sub(1))
    }

    /// Lane to the right, staying put at the edge
    pub fn right(self) -> Self {
        Lane((self.0 + 1).min(LANE_COUNT - 1))
    }
}

/// Horizontal pixel center of a lane
#[inline]
pub fn lane_center(lane: Lane) -> f32 {
    ROAD_X + lane.index() as f32 * LANE_WIDTH + LANE_WIDTH / 2.0
}

/// Left edge of a car sprite centered in `lane`
#[inline]
pub fn car_x_for_lane(lane: Lane) -> f32 {
    lane_center(lane) - CAR_WIDTH / 2.0
}
