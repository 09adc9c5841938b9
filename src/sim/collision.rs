//! Collision detection between cars
//!
//! Car sprites have transparent margins, so collisions use a smaller box
//! inset inside the sprite rather than the sprite bounds.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::consts::*;

/// Axis-aligned rectangle (top-left corner + size, screen coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && other.min.x < a_max.x && self.min.y < b_max.y && other.min.y < a_max.y
    }
}

/// Collision box of a car whose sprite's top-left corner is `car_pos`
pub fn hitbox(car_pos: Vec2) -> Rect {
    Rect::new(
        car_pos.x + (CAR_WIDTH - HITBOX_WIDTH) / 2.0,
        car_pos.y + HITBOX_INSET_Y,
        HITBOX_WIDTH,
        HITBOX_HEIGHT,
    )
}

/// What the player ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    Enemy { id: u32 },
    Police,
}

/// First car overlapping the player this tick, if any
pub fn find_impact(state: &GameState) -> Option<Impact> {
    let player = hitbox(state.player.pos);

    if let Some(enemy) = state.enemies.iter().find(|e| player.intersects(&hitbox(e.pos))) {
        return Some(Impact::Enemy { id: enemy.id });
    }

    if state.police.active && player.intersects(&hitbox(state.police.pos)) {
        return Some(Impact::Police);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameConfig;
    use crate::sim::lane::{Lane, car_x_for_lane};

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(9.0, 9.0, 10.0, 10.0)));
        assert!(a.intersects(&Rect::new(2.0, 2.0, 2.0, 2.0)));
        // Shared edge is not a hit
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 10.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(30.0, 30.0, 5.0, 5.0)));
    }

    #[test]
    fn test_hitbox_is_inset() {
        let hb = hitbox(Vec2::new(100.0, 200.0));
        assert_eq!(hb.min, Vec2::new(117.5, 220.0));
        assert_eq!(hb.size, Vec2::new(HITBOX_WIDTH, HITBOX_HEIGHT));
    }

    #[test]
    fn test_sprites_touching_margins_do_not_collide() {
        // Sprites overlap by 30px vertically, hitboxes do not
        let a = hitbox(Vec2::new(100.0, 400.0));
        let b = hitbox(Vec2::new(100.0, 330.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_find_impact_same_lane() {
        let mut state = GameState::new(GameConfig::default());
        assert_eq!(find_impact(&state), None);

        state.enemies[1].lane = Lane::MIDDLE;
        state.enemies[1].pos = Vec2::new(car_x_for_lane(Lane::MIDDLE), PLAYER_Y - 50.0);
        assert_eq!(find_impact(&state), Some(Impact::Enemy { id: 1 }));
    }

    #[test]
    fn test_adjacent_lane_is_safe() {
        let mut state = GameState::new(GameConfig::default());
        state.enemies[0].pos = Vec2::new(car_x_for_lane(Lane::LEFT), PLAYER_Y);
        assert_eq!(find_impact(&state), None);
    }

    #[test]
    fn test_inactive_police_never_hits() {
        let mut state = GameState::new(GameConfig::default());
        state.police.pos = state.player.pos;
        assert_eq!(find_impact(&state), None);
        state.police.active = true;
        assert_eq!(find_impact(&state), Some(Impact::Police));
    }
}
