//! Player physics body
//!
//! Vertical-only integrator. The horizontal position is fixed for the whole
//! session; obstacles scroll past instead.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;

/// The glider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Centre of the body (screen coordinates, y grows downward)
    pub pos: Vec2,
    /// Vertical velocity (units/tick)
    pub vel: f32,
    pub half_extents: Vec2,
}

impl PlayerBody {
    pub fn new(pos: Vec2, half_extents: Vec2) -> Self {
        Self {
            pos,
            vel: 0.0,
            half_extents,
        }
    }

    /// Advance one tick: velocity first, then position. No clamping.
    pub fn integrate(&mut self, gravity: f32) {
        self.vel += gravity;
        self.pos.y += self.vel;
    }

    /// Replace the current velocity with the jump impulse
    pub fn activate(&mut self, jump_impulse: f32) {
        self.vel = jump_impulse;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.half_extents)
    }
}
