//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Constant step per tick
//! - Seeded RNG only
//! - Obstacles kept in spawn order
//! - No rendering, audio or platform dependencies

pub mod body;
pub mod collision;
pub mod layout;
pub mod pool;
pub mod state;
pub mod tick;

pub use body::PlayerBody;
pub use collision::{Aabb, Collision, Member, check, first_collision, out_of_bounds};
pub use layout::{Layout, Viewport};
pub use pool::{ObstaclePair, ObstaclePool};
pub use state::{GameEvent, Session, SessionPhase};
pub use tick::{Action, Trigger, activate, dispatch, tick};
