//! Collision detection
//!
//! Axis-aligned box tests between the glider and obstacle members, plus the
//! world bounds (ground line and viewport top). All predicates are pure.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::PlayerBody;
use super::pool::{ObstaclePair, ObstaclePool};

/// Axis-aligned bounding box in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap on the x axis
    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.right() > other.left() && self.left() < other.right()
    }
}

/// Which member of a pair was struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Member {
    Top,
    Bottom,
}

/// Reason a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    /// Struck an obstacle; `slot` is the pair's position in spawn order
    Obstacle { slot: usize, member: Member },
    /// Fell below the ground line
    Ground,
    /// Flew above the top of the viewport
    Ceiling,
}

/// The top member extends off-screen upward, so only its lower edge matters
#[inline]
pub fn hits_top(player: &Aabb, top: &Aabb) -> bool {
    player.overlaps_x(top) && player.top() < top.bottom()
}

/// The bottom member extends down to the ground, so only its upper edge matters
#[inline]
pub fn hits_bottom(player: &Aabb, bottom: &Aabb) -> bool {
    player.overlaps_x(bottom) && player.bottom() > bottom.top()
}

/// Check the player box against both members of a pair
pub fn check(player: &Aabb, pair: &ObstaclePair, pipe_width: f32, ground_line: f32) -> Option<Member> {
    if hits_top(player, &pair.top_member(pipe_width)) {
        Some(Member::Top)
    } else if hits_bottom(player, &pair.bottom_member(pipe_width, ground_line)) {
        Some(Member::Bottom)
    } else {
        None
    }
}

/// World-bounds test on the player's centre
pub fn out_of_bounds(y: f32, ground_line: f32) -> Option<Collision> {
    if y > ground_line {
        Some(Collision::Ground)
    } else if y < 0.0 {
        Some(Collision::Ceiling)
    } else {
        None
    }
}

/// First collision this tick, obstacles in spawn order then bounds
pub fn first_collision(
    player: &PlayerBody,
    pool: &ObstaclePool,
    pipe_width: f32,
    ground_line: f32,
) -> Option<Collision> {
    let bounds = player.bounds();
    pool.iter()
        .enumerate()
        .find_map(|(slot, pair)| {
            check(&bounds, pair, pipe_width, ground_line)
                .map(|member| Collision::Obstacle { slot, member })
        })
        .or_else(|| out_of_bounds(player.pos.y, ground_line))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 100.0;
    const GROUND: f32 = 620.0;

    fn pair_at(x: f32, top_height: f32) -> ObstaclePair {
        ObstaclePair::new(x, top_height, 220.0)
    }

    #[test]
    fn test_top_member_hit_then_clear() {
        // Top member spans y in [0, 200)
        let pair = pair_at(300.0, 200.0);
        let half = Vec2::new(18.0, 14.0);

        // Player top edge at 199 overlaps the top member's bottom edge
        let player = Aabb::from_center(Vec2::new(300.0, 213.0), half);
        assert_eq!(check(&player, &pair, WIDTH, GROUND), Some(Member::Top));

        // One unit lower: top edge sits exactly on the member's bottom edge
        let player = Aabb::from_center(Vec2::new(300.0, 214.0), half);
        assert_eq!(check(&player, &pair, WIDTH, GROUND), None);
    }

    #[test]
    fn test_bottom_member_hit() {
        // Gap ends at 420
        let pair = pair_at(300.0, 200.0);
        let half = Vec2::new(18.0, 14.0);

        let player = Aabb::from_center(Vec2::new(300.0, 407.0), half);
        assert_eq!(check(&player, &pair, WIDTH, GROUND), Some(Member::Bottom));

        let player = Aabb::from_center(Vec2::new(300.0, 406.0), half);
        assert_eq!(check(&player, &pair, WIDTH, GROUND), None);
    }

    #[test]
    fn test_no_horizontal_overlap_never_hits() {
        let pair = pair_at(300.0, 200.0);
        // Right edge touches the member's left edge (250) exactly: no overlap
        let player = Aabb::from_center(Vec2::new(232.0, 50.0), Vec2::new(18.0, 14.0));
        assert_eq!(check(&player, &pair, WIDTH, GROUND), None);
        let player = Aabb::from_center(Vec2::new(233.0, 50.0), Vec2::new(18.0, 14.0));
        assert_eq!(check(&player, &pair, WIDTH, GROUND), Some(Member::Top));
    }

    #[test]
    fn test_out_of_bounds() {
        assert_eq!(out_of_bounds(621.0, GROUND), Some(Collision::Ground));
        assert_eq!(out_of_bounds(-0.5, GROUND), Some(Collision::Ceiling));
        assert_eq!(out_of_bounds(620.0, GROUND), None);
        assert_eq!(out_of_bounds(0.0, GROUND), None);
    }
}
