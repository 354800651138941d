//! Obstacle pool
//!
//! A fixed-size FIFO of obstacle pairs kept in spawn order. Each tick every
//! pair scrolls left; once the oldest pair is fully off-screen it is popped
//! from the front and a fresh pair is pushed at the right edge, so the live
//! count never changes and spacing stays even.

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::layout::Layout;
use crate::tuning::Tuning;

/// Two obstacle members sharing a horizontal centre, separated by a gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    /// Horizontal centre shared by both members
    pub x: f32,
    /// Height of the top member (equal to `gap_start`)
    pub top_height: f32,
    pub gap_start: f32,
    pub gap_end: f32,
    /// Set once the pair has been scored
    pub passed: bool,
}

impl ObstaclePair {
    pub fn new(x: f32, top_height: f32, gap: f32) -> Self {
        Self {
            x,
            top_height,
            gap_start: top_height,
            gap_end: top_height + gap,
            passed: false,
        }
    }

    #[inline]
    pub fn gap(&self) -> f32 {
        self.gap_end - self.gap_start
    }

    /// Right edge of both members
    #[inline]
    pub fn trailing_edge(&self, pipe_width: f32) -> f32 {
        self.x + pipe_width / 2.0
    }

    /// Upper member: from the top of the viewport down to the gap
    pub fn top_member(&self, pipe_width: f32) -> Aabb {
        let half = pipe_width / 2.0;
        Aabb::new(
            Vec2::new(self.x - half, 0.0),
            Vec2::new(self.x + half, self.gap_start),
        )
    }

    /// Lower member: from the gap down to the ground
    pub fn bottom_member(&self, pipe_width: f32, ground_line: f32) -> Aabb {
        let half = pipe_width / 2.0;
        Aabb::new(
            Vec2::new(self.x - half, self.gap_end),
            Vec2::new(self.x + half, ground_line),
        )
    }
}

/// The live set of obstacle pairs, oldest at the front
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstaclePool {
    pairs: VecDeque<ObstaclePair>,
    /// Total pairs ever spawned by this pool
    spawned: u64,
}

impl ObstaclePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out the initial approach: `pipe_count` pairs, evenly spaced from the right edge
    pub fn seed<R: Rng + ?Sized>(&mut self, tuning: &Tuning, layout: &Layout, rng: &mut R) {
        for i in 0..tuning.pipe_count {
            let x = layout.viewport.width + i as f32 * tuning.pipe_spacing;
            self.spawn(x, tuning, layout, rng);
        }
    }

    /// Append a new pair at `x` with a freshly drawn gap position
    pub fn spawn<R: Rng + ?Sized>(&mut self, x: f32, tuning: &Tuning, layout: &Layout, rng: &mut R) {
        let top_height = rng.random_range(layout.top_range());
        self.pairs.push_back(ObstaclePair::new(x, top_height, tuning.gap));
        self.spawned += 1;
    }

    /// Scroll every pair, recycle the oldest if it left the screen, and
    /// return how many pairs the player passed this tick
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        tuning: &Tuning,
        layout: &Layout,
        player_x: f32,
        rng: &mut R,
    ) -> u32 {
        for pair in &mut self.pairs {
            pair.x -= tuning.pipe_speed;
        }

        // Only the oldest pair is ever eligible
        if self
            .pairs
            .front()
            .is_some_and(|pair| pair.x < -tuning.pipe_width)
        {
            self.pairs.pop_front();
            self.spawn(layout.spawn_x, tuning, layout, rng);
            log::debug!("Recycled obstacle pair (spawned total: {})", self.spawned);
        }

        let pass_line = player_x - tuning.pass_margin;
        let mut passes = 0;
        for pair in self.pairs.iter_mut().filter(|p| !p.passed) {
            if pair.trailing_edge(tuning.pipe_width) < pass_line {
                pair.passed = true;
                passes += 1;
            }
        }
        passes
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in spawn order (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = &ObstaclePair> {
        self.pairs.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ObstaclePair> {
        self.pairs.iter_mut()
    }

    pub fn get(&self, slot: usize) -> Option<&ObstaclePair> {
        self.pairs.get(slot)
    }

    /// The pair next in line for recycling
    pub fn oldest(&self) -> Option<&ObstaclePair> {
        self.pairs.front()
    }

    pub fn spawned(&self) -> u64 {
        self.spawned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::layout::Viewport;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup() -> (Tuning, Layout, Pcg32) {
        let tuning = Tuning::default();
        let layout = Layout::new(&tuning, Viewport::new(1280.0, 720.0)).unwrap();
        (tuning, layout, Pcg32::seed_from_u64(7))
    }

    #[test]
    fn test_seed_spacing() {
        let (tuning, layout, mut rng) = setup();
        let mut pool = ObstaclePool::new();
        pool.seed(&tuning, &layout, &mut rng);

        let xs: Vec<f32> = pool.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1280.0, 1630.0, 1980.0]);
        for pair in pool.iter() {
            assert!(layout.top_range().contains(&pair.top_height));
            assert_eq!(pair.gap(), tuning.gap);
            assert!(!pair.passed);
        }
    }

    #[test]
    fn test_recycle_replaces_oldest_at_spawn_x() {
        let (tuning, layout, mut rng) = setup();
        let mut pool = ObstaclePool::new();
        pool.seed(&tuning, &layout, &mut rng);
        let second = pool.get(1).cloned().unwrap();

        // Push the oldest pair to the brink, one step from recycling
        pool.iter_mut().next().unwrap().x = -tuning.pipe_width + tuning.pipe_speed - 0.5;
        pool.advance(&tuning, &layout, 320.0, &mut rng);

        assert_eq!(pool.len(), 3);
        assert_eq!(pool.spawned(), 4);
        assert_eq!(pool.oldest().unwrap().x, second.x - tuning.pipe_speed);

        let newest = pool.iter().last().unwrap();
        assert_eq!(newest.x, layout.spawn_x);
        assert!(layout.top_range().contains(&newest.top_height));
        assert_eq!(newest.gap(), tuning.gap);
        assert!(!newest.passed);
    }

    #[test]
    fn test_only_oldest_recycled_per_tick() {
        let (tuning, layout, mut rng) = setup();
        let mut pool = ObstaclePool::new();
        pool.seed(&tuning, &layout, &mut rng);
        for pair in pool.iter_mut() {
            pair.x = -500.0;
        }

        pool.advance(&tuning, &layout, 320.0, &mut rng);
        assert_eq!(pool.len(), 3);
        let off_screen = pool.iter().filter(|p| p.x < -tuning.pipe_width).count();
        assert_eq!(off_screen, 2);
    }

    #[test]
    fn test_pass_scored_once() {
        let (tuning, layout, mut rng) = setup();
        let mut pool = ObstaclePool::new();
        pool.seed(&tuning, &layout, &mut rng);
        let player_x = 320.0;

        // Trailing edge lands at 299.5 after the move, inside pass_line (300)
        pool.iter_mut().next().unwrap().x = 252.5;
        assert_eq!(pool.advance(&tuning, &layout, player_x, &mut rng), 1);
        assert!(pool.oldest().unwrap().passed);
        assert_eq!(pool.advance(&tuning, &layout, player_x, &mut rng), 0);
    }
}
