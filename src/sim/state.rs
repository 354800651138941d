//! Session state
//!
//! A `Session` is one play attempt from a fresh layout to the first
//! collision. It exclusively owns the player body, the obstacle pool and the
//! RNG that feeds obstacle placement; restarting builds a brand new session.

use glam::Vec2;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use super::body::PlayerBody;
use super::collision::Collision;
use super::layout::{Layout, Viewport};
use super::pool::ObstaclePool;
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Simulation advancing every tick
    Running,
    /// Collision happened; frozen until restart
    Ended,
}

/// Things that happened inside the simulation, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The player passed one or more pairs; carries the new score
    Scored { score: u32 },
    /// Session ended
    Crashed { cause: Collision, score: u32 },
    /// A fresh session replaced an ended one
    Restarted,
}

/// One complete play attempt
#[derive(Debug, Clone)]
pub struct Session {
    /// Seed this session's RNG was built from
    pub seed: u64,
    pub phase: SessionPhase,
    pub score: u32,
    /// Ticks simulated while running
    pub time_ticks: u64,
    pub player: PlayerBody,
    pub pool: ObstaclePool,
    /// Set when the session ended
    pub collision: Option<Collision>,
    pub(super) tuning: Tuning,
    pub(super) layout: Layout,
    pub(super) rng: Pcg32,
    pub(super) events: Vec<GameEvent>,
}

impl Session {
    /// Validate configuration and start a running session
    pub fn new(tuning: Tuning, viewport: Viewport, seed: u64) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let layout = Layout::new(&tuning, viewport)?;
        Ok(Self::from_layout(tuning, layout, seed))
    }

    /// Shared factory for first start and every restart
    pub(super) fn from_layout(tuning: Tuning, layout: Layout, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let player = PlayerBody::new(
            Vec2::new(
                layout.viewport.width * tuning.player_x_fraction,
                layout.viewport.height / 2.0,
            ),
            Vec2::new(tuning.player_half_width, tuning.player_half_height),
        );

        let mut pool = ObstaclePool::new();
        pool.seed(&tuning, &layout, &mut rng);

        log::info!(
            "Session started (seed {seed}, viewport {}x{})",
            layout.viewport.width,
            layout.viewport.height
        );

        Self {
            seed,
            phase: SessionPhase::Running,
            score: 0,
            time_ticks: 0,
            player,
            pool,
            collision: None,
            tuning,
            layout,
            rng,
            events: Vec::new(),
        }
    }

    /// Replace this session with a fresh one on the same tuning and viewport
    pub(super) fn reset(&mut self) {
        let seed = self.rng.next_u64();
        let events = std::mem::take(&mut self.events);
        *self = Self::from_layout(self.tuning.clone(), self.layout.clone(), seed);
        self.events = events;
        self.events.push(GameEvent::Restarted);
    }

    /// Apply a new viewport size between ticks.
    ///
    /// Only bounds move: in-flight pairs and the player keep their state. A
    /// viewport too small for the obstacle gap is rejected and the previous
    /// one stays in effect.
    pub fn on_viewport_resize(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        match Layout::new(&self.tuning, Viewport::new(width, height)) {
            Ok(layout) => {
                self.layout = layout;
                log::info!("Viewport resized to {width}x{height}");
                Ok(())
            }
            Err(e) => {
                log::warn!("Ignoring resize to {width}x{height}: {e}");
                Err(e)
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn viewport(&self) -> Viewport {
        self.layout.viewport
    }

    /// Take all events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = Session::new(Tuning::default(), Viewport::new(1280.0, 720.0), 42).unwrap();
        assert_eq!(session.phase, SessionPhase::Running);
        assert_eq!(session.score, 0);
        assert_eq!(session.pool.len(), 3);
        assert_eq!(session.player.pos, Vec2::new(320.0, 360.0));
        assert_eq!(session.player.vel, 0.0);
    }

    #[test]
    fn test_new_session_fails_fast_on_small_viewport() {
        let result = Session::new(Tuning::default(), Viewport::new(1280.0, 400.0), 42);
        assert!(matches!(result, Err(ConfigError::ViewportTooSmall { .. })));
    }

    #[test]
    fn test_resize_moves_bounds_only() {
        let mut session = Session::new(Tuning::default(), Viewport::new(1280.0, 720.0), 42).unwrap();
        let player = session.player.clone();
        let pairs: Vec<_> = session.pool.iter().cloned().collect();

        session.on_viewport_resize(1600.0, 900.0).unwrap();
        assert_eq!(session.layout().ground_line, 800.0);
        assert_eq!(session.layout().spawn_x, 1700.0);
        assert_eq!(session.player, player);
        assert!(session.pool.iter().eq(pairs.iter()));
    }

    #[test]
    fn test_resize_rejects_small_viewport() {
        let mut session = Session::new(Tuning::default(), Viewport::new(1280.0, 720.0), 42).unwrap();
        assert!(session.on_viewport_resize(1280.0, 300.0).is_err());
        assert_eq!(session.viewport(), Viewport::new(1280.0, 720.0));
    }
}
