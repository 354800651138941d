//! Declarative scene description
//!
//! Each frame the host turns the session into a `SceneFrame` and hands it to
//! a `ScenePublisher`. The frame is plain data: rectangles, visibility flags
//! and text. How it gets drawn is up to the renderer.

use serde::Serialize;

use crate::consts::GAME_OVER_MESSAGE;
use crate::sim::{Aabb, Session, SessionPhase};

/// Which sprite the renderer should use for the glider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayerAppearance {
    Flying,
    Crashed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSprite {
    pub rect: Aabb,
    pub appearance: PlayerAppearance,
    /// False once the glider is entirely outside the viewport
    pub visible: bool,
}

/// One drawable obstacle member
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleSprite {
    pub rect: Aabb,
    /// False once the member is entirely outside the viewport
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneFrame {
    pub width: f32,
    pub height: f32,
    pub ground: Aabb,
    pub player: PlayerSprite,
    /// Top then bottom member for every live pair, in spawn order
    pub obstacles: Vec<ObstacleSprite>,
    pub score_text: String,
    /// End-of-run message, present only once the session has ended
    pub overlay: Option<String>,
}

impl SceneFrame {
    pub fn from_session(session: &Session) -> Self {
        let layout = session.layout();
        let viewport = layout.viewport;
        let pipe_width = session.tuning().pipe_width;

        let visible = |rect: &Aabb| {
            rect.right() > 0.0
                && rect.left() < viewport.width
                && rect.bottom() > 0.0
                && rect.top() < viewport.height
        };

        let obstacles = session
            .pool
            .iter()
            .flat_map(|pair| {
                [
                    pair.top_member(pipe_width),
                    pair.bottom_member(pipe_width, layout.ground_line),
                ]
            })
            .map(|rect| ObstacleSprite {
                visible: visible(&rect),
                rect,
            })
            .collect();

        let ended = session.phase == SessionPhase::Ended;
        let player_rect = session.player.bounds();

        Self {
            width: viewport.width,
            height: viewport.height,
            ground: Aabb::new(
                glam::Vec2::new(0.0, layout.ground_line),
                glam::Vec2::new(viewport.width, viewport.height),
            ),
            player: PlayerSprite {
                rect: player_rect,
                visible: visible(&player_rect),
                appearance: if ended {
                    PlayerAppearance::Crashed
                } else {
                    PlayerAppearance::Flying
                },
            },
            obstacles,
            score_text: format!("Score: {}", session.score),
            overlay: ended.then(|| GAME_OVER_MESSAGE.to_string()),
        }
    }
}

/// Receives the scene once per frame
pub trait ScenePublisher {
    fn publish(&mut self, frame: &SceneFrame);
}

/// Publisher that writes each frame to the log as JSON
#[derive(Debug, Default)]
pub struct LogPublisher {
    frames: u64,
}

impl LogPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl ScenePublisher for LogPublisher {
    fn publish(&mut self, frame: &SceneFrame) {
        self.frames += 1;
        if !log::log_enabled!(log::Level::Trace) {
            return;
        }
        match serde_json::to_string(frame) {
            Ok(json) => log::trace!("frame {}: {json}", self.frames),
            Err(e) => log::warn!("Failed to serialize frame {}: {e}", self.frames),
        }
    }
}
