//! Rock Glider - a side-scrolling glider game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, session lifecycle)
//! - `scene`: Declarative per-frame scene description handed to a renderer
//! - `audio`: Fire-and-forget audio/visual cue collaborator
//! - `game`: Host-facing driver wiring the simulation to its collaborators
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences

pub mod audio;
pub mod error;
pub mod game;
pub mod scene;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use game::Game;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Downward acceleration applied every tick (units/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set on activation (negative is up)
    pub const JUMP_IMPULSE: f32 = -8.0;

    /// Vertical clearance between the two members of an obstacle pair
    pub const GAP: f32 = 220.0;
    /// Horizontal scroll speed of obstacles (units/tick)
    pub const PIPE_SPEED: f32 = 3.0;
    pub const PIPE_WIDTH: f32 = 100.0;
    /// Distance between consecutive pairs when the pool is seeded
    pub const PIPE_SPACING: f32 = 350.0;
    /// Number of live obstacle pairs
    pub const PIPE_COUNT: usize = 3;
    /// Upper bound accepted from tuning files
    pub const MAX_PIPE_COUNT: usize = 64;

    /// Spawn margins (top measured from the viewport, bottom from the ground)
    pub const MARGIN_TOP: f32 = 100.0;
    pub const MARGIN_BOTTOM: f32 = 100.0;
    pub const GROUND_HEIGHT: f32 = 100.0;

    /// A pair counts as passed once its trailing edge is this far behind the player
    pub const PASS_MARGIN: f32 = 20.0;

    /// Player hitbox half extents
    pub const PLAYER_HALF_WIDTH: f32 = 18.0;
    pub const PLAYER_HALF_HEIGHT: f32 = 14.0;
    /// Player's fixed horizontal position as a fraction of viewport width
    pub const PLAYER_X_FRACTION: f32 = 0.25;

    /// Viewport used when the host does not report one
    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 720.0;

    pub const GAME_OVER_MESSAGE: &str = "GAME OVER\nPress SPACE to Restart";
}
