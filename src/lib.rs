//! Skyrunner - an endless side-scrolling platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, chunk generation, session state)
//! - `view`: Read-only frame/HUD snapshots for the render and UI layers
//! - `tuning`: Data-driven physics balance
//! - `highscores`: Session-local leaderboard
//!
//! Rendering, input devices and UI text live outside this crate: an embedder
//! samples a [`sim::TickInput`] once per frame, calls [`sim::tick`], and draws
//! from a [`view::FrameView`]. Nothing outside `sim` mutates game state.

pub mod highscores;
pub mod sim;
pub mod tuning;
pub mod view;

pub use highscores::HighScores;
pub use tuning::Tuning;

/// Game configuration constants
///
/// World coordinates are y-down: y = 0 is the top of the play field. One tick
/// corresponds to one rendered frame; speeds are in world units per tick.
pub mod consts {
    /// Downward acceleration added to vertical velocity every tick
    pub const GRAVITY: f32 = 0.5;
    /// Initial upward speed of a jump
    pub const JUMP_STRENGTH: f32 = 13.0;
    /// Terminal fall speed (vertical velocity clamp)
    pub const MAX_FALL_SPEED: f32 = 16.0;
    /// Horizontal run speed
    pub const PLAYER_SPEED: f32 = 6.0;
    /// Run-cycle phase advance per tick
    pub const ANIMATION_SPEED: f32 = 0.15;

    /// Player bounding box
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;
    /// Enemy bounding box (square)
    pub const ENEMY_SIZE: f32 = 32.0;
    /// Fixed session spawn point
    pub const SPAWN_X: f32 = 50.0;
    pub const SPAWN_Y: f32 = 480.0;

    /// Upward bounce applied after stomping an enemy
    pub const STOMP_BOUNCE: f32 = -10.0;
    /// Combat score per stomped enemy
    pub const STOMP_SCORE: u64 = 100;
    /// Bonus for reaching a goal platform (fixed-level mode)
    pub const LEVEL_CLEAR_SCORE: u64 = 300;
    /// Lives at session start
    pub const START_LIVES: u8 = 3;

    /// Viewport dimensions in world units
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 600.0;
    /// Falling past this y counts as leaving the play field
    pub const FALL_LIMIT: f32 = 600.0;
    /// Band below a surface top within which a falling player still lands
    pub const LANDING_TOLERANCE: f32 = 10.0;

    /// Width of one generated terrain slice
    pub const CHUNK_WIDTH: f32 = 900.0;
    /// Fraction of the viewport kept behind the player by the camera
    pub const CAMERA_AHEAD: f32 = 0.35;
    /// Exponential smoothing factor for camera follow
    pub const CAMERA_LERP: f32 = 0.08;
    /// Entities this far behind the camera are despawned
    pub const CLEANUP_MARGIN: f32 = 300.0;
    /// Generation must stay at least this far ahead of the camera
    pub const SPAWN_LOOKAHEAD: f32 = 2.0 * VIEW_WIDTH;

    /// Top edge and thickness of ground platforms
    pub const GROUND_TOP: f32 = 550.0;
    pub const GROUND_HEIGHT: f32 = 50.0;
    /// Thickness of floating platforms
    pub const FLOAT_HEIGHT: f32 = 20.0;
    /// Moving-platform horizontal speed
    pub const PLATFORM_MOVE_SPEED: f32 = 2.0;
    /// Default oscillation half-range for moving platforms and enemies
    pub const OSC_RANGE: f32 = 100.0;

    /// World-x distance per difficulty tier
    pub const DIFFICULTY_DISTANCE: f32 = 1200.0;
    /// Difficulty cap
    pub const MAX_DIFFICULTY: u32 = 6;
}
