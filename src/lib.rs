//! Turtle Adventure - steer the turtle home, dodge everything else
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement policies, collisions, spawning, timers)
//! - `canvas`: Rendering surface abstraction and a retained scene implementation
//! - `stage`: Game-object container driving create/render/delete per element
//! - `session`: Session controller tying the simulation to the event loop
//! - `config`: Launch parameters

pub mod canvas;
pub mod config;
pub mod session;
pub mod sim;
pub mod sprites;
pub mod stage;

pub use config::{ConfigError, GameConfig};
pub use session::GameSession;

/// Game configuration constants
pub mod consts {
    /// Reference world dimensions
    pub const WORLD_WIDTH: u32 = 800;
    pub const WORLD_HEIGHT: u32 = 500;

    /// Interval between frame ticks on the event loop (ms)
    pub const FRAME_INTERVAL_MS: u64 = 20;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_START_X: f32 = 50.0;

    /// Home sits this far from the right edge, vertically centered
    pub const HOME_OFFSET_X: f32 = 100.0;
    pub const HOME_SIZE: f32 = 20.0;

    /// Half-length of each waypoint cross arm
    pub const WAYPOINT_ARM: f32 = 10.0;

    /// Enemy generator timing (ms)
    pub const SPAWN_FIRST_DELAY_MS: u64 = 100;
    pub const SPAWN_INTERVAL_MS: u64 = 3000;
}
