//! Paddle Pong - a classic two-paddle ball game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, tick)
//! - `game`: Playing/Paused/GameOver state machine and host commands
//! - `platform`: Fixed-step scheduling for real-time hosts
//! - `settings`: Data-driven configuration

pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;

pub use game::{Game, Snapshot};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE_HZ: u32 = 50;
    /// Highest tick rate accepted from settings
    pub const MAX_TICK_RATE_HZ: u32 = 1000;
    /// Maximum ticks run for a single frame before backlog is dropped
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Speed the ball is given on every (re)serve
    pub const BALL_RESET_SPEED: f32 = 5.0;
    /// Speed gained on every paddle return (no cap)
    pub const BALL_SPEED_STEP: f32 = 0.1;
    /// Maximum deflection angle off a paddle edge
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Fraction of the gap to the ball the computer closes each tick
    pub const COMPUTER_TRACKING: f32 = 0.1;

    /// Points needed to win a match
    pub const WINNING_SCORE: u32 = 10;
}
