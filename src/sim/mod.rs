//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No randomness
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Circle, Rect, bounce_velocity, collide_point, intersects};
pub use state::{Ball, GameEvent, GamePhase, GameState, Outcome, Paddle, Playfield, Side};
pub use tick::tick;
