//! Game state and core simulation types
//!
//! Everything the tick mutates lives in `GameState`; there is no hidden
//! module-level state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Circle, Rect};
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Game is paused; ticks have no effect
    Paused,
    /// A side reached the winning score
    GameOver,
}

/// Which end of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human player, left edge
    Player,
    /// Computer opponent, right edge
    Computer,
}

/// Result of a finished match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWins,
    ComputerWins,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::PlayerWins => write!(f, "You win!"),
            Outcome::ComputerWins => write!(f, "You lose!"),
        }
    }
}

/// Events produced by a single tick (for sound/effects on the host side)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball was returned by a paddle
    PaddleHit { side: Side, collide_point: f32 },
    /// A side won the point
    Scored { side: Side },
    /// The match ended
    GameOver { outcome: Outcome },
}

/// Rectangular simulation bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True if `x` is on the player's (left) half
    #[inline]
    pub fn is_left_half(&self, x: f32) -> bool {
        x < self.width / 2.0
    }
}

/// A paddle (player or computer)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge (fixed per side)
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub score: u32,
}

impl Paddle {
    /// Create a paddle vertically centered in the playfield
    pub fn new(side: Side, width: f32, height: f32, field: &Playfield) -> Self {
        let x = match side {
            Side::Player => 0.0,
            Side::Computer => field.width - width,
        };
        Self {
            x,
            y: field.height / 2.0 - height / 2.0,
            width,
            height,
            score: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Keep the paddle fully inside the playfield
    pub fn clamp_to(&mut self, field: &Playfield) {
        let max_y = (field.height - self.height).max(0.0);
        self.y = self.y.clamp(0.0, max_y);
    }

    /// Center the paddle on `target_y` and clamp it
    pub fn center_on(&mut self, target_y: f32, field: &Playfield) {
        self.y = target_y - self.height / 2.0;
        self.clamp_to(field);
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Scalar speed used for the next paddle return
    pub speed: f32,
}

impl Ball {
    /// A ball at the center of the field heading down-right
    pub fn new(radius: f32, field: &Playfield) -> Self {
        Self {
            pos: field.center(),
            vel: Vec2::splat(BALL_RESET_SPEED),
            radius,
            speed: BALL_RESET_SPEED,
        }
    }

    pub fn bounds(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    /// Re-serve from the center toward the side that just lost the point
    ///
    /// Only the horizontal component flips; the vertical component carries
    /// over from the previous rally.
    pub fn reset(&mut self, field: &Playfield) {
        self.pos = field.center();
        self.speed = BALL_RESET_SPEED;
        self.vel.x = -self.vel.x;
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub field: Playfield,
    pub player: Paddle,
    pub computer: Paddle,
    pub ball: Ball,
    /// Points needed to win
    pub winning_score: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Set once a side reaches `winning_score`
    pub outcome: Option<Outcome>,
    /// Simulation tick counter (ticks that actually advanced the game)
    pub time_ticks: u64,
}

impl GameState {
    /// Create a fresh match from settings
    pub fn new(settings: &Settings) -> Self {
        let field = Playfield::new(settings.playfield_width, settings.playfield_height);
        Self {
            player: Paddle::new(
                Side::Player,
                settings.paddle_width,
                settings.paddle_height,
                &field,
            ),
            computer: Paddle::new(
                Side::Computer,
                settings.paddle_width,
                settings.paddle_height,
                &field,
            ),
            ball: Ball::new(settings.ball_radius, &field),
            field,
            winning_score: settings.winning_score,
            phase: GamePhase::Playing,
            outcome: None,
            time_ticks: 0,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Player => &mut self.player,
            Side::Computer => &mut self.computer,
        }
    }

    /// True if either side has reached the winning score
    pub fn has_winner(&self) -> bool {
        self.player.score >= self.winning_score || self.computer.score >= self.winning_score
    }

    /// Reset scores and ball for a new match (keeps field and paddle positions)
    pub fn reset_match(&mut self) {
        self.player.score = 0;
        self.computer.score = 0;
        self.ball.reset(&self.field);
        self.outcome = None;
        self.phase = GamePhase::Playing;
    }

    /// Change playfield size, scaling entities proportionally
    ///
    /// x scales with width, y and paddle heights with height. Paddle widths and
    /// the ball radius stay fixed. The caller guarantees positive dimensions.
    pub fn resize(&mut self, width: f32, height: f32) {
        let sx = width / self.field.width;
        let sy = height / self.field.height;
        self.field = Playfield::new(width, height);

        for side in [Side::Player, Side::Computer] {
            let field = self.field;
            let paddle = self.paddle_mut(side);
            paddle.y *= sy;
            paddle.height *= sy;
            if side == Side::Computer {
                paddle.x = field.width - paddle.width;
            }
            paddle.clamp_to(&field);
        }

        self.ball.pos.x *= sx;
        self.ball.pos.y *= sy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Playfield {
        Playfield::new(800.0, 600.0)
    }

    #[test]
    fn test_new_state_is_centered() {
        let state = GameState::new(&Settings::default());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.x, 0.0);
        assert_eq!(state.player.y, 250.0);
        assert_eq!(state.computer.x, 790.0);
        assert_eq!(state.computer.y, 250.0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.speed, BALL_RESET_SPEED);
        assert!(state.outcome.is_none());
    }

    #[test]
    fn test_paddle_clamp() {
        let field = field();
        let mut paddle = Paddle::new(Side::Player, 10.0, 100.0, &field);

        paddle.center_on(-40.0, &field);
        assert_eq!(paddle.y, 0.0);

        paddle.center_on(10_000.0, &field);
        assert_eq!(paddle.y, 500.0);

        paddle.center_on(300.0, &field);
        assert_eq!(paddle.y, 250.0);
    }

    #[test]
    fn test_ball_reset_flips_horizontal_only() {
        let field = field();
        let mut ball = Ball::new(10.0, &field);
        ball.pos = Vec2::new(805.0, 42.0);
        ball.vel = Vec2::new(6.3, -2.1);
        ball.speed = 7.2;

        ball.reset(&field);

        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.speed, 5.0);
        assert_eq!(ball.vel, Vec2::new(-6.3, -2.1));
    }

    #[test]
    fn test_reset_match_clears_scores() {
        let mut state = GameState::new(&Settings::default());
        state.player.score = 4;
        state.computer.score = 10;
        state.phase = GamePhase::GameOver;
        state.outcome = Some(Outcome::ComputerWins);

        state.reset_match();

        assert_eq!(state.player.score, 0);
        assert_eq!(state.computer.score, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.outcome.is_none());
    }

    #[test]
    fn test_resize_scales_proportionally() {
        let mut state = GameState::new(&Settings::default());
        state.resize(400.0, 300.0);

        assert_eq!(state.field, Playfield::new(400.0, 300.0));
        assert_eq!(state.player.height, 50.0);
        assert_eq!(state.player.y, 125.0);
        assert_eq!(state.computer.x, 390.0);
        assert_eq!(state.computer.y, 125.0);
        assert_eq!(state.ball.pos, Vec2::new(200.0, 150.0));
        assert_eq!(state.ball.radius, 10.0);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::PlayerWins.to_string(), "You win!");
        assert_eq!(Outcome::ComputerWins.to_string(), "You lose!");
    }
}
