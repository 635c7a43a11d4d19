//! Game state machine
//!
//! Wraps the simulation with Playing/Paused/GameOver handling and exposes the
//! commands a host adapter calls from its input handlers and frame timer.

use std::time::Duration;

use serde::Serialize;

use crate::platform::FixedStep;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, Outcome, tick};

/// Paddle as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub score: u32,
}

/// Ball as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed: f32,
}

/// Immutable per-frame view of the game for drawing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub width: f32,
    pub height: f32,
    pub player: PaddleView,
    pub computer: PaddleView,
    pub ball: BallView,
    pub phase: GamePhase,
    pub is_paused: bool,
    pub is_game_over: bool,
    pub outcome: Option<Outcome>,
    /// Display text for the outcome (empty while playing)
    pub outcome_message: String,
}

/// A single match against the computer
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    clock: FixedStep,
}

impl Game {
    pub fn new(settings: &Settings) -> Self {
        let settings = settings.clone().sanitized();
        log::info!(
            "New game: {}x{}, first to {}",
            settings.playfield_width,
            settings.playfield_height,
            settings.winning_score
        );
        Self {
            state: GameState::new(&settings),
            clock: FixedStep::new(settings.tick_interval()),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for hosts and tests that need to stage a position
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Advance one fixed step (no-op unless playing)
    pub fn tick(&mut self) -> Vec<GameEvent> {
        tick(&mut self.state)
    }

    /// Run as many ticks as `elapsed` wall-clock time calls for
    pub fn update(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        let steps = self.clock.advance(elapsed);
        let mut events = Vec::new();
        for _ in 0..steps {
            events.extend(self.tick());
        }
        events
    }

    /// Move the player paddle so its center follows the pointer
    ///
    /// Accepted in every phase; out-of-range values are clamped. Returns false
    /// and leaves the paddle in place if `raw_y` is not finite.
    pub fn set_player_paddle_target(&mut self, raw_y: f32) -> bool {
        if !raw_y.is_finite() {
            log::debug!("Ignoring non-finite paddle target {}", raw_y);
            return false;
        }
        let field = self.state.field;
        self.state.player.center_on(raw_y, &field);
        true
    }

    /// Pause a running game. Returns false if there was nothing to pause.
    pub fn pause(&mut self) -> bool {
        if self.state.phase != GamePhase::Playing {
            return false;
        }
        self.state.phase = GamePhase::Paused;
        log::info!("Paused");
        true
    }

    /// Resume a paused game. Returns false if the game was not paused.
    pub fn resume(&mut self) -> bool {
        if self.state.phase != GamePhase::Paused {
            return false;
        }
        self.state.phase = GamePhase::Playing;
        self.clock.reset();
        log::info!("Resumed");
        true
    }

    /// Start a new match from any phase
    pub fn restart(&mut self) {
        self.state.reset_match();
        self.clock.reset();
        log::info!("Restarted");
    }

    /// Change playfield size; entities scale with it
    pub fn resize(&mut self, width: f32, height: f32) {
        log::debug!(
            "Resize {}x{} -> {}x{}",
            self.state.field.width,
            self.state.field.height,
            width,
            height
        );
        self.state.resize(width, height);
    }

    pub fn snapshot(&self) -> Snapshot {
        let state = &self.state;
        let paddle = |p: &crate::sim::Paddle| PaddleView {
            x: p.x,
            y: p.y,
            width: p.width,
            height: p.height,
            score: p.score,
        };
        Snapshot {
            width: state.field.width,
            height: state.field.height,
            player: paddle(&state.player),
            computer: paddle(&state.computer),
            ball: BallView {
                x: state.ball.pos.x,
                y: state.ball.pos.y,
                radius: state.ball.radius,
                speed: state.ball.speed,
            },
            phase: state.phase,
            is_paused: state.phase == GamePhase::Paused,
            is_game_over: state.phase == GamePhase::GameOver,
            outcome: state.outcome,
            outcome_message: state.outcome.map(|o| o.to_string()).unwrap_or_default(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}
