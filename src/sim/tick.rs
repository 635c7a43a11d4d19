//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically, one
//! fixed step per call.

use super::collision::{bounce_velocity, collide_point, intersects};
use super::state::{GameEvent, GamePhase, GameState, Outcome, Side};
use crate::consts::*;

/// Advance the game state by one fixed timestep
///
/// No-op unless the game is `Playing`. Returns the events produced by the
/// step, in the order they happened.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Don't tick if paused or game over
    match state.phase {
        GamePhase::Paused | GamePhase::GameOver => return events,
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    let field = state.field;
    let ball = &mut state.ball;

    // Integrate
    ball.pos += ball.vel;

    // Top/bottom walls: elastic, no position correction
    let bounds = ball.bounds();
    if bounds.top() < 0.0 || bounds.bottom() > field.height {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::WallBounce);
    }

    // Only the paddle on the ball's half is tested
    let on_left = field.is_left_half(state.ball.pos.x);
    let side = if on_left { Side::Player } else { Side::Computer };
    let paddle = state.paddle(side).rect();

    if intersects(&state.ball.bounds(), &paddle) {
        let ball = &mut state.ball;
        let cp = collide_point(ball.pos.y, &paddle);
        let direction = if on_left { 1.0 } else { -1.0 };

        ball.vel = bounce_velocity(cp, ball.speed, direction, MAX_BOUNCE_ANGLE);
        ball.speed += BALL_SPEED_STEP;

        log::debug!(
            "{:?} return: collide_point={:.3}, speed={:.2}",
            side,
            cp,
            ball.speed
        );
        events.push(GameEvent::PaddleHit {
            side,
            collide_point: cp,
        });
    }

    // Ball left the field: point to the far side
    let bounds = state.ball.bounds();
    let scorer = if bounds.left() < 0.0 {
        Some(Side::Computer)
    } else if bounds.right() > field.width {
        Some(Side::Player)
    } else {
        None
    };

    if let Some(scorer) = scorer {
        state.paddle_mut(scorer).score += 1;
        state.ball.reset(&field);
        log::info!(
            "{:?} scores ({} - {})",
            scorer,
            state.player.score,
            state.computer.score
        );
        events.push(GameEvent::Scored { side: scorer });
    }

    // Computer always chases the ball vertically
    let ball_y = state.ball.pos.y;
    let computer = &mut state.computer;
    let gap = ball_y - computer.center_y();
    computer.y += gap * COMPUTER_TRACKING;
    computer.clamp_to(&field);

    check_game_over(state, &mut events);

    events
}

/// Enter `GameOver` once either side reaches the winning score
fn check_game_over(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if !state.has_winner() {
        return;
    }

    let outcome = if state.player.score >= state.winning_score {
        Outcome::PlayerWins
    } else {
        Outcome::ComputerWins
    };
    state.phase = GamePhase::GameOver;
    state.outcome = Some(outcome);

    log::info!(
        "Game over: {} ({} - {})",
        outcome,
        state.player.score,
        state.computer.score
    );
    events.push(GameEvent::GameOver { outcome });
}
