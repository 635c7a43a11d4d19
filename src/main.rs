//! Paddle Pong entry point
//!
//! Native headless host: runs a match at the configured tick rate with a
//! scripted pointer standing in for the player, then prints the final
//! snapshot as JSON.
//!
//! Usage: `paddle-pong [--fast] [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::Instant;

    use paddle_pong::sim::GameEvent;
    use paddle_pong::{Game, Settings};

    env_logger::init();
    log::info!("Paddle Pong (native) starting...");

    let mut fast = false;
    let mut settings_path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--fast" => fast = true,
            _ => settings_path = Some(arg),
        }
    }

    let settings = settings_path
        .map(Settings::load)
        .unwrap_or_default()
        .sanitized();
    let interval = settings.tick_interval();
    // Ten minutes of play at most
    let max_ticks = u64::from(settings.tick_rate_hz) * 600;

    let mut game = Game::new(&settings);
    let mut pointer = ScriptedPointer::new(settings.playfield_height / 2.0);
    let mut last = Instant::now();
    let mut frames = 0u64;

    while !game.snapshot().is_game_over && frames < max_ticks {
        let ball_y = game.state().ball.pos.y;
        game.set_player_paddle_target(pointer.follow(ball_y));

        let events = if fast {
            game.tick()
        } else {
            std::thread::sleep(interval);
            let now = Instant::now();
            let events = game.update(now - last);
            last = now;
            events
        };

        for event in events {
            if let GameEvent::Scored { side } = event {
                let snap = game.snapshot();
                println!(
                    "{:?} scores: {} - {}",
                    side, snap.player.score, snap.computer.score
                );
            }
        }
        frames += 1;
    }

    match serde_json::to_string_pretty(&game.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

/// Pointer that chases the ball at a limited speed, like a human hand
#[cfg(not(target_arch = "wasm32"))]
struct ScriptedPointer {
    y: f32,
}

#[cfg(not(target_arch = "wasm32"))]
impl ScriptedPointer {
    /// Max pointer travel per frame
    const MAX_STEP: f32 = 6.0;

    fn new(y: f32) -> Self {
        Self { y }
    }

    fn follow(&mut self, target_y: f32) -> f32 {
        let delta = (target_y - self.y).clamp(-Self::MAX_STEP, Self::MAX_STEP);
        self.y += delta;
        self.y
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive `paddle_pong::Game` directly
}
