//! Game settings
//!
//! Loaded from an optional JSON file; missing fields fall back to defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Match and playfield configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Points needed to win a match
    pub winning_score: u32,

    // === Playfield ===
    /// Initial playfield width (host may resize later)
    pub playfield_width: f32,
    /// Initial playfield height
    pub playfield_height: f32,

    // === Entities ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,

    // === Timing ===
    /// Fixed simulation rate (ticks per second)
    pub tick_rate_hz: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            winning_score: WINNING_SCORE,

            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            ball_radius: BALL_RADIUS,

            tick_rate_hz: TICK_RATE_HZ,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    /// Serialize settings as pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, using defaults if it can't be read
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values that would make the game unplayable
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.winning_score = self.winning_score.max(1);
        self.tick_rate_hz = self.tick_rate_hz.clamp(1, MAX_TICK_RATE_HZ);

        for (value, default) in [
            (&mut self.playfield_width, defaults.playfield_width),
            (&mut self.playfield_height, defaults.playfield_height),
            (&mut self.paddle_width, defaults.paddle_width),
            (&mut self.paddle_height, defaults.paddle_height),
            (&mut self.ball_radius, defaults.ball_radius),
        ] {
            if !(value.is_finite() && *value > 0.0) {
                *value = default;
            }
        }

        // Paddle must fit in the field
        self.paddle_height = self.paddle_height.min(self.playfield_height);
        self
    }

    /// Duration of one simulation tick
    pub fn tick_interval(&self) -> Duration {
        let hz = self.tick_rate_hz.clamp(1, MAX_TICK_RATE_HZ);
        Duration::from_nanos(1_000_000_000 / u64::from(hz))
    }
}
