//! Collision detection between the ball and axis-aligned paddles
//!
//! Everything here is pure: no state, no side effects, no failure modes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A circle described by its center and radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.radius
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.radius
    }
}

/// Axis-aligned rectangle with a top-left origin (screen coordinates, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Vertical center line
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Check whether a circle overlaps a rectangle
///
/// Compares the circle's bounding box against the rectangle with strict
/// inequalities, so touching edges (tangency) do not count as a hit.
#[inline]
pub fn intersects(circle: &Circle, rect: &Rect) -> bool {
    circle.right() > rect.left()
        && circle.bottom() > rect.top()
        && circle.left() < rect.right()
        && circle.top() < rect.bottom()
}

/// Normalized vertical offset of a hit relative to the paddle center
///
/// -1 at the top edge, 0 at the center, +1 at the bottom edge. Not clamped:
/// a ball clipping a corner can land slightly outside [-1, 1].
#[inline]
pub fn collide_point(ball_y: f32, paddle: &Rect) -> f32 {
    let half = paddle.height / 2.0;
    (ball_y - paddle.center_y()) / half
}

/// Velocity leaving a paddle for a given collide point
///
/// The collide point maps linearly onto a deflection angle of up to
/// `max_angle`; `direction` is +1 to send the ball right, -1 to send it left.
#[inline]
pub fn bounce_velocity(collide_point: f32, speed: f32, direction: f32, max_angle: f32) -> Vec2 {
    let angle = collide_point * max_angle;
    Vec2::new(direction * speed * angle.cos(), speed * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn test_intersects_overlap() {
        let paddle = Rect::new(0.0, 250.0, 10.0, 100.0);
        let ball = Circle::new(Vec2::new(15.0, 300.0), 10.0);
        assert!(intersects(&ball, &paddle));
    }

    #[test]
    fn test_intersects_tangent_is_miss() {
        let paddle = Rect::new(0.0, 250.0, 10.0, 100.0);

        // Left edge of ball exactly on right edge of paddle
        let ball = Circle::new(Vec2::new(20.0, 300.0), 10.0);
        assert!(!intersects(&ball, &paddle));

        // Bottom of ball exactly on top of paddle
        let ball = Circle::new(Vec2::new(5.0, 240.0), 10.0);
        assert!(!intersects(&ball, &paddle));

        // Top of ball exactly on bottom of paddle
        let ball = Circle::new(Vec2::new(5.0, 360.0), 10.0);
        assert!(!intersects(&ball, &paddle));
    }

    #[test]
    fn test_intersects_far_away() {
        let paddle = Rect::new(790.0, 250.0, 10.0, 100.0);
        let ball = Circle::new(Vec2::new(400.0, 300.0), 10.0);
        assert!(!intersects(&ball, &paddle));
    }

    #[test]
    fn test_collide_point_edges() {
        let paddle = Rect::new(0.0, 250.0, 10.0, 100.0);
        assert_eq!(collide_point(300.0, &paddle), 0.0);
        assert_eq!(collide_point(250.0, &paddle), -1.0);
        assert_eq!(collide_point(350.0, &paddle), 1.0);
        // Corner hits are left unclamped
        assert!(collide_point(355.0, &paddle) > 1.0);
    }

    #[test]
    fn test_bounce_velocity_straight() {
        let vel = bounce_velocity(0.0, 5.0, 1.0, FRAC_PI_4);
        assert!((vel.x - 5.0).abs() < 1e-6);
        assert!(vel.y.abs() < 1e-6);

        let vel = bounce_velocity(0.0, 5.0, -1.0, FRAC_PI_4);
        assert!((vel.x + 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_bounce_velocity_edge_is_45_degrees() {
        let vel = bounce_velocity(1.0, 2.0, 1.0, FRAC_PI_4);
        assert!((vel.x - vel.y).abs() < 1e-5);
        assert!((vel.length() - 2.0).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn prop_intersects_matches_strict_bounds(
            cx in -50.0f32..150.0,
            cy in -50.0f32..150.0,
            r in 0.5f32..20.0,
            rx in 0.0f32..100.0,
            ry in 0.0f32..100.0,
            w in 1.0f32..40.0,
            h in 1.0f32..40.0,
        ) {
            let circle = Circle::new(Vec2::new(cx, cy), r);
            let rect = Rect::new(rx, ry, w, h);
            let expected = cx + r > rx && cy + r > ry && cx - r < rx + w && cy - r < ry + h;
            prop_assert_eq!(intersects(&circle, &rect), expected);
        }

        #[test]
        fn prop_bounce_preserves_speed(cp in -1.2f32..1.2, speed in 0.5f32..50.0) {
            let vel = bounce_velocity(cp, speed, 1.0, FRAC_PI_4);
            prop_assert!((vel.length() - speed).abs() < speed * 1e-5);
            prop_assert!(vel.x > 0.0);
        }
    }
}
