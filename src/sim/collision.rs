//! Collision detection and response
//!
//! Pure geometric functions over axis-aligned boxes and the ball's velocity.
//! The simulation tick consumes these; nothing here mutates game state.

use glam::Vec2;

use super::rect::Aabb;
use crate::consts::{FIELD_WIDTH, MIN_BOUNCE_ANGLE_DEG};

/// The struck side of a block, from the ball's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// Outcome of a ball-block contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlockImpact {
    /// Fireball mode: destructive hit, velocity and position untouched.
    PassThrough,
    /// Regular bounce off `side` with the corrected velocity and ball
    /// position (flush against the struck edge).
    Bounce { side: Side, vel: Vec2, pos: Vec2 },
}

/// Check a ball against a block.
///
/// Collision exists iff the boxes intersect. The impacted side is the one
/// with the minimum overlap depth; ties break in left, right, top, bottom
/// order. The returned position clamps the ball flush against the struck
/// edge so it cannot tunnel or stick on the next tick.
pub fn ball_block_impact(ball: &Aabb, vel: Vec2, block: &Aabb, fireball: bool) -> Option<BlockImpact> {
    if !ball.intersects(block) {
        return None;
    }
    if fireball {
        return Some(BlockImpact::PassThrough);
    }

    let overlap_left = ball.right() - block.left();
    let overlap_right = block.right() - ball.left();
    let overlap_top = ball.bottom() - block.top();
    let overlap_bottom = block.bottom() - ball.top();

    // Strict less-than keeps the left-right-top-bottom tie order.
    let mut side = Side::Left;
    let mut smallest = overlap_left;
    for (candidate, depth) in [
        (Side::Right, overlap_right),
        (Side::Top, overlap_top),
        (Side::Bottom, overlap_bottom),
    ] {
        if depth < smallest {
            side = candidate;
            smallest = depth;
        }
    }

    let (w, h) = (ball.width(), ball.height());
    let (vel, pos) = match side {
        Side::Left => (
            Vec2::new(-vel.x.abs(), vel.y),
            Vec2::new(block.left() - w, ball.top()),
        ),
        Side::Right => (
            Vec2::new(vel.x.abs(), vel.y),
            Vec2::new(block.right(), ball.top()),
        ),
        Side::Top => (
            Vec2::new(vel.x, -vel.y.abs()),
            Vec2::new(ball.left(), block.top() - h),
        ),
        Side::Bottom => (
            Vec2::new(vel.x, vel.y.abs()),
            Vec2::new(ball.left(), block.bottom()),
        ),
    };
    Some(BlockImpact::Bounce { side, vel, pos })
}

/// Check a ball against the paddle; returns the launch velocity on contact.
///
/// The contact offset across the paddle width maps to a launch angle: 90
/// degrees at the centerline, falling linearly toward the edges with a hard
/// floor of 30 degrees. The left half exits up-left, the right half
/// up-right. The result is renormalized so |v| equals `speed` exactly.
pub fn paddle_bounce(ball: &Aabb, paddle: &Aabb, speed: f32) -> Option<Vec2> {
    if !ball.intersects(paddle) {
        return None;
    }

    let t = ((ball.center().x - paddle.left()) / paddle.width()).clamp(0.0, 1.0);
    let (angle_deg, dir_x) = if t <= 0.5 {
        ((t * 2.0 * 90.0).max(MIN_BOUNCE_ANGLE_DEG), -1.0)
    } else {
        (((1.0 - t) * 2.0 * 90.0).max(MIN_BOUNCE_ANGLE_DEG), 1.0)
    };
    let radians = angle_deg.to_radians();
    // Decompose and orient upward (y grows down)
    let vel = Vec2::new(dir_x * speed * radians.cos(), -speed * radians.sin());
    Some(renormalize(vel, speed))
}

/// Side wall or ceiling contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallHit {
    Left,
    Right,
    Top,
}

/// Reflect the velocity off the field walls. Directional: a ball already
/// heading back in cannot re-trigger on the same wall. The bottom boundary
/// is not a bounce and is handled by the tick as a ball-lost event.
pub fn wall_bounce(ball: &Aabb, vel: Vec2) -> (Vec2, Option<WallHit>) {
    let mut vel = vel;
    let mut hit = None;
    if ball.left() <= 0.0 && vel.x < 0.0 {
        vel.x = vel.x.abs();
        hit = Some(WallHit::Left);
    } else if ball.right() >= FIELD_WIDTH && vel.x > 0.0 {
        vel.x = -vel.x.abs();
        hit = Some(WallHit::Right);
    }
    if ball.top() <= 0.0 && vel.y < 0.0 {
        vel.y = vel.y.abs();
        hit = Some(WallHit::Top);
    }
    (vel, hit)
}

/// Rescale a velocity so its magnitude equals `speed` exactly, preserving
/// direction. Guards the degenerate zero-magnitude case by launching
/// straight up rather than dividing by zero.
pub fn renormalize(vel: Vec2, speed: f32) -> Vec2 {
    let mag = vel.length();
    if mag < 1e-4 {
        return Vec2::new(0.0, -speed);
    }
    vel * (speed / mag)
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use crate::consts::{BALL_SIZE, BALL_SPEED};
    use proptest::prelude::*;

    proptest! {
        /// Speed invariance: every non-fireball bounce preserves |v|.
        #[test]
        fn prop_block_bounce_preserves_speed(
            bx in 50.0f32..700.0,
            by in 50.0f32..400.0,
            dx in 5.0f32..60.0,
            dy in 5.0f32..20.0,
            sx in -1.0f32..1.0,
            sy in -1.0f32..1.0,
        ) {
            let block = Aabb::from_pos_size(Vec2::new(bx, by), Vec2::new(70.0, 25.0));
            let ball = Aabb::from_pos_size(Vec2::new(bx + dx - BALL_SIZE, by + dy - BALL_SIZE), Vec2::splat(BALL_SIZE));
            let vel = renormalize(Vec2::new(sx, sy), BALL_SPEED);
            if let Some(BlockImpact::Bounce { vel: out, .. }) =
                ball_block_impact(&ball, vel, &block, false)
            {
                prop_assert!((out.length() - BALL_SPEED).abs() < 1e-3);
            }
        }

        /// Paddle bounces launch upward at exactly the speed scalar.
        #[test]
        fn prop_paddle_bounce_up_at_speed(t in 0.0f32..1.0) {
            let paddle = Aabb::from_pos_size(Vec2::new(300.0, 540.0), Vec2::new(100.0, 30.0));
            let cx = 300.0 + t * 100.0;
            let ball = Aabb::from_pos_size(
                Vec2::new(cx - BALL_SIZE / 2.0, 525.0),
                Vec2::splat(BALL_SIZE),
            );
            let vel = paddle_bounce(&ball, &paddle, BALL_SPEED).unwrap();
            prop_assert!(vel.y < 0.0);
            prop_assert!((vel.length() - BALL_SPEED).abs() < 1e-3);
        }
    }
}
