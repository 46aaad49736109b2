//! Fixed timestep simulation tick
//!
//! Advances one session by exactly one tick: paddle movement, ball motion,
//! collision resolution, projectile and reward passes, life and level
//! transitions. Emits [`GameEvent`]s for the frame layer to turn into
//! sounds and HUD updates.

use std::time::Instant;

use super::collision::{self, BlockImpact};
use super::level::roll_reward;
use super::state::{Ball, GameEvent, GamePhase, GameState, RewardKind};
use crate::consts::*;

/// Input held or pressed during a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Fire a projectile (shooter mode only)
    pub fire: bool,
}

/// First collision found during the ball pass. At most one block or
/// bottom-edge effect resolves per tick; the rest wait for the next tick.
enum PassOutcome {
    BlockHit { ball: usize, block: usize },
    BallLost { ball: usize },
}

/// Advance the session by one tick. No-op unless the session is running.
pub fn tick(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    if state.phase != GamePhase::Running {
        return;
    }
    let now = Instant::now();

    // Paddle movement and shooting
    let dir = (input.right as i32 - input.left as i32) as f32;
    if dir != 0.0 {
        state.paddle.slide(dir);
    }
    if input.fire && state.paddle.try_shoot(now).is_some() {
        events.push(GameEvent::Shot);
    }

    // Wall-clock fireball expiry and animation
    for ball in &mut state.balls {
        ball.update_fireball(now);
    }

    // Ball motion with wall reflection
    for ball in &mut state.balls {
        if ball.frozen {
            continue;
        }
        let (vel, hit) = collision::wall_bounce(&ball.rect(), ball.vel);
        if hit.is_some() {
            ball.vel = collision::renormalize(vel, ball.speed);
            events.push(GameEvent::WallHit);
        }
        ball.pos += ball.vel;
    }

    // Ball pass: blocks short-circuit the whole pass, paddle bounces apply
    // inline, the bottom edge is a ball-lost event.
    let mut outcome = None;
    'pass: for bi in 0..state.balls.len() {
        for (ki, block) in state.blocks.iter().enumerate() {
            if state.balls[bi].rect().intersects(&block.rect) {
                outcome = Some(PassOutcome::BlockHit { ball: bi, block: ki });
                break 'pass;
            }
        }

        let paddle_rect = state.paddle.rect();
        let ball = &mut state.balls[bi];
        if let Some(vel) = collision::paddle_bounce(&ball.rect(), &paddle_rect, ball.speed) {
            ball.vel = vel;
            events.push(GameEvent::PaddleHit);
        }

        if state.balls[bi].rect().bottom() >= KILL_LINE_Y {
            outcome = Some(PassOutcome::BallLost { ball: bi });
            break 'pass;
        }
    }

    match outcome {
        Some(PassOutcome::BlockHit { ball, block }) => {
            resolve_block_hit(state, ball, block, events);
        }
        Some(PassOutcome::BallLost { ball }) => {
            handle_ball_lost(state, ball, events);
        }
        None => {}
    }
    if state.phase != GamePhase::Running {
        return;
    }

    // Projectile pass: move, cull above the field, then first hit only.
    for projectile in &mut state.paddle.projectiles {
        projectile.pos.y -= PROJECTILE_SPEED;
    }
    state
        .paddle
        .projectiles
        .retain(|p| p.rect().bottom() > 0.0);

    let mut shot_hit = None;
    'shots: for (pi, projectile) in state.paddle.projectiles.iter().enumerate() {
        for (ki, block) in state.blocks.iter().enumerate() {
            if projectile.rect().intersects(&block.rect) {
                shot_hit = Some((pi, ki));
                break 'shots;
            }
        }
    }
    if let Some((pi, ki)) = shot_hit {
        state.paddle.projectiles.remove(pi);
        state.add_score(BLOCK_SCORE);
        events.push(GameEvent::BlockHit);
        if state.blocks[ki].hit() {
            destroy_block(state, ki, events);
        }
    }

    // Reward pass: fall, cull below the field, consume everything touching
    // the paddle in the same tick.
    for reward in &mut state.rewards {
        reward.pos.y += REWARD_FALL_SPEED;
    }
    state.rewards.retain(|r| r.rect().top() < FIELD_HEIGHT);

    let paddle_rect = state.paddle.rect();
    let collected: Vec<RewardKind> = state
        .rewards
        .iter()
        .filter(|r| r.rect().intersects(&paddle_rect))
        .map(|r| r.kind)
        .collect();
    state.rewards.retain(|r| !r.rect().intersects(&paddle_rect));
    for kind in collected {
        apply_reward(state, kind, now);
        events.push(GameEvent::RewardCollected(kind));
    }
}

/// Score the contact, bounce or pass through, and destroy the block when
/// its stamina runs out (always, for fireballs).
fn resolve_block_hit(state: &mut GameState, bi: usize, ki: usize, events: &mut Vec<GameEvent>) {
    state.add_score(BLOCK_SCORE);
    events.push(GameEvent::BlockHit);

    let ball = &state.balls[bi];
    let impact = collision::ball_block_impact(
        &ball.rect(),
        ball.vel,
        &state.blocks[ki].rect,
        ball.is_fireball(),
    );
    let destroyed = match impact {
        Some(BlockImpact::PassThrough) => true,
        Some(BlockImpact::Bounce { vel, pos, .. }) => {
            let ball = &mut state.balls[bi];
            let speed = ball.speed;
            ball.vel = collision::renormalize(vel, speed);
            ball.pos = pos;
            state.blocks[ki].hit()
        }
        // The pass only reports intersecting pairs
        None => false,
    };
    if destroyed {
        destroy_block(state, ki, events);
    }
}

/// Remove a destroyed block, roll a reward drop, and load the next level
/// when the field is cleared.
fn destroy_block(state: &mut GameState, ki: usize, events: &mut Vec<GameEvent>) {
    let block = state.blocks.remove(ki);
    events.push(GameEvent::BlockDestroyed);

    if let Some(reward) = roll_reward(&mut state.rng, block.rect.mid_bottom()) {
        state.rewards.push(reward);
    }

    if state.blocks.is_empty() {
        events.push(GameEvent::LevelCleared);
        state.reset_round();
        state.load_next_level();
    }
}

/// A ball crossed the bottom boundary.
fn handle_ball_lost(state: &mut GameState, bi: usize, events: &mut Vec<GameEvent>) {
    events.push(GameEvent::BallLost);
    if state.balls.len() > 1 {
        state.balls.remove(bi);
        return;
    }
    state.lives -= 1;
    if state.lives > 0 {
        state.reset_round();
    } else {
        state.game_over();
        events.push(GameEvent::GameOver);
    }
}

/// Apply a collected reward's effect instantly.
fn apply_reward(state: &mut GameState, kind: RewardKind, now: Instant) {
    match kind {
        RewardKind::Points50 => state.add_score(50),
        RewardKind::Points100 => state.add_score(100),
        RewardKind::Points250 => state.add_score(250),
        RewardKind::Points500 => state.add_score(500),
        RewardKind::SlowPaddle => {
            let slowed = state.paddle.speed / PADDLE_SPEED_SCALE;
            state.paddle.set_speed(slowed);
        }
        RewardKind::FastPaddle => {
            let hastened = state.paddle.speed * PADDLE_SPEED_SCALE;
            state.paddle.set_speed(hastened);
        }
        RewardKind::ShrinkPaddle => state.paddle.size = state.paddle.size.shrunk(),
        RewardKind::GrowPaddle => state.paddle.size = state.paddle.size.grown(),
        RewardKind::ExtraLife => {
            if state.lives < MAX_LIVES {
                state.lives += 1;
            }
        }
        RewardKind::ExtraBall => {
            let mut ball = Ball::spawn();
            // Inherit fireball state from any live fireball ball
            ball.fireball = state.balls.iter().find_map(|b| b.fireball);
            state.balls.push(ball);
        }
        RewardKind::Fireball => {
            for ball in &mut state.balls {
                ball.activate_fireball(now);
            }
        }
        RewardKind::Shooter => state.paddle.arm_shooter(),
    }
}
