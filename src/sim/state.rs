//! Game state and core simulation types
//!
//! The session owns every entity collection exclusively; nothing here is
//! shared across threads or frames.

use std::time::Instant;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::level::{LevelPool, build_blocks};
use super::rect::Aabb;
use crate::consts::*;
use crate::records::RecordTable;

/// Current phase of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Pause popup is up, balls frozen
    Paused,
    /// Run ended; terminal
    GameOver,
}

/// Paddle size class. Each class maps to exactly one sprite box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddleSize {
    Small,
    #[default]
    Normal,
    Large,
}

impl PaddleSize {
    pub fn width(&self) -> f32 {
        match self {
            PaddleSize::Small => 50.0,
            PaddleSize::Normal => 100.0,
            PaddleSize::Large => 175.0,
        }
    }

    /// One step up, clamped at Large.
    pub fn grown(&self) -> Self {
        match self {
            PaddleSize::Small => PaddleSize::Normal,
            _ => PaddleSize::Large,
        }
    }

    /// One step down, clamped at Small.
    pub fn shrunk(&self) -> Self {
        match self {
            PaddleSize::Large => PaddleSize::Normal,
            _ => PaddleSize::Small,
        }
    }
}

/// A projectile fired by the paddle in shooter mode.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub pos: Vec2,
}

impl Projectile {
    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT))
    }
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Left edge x; y is fixed at `PADDLE_Y`
    pub x: f32,
    pub size: PaddleSize,
    /// Horizontal movement per tick, clamped to the speed bounds
    pub speed: f32,
    pub shooter: bool,
    pub ammo: u32,
    /// Wall-clock instant of the last shot, for the fire-rate cooldown
    pub last_shot: Option<Instant>,
    pub projectiles: Vec<Projectile>,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: (FIELD_WIDTH - PaddleSize::Normal.width()) / 2.0,
            size: PaddleSize::default(),
            speed: PADDLE_BASE_SPEED,
            shooter: false,
            ammo: 0,
            last_shot: None,
            projectiles: Vec::new(),
        }
    }
}

impl Paddle {
    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(
            Vec2::new(self.x, PADDLE_Y),
            Vec2::new(self.size.width(), PADDLE_HEIGHT),
        )
    }

    /// Shift by `dir` (-1 left, +1 right) at the current speed, kept in-field.
    pub fn slide(&mut self, dir: f32) {
        self.x = (self.x + dir * self.speed).clamp(0.0, FIELD_WIDTH - self.size.width());
    }

    /// Apply a speed reward, clamped to [base/2.5, base*2.5].
    pub fn set_speed(&mut self, speed: f32) {
        let lo = PADDLE_BASE_SPEED / PADDLE_SPEED_SCALE;
        let hi = PADDLE_BASE_SPEED * PADDLE_SPEED_SCALE;
        self.speed = speed.clamp(lo, hi);
    }

    /// Arm shooter mode with a fresh magazine.
    pub fn arm_shooter(&mut self) {
        self.shooter = true;
        self.ammo = SHOOTER_AMMO;
    }

    /// Fire one projectile from the paddle's top-center, if armed, loaded and
    /// past the fire-rate cooldown.
    pub fn try_shoot(&mut self, now: Instant) -> Option<Projectile> {
        if !self.shooter || self.ammo == 0 {
            return None;
        }
        if let Some(last) = self.last_shot {
            if now.duration_since(last) < SHOT_COOLDOWN {
                return None;
            }
        }
        self.ammo -= 1;
        self.last_shot = Some(now);
        let rect = self.rect();
        let projectile = Projectile {
            pos: Vec2::new(
                rect.center().x - PROJECTILE_WIDTH / 2.0,
                rect.top() - PROJECTILE_HEIGHT,
            ),
        };
        self.projectiles.push(projectile);
        Some(projectile)
    }

    /// Back to defaults between lives and levels. Drops shooter state and
    /// in-flight projectiles.
    pub fn reset(&mut self) {
        *self = Paddle::default();
    }
}

/// Active fireball mode on a ball.
#[derive(Debug, Clone, Copy)]
pub struct Fireball {
    /// Wall-clock activation; expires after `FIREBALL_DURATION`
    pub activated: Instant,
    /// Animation frame index, cycled every `FIREBALL_ANIM_RATE`
    pub anim_phase: usize,
    pub anim_flipped: Instant,
}

impl Fireball {
    pub fn new(now: Instant) -> Self {
        Self {
            activated: now,
            anim_phase: 0,
            anim_flipped: now,
        }
    }
}

/// A ball entity
#[derive(Debug, Clone)]
pub struct Ball {
    /// Top-left corner of the ball's box
    pub pos: Vec2,
    /// Velocity per tick; |vel| == speed except mid-resolution
    pub vel: Vec2,
    /// Speed scalar the velocity magnitude is pinned to
    pub speed: f32,
    /// Motion suspended without removing the entity
    pub frozen: bool,
    /// Fireball mode: pass through blocks, destroying them
    pub fireball: Option<Fireball>,
}

impl Ball {
    /// Fresh ball at the default launch state: field center, heading up-right
    /// at exactly the speed scalar.
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new((FIELD_WIDTH - BALL_SIZE) / 2.0, BALL_SPAWN_Y),
            vel: super::collision::renormalize(Vec2::new(1.0, -1.0), BALL_SPEED),
            speed: BALL_SPEED,
            frozen: false,
            fireball: None,
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(BALL_SIZE))
    }

    pub fn is_fireball(&self) -> bool {
        self.fireball.is_some()
    }

    pub fn activate_fireball(&mut self, now: Instant) {
        self.fireball = Some(Fireball::new(now));
    }

    /// Expire fireball mode and advance its animation phase.
    pub fn update_fireball(&mut self, now: Instant) {
        let Some(fb) = self.fireball.as_mut() else {
            return;
        };
        if now.duration_since(fb.activated) >= FIREBALL_DURATION {
            self.fireball = None;
            return;
        }
        if now.duration_since(fb.anim_flipped) >= FIREBALL_ANIM_RATE {
            fb.anim_phase = (fb.anim_phase + 1) % FIREBALL_ANIM_PHASES;
            fb.anim_flipped = now;
        }
    }
}

/// A block entity
#[derive(Debug, Clone)]
pub struct Block {
    pub rect: Aabb,
    /// Hit points; destroyed at 0
    pub stamina: u8,
}

impl Block {
    pub fn new(pos: Vec2, stamina: u8) -> Self {
        debug_assert!(stamina >= 1);
        Self {
            rect: Aabb::from_pos_size(pos, Vec2::new(BLOCK_WIDTH, BLOCK_HEIGHT)),
            stamina,
        }
    }

    /// Take one hit; true means destroyed.
    pub fn hit(&mut self) -> bool {
        self.stamina = self.stamina.saturating_sub(1);
        self.stamina == 0
    }
}

/// Reward types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardKind {
    Points50,
    Points100,
    Points250,
    Points500,
    SlowPaddle,
    FastPaddle,
    ShrinkPaddle,
    GrowPaddle,
    ExtraLife,
    ExtraBall,
    Fireball,
    Shooter,
}

impl RewardKind {
    /// Fixed, non-empty type set the spawn roll draws from.
    pub const ALL: [RewardKind; 12] = [
        RewardKind::Points50,
        RewardKind::Points100,
        RewardKind::Points250,
        RewardKind::Points500,
        RewardKind::SlowPaddle,
        RewardKind::FastPaddle,
        RewardKind::ShrinkPaddle,
        RewardKind::GrowPaddle,
        RewardKind::ExtraLife,
        RewardKind::ExtraBall,
        RewardKind::Fireball,
        RewardKind::Shooter,
    ];
}

/// A falling reward pickup
#[derive(Debug, Clone, Copy)]
pub struct Reward {
    pub kind: RewardKind,
    /// Top-left corner
    pub pos: Vec2,
}

impl Reward {
    /// Spawn with the box's top-center at `mid_top` (a block's bottom-center).
    pub fn at_mid_top(kind: RewardKind, mid_top: Vec2) -> Self {
        Self {
            kind,
            pos: Vec2::new(mid_top.x - REWARD_WIDTH / 2.0, mid_top.y),
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::new(REWARD_WIDTH, REWARD_HEIGHT))
    }
}

/// Things that happened during a tick, for sound triggers and HUD updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallHit,
    PaddleHit,
    BlockHit,
    BlockDestroyed,
    BallLost,
    LevelCleared,
    GameOver,
    Shot,
    RewardCollected(RewardKind),
}

/// One play session: entities, lives, score and phase.
#[derive(Debug, Clone)]
pub struct GameState {
    pub lives: u32,
    pub score: u32,
    pub phase: GamePhase,
    pub paddle: Paddle,
    pub balls: Vec<Ball>,
    pub blocks: Vec<Block>,
    pub rewards: Vec<Reward>,
    pub level_pool: LevelPool,
    pub records: RecordTable,
    pub rng: Pcg32,
}

impl GameState {
    /// Start a session: one paddle, one live ball, a random level from the pool.
    pub fn new(seed: u64, level_pool: LevelPool, records: RecordTable) -> Self {
        let mut state = Self {
            lives: START_LIVES,
            score: 0,
            phase: GamePhase::Running,
            paddle: Paddle::default(),
            balls: vec![Ball::spawn()],
            blocks: Vec::new(),
            rewards: Vec::new(),
            level_pool,
            records,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.load_next_level();
        state
    }

    /// Draw the next level from the pool and build its blocks.
    pub fn load_next_level(&mut self) {
        let (name, layout) = self.level_pool.take_random(&mut self.rng);
        self.blocks = build_blocks(&layout);
        log::info!("loaded level '{}' ({} blocks)", name, self.blocks.len());
    }

    /// Reset paddle, balls and rewards to defaults. Lives, score and blocks
    /// are untouched.
    pub fn reset_round(&mut self) {
        self.paddle.reset();
        self.balls.clear();
        self.balls.push(Ball::spawn());
        self.rewards.clear();
    }

    /// Running -> Paused; freezes balls. No-op in any other phase.
    pub fn pause(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.phase = GamePhase::Paused;
        for ball in &mut self.balls {
            ball.frozen = true;
        }
    }

    /// Paused -> Running; unfreezes balls.
    pub fn resume(&mut self) {
        if self.phase != GamePhase::Paused {
            return;
        }
        self.phase = GamePhase::Running;
        for ball in &mut self.balls {
            ball.frozen = false;
        }
    }

    /// One-way transition: permanently freezes every ball.
    pub fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        for ball in &mut self.balls {
            ball.frozen = true;
        }
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_paddle_size_steps_clamp() {
        assert_eq!(PaddleSize::Large.grown(), PaddleSize::Large);
        assert_eq!(PaddleSize::Small.shrunk(), PaddleSize::Small);
        assert_eq!(PaddleSize::Normal.grown(), PaddleSize::Large);
        assert_eq!(PaddleSize::Normal.shrunk(), PaddleSize::Small);
    }

    #[test]
    fn test_paddle_speed_bounds() {
        let mut paddle = Paddle::default();
        paddle.set_speed(1000.0);
        assert_eq!(paddle.speed, PADDLE_BASE_SPEED * PADDLE_SPEED_SCALE);
        paddle.set_speed(0.0);
        assert_eq!(paddle.speed, PADDLE_BASE_SPEED / PADDLE_SPEED_SCALE);
    }

    #[test]
    fn test_shoot_consumes_ammo_and_respects_cooldown() {
        let mut paddle = Paddle::default();
        let now = Instant::now();
        assert!(paddle.try_shoot(now).is_none(), "unarmed paddle cannot shoot");

        paddle.arm_shooter();
        assert!(paddle.try_shoot(now).is_some());
        assert_eq!(paddle.ammo, SHOOTER_AMMO - 1);
        // Within cooldown
        assert!(paddle.try_shoot(now + Duration::from_millis(100)).is_none());
        // Past cooldown
        assert!(paddle.try_shoot(now + SHOT_COOLDOWN).is_some());
        assert_eq!(paddle.projectiles.len(), 2);
    }

    #[test]
    fn test_shooter_empties() {
        let mut paddle = Paddle::default();
        paddle.arm_shooter();
        let mut now = Instant::now();
        for _ in 0..SHOOTER_AMMO {
            assert!(paddle.try_shoot(now).is_some());
            now += SHOT_COOLDOWN;
        }
        assert!(paddle.try_shoot(now).is_none());
    }

    #[test]
    fn test_block_hit_to_destruction() {
        let mut block = Block::new(Vec2::new(75.0, 35.0), 2);
        assert!(!block.hit());
        assert_eq!(block.stamina, 1);
        assert!(block.hit());
    }

    #[test]
    fn test_pause_resume_freezes_balls() {
        let mut state = test_state();
        state.pause();
        assert_eq!(state.phase, GamePhase::Paused);
        assert!(state.balls.iter().all(|b| b.frozen));
        state.resume();
        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.balls.iter().all(|b| !b.frozen));
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut state = test_state();
        state.game_over();
        state.pause();
        assert_eq!(state.phase, GamePhase::GameOver);
        state.resume();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.balls.iter().all(|b| b.frozen));
    }

    #[test]
    fn test_fireball_animation_cycles() {
        let mut ball = Ball::spawn();
        let start = Instant::now();
        ball.activate_fireball(start);
        for i in 1..=FIREBALL_ANIM_PHASES {
            ball.update_fireball(start + FIREBALL_ANIM_RATE * i as u32);
        }
        // Full cycle wraps back to phase 0
        assert_eq!(ball.fireball.unwrap().anim_phase, 0);
    }

    fn test_state() -> GameState {
        let mut levels = std::collections::BTreeMap::new();
        levels.insert("level_1".to_string(), vec![vec![1u8]]);
        GameState::new(7, LevelPool::new(levels), RecordTable::default())
    }
}
