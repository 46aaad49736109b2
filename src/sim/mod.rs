//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (fireball/shooter cooldowns are the one wall-clock exception)
//! - Seeded RNG only
//! - Stable iteration order (vec order, BTreeMap level pool)
//! - No rendering or platform dependencies
//!
//! Coordinates are screen-style: x grows right, y grows down. The ball
//! travels "up" with a negative dy.

pub mod collision;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{BlockImpact, Side, WallHit, ball_block_impact, paddle_bounce, renormalize, wall_bounce};
pub use level::{LevelPool, build_blocks, reward_roll};
pub use rect::Aabb;
pub use state::{
    Ball, Block, Fireball, GameEvent, GamePhase, GameState, Paddle, PaddleSize, Projectile,
    Reward, RewardKind,
};
pub use tick::{TickInput, tick};
