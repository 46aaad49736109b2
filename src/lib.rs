//! Brick Break - a paddle-and-ball brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `frames`: Scene/overlay navigation and input routing
//! - `records`: Score record table
//! - `store`: Persisted level/record JSON document
//! - `platform`: Draw/audio/input collaborator seams

pub mod audio;
pub mod frames;
pub mod platform;
pub mod records;
pub mod settings;
pub mod sim;
pub mod sprites;
pub mod store;

pub use records::RecordTable;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Fixed simulation tick rate
    pub const TICK_RATE: u32 = 60;

    /// Playfield dimensions (the game surface the ball bounces inside)
    pub const FIELD_WIDTH: f32 = 845.0;
    pub const FIELD_HEIGHT: f32 = 615.0;
    /// A ball whose box reaches this line is lost, not bounced
    pub const KILL_LINE_Y: f32 = 635.0;

    /// Paddle defaults
    pub const PADDLE_Y: f32 = 540.0;
    pub const PADDLE_HEIGHT: f32 = 30.0;
    pub const PADDLE_BASE_SPEED: f32 = 9.0;
    /// Speed rewards may scale the paddle only within [base/2.5, base*2.5]
    pub const PADDLE_SPEED_SCALE: f32 = 2.5;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED: f32 = 4.5;
    pub const BALL_SPAWN_Y: f32 = 500.0;

    /// Block grid: rows of 70x25 cells laid out from (75, 35)
    pub const BLOCK_WIDTH: f32 = 70.0;
    pub const BLOCK_HEIGHT: f32 = 25.0;
    pub const GRID_ORIGIN_X: f32 = 75.0;
    pub const GRID_ORIGIN_Y: f32 = 35.0;
    /// A single-value layout row expands to this many cells
    pub const GRID_COLS: usize = 10;

    /// Rewards
    pub const REWARD_WIDTH: f32 = 70.0;
    pub const REWARD_HEIGHT: f32 = 20.0;
    pub const REWARD_FALL_SPEED: f32 = 3.0;
    /// Percent chance a destroyed block drops a reward
    pub const REWARD_CHANCE: u8 = 15;

    /// Shooter mode
    pub const PROJECTILE_WIDTH: f32 = 10.0;
    pub const PROJECTILE_HEIGHT: f32 = 20.0;
    pub const PROJECTILE_SPEED: f32 = 4.0;
    pub const SHOOTER_AMMO: u32 = 5;
    pub const SHOT_COOLDOWN: Duration = Duration::from_secs(1);

    /// Fireball mode
    pub const FIREBALL_DURATION: Duration = Duration::from_secs(15);
    pub const FIREBALL_ANIM_RATE: Duration = Duration::from_millis(100);
    pub const FIREBALL_ANIM_PHASES: usize = 4;

    /// Session
    pub const START_LIVES: u32 = 3;
    pub const MAX_LIVES: u32 = 4;
    pub const BLOCK_SCORE: u32 = 10;

    /// Paddle bounce angle floor (degrees); the centerline launches at 90
    pub const MIN_BOUNCE_ANGLE_DEG: f32 = 30.0;
}
