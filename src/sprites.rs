//! Sprite atlas regions
//!
//! All artwork lives on a single atlas; each entity maps to a source region
//! here. The renderer scales regions to the entity's on-field box, so the
//! region sizes do not match the gameplay sizes.

use crate::consts::FIREBALL_ANIM_PHASES;
use crate::sim::{PaddleSize, RewardKind};

/// Source region on the sprite atlas, in atlas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteRegion {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl SpriteRegion {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

pub const BALL: SpriteRegion = SpriteRegion::new(1075, 732, 97, 96);
pub const PROJECTILE: SpriteRegion = SpriteRegion::new(1116, 856, 14, 31);
pub const LIFE_ICON: SpriteRegion = SpriteRegion::new(1075, 619, 96, 85);

/// Fireball overlay frames, cycled while a fireball is active.
pub const FIREBALL_PHASES: [SpriteRegion; FIREBALL_ANIM_PHASES] = [
    SpriteRegion::new(1216, 24, 452, 109),
    SpriteRegion::new(1216, 157, 501, 114),
    SpriteRegion::new(1217, 304, 522, 102),
    SpriteRegion::new(1216, 423, 516, 103),
];

/// Region for the paddle at its current size.
pub const fn paddle_region(size: PaddleSize) -> SpriteRegion {
    match size {
        PaddleSize::Small => SpriteRegion::new(985, 870, 96, 53),
        PaddleSize::Normal => SpriteRegion::new(530, 23, 202, 53),
        PaddleSize::Large => SpriteRegion::new(758, 499, 290, 53),
    }
}

/// Region for a block with the given remaining stamina. Blocks share one
/// column of art, one row per stamina value.
pub const fn block_region(stamina: u8) -> SpriteRegion {
    SpriteRegion::new(26, 23 + 101 * (stamina as u32 - 1), 227, 75)
}

/// Region for a falling reward capsule.
pub const fn reward_region(kind: RewardKind) -> SpriteRegion {
    match kind {
        RewardKind::Points50 => SpriteRegion::new(531, 181, 203, 54),
        RewardKind::Points100 => SpriteRegion::new(760, 181, 203, 54),
        RewardKind::Points250 => SpriteRegion::new(988, 185, 203, 54),
        RewardKind::Points500 => SpriteRegion::new(529, 262, 203, 54),
        RewardKind::SlowPaddle => SpriteRegion::new(757, 261, 203, 54),
        RewardKind::FastPaddle => SpriteRegion::new(988, 262, 203, 54),
        RewardKind::ExtraBall => SpriteRegion::new(529, 341, 203, 54),
        RewardKind::Fireball => SpriteRegion::new(756, 341, 203, 54),
        RewardKind::ShrinkPaddle => SpriteRegion::new(531, 420, 203, 54),
        RewardKind::GrowPaddle => SpriteRegion::new(758, 420, 203, 54),
        RewardKind::Shooter => SpriteRegion::new(986, 420, 203, 54),
        RewardKind::ExtraLife => SpriteRegion::new(531, 499, 204, 54),
    }
}
