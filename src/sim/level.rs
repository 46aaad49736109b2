//! Level pool and reward rolls
//!
//! Level layouts come from the persisted store: rows of stamina values,
//! where a single-value row is shorthand for ten cells of that value and a
//! zero is an empty cell.

use std::collections::BTreeMap;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Block, Reward, RewardKind};
use crate::consts::*;

/// Rows of stamina values for one level.
pub type Layout = Vec<Vec<u8>>;

/// The remaining unplayed levels of a session.
///
/// Draws are uniform over the remaining pool and never repeat within a
/// session; an exhausted pool restarts from the pristine copy. A BTreeMap
/// keeps the draw order deterministic under a seeded RNG.
#[derive(Debug, Clone)]
pub struct LevelPool {
    remaining: BTreeMap<String, Layout>,
    pristine: BTreeMap<String, Layout>,
}

impl LevelPool {
    pub fn new(levels: BTreeMap<String, Layout>) -> Self {
        debug_assert!(!levels.is_empty(), "level pool must not start empty");
        Self {
            remaining: levels.clone(),
            pristine: levels,
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Draw a level uniformly at random and remove it from the pool.
    /// Restarts the pool from the pristine copy when it runs dry.
    pub fn take_random(&mut self, rng: &mut Pcg32) -> (String, Layout) {
        if self.remaining.is_empty() {
            log::info!("level pool exhausted, restarting from the full set");
            self.remaining = self.pristine.clone();
        }
        let idx = rng.random_range(0..self.remaining.len());
        let name = self
            .remaining
            .keys()
            .nth(idx)
            .cloned()
            .unwrap_or_default();
        let layout = self.remaining.remove(&name).unwrap_or_default();
        (name, layout)
    }

    /// Draw a specific level by name, removing it from the pool.
    pub fn take_named(&mut self, name: &str) -> Option<Layout> {
        self.remaining.remove(name)
    }
}

/// Expand a layout into live blocks on the grid.
///
/// Row `r`, column `c` lands at (75 + 70c, 35 + 25r); zeros are skipped and
/// a one-value row repeats across all ten columns.
pub fn build_blocks(layout: &Layout) -> Vec<Block> {
    let mut blocks = Vec::new();
    for (r, row) in layout.iter().enumerate() {
        let expanded;
        let cells: &[u8] = if row.len() == 1 {
            expanded = vec![row[0]; GRID_COLS];
            &expanded
        } else {
            row
        };
        for (c, &stamina) in cells.iter().enumerate() {
            if stamina == 0 {
                continue;
            }
            let pos = Vec2::new(
                GRID_ORIGIN_X + BLOCK_WIDTH * c as f32,
                GRID_ORIGIN_Y + BLOCK_HEIGHT * r as f32,
            );
            blocks.push(Block::new(pos, stamina));
        }
    }
    blocks
}

/// Whether a drawn value in 1..=100 wins a reward at the given percent chance.
#[inline]
pub fn reward_roll(drawn: u8, chance: u8) -> bool {
    drawn <= chance
}

/// Roll a reward spawn for a destroyed block at `mid_bottom`.
pub fn roll_reward(rng: &mut Pcg32, mid_bottom: Vec2) -> Option<Reward> {
    let drawn = rng.random_range(1..=100u8);
    if !reward_roll(drawn, REWARD_CHANCE) {
        return None;
    }
    let kind = RewardKind::ALL[rng.random_range(0..RewardKind::ALL.len())];
    Some(Reward::at_mid_top(kind, mid_bottom))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn pool_of(names: &[&str]) -> LevelPool {
        let mut map = BTreeMap::new();
        for name in names {
            map.insert(name.to_string(), vec![vec![1u8]]);
        }
        LevelPool::new(map)
    }

    #[test]
    fn test_take_random_without_replacement() {
        let mut pool = pool_of(&["a", "b", "c"]);
        let mut rng = Pcg32::seed_from_u64(1);
        let mut seen = Vec::new();
        for _ in 0..3 {
            let (name, _) = pool.take_random(&mut rng);
            assert!(!seen.contains(&name), "level {} repeated", name);
            seen.push(name);
        }
        assert_eq!(pool.remaining(), 0);
    }

    #[test]
    fn test_exhausted_pool_restarts() {
        let mut pool = pool_of(&["only"]);
        let mut rng = Pcg32::seed_from_u64(1);
        let (first, _) = pool.take_random(&mut rng);
        let (second, _) = pool.take_random(&mut rng);
        assert_eq!(first, "only");
        assert_eq!(second, "only");
    }

    #[test]
    fn test_take_named() {
        let mut pool = pool_of(&["a", "b"]);
        assert!(pool.take_named("b").is_some());
        assert!(pool.take_named("b").is_none());
        assert_eq!(pool.remaining(), 1);
    }

    #[test]
    fn test_single_value_row_expands_to_ten() {
        let blocks = build_blocks(&vec![vec![2]]);
        assert_eq!(blocks.len(), GRID_COLS);
        assert!(blocks.iter().all(|b| b.stamina == 2));
        assert_eq!(blocks[0].rect.min.x, GRID_ORIGIN_X);
        assert_eq!(blocks[9].rect.min.x, GRID_ORIGIN_X + BLOCK_WIDTH * 9.0);
    }

    #[test]
    fn test_zero_cells_are_empty() {
        let blocks = build_blocks(&vec![vec![1, 0, 3, 0]]);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].stamina, 1);
        assert_eq!(blocks[1].stamina, 3);
        // The second live block sits in column 2
        assert_eq!(blocks[1].rect.min.x, GRID_ORIGIN_X + BLOCK_WIDTH * 2.0);
    }

    #[test]
    fn test_rows_stack_down() {
        let blocks = build_blocks(&vec![vec![1, 1], vec![1, 1]]);
        assert_eq!(blocks[2].rect.min.y, GRID_ORIGIN_Y + BLOCK_HEIGHT);
    }

    #[test]
    fn test_reward_roll_thresholds() {
        // A draw of 10 against chance 15 spawns; 50 does not.
        assert!(reward_roll(10, REWARD_CHANCE));
        assert!(!reward_roll(50, REWARD_CHANCE));
        assert!(reward_roll(15, REWARD_CHANCE));
        assert!(!reward_roll(16, REWARD_CHANCE));
    }

    #[test]
    fn test_rolled_reward_spawns_at_mid_bottom() {
        // Drive the RNG until a roll succeeds; position must anchor to the point.
        let mut rng = Pcg32::seed_from_u64(3);
        let anchor = Vec2::new(110.0, 60.0);
        let reward = std::iter::repeat_with(|| roll_reward(&mut rng, anchor))
            .take(200)
            .flatten()
            .next()
            .expect("200 rolls at 15% should spawn at least one reward");
        assert_eq!(reward.rect().center().x, anchor.x);
        assert_eq!(reward.rect().top(), anchor.y);
    }
}
