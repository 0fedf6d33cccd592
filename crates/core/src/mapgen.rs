//! Procedural level generation split into focused submodules.

mod features;
mod maze;
mod seed;

pub use seed::derive_level_seed;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::state::Grid;

pub const DEFAULT_MONSTER_COUNT: usize = 10;
pub const DEFAULT_TREASURE_COUNT: usize = 10;

pub struct LevelGenerator {
    run_seed: u64,
    width: usize,
    height: usize,
    monster_count: usize,
    treasure_count: usize,
}

impl LevelGenerator {
    pub fn new(run_seed: u64, width: usize, height: usize) -> Self {
        Self {
            run_seed,
            width,
            height,
            monster_count: DEFAULT_MONSTER_COUNT,
            treasure_count: DEFAULT_TREASURE_COUNT,
        }
    }

    pub fn with_counts(mut self, monster_count: usize, treasure_count: usize) -> Self {
        self.monster_count = monster_count;
        self.treasure_count = treasure_count;
        self
    }

    /// Carve a maze and place every feature for one dungeon level.
    /// Fully determined by `(run_seed, level)` plus the generator settings.
    pub fn generate(&self, level: i32) -> Grid {
        let mut rng = ChaCha8Rng::seed_from_u64(derive_level_seed(self.run_seed, level));
        let mut grid = Grid::new(self.width, self.height, level);
        maze::carve_maze(&mut grid, &mut rng);
        features::place_features(&mut grid, &mut rng, self.monster_count, self.treasure_count);
        grid
    }
}

pub fn generate_level(run_seed: u64, level: i32, width: usize, height: usize) -> Grid {
    LevelGenerator::new(run_seed, width, height).generate(level)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::game::{find_path, reachable_walkable_cells};
    use crate::types::{CellKind, Pos};

    use super::*;

    #[test]
    fn generate_level_matches_level_generator_output() {
        let from_helper = generate_level(123, 2, 31, 17);
        let from_generator = LevelGenerator::new(123, 31, 17).generate(2);
        assert_eq!(from_helper.canonical_bytes(), from_generator.canonical_bytes());
    }

    #[test]
    fn same_inputs_produce_byte_identical_levels() {
        let a = LevelGenerator::new(123_456, 41, 21).generate(3);
        let b = LevelGenerator::new(123_456, 41, 21).generate(3);
        assert_eq!(a.canonical_bytes(), b.canonical_bytes());
    }

    #[test]
    fn changing_the_level_changes_the_output_for_the_same_seed() {
        let level_1 = LevelGenerator::new(123_456, 41, 21).generate(1);
        let level_2 = LevelGenerator::new(123_456, 41, 21).generate(2);
        assert_ne!(level_1.canonical_bytes(), level_2.canonical_bytes());
    }

    #[test]
    fn every_walkable_cell_is_reachable_from_the_entrance() {
        let grid = generate_level(987_654, 2, 41, 21);
        for y in 0..grid.height {
            for x in 0..grid.width {
                let pos = Pos { y: y as i32, x: x as i32 };
                if grid.cell_at(pos).kind == CellKind::Wall {
                    continue;
                }
                assert!(
                    find_path(&grid, grid.entrance, pos).is_some(),
                    "cell {pos:?} should be reachable from the entrance"
                );
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn generated_levels_keep_walkable_cells_connected(
            seed in any::<u64>(),
            level in 1_i32..=8,
            width in 9_usize..=41,
            height in 9_usize..=31
        ) {
            let grid = generate_level(seed, level, width, height);
            let reachable = reachable_walkable_cells(&grid, grid.entrance);
            let walkable = grid
                .cells
                .iter()
                .filter(|cell| cell.kind != CellKind::Wall)
                .count();
            prop_assert_eq!(
                reachable.len(),
                walkable,
                "seed={} level={} {}x{} should produce one connected walkable region",
                seed, level, width, height
            );
        }
    }
}
