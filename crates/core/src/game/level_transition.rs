//! Level-change mechanics and fresh-grid installation.
//! This module exists to isolate descent state mutation from tick flow.
//! It does not own exit detection or interaction outcomes.

use super::*;
use crate::mapgen::LevelGenerator;

/// Generate one level and apply the difficulty preset to its features.
pub(super) fn build_level(seed: u64, config: &GameConfig, level: i32) -> Grid {
    let mut grid = LevelGenerator::new(seed, config.grid_width, config.grid_height)
        .with_counts(config.monster_count, config.treasure_count)
        .generate(level);
    apply_difficulty(&mut grid, config);
    grid
}

fn apply_difficulty(grid: &mut Grid, config: &GameConfig) {
    for cell in &mut grid.cells {
        match cell.kind {
            CellKind::Monster => {
                cell.interaction_level = config.scaled_monster_level(cell.interaction_level);
            }
            CellKind::Treasure => {
                cell.interaction_level = config.scaled_treasure_value(cell.interaction_level);
            }
            _ => {}
        }
    }
}

impl Game {
    /// Swap in the next level's grid. Player stats carry over; position,
    /// queued movement, and visibility are reset against the new entrance.
    pub(super) fn descend(&mut self) {
        let next_level = self.grid.level + 1;
        self.grid = build_level(self.seed, &self.config, next_level);
        self.registry.register(CellKind::Exit, Behavior::Exit { next_level: next_level + 1 });
        self.player.pos = self.grid.entrance;
        self.player.path.clear();
        self.player.move_cooldown = 0;
        self.refresh_visibility();
        self.log.push(LogEvent::Descended { level: next_level });
    }
}
