//! New-run construction and default behavior registration.
//! This module exists to isolate initialization from runtime flow.
//! It does not own descent mechanics or tick advancement.

use super::*;
use crate::config::ConfigError;
use crate::types::TreasureKind;

impl Game {
    pub fn new(seed: u64, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = level_transition::build_level(seed, &config, 1);
        let player = Player::new(grid.entrance);

        let mut registry = InteractionRegistry::new();
        registry.register(CellKind::Monster, Behavior::Monster { level: 1 });
        registry.register(
            CellKind::Treasure,
            Behavior::Treasure { value: 10, kind: TreasureKind::Gold },
        );
        registry.register(CellKind::Exit, Behavior::Exit { next_level: 2 });

        let mut game = Self {
            seed,
            tick: 0,
            clock: 0.0,
            config,
            grid,
            player,
            registry,
            messages: MessageLog::new(),
            log: Vec::new(),
        };
        game.refresh_visibility();
        Ok(game)
    }
}
