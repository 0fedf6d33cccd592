pub mod config;
pub mod game;
pub mod mapgen;
pub mod state;
pub mod types;

pub use config::{ConfigError, ConfigFileError, Difficulty, GameConfig, load_config, save_config};
pub use game::{
    Behavior, Game, InteractionRegistry, MESSAGE_CAP, MESSAGE_LIFETIME, MOVE_COOLDOWN_TICKS,
    MessageLog, Outcome, TimedMessage, find_path, reachable_walkable_cells,
};
pub use mapgen::{LevelGenerator, derive_level_seed, generate_level};
pub use state::{Cell, Grid, Player};
pub use types::*;
