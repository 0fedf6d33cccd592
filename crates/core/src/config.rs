//! Run configuration: dungeon dimensions, feature counts, sight rules, and
//! difficulty presets, with a JSON file round-trip for launcher tooling.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Smallest grid a carve pass can do anything useful with.
pub const MIN_GRID_SIDE: usize = 5;

const MIN_MONSTER_LEVEL: i32 = 1;
const MIN_TREASURE_VALUE: i32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Nightmare,
}

impl Difficulty {
    /// Percent multiplier applied to monster levels after generation.
    pub fn monster_percent(self) -> i32 {
        match self {
            Self::Easy => 80,
            Self::Normal => 100,
            Self::Hard => 120,
            Self::Nightmare => 150,
        }
    }

    /// Percent multiplier applied to treasure values after generation.
    pub fn treasure_percent(self) -> i32 {
        match self {
            Self::Easy => 120,
            Self::Normal => 100,
            Self::Hard => 80,
            Self::Nightmare => 70,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    pub monster_count: usize,
    pub treasure_count: usize,
    pub fov_enabled: bool,
    pub fov_radius: i32,
    pub difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 20,
            monster_count: 10,
            treasure_count: 10,
            fov_enabled: true,
            fov_radius: 6,
            difficulty: Difficulty::Normal,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width < MIN_GRID_SIDE {
            return Err(ConfigError::GridTooSmall { axis: "width", value: self.grid_width });
        }
        if self.grid_height < MIN_GRID_SIDE {
            return Err(ConfigError::GridTooSmall { axis: "height", value: self.grid_height });
        }
        if self.fov_radius < 1 {
            return Err(ConfigError::InvalidFovRadius { value: self.fov_radius });
        }
        Ok(())
    }

    /// Scale a generated monster level by the preset, never below the floor
    /// a level-1 dungeon guarantees.
    pub fn scaled_monster_level(&self, level: i32) -> i32 {
        (level * self.difficulty.monster_percent() / 100).max(MIN_MONSTER_LEVEL)
    }

    /// Scale a generated treasure value by the preset, never below the
    /// minimum payout.
    pub fn scaled_treasure_value(&self, value: i32) -> i32 {
        (value * self.difficulty.treasure_percent() / 100).max(MIN_TREASURE_VALUE)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    GridTooSmall { axis: &'static str, value: usize },
    InvalidFovRadius { value: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { axis, value } => {
                write!(f, "grid {axis} {value} is below the minimum of {MIN_GRID_SIDE}")
            }
            Self::InvalidFovRadius { value } => {
                write!(f, "field-of-view radius {value} must be at least 1")
            }
        }
    }
}

impl Error for ConfigError {}

/// Describes why a config file could not be loaded.
#[derive(Debug)]
pub enum ConfigFileError {
    Io(io::Error),
    Parse { message: String },
    Invalid(ConfigError),
}

impl fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "config I/O error: {e}"),
            Self::Parse { message } => write!(f, "invalid config JSON: {message}"),
            Self::Invalid(e) => write!(f, "config rejected: {e}"),
        }
    }
}

impl Error for ConfigFileError {}

/// Load and validate a JSON config file.
pub fn load_config(path: &Path) -> Result<GameConfig, ConfigFileError> {
    let content = fs::read_to_string(path).map_err(ConfigFileError::Io)?;
    let config: GameConfig = serde_json::from_str(&content)
        .map_err(|e| ConfigFileError::Parse { message: e.to_string() })?;
    config.validate().map_err(ConfigFileError::Invalid)?;
    Ok(config)
}

/// Write a config as pretty JSON, creating parent directories as needed.
pub fn save_config(path: &Path, config: &GameConfig) -> Result<(), ConfigFileError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(ConfigFileError::Io)?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| ConfigFileError::Parse { message: e.to_string() })?;
    fs::write(path, json).map_err(ConfigFileError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn undersized_grid_is_rejected() {
        let config = GameConfig { grid_width: 4, ..GameConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridTooSmall { axis: "width", value: 4 })
        ));
    }

    #[test]
    fn difficulty_scaling_applies_floors() {
        let nightmare = GameConfig { difficulty: Difficulty::Nightmare, ..GameConfig::default() };
        assert_eq!(nightmare.scaled_monster_level(4), 6);
        assert_eq!(nightmare.scaled_treasure_value(30), 21);
        assert_eq!(nightmare.scaled_treasure_value(6), MIN_TREASURE_VALUE);

        let easy = GameConfig { difficulty: Difficulty::Easy, ..GameConfig::default() };
        assert_eq!(easy.scaled_monster_level(1), MIN_MONSTER_LEVEL);
        assert_eq!(easy.scaled_treasure_value(10), 12);
    }

    #[test]
    fn config_round_trips_through_a_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("delve.json");
        let config = GameConfig {
            grid_width: 24,
            grid_height: 16,
            difficulty: Difficulty::Hard,
            ..GameConfig::default()
        };

        save_config(&path, &config).expect("save config");
        let loaded = load_config(&path).expect("load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn invalid_file_contents_report_a_parse_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").expect("write file");
        assert!(matches!(load_config(&path), Err(ConfigFileError::Parse { .. })));
    }

    #[test]
    fn valid_json_with_bad_values_reports_validation_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("small.json");
        let config = GameConfig { grid_width: 3, ..GameConfig::default() };
        let json = serde_json::to_string(&config).expect("serialize");
        fs::write(&path, json).expect("write file");
        assert!(matches!(load_config(&path), Err(ConfigFileError::Invalid(_))));
    }
}
