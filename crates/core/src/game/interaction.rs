//! Category-keyed interaction behaviors and outcome resolution.
//! This module exists to keep stat-change rules separate from movement and level flow.
//! It does not own grid mutation or the decision to change levels.

use std::collections::BTreeMap;

use crate::state::{Cell, Player};
use crate::types::{CellKind, TreasureKind};

use super::messages::MessageLog;

/// What one interaction did: the player-facing message, the stat deltas, and
/// whether the source cell's entity is gone afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub message: String,
    pub health_change: i32,
    pub score_change: i32,
    pub remove_entity: bool,
    pub entity_removed: Option<CellKind>,
}

impl Outcome {
    fn no_op() -> Self {
        Self {
            message: "Nothing happens.".to_string(),
            health_change: 0,
            score_change: 0,
            remove_entity: false,
            entity_removed: None,
        }
    }
}

/// One behavior per special cell category, parameterized by that category's
/// current defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behavior {
    Monster { level: i32 },
    Treasure { value: i32, kind: TreasureKind },
    Exit { next_level: i32 },
}

impl Behavior {
    /// Behavior parameterized by a concrete cell, or `None` for cells that
    /// carry no interaction. Exit cells record the level they descend to in
    /// `interaction_level`.
    pub fn for_cell(cell: &Cell) -> Option<Self> {
        match cell.kind {
            CellKind::Monster => Some(Self::Monster { level: cell.interaction_level }),
            CellKind::Treasure => Some(Self::Treasure {
                value: cell.interaction_level,
                kind: cell.treasure_kind.unwrap_or(TreasureKind::Gold),
            }),
            CellKind::Exit => Some(Self::Exit { next_level: cell.interaction_level }),
            _ => None,
        }
    }

    pub fn interact(&self, player: &Player) -> Outcome {
        match *self {
            Self::Monster { level } => {
                // Defense is a percent damage reduction, integer floor.
                let damage = (5 + level * 2) * (100 - player.defense) / 100;
                let score = 10 + level * 5;
                Outcome {
                    message: format!("Defeated a level {level} monster! Took {damage} damage."),
                    health_change: -damage,
                    score_change: score,
                    remove_entity: true,
                    entity_removed: Some(CellKind::Monster),
                }
            }
            Self::Treasure { value, kind } => {
                // Luck is a percent value bonus; only potions restore health.
                let score = value * (100 + player.luck) / 100;
                let health = if kind == TreasureKind::Potion { 10 } else { 0 };
                Outcome {
                    message: format!("Found {kind} worth {score} points!"),
                    health_change: health,
                    score_change: score,
                    remove_entity: true,
                    entity_removed: Some(CellKind::Treasure),
                }
            }
            Self::Exit { next_level } => Outcome {
                message: format!("Descending to dungeon level {next_level}!"),
                health_change: 0,
                score_change: 20,
                remove_entity: false,
                entity_removed: None,
            },
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct InteractionRegistry {
    behaviors: BTreeMap<CellKind, Behavior>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install or overwrite the behavior for a category.
    pub fn register(&mut self, kind: CellKind, behavior: Behavior) {
        self.behaviors.insert(kind, behavior);
    }

    /// Resolve an interaction for `kind`: apply the stat deltas to the
    /// player (health clamped to `max_health`, never clamped below), append
    /// the message, and hand the outcome back so the caller can act on
    /// `remove_entity`. Unregistered categories resolve to a harmless no-op.
    pub fn handle(
        &self,
        kind: CellKind,
        player: &mut Player,
        messages: &mut MessageLog,
        now: f64,
    ) -> Outcome {
        let outcome = match self.behaviors.get(&kind) {
            Some(behavior) => behavior.interact(player),
            None => Outcome::no_op(),
        };

        player.health += outcome.health_change;
        player.score += outcome.score_change;
        if player.health > player.max_health {
            player.health = player.max_health;
        }

        messages.push(&outcome.message, now);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use crate::types::Pos;

    use super::*;

    fn player() -> Player {
        Player::new(Pos { y: 1, x: 1 })
    }

    #[test]
    fn monster_damage_and_score_follow_the_formulas() {
        let mut target = player();
        target.defense = 10;

        let outcome = Behavior::Monster { level: 3 }.interact(&target);
        assert_eq!(outcome.health_change, -9, "(5 + 6) * 90 / 100 floors to 9");
        assert_eq!(outcome.score_change, 25);
        assert!(outcome.remove_entity);
        assert_eq!(outcome.entity_removed, Some(CellKind::Monster));
    }

    #[test]
    fn treasure_score_scales_with_luck_and_potions_heal() {
        let mut target = player();
        target.luck = 5;

        let plain = Behavior::Treasure { value: 20, kind: TreasureKind::Gems }.interact(&target);
        assert_eq!(plain.score_change, 21, "20 * 105 / 100 floors to 21");
        assert_eq!(plain.health_change, 0);

        let potion =
            Behavior::Treasure { value: 20, kind: TreasureKind::Potion }.interact(&target);
        assert_eq!(potion.health_change, 10);
    }

    #[test]
    fn exit_keeps_its_cell_and_grants_the_flat_bonus() {
        let outcome = Behavior::Exit { next_level: 4 }.interact(&player());
        assert_eq!(outcome.score_change, 20);
        assert_eq!(outcome.health_change, 0);
        assert!(!outcome.remove_entity);
        assert_eq!(outcome.message, "Descending to dungeon level 4!");
    }

    #[test]
    fn handle_applies_deltas_and_clamps_health_to_max_only() {
        let mut registry = InteractionRegistry::new();
        let mut messages = MessageLog::new();
        let mut target = player();
        target.health = 95;

        registry.register(
            CellKind::Treasure,
            Behavior::Treasure { value: 20, kind: TreasureKind::Potion },
        );
        registry.handle(CellKind::Treasure, &mut target, &mut messages, 0.0);
        assert_eq!(target.health, 100, "healing never exceeds max health");
        assert_eq!(target.score, 21);

        registry.register(CellKind::Monster, Behavior::Monster { level: 60 });
        let outcome = registry.handle(CellKind::Monster, &mut target, &mut messages, 0.0);
        assert!(outcome.health_change < -100);
        assert!(target.health < 0, "health may go negative; callers read is_alive");
        assert!(!target.is_alive());
    }

    #[test]
    fn unregistered_category_is_an_idempotent_no_op() {
        let registry = InteractionRegistry::new();
        let mut messages = MessageLog::new();
        let mut target = player();

        let first = registry.handle(CellKind::Entrance, &mut target, &mut messages, 0.0);
        let second = registry.handle(CellKind::Entrance, &mut target, &mut messages, 0.1);

        assert_eq!(first, second);
        assert_eq!(first.message, "Nothing happens.");
        assert_eq!(target.health, 100);
        assert_eq!(target.score, 0);
        assert_eq!(messages.iter().count(), 2);
    }

    #[test]
    fn register_overwrites_the_previous_behavior() {
        let mut registry = InteractionRegistry::new();
        registry.register(CellKind::Monster, Behavior::Monster { level: 1 });
        registry.register(CellKind::Monster, Behavior::Monster { level: 7 });

        let outcome = registry.handle(
            CellKind::Monster,
            &mut player(),
            &mut MessageLog::new(),
            0.0,
        );
        assert_eq!(outcome.score_change, 10 + 7 * 5);
    }

    #[test]
    fn for_cell_reads_the_cell_parameters() {
        let cell = Cell {
            kind: CellKind::Treasure,
            interaction_level: 42,
            treasure_kind: Some(TreasureKind::Artifact),
        };
        assert_eq!(
            Behavior::for_cell(&cell),
            Some(Behavior::Treasure { value: 42, kind: TreasureKind::Artifact })
        );
        assert_eq!(Behavior::for_cell(&Cell::of_kind(CellKind::Empty)), None);

        let exit =
            Cell { kind: CellKind::Exit, interaction_level: 3, treasure_kind: None };
        assert_eq!(Behavior::for_cell(&exit), Some(Behavior::Exit { next_level: 3 }));
    }
}
