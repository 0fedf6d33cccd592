//! Movement intents: click-to-move, hover preview, and queued path stepping.
//! This module exists to keep route-following rules next to their interruption rules.
//! It does not own pathfinding itself or interaction stat math.

use std::collections::VecDeque;

use super::*;

impl Game {
    /// Route the player toward `target`. An interactive cell directly ahead
    /// resolves immediately; otherwise the whole route is queued and walked
    /// one step per cooldown window by `update`.
    pub fn move_to(&mut self, target: Pos) {
        let Some(path) = find_path(&self.grid, self.player.pos, target) else {
            return;
        };
        if path.len() < 2 {
            return;
        }
        let next = path[1];
        match self.grid.cell_at(next).kind {
            CellKind::Monster | CellKind::Treasure | CellKind::Exit => {
                self.resolve_contact(next);
            }
            _ => {
                self.player.path = path.into_iter().skip(1).collect();
            }
        }
    }

    /// Route preview for hover targets: the path excluding the player's own
    /// cell, truncated just past the first cell that would interrupt
    /// walking. Empty when no route exists.
    pub fn preview_path(&self, target: Pos) -> Vec<Pos> {
        let Some(path) = find_path(&self.grid, self.player.pos, target) else {
            return Vec::new();
        };
        let mut preview = Vec::new();
        for &pos in path.iter().skip(1) {
            preview.push(pos);
            let kind = self.grid.cell_at(pos).kind;
            if kind == CellKind::Monster || kind == CellKind::Treasure {
                break;
            }
        }
        preview
    }

    /// Resolve the interaction carried by the cell at `pos`, parameterized
    /// by that cell, then apply its consequences to the grid and the run.
    pub(super) fn resolve_contact(&mut self, pos: Pos) {
        let cell = self.grid.cell_at(pos);
        let Some(behavior) = Behavior::for_cell(&cell) else {
            return;
        };
        self.registry.register(cell.kind, behavior);
        let outcome =
            self.registry.handle(cell.kind, &mut self.player, &mut self.messages, self.clock);

        if outcome.remove_entity {
            self.grid.clear_entity(pos);
        }

        match cell.kind {
            CellKind::Monster => self.log.push(LogEvent::MonsterDefeated {
                level: cell.interaction_level,
                damage: -outcome.health_change,
            }),
            CellKind::Treasure => {
                if let Some(kind) = cell.treasure_kind {
                    self.log.push(LogEvent::TreasureCollected {
                        kind,
                        value: outcome.score_change,
                    });
                }
            }
            _ => {}
        }

        if cell.kind == CellKind::Exit {
            self.descend();
        } else if outcome.remove_entity {
            // Step into the freed cell on the next tick.
            self.player.path = VecDeque::from([pos]);
        }
    }

    pub(super) fn step_queued_path(&mut self) {
        if self.player.move_cooldown > 0 {
            self.player.move_cooldown -= 1;
            return;
        }
        let Some(&next) = self.player.path.front() else {
            return;
        };
        let kind = self.grid.cell_at(next).kind;
        if kind == CellKind::Monster || kind == CellKind::Treasure || kind == CellKind::Wall {
            // The route was computed before this cell changed; stop short
            // instead of walking into it blind.
            self.player.path.clear();
            return;
        }
        self.player.path.pop_front();
        self.player.pos = next;
        self.player.move_cooldown = MOVE_COOLDOWN_TICKS;
        self.refresh_visibility();
    }
}
