//! Level orchestration: one `Game` owns the grid, the player, and the
//! interaction state for the current dungeon level, and wires the focused
//! submodules together.

mod bootstrap;
mod hash;
mod interaction;
mod level_transition;
mod messages;
mod movement;
mod pathfinding;
mod visibility;

pub use interaction::{Behavior, InteractionRegistry, Outcome};
pub use messages::{MESSAGE_CAP, MESSAGE_LIFETIME, MessageLog, TimedMessage};
pub use pathfinding::{find_path, reachable_walkable_cells};

use crate::config::GameConfig;
use crate::state::{Grid, Player};
use crate::types::*;

/// Ticks between two queued path steps.
pub const MOVE_COOLDOWN_TICKS: u32 = 10;

pub struct Game {
    seed: u64,
    tick: u64,
    clock: f64,
    config: GameConfig,
    grid: Grid,
    player: Player,
    registry: InteractionRegistry,
    messages: MessageLog,
    log: Vec<LogEvent>,
}

impl Game {
    /// One orchestrator tick: advance queued movement, resolve standing on
    /// the exit, and expire messages. `now` is the caller's clock in
    /// seconds; message expiry is measured against it.
    pub fn update(&mut self, now: f64) {
        self.clock = now;
        self.step_queued_path();
        if self.grid.cell_at(self.player.pos).kind == CellKind::Exit {
            self.resolve_contact(self.player.pos);
        }
        self.messages.update(now);
        self.tick += 1;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Dungeon depth of the grid currently installed.
    pub fn level(&self) -> i32 {
        self.grid.level
    }

    pub fn interactions_mut(&mut self) -> &mut InteractionRegistry {
        &mut self.registry
    }
}
