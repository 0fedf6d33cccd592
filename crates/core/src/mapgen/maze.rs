//! Randomized-Prim corridor carving over an all-wall grid.
//!
//! Cells on odd coordinates act as rooms two steps apart; carving a frontier
//! wall also carves the midpoint between it and the room it links to, so the
//! empty region grows as a tree and never forms a loop.

use rand_chacha::ChaCha8Rng;

use crate::state::Grid;
use crate::types::{CellKind, Pos};

use super::seed::rand_index;

const CARVE_START: Pos = Pos { y: 1, x: 1 };
const STEP: i32 = 2;

pub(super) fn carve_maze(grid: &mut Grid, rng: &mut ChaCha8Rng) {
    grid.set_kind(CARVE_START, CellKind::Empty);

    let mut frontier: Vec<Pos> = Vec::new();
    push_frontier_walls(grid, CARVE_START, &mut frontier);

    while !frontier.is_empty() {
        let candidate = frontier.swap_remove(rand_index(rng, frontier.len()));
        if grid.cell_at(candidate).kind != CellKind::Wall {
            // Queued more than once and already carved through; skipping the
            // stale entry is what keeps the layout loop-free.
            continue;
        }

        let carved_neighbors: Vec<Pos> = step_neighbors(candidate)
            .into_iter()
            .filter(|&p| grid.in_interior(p) && grid.cell_at(p).kind == CellKind::Empty)
            .collect();
        if carved_neighbors.is_empty() {
            continue;
        }

        let link = carved_neighbors[rand_index(rng, carved_neighbors.len())];
        let midpoint = Pos { y: (candidate.y + link.y) / 2, x: (candidate.x + link.x) / 2 };
        grid.set_kind(candidate, CellKind::Empty);
        grid.set_kind(midpoint, CellKind::Empty);

        push_frontier_walls(grid, candidate, &mut frontier);
    }
}

fn step_neighbors(p: Pos) -> [Pos; 4] {
    [
        Pos { y: p.y - STEP, x: p.x },
        Pos { y: p.y, x: p.x + STEP },
        Pos { y: p.y + STEP, x: p.x },
        Pos { y: p.y, x: p.x - STEP },
    ]
}

fn push_frontier_walls(grid: &Grid, from: Pos, frontier: &mut Vec<Pos>) {
    for p in step_neighbors(from) {
        if grid.in_interior(p) && grid.cell_at(p).kind == CellKind::Wall {
            frontier.push(p);
        }
    }
}
