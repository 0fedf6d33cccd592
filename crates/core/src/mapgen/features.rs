//! Entrance, exit, monster, and treasure placement onto carved floors.

use rand_chacha::ChaCha8Rng;

use crate::state::{Cell, Grid};
use crate::types::{CellKind, Pos, TreasureKind};

use super::seed::{rand_index, rand_range};

const TREASURE_KINDS: [TreasureKind; 4] =
    [TreasureKind::Gold, TreasureKind::Gems, TreasureKind::Artifact, TreasureKind::Potion];

pub(super) fn place_features(
    grid: &mut Grid,
    rng: &mut ChaCha8Rng,
    monster_count: usize,
    treasure_count: usize,
) {
    let Some(entrance) = sample_empty(grid, rng) else {
        return;
    };
    grid.set_kind(entrance, CellKind::Entrance);
    grid.entrance = entrance;

    if let Some(exit) = choose_exit(grid, rng, entrance) {
        grid.set_cell(
            exit,
            Cell {
                kind: CellKind::Exit,
                interaction_level: grid.level + 1,
                treasure_kind: None,
            },
        );
        grid.exit = exit;
    }

    for _ in 0..monster_count {
        let Some(pos) = sample_empty(grid, rng) else {
            break;
        };
        let level = (grid.level + rand_range(rng, -1, 1)).max(1);
        grid.set_cell(
            pos,
            Cell { kind: CellKind::Monster, interaction_level: level, treasure_kind: None },
        );
    }

    for _ in 0..treasure_count {
        let Some(pos) = sample_empty(grid, rng) else {
            break;
        };
        let value = (grid.level * 10 + rand_range(rng, -10, 9)).max(10);
        let kind = TREASURE_KINDS[rand_index(rng, TREASURE_KINDS.len())];
        grid.set_cell(
            pos,
            Cell { kind: CellKind::Treasure, interaction_level: value, treasure_kind: Some(kind) },
        );
    }
}

/// Pick the exit: the dead end farthest from the entrance when one exists,
/// otherwise rejection-sample for a cell past the distance threshold.
fn choose_exit(grid: &Grid, rng: &mut ChaCha8Rng, entrance: Pos) -> Option<Pos> {
    if let Some(best) = farthest_dead_end(grid, entrance) {
        return Some(best);
    }

    // No dead ends, which can happen once loop-adding carve variants are in
    // play. Accept the first sample far enough from the entrance.
    let reach = ((grid.width + grid.height) / 3) as i64;
    let threshold = reach * reach;
    for _ in 0..grid.width * grid.height {
        let pos = random_interior(grid, rng);
        if grid.cell_at(pos).kind == CellKind::Empty
            && pos.distance_squared(entrance) >= threshold
        {
            return Some(pos);
        }
    }
    farthest_empty_from(grid, entrance)
}

pub(super) fn dead_ends(grid: &Grid) -> Vec<Pos> {
    let mut found = Vec::new();
    for y in 1..(grid.height - 1) {
        for x in 1..(grid.width - 1) {
            let pos = Pos { y: y as i32, x: x as i32 };
            if grid.cell_at(pos).kind != CellKind::Empty {
                continue;
            }
            let empty_neighbors = [
                Pos { y: pos.y - 1, x: pos.x },
                Pos { y: pos.y, x: pos.x + 1 },
                Pos { y: pos.y + 1, x: pos.x },
                Pos { y: pos.y, x: pos.x - 1 },
            ]
            .into_iter()
            .filter(|&n| grid.cell_at(n).kind == CellKind::Empty)
            .count();
            if empty_neighbors == 1 {
                found.push(pos);
            }
        }
    }
    found
}

fn farthest_dead_end(grid: &Grid, entrance: Pos) -> Option<Pos> {
    let mut best: Option<(Pos, i64)> = None;
    for pos in dead_ends(grid) {
        let distance = pos.distance_squared(entrance);
        let better = match best {
            None => true,
            Some((best_pos, best_distance)) => {
                distance > best_distance
                    || (distance == best_distance && (pos.y, pos.x) > (best_pos.y, best_pos.x))
            }
        };
        if better {
            best = Some((pos, distance));
        }
    }
    best.map(|(pos, _)| pos)
}

fn farthest_empty_from(grid: &Grid, origin: Pos) -> Option<Pos> {
    let mut best: Option<(Pos, i64)> = None;
    for y in 1..(grid.height - 1) {
        for x in 1..(grid.width - 1) {
            let pos = Pos { y: y as i32, x: x as i32 };
            if grid.cell_at(pos).kind != CellKind::Empty {
                continue;
            }
            let distance = pos.distance_squared(origin);
            let better = match best {
                None => true,
                Some((best_pos, best_distance)) => {
                    distance > best_distance
                        || (distance == best_distance && (pos.y, pos.x) > (best_pos.y, best_pos.x))
                }
            };
            if better {
                best = Some((pos, distance));
            }
        }
    }
    best.map(|(pos, _)| pos)
}

/// Bounded rejection sampling over interior coordinates, falling back to a
/// deterministic scan so feature counts stay exact while floor space remains.
fn sample_empty(grid: &Grid, rng: &mut ChaCha8Rng) -> Option<Pos> {
    for _ in 0..grid.width * grid.height {
        let pos = random_interior(grid, rng);
        if grid.cell_at(pos).kind == CellKind::Empty {
            return Some(pos);
        }
    }
    for y in 1..(grid.height - 1) {
        for x in 1..(grid.width - 1) {
            let pos = Pos { y: y as i32, x: x as i32 };
            if grid.cell_at(pos).kind == CellKind::Empty {
                return Some(pos);
            }
        }
    }
    None
}

fn random_interior(grid: &Grid, rng: &mut ChaCha8Rng) -> Pos {
    Pos {
        y: rand_range(rng, 1, (grid.height - 2) as i32),
        x: rand_range(rng, 1, (grid.width - 2) as i32),
    }
}
