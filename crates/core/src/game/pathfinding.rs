//! Breadth-first shortest paths over a level grid.
//! This module exists so route queries are reusable by movement and preview code.
//! It does not own which cells interrupt movement or what happens on arrival.

use std::collections::VecDeque;

use crate::state::Grid;
use crate::types::Pos;

/// Shortest 4-connected route over non-wall cells, including both endpoints.
///
/// Ties break in first-discovered order with neighbors visited
/// up, right, down, left. Returns `None` when no route exists or when either
/// endpoint is out of bounds or a wall; endpoints are never clamped.
pub fn find_path(grid: &Grid, start: Pos, goal: Pos) -> Option<Vec<Pos>> {
    if !grid.is_walkable(start) || !grid.is_walkable(goal) {
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }

    let mut visited = vec![false; grid.width * grid.height];
    let mut parent = vec![usize::MAX; grid.width * grid.height];
    let mut queue = VecDeque::new();

    visited[grid.index(start)] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return Some(walk_back(grid, &parent, start, goal));
        }
        for next in neighbors(current) {
            if !grid.is_walkable(next) {
                continue;
            }
            let idx = grid.index(next);
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            parent[idx] = grid.index(current);
            queue.push_back(next);
        }
    }

    None
}

/// Every non-wall cell reachable from `start`, including `start` itself.
pub fn reachable_walkable_cells(grid: &Grid, start: Pos) -> Vec<Pos> {
    let mut reachable = Vec::new();
    if !grid.is_walkable(start) {
        return reachable;
    }

    let mut visited = vec![false; grid.width * grid.height];
    let mut queue = VecDeque::new();
    visited[grid.index(start)] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        reachable.push(current);
        for next in neighbors(current) {
            if grid.is_walkable(next) && !visited[grid.index(next)] {
                visited[grid.index(next)] = true;
                queue.push_back(next);
            }
        }
    }

    reachable
}

fn walk_back(grid: &Grid, parent: &[usize], start: Pos, goal: Pos) -> Vec<Pos> {
    let mut path = vec![goal];
    let mut idx = grid.index(goal);
    let start_idx = grid.index(start);
    while idx != start_idx {
        idx = parent[idx];
        path.push(Pos { y: (idx / grid.width) as i32, x: (idx % grid.width) as i32 });
    }
    path.reverse();
    path
}

fn neighbors(p: Pos) -> [Pos; 4] {
    [
        Pos { y: p.y - 1, x: p.x },
        Pos { y: p.y, x: p.x + 1 },
        Pos { y: p.y + 1, x: p.x },
        Pos { y: p.y, x: p.x - 1 },
    ]
}
