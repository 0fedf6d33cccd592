//! Line-of-sight visibility and discovery memory around the player.
//! This module exists to keep sight rules separate from movement and interaction flow.
//! It does not own what collaborators draw or how routes are chosen.

use super::*;

impl Game {
    pub(super) fn refresh_visibility(&mut self) {
        if !self.config.fov_enabled {
            self.grid.reveal_all();
            return;
        }
        compute_visibility(&mut self.grid, self.player.pos, self.config.fov_radius);
    }
}

/// Mark every cell within `radius` of `origin` that an unobstructed sight
/// line reaches, and remember it as discovered. Walls block sight beyond
/// themselves but are visible where the line reaches them.
pub(super) fn compute_visibility(grid: &mut Grid, origin: Pos, radius: i32) {
    grid.clear_visible();
    grid.set_visible(origin, true);
    grid.reveal(origin);

    let radius_squared = (radius as i64) * (radius as i64);
    for y in (origin.y - radius)..=(origin.y + radius) {
        for x in (origin.x - radius)..=(origin.x + radius) {
            let target = Pos { y, x };
            if !grid.in_bounds(target) || target == origin {
                continue;
            }
            if target.distance_squared(origin) > radius_squared {
                continue;
            }
            if line_of_sight(grid, origin, target) {
                grid.set_visible(target, true);
                grid.reveal(target);
            }
        }
    }
}

/// Integer Bresenham walk from `origin` to `target`; true when no wall
/// strictly between the two endpoints interrupts the line.
fn line_of_sight(grid: &Grid, origin: Pos, target: Pos) -> bool {
    let dx = (target.x - origin.x).abs();
    let dy = (target.y - origin.y).abs();
    let sx = (target.x - origin.x).signum();
    let sy = (target.y - origin.y).signum();

    let mut x = origin.x;
    let mut y = origin.y;
    let mut err = dx - dy;

    loop {
        if x == target.x && y == target.y {
            return true;
        }
        if (x != origin.x || y != origin.y)
            && grid.cell_at(Pos { y, x }).kind == CellKind::Wall
        {
            return false;
        }
        let doubled = 2 * err;
        if doubled > -dy {
            err -= dy;
            x += sx;
        }
        if doubled < dx {
            err += dx;
            y += sy;
        }
    }
}
