//! Radius and nearest-point queries over grids.
//!
//! A cell is measured from its integer coordinate, so a disk of radius `2` centred on `(3, 3)`
//! covers every cell whose `(x, y)` satisfies `(x - 3)² + (y - 3)² <= 4`:
//!
//! ```text
//!  ___________________________
//! |___|___|___|_x_|___|___|___|  5
//! |___|_x_|_x_|_x_|_x_|_x_|___|  4
//! |___|_x_|_x_|_C_|_x_|_x_|___|  3
//! |___|_x_|_x_|_x_|_x_|_x_|___|  2
//! |___|___|___|_x_|___|___|___|  1
//!   0   1   2   3   4   5   6
//! ```
//!
//! Disks hanging over the edge of a grid are clipped, a query never fails because of its
//! position.
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Every cell of a grid with `dimensions` lying within `radius` of `center`, boundary
/// included. Ordered by row then column
pub fn disk_cells(center: Vec2, radius: f32, dimensions: (usize, usize)) -> Vec<GridCell> {
	let (width, height) = dimensions;
	let mut cells = Vec::new();
	if radius < 0.0 || width == 0 || height == 0 {
		return cells;
	}
	let radius_squared = radius * radius;
	let min_x = (center.x - radius).floor().max(0.0) as usize;
	let min_y = (center.y - radius).floor().max(0.0) as usize;
	let max_x = (center.x + radius).ceil();
	let max_y = (center.y + radius).ceil();
	if max_x < 0.0 || max_y < 0.0 {
		return cells;
	}
	let max_x = (max_x as usize).min(width - 1);
	let max_y = (max_y as usize).min(height - 1);
	for y in min_y..=max_y {
		for x in min_x..=max_x {
			let dx = x as f32 - center.x;
			let dy = y as f32 - center.y;
			if dx * dx + dy * dy <= radius_squared {
				cells.push(GridCell::new(x, y));
			}
		}
	}
	cells
}

/// Every cell within `radius` of `center` which attains the lowest cost of the disk. Ties are
/// all returned, an empty list means the disk has no cell within the grid
pub fn lowest_cost_in_disk(center: Vec2, radius: f32, cost_grid: &CostGrid) -> Vec<GridCell> {
	let cells = disk_cells(center, radius, cost_grid.get_dimensions());
	let mut lowest = f32::INFINITY;
	let mut best = Vec::new();
	for cell in cells.into_iter() {
		let cost = cost_grid.get_cell_value(cell);
		if cost < lowest {
			lowest = cost;
			best.clear();
			best.push(cell);
		} else if cost == lowest {
			best.push(cell);
		}
	}
	best
}

/// The element of `points` nearest to `target` by squared euclidean distance. Ties go to the
/// earliest point
pub fn closest_to_target<P: Copy + Into<Vec2>>(
	points: &[P],
	target: impl Into<Vec2>,
) -> TerrainResult<P> {
	let target = target.into();
	let mut closest = None;
	let mut closest_distance = f32::INFINITY;
	for point in points.iter() {
		let distance = (*point).into().distance_squared(target);
		if closest.is_none() || distance < closest_distance {
			closest = Some(*point);
			closest_distance = distance;
		}
	}
	closest.ok_or(TerrainError::EmptyCandidates)
}
