//! Structures change state every tick (lifting off, lowering, finishing construction) so they
//! are never written into the persistent grids. Instead a copy of a grid variant is taken and
//! every standing structure is stamped into it on each request.
//!
//! Townhall sized structures (5x5) have their corners opened after stamping so units can
//! still slip diagonally past them:
//!
//! ```text
//!  _____________________
//! |___|_x_|_x_|_x_|___|
//! |_x_|_x_|_x_|_x_|_x_|
//! |_x_|_x_|_C_|_x_|_x_|
//! |_x_|_x_|_x_|_x_|_x_|
//! |___|_x_|_x_|_x_|___|
//! ```
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Whether `structure` leaves the ground beneath it open: flying structures, lowered supply
/// depots which are inactive and creep tumors still burrowing
pub fn keeps_ground_open(structure: &Structure) -> bool {
	if structure.is_flying() {
		return true;
	}
	let type_name = structure.get_type_name();
	if type_name == SUPPLY_DEPOT_LOWERED && !structure.is_active() {
		return true;
	}
	type_name.starts_with(CREEP_TUMOR_PREFIX) && !structure.is_ready()
}

/// Cells covered by the footprint of a structure
pub fn structure_cells(structure: &Structure) -> Vec<(i32, i32)> {
	structure_footprint(structure.get_base_size()).cells(structure.get_position())
}

/// Corners of the bounding square of a townhall sized structure, [None] for any other size
pub fn townhall_corners(structure: &Structure) -> Option<[(i32, i32); 4]> {
	let shape = structure_footprint(structure.get_base_size());
	if shape != ShapeKey::Rect5x5 {
		return None;
	}
	let (min_x, min_y) = shape
		.cells(structure.get_position())
		.iter()
		.fold((i32::MAX, i32::MAX), |(mx, my), (x, y)| {
			(mx.min(*x), my.min(*y))
		});
	let (max_x, max_y) = (min_x + 4, min_y + 4);
	Some([
		(min_x, min_y),
		(max_x, min_y),
		(min_x, max_y),
		(max_x, max_y),
	])
}

/// Return a copy of `grid` with every standing structure of both players stamped as blocked.
/// Once every footprint is stamped the corners of townhall sized structures are opened again,
/// whatever blocked them. The input grid is never modified
pub fn apply_structures(
	grid: &PathingGrid,
	own_structures: &[Structure],
	enemy_structures: &[Structure],
) -> PathingGrid {
	let mut overlay = grid.clone();
	let mut stamped = 0;
	let mut corners = Vec::new();
	for structure in own_structures.iter().chain(enemy_structures.iter()) {
		if keeps_ground_open(structure) {
			continue;
		}
		stamp_cells(&mut overlay, &structure_cells(structure), false);
		if let Some(townhall) = townhall_corners(structure) {
			corners.extend(townhall);
		}
		stamped += 1;
	}
	stamp_cells(&mut overlay, &corners, true);
	debug!(
		"Overlay stamped {} of {} structures",
		stamped,
		own_structures.len() + enemy_structures.len()
	);
	overlay
}
