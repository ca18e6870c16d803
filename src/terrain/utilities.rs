//! Useful structures and tools used by the grids
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Weight given to pathable cells of a [CostGrid] when the caller has no preference
pub const DEFAULT_WEIGHT: f32 = 1.0;
/// Type name of a supply depot in its lowered state
pub const SUPPLY_DEPOT_LOWERED: &str = "SupplyDepotLowered";
/// Prefix shared by creep tumor type names
pub const CREEP_TUMOR_PREFIX: &str = "CreepTumor";
/// Fragments of object names marking zones which never block ground units
pub const NON_CLEARABLE_MARKERS: [&str; 2] = ["unbuildable", "acceleration"];

/// Adjacency rule used when grouping cells into connected regions
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Reflect)]
pub enum Connectivity {
	/// Orthogonal neighbours only
	Four,
	/// Orthogonal and diagonal neighbours
	#[default]
	Eight,
}

impl Connectivity {
	/// Offsets of the neighbours considered by this rule
	pub fn offsets(&self) -> &'static [(i32, i32)] {
		match self {
			Connectivity::Four => &[(0, 1), (1, 0), (0, -1), (-1, 0)],
			Connectivity::Eight => &[
				(0, 1),
				(1, 0),
				(0, -1),
				(-1, 0),
				(1, 1),
				(1, -1),
				(-1, -1),
				(-1, 1),
			],
		}
	}
	/// Based on a cell's position find its neighbours within a grid of `dimensions`
	pub fn get_cell_neighbours(&self, cell: GridCell, dimensions: (usize, usize)) -> Vec<GridCell> {
		let mut neighbours = Vec::new();
		for (dx, dy) in self.offsets() {
			let x = cell.get_x() as i32 + dx;
			let y = cell.get_y() as i32 + dy;
			if x >= 0 && y >= 0 && (x as usize) < dimensions.0 && (y as usize) < dimensions.1 {
				neighbours.push(GridCell::new(x as usize, y as usize));
			}
		}
		neighbours
	}
}

/// Whether an object name marks a zone that is never treated as an obstacle
pub fn is_non_clearable(type_name: &str) -> bool {
	let lower = type_name.to_lowercase();
	NON_CLEARABLE_MARKERS
		.iter()
		.any(|marker| lower.contains(marker))
}
