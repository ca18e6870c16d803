//! The CostGrid contains a 2D array of 32-bit floats consumed by a path search. A pathable cell
//! holds the traversal weight chosen by the caller and a blocked cell holds positive infinity:
//!
//! ```text
//!  _______________________________
//! |     |     |     |     |     |
//! |  1  |  1  |  1  |  1  |  1  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  1  | inf | inf |  1  |  1  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  1  | inf | inf |  1  |  1  |
//! |_____|_____|_____|_____|_____|
//! ```
//!
//! Every request produces a fresh [CostGrid] so a caller holding one never observes later
//! changes to the [PathingGrid] it was built from.
//!

use crate::prelude::*;

/// Float cost grid, `f32::INFINITY` marks an impassable cell
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct CostGrid(GridArray<f32>);

impl Grid<f32> for CostGrid {
	fn get(&self) -> &GridArray<f32> {
		&self.0
	}
	fn get_mut(&mut self) -> &mut GridArray<f32> {
		&mut self.0
	}
}

impl CostGrid {
	/// Create a new instance of [CostGrid] where every cell costs `weight`
	pub fn new(width: usize, height: usize, weight: f32) -> Self {
		CostGrid(GridArray::new(width, height, weight))
	}
	/// Create a [CostGrid] from a list of rows, starting at `y = 0`
	pub fn from_rows(rows: Vec<Vec<f32>>) -> TerrainResult<Self> {
		Ok(CostGrid(GridArray::from_rows(rows)?))
	}
	/// Whether a cell has a finite cost
	pub fn is_pathable(&self, cell: GridCell) -> bool {
		self.get_cell_value(cell).is_finite()
	}
	/// Cost of a cell, [None] for impassable cells
	pub fn get_weight(&self, cell: GridCell) -> Option<f32> {
		let value = self.get_cell_value(cell);
		if value.is_finite() {
			Some(value)
		} else {
			None
		}
	}
}

/// Convert a [PathingGrid] into a [CostGrid], pathable cells get `weight` and blocked cells get
/// positive infinity. The input is never modified
pub fn build_cost_grid(grid: &PathingGrid, weight: f32) -> CostGrid {
	CostGrid(
		grid.get()
			.map(|pathable| if pathable { weight } else { f32::INFINITY }),
	)
}
