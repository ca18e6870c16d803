//! The PathingGrid is a 2D array of booleans where `true` marks a cell a ground unit can
//! occupy and `false` marks a blocked cell. An example around a 2x2 obstacle:
//!
//! ```text
//!  _______________________________
//! |     |     |     |     |     |
//! |  1  |  1  |  1  |  1  |  1  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  1  |  0  |  0  |  1  |  1  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  1  |  0  |  0  |  1  |  1  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  1  |  1  |  1  |  1  |  1  |
//! |_____|_____|_____|_____|_____|
//! ```
//!

use crate::prelude::*;

/// Boolean occupancy grid, `true` is pathable
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct PathingGrid(GridArray<bool>);

impl Grid<bool> for PathingGrid {
	fn get(&self) -> &GridArray<bool> {
		&self.0
	}
	fn get_mut(&mut self) -> &mut GridArray<bool> {
		&mut self.0
	}
}

impl PathingGrid {
	/// Create a new instance of [PathingGrid] where every cell is `pathable`
	pub fn new(width: usize, height: usize, pathable: bool) -> Self {
		PathingGrid(GridArray::new(width, height, pathable))
	}
	/// Create a [PathingGrid] from a list of rows, starting at `y = 0`
	pub fn from_rows(rows: Vec<Vec<bool>>) -> TerrainResult<Self> {
		Ok(PathingGrid(GridArray::from_rows(rows)?))
	}
	/// Whether a cell can be crossed by a ground unit
	pub fn is_pathable(&self, cell: GridCell) -> bool {
		self.get_cell_value(cell)
	}
	/// Number of pathable cells
	pub fn count_pathable(&self) -> usize {
		self.0.get_values().iter().filter(|v| **v).count()
	}
	/// Cells where this grid and `other` disagree. Grids of differing dimensions are compared
	/// over their overlapping region
	pub fn diff_cells(&self, other: &PathingGrid) -> Vec<GridCell> {
		let mut cells = Vec::new();
		for (cell, value) in self.0.iter_cells() {
			if let Some(i) = other.0.index_of(cell) {
				if other.0.get_values()[i] != value {
					cells.push(cell);
				}
			}
		}
		cells
	}
	/// Combine two grids with logical OR, a cell is pathable when either grid says so
	pub fn union(&self, other: &PathingGrid) -> TerrainResult<PathingGrid> {
		if self.get_dimensions() != other.get_dimensions() {
			return Err(TerrainError::LayerDimensionMismatch {
				layer: "union",
				expected: self.get_dimensions(),
				found: other.get_dimensions(),
			});
		}
		let (width, height) = self.get_dimensions();
		let values = self
			.0
			.get_values()
			.iter()
			.zip(other.0.get_values())
			.map(|(a, b)| *a || *b)
			.collect();
		Ok(PathingGrid(GridArray::from_values(width, height, values)?))
	}
	/// Convert into a [CostGrid] where pathable cells cost `weight` and blocked cells are
	/// infinitely expensive
	pub fn to_cost_grid(&self, weight: f32) -> CostGrid {
		build_cost_grid(self, weight)
	}
	/// From a CSV file of `0`/`1` values, each line is a row starting at `y = 0`
	#[cfg(feature = "csv")]
	pub fn from_csv(path: &str) -> TerrainResult<Self> {
		let mut rdr = csv::ReaderBuilder::new()
			.has_headers(false)
			.from_path(path)?;
		let mut rows = Vec::new();
		for record in rdr.records() {
			let mut row = Vec::new();
			for value in record?.iter() {
				match value.trim() {
					"0" | "false" => row.push(false),
					"1" | "true" => row.push(true),
					other => return Err(TerrainError::Parse(other.to_string())),
				}
			}
			rows.push(row);
		}
		PathingGrid::from_rows(rows)
	}
}
