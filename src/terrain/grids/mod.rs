//! The kinds of grids making up the terrain model
//!

pub mod cost_grid;
pub mod height_grid;
pub mod pathing_grid;

use crate::prelude::*;
use bevy::prelude::*;

/// ID of a cell within a grid in `(x, y)` format
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash, Reflect)]
pub struct GridCell((usize, usize));

impl GridCell {
	/// Create a new instance of [GridCell]
	pub fn new(x: usize, y: usize) -> Self {
		GridCell((x, y))
	}
	/// Get the `(x, y)` tuple
	pub fn get_xy(&self) -> (usize, usize) {
		self.0
	}
	/// Get the column
	pub fn get_x(&self) -> usize {
		self.0 .0
	}
	/// Get the row
	pub fn get_y(&self) -> usize {
		self.0 .1
	}
	/// Create a [GridCell] from signed coordinates, [None] if either is negative
	pub fn from_signed(x: i32, y: i32) -> Option<Self> {
		if x < 0 || y < 0 {
			None
		} else {
			Some(GridCell::new(x as usize, y as usize))
		}
	}
	/// The cell a world `position` falls in. Each cell covers the unit square
	/// `[x, x + 1) x [y, y + 1)`
	pub fn from_position(position: Vec2) -> Option<Self> {
		GridCell::from_signed(position.x.floor() as i32, position.y.floor() as i32)
	}
	/// Squared euclidean distance between two cells
	pub fn distance_squared(&self, other: &GridCell) -> usize {
		let dx = self.get_x().abs_diff(other.get_x());
		let dy = self.get_y().abs_diff(other.get_y());
		dx * dx + dy * dy
	}
}

impl From<GridCell> for Vec2 {
	fn from(cell: GridCell) -> Self {
		Vec2::new(cell.get_x() as f32, cell.get_y() as f32)
	}
}

/// Row-major storage backing every grid, a cell `(x, y)` lives at `y * width + x`
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct GridArray<T> {
	/// Number of columns
	width: usize,
	/// Number of rows
	height: usize,
	/// Cell values
	values: Vec<T>,
}

impl<T: Copy> GridArray<T> {
	/// Create a new instance of [GridArray] with every cell set to `value`
	pub fn new(width: usize, height: usize, value: T) -> Self {
		GridArray {
			width,
			height,
			values: vec![value; width * height],
		}
	}
	/// Create a [GridArray] from row-major `values`
	pub fn from_values(width: usize, height: usize, values: Vec<T>) -> TerrainResult<Self> {
		if width == 0 || height == 0 {
			return Err(TerrainError::ZeroSizedGrid((width, height)));
		}
		if values.len() != width * height {
			return Err(TerrainError::ValueCountMismatch {
				dimensions: (width, height),
				expected: width * height,
				found: values.len(),
			});
		}
		Ok(GridArray {
			width,
			height,
			values,
		})
	}
	/// Create a [GridArray] from a list of rows, starting at `y = 0`
	pub fn from_rows(rows: Vec<Vec<T>>) -> TerrainResult<Self> {
		let height = rows.len();
		let width = rows.first().map(|r| r.len()).unwrap_or(0);
		let mut values = Vec::with_capacity(width * height);
		for (row, columns) in rows.into_iter().enumerate() {
			if columns.len() != width {
				return Err(TerrainError::RaggedRow {
					row,
					expected: width,
					found: columns.len(),
				});
			}
			values.extend(columns);
		}
		GridArray::from_values(width, height, values)
	}
	/// `(width, height)` of the grid
	pub fn get_dimensions(&self) -> (usize, usize) {
		(self.width, self.height)
	}
	/// Index of a cell into the value list, [None] when outside of the grid
	pub fn index_of(&self, cell: GridCell) -> Option<usize> {
		if cell.get_x() < self.width && cell.get_y() < self.height {
			Some(cell.get_y() * self.width + cell.get_x())
		} else {
			None
		}
	}
	/// Get a reference to the row-major values
	pub fn get_values(&self) -> &[T] {
		&self.values
	}
	/// Iterate over every cell and its value in row-major order
	pub fn iter_cells(&self) -> impl Iterator<Item = (GridCell, T)> + '_ {
		let width = self.width;
		self.values
			.iter()
			.enumerate()
			.map(move |(i, v)| (GridCell::new(i % width, i / width), *v))
	}
	/// Produce a grid of the same dimensions with `f` applied to each value
	pub fn map<U: Copy>(&self, f: impl Fn(T) -> U) -> GridArray<U> {
		GridArray {
			width: self.width,
			height: self.height,
			values: self.values.iter().map(|v| f(*v)).collect(),
		}
	}
}

/// Defines required access to grid arrays
pub trait Grid<T: Copy> {
	/// Get a reference to the grid array
	fn get(&self) -> &GridArray<T>;
	/// Get a mutable reference to the grid array
	fn get_mut(&mut self) -> &mut GridArray<T>;
	/// `(width, height)` of the grid
	fn get_dimensions(&self) -> (usize, usize) {
		self.get().get_dimensions()
	}
	/// Whether signed coordinates `(x, y)` sit within the grid
	fn contains_xy(&self, x: i32, y: i32) -> bool {
		let (width, height) = self.get_dimensions();
		x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height
	}
	/// Retrieve a grid cell value
	fn get_cell_value(&self, cell: GridCell) -> T {
		let array = self.get();
		match array.index_of(cell) {
			Some(i) => array.values[i],
			None => panic!(
				"Cannot get a grid value, x {} y {} is outside of dimensions {:?}",
				cell.get_x(),
				cell.get_y(),
				array.get_dimensions()
			),
		}
	}
	/// Set a grid cell to a value
	fn set_cell_value(&mut self, value: T, cell: GridCell) {
		let array = self.get_mut();
		match array.index_of(cell) {
			Some(i) => array.values[i] = value,
			None => panic!(
				"Cannot set a grid value, x {} y {} is outside of dimensions {:?}",
				cell.get_x(),
				cell.get_y(),
				array.get_dimensions()
			),
		}
	}
	/// Set the value of signed coordinates `(x, y)`, coordinates outside of the grid are
	/// ignored. Returns whether a cell was written
	fn set_clipped(&mut self, value: T, x: i32, y: i32) -> bool {
		if self.contains_xy(x, y) {
			self.set_cell_value(value, GridCell::new(x as usize, y as usize));
			true
		} else {
			false
		}
	}
}
