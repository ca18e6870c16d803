//! Terrain height of each cell. Heights are only ever compared with each other so the unit
//! is whatever the client reports
//!

use crate::prelude::*;

/// Terrain height grid
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct HeightGrid(GridArray<f32>);

impl Grid<f32> for HeightGrid {
	fn get(&self) -> &GridArray<f32> {
		&self.0
	}
	fn get_mut(&mut self) -> &mut GridArray<f32> {
		&mut self.0
	}
}

impl HeightGrid {
	/// Create a new instance of [HeightGrid] with every cell at `height`
	pub fn new(width: usize, height: usize, value: f32) -> Self {
		HeightGrid(GridArray::new(width, height, value))
	}
	/// Create a [HeightGrid] from a list of rows, starting at `y = 0`
	pub fn from_rows(rows: Vec<Vec<f32>>) -> TerrainResult<Self> {
		Ok(HeightGrid(GridArray::from_rows(rows)?))
	}
	/// Whether every in-bounds cell of the 3x3 neighbourhood centred on `cell` shares the
	/// height of `cell`
	pub fn is_flat_around(&self, cell: GridCell) -> bool {
		let centre = self.get_cell_value(cell);
		let x = cell.get_x() as i32;
		let y = cell.get_y() as i32;
		for dy in -1..=1 {
			for dx in -1..=1 {
				if self.contains_xy(x + dx, y + dy) {
					let neighbour = GridCell::new((x + dx) as usize, (y + dy) as usize);
					if self.get_cell_value(neighbour) != centre {
						return false;
					}
				}
			}
		}
		true
	}
	/// From a CSV file of float values, each line is a row starting at `y = 0`
	#[cfg(feature = "csv")]
	pub fn from_csv(path: &str) -> TerrainResult<Self> {
		let mut rdr = csv::ReaderBuilder::new()
			.has_headers(false)
			.from_path(path)?;
		let mut rows = Vec::new();
		for record in rdr.records() {
			let mut row = Vec::new();
			for value in record?.iter() {
				let height: f32 = value
					.trim()
					.parse()
					.map_err(|_| TerrainError::Parse(value.to_string()))?;
				row.push(height);
			}
			rows.push(row);
		}
		HeightGrid::from_rows(rows)
	}
	/// Create a [HeightGrid] from a greyscale image where each pixel is the height of a cell.
	/// Image rows run top to bottom so the last pixel row becomes `y = 0`
	#[cfg(feature = "heightmap")]
	pub fn from_heightmap(path: &str) -> TerrainResult<Self> {
		use photon_rs::native::open_image;
		let img = open_image(path).map_err(|e| TerrainError::Heightmap(e.to_string()))?;
		let img_width = img.get_width() as usize;
		let img_height = img.get_height() as usize;
		let raw_pixels = img.get_raw_pixels();
		// raw pixels come in sets of either 3 or 4 (if alpha channel is included)
		let chunk_size = if raw_pixels.len() == img_width * img_height * 4 {
			4
		} else {
			3
		};
		let mut rows = Vec::with_capacity(img_height);
		for line in raw_pixels.chunks(img_width * chunk_size) {
			let row: Vec<f32> = line
				.chunks(chunk_size)
				.map(|px| (px[0] as f32 + px[1] as f32 + px[2] as f32) / 3.0)
				.collect();
			rows.push(row);
		}
		rows.reverse();
		HeightGrid::from_rows(rows)
	}
}
