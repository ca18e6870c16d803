//! The terrain model of a map is a set of 2D grids covering the full coordinate extent of the
//! map, indexed by `(x, y)` with `(0, 0)` at the origin of the map coordinate system.
//!
//! The game client hands over a handful of raw layers when a session starts:
//!
//! * Pathing layer - boolean grid where `true` marks a cell a ground unit may cross
//! * Placement layer - boolean grid where `true` marks a cell structures may be placed on
//! * Height layer - terrain height of each cell
//! * Playable area - the sub-rectangle of the map units can actually reach
//!
//! From these layers two persistent [PathingGrid]s are derived and then kept in sync with the
//! live world by the [ObstacleTracker]:
//!
//! ```text
//!  layers ─> static terrain ─> ObstacleTracker ─> structure overlay ─> CostGrid
//!                               ^    (per call)                   (per call)
//!              live snapshots ──┘
//! ```
//!
//! Definitions:
//!
//! * Pathable - a grid cell a ground unit may currently occupy/cross
//! * Footprint - the set of grid cells an object's physical base occupies
//! * Destructible - a rock/debris object which can be removed, converting its footprint from
//! blocked to pathable
//! * Cost grid - float grid consumed by path search, infinite cost marks impassable cells
//! * Ramp - a connected region of pathable-but-not-placeable terrain with non-uniform height
//! * Vision blocker - a similar region with uniform height
//!

pub mod analysis;
pub mod config;
pub mod errors;
pub mod grids;
pub mod obstacles;
pub mod utilities;

use crate::prelude::*;
use bevy::prelude::*;

/// The sub-rectangle of a map which units can reach, measured in grid cells
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Reflect)]
pub struct PlayableArea {
	/// Column of the left edge
	x: usize,
	/// Row of the bottom edge
	y: usize,
	/// Number of columns covered
	width: usize,
	/// Number of rows covered
	height: usize,
}

impl PlayableArea {
	/// Create a new instance of [PlayableArea] starting at `(x, y)` and spanning `width` by
	/// `height` cells
	pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
		PlayableArea {
			x,
			y,
			width,
			height,
		}
	}
	/// A [PlayableArea] covering every cell of a grid with the given dimensions
	pub fn full(dimensions: (usize, usize)) -> Self {
		PlayableArea::new(0, 0, dimensions.0, dimensions.1)
	}
	/// Whether `cell` sits inside the area
	pub fn contains(&self, cell: GridCell) -> bool {
		cell.get_x() >= self.x
			&& cell.get_x() < self.x + self.width
			&& cell.get_y() >= self.y
			&& cell.get_y() < self.y + self.height
	}
	pub fn get_origin(&self) -> (usize, usize) {
		(self.x, self.y)
	}
	pub fn get_size(&self) -> (usize, usize) {
		(self.width, self.height)
	}
}

/// The raw layers supplied by the game client at session start. They are fixed for the
/// lifetime of a session
#[derive(Clone, Debug)]
pub struct TerrainLayers {
	/// Ground pathability as reported by the client
	pathing: PathingGrid,
	/// Placement legality as reported by the client
	placement: PathingGrid,
	/// Terrain height of each cell
	heights: HeightGrid,
	/// Region of the map units can reach
	playable_area: PlayableArea,
	/// Display name of the map, used to match [MapOverride]s
	map_name: String,
}

impl TerrainLayers {
	/// Create a new instance of [TerrainLayers], all layers must share the same dimensions
	pub fn new(
		pathing: PathingGrid,
		placement: PathingGrid,
		heights: HeightGrid,
		playable_area: PlayableArea,
		map_name: &str,
	) -> TerrainResult<Self> {
		let expected = pathing.get_dimensions();
		let placement_dims = placement.get_dimensions();
		if placement_dims != expected {
			return Err(TerrainError::LayerDimensionMismatch {
				layer: "placement",
				expected,
				found: placement_dims,
			});
		}
		let height_dims = heights.get_dimensions();
		if height_dims != expected {
			return Err(TerrainError::LayerDimensionMismatch {
				layer: "height",
				expected,
				found: height_dims,
			});
		}
		Ok(TerrainLayers {
			pathing,
			placement,
			heights,
			playable_area,
			map_name: map_name.to_string(),
		})
	}
	/// Read the three layers from CSV files where each line is a row of the map, starting at
	/// `y = 0`
	#[cfg(feature = "csv")]
	pub fn from_csv(
		pathing_path: &str,
		placement_path: &str,
		heights_path: &str,
		playable_area: PlayableArea,
		map_name: &str,
	) -> TerrainResult<Self> {
		let pathing = PathingGrid::from_csv(pathing_path)?;
		let placement = PathingGrid::from_csv(placement_path)?;
		let heights = HeightGrid::from_csv(heights_path)?;
		TerrainLayers::new(pathing, placement, heights, playable_area, map_name)
	}
	/// Read the pathing and placement layers from CSV files and the height layer from a
	/// greyscale image
	#[cfg(all(feature = "csv", feature = "heightmap"))]
	pub fn from_csv_and_heightmap(
		pathing_path: &str,
		placement_path: &str,
		heightmap_path: &str,
		playable_area: PlayableArea,
		map_name: &str,
	) -> TerrainResult<Self> {
		let pathing = PathingGrid::from_csv(pathing_path)?;
		let placement = PathingGrid::from_csv(placement_path)?;
		let heights = HeightGrid::from_heightmap(heightmap_path)?;
		TerrainLayers::new(pathing, placement, heights, playable_area, map_name)
	}
	pub fn get_pathing(&self) -> &PathingGrid {
		&self.pathing
	}
	pub fn get_placement(&self) -> &PathingGrid {
		&self.placement
	}
	pub fn get_heights(&self) -> &HeightGrid {
		&self.heights
	}
	pub fn get_playable_area(&self) -> PlayableArea {
		self.playable_area
	}
	pub fn get_map_name(&self) -> &str {
		&self.map_name
	}
	/// `(width, height)` shared by every layer
	pub fn get_dimensions(&self) -> (usize, usize) {
		self.pathing.get_dimensions()
	}
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn playable_area_bounds() {
		let area = PlayableArea::new(2, 3, 4, 5);
		assert!(area.contains(GridCell::new(2, 3)));
		assert!(area.contains(GridCell::new(5, 7)));
		assert!(!area.contains(GridCell::new(6, 7)));
		assert!(!area.contains(GridCell::new(5, 8)));
		assert!(!area.contains(GridCell::new(1, 3)));
	}
	#[test]
	fn layers_must_share_dimensions() {
		let pathing = PathingGrid::new(8, 8, true);
		let placement = PathingGrid::new(8, 6, true);
		let heights = HeightGrid::new(8, 8, 0.0);
		let result = TerrainLayers::new(
			pathing,
			placement,
			heights,
			PlayableArea::full((8, 8)),
			"Test",
		);
		match result {
			Err(TerrainError::LayerDimensionMismatch {
				layer,
				expected,
				found,
			}) => {
				assert_eq!("placement", layer);
				assert_eq!((8, 8), expected);
				assert_eq!((8, 6), found);
			}
			_ => panic!("Expected a dimension mismatch"),
		}
	}
	#[test]
	fn layers_accept_matching_dimensions() {
		let layers = TerrainLayers::new(
			PathingGrid::new(4, 5, true),
			PathingGrid::new(4, 5, false),
			HeightGrid::new(4, 5, 1.0),
			PlayableArea::full((4, 5)),
			"Test",
		)
		.unwrap();
		assert_eq!((4, 5), layers.get_dimensions());
		assert_eq!("Test", layers.get_map_name());
	}
}
