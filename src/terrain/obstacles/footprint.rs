//! Footprints describe which grid cells an object occupies. A footprint is either a solid
//! rectangle centred on the object or a list of row spans for the irregular diagonal debris:
//!
//! ```text
//!  DiagonalHugeBlur, anchor at `A`
//!  ________________________________________
//! |___|___|___|___|___|___|___|_x_|_x_|_x_|  +4
//! |___|___|___|___|___|___|_x_|_x_|_x_|_x_|  +3
//! |___|___|___|___|_x_|_x_|_x_|_x_|_x_|___|  +2
//! |___|___|___|_x_|_x_|_x_|_x_|_x_|___|___|  +1
//! |___|___|___|_x_|_x_|_A_|_x_|___|___|___|   0
//! |___|___|___|_x_|_x_|_x_|_x_|___|___|___|  -1
//! |___|___|_x_|_x_|_x_|_x_|_x_|___|___|___|  -2
//! |___|_x_|_x_|_x_|_x_|_x_|___|___|___|___|  -3
//! |_x_|_x_|_x_|_x_|___|___|___|___|___|___|  -4
//! |_x_|_x_|_x_|___|___|___|___|___|___|___|  -5
//!  -5  -4  -3  -2  -1   0  +1  +2  +3  +4
//! ```
//!
//! Every shape is consumed by the same stamping routine, cells falling outside of a grid are
//! clipped.
//!

use crate::prelude::*;
use bevy::prelude::*;

/// A horizontal run of cells within a footprint. Offsets are relative to the anchor cell, the
/// whole coordinate nearest the object's centre
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Span {
	/// Row offset from the anchor
	row: i32,
	/// Column offset of the first cell
	start: i32,
	/// Number of cells in the run
	length: u32,
}

impl Span {
	/// Create a new instance of [Span]
	pub const fn new(row: i32, start: i32, length: u32) -> Self {
		Span { row, start, length }
	}
	pub fn get_row(&self) -> i32 {
		self.row
	}
	pub fn get_start(&self) -> i32 {
		self.start
	}
	pub fn get_length(&self) -> u32 {
		self.length
	}
}

/// Diagonal debris running from bottom-left to upper-right
const DIAGONAL_HUGE_BLUR: [Span; 10] = [
	Span::new(-5, -5, 3),
	Span::new(-4, -5, 4),
	Span::new(-3, -4, 5),
	Span::new(-2, -3, 5),
	Span::new(-1, -2, 4),
	Span::new(0, -2, 4),
	Span::new(1, -2, 5),
	Span::new(2, -1, 5),
	Span::new(3, 1, 4),
	Span::new(4, 2, 3),
];

/// Diagonal debris running from upper-left to bottom-right, the horizontal mirror of
/// [DIAGONAL_HUGE_BLUR]
const DIAGONAL_HUGE_ULBR: [Span; 10] = [
	Span::new(-5, 2, 3),
	Span::new(-4, 1, 4),
	Span::new(-3, -1, 5),
	Span::new(-2, -2, 5),
	Span::new(-1, -2, 4),
	Span::new(0, -2, 4),
	Span::new(1, -3, 5),
	Span::new(2, -4, 5),
	Span::new(3, -5, 4),
	Span::new(4, -5, 3),
];

/// 6x6 rocks whose map data leaves the corner cells open, one cell is shaved from each end
/// of the outer rows.
/// NB: derived from observed map data, revalidate when targeting a new map pool
const ROUNDED_6X6: [Span; 6] = [
	Span::new(-3, -2, 4),
	Span::new(-2, -3, 6),
	Span::new(-1, -3, 6),
	Span::new(0, -3, 6),
	Span::new(1, -3, 6),
	Span::new(2, -2, 4),
];

/// Geometry of a footprint
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FootprintShape {
	/// Solid rectangle centred on the object, `width` along `x`
	Rectangle {
		/// Cells along `x`
		width: u32,
		/// Cells along `y`
		height: u32,
	},
	/// Explicit rows of cells around the anchor
	Spans(&'static [Span]),
}

impl FootprintShape {
	/// The cells covered when the shape is centred on `center`. Cells may lie outside of any
	/// grid, callers clip them
	pub fn cells(&self, center: Vec2) -> Vec<(i32, i32)> {
		let mut cells = Vec::new();
		match self {
			FootprintShape::Rectangle { width, height } => {
				// nearest whole coordinate to the corner of the rectangle
				let x0 = (center.x - *width as f32 / 2.0 + 0.5).floor() as i32;
				let y0 = (center.y - *height as f32 / 2.0 + 0.5).floor() as i32;
				for y in y0..y0 + *height as i32 {
					for x in x0..x0 + *width as i32 {
						cells.push((x, y));
					}
				}
			}
			FootprintShape::Spans(spans) => {
				let anchor_x = (center.x + 0.5).floor() as i32;
				let anchor_y = (center.y + 0.5).floor() as i32;
				for span in spans.iter() {
					let y = anchor_y + span.get_row();
					let x0 = anchor_x + span.get_start();
					for x in x0..x0 + span.get_length() as i32 {
						cells.push((x, y));
					}
				}
			}
		}
		cells
	}
	/// Number of cells covered by the shape
	pub fn area(&self) -> usize {
		match self {
			FootprintShape::Rectangle { width, height } => (*width * *height) as usize,
			FootprintShape::Spans(spans) => spans.iter().map(|s| s.get_length() as usize).sum(),
		}
	}
}

/// Identity of every footprint the terrain model knows how to stamp
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Reflect)]
pub enum ShapeKey {
	/// Fallback for objects with no known footprint
	Rect1x1,
	/// Mineral fields, two cells side by side
	Rect2x1,
	Rect2x2,
	Rect3x3,
	Rect4x4,
	Rect4x2,
	Rect2x4,
	Rect5x5,
	Rect6x2,
	Rect2x6,
	Rect6x6,
	Rect12x4,
	Rect4x12,
	/// 6x6 with the corner cells left open
	Rounded6x6,
	/// Diagonal debris, bottom-left to upper-right
	DiagonalHugeBlur,
	/// Diagonal debris, upper-left to bottom-right
	DiagonalHugeUlbr,
}

impl ShapeKey {
	/// Every [ShapeKey]
	pub const ALL: [ShapeKey; 16] = [
		ShapeKey::Rect1x1,
		ShapeKey::Rect2x1,
		ShapeKey::Rect2x2,
		ShapeKey::Rect3x3,
		ShapeKey::Rect4x4,
		ShapeKey::Rect4x2,
		ShapeKey::Rect2x4,
		ShapeKey::Rect5x5,
		ShapeKey::Rect6x2,
		ShapeKey::Rect2x6,
		ShapeKey::Rect6x6,
		ShapeKey::Rect12x4,
		ShapeKey::Rect4x12,
		ShapeKey::Rounded6x6,
		ShapeKey::DiagonalHugeBlur,
		ShapeKey::DiagonalHugeUlbr,
	];
	/// The geometry of the key
	pub fn shape(&self) -> FootprintShape {
		let rect = |width, height| FootprintShape::Rectangle { width, height };
		match self {
			ShapeKey::Rect1x1 => rect(1, 1),
			ShapeKey::Rect2x1 => rect(2, 1),
			ShapeKey::Rect2x2 => rect(2, 2),
			ShapeKey::Rect3x3 => rect(3, 3),
			ShapeKey::Rect4x4 => rect(4, 4),
			ShapeKey::Rect4x2 => rect(4, 2),
			ShapeKey::Rect2x4 => rect(2, 4),
			ShapeKey::Rect5x5 => rect(5, 5),
			ShapeKey::Rect6x2 => rect(6, 2),
			ShapeKey::Rect2x6 => rect(2, 6),
			ShapeKey::Rect6x6 => rect(6, 6),
			ShapeKey::Rect12x4 => rect(12, 4),
			ShapeKey::Rect4x12 => rect(4, 12),
			ShapeKey::Rounded6x6 => FootprintShape::Spans(&ROUNDED_6X6),
			ShapeKey::DiagonalHugeBlur => FootprintShape::Spans(&DIAGONAL_HUGE_BLUR),
			ShapeKey::DiagonalHugeUlbr => FootprintShape::Spans(&DIAGONAL_HUGE_ULBR),
		}
	}
	/// Cells covered when centred on `center`
	pub fn cells(&self, center: Vec2) -> Vec<(i32, i32)> {
		self.shape().cells(center)
	}
}

/// Footprints of destructible rocks and debris by type name
const DESTRUCTIBLE_FOOTPRINTS: [(&str, ShapeKey); 49] = [
	// 2x2
	("UnbuildableRocksDestructible", ShapeKey::Rect2x2),
	("UnbuildableBricksDestructible", ShapeKey::Rect2x2),
	("UnbuildablePlatesDestructible", ShapeKey::Rect2x2),
	("UnbuildableRocksSmallDestructible", ShapeKey::Rect2x2),
	("UnbuildableBricksSmallDestructible", ShapeKey::Rect2x2),
	("UnbuildablePlatesSmallDestructible", ShapeKey::Rect2x2),
	// 4x4
	("DestructibleDebris4x4", ShapeKey::Rect4x4),
	("DestructibleRock4x4", ShapeKey::Rect4x4),
	("DestructibleRockEx14x4", ShapeKey::Rect4x4),
	("DestructibleCityDebris4x4", ShapeKey::Rect4x4),
	("DestructibleIce4x4", ShapeKey::Rect4x4),
	// 2x4
	("DestructibleRock2x4Vertical", ShapeKey::Rect2x4),
	("DestructibleCityDebris2x4Vertical", ShapeKey::Rect2x4),
	("DestructibleIce2x4Vertical", ShapeKey::Rect2x4),
	("DestructibleRock2x4Horizontal", ShapeKey::Rect4x2),
	("DestructibleCityDebris2x4Horizontal", ShapeKey::Rect4x2),
	("DestructibleIce2x4Horizontal", ShapeKey::Rect4x2),
	// 2x6
	("DestructibleRock2x6Vertical", ShapeKey::Rect2x6),
	("DestructibleCityDebris2x6Vertical", ShapeKey::Rect2x6),
	("DestructibleIce2x6Vertical", ShapeKey::Rect2x6),
	("DestructibleRock2x6Horizontal", ShapeKey::Rect6x2),
	("DestructibleCityDebris2x6Horizontal", ShapeKey::Rect6x2),
	("DestructibleIce2x6Horizontal", ShapeKey::Rect6x2),
	// 6x6
	("DestructibleDebris6x6", ShapeKey::Rounded6x6),
	("DestructibleRock6x6", ShapeKey::Rounded6x6),
	("DestructibleRock6x6Weak", ShapeKey::Rounded6x6),
	("DestructibleRockEx16x6", ShapeKey::Rounded6x6),
	("DestructibleCityDebris6x6", ShapeKey::Rect6x6),
	("DestructibleIce6x6", ShapeKey::Rect6x6),
	("DestructibleExpeditionGate6x6", ShapeKey::Rect6x6),
	// 12x4
	("DestructibleRampHorizontalHuge", ShapeKey::Rect12x4),
	("DestructibleRockEx1HorizontalHuge", ShapeKey::Rect12x4),
	("DestructibleDebrisRampHorizontalHuge", ShapeKey::Rect12x4),
	("DestructibleIceHorizontalHuge", ShapeKey::Rect12x4),
	// 4x12
	("DestructibleRampVerticalHuge", ShapeKey::Rect4x12),
	("DestructibleRockEx1VerticalHuge", ShapeKey::Rect4x12),
	("DestructibleDebrisRampVerticalHuge", ShapeKey::Rect4x12),
	("DestructibleIceVerticalHuge", ShapeKey::Rect4x12),
	// diagonal, bottom-left to upper-right
	("DestructibleRampDiagonalHugeBLUR", ShapeKey::DiagonalHugeBlur),
	("DestructibleRockEx1DiagonalHugeBLUR", ShapeKey::DiagonalHugeBlur),
	("DestructibleDebrisRampDiagonalHugeBLUR", ShapeKey::DiagonalHugeBlur),
	("DestructibleCityDebrisHugeDiagonalBLUR", ShapeKey::DiagonalHugeBlur),
	("DestructibleIceDiagonalHugeBLUR", ShapeKey::DiagonalHugeBlur),
	// diagonal, upper-left to bottom-right
	("DestructibleRampDiagonalHugeULBR", ShapeKey::DiagonalHugeUlbr),
	("DestructibleRockEx1DiagonalHugeULBR", ShapeKey::DiagonalHugeUlbr),
	("DestructibleDebrisRampDiagonalHugeULBR", ShapeKey::DiagonalHugeUlbr),
	("DestructibleCityDebrisHugeDiagonalULBR", ShapeKey::DiagonalHugeUlbr),
	("DestructibleIceDiagonalHugeULBR", ShapeKey::DiagonalHugeUlbr),
	// single cell markers
	("AccelerationZoneSmall", ShapeKey::Rect1x1),
];

/// Look up the footprint of a destructible by type name
pub fn destructible_footprint(type_name: &str) -> Option<ShapeKey> {
	DESTRUCTIBLE_FOOTPRINTS
		.iter()
		.find(|(name, _)| *name == type_name)
		.map(|(_, key)| *key)
}

/// Look up the footprint of a destructible, types missing from the catalog occupy a single cell
pub fn destructible_footprint_or_single(type_name: &str) -> ShapeKey {
	match destructible_footprint(type_name) {
		Some(key) => key,
		None => {
			warn!(
				"No footprint known for `{}`, treating it as a single cell",
				type_name
			);
			ShapeKey::Rect1x1
		}
	}
}

/// Footprint of a structure from its declared base size. Unknown sizes occupy a single cell
pub fn structure_footprint(base_size: u8) -> ShapeKey {
	match base_size {
		2 => ShapeKey::Rect2x2,
		3 => ShapeKey::Rect3x3,
		5 => ShapeKey::Rect5x5,
		_ => ShapeKey::Rect1x1,
	}
}

/// Write `pathable` into every cell of `cells` which lies within the grid. Returns the number
/// of cells written
pub fn stamp_cells(grid: &mut PathingGrid, cells: &[(i32, i32)], pathable: bool) -> usize {
	let mut written = 0;
	for (x, y) in cells.iter() {
		if grid.set_clipped(pathable, *x, *y) {
			written += 1;
		}
	}
	written
}

/// Write `pathable` into the footprint `shape` centred on `center`. Returns the number of
/// cells written
pub fn stamp_footprint(
	grid: &mut PathingGrid,
	shape: ShapeKey,
	center: Vec2,
	pathable: bool,
) -> usize {
	stamp_cells(grid, &shape.cells(center), pathable)
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn rectangle_areas() {
		for key in ShapeKey::ALL.iter() {
			let cells = key.cells(Vec2::new(20.0, 20.0));
			assert_eq!(key.shape().area(), cells.len(), "{:?}", key);
		}
		assert_eq!(32, ShapeKey::Rounded6x6.shape().area());
		assert_eq!(42, ShapeKey::DiagonalHugeBlur.shape().area());
		assert_eq!(42, ShapeKey::DiagonalHugeUlbr.shape().area());
	}
	#[test]
	fn even_rectangle_on_whole_coordinate() {
		let mut result = ShapeKey::Rect2x2.cells(Vec2::new(10.0, 10.0));
		result.sort();
		let actual = vec![(9, 9), (9, 10), (10, 9), (10, 10)];
		assert_eq!(actual, result);
	}
	#[test]
	fn odd_rectangle_on_half_coordinate() {
		let result = ShapeKey::Rect3x3.cells(Vec2::new(10.5, 10.5));
		assert_eq!((9, 9), result[0]);
		assert_eq!((11, 11), result[8]);
	}
	#[test]
	fn mineral_is_two_cells_wide() {
		//  _______________
		// |___|_x_|_x_|___|  y = 7
		//      9   10
		let result = ShapeKey::Rect2x1.cells(Vec2::new(10.0, 7.5));
		let actual = vec![(9, 7), (10, 7)];
		assert_eq!(actual, result);
	}
	#[test]
	fn diagonal_is_point_symmetric() {
		let centre = Vec2::new(20.0, 20.0);
		let cells = ShapeKey::DiagonalHugeBlur.cells(centre);
		for (x, y) in cells.iter() {
			// rotate half a turn around the anchor corner
			let rotated = (39 - x, 39 - y);
			assert!(cells.contains(&rotated), "{:?} has no partner", (x, y));
		}
	}
	#[test]
	fn diagonals_mirror_each_other() {
		let centre = Vec2::new(20.0, 20.0);
		let blur = ShapeKey::DiagonalHugeBlur.cells(centre);
		let ulbr = ShapeKey::DiagonalHugeUlbr.cells(centre);
		assert_eq!(blur.len(), ulbr.len());
		for (x, y) in blur.iter() {
			assert!(ulbr.contains(&(39 - x, *y)));
		}
	}
	#[test]
	fn rounded_six_keeps_corners_open() {
		let cells = ShapeKey::Rounded6x6.cells(Vec2::new(10.0, 10.0));
		// bounding square is 7..=12
		assert!(!cells.contains(&(7, 7)));
		assert!(!cells.contains(&(12, 7)));
		assert!(!cells.contains(&(7, 12)));
		assert!(!cells.contains(&(12, 12)));
		assert!(cells.contains(&(8, 7)));
		assert!(cells.contains(&(7, 8)));
	}
	#[test]
	fn stamp_then_unstamp_restores_grid() {
		for key in ShapeKey::ALL.iter() {
			let original = PathingGrid::new(40, 40, true);
			let mut grid = original.clone();
			let centre = Vec2::new(20.0, 19.5);
			let written = stamp_footprint(&mut grid, *key, centre, false);
			assert_eq!(key.shape().area(), written);
			assert_eq!(40 * 40 - written, grid.count_pathable());
			stamp_footprint(&mut grid, *key, centre, true);
			assert_eq!(original, grid, "{:?} did not round trip", key);
		}
	}
	#[test]
	fn stamping_clips_at_edges() {
		let mut grid = PathingGrid::new(10, 10, true);
		let written = stamp_footprint(&mut grid, ShapeKey::Rect4x4, Vec2::new(0.0, 0.0), false);
		assert_eq!(4, written);
		assert!(!grid.is_pathable(GridCell::new(1, 1)));
		let written = stamp_footprint(
			&mut grid,
			ShapeKey::DiagonalHugeBlur,
			Vec2::new(50.0, 50.0),
			false,
		);
		assert_eq!(0, written);
	}
	#[test]
	fn catalog_lookup() {
		assert_eq!(
			Some(ShapeKey::DiagonalHugeUlbr),
			destructible_footprint("DestructibleRockEx1DiagonalHugeULBR")
		);
		assert_eq!(
			Some(ShapeKey::Rect4x2),
			destructible_footprint("DestructibleRock2x4Horizontal")
		);
		assert_eq!(None, destructible_footprint("NotARock"));
		assert_eq!(
			ShapeKey::Rect1x1,
			destructible_footprint_or_single("NotARock")
		);
	}
	#[test]
	fn structure_sizes() {
		assert_eq!(ShapeKey::Rect2x2, structure_footprint(2));
		assert_eq!(ShapeKey::Rect3x3, structure_footprint(3));
		assert_eq!(ShapeKey::Rect5x5, structure_footprint(5));
		assert_eq!(ShapeKey::Rect1x1, structure_footprint(4));
	}
}
