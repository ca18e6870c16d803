//! Builds the two persistent [PathingGrid]s of a session from the raw client layers
//!
//! The pathing layer reported by the client marks the tiles under base resources as
//! unpathable even though the bot manages them itself, so the baseline is the logical OR of the
//! pathing and placement layers. Two variants are then derived:
//!
//! * `pathing` - destructibles block their footprint
//! * `pathing_cleared` - destructibles are treated as already cleared
//!
//! Resource nodes block both variants alike, so the variants only ever disagree on cells
//! covered by a clearable destructible.
//!

use crate::prelude::*;
use bevy::prelude::*;

/// The persistent grid variants of a session
#[derive(Clone, Debug, PartialEq)]
pub struct StaticTerrain {
	/// Destructibles block their footprint
	pathing: PathingGrid,
	/// Destructibles are treated as cleared
	pathing_cleared: PathingGrid,
}

impl StaticTerrain {
	/// Build both grid variants from the raw layers alone, before any object is stamped
	pub fn baseline(layers: &TerrainLayers, config: &TerrainConfig) -> TerrainResult<Self> {
		let mut baseline = layers.get_pathing().union(layers.get_placement())?;
		apply_map_overrides(&mut baseline, layers.get_map_name(), config);
		Ok(StaticTerrain {
			pathing: baseline.clone(),
			pathing_cleared: baseline,
		})
	}
	/// Build both grid variants from the raw layers and the objects present at session start
	pub fn build(
		layers: &TerrainLayers,
		snapshot: &ObstacleSnapshot,
		config: &TerrainConfig,
	) -> TerrainResult<Self> {
		let mut terrain = StaticTerrain::baseline(layers, config)?;
		let mut destructible_count = 0;
		for object in snapshot.get_destructibles().iter() {
			if terrain.block_destructible(object).is_some() {
				destructible_count += 1;
			}
		}
		for geyser in snapshot.get_geysers().iter() {
			terrain.block_resource(ShapeKey::Rect3x3, geyser.get_position());
		}
		for mineral in snapshot.get_minerals().iter() {
			terrain.block_resource(ShapeKey::Rect2x1, mineral.get_position());
		}
		debug!(
			"Static terrain built with {} destructibles, {} geysers, {} minerals",
			destructible_count,
			snapshot.get_geysers().len(),
			snapshot.get_minerals().len()
		);
		Ok(terrain)
	}
	/// Get a reference to the grid where destructibles block their footprint
	pub fn get_pathing(&self) -> &PathingGrid {
		&self.pathing
	}
	/// Get a reference to the grid where destructibles are treated as cleared
	pub fn get_pathing_cleared(&self) -> &PathingGrid {
		&self.pathing_cleared
	}
	/// Get a reference to a grid variant
	pub fn get_variant(&self, variant: GridVariant) -> &PathingGrid {
		match variant {
			GridVariant::Destructibles => &self.pathing,
			GridVariant::Cleared => &self.pathing_cleared,
		}
	}
	/// Stamp a destructible as blocked in `pathing` and open in `pathing_cleared`. Objects
	/// named as unbuildable/acceleration zones are never obstacles and are skipped. Returns the
	/// footprint used, [None] when skipped
	pub fn block_destructible(&mut self, object: &TerrainObject) -> Option<ShapeKey> {
		if is_non_clearable(object.get_type_name()) {
			return None;
		}
		let shape = destructible_footprint_or_single(object.get_type_name());
		self.block_destructible_footprint(shape, object.get_position());
		Some(shape)
	}
	/// Stamp a destructible footprint as blocked in `pathing` and open in `pathing_cleared`
	pub fn block_destructible_footprint(&mut self, shape: ShapeKey, position: Vec2) {
		let cells = shape.cells(position);
		stamp_cells(&mut self.pathing, &cells, false);
		stamp_cells(&mut self.pathing_cleared, &cells, true);
	}
	/// Open a destructible footprint in both variants
	pub fn clear_destructible(&mut self, shape: ShapeKey, position: Vec2) {
		let cells = shape.cells(position);
		stamp_cells(&mut self.pathing, &cells, true);
		stamp_cells(&mut self.pathing_cleared, &cells, true);
	}
	/// Re-stamp a destructible which is still standing, used after a neighbouring footprint
	/// was opened
	pub fn restore_destructible(&mut self, shape: ShapeKey, position: Vec2) {
		stamp_footprint(&mut self.pathing, shape, position, false);
	}
	/// Block a resource footprint in both variants
	pub fn block_resource(&mut self, shape: ShapeKey, position: Vec2) {
		let cells = shape.cells(position);
		stamp_cells(&mut self.pathing, &cells, false);
		stamp_cells(&mut self.pathing_cleared, &cells, false);
	}
	/// Open a resource footprint in both variants
	pub fn clear_resource(&mut self, shape: ShapeKey, position: Vec2) {
		let cells = shape.cells(position);
		stamp_cells(&mut self.pathing, &cells, true);
		stamp_cells(&mut self.pathing_cleared, &cells, true);
	}
}

/// Which persistent grid a request reads from
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Reflect)]
pub enum GridVariant {
	/// Destructibles block their footprint
	#[default]
	Destructibles,
	/// Destructibles are treated as cleared
	Cleared,
}

/// Apply every [MapOverride] of `config` whose name fragment matches `map_name`. Cells outside
/// of the grid are ignored. Returns the number of cells written
pub fn apply_map_overrides(
	grid: &mut PathingGrid,
	map_name: &str,
	config: &TerrainConfig,
) -> usize {
	let mut written = 0;
	for map_override in config.overrides_for(map_name) {
		info!(
			"Applying pathing override `{}` to map `{}`",
			map_override.get_map_name_fragment(),
			map_name
		);
		for cell in map_override.get_cells().iter() {
			if grid.get().index_of(*cell).is_some() {
				grid.set_cell_value(map_override.is_pathable(), *cell);
				written += 1;
			}
		}
	}
	written
}
