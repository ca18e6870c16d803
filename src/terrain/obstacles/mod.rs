//! Objects in the live world which occupy terrain cells and the logic of stamping them into
//! [PathingGrid]s
//!
//! The game client refreshes these snapshots every tick. Destructibles and resource nodes are
//! tracked persistently by the [ObstacleTracker], structures change state too often to be
//! worth tracking and are re-stamped on every request by the structure overlay.
//!

pub mod footprint;
pub mod obstacle_tracker;
pub mod static_terrain;
pub mod structure_overlay;

use bevy::prelude::*;

/// A destructible rock/debris or a resource node as reported by the game client
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainObject {
	/// Type name of the object, i.e `DestructibleRockEx16x6` or `MineralField750`
	type_name: String,
	/// Centre of the object in map coordinates
	position: Vec2,
}

impl TerrainObject {
	/// Create a new instance of [TerrainObject]
	pub fn new(type_name: &str, position: Vec2) -> Self {
		TerrainObject {
			type_name: type_name.to_string(),
			position,
		}
	}
	pub fn get_type_name(&self) -> &str {
		&self.type_name
	}
	pub fn get_position(&self) -> Vec2 {
		self.position
	}
	/// Stable key of the object's position
	pub fn get_key(&self) -> PositionKey {
		PositionKey::from_position(self.position)
	}
}

/// A structure owned by either player
#[derive(Clone, Debug, PartialEq)]
pub struct Structure {
	/// Type name of the structure, i.e `SupplyDepotLowered`
	type_name: String,
	/// Centre of the structure in map coordinates
	position: Vec2,
	/// Declared footprint size in game units, `2`, `3` or `5` for ground structures
	base_size: u8,
	/// Whether the structure is currently airborne
	is_flying: bool,
	/// Whether construction has finished
	is_ready: bool,
	/// Whether the structure is powered/active
	is_active: bool,
}

impl Structure {
	/// Create a new instance of a completed, active, grounded [Structure]
	pub fn new(type_name: &str, position: Vec2, base_size: u8) -> Self {
		Structure {
			type_name: type_name.to_string(),
			position,
			base_size,
			is_flying: false,
			is_ready: true,
			is_active: true,
		}
	}
	/// Set the status flags of the structure
	pub fn with_status(mut self, is_flying: bool, is_ready: bool, is_active: bool) -> Self {
		self.is_flying = is_flying;
		self.is_ready = is_ready;
		self.is_active = is_active;
		self
	}
	pub fn get_type_name(&self) -> &str {
		&self.type_name
	}
	pub fn get_position(&self) -> Vec2 {
		self.position
	}
	pub fn get_base_size(&self) -> u8 {
		self.base_size
	}
	pub fn is_flying(&self) -> bool {
		self.is_flying
	}
	pub fn is_ready(&self) -> bool {
		self.is_ready
	}
	pub fn is_active(&self) -> bool {
		self.is_active
	}
}

/// The live destructibles and resource nodes of a single tick
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObstacleSnapshot {
	/// Rocks and debris
	destructibles: Vec<TerrainObject>,
	/// Mineral fields
	minerals: Vec<TerrainObject>,
	/// Vespene geysers
	geysers: Vec<TerrainObject>,
}

impl ObstacleSnapshot {
	/// Create a new instance of [ObstacleSnapshot]
	pub fn new(
		destructibles: Vec<TerrainObject>,
		minerals: Vec<TerrainObject>,
		geysers: Vec<TerrainObject>,
	) -> Self {
		ObstacleSnapshot {
			destructibles,
			minerals,
			geysers,
		}
	}
	pub fn get_destructibles(&self) -> &[TerrainObject] {
		&self.destructibles
	}
	pub fn get_minerals(&self) -> &[TerrainObject] {
		&self.minerals
	}
	pub fn get_geysers(&self) -> &[TerrainObject] {
		&self.geysers
	}
}

/// Integer key derived from a floating point position. Object centres sit on whole or half
/// coordinates so the key counts half units, `(10.5, 3.0)` becomes `(21, 6)`
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Reflect)]
pub struct PositionKey((i32, i32));

impl PositionKey {
	/// Create a [PositionKey] from a map position
	pub fn from_position(position: Vec2) -> Self {
		PositionKey((
			(position.x * 2.0).round() as i32,
			(position.y * 2.0).round() as i32,
		))
	}
	/// The position this key was derived from, snapped to the nearest half unit
	pub fn to_position(&self) -> Vec2 {
		Vec2::new(self.0 .0 as f32 / 2.0, self.0 .1 as f32 / 2.0)
	}
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn position_keys_distinguish_half_units() {
		let a = PositionKey::from_position(Vec2::new(10.0, 3.5));
		let b = PositionKey::from_position(Vec2::new(10.5, 3.5));
		assert_ne!(a, b);
		assert_eq!(Vec2::new(10.5, 3.5), b.to_position());
	}
	#[test]
	fn position_keys_absorb_float_noise() {
		let a = PositionKey::from_position(Vec2::new(10.5, 3.5));
		let b = PositionKey::from_position(Vec2::new(10.500001, 3.4999998));
		assert_eq!(a, b);
	}
}
