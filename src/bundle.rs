//! Everything a map entity needs to answer terrain queries
//!

use crate::prelude::*;
use bevy::prelude::*;

/// The persistent grids and topology of a map
#[derive(Bundle)]
pub struct TerrainBundle {
	/// Grid variants kept in sync with the live world
	obstacle_tracker: ObstacleTracker,
	/// Ramps and vision blockers
	map_topology: MapTopology,
}

impl TerrainBundle {
	/// Create a new instance of [TerrainBundle] from the layers and objects present when the
	/// session starts
	pub fn new(
		layers: &TerrainLayers,
		snapshot: &ObstacleSnapshot,
		config: &TerrainConfig,
	) -> TerrainResult<Self> {
		let obstacle_tracker = ObstacleTracker::new(layers, snapshot, config)?;
		let map_topology = extract_ramps(
			layers,
			snapshot.get_destructibles(),
			config.get_ramp_connectivity(),
		);
		Ok(TerrainBundle {
			obstacle_tracker,
			map_topology,
		})
	}
	pub fn get_obstacle_tracker(&self) -> &ObstacleTracker {
		&self.obstacle_tracker
	}
	pub fn get_map_topology(&self) -> &MapTopology {
		&self.map_topology
	}
}
