//! Defines the Bevy [Plugin] for the terrain grids
//!

use crate::prelude::*;
use bevy::prelude::*;

pub mod obstacle_layer;

pub struct TerrainGridPlugin;

impl Plugin for TerrainGridPlugin {
	#[cfg(not(tarpaulin_include))]
	fn build(&self, app: &mut App) {
		app.register_type::<GridCell>()
			.register_type::<Connectivity>()
			.register_type::<GridVariant>()
			.register_type::<PositionKey>()
			.register_type::<ShapeKey>()
			.register_type::<PlayableArea>()
			.register_type::<Ramp>()
			.add_event::<obstacle_layer::EventObstacleSnapshot>()
			.add_systems(Update, obstacle_layer::process_obstacle_snapshots);
	}
}
