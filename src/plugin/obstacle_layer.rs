//! Logic for keeping every [ObstacleTracker] in sync with the live world. The game client sends
//! a full snapshot of the standing destructibles and mineral fields each tick
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Carries the destructibles and mineral fields still standing this tick
#[derive(Event)]
pub struct EventObstacleSnapshot {
	/// Standing destructibles
	destructibles: Vec<TerrainObject>,
	/// Standing mineral fields
	minerals: Vec<TerrainObject>,
}

impl EventObstacleSnapshot {
	/// Create a new instance of [EventObstacleSnapshot]
	#[cfg(not(tarpaulin_include))]
	pub fn new(destructibles: Vec<TerrainObject>, minerals: Vec<TerrainObject>) -> Self {
		EventObstacleSnapshot {
			destructibles,
			minerals,
		}
	}
	#[cfg(not(tarpaulin_include))]
	pub fn get_destructibles(&self) -> &[TerrainObject] {
		&self.destructibles
	}
	#[cfg(not(tarpaulin_include))]
	pub fn get_minerals(&self) -> &[TerrainObject] {
		&self.minerals
	}
}

/// Read [EventObstacleSnapshot] and reconcile each [ObstacleTracker] against it. A snapshot
/// describes the whole world so only the latest one of a frame is used
#[cfg(not(tarpaulin_include))]
pub fn process_obstacle_snapshots(
	mut events: EventReader<EventObstacleSnapshot>,
	mut query: Query<&mut ObstacleTracker>,
) {
	if let Some(snapshot) = events.read().last() {
		for mut tracker in query.iter_mut() {
			let report =
				tracker.reconcile(snapshot.get_destructibles(), snapshot.get_minerals());
			if !report.is_empty() {
				debug!(
					"Reconciled {} destructibles and {} minerals",
					report.get_destructibles_removed(),
					report.get_minerals_removed()
				);
			}
		}
	}
}
