//! The [ObstacleTracker] owns the persistent [PathingGrid] variants of a session and keeps them
//! in sync with the live world.
//!
//! Destructibles and mineral fields are keyed by [PositionKey] rather than by object identity,
//! the client may reissue identities but an object never moves. Reconciliation is a set
//! difference between the tracked keys and the keys of a live snapshot, anything tracked but
//! no longer live has its footprint opened. Destructibles do not spawn after the map starts so
//! new keys in a snapshot are ignored.
//!

use std::collections::{BTreeMap, BTreeSet};

use crate::prelude::*;
use bevy::prelude::*;

/// An object whose footprint is currently stamped into the grids
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct TrackedObstacle {
	/// Last known centre of the object
	position: Vec2,
	/// Footprint stamped for the object
	shape: ShapeKey,
}

impl TrackedObstacle {
	/// Create a new instance of [TrackedObstacle]
	pub fn new(position: Vec2, shape: ShapeKey) -> Self {
		TrackedObstacle { position, shape }
	}
	pub fn get_position(&self) -> Vec2 {
		self.position
	}
	pub fn get_shape(&self) -> ShapeKey {
		self.shape
	}
}

/// Outcome of a reconciliation
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct ReconcileReport {
	/// Destructibles whose footprint was opened
	destructibles_removed: usize,
	/// Mineral fields whose footprint was opened
	minerals_removed: usize,
}

impl ReconcileReport {
	pub fn get_destructibles_removed(&self) -> usize {
		self.destructibles_removed
	}
	pub fn get_minerals_removed(&self) -> usize {
		self.minerals_removed
	}
	/// Whether any grid cell changed
	pub fn is_empty(&self) -> bool {
		self.destructibles_removed == 0 && self.minerals_removed == 0
	}
}

/// Persistent grids of a session and the obstacles stamped into them
#[derive(Component, Clone, Debug)]
pub struct ObstacleTracker {
	/// The two grid variants
	terrain: StaticTerrain,
	/// Clearable destructibles still standing
	destructibles: BTreeMap<PositionKey, TrackedObstacle>,
	/// Mineral fields still standing
	minerals: BTreeMap<PositionKey, TrackedObstacle>,
	/// Geysers never change during a session, kept to re-stamp overlaps
	geysers: Vec<Vec2>,
	/// Weight used by [ObstacleTracker::default_cost_grid]
	default_weight: f32,
}

impl ObstacleTracker {
	/// Build the persistent grids from the raw layers and start tracking every clearable
	/// destructible and mineral field of `snapshot`
	pub fn new(
		layers: &TerrainLayers,
		snapshot: &ObstacleSnapshot,
		config: &TerrainConfig,
	) -> TerrainResult<Self> {
		let mut terrain = StaticTerrain::baseline(layers, config)?;
		let mut destructibles = BTreeMap::new();
		for object in snapshot.get_destructibles().iter() {
			if let Some(shape) = terrain.block_destructible(object) {
				destructibles.insert(
					object.get_key(),
					TrackedObstacle::new(object.get_position(), shape),
				);
			}
		}
		for geyser in snapshot.get_geysers().iter() {
			terrain.block_resource(ShapeKey::Rect3x3, geyser.get_position());
		}
		let mut minerals = BTreeMap::new();
		for mineral in snapshot.get_minerals().iter() {
			terrain.block_resource(ShapeKey::Rect2x1, mineral.get_position());
			minerals.insert(
				mineral.get_key(),
				TrackedObstacle::new(mineral.get_position(), ShapeKey::Rect2x1),
			);
		}
		debug!(
			"Tracking {} destructibles and {} minerals",
			destructibles.len(),
			minerals.len()
		);
		let geysers = snapshot
			.get_geysers()
			.iter()
			.map(|g| g.get_position())
			.collect();
		Ok(ObstacleTracker {
			terrain,
			destructibles,
			minerals,
			geysers,
			default_weight: config.get_default_weight(),
		})
	}
	/// Get a reference to the grid where destructibles block their footprint
	pub fn get_pathing(&self) -> &PathingGrid {
		self.terrain.get_pathing()
	}
	/// Get a reference to the grid where destructibles are treated as cleared
	pub fn get_pathing_cleared(&self) -> &PathingGrid {
		self.terrain.get_pathing_cleared()
	}
	/// Get a reference to a grid variant
	pub fn get_variant(&self, variant: GridVariant) -> &PathingGrid {
		self.terrain.get_variant(variant)
	}
	/// Get a reference to the tracked destructibles
	pub fn get_destructibles(&self) -> &BTreeMap<PositionKey, TrackedObstacle> {
		&self.destructibles
	}
	/// Get a reference to the tracked mineral fields
	pub fn get_minerals(&self) -> &BTreeMap<PositionKey, TrackedObstacle> {
		&self.minerals
	}
	pub fn get_default_weight(&self) -> f32 {
		self.default_weight
	}
	/// Open the footprint of every tracked destructible or mineral field missing from the live
	/// lists. Keys which were never tracked are ignored, so calling this repeatedly with the
	/// same snapshot is a no-op
	pub fn reconcile(
		&mut self,
		live_destructibles: &[TerrainObject],
		live_minerals: &[TerrainObject],
	) -> ReconcileReport {
		let live: BTreeSet<PositionKey> =
			live_destructibles.iter().map(|d| d.get_key()).collect();
		let gone = missing_keys(&self.destructibles, &live);
		let mut report = ReconcileReport::default();
		for key in gone.iter() {
			if let Some(tracked) = self.destructibles.remove(key) {
				debug!(
					"Destructible at {:?} is gone, opening {:?}",
					tracked.get_position(),
					tracked.get_shape()
				);
				self.terrain
					.clear_destructible(tracked.get_shape(), tracked.get_position());
				report.destructibles_removed += 1;
			}
		}
		let live: BTreeSet<PositionKey> = live_minerals.iter().map(|m| m.get_key()).collect();
		let gone = missing_keys(&self.minerals, &live);
		for key in gone.iter() {
			if let Some(tracked) = self.minerals.remove(key) {
				debug!("Mineral field at {:?} is depleted", tracked.get_position());
				self.terrain
					.clear_resource(tracked.get_shape(), tracked.get_position());
				report.minerals_removed += 1;
			}
		}
		if !report.is_empty() {
			self.restamp_standing();
		}
		report
	}
	/// Reconcile against `snapshot` only when its object counts disagree with what is tracked.
	/// Used as a safety net for callers which skipped [ObstacleTracker::reconcile]
	pub fn reconcile_if_stale(&mut self, snapshot: &ObstacleSnapshot) -> ReconcileReport {
		let live_destructibles = snapshot
			.get_destructibles()
			.iter()
			.filter(|d| !is_non_clearable(d.get_type_name()))
			.count();
		if live_destructibles != self.destructibles.len()
			|| snapshot.get_minerals().len() != self.minerals.len()
		{
			warn!(
				"Stale obstacles, destructibles {} live {} tracked, minerals {} live {} tracked",
				live_destructibles,
				self.destructibles.len(),
				snapshot.get_minerals().len(),
				self.minerals.len()
			);
			self.reconcile(snapshot.get_destructibles(), snapshot.get_minerals())
		} else {
			ReconcileReport::default()
		}
	}
	/// A grid variant with every standing structure stamped in. The persistent grids are only
	/// touched when `snapshot` reveals missed removals
	pub fn pathing_with_structures(
		&mut self,
		snapshot: &ObstacleSnapshot,
		own_structures: &[Structure],
		enemy_structures: &[Structure],
		variant: GridVariant,
	) -> PathingGrid {
		self.reconcile_if_stale(snapshot);
		apply_structures(self.get_variant(variant), own_structures, enemy_structures)
	}
	/// Build a fresh [CostGrid] from a grid variant with every standing structure stamped in
	pub fn cost_grid(
		&mut self,
		snapshot: &ObstacleSnapshot,
		own_structures: &[Structure],
		enemy_structures: &[Structure],
		variant: GridVariant,
		weight: f32,
	) -> CostGrid {
		let grid =
			self.pathing_with_structures(snapshot, own_structures, enemy_structures, variant);
		build_cost_grid(&grid, weight)
	}
	/// [ObstacleTracker::cost_grid] using the configured default weight
	pub fn default_cost_grid(
		&mut self,
		snapshot: &ObstacleSnapshot,
		own_structures: &[Structure],
		enemy_structures: &[Structure],
		variant: GridVariant,
	) -> CostGrid {
		let weight = self.default_weight;
		self.cost_grid(snapshot, own_structures, enemy_structures, variant, weight)
	}
	/// Opening a footprint may have opened cells shared with an object still standing, stamp
	/// every standing object back in
	fn restamp_standing(&mut self) {
		for tracked in self.destructibles.values() {
			self.terrain
				.restore_destructible(tracked.get_shape(), tracked.get_position());
		}
		for geyser in self.geysers.iter() {
			self.terrain.block_resource(ShapeKey::Rect3x3, *geyser);
		}
		for tracked in self.minerals.values() {
			self.terrain
				.block_resource(tracked.get_shape(), tracked.get_position());
		}
	}
}

/// Keys of `tracked` absent from `live`
fn missing_keys(
	tracked: &BTreeMap<PositionKey, TrackedObstacle>,
	live: &BTreeSet<PositionKey>,
) -> Vec<PositionKey> {
	tracked
		.keys()
		.filter(|key| !live.contains(key))
		.cloned()
		.collect()
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	/// An open 48x48 map
	fn layers() -> TerrainLayers {
		TerrainLayers::new(
			PathingGrid::new(48, 48, true),
			PathingGrid::new(48, 48, false),
			HeightGrid::new(48, 48, 0.0),
			PlayableArea::full((48, 48)),
			"Test",
		)
		.unwrap()
	}
	/// A 6x6 rock, a diagonal debris, two minerals and a geyser
	fn snapshot() -> ObstacleSnapshot {
		ObstacleSnapshot::new(
			vec![
				TerrainObject::new("DestructibleRockEx16x6", Vec2::new(10.0, 10.0)),
				TerrainObject::new("DestructibleRockEx1DiagonalHugeBLUR", Vec2::new(30.0, 30.0)),
			],
			vec![
				TerrainObject::new("MineralField", Vec2::new(5.0, 40.5)),
				TerrainObject::new("MineralField750", Vec2::new(8.0, 40.5)),
			],
			vec![TerrainObject::new("VespeneGeyser", Vec2::new(40.5, 40.5))],
		)
	}
	#[test]
	fn tracks_objects_at_start() {
		let tracker =
			ObstacleTracker::new(&layers(), &snapshot(), &TerrainConfig::default()).unwrap();
		assert_eq!(2, tracker.get_destructibles().len());
		assert_eq!(2, tracker.get_minerals().len());
		let blocked = 48 * 48 - tracker.get_pathing().count_pathable();
		// rounded 6x6 + diagonal + 2 minerals + geyser
		assert_eq!(32 + 42 + 2 * 2 + 9, blocked);
		let blocked_cleared = 48 * 48 - tracker.get_pathing_cleared().count_pathable();
		assert_eq!(2 * 2 + 9, blocked_cleared);
	}
	#[test]
	fn removed_destructible_is_opened() {
		let mut tracker =
			ObstacleTracker::new(&layers(), &snapshot(), &TerrainConfig::default()).unwrap();
		let live = vec![TerrainObject::new(
			"DestructibleRockEx1DiagonalHugeBLUR",
			Vec2::new(30.0, 30.0),
		)];
		let minerals = snapshot().get_minerals().to_vec();
		let report = tracker.reconcile(&live, &minerals);
		assert_eq!(1, report.get_destructibles_removed());
		assert_eq!(0, report.get_minerals_removed());
		assert!(tracker.get_pathing().is_pathable(GridCell::new(10, 10)));
		assert!(!tracker.get_pathing().is_pathable(GridCell::new(30, 30)));
		assert_eq!(1, tracker.get_destructibles().len());
	}
	#[test]
	fn reconcile_is_idempotent() {
		let mut tracker =
			ObstacleTracker::new(&layers(), &snapshot(), &TerrainConfig::default()).unwrap();
		let report = tracker.reconcile(&[], &[]);
		assert_eq!(2, report.get_destructibles_removed());
		assert_eq!(2, report.get_minerals_removed());
		let after_first = tracker.get_pathing().clone();
		let report = tracker.reconcile(&[], &[]);
		assert!(report.is_empty());
		assert_eq!(&after_first, tracker.get_pathing());
	}
	#[test]
	fn depleted_mineral_opens_both_variants() {
		let mut tracker =
			ObstacleTracker::new(&layers(), &snapshot(), &TerrainConfig::default()).unwrap();
		let destructibles = snapshot().get_destructibles().to_vec();
		let minerals = vec![TerrainObject::new("MineralField750", Vec2::new(8.0, 40.5))];
		tracker.reconcile(&destructibles, &minerals);
		for grid in [tracker.get_pathing(), tracker.get_pathing_cleared()] {
			assert!(grid.is_pathable(GridCell::new(4, 40)));
			assert!(grid.is_pathable(GridCell::new(5, 40)));
			assert!(!grid.is_pathable(GridCell::new(7, 40)));
		}
	}
	#[test]
	fn unknown_live_objects_are_ignored() {
		let mut tracker =
			ObstacleTracker::new(&layers(), &snapshot(), &TerrainConfig::default()).unwrap();
		let mut destructibles = snapshot().get_destructibles().to_vec();
		destructibles.push(TerrainObject::new("DestructibleRock4x4", Vec2::new(20.0, 5.0)));
		let minerals = snapshot().get_minerals().to_vec();
		let before = tracker.get_pathing().clone();
		let report = tracker.reconcile(&destructibles, &minerals);
		assert!(report.is_empty());
		assert_eq!(&before, tracker.get_pathing());
	}
	#[test]
	fn variants_only_differ_on_destructibles() {
		let mut tracker =
			ObstacleTracker::new(&layers(), &snapshot(), &TerrainConfig::default()).unwrap();
		let diff = tracker
			.get_pathing()
			.diff_cells(tracker.get_pathing_cleared());
		assert_eq!(32 + 42, diff.len());
		tracker.reconcile(&[], &[]);
		assert!(tracker
			.get_pathing()
			.diff_cells(tracker.get_pathing_cleared())
			.is_empty());
	}
	#[test]
	fn overlapping_resources_survive_destructible_removal() {
		// a mineral sitting on the edge of a 4x4 rock
		let snapshot = ObstacleSnapshot::new(
			vec![TerrainObject::new("DestructibleRock4x4", Vec2::new(20.0, 20.0))],
			vec![TerrainObject::new("MineralField", Vec2::new(22.0, 21.5))],
			vec![],
		);
		let mut tracker =
			ObstacleTracker::new(&layers(), &snapshot, &TerrainConfig::default()).unwrap();
		tracker.reconcile(&[], snapshot.get_minerals());
		assert!(!tracker.get_pathing().is_pathable(GridCell::new(21, 21)));
		assert!(!tracker.get_pathing_cleared().is_pathable(GridCell::new(21, 21)));
		assert!(tracker.get_pathing().is_pathable(GridCell::new(19, 19)));
	}
	#[test]
	fn safety_net_catches_skipped_reconcile() {
		let mut tracker =
			ObstacleTracker::new(&layers(), &snapshot(), &TerrainConfig::default()).unwrap();
		let stale = ObstacleSnapshot::new(
			vec![],
			snapshot().get_minerals().to_vec(),
			snapshot().get_geysers().to_vec(),
		);
		let grid = tracker.pathing_with_structures(&stale, &[], &[], GridVariant::Destructibles);
		assert!(grid.is_pathable(GridCell::new(10, 10)));
		assert!(tracker.get_destructibles().is_empty());
		// counts now agree so nothing happens
		assert!(tracker.reconcile_if_stale(&stale).is_empty());
	}
	#[test]
	fn tracked_shapes_match_stamped_grids() {
		let snapshot = ObstacleSnapshot::new(
			vec![
				TerrainObject::new("DestructibleRockEx16x6", Vec2::new(10.0, 10.0)),
				TerrainObject::new("SomeNewRock", Vec2::new(25.0, 25.0)),
				TerrainObject::new("UnbuildablePlatesDestructible", Vec2::new(35.0, 5.0)),
			],
			vec![TerrainObject::new("MineralField", Vec2::new(5.0, 40.5))],
			vec![TerrainObject::new("VespeneGeyser", Vec2::new(40.5, 40.5))],
		);
		let config = TerrainConfig::default();
		let tracker = ObstacleTracker::new(&layers(), &snapshot, &config).unwrap();
		let terrain = StaticTerrain::build(&layers(), &snapshot, &config).unwrap();
		assert_eq!(terrain.get_pathing(), tracker.get_pathing());
		assert_eq!(terrain.get_pathing_cleared(), tracker.get_pathing_cleared());
		// the marker is never tracked, the unknown rock is a single cell
		assert_eq!(2, tracker.get_destructibles().len());
		let key = PositionKey::from_position(Vec2::new(25.0, 25.0));
		assert_eq!(ShapeKey::Rect1x1, tracker.get_destructibles()[&key].get_shape());
		let key = PositionKey::from_position(Vec2::new(10.0, 10.0));
		assert_eq!(ShapeKey::Rounded6x6, tracker.get_destructibles()[&key].get_shape());
	}
}
