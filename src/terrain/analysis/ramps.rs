//! Ramps and vision blockers are both pathable terrain where nothing can be built. A ramp climbs
//! between height levels while a vision blocker is flat:
//!
//! ```text
//!  heights                 candidates
//!  _______________         _______________
//! |_1_|_1_|_2_|_3_|       |___|_r_|_r_|___|
//! |_1_|_1_|_2_|_3_|       |___|_r_|_r_|___|
//! |_1_|_1_|_1_|_1_|       |_v_|___|___|___|
//! ```
//!
//! Destructibles sitting on top of a ramp would hide it, so their footprints are forced open
//! before candidates are collected. Ramp cells are grouped into connected components, vision
//! blocker cells are reported as one flat set.
//!

use std::collections::BTreeSet;

use crate::prelude::*;
use bevy::prelude::*;

/// A connected set of ramp cells
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct Ramp {
	/// Cells of the ramp ordered by `(x, y)`
	cells: Vec<GridCell>,
}

impl Ramp {
	/// Create a new instance of [Ramp]
	pub fn new(cells: Vec<GridCell>) -> Self {
		Ramp { cells }
	}
	pub fn cells(&self) -> &[GridCell] {
		&self.cells
	}
	/// Number of cells in the ramp
	pub fn len(&self) -> usize {
		self.cells.len()
	}
	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}
	/// Mean position of the ramp cells, [None] for an empty ramp
	pub fn centroid(&self) -> Option<Vec2> {
		if self.cells.is_empty() {
			return None;
		}
		let sum = self
			.cells
			.iter()
			.fold(Vec2::ZERO, |acc, cell| acc + Vec2::from(*cell));
		Some(sum / self.cells.len() as f32)
	}
	/// Whether `cell` is part of the ramp
	pub fn contains(&self, cell: &GridCell) -> bool {
		self.cells.binary_search(cell).is_ok()
	}
}

/// Ramps and vision blockers of a map, computed once per session
#[derive(Component, Clone, Debug, Default, PartialEq)]
pub struct MapTopology {
	/// Connected groups of ramp cells
	ramps: Vec<Ramp>,
	/// Every vision blocker cell
	vision_blockers: BTreeSet<GridCell>,
}

impl MapTopology {
	/// Create a new instance of [MapTopology]
	pub fn new(ramps: Vec<Ramp>, vision_blockers: BTreeSet<GridCell>) -> Self {
		MapTopology {
			ramps,
			vision_blockers,
		}
	}
	pub fn get_ramps(&self) -> &[Ramp] {
		&self.ramps
	}
	pub fn get_vision_blockers(&self) -> &BTreeSet<GridCell> {
		&self.vision_blockers
	}
	/// The ramp containing `cell`
	pub fn ramp_at(&self, cell: &GridCell) -> Option<&Ramp> {
		self.ramps.iter().find(|ramp| ramp.contains(cell))
	}
}

/// Classify every pathable, unbuildable cell of the playable area into ramps and vision
/// blockers. Every destructible in `destructibles` is opened first, whether clearable or not
pub fn extract_ramps(
	layers: &TerrainLayers,
	destructibles: &[TerrainObject],
	connectivity: Connectivity,
) -> MapTopology {
	let mut pathing = layers.get_pathing().clone();
	for object in destructibles.iter() {
		let shape = destructible_footprint_or_single(object.get_type_name());
		stamp_footprint(&mut pathing, shape, object.get_position(), true);
	}
	let playable = layers.get_playable_area();
	let placement = layers.get_placement();
	let heights = layers.get_heights();
	let mut ramp_cells = BTreeSet::new();
	let mut vision_blockers = BTreeSet::new();
	for (cell, pathable) in pathing.get().iter_cells() {
		if !pathable || placement.is_pathable(cell) || !playable.contains(cell) {
			continue;
		}
		if heights.is_flat_around(cell) {
			vision_blockers.insert(cell);
		} else {
			ramp_cells.insert(cell);
		}
	}
	let ramps = group_cells(ramp_cells, connectivity, layers.get_dimensions());
	info!(
		"Extracted {} ramps and {} vision blocker cells from `{}`",
		ramps.len(),
		vision_blockers.len(),
		layers.get_map_name()
	);
	MapTopology::new(ramps, vision_blockers)
}

/// Split `cells` into connected components, each explored wave by wave from its lowest cell
fn group_cells(
	mut cells: BTreeSet<GridCell>,
	connectivity: Connectivity,
	dimensions: (usize, usize),
) -> Vec<Ramp> {
	let mut ramps = Vec::new();
	while let Some(seed) = cells.pop_first() {
		let mut component = vec![seed];
		let mut frontier = vec![seed];
		while !frontier.is_empty() {
			let mut next = Vec::new();
			for cell in frontier.iter() {
				for neighbour in connectivity.get_cell_neighbours(*cell, dimensions) {
					if cells.remove(&neighbour) {
						component.push(neighbour);
						next.push(neighbour);
					}
				}
			}
			frontier = next;
		}
		component.sort();
		ramps.push(Ramp::new(component));
	}
	ramps
}
