//! Measure building a cost grid with structures stamped in
//!
//! Map is 200x200 with randomly placed rocks and structures
//!

use bevy::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use terrain_grid_plugin::prelude::*;

/// Create the tracker and the structures of both players before benchmarking
fn prepare(seed: u64) -> (ObstacleTracker, ObstacleSnapshot, Vec<Structure>, Vec<Structure>) {
	let mut rng = StdRng::seed_from_u64(seed);
	let layers = TerrainLayers::new(
		PathingGrid::new(200, 200, true),
		PathingGrid::new(200, 200, true),
		HeightGrid::new(200, 200, 0.0),
		PlayableArea::full((200, 200)),
		"Bench",
	)
	.unwrap();
	let destructibles = (0..40)
		.map(|_| {
			TerrainObject::new(
				"DestructibleRock6x6",
				Vec2::new(rng.random_range(0..200) as f32, rng.random_range(0..200) as f32),
			)
		})
		.collect();
	let snapshot = ObstacleSnapshot::new(destructibles, vec![], vec![]);
	let tracker = ObstacleTracker::new(&layers, &snapshot, &TerrainConfig::default()).unwrap();
	let mut structures = |count: usize| -> Vec<Structure> {
		(0..count)
			.map(|_| {
				let size = [2, 3, 5][rng.random_range(0..3)];
				Structure::new(
					"Structure",
					Vec2::new(
						rng.random_range(0..200) as f32 + 0.5,
						rng.random_range(0..200) as f32 + 0.5,
					),
					size,
				)
			})
			.collect()
	};
	let own = structures(60);
	let enemy = structures(60);
	(tracker, snapshot, own, enemy)
}

pub fn criterion_benchmark(c: &mut Criterion) {
	let mut group = c.benchmark_group("grid_build");
	group.significance_level(0.05).sample_size(100);
	let (tracker, snapshot, own, enemy) = prepare(1);
	group.bench_function("build_cost_grid", |b| {
		b.iter(|| {
			let mut tracker = tracker.clone();
			tracker.cost_grid(
				black_box(&snapshot),
				black_box(&own),
				black_box(&enemy),
				GridVariant::Destructibles,
				1.0,
			)
		})
	});
	group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
