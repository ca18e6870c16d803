//! Measure ramp and vision blocker extraction
//!
//! Map is 200x200 with unbuildable strips running across height steps
//!

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use terrain_grid_plugin::prelude::*;

/// A map with a terrace every 20 rows and an unbuildable strip across each step
fn prepare_layers() -> TerrainLayers {
	let mut placement = PathingGrid::new(200, 200, true);
	let mut heights = HeightGrid::new(200, 200, 0.0);
	for y in 0..200 {
		for x in 0..200 {
			let cell = GridCell::new(x, y);
			heights.set_cell_value((y / 20) as f32, cell);
			if (y % 20 == 19 || y % 20 == 0) && x % 40 < 8 {
				placement.set_cell_value(false, cell);
			}
			if x % 50 < 3 && y % 50 < 3 {
				placement.set_cell_value(false, cell);
			}
		}
	}
	TerrainLayers::new(
		PathingGrid::new(200, 200, true),
		placement,
		heights,
		PlayableArea::new(2, 2, 196, 196),
		"Bench",
	)
	.unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
	let mut group = c.benchmark_group("analysis");
	group.significance_level(0.05).sample_size(50);
	let layers = prepare_layers();
	group.bench_function("extract_ramps", |b| {
		b.iter(|| extract_ramps(black_box(&layers), &[], Connectivity::Eight))
	});
	group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
