//! Settings of the terrain model and the table of per-map pathing fixes
//!

use crate::prelude::*;

/// Forces a set of cells to a pathing value on every map whose display name contains
/// `map_name_fragment`. Map variants share a base name so the match is on a substring
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct MapOverride {
	/// Fragment of the map display name
	map_name_fragment: String,
	/// Cells to overwrite
	cells: Vec<GridCell>,
	/// Value written into each cell
	pathable: bool,
}

impl MapOverride {
	/// Create a new instance of [MapOverride]
	pub fn new(map_name_fragment: &str, cells: Vec<GridCell>, pathable: bool) -> Self {
		MapOverride {
			map_name_fragment: map_name_fragment.to_string(),
			cells,
			pathable,
		}
	}
	/// Whether the override applies to the map called `map_name`
	pub fn matches(&self, map_name: &str) -> bool {
		map_name.contains(&self.map_name_fragment)
	}
	pub fn get_map_name_fragment(&self) -> &str {
		&self.map_name_fragment
	}
	pub fn get_cells(&self) -> &[GridCell] {
		&self.cells
	}
	pub fn is_pathable(&self) -> bool {
		self.pathable
	}
}

/// Tuning of the terrain model
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(default)
)]
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainConfig {
	/// Weight of pathable cells when a caller builds a [CostGrid] without choosing one
	default_weight: f32,
	/// Adjacency used to group ramp cells
	ramp_connectivity: Connectivity,
	/// Per-map fixes applied to the baseline grid
	map_overrides: Vec<MapOverride>,
}

impl Default for TerrainConfig {
	fn default() -> Self {
		TerrainConfig {
			default_weight: DEFAULT_WEIGHT,
			ramp_connectivity: Connectivity::Eight,
			map_overrides: builtin_map_overrides(),
		}
	}
}

impl TerrainConfig {
	/// Create a new instance of [TerrainConfig]
	pub fn new(
		default_weight: f32,
		ramp_connectivity: Connectivity,
		map_overrides: Vec<MapOverride>,
	) -> Self {
		TerrainConfig {
			default_weight,
			ramp_connectivity,
			map_overrides,
		}
	}
	pub fn get_default_weight(&self) -> f32 {
		self.default_weight
	}
	pub fn get_ramp_connectivity(&self) -> Connectivity {
		self.ramp_connectivity
	}
	pub fn get_map_overrides(&self) -> &[MapOverride] {
		&self.map_overrides
	}
	/// The overrides matching a map name
	pub fn overrides_for<'a>(&'a self, map_name: &'a str) -> impl Iterator<Item = &'a MapOverride> {
		self.map_overrides.iter().filter(move |o| o.matches(map_name))
	}
	/// From a `ron` file generate the [TerrainConfig]
	#[cfg(feature = "ron")]
	pub fn from_ron(path: &str) -> TerrainResult<Self> {
		let file = std::fs::File::open(path)?;
		let config: TerrainConfig = ron::de::from_reader(file)?;
		Ok(config)
	}
	/// Parse a [TerrainConfig] from a `ron` string
	#[cfg(feature = "ron")]
	pub fn from_ron_str(data: &str) -> TerrainResult<Self> {
		Ok(ron::from_str(data)?)
	}
}

/// Tiles the client wrongly reports as unpathable on specific maps
fn builtin_map_overrides() -> Vec<MapOverride> {
	vec![
		MapOverride::new(
			"Acropolis",
			vec![GridCell::new(33, 116), GridCell::new(142, 59)],
			true,
		),
		MapOverride::new(
			"Lightshade",
			vec![
				GridCell::new(136, 39),
				GridCell::new(136, 40),
				GridCell::new(47, 124),
				GridCell::new(47, 125),
			],
			true,
		),
	]
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn overrides_match_on_substring() {
		let config = TerrainConfig::default();
		let matched: Vec<&MapOverride> = config.overrides_for("Lightshade LE").collect();
		assert_eq!(1, matched.len());
		assert_eq!("Lightshade", matched[0].get_map_name_fragment());
		assert_eq!(0, config.overrides_for("Some Other Map").count());
	}
	#[test]
	fn default_config() {
		let config = TerrainConfig::default();
		assert_eq!(DEFAULT_WEIGHT, config.get_default_weight());
		assert_eq!(Connectivity::Eight, config.get_ramp_connectivity());
	}
	#[test]
	#[cfg(feature = "ron")]
	fn config_from_ron_str() {
		let data = r#"(
			default_weight: 2.5,
			ramp_connectivity: Four,
			map_overrides: [
				(map_name_fragment: "Test", cells: [((1, 2))], pathable: false),
			],
		)"#;
		let config = TerrainConfig::from_ron_str(data).unwrap();
		assert_eq!(2.5, config.get_default_weight());
		assert_eq!(Connectivity::Four, config.get_ramp_connectivity());
		assert_eq!(
			&[GridCell::new(1, 2)],
			config.get_map_overrides()[0].get_cells()
		);
	}
	#[test]
	#[cfg(feature = "ron")]
	fn config_missing_fields_use_defaults() {
		let config = TerrainConfig::from_ron_str("(default_weight: 4.0)").unwrap();
		assert_eq!(4.0, config.get_default_weight());
		assert_eq!(Connectivity::Eight, config.get_ramp_connectivity());
	}
}
