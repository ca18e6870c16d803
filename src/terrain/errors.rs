//! Errors raised while constructing or querying the terrain model
//!

use thiserror::Error;

/// Failures of terrain construction, file loading and queries
#[derive(Error, Debug)]
pub enum TerrainError {
	/// A raw layer does not share the dimensions of the pathing layer
	#[error("Layer `{layer}` has dimensions {found:?}, expected {expected:?}")]
	LayerDimensionMismatch {
		/// Name of the offending layer
		layer: &'static str,
		/// Dimensions of the pathing layer
		expected: (usize, usize),
		/// Dimensions of the offending layer
		found: (usize, usize),
	},
	/// A grid was requested with a zero length side
	#[error("Grid dimensions must be non-zero, found {0:?}")]
	ZeroSizedGrid((usize, usize)),
	/// The number of supplied values cannot fill a grid of the given dimensions
	#[error("A grid of {dimensions:?} requires {expected} values, found {found}")]
	ValueCountMismatch {
		/// Requested `(width, height)`
		dimensions: (usize, usize),
		/// `width * height`
		expected: usize,
		/// Number of values supplied
		found: usize,
	},
	/// Nearest-point search over an empty candidate set
	#[error("Cannot find the closest point of an empty candidate set")]
	EmptyCandidates,
	/// A terrain file could not be read
	#[error("Failed reading terrain file: {0}")]
	Io(#[from] std::io::Error),
	/// A value within a terrain file could not be parsed
	#[error("Failed parsing terrain value `{0}`")]
	Parse(String),
	/// Rows of a terrain file have differing lengths
	#[error("Row {row} has {found} columns, expected {expected}")]
	RaggedRow {
		/// Index of the offending row
		row: usize,
		/// Columns of the first row
		expected: usize,
		/// Columns of the offending row
		found: usize,
	},
	#[cfg(feature = "ron")]
	/// A `ron` config could not be deserialized
	#[error("Failed deserializing terrain config: {0}")]
	Ron(#[from] ron::error::SpannedError),
	#[cfg(feature = "csv")]
	/// A CSV layer could not be read
	#[error("Failed reading CSV layer: {0}")]
	Csv(#[from] csv::Error),
	#[cfg(feature = "heightmap")]
	/// A heightmap image could not be opened
	#[error("Failed opening heightmap: {0}")]
	Heightmap(String),
}

/// Result type alias for terrain operations
pub type TerrainResult<T> = Result<T, TerrainError>;
