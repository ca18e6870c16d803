//! `use terrain_grid_plugin::prelude::*;` to import common structures and methods
//!

#[doc(hidden)]
pub use crate::terrain::{
	analysis::{ramps::*, spatial_query::*, *},
	config::*,
	errors::*,
	grids::{cost_grid::*, height_grid::*, pathing_grid::*, *},
	obstacles::{footprint::*, obstacle_tracker::*, static_terrain::*, structure_overlay::*, *},
	utilities::*,
	*,
};

#[doc(hidden)]
pub use crate::{
	bundle::*,
	plugin::{obstacle_layer::*, *},
};
