//! This is a plugin for Bevy game engine to maintain the terrain model used by an RTS agent:
//! pathable occupancy grids kept in sync with a live world, cost grids derived from them,
//! spatial queries over those grids and a one-shot extraction of ramps and vision blockers
//!

pub mod bundle;
pub mod plugin;
pub mod terrain;

pub mod prelude;
