//! Read-only analysis built on top of the grids: radius queries used by unit micro and the
//! one-shot ramp/vision-blocker extraction run when a session starts
//!

pub mod ramps;
pub mod spatial_query;
