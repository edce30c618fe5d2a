//! Spatial query utilities.

pub mod queries;

pub use queries::{haversine_distance_m, EARTH_RADIUS_M};
