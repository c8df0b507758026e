#![doc = include_str!("../README.md")]

pub use crate::angle::{AngleEntry, AngleTable, bearing};
pub use crate::calculator::DistanceCalculator;
pub use crate::distance::{EARTH_RADIUS_KM, haversine_km, min_distance_km};
pub use crate::error::{Error, Result, Warning};
pub use crate::ring::RingGeometry;
pub use crate::segment::{Segment, intersects};
pub use crate::types::*;

mod angle;
mod calculator;
mod distance;
mod error;
#[cfg(feature = "mkad")]
pub mod mkad;
mod ring;
mod segment;
mod types;
