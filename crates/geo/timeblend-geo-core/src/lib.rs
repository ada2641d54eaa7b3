//! TimeBlend geometry core (renderer-agnostic).
//!
//! Defines the snapshot contract consumed by the interpolation engine and a
//! concrete serde-enabled point set used by drivers and tests. Snapshot
//! loading, bounding boxes, and renderer registration stay with the driver.

mod snapshot;

pub use snapshot::{GeoError, GeometrySnapshot, PointSet};
