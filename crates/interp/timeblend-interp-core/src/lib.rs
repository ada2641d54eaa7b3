//! TimeBlend interpolation core (renderer-agnostic).
//!
//! Builds, for every point of a current geometry snapshot, a continuous-time
//! position function from 3 or 5 sparse time snapshots (knots) and evaluates
//! it at any normalized shutter time in [0,1] to synthesize motion-blur
//! samples. Two interpolant families: Floater-Hormann barycentric rational
//! (one scalar interpolant per axis) and piecewise splines (one vector
//! interpolant per point). Correspondence across snapshots with unstable
//! point ordering goes through the stable integer identifier attribute.
//!
//! Snapshot loading, shutter remapping, and renderer registration belong to
//! the driver; this crate only consumes the `GeometrySnapshot` contract.

pub mod bri;
pub mod config;
pub mod correspondence;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod spline;

pub use bri::BarycentricRational;
pub use config::{knot_times, BackendConfig, BackendKind, SplineBasis, KNOT_TIMES_3, KNOT_TIMES_5};
pub use correspondence::CorrespondenceIndex;
pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink, NullSink};
pub use engine::{BuildReport, GeometryInterpolationEngine, Knot, MatchMode};
pub use error::InterpError;
pub use spline::SplineInterpolant;
pub use timeblend_geo_core::{GeoError, GeometrySnapshot, PointSet};
