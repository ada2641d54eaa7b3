//! Error taxonomy for the interpolation core.
//!
//! Every failure is returned as an explicit value from the operation that
//! detects it; the only swallowed condition is the documented correspondence
//! fallback, which is surfaced through the diagnostic sink instead.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterpError {
    /// Bad knot count, interpolation order at or above the knot count, or
    /// mismatched construction inputs. Detected at construction/initialize
    /// time.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Internal storage could not be sized for the requested point count.
    #[error("allocation failure: cannot size interpolant table for {requested} points")]
    AllocationFailure { requested: usize },

    /// `build` was invoked before `initialize`.
    #[error("engine is not initialized")]
    NotInitialized,

    /// `interpolate` was invoked before a successful `build`.
    #[error("engine is not built")]
    NotBuilt,

    /// Point counts differ where ordinal access would read past a boundary.
    #[error("mismatched topology: expected {expected} points, found {found}")]
    MismatchedTopology { expected: usize, found: usize },

    /// A point index outside the engine's table was requested.
    #[error("point index {index} out of range for {points} points")]
    PointIndexOutOfRange { index: usize, points: usize },

    /// The post-build validation pass found a non-finite interpolant; the
    /// engine stays in the initialized state.
    #[error("non-finite interpolant for point {point}")]
    NonFiniteInterpolant { point: usize },
}
