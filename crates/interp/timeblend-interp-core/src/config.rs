//! Backend selection and the fixed knot timing tables.

use serde::{Deserialize, Serialize};

use crate::error::InterpError;

/// Knot times for 3-knot interpolation, evenly spaced over the normalized
/// shutter interval. The current snapshot sits at the middle knot.
pub const KNOT_TIMES_3: [f32; 3] = [0.0, 0.5, 1.0];

/// Knot times for 5-knot interpolation.
pub const KNOT_TIMES_5: [f32; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Which interpolant family the engine stores per point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendKind {
    /// Three scalar barycentric-rational interpolants per point, one per axis.
    Barycentric,
    /// One vector spline interpolant per point.
    Spline,
}

/// Bases supported by the spline backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplineBasis {
    /// Hold the left knot value.
    Constant,
    /// Segment-wise linear blend.
    Linear,
    /// Uniform Catmull-Rom with clamped end tangents.
    CatmullRom,
    /// Natural cubic spline.
    Cubic,
}

/// Per-backend construction parameters, fixed at `initialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendConfig {
    /// Floater-Hormann barycentric rational; `order` must stay below the knot
    /// count.
    Barycentric { order: usize },
    Spline { basis: SplineBasis },
}

impl BackendConfig {
    pub fn kind(&self) -> BackendKind {
        match self {
            Self::Barycentric { .. } => BackendKind::Barycentric,
            Self::Spline { .. } => BackendKind::Spline,
        }
    }
}

/// The fixed knot-time table for a supported knot count.
pub fn knot_times(knot_count: usize) -> Result<&'static [f32], InterpError> {
    match knot_count {
        3 => Ok(&KNOT_TIMES_3),
        5 => Ok(&KNOT_TIMES_5),
        other => Err(InterpError::InvalidConfiguration(format!(
            "unsupported knot count {other}; expected 3 or 5"
        ))),
    }
}
