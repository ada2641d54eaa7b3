//! Engine: the per-point interpolant table with build/interpolate over a
//! whole point set.
//!
//! State machine: Uninitialized → Initialized → Built → (interpolate)*.
//! `initialize` sizes the table and fixes the backend, `build` resolves knot
//! values per point and constructs the interpolants, `interpolate` evaluates
//! the table at a shutter time into a caller-owned target snapshot.

use timeblend_geo_core::GeometrySnapshot;

use crate::bri::BarycentricRational;
use crate::config::{knot_times, BackendConfig, BackendKind};
use crate::correspondence::CorrespondenceIndex;
use crate::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
use crate::error::InterpError;
use crate::spline::SplineInterpolant;

/// How `build` resolves "the same point" across knot snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMode {
    /// Point i of every knot snapshot contributes to point i.
    Ordinal,
    /// Points are matched through the identifier attribute and each knot's
    /// correspondence index; a miss falls back to the current point's own
    /// position (zero relative displacement at that knot).
    ByIdentifier,
}

/// One knot handed to `build`: a borrowed snapshot plus, for identifier
/// matching, the correspondence index built from that snapshot.
pub struct Knot<'a, S: GeometrySnapshot> {
    pub snapshot: &'a S,
    pub index: Option<&'a CorrespondenceIndex>,
}

impl<'a, S: GeometrySnapshot> Knot<'a, S> {
    pub fn new(snapshot: &'a S) -> Self {
        Self {
            snapshot,
            index: None,
        }
    }

    pub fn with_index(snapshot: &'a S, index: &'a CorrespondenceIndex) -> Self {
        Self {
            snapshot,
            index: Some(index),
        }
    }
}

/// Summary of one successful build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub points: usize,
    /// Identifier lookups that fell back to the current point's own position.
    pub missing_correspondence: usize,
}

/// Table entry: either three scalar interpolants (one per axis) or one
/// vector spline.
enum PointInterpolant {
    Barycentric([BarycentricRational; 3]),
    Spline(SplineInterpolant),
}

impl PointInterpolant {
    fn evaluate(&self, u: f32) -> [f32; 3] {
        match self {
            Self::Barycentric([x, y, z]) => [x.evaluate(u), y.evaluate(u), z.evaluate(u)],
            Self::Spline(spline) => spline.evaluate(u),
        }
    }

    fn is_finite(&self) -> bool {
        match self {
            Self::Barycentric(axes) => axes.iter().all(BarycentricRational::is_finite),
            Self::Spline(spline) => spline.is_finite(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Setup {
    point_count: usize,
    knot_count: usize,
    config: BackendConfig,
}

/// Orchestrates one interpolant per point of the current snapshot.
///
/// The engine exclusively owns its table. Snapshots and correspondence
/// indices are borrowed read-only for the duration of one call and never
/// retained. Once built, `interpolate` and `evaluate_point` only read engine
/// state, so concurrent readers are safe.
pub struct GeometryInterpolationEngine {
    setup: Option<Setup>,
    table: Vec<PointInterpolant>,
    built: bool,
    sink: Box<dyn DiagnosticSink>,
}

impl Default for GeometryInterpolationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryInterpolationEngine {
    pub fn new() -> Self {
        Self {
            setup: None,
            table: Vec::new(),
            built: false,
            sink: Box::new(LogSink),
        }
    }

    /// Replace the sink invoked on non-fatal build conditions.
    pub fn set_diagnostic_sink(&mut self, sink: Box<dyn DiagnosticSink>) {
        self.sink = sink;
    }

    /// Size the per-point table and fix the backend. Any prior state is
    /// discarded.
    pub fn initialize(
        &mut self,
        point_count: usize,
        knot_count: usize,
        config: BackendConfig,
    ) -> Result<(), InterpError> {
        self.setup = None;
        self.table.clear();
        self.built = false;

        knot_times(knot_count)?;
        if let BackendConfig::Barycentric { order } = config {
            if order >= knot_count {
                return Err(InterpError::InvalidConfiguration(format!(
                    "barycentric order {order} must be below knot count {knot_count}"
                )));
            }
        }
        if point_count < 1 {
            return Err(InterpError::AllocationFailure {
                requested: point_count,
            });
        }
        let mut table = Vec::new();
        table
            .try_reserve_exact(point_count)
            .map_err(|_| InterpError::AllocationFailure {
                requested: point_count,
            })?;
        self.table = table;
        self.setup = Some(Setup {
            point_count,
            knot_count,
            config,
        });
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.setup.is_some()
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    pub fn backend_kind(&self) -> Option<BackendKind> {
        self.setup.as_ref().map(|s| s.config.kind())
    }

    pub fn point_count(&self) -> Option<usize> {
        self.setup.as_ref().map(|s| s.point_count)
    }

    /// Construct one interpolant per point of the current snapshot (the
    /// middle knot) from the resolved value at every knot.
    ///
    /// Any failure aborts the whole build: the engine drops back to the
    /// initialized state with an empty table. On success the engine is built
    /// and reports how many identifier lookups fell back.
    pub fn build<S: GeometrySnapshot>(
        &mut self,
        knots: &[Knot<'_, S>],
        mode: MatchMode,
    ) -> Result<BuildReport, InterpError> {
        let setup = *self.setup.as_ref().ok_or(InterpError::NotInitialized)?;
        self.built = false;
        self.table.clear();

        if knots.len() != setup.knot_count {
            return Err(InterpError::InvalidConfiguration(format!(
                "expected {} knots, got {}",
                setup.knot_count,
                knots.len()
            )));
        }
        let times = knot_times(setup.knot_count)?;
        let current_slot = knots.len() / 2;
        let current = knots[current_slot].snapshot;
        if current.point_count() != setup.point_count {
            return Err(InterpError::MismatchedTopology {
                expected: setup.point_count,
                found: current.point_count(),
            });
        }

        // Decide per knot whether identifier matching is actually usable;
        // anything else degrades to ordinal access and must then line up
        // point-for-point with the current snapshot.
        let mut by_id = vec![false; knots.len()];
        for (g, knot) in knots.iter().enumerate() {
            let usable = mode == MatchMode::ByIdentifier
                && g != current_slot
                && current.has_identifiers()
                && knot.index.is_some_and(CorrespondenceIndex::has_identifiers);
            by_id[g] = usable;
            if !usable && knot.snapshot.point_count() != setup.point_count {
                return Err(InterpError::MismatchedTopology {
                    expected: setup.point_count,
                    found: knot.snapshot.point_count(),
                });
            }
        }

        let mut report = BuildReport {
            points: setup.point_count,
            missing_correspondence: 0,
        };
        let mut values = vec![[0.0f32; 3]; knots.len()];
        for i in 0..setup.point_count {
            let own = current.position(i);
            let id = current.identifier(i);
            for (g, knot) in knots.iter().enumerate() {
                values[g] = if by_id[g] {
                    match id.and_then(|id| knot.index.and_then(|ix| ix.find(id))) {
                        Some(j) => knot.snapshot.position(j),
                        None => {
                            report.missing_correspondence += 1;
                            if let Some(id) = id {
                                self.sink.report(&Diagnostic::MissingCorrespondence {
                                    point: i,
                                    identifier: id,
                                    knot: g,
                                });
                            }
                            own
                        }
                    }
                } else {
                    knot.snapshot.position(i)
                };
            }
            match build_point(setup.config, times, &values) {
                Ok(interpolant) => self.table.push(interpolant),
                Err(err) => {
                    self.table.clear();
                    return Err(err);
                }
            }
        }

        // Validation pass: the built state is earned, not assumed.
        if let Some(point) = self.table.iter().position(|p| !p.is_finite()) {
            self.table.clear();
            return Err(InterpError::NonFiniteInterpolant { point });
        }

        self.built = true;
        Ok(report)
    }

    /// Evaluate every stored interpolant at shutter time `u`, overwriting only
    /// the positions of `target`. Reads engine state only.
    pub fn interpolate<S: GeometrySnapshot>(
        &self,
        u: f32,
        target: &mut S,
    ) -> Result<(), InterpError> {
        if !self.built {
            return Err(InterpError::NotBuilt);
        }
        if target.point_count() != self.table.len() {
            return Err(InterpError::MismatchedTopology {
                expected: self.table.len(),
                found: target.point_count(),
            });
        }
        for (i, interpolant) in self.table.iter().enumerate() {
            target.set_position(i, interpolant.evaluate(u));
        }
        Ok(())
    }

    /// Evaluate a single point's interpolant at `u`.
    ///
    /// Touches no shared mutable state, so callers may fan this out across
    /// point indices in any order or grain; results are identical to a
    /// sequential `interpolate`.
    pub fn evaluate_point(&self, index: usize, u: f32) -> Result<[f32; 3], InterpError> {
        if !self.built {
            return Err(InterpError::NotBuilt);
        }
        self.table
            .get(index)
            .map(|interpolant| interpolant.evaluate(u))
            .ok_or(InterpError::PointIndexOutOfRange {
                index,
                points: self.table.len(),
            })
    }
}

fn build_point(
    config: BackendConfig,
    times: &[f32],
    values: &[[f32; 3]],
) -> Result<PointInterpolant, InterpError> {
    match config {
        BackendConfig::Barycentric { order } => {
            let n = values.len();
            let mut axis = [0.0f32; 5];
            let mut build_axis = |c: usize| -> Result<BarycentricRational, InterpError> {
                for (g, value) in values.iter().enumerate() {
                    axis[g] = value[c];
                }
                BarycentricRational::new(times, &axis[..n], order)
            };
            let x = build_axis(0)?;
            let y = build_axis(1)?;
            let z = build_axis(2)?;
            Ok(PointInterpolant::Barycentric([x, y, z]))
        }
        BackendConfig::Spline { basis } => Ok(PointInterpolant::Spline(
            SplineInterpolant::from_knots(values, basis)?,
        )),
    }
}
