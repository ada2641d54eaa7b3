//! Piecewise vector spline over the fixed, evenly spaced knot times.
//!
//! Bases: constant (hold left), linear, uniform Catmull-Rom with clamped end
//! tangents, and natural cubic (second-derivative continuity via one
//! tridiagonal sweep per component). All bases reproduce knot values at the
//! knot times.

use crate::config::{knot_times, SplineBasis};
use crate::error::InterpError;

/// One 3-vector interpolant over 3 or 5 evenly spaced knots.
#[derive(Clone, Debug)]
pub struct SplineInterpolant {
    basis: SplineBasis,
    times: &'static [f32],
    knots: Vec<[f32; 3]>,
    /// Per-knot second derivatives; used by the natural cubic basis only.
    second_derivatives: Vec<[f32; 3]>,
}

impl SplineInterpolant {
    /// Allocate a spline with zeroed knot values; fill them with `set_knot`.
    /// Knot count must be 3 or 5.
    pub fn new(knot_count: usize, basis: SplineBasis) -> Result<Self, InterpError> {
        let times = knot_times(knot_count)?;
        Ok(Self {
            basis,
            times,
            knots: vec![[0.0; 3]; knot_count],
            second_derivatives: vec![[0.0; 3]; knot_count],
        })
    }

    /// Build directly from a full knot-value slice.
    pub fn from_knots(values: &[[f32; 3]], basis: SplineBasis) -> Result<Self, InterpError> {
        let mut spline = Self::new(values.len(), basis)?;
        for (i, value) in values.iter().enumerate() {
            spline.set_knot(i, *value)?;
        }
        Ok(spline)
    }

    /// Assign the value of one knot position.
    pub fn set_knot(&mut self, index: usize, value: [f32; 3]) -> Result<(), InterpError> {
        if index >= self.knots.len() {
            return Err(InterpError::InvalidConfiguration(format!(
                "knot index {index} out of range for {} knots",
                self.knots.len()
            )));
        }
        self.knots[index] = value;
        if self.basis == SplineBasis::Cubic {
            self.refresh_cubic();
        }
        Ok(())
    }

    pub fn basis(&self) -> SplineBasis {
        self.basis
    }

    pub fn knot_count(&self) -> usize {
        self.knots.len()
    }

    /// Evaluate at normalized time `u`, clamped to the knot range.
    pub fn evaluate(&self, u: f32) -> [f32; 3] {
        let u = u.clamp(0.0, 1.0);
        let (i0, i1, lt) = self.segment(u);
        if i0 == i1 {
            return self.knots[i0];
        }
        match self.basis {
            SplineBasis::Constant => {
                // Hold left; the right knot takes over exactly at its time.
                if lt >= 1.0 {
                    self.knots[i1]
                } else {
                    self.knots[i0]
                }
            }
            SplineBasis::Linear => lerp3(self.knots[i0], self.knots[i1], lt),
            SplineBasis::CatmullRom => self.evaluate_catmull_rom(i0, i1, lt),
            SplineBasis::Cubic => self.evaluate_cubic(i0, i1, u),
        }
    }

    /// Whether every knot value (and derived coefficient) is finite.
    pub fn is_finite(&self) -> bool {
        self.knots.iter().flatten().all(|v| v.is_finite())
            && self.second_derivatives.iter().flatten().all(|v| v.is_finite())
    }

    /// Find the segment [i, i+1] containing `u` and the local parameter in it.
    /// Returns (i, i, 0) at or beyond the last knot.
    fn segment(&self, u: f32) -> (usize, usize, f32) {
        let n = self.times.len();
        if u <= self.times[0] {
            return (0, 0, 0.0);
        }
        if u >= self.times[n - 1] {
            return (n - 1, n - 1, 0.0);
        }
        for i in 0..n - 1 {
            let t0 = self.times[i];
            let t1 = self.times[i + 1];
            if u >= t0 && u <= t1 {
                return (i, i + 1, (u - t0) / (t1 - t0));
            }
        }
        (n - 1, n - 1, 0.0)
    }

    /// Cubic Hermite on the segment with central-difference tangents; end
    /// tangents are clamped by duplicating the boundary knots.
    fn evaluate_catmull_rom(&self, i0: usize, i1: usize, lt: f32) -> [f32; 3] {
        let n = self.knots.len();
        let prev = if i0 == 0 { 0 } else { i0 - 1 };
        let next = if i1 + 1 >= n { n - 1 } else { i1 + 1 };

        let t = lt;
        let t2 = t * t;
        let t3 = t2 * t;
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        let mut out = [0.0f32; 3];
        for c in 0..3 {
            let p0 = self.knots[i0][c];
            let p1 = self.knots[i1][c];
            let m0 = 0.5 * (p1 - self.knots[prev][c]);
            let m1 = 0.5 * (self.knots[next][c] - p0);
            out[c] = h00 * p0 + h10 * m0 + h01 * p1 + h11 * m1;
        }
        out
    }

    /// Natural cubic spline evaluation from precomputed second derivatives.
    fn evaluate_cubic(&self, i0: usize, i1: usize, u: f32) -> [f32; 3] {
        let t0 = self.times[i0];
        let t1 = self.times[i1];
        let h = t1 - t0;
        let a = (t1 - u) / h;
        let b = (u - t0) / h;
        let h2 = h * h / 6.0;

        let mut out = [0.0f32; 3];
        for c in 0..3 {
            let y0 = self.knots[i0][c];
            let y1 = self.knots[i1][c];
            let y2_0 = self.second_derivatives[i0][c];
            let y2_1 = self.second_derivatives[i1][c];
            out[c] = a * y0 + b * y1 + ((a * a * a - a) * y2_0 + (b * b * b - b) * y2_1) * h2;
        }
        out
    }

    /// Recompute second derivatives for the natural cubic basis. One
    /// tridiagonal forward sweep plus back substitution per component;
    /// boundary second derivatives stay zero.
    fn refresh_cubic(&mut self) {
        let n = self.knots.len();
        let t = self.times;
        for c in 0..3 {
            let mut y2 = vec![0.0f32; n];
            let mut u = vec![0.0f32; n - 1];
            for i in 1..n - 1 {
                let y_prev = self.knots[i - 1][c];
                let y_here = self.knots[i][c];
                let y_next = self.knots[i + 1][c];
                let sig = (t[i] - t[i - 1]) / (t[i + 1] - t[i - 1]);
                let p = sig * y2[i - 1] + 2.0;
                y2[i] = (sig - 1.0) / p;
                let mut ui = (y_next - y_here) / (t[i + 1] - t[i])
                    - (y_here - y_prev) / (t[i] - t[i - 1]);
                ui = (6.0 * ui / (t[i + 1] - t[i - 1]) - sig * u[i - 1]) / p;
                u[i] = ui;
            }
            for i in (1..n - 1).rev() {
                y2[i] = y2[i] * y2[i + 1] + u[i];
            }
            for i in 0..n {
                self.second_derivatives[i][c] = y2[i];
            }
        }
    }
}

fn lerp3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}
