//! Floater-Hormann barycentric rational interpolation.
//!
//! From "Barycentric Rational Interpolation with no Poles and High Rates of
//! Approximation" by Michael S. Floater and Kai Hormann. The rational form
//! has no poles on the real line and behaves well with a small number of
//! samples, which is exactly the 3-or-5-knot regime motion paths are built
//! from. Weight computation uses the clamped, bounds-checked formulation.

use crate::error::InterpError;

/// One scalar-valued interpolant over a fixed knot set.
///
/// Built exactly once; evaluation reproduces knot values exactly and costs
/// O(n) elsewhere. Construction is O(n·d²).
#[derive(Clone, Debug)]
pub struct BarycentricRational {
    times: Vec<f32>,
    values: Vec<f32>,
    weights: Vec<f32>,
    order: usize,
}

impl BarycentricRational {
    /// Compute weights for `times.len()` knots with interpolation order
    /// `order < times.len()`. `order == times.len() - 1` reproduces the
    /// unique polynomial interpolant of the knots.
    pub fn new(times: &[f32], values: &[f32], order: usize) -> Result<Self, InterpError> {
        let n = times.len();
        if n < 1 {
            return Err(InterpError::InvalidConfiguration(
                "barycentric interpolant needs at least one knot".into(),
            ));
        }
        if values.len() != n {
            return Err(InterpError::InvalidConfiguration(format!(
                "knot time count {n} does not match value count {}",
                values.len()
            )));
        }
        if order >= n {
            return Err(InterpError::InvalidConfiguration(format!(
                "interpolation order {order} must be below knot count {n}"
            )));
        }

        let d = order;
        let mut weights = vec![0.0f32; n];
        for (k, weight) in weights.iter_mut().enumerate() {
            let imin = k.saturating_sub(d);
            let imax = if k >= n - d { n - d - 1 } else { k };
            let mut sign = if imin % 2 == 1 { -1.0f32 } else { 1.0f32 };
            let mut sum = 0.0f32;
            for i in imin..=imax {
                let jmax = (i + d).min(n - 1);
                let mut term = 1.0f32;
                for j in i..=jmax {
                    if j == k {
                        continue;
                    }
                    term *= times[k] - times[j];
                }
                sum += sign / term;
                sign = -sign;
            }
            *weight = sum;
        }

        Ok(Self {
            times: times.to_vec(),
            values: values.to_vec(),
            weights,
            order,
        })
    }

    pub fn knot_count(&self) -> usize {
        self.times.len()
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Evaluate at normalized time `u`.
    ///
    /// Exactly on a knot time the knot value is returned directly, which both
    /// avoids the division by zero and satisfies the knot-reproduction
    /// invariant.
    pub fn evaluate(&self, u: f32) -> f32 {
        let mut p = 0.0f32;
        let mut q = 0.0f32;
        for i in 0..self.times.len() {
            let t = u - self.times[i];
            if t == 0.0 {
                return self.values[i];
            }
            let temp = self.weights[i] / t;
            p += self.values[i] * temp;
            q += temp;
        }
        p / q
    }

    /// Whether every weight and knot value is finite. The engine's validation
    /// pass gates the built state on this.
    pub fn is_finite(&self) -> bool {
        self.weights.iter().all(|w| w.is_finite()) && self.values.iter().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_knot_is_a_constant_function() {
        let bri = BarycentricRational::new(&[0.0], &[4.5], 0).unwrap();
        assert_eq!(bri.evaluate(0.0), 4.5);
        assert_eq!(bri.evaluate(0.7), 4.5);
    }

    #[test]
    fn full_order_weights_for_three_knots() {
        // With d = n-1 the weights reduce to the classic polynomial
        // barycentric weights: [2, -4, 2] for times {0, 0.5, 1}.
        let bri = BarycentricRational::new(&[0.0, 0.5, 1.0], &[0.0, 10.0, 0.0], 2).unwrap();
        assert_eq!(bri.weights, vec![2.0, -4.0, 2.0]);
    }

    #[test]
    fn rejects_invalid_configuration() {
        assert!(matches!(
            BarycentricRational::new(&[], &[], 0),
            Err(InterpError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            BarycentricRational::new(&[0.0, 1.0], &[0.0, 1.0], 2),
            Err(InterpError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            BarycentricRational::new(&[0.0, 1.0], &[0.0], 1),
            Err(InterpError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn non_finite_values_are_detectable() {
        let bri = BarycentricRational::new(&[0.0, 0.5, 1.0], &[0.0, f32::NAN, 0.0], 1).unwrap();
        assert!(!bri.is_finite());
    }
}
