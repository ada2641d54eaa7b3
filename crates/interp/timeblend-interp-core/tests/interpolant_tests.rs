use timeblend_interp_core::{
    BarycentricRational, SplineBasis, SplineInterpolant, KNOT_TIMES_3, KNOT_TIMES_5,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

/// Reference Lagrange evaluation in f64 for cross-checking the full-order
/// barycentric form.
fn lagrange(times: &[f32], values: &[f32], u: f32) -> f32 {
    let mut sum = 0.0f64;
    for i in 0..times.len() {
        let mut li = 1.0f64;
        for j in 0..times.len() {
            if j != i {
                li *= (f64::from(u) - f64::from(times[j]))
                    / (f64::from(times[i]) - f64::from(times[j]));
            }
        }
        sum += li * f64::from(values[i]);
    }
    sum as f32
}

/// it should reproduce knot values exactly for every valid (n, d) pair
#[test]
fn bri_knot_reproduction() {
    let cases: [(&[f32], &[f32]); 2] = [
        (&KNOT_TIMES_3, &[1.0, -2.5, 0.25]),
        (&KNOT_TIMES_5, &[0.0, 3.0, -1.0, 7.5, 2.0]),
    ];
    for (times, values) in cases {
        for order in 0..times.len() {
            let bri = BarycentricRational::new(times, values, order).unwrap();
            for (t, v) in times.iter().zip(values) {
                assert_eq!(bri.evaluate(*t), *v, "n={} d={order}", times.len());
            }
        }
    }
}

/// it should match the concrete 3-knot case, including the reference value
/// 7.5 at u = 0.25
#[test]
fn bri_concrete_case() {
    let bri = BarycentricRational::new(&[0.0, 0.5, 1.0], &[0.0, 10.0, 0.0], 2).unwrap();
    assert_eq!(bri.evaluate(0.0), 0.0);
    assert_eq!(bri.evaluate(0.5), 10.0);
    assert_eq!(bri.evaluate(1.0), 0.0);
    // The degree-2 interpolant of these knots is -40·u·(u-1), so 7.5 at 0.25.
    approx(bri.evaluate(0.25), 7.5, 1e-5);
}

/// it should agree with the unique polynomial interpolant when d = n-1
#[test]
fn bri_full_order_matches_lagrange() {
    let cases: [(&[f32], &[f32]); 2] = [
        (&KNOT_TIMES_3, &[2.0, -1.0, 4.0]),
        (&KNOT_TIMES_5, &[0.0, 1.0, -3.0, 2.5, 0.5]),
    ];
    for (times, values) in cases {
        let bri = BarycentricRational::new(times, values, times.len() - 1).unwrap();
        for step in 0..=20 {
            let u = step as f32 / 20.0;
            approx(bri.evaluate(u), lagrange(times, values, u), 1e-3);
        }
    }
}

/// it should stay smooth and bounded between knots at low orders too
#[test]
fn bri_low_order_stays_finite_across_the_interval() {
    let bri = BarycentricRational::new(&KNOT_TIMES_5, &[0.0, 10.0, 0.0, -10.0, 0.0], 2).unwrap();
    for step in 0..=100 {
        let u = step as f32 / 100.0;
        assert!(bri.evaluate(u).is_finite(), "u={u}");
    }
}

/// it should reproduce knots for every spline basis over 5 knots as well
#[test]
fn spline_five_knot_reproduction() {
    let knots = [
        [0.0, 0.0, 0.0],
        [1.0, -1.0, 2.0],
        [3.0, 0.5, -2.0],
        [2.0, 2.0, 0.0],
        [0.0, 1.0, 1.0],
    ];
    for basis in [
        SplineBasis::Constant,
        SplineBasis::Linear,
        SplineBasis::CatmullRom,
        SplineBasis::Cubic,
    ] {
        let spline = SplineInterpolant::from_knots(&knots, basis).unwrap();
        for (t, v) in KNOT_TIMES_5.iter().zip(&knots) {
            assert_eq!(spline.evaluate(*t), *v, "{basis:?} at u={t}");
        }
    }
}

/// it should interpolate linearly between 5-knot segments
#[test]
fn spline_linear_five_knot_midpoints() {
    let knots = [
        [0.0; 3],
        [4.0, 4.0, 4.0],
        [8.0, 8.0, 8.0],
        [4.0, 4.0, 4.0],
        [0.0; 3],
    ];
    let spline = SplineInterpolant::from_knots(&knots, SplineBasis::Linear).unwrap();
    assert_eq!(spline.evaluate(0.125), [2.0, 2.0, 2.0]);
    assert_eq!(spline.evaluate(0.625), [6.0, 6.0, 6.0]);
}
