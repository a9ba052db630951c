use fastnum::decimal::D128;
use skala::{Continuous, Identity, Interpolate, LogitScale};

// A decimal range value: blending happens in D128 arithmetic, so range
// values keep decimal precision that f64 would lose.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Dec(D128);

impl Interpolate for Dec {
    fn interpolate(a: &Self, b: &Self, t: f64) -> Self {
        let t = D128::from(t);
        Dec(a.0 * (D128::from(1) - t) + b.0 * t)
    }

    // No numeric view: inverting a Dec-ranged scale yields NaN.
    fn to_f64(&self) -> Option<f64> {
        None
    }
}

fn assert_in_delta(actual: Dec, expected: D128) {
    let delta = (actual.0 - expected).abs();
    assert!(delta < D128::from(1e-10), "expected {expected}, got {actual:?}");
}

#[test]
fn test_linear_scale_with_a_decimal_range() {
    let mut scale = Continuous::new_with_range(
        Identity,
        [Dec(D128::from(0)), Dec(D128::from(100))],
    );
    scale.set_domain([0.0, 1.0]);

    assert_in_delta(scale.map(0.0), D128::from(0));
    assert_in_delta(scale.map(0.25), D128::from(25));
    assert_in_delta(scale.map(0.5), D128::from(50));
    assert_in_delta(scale.map(1.0), D128::from(100));
}

#[test]
fn test_piecewise_decimal_range_uses_the_matching_segment() {
    let mut scale = Continuous::new_with_range(
        Identity,
        [Dec(D128::from(0)), Dec(D128::from(10)), Dec(D128::from(1000))],
    );
    scale.set_domain([0.0, 0.5, 1.0]);

    assert_in_delta(scale.map(0.25), D128::from(5));
    assert_in_delta(scale.map(0.5), D128::from(10));
    assert_in_delta(scale.map(0.75), D128::from(505));
}

#[test]
fn test_logit_scale_with_a_decimal_range() {
    let scale = LogitScale::with_range([Dec(D128::from(0)), Dec(D128::from(1))]);

    // Domain extremes land exactly on the range extremes.
    assert_eq!(scale.map(0.001), Dec(D128::from(0)));
    assert_eq!(scale.map(0.999), Dec(D128::from(1)));
    assert_in_delta(scale.map(0.5), D128::from(0.5));
}

#[test]
fn test_clamped_decimal_range_saturates_at_the_endpoints() {
    let mut scale = LogitScale::with_range([Dec(D128::from(0)), Dec(D128::from(1))]);
    scale.set_clamp(true);

    assert_eq!(scale.map(0.0), Dec(D128::from(0)));
    assert_eq!(scale.map(1.0), Dec(D128::from(1)));
    assert_eq!(scale.map(2.0), Dec(D128::from(1)));
}

#[test]
fn test_decimal_unknown_fallback() {
    let mut scale = Continuous::new_with_range(
        Identity,
        [Dec(D128::from(0)), Dec(D128::from(100))],
    );
    scale.set_domain([0.0, 1.0]);
    assert!(scale.map_opt(f64::NAN).is_none());

    scale.set_unknown(Dec(D128::from(-1)));
    assert_eq!(scale.map(f64::NAN), Dec(D128::from(-1)));
}

#[test]
fn test_inverting_a_decimal_range_yields_nan() {
    let mut scale = Continuous::new_with_range(
        Identity,
        [Dec(D128::from(0)), Dec(D128::from(100))],
    );
    scale.set_domain([0.0, 1.0]);
    assert!(scale.invert(50.0).is_nan());
}
