//! Interpolation between range values.
//!
//! A continuous scale maps a normalized segment position `t` to a blend of
//! the segment's two range values. The value types a range may hold
//! implement [`Interpolate`]; which blend a scale actually uses is selected
//! by an [`Interpolator`], so a scale can switch between plain blending,
//! rounded blending, and a caller-supplied strategy without changing its
//! range type.
//!
//! `t` is nominally in `[0, 1]` but is not clamped here: out-of-range and
//! non-finite positions flow through the blend arithmetic and surface as
//! extrapolated or NaN results, which is what the scale engine relies on for
//! its edge-case behavior.

use std::sync::Arc;

/// A value type a scale range can hold.
///
/// `interpolate` is the straight-line blend `a·(1−t) + b·t` (for numbers,
/// exactly that expression: its behavior at non-finite `t` with a zero
/// endpoint is load-bearing for scales whose transform produces `±∞`).
///
/// `to_f64` is the value's numeric reading, used when a scale builds its
/// inverse mapper. Types with no numeric reading return `None`; inverting a
/// scale over such a range yields NaN.
///
/// # Examples
///
/// ```rust
/// use skala::Interpolate;
///
/// assert_eq!(f64::interpolate(&10.0, &20.0, 0.5), 15.0);
/// assert_eq!(f64::interpolate(&10.0, &20.0, 2.0), 30.0);
/// assert_eq!(f64::interpolate_round(&0.0, &100.0, 1.0 / 3.0), 33.0);
/// ```
pub trait Interpolate: Clone + 'static {
    /// Blends two values at position `t`.
    fn interpolate(a: &Self, b: &Self, t: f64) -> Self;

    /// Like [`interpolate`](Self::interpolate), rounding to the nearest
    /// representable step. Types with no meaningful rounding keep the
    /// default, which is the plain blend.
    fn interpolate_round(a: &Self, b: &Self, t: f64) -> Self {
        Self::interpolate(a, b, t)
    }

    /// The value's numeric reading, if it has one.
    fn to_f64(&self) -> Option<f64>;
}

impl Interpolate for f64 {
    fn interpolate(a: &Self, b: &Self, t: f64) -> Self {
        a * (1.0 - t) + b * t
    }

    fn interpolate_round(a: &Self, b: &Self, t: f64) -> Self {
        (a * (1.0 - t) + b * t).round()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(*self)
    }
}

/// The blend strategy a scale applies between its range values.
///
/// `Value` and `Round` dispatch to the range type's [`Interpolate`]
/// implementation; `Custom` holds a caller-supplied closure. Cloning a
/// `Custom` interpolator shares the closure — strategies are immutable, so
/// scale copies observing the same closure is not observable state sharing.
///
/// # Examples
///
/// ```rust
/// use skala::Interpolator;
///
/// let halfway = Interpolator::<f64>::Value;
/// assert_eq!(halfway.interpolate(&0.0, &10.0, 0.5), 5.0);
///
/// let step = Interpolator::custom(|a: &f64, b: &f64, t| if t < 1.0 { *a } else { *b });
/// assert_eq!(step.interpolate(&2.0, &9.0, 0.5), 2.0);
/// assert_eq!(step.interpolate(&2.0, &9.0, 1.0), 9.0);
/// ```
#[derive(Clone)]
pub enum Interpolator<V> {
    /// The range type's plain blend.
    Value,
    /// The range type's rounding blend.
    Round,
    /// A caller-supplied blend.
    Custom(Arc<dyn Fn(&V, &V, f64) -> V>),
}

impl<V: Interpolate> Interpolator<V> {
    /// Wraps a closure as a custom interpolator.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&V, &V, f64) -> V + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Blends two range values at position `t` using this strategy.
    pub fn interpolate(&self, a: &V, b: &V, t: f64) -> V {
        match self {
            Self::Value => V::interpolate(a, b, t),
            Self::Round => V::interpolate_round(a, b, t),
            Self::Custom(f) => f(a, b, t),
        }
    }
}
