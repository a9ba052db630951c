//! Monotonic transform pairs applied to domain values.
//!
//! A [`Transform`] is the function pair a continuous scale applies to its
//! domain before piecewise mapping: `transform` carries domain values into
//! the space where interpolation is linear, and `untransform` carries them
//! back during inversion. The pair must be mutually inverse over the valid
//! domain; monotonicity is assumed and not validated.
//!
//! # Key Types
//!
//! - [`Identity`] - The no-op pair, giving a plain linear scale
//! - [`FnTransform`] - Wraps an ad-hoc closure pair (x², √x, ...)
//!
//! Domain-specific transforms such as the logit/logistic pair live next to
//! the scale that uses them (see [`crate::scale::logit`]).
//!
//! # Examples
//!
//! ```rust
//! use skala::transform::{FnTransform, Identity, Transform};
//!
//! let id = Identity;
//! assert_eq!(id.transform(0.25), 0.25);
//! assert_eq!(id.untransform(0.25), 0.25);
//!
//! let square = FnTransform::new(|x: f64| x * x, f64::sqrt);
//! assert_eq!(square.transform(3.0), 9.0);
//! assert_eq!(square.untransform(9.0), 3.0);
//! ```

/// A monotonic function and its inverse, applied to domain values.
///
/// Implementors must satisfy `untransform(transform(x)) ≈ x` for all `x` in
/// the domain the scale is used with. Values outside that domain may map to
/// `±∞` or NaN (the logit transform does both); the scale engine propagates
/// such values through its arithmetic rather than rejecting them.
pub trait Transform {
    /// Carries a domain value into interpolation space.
    fn transform(&self, x: f64) -> f64;

    /// Carries an interpolation-space value back into the domain.
    fn untransform(&self, y: f64) -> f64;
}

/// The identity pair: both directions return the input unchanged.
///
/// A scale built on `Identity` is a plain linear scale.
///
/// # Examples
///
/// ```rust
/// use skala::{Continuous, transform::Identity};
///
/// let mut scale = Continuous::new(Identity);
/// scale.set_domain([0.0, 1.0]).set_range([10.0, 20.0]);
/// assert_eq!(scale.map(0.5), 15.0);
/// assert_eq!(scale.invert(15.0), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Transform for Identity {
    fn transform(&self, x: f64) -> f64 {
        x
    }

    fn untransform(&self, y: f64) -> f64 {
        y
    }
}

/// Wraps a closure pair as a [`Transform`], for one-off transforms that do
/// not warrant a named type.
///
/// # Examples
///
/// ```rust
/// use skala::{Custom, transform::FnTransform};
///
/// // A power scale: interpolate in x² space.
/// let mut scale = Custom::new(FnTransform::new(|x: f64| x * x, f64::sqrt));
/// scale.set_range([0.0, 10.0]);
/// assert_eq!(scale.map(0.5), 2.5);
/// assert_eq!(scale.invert(90.0), 3.0);
/// ```
#[derive(Clone)]
pub struct FnTransform<F, G> {
    transform: F,
    untransform: G,
}

impl<F, G> FnTransform<F, G>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    /// Creates a transform from a forward closure and its inverse.
    pub const fn new(transform: F, untransform: G) -> Self {
        Self {
            transform,
            untransform,
        }
    }
}

impl<F, G> Transform for FnTransform<F, G>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    fn transform(&self, x: f64) -> f64 {
        (self.transform)(x)
    }

    fn untransform(&self, y: f64) -> f64 {
        (self.untransform)(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_round_trips() {
        let t = Identity;
        for x in [-2.5, 0.0, 0.5, 1.0, 1e9] {
            assert_eq!(t.untransform(t.transform(x)), x);
        }
    }

    #[test]
    fn fn_transform_applies_each_direction() {
        let square = FnTransform::new(|x: f64| x * x, f64::sqrt);
        assert_eq!(square.transform(4.0), 16.0);
        assert_eq!(square.untransform(16.0), 4.0);
    }

    #[test]
    fn fn_transform_propagates_non_finite_values() {
        let square = FnTransform::new(|x: f64| x * x, f64::sqrt);
        assert!(square.untransform(-1.0).is_nan());
        assert_eq!(square.transform(f64::INFINITY), f64::INFINITY);
    }
}
