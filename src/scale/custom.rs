//! Configurable scale with pluggable tick behavior.
//!
//! # Overview
//!
//! [`Custom`] pairs a [`Continuous`] engine with a [`TickPolicy`], the
//! strategy that decides where ticks fall, how their labels read, and how
//! domain endpoints round to nice values. The default policy produces
//! decimal ticks through [`LinearTicks`]; scales with their own tick
//! arithmetic inject a policy of their own.
//!
//! # Key Types
//!
//! - [`Custom`]: the engine plus a tick policy.
//! - [`TickPolicy`]: the strategy seam for ticks, labels, and nicing.
//! - [`LinearTicks`]: the default decimal policy.
//!
//! # Examples
//!
//! ```rust
//! use skala::{Custom, Identity};
//!
//! let mut x = Custom::new(Identity);
//! x.set_domain([0.0, 0.96]);
//! assert_eq!(
//!     x.ticks(10),
//!     vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9],
//! );
//!
//! x.nice(10);
//! assert_eq!(x.domain(), vec![0.0, 1.0]);
//! ```

use std::sync::Arc;

use crate::format::{FormatSpec, TickFormatter};
use crate::interpolate::{Interpolate, Interpolator};
use crate::scale::continuous::Continuous;
use crate::scale::linear::LinearTicks;
use crate::transform::Transform;

/// Tick behavior for a scale over the given domain break points.
///
/// Implementations read the first and last break point as the domain
/// extent. `nice` rewrites endpoint entries in place and leaves interior
/// break points alone.
pub trait TickPolicy {
    /// Representative values covering the domain, roughly `count` of them.
    fn ticks(&self, domain: &[f64], count: usize) -> Vec<f64>;

    /// A label formatter suited to ticks at the given count.
    fn tick_format(
        &self,
        domain: &[f64],
        count: usize,
        spec: Option<FormatSpec>,
    ) -> TickFormatter;

    /// Rounds the domain endpoints outward to policy-chosen values.
    fn nice(&self, domain: &mut [f64], count: usize);
}

/// A continuous scale with pluggable tick behavior.
///
/// Every mapping method delegates to the inner [`Continuous`] engine; the
/// tick methods consult the policy. Copies share the policy (policies are
/// stateless) but get their own engine configuration.
#[derive(Clone)]
pub struct Custom<T: Transform, V: Interpolate = f64> {
    engine: Continuous<T, V>,
    policy: Arc<dyn TickPolicy>,
}

impl<T: Transform> Custom<T> {
    /// Creates a numeric scale mapping `[0, 1]` onto `[0, 1]` with decimal
    /// ticks.
    pub fn new(transform: T) -> Self {
        Self::new_with_policy(transform, [0.0, 1.0], LinearTicks)
    }
}

impl<T: Transform, V: Interpolate> Custom<T, V> {
    /// Creates a scale with the given range and decimal ticks.
    pub fn new_with_range(transform: T, range: impl Into<Vec<V>>) -> Self {
        Self::new_with_policy(transform, range, LinearTicks)
    }

    /// Creates a scale with the given range and tick policy.
    pub fn new_with_policy(
        transform: T,
        range: impl Into<Vec<V>>,
        policy: impl TickPolicy + 'static,
    ) -> Self {
        Self {
            engine: Continuous::new_with_range(transform, range),
            policy: Arc::new(policy),
        }
    }

    /// Returns a copy of the domain break points.
    pub fn domain(&self) -> Vec<f64> {
        self.engine.domain()
    }

    /// Replaces the domain break points.
    pub fn set_domain(&mut self, domain: impl Into<Vec<f64>>) -> &mut Self {
        self.engine.set_domain(domain);
        self
    }

    /// Returns a copy of the range values.
    pub fn range(&self) -> Vec<V> {
        self.engine.range()
    }

    /// Replaces the range values. An empty range is ignored.
    pub fn set_range(&mut self, range: impl Into<Vec<V>>) -> &mut Self {
        self.engine.set_range(range);
        self
    }

    /// Replaces the range and switches to rounding interpolation.
    pub fn set_range_round(&mut self, range: impl Into<Vec<V>>) -> &mut Self {
        self.engine.set_range_round(range);
        self
    }

    /// Reports whether inputs are clamped to the domain.
    pub fn clamp(&self) -> bool {
        self.engine.clamp()
    }

    /// Enables or disables clamping.
    pub fn set_clamp(&mut self, clamp: bool) -> &mut Self {
        self.engine.set_clamp(clamp);
        self
    }

    /// Returns the range interpolation strategy.
    pub fn interpolate(&self) -> Interpolator<V> {
        self.engine.interpolate()
    }

    /// Replaces the range interpolation strategy.
    pub fn set_interpolate(&mut self, interpolator: Interpolator<V>) -> &mut Self {
        self.engine.set_interpolate(interpolator);
        self
    }

    /// Returns the fallback value for unmappable inputs.
    pub fn unknown(&self) -> Option<V> {
        self.engine.unknown()
    }

    /// Sets the fallback value for unmappable inputs. `None` clears it.
    pub fn set_unknown(&mut self, unknown: impl Into<Option<V>>) -> &mut Self {
        self.engine.set_unknown(unknown);
        self
    }

    /// Maps a domain value to a range value, or the unknown fallback when
    /// the input is unmappable.
    pub fn map_opt(&self, x: f64) -> Option<V> {
        self.engine.map_opt(x)
    }

    /// Maps a domain value to a range value.
    ///
    /// # Panics
    ///
    /// Panics if the input is unmappable and no unknown fallback is set.
    pub fn map(&self, x: f64) -> V {
        self.engine.map(x)
    }

    /// Maps a range value back to the domain.
    pub fn invert(&self, y: f64) -> f64 {
        self.engine.invert(y)
    }

    /// Returns policy-chosen ticks covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        self.policy.ticks(&self.engine.domain(), count)
    }

    /// Returns a policy-chosen label formatter for ticks at the given
    /// count.
    pub fn tick_format(&self, count: usize, spec: Option<FormatSpec>) -> TickFormatter {
        self.policy.tick_format(&self.engine.domain(), count, spec)
    }

    /// Rounds the domain endpoints outward to policy-chosen nice values.
    pub fn nice(&mut self, count: usize) -> &mut Self {
        let mut domain = self.engine.domain();
        self.policy.nice(&mut domain, count);
        self.engine.set_domain(domain);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::transform::Identity;

    #[test]
    fn default_scale_maps_the_unit_interval_with_decimal_ticks() {
        let x = Custom::new(Identity);
        assert_eq!(x.domain(), vec![0.0, 1.0]);
        assert_eq!(x.range(), vec![0.0, 1.0]);
        assert_eq!(x.map(0.5), 0.5);
        assert_eq!(
            x.ticks(10),
            vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0],
        );

        let f = x.tick_format(10, None);
        assert_eq!(f(0.5), "0.5");
    }

    #[test]
    fn mapping_and_inversion_delegate_to_the_engine() {
        let mut x = Custom::new(Identity);
        x.set_domain([10.0, 130.0]).set_range([0.0, 960.0]);
        assert_eq!(x.map(70.0), 480.0);
        assert_eq!(x.invert(480.0), 70.0);
    }

    #[test]
    fn nice_rewrites_the_domain_through_the_policy() {
        let mut x = Custom::new(Identity);
        x.set_domain([0.0, 0.96]);
        x.nice(10);
        assert_eq!(x.domain(), vec![0.0, 1.0]);
    }

    #[test]
    fn configuration_calls_chain() {
        let mut x = Custom::new(Identity);
        x.set_domain([0.0, 0.96]).nice(10).set_clamp(true);
        assert_eq!(x.domain(), vec![0.0, 1.0]);
        assert!(x.clamp());
    }

    #[test]
    fn injected_policy_controls_tick_behavior() {
        struct Quartiles;

        impl TickPolicy for Quartiles {
            fn ticks(&self, domain: &[f64], _count: usize) -> Vec<f64> {
                let lo = domain.first().copied().unwrap_or(f64::NAN);
                let hi = domain.last().copied().unwrap_or(f64::NAN);
                vec![lo, (lo + hi) / 2.0, hi]
            }

            fn tick_format(
                &self,
                _domain: &[f64],
                _count: usize,
                _spec: Option<FormatSpec>,
            ) -> TickFormatter {
                Box::new(|v| format!("{v}"))
            }

            fn nice(&self, _domain: &mut [f64], _count: usize) {}
        }

        let mut x = Custom::new_with_policy(Identity, [0.0, 1.0], Quartiles);
        x.set_domain([0.0, 8.0]);
        assert_eq!(x.ticks(10), vec![0.0, 4.0, 8.0]);

        let f = x.tick_format(10, None);
        assert_eq!(f(0.25), "0.25");

        x.nice(10);
        assert_eq!(x.domain(), vec![0.0, 8.0]);
    }

    #[test]
    fn copies_share_the_policy_but_not_the_configuration() {
        let mut x = Custom::new(Identity);
        x.set_domain([0.0, 10.0]);

        let mut y = x.clone();
        y.set_domain([0.0, 40.0]);
        assert_eq!(x.map(5.0), 0.5);
        assert_eq!(y.map(5.0), 0.125);
        assert_eq!(x.domain(), vec![0.0, 10.0]);
    }

    #[test]
    fn unknown_fallback_is_per_copy() {
        let mut x = Custom::new(Identity);
        x.set_unknown(2.0);
        assert_eq!(x.map_opt(f64::NAN), Some(2.0));

        let mut y = x.clone();
        y.set_unknown(None);
        assert!(y.map_opt(f64::NAN).is_none());
        assert_eq!(x.map_opt(f64::NAN), Some(2.0));
    }

    #[test]
    fn interpolation_strategy_is_per_copy() {
        let mut x = Custom::new_with_range(Identity, [Rgb::RED, Rgb::BLUE]);
        x.set_interpolate(Interpolator::custom(|_a: &Rgb, b: &Rgb, _t| *b));
        assert_eq!(x.map(0.5), Rgb::BLUE);

        let mut y = x.clone();
        y.set_interpolate(Interpolator::Value);
        assert_eq!(y.map(0.5), Rgb::new(128, 0, 128));
        assert_eq!(x.map(0.5), Rgb::BLUE);
    }
}
