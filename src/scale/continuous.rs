//! Continuous mapping between a numeric domain and an interpolated range.
//!
//! # Overview
//!
//! [`Continuous`] is the engine behind every scale in this crate. It carries
//! a domain of break points, a range of output values, and a [`Transform`]
//! that linearizes the domain before interpolation. Two break points give a
//! single linear segment; more give a piecewise mapping where each domain
//! segment feeds the corresponding range segment.
//!
//! The segment lookup tables are built lazily on first use and rebuilt after
//! any setter call, so repeated mapping over a fixed configuration pays the
//! construction cost once.
//!
//! # Key Types
//!
//! - [`Continuous`]: the scale engine itself.
//! - [`Transform`]: the domain-side linearization hook.
//! - [`Interpolator`]: the range-side blending strategy.
//!
//! # Examples
//!
//! ```rust
//! use skala::{Continuous, Identity};
//!
//! let mut x = Continuous::new(Identity);
//! x.set_domain([10.0, 130.0]).set_range([0.0, 960.0]);
//!
//! assert_eq!(x.map(70.0), 480.0);
//! assert_eq!(x.invert(480.0), 70.0);
//! ```

use std::cell::OnceCell;

use crate::interpolate::{Interpolate, Interpolator};
use crate::scale::util::bisect_right;
use crate::transform::Transform;

/// Maps one domain segment `[a, b]` onto `[0, 1]`. A collapsed segment
/// reports its midpoint for every input so the mapping stays total.
struct Normalize {
    a: f64,
    span: f64,
}

impl Normalize {
    fn new(a: f64, b: f64) -> Self {
        Self { a, span: b - a }
    }

    fn apply(&self, x: f64) -> f64 {
        if self.span.is_nan() {
            f64::NAN
        } else if self.span == 0.0 {
            0.5
        } else {
            (x - self.a) / self.span
        }
    }
}

/// Input clamping, fixed at rescale time. A NaN bound or input yields NaN
/// rather than silently picking a side.
#[derive(Clone, Copy)]
enum ClampFn {
    Pass,
    Restrict { lo: f64, hi: f64 },
}

impl ClampFn {
    fn restrict(a: f64, b: f64) -> Self {
        let (lo, hi) = if a > b { (b, a) } else { (a, b) };
        ClampFn::Restrict { lo, hi }
    }

    fn apply(self, x: f64) -> f64 {
        match self {
            ClampFn::Pass => x,
            ClampFn::Restrict { lo, hi } => {
                if x.is_nan() || lo.is_nan() || hi.is_nan() {
                    f64::NAN
                } else if x < lo {
                    lo
                } else if x > hi {
                    hi
                } else {
                    x
                }
            }
        }
    }
}

/// Precomputed segment table: sorted break points, one normalizer and one
/// value pair per segment. Built once per configuration and consulted on
/// every lookup.
struct Piecewise<V> {
    breaks: Vec<f64>,
    norms: Vec<Normalize>,
    pairs: Vec<(V, V)>,
    interp: Interpolator<V>,
}

impl<V: Interpolate> Piecewise<V> {
    /// Callers guarantee at least two entries on each side. Excess entries
    /// on the longer side are dropped, and a descending break sequence is
    /// stored reversed so lookups can always bisect ascending data.
    fn new(breaks: Vec<f64>, values: Vec<V>, interp: Interpolator<V>) -> Self {
        let mut breaks = breaks;
        let mut values = values;
        let count = breaks.len().min(values.len());
        breaks.truncate(count);
        values.truncate(count);
        if breaks[count - 1] < breaks[0] {
            breaks.reverse();
            values.reverse();
        }
        let norms = breaks
            .windows(2)
            .map(|w| Normalize::new(w[0], w[1]))
            .collect();
        let pairs = values
            .windows(2)
            .map(|w| (w[0].clone(), w[1].clone()))
            .collect();
        Self {
            breaks,
            norms,
            pairs,
            interp,
        }
    }

    fn eval(&self, x: f64) -> V {
        let last = self.norms.len();
        let i = if last > 1 {
            bisect_right(&self.breaks, x, 1, last) - 1
        } else {
            0
        };
        let (a, b) = &self.pairs[i];
        self.interp.interpolate(a, b, self.norms[i].apply(x))
    }
}

/// A continuous scale: a [`Transform`]-linearized piecewise mapping from a
/// numeric domain to a range of interpolatable values.
///
/// The default configuration maps `[0, 1]` onto `[0, 1]` through the
/// identity transform. Setters take `&mut self` and return `&mut Self` so
/// configuration calls chain.
pub struct Continuous<T: Transform, V: Interpolate = f64> {
    transform: T,
    domain: Vec<f64>,
    range: Vec<V>,
    interpolator: Interpolator<V>,
    clamp: bool,
    active_clamp: ClampFn,
    unknown: Option<V>,
    forward: OnceCell<Piecewise<V>>,
    inverse: OnceCell<Piecewise<f64>>,
}

impl<T: Transform> Continuous<T> {
    /// Creates a numeric scale mapping `[0, 1]` onto `[0, 1]` through the
    /// given transform.
    pub fn new(transform: T) -> Self {
        Self::new_with_range(transform, [0.0, 1.0])
    }
}

impl<T: Transform, V: Interpolate> Continuous<T, V> {
    /// Creates a scale with domain `[0, 1]` and the given range.
    pub fn new_with_range(transform: T, range: impl Into<Vec<V>>) -> Self {
        let mut scale = Self {
            transform,
            domain: vec![0.0, 1.0],
            range: range.into(),
            interpolator: Interpolator::Value,
            clamp: false,
            active_clamp: ClampFn::Pass,
            unknown: None,
            forward: OnceCell::new(),
            inverse: OnceCell::new(),
        };
        scale.rescale();
        scale
    }

    /// Returns a copy of the domain break points.
    pub fn domain(&self) -> Vec<f64> {
        self.domain.clone()
    }

    /// Replaces the domain break points.
    pub fn set_domain(&mut self, domain: impl Into<Vec<f64>>) -> &mut Self {
        self.domain = domain.into();
        self.rescale();
        self
    }

    /// Returns a copy of the range values.
    pub fn range(&self) -> Vec<V> {
        self.range.clone()
    }

    /// Replaces the range values. An empty range is ignored and leaves the
    /// scale unchanged.
    pub fn set_range(&mut self, range: impl Into<Vec<V>>) -> &mut Self {
        let range = range.into();
        if range.is_empty() {
            return self;
        }
        self.range = range;
        self.rescale();
        self
    }

    /// Replaces the range and switches to rounding interpolation, for
    /// outputs that should land on whole units such as pixels.
    pub fn set_range_round(&mut self, range: impl Into<Vec<V>>) -> &mut Self {
        let range = range.into();
        if range.is_empty() {
            return self;
        }
        self.range = range;
        self.interpolator = Interpolator::Round;
        self.rescale();
        self
    }

    /// Reports whether inputs are clamped to the domain.
    pub fn clamp(&self) -> bool {
        self.clamp
    }

    /// Enables or disables clamping. When enabled, [`map`](Self::map) pins
    /// inputs to the domain and [`invert`](Self::invert) pins results to it,
    /// so neither extrapolates.
    pub fn set_clamp(&mut self, clamp: bool) -> &mut Self {
        self.clamp = clamp;
        self.rescale();
        self
    }

    /// Returns the range interpolation strategy.
    pub fn interpolate(&self) -> Interpolator<V> {
        self.interpolator.clone()
    }

    /// Replaces the range interpolation strategy.
    pub fn set_interpolate(&mut self, interpolator: Interpolator<V>) -> &mut Self {
        self.interpolator = interpolator;
        self.rescale();
        self
    }

    /// Returns the fallback value for unmappable inputs.
    pub fn unknown(&self) -> Option<V> {
        self.unknown.clone()
    }

    /// Sets the fallback value returned for NaN inputs and for scales with
    /// no usable segment. `None` clears it.
    pub fn set_unknown(&mut self, unknown: impl Into<Option<V>>) -> &mut Self {
        self.unknown = unknown.into();
        self
    }

    /// Number of usable segments given the shorter of domain and range.
    fn segments(&self) -> usize {
        self.domain.len().min(self.range.len()).saturating_sub(1)
    }

    /// Refreshes the clamp bounds and drops the memoized segment tables.
    /// Every setter that affects the mapping funnels through here.
    fn rescale(&mut self) {
        self.active_clamp = if self.clamp {
            let n = self.domain.len().min(self.range.len());
            if n == 0 {
                ClampFn::restrict(f64::NAN, f64::NAN)
            } else {
                ClampFn::restrict(self.domain[0], self.domain[n - 1])
            }
        } else {
            ClampFn::Pass
        };
        self.forward.take();
        self.inverse.take();
    }

    /// Maps a domain value to a range value, or the unknown fallback when
    /// `x` is NaN or the scale has no usable segment.
    pub fn map_opt(&self, x: f64) -> Option<V> {
        if self.segments() == 0 || x.is_nan() {
            return self.unknown.clone();
        }
        let forward = self.forward.get_or_init(|| {
            let breaks = self
                .domain
                .iter()
                .map(|&d| self.transform.transform(d))
                .collect();
            Piecewise::new(breaks, self.range.clone(), self.interpolator.clone())
        });
        Some(forward.eval(self.transform.transform(self.active_clamp.apply(x))))
    }

    /// Maps a domain value to a range value.
    ///
    /// # Panics
    ///
    /// Panics if the input is unmappable and no unknown fallback is set.
    /// Use [`map_opt`](Self::map_opt) to handle that case explicitly.
    pub fn map(&self, x: f64) -> V {
        self.map_opt(x)
            .expect("no unknown value configured for unmappable input")
    }

    /// Maps a range value back to the domain value that produces it. The
    /// range is read numerically, so inversion yields NaN when the range
    /// values have no numeric view. The unknown fallback does not apply.
    pub fn invert(&self, y: f64) -> f64 {
        if self.segments() == 0 {
            return f64::NAN;
        }
        let inverse = self.inverse.get_or_init(|| {
            let breaks = self
                .range
                .iter()
                .map(|r| r.to_f64().unwrap_or(f64::NAN))
                .collect();
            let values = self
                .domain
                .iter()
                .map(|&d| self.transform.transform(d))
                .collect();
            Piecewise::new(breaks, values, Interpolator::Value)
        });
        self.active_clamp
            .apply(self.transform.untransform(inverse.eval(y)))
    }
}

impl<T: Transform + Clone, V: Interpolate> Clone for Continuous<T, V> {
    /// Copies the configuration. The memoized segment tables are not
    /// shared; the copy rebuilds its own on first use.
    fn clone(&self) -> Self {
        Self {
            transform: self.transform.clone(),
            domain: self.domain.clone(),
            range: self.range.clone(),
            interpolator: self.interpolator.clone(),
            clamp: self.clamp,
            active_clamp: self.active_clamp,
            unknown: self.unknown.clone(),
            forward: OnceCell::new(),
            inverse: OnceCell::new(),
        }
    }
}
