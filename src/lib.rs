//! Scale mappings for data visualization
//!
//! `skala` maps abstract data values onto visual values: positions, lengths,
//! colors. It focuses on the mathematical foundations of charting: continuous
//! domain-to-range mapping, inversion back from visual space, and generating
//! readable axis ticks and labels.
//!
//! # Core Concepts
//!
//! ## Scales
//!
//! A scale maps a numeric domain onto an interpolated range. Scales support:
//! - Piecewise domains with two or more break points
//! - Bidirectional mapping ([`Continuous::map`] and [`Continuous::invert`])
//! - Optional clamping to the domain
//! - A fallback value for unmappable inputs
//!
//! Available scale types:
//! - [`Continuous`] - the bare mapping engine, generic over a [`Transform`]
//! - [`Custom`] - an engine paired with a pluggable [`TickPolicy`]
//! - [`LogitScale`] - probabilities on a log-odds axis
//!
//! ## Transforms
//!
//! A [`Transform`] linearizes the domain before interpolation, which is how
//! one engine serves linear, power, and log-odds scales alike. [`Identity`]
//! leaves values untouched; [`FnTransform`] builds a transform from any pair
//! of inverse functions.
//!
//! ## Interpolation
//!
//! The range side blends values through the [`Interpolate`] trait, so a
//! scale can produce numbers, colors such as [`Rgb`], or any custom value
//! type. The [`Interpolator`] strategy selects plain, rounded, or
//! caller-supplied blending.
//!
//! # Examples
//!
//! ## A Probability Scale
//!
//! ```rust
//! use skala::logit;
//!
//! let s = logit();
//! assert_eq!(s.domain(), vec![0.001, 0.999]);
//!
//! // The domain extremes land exactly on the range extremes.
//! assert_eq!(s.map(0.001), 0.0);
//! assert_eq!(s.map(0.999), 1.0);
//!
//! // Ticks walk the decades, densest near 0 and 1.
//! assert_eq!(
//!     s.ticks(10),
//!     vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 0.9, 0.95, 0.99, 0.995, 0.999],
//! );
//! ```
//!
//! ## Tick Labels
//!
//! ```rust
//! use skala::logit;
//!
//! let s = logit();
//! let f = s.tick_format(10, None);
//! assert_eq!(f(0.001), "1e-3");
//! assert_eq!(f(0.5), "0.50");
//! assert_eq!(f(0.999), "1-1e-3");
//! ```
//!
//! ## Custom Transforms
//!
//! ```rust
//! use skala::{Custom, FnTransform};
//!
//! // An area scale: values map by their square.
//! let mut area = Custom::new(FnTransform::new(|x: f64| x * x, f64::sqrt));
//! area.set_domain([0.0, 1.0]).set_range([0.0, 10.0]);
//!
//! assert_eq!(area.map(0.5), 2.5);
//! assert_eq!(area.invert(2.5), 0.5);
//! ```
//!
//! ## Clamping
//!
//! ```rust
//! use skala::{Continuous, Identity};
//!
//! let mut x = Continuous::new(Identity);
//! x.set_domain([10.0, 20.0])
//!     .set_range([0.0, 100.0])
//!     .set_clamp(true);
//!
//! assert_eq!(x.map(25.0), 100.0);
//! assert_eq!(x.invert(150.0), 20.0);
//! ```

pub mod color;
pub mod format;
pub mod interpolate;
pub mod scale;
pub mod ticks;
pub mod transform;

pub use color::Rgb;
pub use format::{FormatSpec, TickFormatter};
pub use interpolate::{Interpolate, Interpolator};
pub use scale::{Continuous, Custom, LinearTicks, Logit, LogitScale, LogitTicks, TickPolicy, logit};
pub use transform::{FnTransform, Identity, Transform};
