//! Tick label formatting.
//!
//! [`tick_format`] builds a formatter whose precision is derived from the
//! tick step over an interval, so labels carry exactly as many digits as the
//! spacing between ticks requires. A [`FormatSpec`] overrides that default
//! with fixed-point, exponent, or SI-prefix notation.
//!
//! # Examples
//!
//! ```rust
//! use skala::format::{FormatSpec, tick_format};
//!
//! let f = tick_format(0.0, 1.0, 10, None);
//! assert_eq!(f(0.5), "0.5");
//!
//! let si = tick_format(0.001, 0.999, 10, Some(FormatSpec::Si));
//! assert_eq!(si(0.5), "500m");
//! ```

use crate::ticks::tick_step;

/// Label notation for tick values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatSpec {
    /// Fixed-point with the given number of decimals, `0.50`.
    Fixed(usize),
    /// Exponent notation with the given mantissa decimals, `5e-1`.
    Exponent(usize),
    /// SI-prefix notation scaled to the interval's magnitude, `500m`.
    Si,
}

/// A rendered tick label function.
pub type TickFormatter = Box<dyn Fn(f64) -> String>;

const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Decimal places needed to tell values one `step` apart from each other.
/// A zero or non-finite step falls back to six decimals.
fn precision_fixed(step: f64) -> usize {
    if step == 0.0 || !step.is_finite() {
        return 6;
    }
    (-(step.abs().log10().floor())).clamp(0.0, 20.0) as usize
}

/// Returns a formatter for ticks covering `[start, stop]` at the given
/// count. With no [`FormatSpec`] the decimal precision follows
/// [`tick_step`](crate::ticks::tick_step) for the interval; `Si` picks one
/// prefix for the whole interval so labels stay comparable across ticks.
pub fn tick_format(start: f64, stop: f64, count: usize, spec: Option<FormatSpec>) -> TickFormatter {
    match spec {
        None => {
            let decimals = precision_fixed(tick_step(start, stop, count));
            Box::new(move |v| format!("{v:.decimals$}"))
        }
        Some(FormatSpec::Fixed(decimals)) => Box::new(move |v| format!("{v:.decimals$}")),
        Some(FormatSpec::Exponent(decimals)) => Box::new(move |v| format!("{v:.decimals$e}")),
        Some(FormatSpec::Si) => {
            let value = start.abs().max(stop.abs());
            let e = if value > 0.0 && value.is_finite() {
                value.log10().floor()
            } else {
                0.0
            };
            let k3 = ((e / 3.0).floor() * 3.0).clamp(-24.0, 24.0) as i32;
            let prefix = SI_PREFIXES[((k3 + 24) / 3) as usize];
            let scale = 10f64.powi(k3);
            let decimals = precision_fixed(tick_step(start, stop, count).abs() / scale);
            Box::new(move |v| {
                let s = format!("{:.decimals$}", v / scale);
                let trimmed = if s.contains('.') {
                    s.trim_end_matches('0').trim_end_matches('.')
                } else {
                    s.as_str()
                };
                format!("{trimmed}{prefix}")
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_precision_tracks_the_tick_step() {
        let f = tick_format(0.0, 1.0, 10, None);
        assert_eq!(f(0.0), "0.0");
        assert_eq!(f(0.5), "0.5");
        assert_eq!(f(1.0), "1.0");

        let g = tick_format(0.0, 100.0, 10, None);
        assert_eq!(g(0.0), "0");
        assert_eq!(g(50.0), "50");
        assert_eq!(g(100.0), "100");
    }

    #[test]
    fn fixed_spec_pins_the_decimal_count() {
        let f = tick_format(0.0, 1.0, 10, Some(FormatSpec::Fixed(2)));
        assert_eq!(f(0.5), "0.50");
        assert_eq!(f(1.0), "1.00");
    }

    #[test]
    fn exponent_spec_uses_scientific_notation() {
        let f = tick_format(0.0, 1.0, 10, Some(FormatSpec::Exponent(0)));
        assert_eq!(f(0.001), "1e-3");
        assert_eq!(f(0.5), "5e-1");

        let g = tick_format(0.0, 1.0, 10, Some(FormatSpec::Exponent(2)));
        assert_eq!(g(0.5), "5.00e-1");
    }

    #[test]
    fn exponent_rounding_can_carry_into_the_exponent() {
        let f = tick_format(0.0, 1.0, 10, Some(FormatSpec::Exponent(0)));
        assert_eq!(f(1.0 - 0.999), "1e-3");
    }

    #[test]
    fn si_prefixes_follow_the_interval_magnitude() {
        let f = tick_format(0.001, 0.999, 10, Some(FormatSpec::Si));
        let labels: Vec<String> = [0.001, 0.01, 0.1, 0.5, 0.9, 0.99, 0.999]
            .iter()
            .map(|&v| f(v))
            .collect();
        assert_eq!(labels, ["1m", "10m", "100m", "500m", "900m", "990m", "999m"]);
    }

    #[test]
    fn si_trims_trailing_zeros_but_keeps_the_prefix() {
        let f = tick_format(0.001, 0.999, 10, Some(FormatSpec::Si));
        let labels: Vec<String> = [0.01, 0.02, 0.05, 0.1, 0.5, 0.6, 0.9, 0.97, 0.99]
            .iter()
            .map(|&v| f(v))
            .collect();
        assert_eq!(
            labels,
            ["10m", "20m", "50m", "100m", "500m", "600m", "900m", "970m", "990m"],
        );
    }

    #[test]
    fn degenerate_interval_falls_back_to_six_decimals() {
        let f = tick_format(5.0, 5.0, 10, None);
        assert_eq!(f(5.0), "5.000000");
    }
}
