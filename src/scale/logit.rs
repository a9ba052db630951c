use crate::format::{self, FormatSpec, TickFormatter};
use crate::interpolate::Interpolate;
use crate::scale::custom::{Custom, TickPolicy};
use crate::transform::Transform;

/// Probability domain a fresh logit scale starts with. Values this close to
/// the extremes already span roughly seven decades in log-odds.
pub const DEFAULT_DOMAIN: [f64; 2] = [0.001, 0.999];

/// Log-odds transform over probabilities in `(0, 1)`.
///
/// `transform` maps a probability to its log-odds `ln(x / (1 - x))`;
/// `untransform` is the logistic function. Probabilities near 0 and near 1
/// spread out symmetrically around the midpoint 0.5, which maps to 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logit;

impl Transform for Logit {
    fn transform(&self, x: f64) -> f64 {
        (x / (1.0 - x)).ln()
    }

    fn untransform(&self, y: f64) -> f64 {
        1.0 / (1.0 + (-y).exp())
    }
}

/// A probability scale: log-odds transform, decade-aware ticks, and labels
/// that stay readable at both extremes.
///
/// # Examples
///
/// ```rust
/// use skala::logit;
///
/// let s = logit();
/// assert_eq!(s.domain(), vec![0.001, 0.999]);
/// assert_eq!(s.map(0.001), 0.0);
/// assert_eq!(s.map(0.999), 1.0);
/// assert_eq!(
///     s.ticks(10),
///     vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 0.9, 0.95, 0.99, 0.995, 0.999],
/// );
/// ```
pub type LogitScale<V = f64> = Custom<Logit, V>;

impl<V: Interpolate> LogitScale<V> {
    /// Creates a logit scale mapping the default probability domain onto
    /// the given range.
    pub fn with_range(range: impl Into<Vec<V>>) -> Self {
        let mut scale = Custom::new_with_policy(Logit, range, LogitTicks);
        scale.set_domain(DEFAULT_DOMAIN);
        scale
    }
}

/// Creates a numeric logit scale mapping `[0.001, 0.999]` onto `[0, 1]`.
pub fn logit() -> LogitScale {
    LogitScale::with_range([0.0, 1.0])
}

/// Builds a power of ten by parsing `1e<exp>`, which gives the exact double
/// the matching decimal literal would, where `10f64.powf` can be off by an
/// ulp. Infinite exponents saturate to `0` and infinity.
fn pow10(e: f64) -> f64 {
    if e.is_finite() {
        format!("1e{e}").parse().unwrap_or(f64::NAN)
    } else if e < 0.0 {
        0.0
    } else {
        e
    }
}

/// Builds `k * 10^e` from its decimal digits, again via parsing so that
/// `decimal(3, -2)` is bit-identical to the literal `0.03`.
fn decimal(k: u32, e: i32) -> f64 {
    format!("{k}e{e}").parse().unwrap_or(f64::NAN)
}

/// Digits after the decimal point in the shortest display form.
fn fraction_digits(x: f64) -> usize {
    let s = x.to_string();
    match s.find('.') {
        Some(dot) => s.len() - dot - 1,
        None => 0,
    }
}

/// Reflects a probability around 0.5 in decimal space.
///
/// Plain `1.0 - n` picks up binary noise for most decimal inputs: the
/// mirror of `0.0000007` would print as `0.9999992999999999`. When the
/// subtraction produces more decimal digits than the input had, the result
/// is re-rounded to the input's digit count, so mirrors of short decimals
/// stay short.
///
/// # Examples
///
/// ```rust
/// use skala::scale::logit::mirror_number;
///
/// assert_eq!(mirror_number(0.0000007), 0.9999993);
/// assert_eq!(mirror_number(0.97), 0.03);
/// ```
pub fn mirror_number(n: f64) -> f64 {
    let mirrored = 1.0 - n;
    let s1 = fraction_digits(n);
    let s2 = fraction_digits(mirrored);
    if s1 > 0 && s2 > 0 && s1 != s2 {
        let digits = s1 - 1;
        format!("{mirrored:.digits$e}").parse().unwrap_or(f64::NAN)
    } else {
        mirrored
    }
}

/// Names the decade a probability lives in.
///
/// Negative decades count powers of ten below 0.5, so `0.003` is in decade
/// `-3`; positive decades mirror them above, so `0.997` is in decade `3`.
/// Probabilities at a mirrored power of ten belong to the decade they
/// bound from above: `0.99` is decade `2`, `0.999` decade `3`.
pub fn guess_decade(number: f64) -> i32 {
    if number < 0.5 {
        number.log10().floor() as i32
    } else {
        // log10(1 - number) is noisy near 1; the comparison against the
        // exact mirrored bound decides which side of it we are on.
        let approximated = (1.0 - number).log10().floor();
        if number <= mirror_number(pow10(approximated + 1.0)) {
            -(approximated as i32 + 1)
        } else {
            -(approximated as i32)
        }
    }
}

/// The tick at digit `k` of decade `i`: `k * 10^i` below 0.5, or its
/// decimal mirror above. Returns `None` for digits 5 and above in decades
/// `1` and `-1`, where they would collide with the 0.5 midpoint tick.
pub fn get_tick(i: i32, k: u32) -> Option<f64> {
    if k >= 5 && (i == 1 || i == -1) {
        return None;
    }
    if i < 0 {
        Some(decimal(k, i))
    } else {
        Some(mirror_number(decimal(k, -i)))
    }
}

/// Digit refinement order within a decade. Higher tick counts admit digits
/// further down the list.
const TICK_DIGITS: [u32; 5] = [1, 5, 2, 3, 7];

/// Tick policy for probability scales.
///
/// Ticks walk the decades between the domain extremes. When the requested
/// count allows more than half a tick per decade, each decade contributes
/// digit ticks in [`TICK_DIGITS`] order; otherwise decades are thinned to
/// every 2nd, 4th, or 8th, always keeping the extremes. A domain crossing
/// 0.5 also gets the midpoint tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogitTicks;

impl TickPolicy for LogitTicks {
    fn ticks(&self, domain: &[f64], count: usize) -> Vec<f64> {
        let a = domain.first().copied().unwrap_or(f64::NAN);
        let b = domain.last().copied().unwrap_or(f64::NAN);
        if a <= 0.0 || a >= 1.0 || b >= 1.0 || b <= 0.0 {
            return vec![pow10(-1.0), 0.5, 1.0 - pow10(-1.0)];
        }
        if a.is_nan() || b.is_nan() {
            return Vec::new();
        }
        let low_exp = guess_decade(a);
        let high_exp = guess_decade(b);
        let detail = if low_exp == high_exp {
            f64::INFINITY
        } else {
            count as f64 / f64::from((low_exp - high_exp).abs())
        };
        let mut out = Vec::new();
        if a < 0.5 && b > 0.5 {
            out.push(0.5);
        }
        for i in low_exp..=high_exp {
            if i == 0 {
                continue;
            }
            if detail > 0.5 {
                let mut j = 0;
                while (j as f64) < detail && j < TICK_DIGITS.len() {
                    // The lowest decade above 0.5 only gets its first
                    // digit, or it would crowd the midpoint.
                    if i == low_exp && low_exp > 0 && j != 0 {
                        j += 1;
                        continue;
                    }
                    let tick = get_tick(i, TICK_DIGITS[j]);
                    j += 1;
                    let Some(tick) = tick else { continue };
                    if tick.is_nan() || tick == 0.0 || tick < a || tick > b {
                        continue;
                    }
                    out.push(tick);
                }
            } else if i == low_exp
                || i == high_exp
                || (detail > 0.25 && i % 2 == 0)
                || (detail > 0.1 && i % 4 == 0)
                || i % 8 == 0
            {
                if let Some(tick) = get_tick(i, 1) {
                    if !tick.is_nan() && tick != 0.0 {
                        out.push(tick);
                    }
                }
            }
        }
        out.sort_by(f64::total_cmp);
        out
    }

    /// Labels read as plain decimals through the middle of the unit
    /// interval and switch to exponent form at the extremes, mirrored as
    /// `1-1e-7` above 0.5 so tiny complements stay legible.
    fn tick_format(
        &self,
        domain: &[f64],
        count: usize,
        spec: Option<FormatSpec>,
    ) -> TickFormatter {
        if spec.is_some() {
            let start = domain.first().copied().unwrap_or(f64::NAN);
            let stop = domain.last().copied().unwrap_or(f64::NAN);
            return format::tick_format(start, stop, count, spec);
        }
        Box::new(|n: f64| {
            if (0.01..=0.99).contains(&n) {
                format!("{n:.2}")
            } else if n > 0.5 {
                format!("1-{:.0e}", 1.0 - n)
            } else {
                format!("{n:.0e}")
            }
        })
    }

    /// Widens each endpoint to the nearest enclosing power of ten, in
    /// probability space below 0.5 and in complement space above.
    fn nice(&self, domain: &mut [f64], _count: usize) {
        if domain.is_empty() {
            return;
        }
        let (mut i0, mut i1) = (0, domain.len() - 1);
        let (mut x0, mut x1) = (domain[i0], domain[i1]);
        if x1 < x0 {
            std::mem::swap(&mut i0, &mut i1);
            std::mem::swap(&mut x0, &mut x1);
        }
        domain[i0] = if x0 > 0.0 {
            pow10(x0.log10().floor())
        } else {
            f64::NAN
        };
        domain[i1] = 1.0 - pow10((1.0 - x1).log10().floor());
    }
}
