//! Linear tick arithmetic: round tick sequences over an interval.
//!
//! Tick values land on multiples of 1, 2, 5, or 10 times a power of ten,
//! chosen so roughly `count` ticks cover `[start, stop]`. Sub-unit steps are
//! carried as negated reciprocals and applied by division, so the emitted
//! values are exact decimal quotients (`0.3`, not `0.30000000000000004`).
//!
//! # Examples
//!
//! ```rust
//! use skala::ticks::{tick_step, ticks};
//!
//! assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
//! assert_eq!(tick_step(0.0, 1.0, 10), 0.1);
//! ```

/// Upper bound on emitted ticks, so absurd counts degrade instead of
/// exhausting memory.
const MAX_TICKS: usize = 100_000;

/// Computes the inclusive index interval `[i1, i2]` and the increment for a
/// tick sequence. A negative increment encodes the reciprocal of a sub-unit
/// step. Assumes `start <= stop`.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    let (i1, i2, inc);
    if power < 0.0 {
        let unit = 10f64.powf(-power) / factor;
        let mut lo = (start * unit).round();
        let mut hi = (stop * unit).round();
        if lo / unit < start {
            lo += 1.0;
        }
        if hi / unit > stop {
            hi -= 1.0;
        }
        (i1, i2, inc) = (lo, hi, -unit);
    } else {
        let unit = 10f64.powf(power) * factor;
        let mut lo = (start / unit).round();
        let mut hi = (stop / unit).round();
        if lo * unit < start {
            lo += 1.0;
        }
        if hi * unit > stop {
            hi -= 1.0;
        }
        (i1, i2, inc) = (lo, hi, unit);
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        tick_spec(start, stop, count * 2.0)
    } else {
        (i1, i2, inc)
    }
}

/// Returns round ticks covering `[start, stop]`, roughly `count` of them.
///
/// A descending interval yields the descending sequence; `start == stop`
/// yields that single value; a zero count or NaN bounds yield no ticks.
///
/// # Examples
///
/// ```rust
/// use skala::ticks::ticks;
///
/// assert_eq!(
///     ticks(0.0, 100.0, 10),
///     vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0],
/// );
/// assert_eq!(ticks(1.0, 0.0, 5), vec![1.0, 0.8, 0.6, 0.4, 0.2, 0.0]);
/// ```
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count as f64)
    } else {
        tick_spec(start, stop, count as f64)
    };
    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = ((i2 - i1) + 1.0).min(MAX_TICKS as f64) as usize;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let j = if reverse { i2 - i as f64 } else { i1 + i as f64 };
        out.push(if inc < 0.0 { j / -inc } else { j * inc });
    }
    out
}

/// Returns the tick increment for `[start, stop]` at the given count: a
/// positive multiple-of-power-of-ten step, or the negated reciprocal of a
/// sub-unit step. Zero or NaN means no usable increment exists.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count as f64).2
}

/// Returns the signed absolute tick step for `[start, stop]` at the given
/// count (negative when the interval is descending).
///
/// # Examples
///
/// ```rust
/// use skala::ticks::tick_step;
///
/// assert_eq!(tick_step(0.0, 1.0, 10), 0.1);
/// assert_eq!(tick_step(1.0, 0.0, 10), -0.1);
/// ```
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let reverse = stop < start;
    let inc = if reverse {
        tick_spec(stop, start, count as f64).2
    } else {
        tick_spec(start, stop, count as f64).2
    };
    let sign = if reverse { -1.0 } else { 1.0 };
    sign * if inc < 0.0 { 1.0 / -inc } else { inc }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_interval_ten_ticks() {
        assert_eq!(
            ticks(0.0, 1.0, 10),
            vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0],
        );
    }

    #[test]
    fn unit_interval_five_ticks() {
        assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn ticks_stay_inside_the_interval() {
        // 1.0 exceeds 0.96 and is dropped by the bounds correction.
        assert_eq!(
            ticks(0.0, 0.96, 10),
            vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9],
        );
    }

    #[test]
    fn descending_interval_descends() {
        assert_eq!(
            ticks(1.0, 0.0, 10),
            vec![1.0, 0.9, 0.8, 0.7, 0.6, 0.5, 0.4, 0.3, 0.2, 0.1, 0.0],
        );
    }

    #[test]
    fn single_tick_request_widens_to_the_bounds() {
        assert_eq!(ticks(0.0, 1.0, 1), vec![0.0, 1.0]);
    }

    #[test]
    fn spanning_zero() {
        assert_eq!(ticks(-10.0, 10.0, 5), vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
    }

    #[test]
    fn degenerate_and_empty_requests() {
        assert_eq!(ticks(0.5, 0.5, 10), vec![0.5]);
        assert!(ticks(0.0, 1.0, 0).is_empty());
        assert!(ticks(f64::NAN, 1.0, 10).is_empty());
    }

    #[test]
    fn increments() {
        // Sub-unit steps come back as negated reciprocals.
        assert_eq!(tick_increment(0.0, 1.0, 10), -10.0);
        assert_eq!(tick_increment(0.0, 100.0, 10), 10.0);
    }

    #[test]
    fn steps() {
        assert_eq!(tick_step(0.0, 1.0, 10), 0.1);
        assert_eq!(tick_step(1.0, 0.0, 10), -0.1);
        assert_eq!(tick_step(0.001, 0.999, 10), 0.1);
    }
}
