use crate::format::{self, FormatSpec, TickFormatter};
use crate::scale::custom::TickPolicy;
use crate::ticks::{self, tick_increment};

/// Decimal tick policy: ticks at multiples of 1, 2, 5, and 10 times a power
/// of ten, labels with just enough decimals to tell neighbors apart, and
/// nicing that widens the domain to tick-aligned endpoints.
///
/// This is the default policy for [`Custom`](crate::scale::Custom) scales.
///
/// # Examples
///
/// ```rust
/// use skala::{LinearTicks, TickPolicy};
///
/// assert_eq!(
///     LinearTicks.ticks(&[0.0, 1.0], 5),
///     vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0],
/// );
///
/// let mut domain = vec![0.7, 11.001];
/// LinearTicks.nice(&mut domain, 10);
/// assert_eq!(domain, vec![0.0, 12.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearTicks;

impl TickPolicy for LinearTicks {
    fn ticks(&self, domain: &[f64], count: usize) -> Vec<f64> {
        let start = domain.first().copied().unwrap_or(f64::NAN);
        let stop = domain.last().copied().unwrap_or(f64::NAN);
        ticks::ticks(start, stop, count)
    }

    fn tick_format(
        &self,
        domain: &[f64],
        count: usize,
        spec: Option<FormatSpec>,
    ) -> TickFormatter {
        let start = domain.first().copied().unwrap_or(f64::NAN);
        let stop = domain.last().copied().unwrap_or(f64::NAN);
        format::tick_format(start, stop, count, spec)
    }

    /// Widens the endpoint entries outward to tick-aligned values, keeping
    /// any interior entries as they are. The step is re-derived after each
    /// widening until it settles, since widening can change the step the
    /// interval wants.
    fn nice(&self, domain: &mut [f64], count: usize) {
        if domain.is_empty() {
            return;
        }
        let (mut i0, mut i1) = (0, domain.len() - 1);
        let (mut start, mut stop) = (domain[i0], domain[i1]);
        let mut prestep: Option<f64> = None;
        if stop < start {
            std::mem::swap(&mut start, &mut stop);
            std::mem::swap(&mut i0, &mut i1);
        }
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if prestep == Some(step) {
                domain[i0] = start;
                domain[i1] = stop;
                return;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }
    }
}
