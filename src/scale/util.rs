//! Small numeric helpers shared by the scale implementations.

/// Binary search over a sorted slice, returning the insertion point to the
/// right of any existing entries equal to `x`. `hi` is exclusive. Callers
/// clamp the result into a valid segment index, so `lo` and `hi` bound the
/// answer even for out-of-range `x`.
pub(crate) fn bisect_right(a: &[f64], x: f64, lo: usize, hi: usize) -> usize {
    let (mut lo, mut hi) = (lo, hi);
    while lo < hi {
        let mid = (lo + hi) / 2;
        if a[mid] <= x {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_segment_containing_a_value() {
        let a = [0.0, 0.5, 1.0];
        assert_eq!(bisect_right(&a, 0.25, 1, 2), 1);
        assert_eq!(bisect_right(&a, 0.75, 1, 2), 2);
    }

    #[test]
    fn equal_values_insert_to_the_right() {
        let a = [0.0, 0.5, 1.0];
        assert_eq!(bisect_right(&a, 0.5, 1, 2), 2);
    }

    #[test]
    fn out_of_range_values_stay_clamped_to_the_bounds() {
        let a = [0.0, 0.5, 1.0];
        assert_eq!(bisect_right(&a, -10.0, 1, 2), 1);
        assert_eq!(bisect_right(&a, 10.0, 1, 2), 2);
    }
}
