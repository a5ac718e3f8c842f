/// Most decimal places an `f64` can meaningfully be rounded to.
pub const MAX_DECIMALS: u32 = 15;

/// Rounds `value` to `decimals` decimal places, ties away from zero.
///
/// The tie is judged on the binary value after scaling, so `0.125` rounds to
/// `0.13` but `1.005` (stored as `1.00499…`) rounds to `1.0`. Above
/// [`MAX_DECIMALS`] the value is returned unchanged.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if decimals > MAX_DECIMALS {
        return value;
    }
    // Bounded above, so the conversion cannot fail and the factor is finite.
    let factor = 10_f64.powi(i32::try_from(decimals).unwrap_or_default());
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rounds_to_two_decimals() {
        assert_relative_eq!(round_to(std::f64::consts::SQRT_2, 2), 1.41);
        assert_relative_eq!(round_to(2.236_067_977, 2), 2.24);
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_relative_eq!(round_to(0.125, 2), 0.13);
        assert_relative_eq!(round_to(2.5, 0), 3.0);
        assert_relative_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn binary_representation_decides_ties() {
        assert_relative_eq!(round_to(1.005, 2), 1.0);
    }

    #[test]
    fn zero_decimals() {
        assert_relative_eq!(round_to(4.49, 0), 4.0);
    }

    #[test]
    fn max_decimals_stays_finite() {
        let v = round_to(std::f64::consts::PI, MAX_DECIMALS);
        assert!(v.is_finite());
        assert_relative_eq!(v, std::f64::consts::PI, epsilon = 1e-14);
    }

    #[test]
    fn excessive_decimals_leave_value_unchanged() {
        assert_eq!(round_to(5.0, 400).to_bits(), 5.0_f64.to_bits());
        assert_eq!(round_to(0.0, 308).to_bits(), 0.0_f64.to_bits());
        assert_eq!(round_to(1.234_567, 16).to_bits(), 1.234_567_f64.to_bits());
        assert_eq!(round_to(3.0, u32::MAX).to_bits(), 3.0_f64.to_bits());
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert!(round_to(f64::INFINITY, 2).is_infinite());
    }
}
