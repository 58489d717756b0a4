/// Round to one decimal place the way the assessment form always has.
///
/// Matches `Number.prototype.toFixed(1)` followed by a numeric parse: the
/// result is the one-decimal value nearest to the *exact* binary value of
/// `value`, so `0.15` (stored as `0.14999…`) rounds down to `0.1`. When the
/// binary value sits exactly halfway, which only happens for odd multiples of
/// `0.25`, the larger magnitude wins.
pub fn round1(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let tenths = value.abs() * 10.0 + 0.5;
        return (tenths / 10.0).copysign(value);
    }

    // `{:.1}` rounds the exact binary expansion, and parsing the decimal back
    // picks the nearest double, so this cannot drift from the form.
    format!("{value:.1}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_on_exact_binary_value() {
        assert_eq!(round1(0.15), 0.1);
        assert_eq!(round1(0.35), 0.3);
        assert_eq!(round1(1.45), 1.4);
        assert_eq!(round1(2.65), 2.6);
        assert_eq!(round1(0.95), 0.9);
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round1(0.75), 0.8);
        assert_eq!(round1(12.25), 12.3);
        assert_eq!(round1(-0.25), -0.3);
    }

    #[test]
    fn ordinary_values() {
        assert_eq!(round1(24.691358024691358), 24.7);
        assert_eq!(round1(80.0), 80.0);
        assert_eq!(round1(0.04), 0.0);
        assert_eq!(round1(9.96), 10.0);
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(round1(f64::NAN).is_nan());
        assert_eq!(round1(f64::INFINITY), f64::INFINITY);
    }
}
