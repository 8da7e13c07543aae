//! Numeral formatting for the calculator display.
//!
//! Pure functions — no I/O, easily testable.

/// Scale factor for rounding results to 11 decimal places.
///
/// Binary floating point cannot represent most decimal fractions exactly;
/// without this, `0.1 + 0.2` would display as `0.30000000000000004`.
const ROUND_SCALE: f64 = 1e11;

/// Round a computed result to 11 decimal places.
pub fn round_result(value: f64) -> f64 {
    (value * ROUND_SCALE).round() / ROUND_SCALE
}

/// Render a value as its canonical numeral string.
///
/// Shortest representation that round-trips: `14` not `14.0`, `0.3` not
/// `0.30000000000000004` (assuming the value was rounded first). Negative
/// zero normalizes to `"0"`.
pub fn canonical(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_render_without_fraction() {
        assert_eq!(canonical(14.0), "14");
        assert_eq!(canonical(-3.0), "-3");
        assert_eq!(canonical(0.0), "0");
    }

    #[test]
    fn fractions_render_shortest() {
        assert_eq!(canonical(0.3), "0.3");
        assert_eq!(canonical(-2.5), "-2.5");
    }

    #[test]
    fn negative_zero_normalizes() {
        assert_eq!(canonical(-0.0), "0");
    }

    #[test]
    fn rounding_absorbs_float_noise() {
        let sum = 0.1 + 0.2;
        assert_ne!(canonical(sum), "0.3"); // the raw artifact
        assert_eq!(canonical(round_result(sum)), "0.3");
    }

    #[test]
    fn rounding_keeps_eleven_decimal_places() {
        let third = round_result(1.0 / 3.0);
        assert_eq!(canonical(third), "0.33333333333");
    }

    #[test]
    fn rounding_leaves_integers_alone() {
        assert_eq!(round_result(7.0), 7.0);
        assert_eq!(round_result(-40.0), -40.0);
    }
}
