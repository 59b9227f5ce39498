//! Cell coercion primitives shared by the typed table readers.
//!
//! The rule everywhere: a cell that fails to parse is absent, never zero.
//! Blank cells in government exports are common and must not manufacture
//! false-zero metrics downstream.

/// Parses a cell as a finite number. Blank, non-numeric, infinite, and
/// NaN cells are all absent.
#[must_use]
pub fn parse_finite(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parses a cell as a non-negative whole population count.
///
/// Some exports publish populations as integer-valued floats
/// (`"100000.0"`); those are accepted. Negative or fractional values are
/// absent.
#[must_use]
pub fn parse_population(cell: &str) -> Option<u64> {
    let n = parse_finite(cell)?;
    if n < 0.0 || n.fract() != 0.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(n as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_finite("1000"), Some(1000.0));
        assert_eq!(parse_finite(" 12.5 "), Some(12.5));
        assert_eq!(parse_finite("-3.5"), Some(-3.5));
    }

    #[test]
    fn blank_cells_are_absent_not_zero() {
        assert_eq!(parse_finite(""), None);
        assert_eq!(parse_finite("   "), None);
    }

    #[test]
    fn rejects_non_numeric_and_non_finite() {
        assert_eq!(parse_finite("n/a"), None);
        assert_eq!(parse_finite("inf"), None);
        assert_eq!(parse_finite("NaN"), None);
    }

    #[test]
    fn population_accepts_integer_valued_floats() {
        assert_eq!(parse_population("100000"), Some(100_000));
        assert_eq!(parse_population("100000.0"), Some(100_000));
    }

    #[test]
    fn population_rejects_negative_and_fractional() {
        assert_eq!(parse_population("-5"), None);
        assert_eq!(parse_population("100.5"), None);
        assert_eq!(parse_population(""), None);
    }
}
