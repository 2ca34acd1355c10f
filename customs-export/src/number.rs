//! Decimal rendering for masses, amounts and rates.

/// Masses carry at most three decimals (grams).
pub(crate) const MASS_PLACES: usize = 3;

/// Exchange rates carry at most six decimals.
pub(crate) const RATE_PLACES: usize = 6;

/// Monetary amounts always carry two decimals.
pub(crate) const AMOUNT_PLACES: usize = 2;

/// Round to `places` decimals, then drop trailing zeros and a dangling point.
pub(crate) fn trimmed(value: f64, places: usize) -> String {
    let text = fixed(value, places);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        text
    }
}

/// Round to exactly `places` decimals.
pub(crate) fn fixed(value: f64, places: usize) -> String {
    let text = format!("{value:.places$}");
    // -0.0 and values that round to zero from below print with a sign
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_owned()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masses_are_trimmed() {
        assert_eq!(trimmed(125.5, MASS_PLACES), "125.5");
        assert_eq!(trimmed(110.0, MASS_PLACES), "110");
        assert_eq!(trimmed(0.0004, MASS_PLACES), "0");
        assert_eq!(trimmed(12.3456, MASS_PLACES), "12.346");
        assert_eq!(trimmed(-0.0, MASS_PLACES), "0");
    }

    #[test]
    fn amounts_are_fixed() {
        assert_eq!(fixed(15000.0, AMOUNT_PLACES), "15000.00");
        assert_eq!(fixed(19.999, AMOUNT_PLACES), "20.00");
        assert_eq!(fixed(-0.001, AMOUNT_PLACES), "0.00");
    }

    #[test]
    fn rates_keep_precision() {
        assert_eq!(trimmed(2.712345, RATE_PLACES), "2.712345");
        assert_eq!(trimmed(1.0, RATE_PLACES), "1");
    }
}
