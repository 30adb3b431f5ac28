use std::num::ParseIntError;

/// Stock quantity. Signed so that removals can be checked for going to or
/// below zero before the entry is dropped.
pub type Quantity = i64;

/// Parse a caller-supplied quantity: optional sign, base-10 digits,
/// surrounding whitespace ignored.
pub fn parse_quantity(raw: &str) -> Result<Quantity, ParseIntError> {
    raw.trim().parse::<Quantity>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_integers() {
        assert_eq!(parse_quantity("10").ok(), Some(10));
        assert_eq!(parse_quantity(" -5 ").ok(), Some(-5));
        assert_eq!(parse_quantity("+3").ok(), Some(3));
    }

    #[test]
    fn rejects_non_integers() {
        for raw in ["ten", "1.5", "", "  ", "3 apples", "99999999999999999999"] {
            assert!(parse_quantity(raw).is_err(), "{raw:?} should be rejected");
        }
    }
}
