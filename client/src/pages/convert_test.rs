use super::*;

#[test]
fn parse_amount_accepts_plain_numbers() {
    assert_eq!(parse_amount("20"), Some(20.0));
    assert_eq!(parse_amount("-3.5"), Some(-3.5));
}

#[test]
fn parse_amount_trims_whitespace() {
    assert_eq!(parse_amount("  98.6  "), Some(98.6));
}

#[test]
fn parse_amount_rejects_empty_and_junk() {
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("   "), None);
    assert_eq!(parse_amount("warm"), None);
}

#[test]
fn parse_amount_rejects_non_finite_values() {
    assert_eq!(parse_amount("1e999"), None);
    assert_eq!(parse_amount("NaN"), None);
}
