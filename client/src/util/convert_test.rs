use super::*;

// =============================================================
// Temperature conversion
// =============================================================

#[test]
fn celsius_to_fahrenheit_hits_known_points() {
    assert_eq!(convert_temperature(0.0, TempUnit::Celsius, TempUnit::Fahrenheit), 32.0);
    assert_eq!(convert_temperature(100.0, TempUnit::Celsius, TempUnit::Fahrenheit), 212.0);
}

#[test]
fn fahrenheit_to_celsius_inverts() {
    assert_eq!(convert_temperature(32.0, TempUnit::Fahrenheit, TempUnit::Celsius), 0.0);
    let back = convert_temperature(
        convert_temperature(37.5, TempUnit::Celsius, TempUnit::Fahrenheit),
        TempUnit::Fahrenheit,
        TempUnit::Celsius,
    );
    assert!((back - 37.5).abs() < 1e-9);
}

#[test]
fn celsius_kelvin_offsets() {
    assert_eq!(convert_temperature(0.0, TempUnit::Celsius, TempUnit::Kelvin), 273.15);
    assert_eq!(convert_temperature(273.15, TempUnit::Kelvin, TempUnit::Celsius), 0.0);
}

#[test]
fn same_unit_is_identity() {
    assert_eq!(convert_temperature(-40.0, TempUnit::Kelvin, TempUnit::Kelvin), -40.0);
}

#[test]
fn fahrenheit_to_kelvin_goes_through_celsius() {
    let kelvin = convert_temperature(212.0, TempUnit::Fahrenheit, TempUnit::Kelvin);
    assert!((kelvin - 373.15).abs() < 1e-9);
}

// =============================================================
// Unit option parsing
// =============================================================

#[test]
fn option_values_round_trip() {
    for unit in [TempUnit::Celsius, TempUnit::Fahrenheit, TempUnit::Kelvin] {
        assert_eq!(TempUnit::from_option(unit.option_value()), Some(unit));
    }
}

#[test]
fn unknown_option_is_rejected() {
    assert_eq!(TempUnit::from_option("x"), None);
    assert_eq!(TempUnit::from_option(""), None);
}

// =============================================================
// Amount formatting
// =============================================================

#[test]
fn format_amount_trims_trailing_zeros() {
    assert_eq!(format_amount(32.0), "32");
    assert_eq!(format_amount(98.60), "98.6");
    assert_eq!(format_amount(0.25), "0.25");
}

#[test]
fn format_amount_rounds_to_two_decimals() {
    assert_eq!(format_amount(36.666_666), "36.67");
}

#[test]
fn format_amount_normalizes_negative_zero() {
    assert_eq!(format_amount(-0.001), "0");
}
