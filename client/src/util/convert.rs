//! Unit conversion math for the converter widget.

#[cfg(test)]
#[path = "convert_test.rs"]
mod convert_test;

/// Temperature units supported by the converter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TempUnit {
    /// Display suffix for a converted amount.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
        }
    }

    /// Value used in the unit `<select>` options.
    #[must_use]
    pub fn option_value(self) -> &'static str {
        match self {
            Self::Celsius => "c",
            Self::Fahrenheit => "f",
            Self::Kelvin => "k",
        }
    }

    /// Parse a unit `<select>` option value.
    #[must_use]
    pub fn from_option(value: &str) -> Option<Self> {
        match value {
            "c" => Some(Self::Celsius),
            "f" => Some(Self::Fahrenheit),
            "k" => Some(Self::Kelvin),
            _ => None,
        }
    }
}

/// Convert `value` between temperature units via a Celsius pivot.
#[must_use]
pub fn convert_temperature(value: f64, from: TempUnit, to: TempUnit) -> f64 {
    let celsius = match from {
        TempUnit::Celsius => value,
        TempUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TempUnit::Kelvin => value - 273.15,
    };
    match to {
        TempUnit::Celsius => celsius,
        TempUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        TempUnit::Kelvin => celsius + 273.15,
    }
}

/// Format a converted amount: two decimals with trailing zeros trimmed.
#[must_use]
pub fn format_amount(value: f64) -> String {
    let mut text = format!("{value:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    if text == "-0" {
        text = "0".to_owned();
    }
    text
}
