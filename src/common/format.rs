//! Display formatting helpers
//!
//! Renders numbers and weather reports for terminal output. Kept free of any
//! I/O so the same formatting is usable from the library and the binary.

use crate::weather::{TemperatureUnit, WeatherData};

/// Format a number with a fixed count of fraction digits.
///
/// Both the minimum and maximum fraction digits are pinned, so
/// `format_number(7.0, 2)` yields `"7.00"` and `format_number(3.14159, 2)`
/// yields `"3.14"`.
pub fn format_number(value: f64, fraction_digits: usize) -> String {
    format!("{value:.fraction_digits$}")
}

/// Render a multi-line current-conditions report.
///
/// A country code of `"none"` is rendered as an empty country line, matching
/// the sentinel some stations report instead of omitting the field.
pub fn format_report(data: &WeatherData, unit: TemperatureUnit) -> String {
    let country = if data.country_code == "none" {
        ""
    } else {
        data.country_code.as_str()
    };

    format!(
        "{name}\n{country}\n{temp}°{abbr}\n{humidity} %\n{pressure} hPa",
        name = data.name,
        country = country,
        temp = data.temperature_for_unit(unit),
        abbr = unit.abbreviation(),
        humidity = data.humidity,
        pressure = data.pressure,
    )
}
