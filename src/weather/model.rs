//! Current-conditions data model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// Temperature unit preference for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Single-letter abbreviation used after the degree sign
    pub fn abbreviation(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemperatureUnit::Celsius => write!(f, "Celsius"),
            TemperatureUnit::Fahrenheit => write!(f, "Fahrenheit"),
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "celsius" | "c" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" | "f" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(Error::config(format!("invalid temperature unit: {s}"))),
        }
    }
}

/// Decoded current conditions for one location.
///
/// The temperature is stored in whole degrees Celsius regardless of the
/// display preference; conversion happens at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherData {
    /// Reporting station / city name
    pub name: String,
    /// ISO country code, or the literal `"none"` for some stations
    pub country_code: String,
    /// Temperature in whole degrees Celsius
    pub temperature_celsius: i32,
    /// Relative humidity in percent
    pub humidity: u32,
    /// Atmospheric pressure in hPa
    pub pressure: u32,
}

impl WeatherData {
    /// Decode from a current-weather JSON payload.
    ///
    /// `main.temp` and `sys.country` are required; humidity and pressure
    /// default to 0 and a missing name becomes `"Unknown"`.
    pub fn from_json(value: &Value) -> Result<Self> {
        let raw: RawCurrent = serde_json::from_value(value.clone())?;
        Ok(WeatherData {
            name: raw.name.unwrap_or_else(|| "Unknown".to_string()),
            country_code: raw.sys.country,
            temperature_celsius: raw.main.temp.round() as i32,
            humidity: raw.main.humidity,
            pressure: raw.main.pressure,
        })
    }

    /// Temperature converted to whole degrees Fahrenheit
    pub fn temperature_fahrenheit(&self) -> i32 {
        (f64::from(self.temperature_celsius) * 1.8 + 32.0).round() as i32
    }

    /// Temperature in the requested unit
    pub fn temperature_for_unit(&self, unit: TemperatureUnit) -> i32 {
        match unit {
            TemperatureUnit::Celsius => self.temperature_celsius,
            TemperatureUnit::Fahrenheit => self.temperature_fahrenheit(),
        }
    }
}

/// Wire shape of the fields we keep; everything else is ignored
#[derive(Debug, Deserialize)]
struct RawCurrent {
    main: RawMain,
    sys: RawSys,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawMain {
    temp: f64,
    #[serde(default)]
    humidity: u32,
    #[serde(default)]
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct RawSys {
    country: String,
}
