//! Current weather query construction

use std::fmt;

/// Measurement system for the API `units` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    /// Kelvin, the API default
    Standard,
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Standard => "standard",
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Builder for the current-conditions endpoint path.
///
/// Produces a path relative to the API base URL, suitable for
/// `HttpManager::fetch_json`:
/// `weather?lat=33.92&lon=-84.38&units=metric&APPID=..`
#[derive(Debug, Clone)]
pub struct CurrentWeatherQuery {
    lat: f64,
    lon: f64,
    units: Units,
    api_key: Option<String>,
}

impl CurrentWeatherQuery {
    pub fn new(lat: f64, lon: f64) -> Self {
        CurrentWeatherQuery {
            lat,
            lon,
            units: Units::default(),
            api_key: None,
        }
    }

    pub fn units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    /// Attach an API key, sent as the `APPID` query parameter
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Render the relative endpoint path
    pub fn to_path(&self) -> String {
        let mut path = format!(
            "weather?lat={}&lon={}&units={}",
            self.lat, self.lon, self.units
        );
        if let Some(key) = &self.api_key {
            path.push_str("&APPID=");
            path.push_str(key);
        }
        path
    }
}
