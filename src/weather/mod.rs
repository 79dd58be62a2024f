//! OpenWeatherMap current-conditions domain
//!
//! Query construction and response decoding for the current weather
//! endpoint: <https://openweathermap.org/current>

mod model;
mod query;

pub use model::{TemperatureUnit, WeatherData};
pub use query::{CurrentWeatherQuery, Units};
