//! localweather - async JSON fetch core and current-conditions client
//!
//! The crate is built around a small HTTP-GET-and-decode-JSON core:
//! - [`fetch::HttpManager`] resolves relative paths against a base URL
//! - [`fetch::fetch_json_at_url`] fetches a fully qualified URL string
//!
//! On top of it sits the weather layer: a typed current-conditions model,
//! query construction for the OpenWeatherMap API, display formatting, and a
//! station that refreshes periodically and publishes snapshots over a watch
//! channel.
//!
//! # Architecture
//!
//! ```text
//! +-----------+     +-----------+
//! |  main.rs  |     | config/   |
//! +-----+-----+     +-----+-----+
//!       |                 |
//!       +---------+-------+
//!                 |
//!          +------v------+
//!          |  station/   |
//!          +------+------+
//!                 |
//!       +---------+---------+
//!       |                   |
//! +-----v-----+       +-----v-----+
//! |  weather/ |       |  fetch/   |
//! | (model)   |       | (GET+JSON)|
//! +-----------+       +-----------+
//! ```

pub mod common;
pub mod config;
pub mod fetch;
pub mod station;
pub mod weather;

pub use common::error::{Error, Result};
pub use config::Config;
pub use fetch::{fetch_json_at_url, HttpManager};
pub use station::{Snapshot, Station};
pub use weather::{TemperatureUnit, WeatherData};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
