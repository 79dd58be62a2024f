//! Periodic weather refresh
//!
//! [`Station`] owns the configured fetch manager and republishes the latest
//! conditions over a watch channel. Watch mode refreshes on the configured
//! interval; a failed fetch keeps the previous snapshot.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::config::Config;
use crate::fetch::HttpManager;
use crate::weather::{CurrentWeatherQuery, Units, WeatherData};
use crate::Result;

/// Latest conditions plus the time they were fetched
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub data: WeatherData,
    pub fetched_at: DateTime<Utc>,
}

/// Weather station bound to one API endpoint
pub struct Station {
    config: Config,
    manager: HttpManager,
    snapshot_tx: watch::Sender<Option<Snapshot>>,
}

impl Station {
    /// Create a station from configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let manager = HttpManager::from_str(&config.api_base_url)?;
        let (snapshot_tx, _) = watch::channel(None);
        Ok(Station {
            config,
            manager,
            snapshot_tx,
        })
    }

    /// Subscribe to snapshot updates
    pub fn subscribe(&self) -> watch::Receiver<Option<Snapshot>> {
        self.snapshot_tx.subscribe()
    }

    /// The manager requests are issued through
    pub fn manager(&self) -> &HttpManager {
        &self.manager
    }

    /// Fetch current conditions for a coordinate once.
    ///
    /// Always requests metric units; conversion to the display unit happens
    /// at render time, so the stored Celsius temperature stays truthful.
    pub async fn fetch_current(&self, lat: f64, lon: f64) -> Result<WeatherData> {
        let mut query = CurrentWeatherQuery::new(lat, lon).units(Units::Metric);
        if let Some(key) = &self.config.api_key {
            query = query.api_key(key.clone());
        }

        let value = self.manager.fetch_json(Some(&query.to_path())).await?;
        let data = WeatherData::from_json(&value)?;

        self.snapshot_tx.send_replace(Some(Snapshot {
            data: data.clone(),
            fetched_at: Utc::now(),
        }));

        Ok(data)
    }

    /// Refresh on the configured interval until ctrl-c.
    ///
    /// The first fetch happens immediately. Failed fetches are logged and
    /// skipped, never fatal.
    pub async fn run(&self, lat: f64, lon: f64) -> Result<()> {
        info!(
            "Refreshing ({}, {}) every {}s",
            lat, lon, self.config.refresh_interval
        );

        let mut ticker =
            tokio::time::interval(Duration::from_secs(self.config.refresh_interval));

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match self.fetch_current(lat, lon).await {
                        Ok(data) => info!("Fetched conditions for {}", data.name),
                        Err(e) => warn!("Fetch failed: {}", e),
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Received shutdown signal");
                    return Ok(());
                }
            }
        }
    }
}
