//! The weather reading consumed once per tick.
//!
//! Acquisition is an external concern: the core accepts either a
//! validated value object or an OpenWeatherMap-shaped current-conditions
//! document. A document with missing or out-of-range fields fails
//! loudly; substituting zeros would corrupt the energy model.

use crate::error::{SimError, SimResult};
use crate::types::HourOfDay;
use chrono::{FixedOffset, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

/// One shared weather sample. Immutable per tick; every node consumes
/// the same reading and adds its own sensor jitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Ambient temperature (°C).
    pub temperature_c: f64,
    /// Relative humidity (%).
    pub humidity_pct: f64,
    /// Cloud cover, 0–100.
    pub cloud_pct: f64,
    /// Local sunrise hour, 0–23.
    pub sunrise_hour: HourOfDay,
    /// Local sunset hour, 0–23.
    pub sunset_hour: HourOfDay,
}

impl WeatherReading {
    /// Validated constructor. Temperature and humidity are accepted as
    /// given; cloud cover and the two hours must be in range.
    pub fn new(
        temperature_c: f64,
        humidity_pct: f64,
        cloud_pct: f64,
        sunrise_hour: HourOfDay,
        sunset_hour: HourOfDay,
    ) -> SimResult<Self> {
        if !(0.0..=100.0).contains(&cloud_pct) {
            return Err(SimError::ReadingOutOfRange {
                field: "clouds.all",
                value: cloud_pct,
            });
        }
        if sunrise_hour > 23 {
            return Err(SimError::ReadingOutOfRange {
                field: "sunrise_hour",
                value: sunrise_hour as f64,
            });
        }
        if sunset_hour > 23 {
            return Err(SimError::ReadingOutOfRange {
                field: "sunset_hour",
                value: sunset_hour as f64,
            });
        }
        Ok(Self {
            temperature_c,
            humidity_pct,
            cloud_pct,
            sunrise_hour,
            sunset_hour,
        })
    }

    /// Parse an OpenWeatherMap current-conditions document.
    ///
    /// `timezone` is the station's UTC offset in seconds; `sys.sunrise`
    /// and `sys.sunset` arrive as epoch timestamps and are reduced to
    /// local hours-of-day, which is all the day/night cutover needs.
    pub fn from_owm_json(doc: &serde_json::Value) -> SimResult<Self> {
        let temperature_c = field_f64(doc, "main.temp", &["main", "temp"])?;
        let humidity_pct = field_f64(doc, "main.humidity", &["main", "humidity"])?;
        let cloud_pct = field_f64(doc, "clouds.all", &["clouds", "all"])?;
        let sunrise_ts = field_i64(doc, "sys.sunrise", &["sys", "sunrise"])?;
        let sunset_ts = field_i64(doc, "sys.sunset", &["sys", "sunset"])?;
        let offset_s = field_i64(doc, "timezone", &["timezone"])?;

        let tz = FixedOffset::east_opt(offset_s as i32).ok_or(SimError::ReadingOutOfRange {
            field: "timezone",
            value: offset_s as f64,
        })?;

        Self::new(
            temperature_c,
            humidity_pct,
            cloud_pct,
            local_hour(tz, sunrise_ts, "sys.sunrise")?,
            local_hour(tz, sunset_ts, "sys.sunset")?,
        )
    }
}

fn local_hour(tz: FixedOffset, epoch: i64, field: &'static str) -> SimResult<HourOfDay> {
    tz.timestamp_opt(epoch, 0)
        .single()
        .map(|t| t.hour())
        .ok_or(SimError::ReadingOutOfRange {
            field,
            value: epoch as f64,
        })
}

fn lookup<'a>(doc: &'a serde_json::Value, path: &[&str]) -> Option<&'a serde_json::Value> {
    path.iter().try_fold(doc, |v, key| v.get(key))
}

fn field_f64(doc: &serde_json::Value, name: &'static str, path: &[&str]) -> SimResult<f64> {
    lookup(doc, path)
        .and_then(|v| v.as_f64())
        .ok_or(SimError::MalformedReading { field: name })
}

fn field_i64(doc: &serde_json::Value, name: &'static str, path: &[&str]) -> SimResult<i64> {
    lookup(doc, path)
        .and_then(|v| v.as_i64())
        .ok_or(SimError::MalformedReading { field: name })
}
