//! Ambient sensor station.
//!
//! Polls a set of peripherals at a fixed interval and turns every reading
//! into an RFC 5424 record. The hardware lives behind the [`Sensors`] trait
//! and the bytes go to whatever [`Write`] the caller hands over, no network
//! transport is provided here.

use std::io::Write;
use std::time::Duration;

use chrono::{Datelike, NaiveDateTime};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::timestamp::format_timestamp;
use crate::{Facility, ProcId, Record, Severity};

/// A peripheral could not be read.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("can't read {sensor}: {reason}")]
pub struct SensorError {
    pub sensor: &'static str,
    pub reason: String,
}

impl SensorError {
    pub fn new(sensor: &'static str, reason: impl Into<String>) -> Self {
        SensorError {
            sensor,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StationError {
    #[error("encode failed: {0}")]
    Encode(#[from] crate::Error),
    #[error("console write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// HTU21D readings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Climate {
    /// Celsius
    pub temperature: f32,
    /// Percent
    pub relative_humidity: f32,
}

/// MPL3115A2 readings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Barometer {
    /// Pascals
    pub pressure: f32,
    /// Meters, relative to the configured sea level pressure
    pub altitude: f32,
    /// Celsius
    pub temperature: f32,
}

/// SPS30 readings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Particulates {
    /// Typical particle size, micrometers
    pub typical_particle_size: f32,
    /// Number concentration per cm3 for particles up to 0.5, 1.0, 2.5, 4.0
    /// and 10 micrometers
    pub counts: [f32; 5],
    /// Mass concentration in ug/m3 of PM1.0, PM2.5, PM4.0 and PM10
    pub pm10: f32,
    pub pm25: f32,
    pub pm40: f32,
    pub pm100: f32,
}

/// The hardware the station reads from.
pub trait Sensors {
    /// Current time from the real-time clock, in UTC.
    fn clock(&mut self) -> Result<NaiveDateTime, SensorError>;

    /// Temperature of the microcontroller itself, in Celsius.
    fn cpu_temperature(&mut self) -> Result<f32, SensorError>;

    fn climate(&mut self) -> Result<Climate, SensorError>;

    fn barometer(&mut self) -> Result<Barometer, SensorError>;

    fn particulates(&mut self) -> Result<Particulates, SensorError>;
}

/// One reading of every peripheral.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub time: NaiveDateTime,
    pub cpu_temperature: f32,
    pub climate: Climate,
    pub barometer: Barometer,
    pub particulates: Particulates,
}

impl Sample {
    pub fn acquire<S: Sensors + ?Sized>(sensors: &mut S) -> Result<Self, SensorError> {
        Ok(Sample {
            time: sensors.clock()?,
            cpu_temperature: sensors.cpu_temperature()?,
            climate: sensors.climate()?,
            barometer: sensors.barometer()?,
            particulates: sensors.particulates()?,
        })
    }

    /// Human readable time, e.g. `Thu 2024-03-07T09:05:00Z`
    pub fn headline(&self) -> String {
        format!("{} {}", self.time.weekday(), format_timestamp(&self.time))
    }

    /// One `(msgid, text)` pair per peripheral. All text is plain ASCII.
    pub fn messages(&self) -> [(&'static str, String); 4] {
        let Climate {
            temperature,
            relative_humidity,
        } = self.climate;
        let baro = &self.barometer;
        let pm = &self.particulates;

        [
            ("cpu", format!("cpu: {:.1}C", self.cpu_temperature)),
            (
                "htu21d",
                format!("htu21d: {temperature:.1}C {relative_humidity:.1}%RH"),
            ),
            (
                "mpl3115",
                format!(
                    "mpl3115: {:.0}pa {:.0}m {:.1}C",
                    baro.pressure, baro.altitude, baro.temperature
                ),
            ),
            (
                "sps30",
                format!(
                    "sps30: tps={} n05={} n10={} n25={} n40={} n100={} pm10={} pm25={} pm40={} pm100={}",
                    pm.typical_particle_size,
                    pm.counts[0],
                    pm.counts[1],
                    pm.counts[2],
                    pm.counts[3],
                    pm.counts[4],
                    pm.pm10,
                    pm.pm25,
                    pm.pm40,
                    pm.pm100
                ),
            ),
        ]
    }
}

#[derive(Clone, Debug)]
pub struct StationConfig {
    pub facility: Facility,
    pub severity: Severity,
    pub hostname: Option<String>,
    pub appname: Option<String>,
    pub procid: Option<String>,
    /// Pause between two polls
    pub interval: Duration,
}

impl Default for StationConfig {
    fn default() -> Self {
        StationConfig {
            facility: Facility::USER,
            severity: Severity::NOTICE,
            hostname: None,
            appname: Some("dustmon".to_string()),
            procid: None,
            interval: Duration::from_secs(5),
        }
    }
}

impl StationConfig {
    pub fn with_facility(mut self, facility: Facility) -> Self {
        self.facility = facility;
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn with_appname(mut self, appname: impl Into<String>) -> Self {
        self.appname = Some(appname.into());
        self
    }

    pub fn with_procid(mut self, procid: impl Into<String>) -> Self {
        self.procid = Some(procid.into());
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

/// Outcome of a single poll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poll {
    /// See [`Sample::headline`]
    pub headline: String,
    /// One encoded record per peripheral
    pub records: Vec<Vec<u8>>,
}

pub struct Station<S> {
    config: StationConfig,
    sensors: S,
}

impl<S: Sensors> Station<S> {
    pub fn new(config: StationConfig, sensors: S) -> Self {
        Station { config, sensors }
    }

    /// Encode a sample, one message per peripheral.
    pub fn encode_sample(&self, sample: &Sample) -> Result<Vec<Vec<u8>>, crate::Error> {
        let config = &self.config;
        let messages = sample.messages();

        messages
            .iter()
            .map(|(msgid, text)| {
                let record = Record {
                    facility: config.facility,
                    severity: config.severity,
                    timestamp: Some(sample.time),
                    hostname: config.hostname.as_deref(),
                    appname: config.appname.as_deref(),
                    procid: config.procid.as_deref().map(ProcId::from),
                    msgid: Some(*msgid),
                    structured_data: None,
                    msg: Some(text.as_str()),
                };

                record.encode()
            })
            .collect()
    }

    /// Read every sensor once and encode the result.
    ///
    /// `Ok(None)` means a sensor failed and this poll was skipped.
    pub fn poll(&mut self) -> Result<Option<Poll>, StationError> {
        let sample = match Sample::acquire(&mut self.sensors) {
            Ok(sample) => sample,
            Err(err) => {
                warn!("{}, skipping poll", err);
                return Ok(None);
            }
        };

        let headline = sample.headline();
        debug!("sample acquired at {}", headline);

        let records = self.encode_sample(&sample)?;
        for msg in &records {
            debug!(len = msg.len(), "record encoded");
        }

        Ok(Some(Poll { headline, records }))
    }

    /// Poll forever, writing the headline and then each encoded record as a
    /// line to `console`.
    ///
    /// Only returns when something goes wrong.
    pub fn run<W: Write>(&mut self, mut console: W) -> Result<(), StationError> {
        info!(
            interval = ?self.config.interval,
            facility = self.config.facility.as_str(),
            severity = self.config.severity.as_str(),
            "station started"
        );

        loop {
            if let Some(Poll { headline, records }) = self.poll()? {
                console.write_all(headline.as_bytes())?;
                console.write_all(b"\n")?;
                for msg in records {
                    console.write_all(&msg)?;
                    console.write_all(b"\n")?;
                }
                console.flush()?;
            }

            std::thread::sleep(self.config.interval);
        }
    }
}
