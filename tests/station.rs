use std::io::{self, Write};
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use dustmon::station::{
    Barometer, Climate, Particulates, Poll, Sample, SensorError, Sensors, Station,
    StationConfig, StationError,
};
use dustmon::{Facility, Severity};

struct MockSensors {
    sps30_failures: usize,
}

impl Sensors for MockSensors {
    fn clock(&mut self) -> Result<NaiveDateTime, SensorError> {
        Ok(NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap())
    }

    fn cpu_temperature(&mut self) -> Result<f32, SensorError> {
        Ok(38.5)
    }

    fn climate(&mut self) -> Result<Climate, SensorError> {
        Ok(Climate {
            temperature: 21.5,
            relative_humidity: 40.0,
        })
    }

    fn barometer(&mut self) -> Result<Barometer, SensorError> {
        Ok(Barometer {
            pressure: 101000.0,
            altitude: 27.0,
            temperature: 21.0,
        })
    }

    fn particulates(&mut self) -> Result<Particulates, SensorError> {
        if self.sps30_failures > 0 {
            self.sps30_failures -= 1;
            return Err(SensorError::new("sps30", "data not ready"));
        }

        Ok(Particulates {
            typical_particle_size: 0.5,
            counts: [1.0, 2.0, 3.0, 4.0, 5.0],
            pm10: 6.0,
            pm25: 12.0,
            pm40: 13.0,
            pm100: 14.0,
        })
    }
}

fn station(sps30_failures: usize) -> Station<MockSensors> {
    let config = StationConfig::default()
        .with_hostname("sensor01")
        .with_procid("42")
        .with_interval(Duration::from_millis(1));

    Station::new(config, MockSensors { sps30_failures })
}

fn lines(encoded: &[Vec<u8>]) -> Vec<&str> {
    encoded
        .iter()
        .map(|msg| std::str::from_utf8(msg).unwrap())
        .collect()
}

#[test]
fn poll_encodes_one_record_per_peripheral() {
    let Poll { headline, records } = station(0).poll().unwrap().unwrap();

    assert_eq!(headline, "Thu 2024-03-07T09:05:00Z");
    assert_eq!(
        lines(&records),
        vec![
            "<13>1 2024-03-07T09:05:00Z sensor01 dustmon 42 cpu - cpu: 38.5C",
            "<13>1 2024-03-07T09:05:00Z sensor01 dustmon 42 htu21d - htu21d: 21.5C 40.0%RH",
            "<13>1 2024-03-07T09:05:00Z sensor01 dustmon 42 mpl3115 - mpl3115: 101000pa 27m 21.0C",
            "<13>1 2024-03-07T09:05:00Z sensor01 dustmon 42 sps30 - sps30: tps=0.5 n05=1 n10=2 n25=3 n40=4 n100=5 pm10=6 pm25=12 pm40=13 pm100=14",
        ]
    );
}

#[test]
fn sensor_failure_skips_poll() {
    let mut station = station(1);

    assert!(station.poll().unwrap().is_none());
    assert!(station.poll().unwrap().is_some());
}

#[test]
fn configured_priority() {
    let config = StationConfig::default()
        .with_facility(Facility::LOCAL3)
        .with_severity(Severity::INFO)
        .with_appname("air");
    let mut station = Station::new(config, MockSensors { sps30_failures: 0 });

    let records = station.poll().unwrap().unwrap().records;
    assert!(lines(&records)
        .iter()
        .all(|line| line.starts_with("<158>1 2024-03-07T09:05:00Z - air - ")));
}

#[test]
fn acquire_propagates_sensor_error() {
    let mut sensors = MockSensors { sps30_failures: 1 };

    assert_eq!(
        Sample::acquire(&mut sensors),
        Err(SensorError::new("sps30", "data not ready"))
    );
    assert!(Sample::acquire(&mut sensors).is_ok());
}

/// Accepts a fixed number of writes, then fails.
struct LimitedConsole {
    written: Vec<u8>,
    writes_left: usize,
}

impl Write for LimitedConsole {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.writes_left == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "console closed"));
        }

        self.writes_left -= 1;
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn run_writes_lines_until_console_fails() {
    let mut console = LimitedConsole {
        written: Vec::new(),
        writes_left: 10,
    };

    let err = station(1).run(&mut console).unwrap_err();
    assert!(matches!(err, StationError::Io(ref err) if err.kind() == io::ErrorKind::BrokenPipe));

    // first poll skipped, second one wrote the headline and all four records
    let written = String::from_utf8(console.written).unwrap();
    let lines = written.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Thu 2024-03-07T09:05:00Z");
    assert!(lines[1].starts_with("<13>1 2024-03-07T09:05:00Z sensor01 dustmon 42 cpu - "));
    assert!(written.ends_with("pm100=14\n"));
}
