//! Encoder for [RFC 5424](https://tools.ietf.org/html/rfc5424) Syslog messages, plus the
//! ambient sensor station that feeds it.
//!
//! Usually, you'll just build a [`Record`] and call the `rfc5424::encode` function
//! (or [`Record::encode`]). The result is the bare message, framing it for a particular
//! transport (newline, octet counting, ...) is left to the caller.
//!
//! # Example
//!
//! Send a record to a syslog collector over UDP
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use dustmon::{Facility, Record, Severity};
//! use std::net::UdpSocket;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 3, 7)
//!     .unwrap()
//!     .and_hms_opt(9, 5, 0)
//!     .unwrap();
//! let record = Record::new(Facility::USER, Severity::NOTICE)
//!     .with_timestamp(ts)
//!     .with_hostname("sensor01")
//!     .with_appname("dustmon")
//!     .with_procid(42u32)
//!     .with_msg("pm25=12");
//!
//! let s = UdpSocket::bind("0.0.0.0:0").unwrap();
//! s.send_to(&record.encode().unwrap(), "127.0.0.1:514").unwrap();
//! ```
//!
//! # Unimplemented Features
//!
//!  * MSG is plain ASCII only. RFC 5424 prefers UTF-8 with a leading BOM, but messages
//!    containing anything outside ASCII are rejected instead.
//!  * Structured data is taken as already encoded bytes, there is no builder for
//!    SD-ELEMENTs and nothing gets escaped.
//!

mod error;
mod facility;
mod procid;
mod record;
pub mod rfc5424;
mod severity;
pub mod station;
mod timestamp;

pub use error::Error;
pub use facility::Facility;
pub use procid::ProcId;
pub use record::Record;
pub use rfc5424::{encode, prival};
pub use severity::Severity;
pub use timestamp::format_timestamp;
