//! In-memory representation of a single Syslog record, ready to be encoded.

use chrono::NaiveDateTime;

use crate::facility::Facility;
use crate::procid::ProcId;
use crate::severity::Severity;
use crate::Error;

/// A RFC5424-protocol syslog record.
///
/// Every optional field is independent. `None` and an empty value both end
/// up as the NILVALUE `-` on the wire.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Record<'a> {
    pub facility: Facility,
    pub severity: Severity,
    /// Interpreted as UTC.
    pub timestamp: Option<NaiveDateTime>,
    pub hostname: Option<&'a str>,
    pub appname: Option<&'a str>,
    pub procid: Option<ProcId<'a>>,
    pub msgid: Option<&'a str>,
    // NOTE: passed through untouched, the caller is responsible for the
    // SD-ELEMENT syntax and its escaping.
    pub structured_data: Option<&'a [u8]>,
    pub msg: Option<&'a str>,
}

impl<'a> Record<'a> {
    pub fn new(facility: Facility, severity: Severity) -> Self {
        Record {
            facility,
            severity,
            ..Default::default()
        }
    }

    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_hostname(mut self, hostname: &'a str) -> Self {
        self.hostname = Some(hostname);
        self
    }

    pub fn with_appname(mut self, appname: &'a str) -> Self {
        self.appname = Some(appname);
        self
    }

    pub fn with_procid(mut self, procid: impl Into<ProcId<'a>>) -> Self {
        self.procid = Some(procid.into());
        self
    }

    pub fn with_msgid(mut self, msgid: &'a str) -> Self {
        self.msgid = Some(msgid);
        self
    }

    pub fn with_structured_data(mut self, structured_data: &'a [u8]) -> Self {
        self.structured_data = Some(structured_data);
        self
    }

    pub fn with_msg(mut self, msg: &'a str) -> Self {
        self.msg = Some(msg);
        self
    }

    /// PRIVAL of this record, see [`crate::rfc5424::prival`].
    pub fn prival(&self) -> u8 {
        crate::rfc5424::prival(self.facility, self.severity)
    }

    /// Shorthand for [`crate::rfc5424::encode`].
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        crate::rfc5424::encode(self)
    }
}
