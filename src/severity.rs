use std::str::FromStr;

use crate::Error;

/// Syslog Severities from RFC 5424.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(non_camel_case_types)]
#[repr(u8)]
pub enum Severity {
    EMERG = 0,
    ALERT = 1,
    CRIT = 2,
    ERR = 3,
    WARNING = 4,
    #[default]
    NOTICE = 5,
    INFO = 6,
    DEBUG = 7,
}

const ALL: [Severity; 8] = [
    Severity::EMERG,
    Severity::ALERT,
    Severity::CRIT,
    Severity::ERR,
    Severity::WARNING,
    Severity::NOTICE,
    Severity::INFO,
    Severity::DEBUG,
];

/// Convert an int (as used in the wire serialization) into a `Severity`
impl TryFrom<u8> for Severity {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ALL.get(value as usize)
            .copied()
            .ok_or(Error::BadSeverity(value))
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> u8 {
        severity as u8
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL.iter()
            .find(|sev| sev.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| Error::UnknownSeverity(s.to_string()))
    }
}

impl Severity {
    /// Convert a syslog severity into a unique string representation
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::EMERG => "emerg",
            Severity::ALERT => "alert",
            Severity::CRIT => "crit",
            Severity::ERR => "err",
            Severity::WARNING => "warning",
            Severity::NOTICE => "notice",
            Severity::INFO => "info",
            Severity::DEBUG => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deref() {
        assert_eq!(Severity::EMERG.as_str(), "emerg");
        assert_eq!(Severity::ALERT.as_str(), "alert");
        assert_eq!(Severity::CRIT.as_str(), "crit");
        assert_eq!(Severity::ERR.as_str(), "err");
        assert_eq!(Severity::WARNING.as_str(), "warning");
        assert_eq!(Severity::NOTICE.as_str(), "notice");
        assert_eq!(Severity::INFO.as_str(), "info");
        assert_eq!(Severity::DEBUG.as_str(), "debug");
    }

    #[test]
    fn int_conversion() {
        for i in 0..=7u8 {
            assert_eq!(u8::from(Severity::try_from(i).unwrap()), i);
        }

        assert_eq!(Severity::try_from(8), Err(Error::BadSeverity(8)));
    }

    #[test]
    fn parse_name() {
        assert_eq!("Warning".parse::<Severity>().unwrap(), Severity::WARNING);
        assert!("verbose".parse::<Severity>().is_err());
    }
}
