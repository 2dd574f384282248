use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// MSG is restricted to 7-bit ASCII, anything else can't be encoded.
    #[error("non-ascii character {ch:?} at byte {index} in message")]
    NonAsciiMessage { index: usize, ch: char },
    #[error("bad facility {0}")]
    BadFacility(u8),
    #[error("bad severity {0}")]
    BadSeverity(u8),
    #[error("unknown facility name {0:?}")]
    UnknownFacility(String),
    #[error("unknown severity name {0:?}")]
    UnknownSeverity(String),
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display() {
        let err = Error::NonAsciiMessage { index: 3, ch: 'é' };
        assert_eq!(err.to_string(), "non-ascii character 'é' at byte 3 in message");
        assert_eq!(Error::BadFacility(24).to_string(), "bad facility 24");
    }
}
