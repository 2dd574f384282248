use crate::timestamp::format_timestamp;
use crate::{Error, Facility, Record, Severity};

/// https://datatracker.ietf.org/doc/html/rfc5424#section-9.1
pub const VERSION: u8 = 1;

/// https://datatracker.ietf.org/doc/html/rfc5424#section-6.2
const NILVALUE: u8 = b'-';

/// PRIVAL is `facility * 8 + severity`, which always fits in `0..=191`.
#[inline]
pub fn prival(facility: Facility, severity: Severity) -> u8 {
    ((facility as u8) << 3) | severity as u8
}

#[inline]
fn push_field(buf: &mut Vec<u8>, value: Option<&str>) {
    match value {
        Some(value) if !value.is_empty() => buf.extend_from_slice(value.as_bytes()),
        _ => buf.push(NILVALUE),
    }
}

// MSG SHOULD be UTF-8 per section 6.4, but we stick to plain ASCII, so no
// BOM is ever written.
fn check_msg(msg: &str) -> Result<&[u8], Error> {
    match msg.char_indices().find(|(_, ch)| !ch.is_ascii()) {
        Some((index, ch)) => Err(Error::NonAsciiMessage { index, ch }),
        None => Ok(msg.as_bytes()),
    }
}

/// Encode a `Record` into RFC 5424 wire bytes
///
/// Output layout:
///
/// ```text
/// <PRIVAL>1 TIMESTAMP HOSTNAME APP-NAME PROCID MSGID STRUCTURED-DATA[ MSG]
/// ```
///
/// Header tokens are written verbatim, the caller is responsible for keeping
/// them free of whitespace. Structured data is opaque and is not validated or
/// escaped. No framing or trailing newline is added.
///
/// Fails only when the message holds a non-ASCII character, in which case
/// nothing is produced.
///
/// # Example
///
/// ```
/// use dustmon::{rfc5424, Facility, Record, Severity};
///
/// let record = Record::new(Facility::USER, Severity::NOTICE).with_msg("hello");
/// assert_eq!(rfc5424::encode(&record).unwrap(), b"<13>1 - - - - - - hello");
/// ```
pub fn encode(record: &Record<'_>) -> Result<Vec<u8>, Error> {
    // validate first, so a failure never leaves a half written message behind
    let msg = match record.msg {
        Some(msg) if !msg.is_empty() => Some(check_msg(msg)?),
        _ => None,
    };

    let sd = record.structured_data.filter(|sd| !sd.is_empty());
    let mut buf = Vec::with_capacity(
        64 + sd.map_or(0, <[u8]>::len) + msg.map_or(0, <[u8]>::len),
    );

    // PRI and VERSION
    //
    // https://datatracker.ietf.org/doc/html/rfc5424#section-6.2.1
    buf.push(b'<');
    buf.extend_from_slice(record.prival().to_string().as_bytes());
    buf.push(b'>');
    buf.extend_from_slice(VERSION.to_string().as_bytes());
    buf.push(b' ');

    let timestamp = record.timestamp.as_ref().map(format_timestamp);
    push_field(&mut buf, timestamp.as_deref());
    buf.push(b' ');

    push_field(&mut buf, record.hostname);
    buf.push(b' ');

    push_field(&mut buf, record.appname);
    buf.push(b' ');

    let procid = record
        .procid
        .filter(|procid| !procid.is_empty())
        .map(|procid| procid.to_string());
    push_field(&mut buf, procid.as_deref());
    buf.push(b' ');

    push_field(&mut buf, record.msgid);
    buf.push(b' ');

    // https://datatracker.ietf.org/doc/html/rfc5424#section-6.3
    match sd {
        Some(sd) => buf.extend_from_slice(sd),
        None => buf.push(NILVALUE),
    }

    if let Some(msg) = msg {
        buf.push(b' ');
        buf.extend_from_slice(msg);
    }

    Ok(buf)
}
