use std::fmt;

/// `ProcID`s are usually numeric PIDs; however, on some systems, they may be something else
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProcId<'a> {
    PID(u32),
    Name(&'a str),
}

/// Only canonical decimals become a `PID`, so `"0042"` or `"+42"` keep their
/// original spelling.
impl<'a> From<&'a str> for ProcId<'a> {
    fn from(s: &'a str) -> ProcId<'a> {
        match s.parse::<u32>() {
            Ok(pid) if pid.to_string() == s => ProcId::PID(pid),
            _ => ProcId::Name(s),
        }
    }
}

impl From<u32> for ProcId<'_> {
    fn from(pid: u32) -> Self {
        ProcId::PID(pid)
    }
}

impl ProcId<'_> {
    /// An empty name carries no information, RFC 5424 uses the NILVALUE for that.
    pub fn is_empty(&self) -> bool {
        matches!(self, ProcId::Name(name) if name.is_empty())
    }
}

impl fmt::Display for ProcId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcId::PID(pid) => write!(f, "{pid}"),
            ProcId::Name(name) => f.write_str(name),
        }
    }
}
