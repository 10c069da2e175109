use crate::error::Error;
use crate::value::FieldValue;

/// Priority a record carries when `PRIORITY` is missing or null.
pub const UNSET_PRIORITY: i64 = -1;

/// Syslog priorities as journald stores them in `PRIORITY`, 0 being the most severe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(non_camel_case_types)]
pub enum Severity {
    EMERG = 0,
    ALERT = 1,
    CRIT = 2,
    ERR = 3,
    WARNING = 4,
    NOTICE = 5,
    INFO = 6,
    DEBUG = 7,
}

impl Severity {
    pub fn from_int(i: i64) -> Option<Self> {
        let severity = match i {
            0 => Severity::EMERG,
            1 => Severity::ALERT,
            2 => Severity::CRIT,
            3 => Severity::ERR,
            4 => Severity::WARNING,
            5 => Severity::NOTICE,
            6 => Severity::INFO,
            7 => Severity::DEBUG,
            _ => return None,
        };

        Some(severity)
    }
}

/// Resolve the raw `PRIORITY` value into a priority code.
///
/// Absent and null both mean [`UNSET_PRIORITY`]. Strings must hold a base-10
/// integer; mixed-type exports may also carry a plain JSON integer.
pub fn resolve_priority(raw: Option<&FieldValue>) -> Result<i64, Error> {
    match raw {
        None | Some(FieldValue::Null) => Ok(UNSET_PRIORITY),
        Some(FieldValue::String(s)) => s.parse().map_err(|err| Error::invalid_priority(s, err)),
        Some(FieldValue::Number(n)) => n.as_i64().ok_or_else(|| Error::InvalidPriority {
            value: n.to_string(),
            reason: "not a 64-bit integer".to_string(),
        }),
        Some(other) => Err(Error::InvalidPriority {
            value: other.to_string(),
            reason: "not an integer".to_string(),
        }),
    }
}

/// Rendering level of a record.
///
/// `Fatal` and `Panic` are labels only, rendering a record at either level
/// never stops the stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Panic,
    Fatal,
    Error,
    Warning,
    Info,
    Debug,
}

impl Level {
    /// Map a priority code onto a level. Codes without a dedicated level,
    /// [`UNSET_PRIORITY`] included, render as `Info`.
    pub fn from_priority(priority: i64) -> Self {
        match Severity::from_int(priority) {
            Some(Severity::DEBUG) => Level::Debug,
            Some(Severity::INFO) => Level::Info,
            Some(Severity::WARNING) => Level::Warning,
            Some(Severity::ERR) => Level::Error,
            Some(Severity::CRIT) => Level::Fatal,
            Some(Severity::EMERG) => Level::Panic,
            _ => Level::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Panic => "panic",
            Level::Fatal => "fatal",
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }

    /// Four letter upper-case tag used by the colored layout.
    pub fn tag(self) -> &'static str {
        match self {
            Level::Panic => "PANI",
            Level::Fatal => "FATA",
            Level::Error => "ERRO",
            Level::Warning => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBU",
        }
    }
}
