//! Reprint the JSON output of `journalctl -o json` as one readable line per
//! entry, hidden fields included.
//!
//! Each input line goes through the same steps: it is decoded into a
//! [`RawRecord`], its priority and realtime timestamp are resolved, the
//! visible fields are picked according to a [`FieldSelection`] and a
//! [`Formatter`] lays it all out as text.
//!
//! # Example
//!
//! ```
//! use journalfields::{DecodedRecord, FieldSelection, Formatter, RawRecord, TimeZoneMode};
//!
//! let raw = RawRecord::decode(
//!     br#"{"MESSAGE":"hi","PRIORITY":"6","_COMM":"sshd","__REALTIME_TIMESTAMP":"1700000000000000","FOO":"bar"}"#,
//! )
//! .unwrap();
//! let record = DecodedRecord::new(&raw, &FieldSelection::Default).unwrap();
//! let line = Formatter::new()
//!     .with_timezone(TimeZoneMode::Utc)
//!     .render(&record);
//!
//! assert_eq!(line, "sshd time=\"2023-11-14T22:13:20Z\" level=info msg=hi FOO=bar\n");
//! ```

pub mod cli;
mod error;
mod record;
mod render;
mod select;
mod severity;
mod stream;
pub mod timestamp;
mod value;

pub use error::Error;
pub use record::{DecodedRecord, RawRecord};
pub use render::{Formatter, Rendered, TimeZoneMode};
pub use select::{is_hidden, FieldSelection, IGNORED_FIELDS};
pub use severity::{resolve_priority, Level, Severity, UNSET_PRIORITY};
pub use stream::{FailurePolicy, Pipeline, Summary};
pub use value::FieldValue;
