//! In-memory representation of a single journal entry.

use std::collections::btree_map::{self, BTreeMap};

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::Error;
use crate::select::FieldSelection;
use crate::severity::{resolve_priority, Level};
use crate::timestamp::decode_realtime;
use crate::value::FieldValue;

pub const MESSAGE: &str = "MESSAGE";
pub const PRIORITY: &str = "PRIORITY";
pub const COMM: &str = "_COMM";
pub const REALTIME_TIMESTAMP: &str = "__REALTIME_TIMESTAMP";

/// One line of `journalctl -o json`, field name to value. Names are kept
/// exactly as journald wrote them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl RawRecord {
    /// Parse one line of input. The line must be a JSON object.
    pub fn decode(line: &[u8]) -> Result<Self, Error> {
        let value: Value = serde_json::from_slice(line).map_err(|source| Error::Decode {
            input: String::from_utf8_lossy(line).into_owned(),
            source,
        })?;

        let Value::Object(map) = value else {
            return Err(Error::NotAnObject(String::from_utf8_lossy(line).into_owned()));
        };

        let fields = map
            .into_iter()
            .map(|(name, value)| (name, FieldValue::from(value)))
            .collect();

        Ok(RawRecord { fields })
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FieldValue> {
        self.fields.iter()
    }
}

/// Everything the renderer needs from one entry.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedRecord {
    pub priority: i64,
    pub command: Option<FieldValue>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub fields: BTreeMap<String, FieldValue>,
}

impl DecodedRecord {
    pub fn new(raw: &RawRecord, selection: &FieldSelection) -> Result<Self, Error> {
        let priority = resolve_priority(raw.get(PRIORITY))?;
        let timestamp = decode_realtime(raw.get(REALTIME_TIMESTAMP))?;

        Ok(DecodedRecord {
            priority,
            command: raw.get(COMM).cloned(),
            message: raw.get(MESSAGE).map(message_text).unwrap_or_default(),
            timestamp,
            fields: selection.visible_fields(raw),
        })
    }

    pub fn level(&self) -> Level {
        Level::from_priority(self.priority)
    }
}

/// journald exports messages that are not valid UTF-8 as an array of bytes.
fn message_text(value: &FieldValue) -> String {
    if let FieldValue::Array(items) = value {
        let bytes: Option<Vec<u8>> = items
            .iter()
            .map(|item| match item {
                FieldValue::Number(n) => n.as_u64().and_then(|b| u8::try_from(b).ok()),
                _ => None,
            })
            .collect();

        if let Some(bytes) = bytes {
            return String::from_utf8_lossy(&bytes).into_owned();
        }
    }

    value.to_string()
}
