use std::collections::BTreeMap;

use crate::record::RawRecord;
use crate::value::FieldValue;

/// Non-hidden fields that are already part of the rendered line, or that
/// only duplicate what it shows.
pub const IGNORED_FIELDS: [&str; 6] = [
    "MESSAGE",
    "MESSAGE_ID",
    "PRIORITY",
    "SYSLOG_FACILITY",
    "SYSLOG_IDENTIFIER",
    "SYSLOG_PID",
];

/// Which fields of a record end up in the rendered line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldSelection {
    /// Everything except hidden fields and [`IGNORED_FIELDS`].
    #[default]
    Default,
    /// Exactly these fields, upper-cased, whether the record has them or not.
    Selected(Vec<String>),
}

/// Hidden fields are journald metadata, their names start with `_`.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('_')
}

impl FieldSelection {
    /// Build a selection from user supplied names. No names means the
    /// default policy.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fields: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().to_uppercase())
            .collect();

        if fields.is_empty() {
            return FieldSelection::Default;
        }

        // `foo FOO` would otherwise show the field twice
        let mut seen = std::collections::HashSet::new();
        fields.retain(|name| seen.insert(name.clone()));

        FieldSelection::Selected(fields)
    }

    pub fn visible_fields(&self, raw: &RawRecord) -> BTreeMap<String, FieldValue> {
        match self {
            FieldSelection::Default => raw
                .iter()
                .filter(|(name, _)| !is_hidden(name) && !IGNORED_FIELDS.contains(&name.as_str()))
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
            FieldSelection::Selected(names) => names
                .iter()
                .map(|name| {
                    let value = raw.get(name).cloned().unwrap_or(FieldValue::Null);
                    (name.clone(), value)
                })
                .collect(),
        }
    }
}
