//! Text layout of a rendered entry.
//!
//! Two layouts exist. The plain one is logfmt style:
//!
//! ```text
//! sshd time="2023-11-14T22:13:20Z" level=info msg="Accepted publickey" UNIT=ssh.service
//! ```
//!
//! The colored one is meant for terminals:
//!
//! ```text
//! sshd INFO[2023-11-14T22:13:20Z] Accepted publickey                           UNIT=ssh.service
//! ```
//!
//! Fields always come out sorted by name.

use std::fmt::{self, Display, Formatter as FmtFormatter};

use chrono::{DateTime, Local, SecondsFormat, TimeZone};
use owo_colors::{AnsiColors, OwoColorize};

use crate::record::DecodedRecord;
use crate::severity::Level;
use crate::value::FieldValue;

/// Width the message is padded to in the colored layout.
const MESSAGE_WIDTH: usize = 44;

/// Placeholder for an entry without `_COMM`.
const NIL_COMMAND: &str = "-";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum TimeZoneMode {
    #[default]
    Local,
    Utc,
}

/// Renders decoded records into lines. Build one per run and hand it to
/// the stream driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formatter {
    colors: bool,
    timezone: TimeZoneMode,
    command: bool,
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter {
            colors: false,
            timezone: TimeZoneMode::Local,
            command: true,
        }
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_timezone(mut self, timezone: TimeZoneMode) -> Self {
        self.timezone = timezone;
        self
    }

    /// Whether the line starts with the `_COMM` of the entry.
    pub fn with_command(mut self, command: bool) -> Self {
        self.command = command;
        self
    }

    /// Render one record, terminated by a single `\n`.
    pub fn render(&self, record: &DecodedRecord) -> String {
        self.display(record).to_string()
    }

    pub fn display<'a>(&'a self, record: &'a DecodedRecord) -> Rendered<'a> {
        Rendered {
            formatter: self,
            record,
        }
    }

    fn timestamp(&self, ts: &DateTime<chrono::Utc>) -> String {
        match self.timezone {
            TimeZoneMode::Utc => rfc3339(ts),
            TimeZoneMode::Local => rfc3339(&ts.with_timezone(&Local)),
        }
    }
}

fn rfc3339<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn level_color(level: Level) -> AnsiColors {
    match level {
        Level::Debug => AnsiColors::White,
        Level::Info => AnsiColors::Cyan,
        Level::Warning => AnsiColors::Yellow,
        Level::Error | Level::Fatal | Level::Panic => AnsiColors::Red,
    }
}

fn needs_quoting(text: &str) -> bool {
    text.is_empty()
        || !text.chars().all(|ch| {
            ch.is_ascii_alphanumeric() || matches!(ch, '-' | '.' | '_' | '/' | '@' | '^' | '+')
        })
}

/// A value, quoted and escaped when it would not survive a split on spaces.
struct Quoted<'a>(&'a str);

impl Display for Quoted<'_> {
    fn fmt(&self, f: &mut FmtFormatter<'_>) -> fmt::Result {
        if needs_quoting(self.0) {
            write!(f, "{:?}", self.0)
        } else {
            f.write_str(self.0)
        }
    }
}

pub struct Rendered<'a> {
    formatter: &'a Formatter,
    record: &'a DecodedRecord,
}

impl Rendered<'_> {
    fn write_plain(&self, f: &mut FmtFormatter<'_>) -> fmt::Result {
        let record = self.record;
        let time = self.formatter.timestamp(&record.timestamp);

        write!(
            f,
            "time={} level={} msg={}",
            Quoted(&time),
            record.level().as_str(),
            Quoted(trim_newline(&record.message))
        )?;

        for (name, value) in &record.fields {
            write!(f, " {}={}", name, Quoted(&value.to_string()))?;
        }

        Ok(())
    }

    fn write_colored(&self, f: &mut FmtFormatter<'_>) -> fmt::Result {
        let record = self.record;
        let level = record.level();
        let color = level_color(level);
        let message = trim_newline(&record.message).replace('\n', "\\n");

        write!(
            f,
            "{}[{}] {:<width$} ",
            level.tag().color(color),
            self.formatter.timestamp(&record.timestamp),
            message,
            width = MESSAGE_WIDTH
        )?;

        for (name, value) in &record.fields {
            write!(f, " {}={}", name.color(color), Quoted(&value.to_string()))?;
        }

        Ok(())
    }
}

impl Display for Rendered<'_> {
    fn fmt(&self, f: &mut FmtFormatter<'_>) -> fmt::Result {
        if self.formatter.command {
            match &self.record.command {
                Some(FieldValue::Null) | None => f.write_str(NIL_COMMAND)?,
                Some(command) => write!(f, "{command}")?,
            }
            f.write_str(" ")?;
        }

        if self.formatter.colors {
            self.write_colored(f)?;
        } else {
            self.write_plain(f)?;
        }

        f.write_str("\n")
    }
}

fn trim_newline(message: &str) -> &str {
    message.strip_suffix('\n').unwrap_or(message)
}
