//! Command line of the `journalfields` binary.

use clap::{Parser, ValueEnum};

use crate::render::{Formatter, TimeZoneMode};
use crate::select::FieldSelection;
use crate::stream::{FailurePolicy, Pipeline};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Reprint `journalctl` JSON entries with their hidden fields.
#[derive(Debug, Parser)]
#[command(
    name = "journalfields",
    version,
    override_usage = "journalctl -o json | journalfields [OPTIONS] [FIELD]..."
)]
pub struct Cli {
    /// Only show these fields (case-insensitive). Without any, every
    /// non-hidden field except the well-known syslog ones is shown.
    #[arg(value_name = "FIELD")]
    pub fields: Vec<String>,

    /// Do not prefix lines with the command name (`_COMM`).
    #[arg(long)]
    pub no_command: bool,

    /// When to color the level.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Print timestamps in UTC instead of local time.
    #[arg(long)]
    pub utc: bool,

    /// Skip entries that cannot be decoded instead of stopping.
    #[arg(long)]
    pub keep_going: bool,
}

impl Cli {
    pub fn selection(&self) -> FieldSelection {
        FieldSelection::from_names(&self.fields)
    }

    pub fn formatter(&self, is_terminal: bool) -> Formatter {
        let timezone = if self.utc {
            TimeZoneMode::Utc
        } else {
            TimeZoneMode::Local
        };

        Formatter::new()
            .with_colors(self.color.enabled(is_terminal))
            .with_timezone(timezone)
            .with_command(!self.no_command)
    }

    pub fn pipeline(&self, is_terminal: bool) -> Pipeline {
        let policy = if self.keep_going {
            FailurePolicy::Skip
        } else {
            FailurePolicy::Abort
        };

        Pipeline::new(self.selection(), self.formatter(is_terminal)).with_policy(policy)
    }
}
