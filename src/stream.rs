use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::error::Error;
use crate::record::{DecodedRecord, RawRecord};
use crate::render::Formatter;
use crate::select::FieldSelection;

/// What happens when one record cannot be decoded.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the run with the error.
    #[default]
    Abort,
    /// Log a warning, drop the record and go on. I/O errors still abort.
    Skip,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub rendered: usize,
    pub skipped: usize,
}

/// Reads journal entries line by line and writes one rendered line per entry.
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
    selection: FieldSelection,
    formatter: Formatter,
    policy: FailurePolicy,
}

impl Pipeline {
    pub fn new(selection: FieldSelection, formatter: Formatter) -> Self {
        Pipeline {
            selection,
            formatter,
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Decode, select and render a single line.
    pub fn transform(&self, line: &[u8]) -> Result<String, Error> {
        let raw = RawRecord::decode(line)?;
        let record = DecodedRecord::new(&raw, &self.selection)?;

        Ok(self.formatter.render(&record))
    }

    /// Run until `input` is exhausted. Each rendered line is flushed before
    /// the next one is read.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<Summary, Error> {
        let mut summary = Summary::default();
        let mut buf = Vec::with_capacity(4096);
        let mut lineno = 0;

        loop {
            buf.clear();
            let n = input.read_until(b'\n', &mut buf).map_err(Error::Read)?;
            if n == 0 {
                break;
            }
            lineno += 1;

            let line = trim_line_ending(&buf);
            let rendered = match self.transform(line) {
                Ok(rendered) => rendered,
                Err(err) => match self.policy {
                    FailurePolicy::Abort => {
                        return Err(Error::Line {
                            line: lineno,
                            source: Box::new(err),
                        });
                    }
                    FailurePolicy::Skip => {
                        warn!(line = lineno, error = %err, "skipping record");
                        summary.skipped += 1;
                        continue;
                    }
                },
            };

            output
                .write_all(rendered.as_bytes())
                .and_then(|()| output.flush())
                .map_err(Error::Write)?;
            summary.rendered += 1;
        }

        debug!(
            rendered = summary.rendered,
            skipped = summary.skipped,
            "end of input"
        );

        Ok(summary)
    }
}

fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
