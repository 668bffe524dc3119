//! Dump sinks.
//!
//! Producers talk to a `&mut dyn Dump`: they open a section, then hand over
//! labelled values. [`Dumper`] writes them out in an [`OutputMode`];
//! [`Capture`] keeps them in memory so tests can inspect exactly what was
//! produced.

use std::fmt;
use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use crate::error::DumpError;
use crate::output::{OutputDestination, OutputMode, TextMode};
use crate::structured::{self, Record, CSV_HEADER};
use crate::text;

/// A sink for labelled values.
///
/// The trait is object safe; generic convenience lives in [`DumpExt`].
pub trait Dump {
    /// Starts a new section. `note` qualifies the name and may be empty.
    fn section(&mut self, name: &str, note: &str) -> Result<(), DumpError>;

    /// Records one labelled value.
    fn record(&mut self, label: &str, value: Value) -> Result<(), DumpError>;
}

/// Typed entry point for any [`Dump`], including `dyn Dump`.
pub trait DumpExt: Dump {
    /// Converts `value` through serde and records it under `label`.
    fn dump<T: Serialize + ?Sized>(&mut self, label: &str, value: &T) -> Result<(), DumpError> {
        let value = serde_json::to_value(value)?;
        self.record(label, value)
    }
}

impl<D: Dump + ?Sized> DumpExt for D {}

/// Writes dumped values to a destination.
pub struct Dumper {
    out: Box<dyn Write>,
    mode: OutputMode,
    section: String,
    csv_header_written: bool,
}

impl Dumper {
    /// Creates a dumper over any writer.
    ///
    /// `Auto` is resolved against standard output's terminal status.
    pub fn new(out: Box<dyn Write>, mode: OutputMode) -> Self {
        Dumper {
            out,
            mode: mode.resolve_auto(),
            section: String::new(),
            csv_header_written: false,
        }
    }

    /// Opens `dest` and creates a dumper over it.
    ///
    /// Files are never terminals, so `Auto` becomes `Text` for them.
    pub fn to_destination(dest: &OutputDestination, mode: OutputMode) -> Result<Self, DumpError> {
        let mode = match (dest, mode) {
            (OutputDestination::File(_), OutputMode::Auto) => OutputMode::Text,
            (_, mode) => mode,
        };
        Ok(Dumper::new(dest.open()?, mode))
    }

    /// The resolved output mode; never `Auto`.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Flushes buffered output.
    pub fn finish(mut self) -> Result<(), DumpError> {
        self.out.flush()?;
        Ok(())
    }

    fn text_mode(&self) -> Option<TextMode> {
        self.mode.to_text_mode()
    }
}

impl fmt::Debug for Dumper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dumper")
            .field("mode", &self.mode)
            .field("section", &self.section)
            .finish_non_exhaustive()
    }
}

impl Dump for Dumper {
    fn section(&mut self, name: &str, note: &str) -> Result<(), DumpError> {
        tracing::debug!(section = name, "opening section");
        self.section = name.to_string();
        if let Some(mode) = self.text_mode() {
            writeln!(self.out, "{}", text::render_section(name, note, mode))?;
        }
        Ok(())
    }

    fn record(&mut self, label: &str, value: Value) -> Result<(), DumpError> {
        tracing::trace!(section = %self.section, label, "dumping value");
        let rendered = match self.text_mode() {
            Some(mode) => format!("{}\n", text::render_entry(label, &value, mode)),
            None => {
                let record = Record {
                    category: &self.section,
                    label,
                    value: &value,
                };
                structured::serialize_record(&record, self.mode)?
            }
        };
        if self.mode == OutputMode::Csv && !self.csv_header_written {
            self.out.write_all(structured::csv_row(CSV_HEADER)?.as_bytes())?;
            self.csv_header_written = true;
        }
        self.out.write_all(rendered.as_bytes())?;
        Ok(())
    }
}

/// One captured event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Entry {
    Section { name: String, note: String },
    Value { label: String, value: Value },
}

/// In-memory sink that records every section and value in order.
#[derive(Debug, Clone, Default)]
pub struct Capture {
    entries: Vec<Entry>,
}

impl Capture {
    pub fn new() -> Self {
        Capture::default()
    }

    /// Everything captured so far, in order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    /// Names of the sections opened, in order.
    pub fn sections(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                Entry::Section { name, .. } => Some(name.as_str()),
                Entry::Value { .. } => None,
            })
            .collect()
    }

    /// Labels of the values recorded, in order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                Entry::Value { label, .. } => Some(label.as_str()),
                Entry::Section { .. } => None,
            })
            .collect()
    }

    /// Every value recorded under `label`.
    pub fn values_for(&self, label: &str) -> Vec<&Value> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                Entry::Value { label: l, value } if l == label => Some(value),
                _ => None,
            })
            .collect()
    }

    /// The first value recorded under `label`.
    pub fn value(&self, label: &str) -> Option<&Value> {
        self.values_for(label).into_iter().next()
    }

    /// Values recorded inside the section `name`, with their labels.
    pub fn section_values(&self, name: &str) -> Vec<(&str, &Value)> {
        let mut inside = false;
        let mut values = Vec::new();
        for entry in &self.entries {
            match entry {
                Entry::Section { name: n, .. } => inside = n == name,
                Entry::Value { label, value } if inside => values.push((label.as_str(), value)),
                Entry::Value { .. } => {}
            }
        }
        values
    }
}

impl Dump for Capture {
    fn section(&mut self, name: &str, note: &str) -> Result<(), DumpError> {
        self.entries.push(Entry::Section {
            name: name.to_string(),
            note: note.to_string(),
        });
        Ok(())
    }

    fn record(&mut self, label: &str, value: Value) -> Result<(), DumpError> {
        self.entries.push(Entry::Value {
            label: label.to_string(),
            value,
        });
        Ok(())
    }
}
