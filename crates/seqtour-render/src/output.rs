//! Output mode control.
//!
//! [`OutputMode`] decides how dumped values are formatted, from terminal
//! styling to structured serialization. [`OutputDestination`] decides where
//! the result goes.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

/// Controls how dumped values are rendered.
///
/// This is the user-facing enum behind the `--output` flag.
///
/// - `Auto` - Detect terminal capabilities (TTY → Term, otherwise Text)
/// - `Term` - Styled output even when not on a terminal
/// - `Text` - Never apply styling
/// - `Json`, `Yaml`, `Csv` - Serialize each labelled value as a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Auto-detect: TTY gets Term, anything else gets Text
    #[default]
    Auto,
    /// Styled headers and labels
    Term,
    /// Same layout as `Term`, no escape codes
    Text,
    /// One JSON object per line
    Json,
    /// One YAML document per value
    Yaml,
    /// `category,label,value` rows
    Csv,
}

impl OutputMode {
    /// Every mode, in the order they are listed in help output.
    pub const ALL: [OutputMode; 6] = [
        OutputMode::Auto,
        OutputMode::Term,
        OutputMode::Text,
        OutputMode::Json,
        OutputMode::Yaml,
        OutputMode::Csv,
    ];

    /// `Term` when standard output is a terminal, `Text` when it is not.
    /// Any other mode is returned as is.
    pub fn resolve_auto(&self) -> OutputMode {
        match self {
            OutputMode::Auto => {
                if console::Term::stdout().is_term() {
                    OutputMode::Term
                } else {
                    OutputMode::Text
                }
            }
            other => *other,
        }
    }

    /// Converts this output mode to a [`TextMode`].
    ///
    /// Returns None for structured modes.
    pub fn to_text_mode(&self) -> Option<TextMode> {
        match self.resolve_auto() {
            OutputMode::Term => Some(TextMode::Styled),
            OutputMode::Text => Some(TextMode::Plain),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Auto => "auto",
            OutputMode::Term => "term",
            OutputMode::Text => "text",
            OutputMode::Json => "json",
            OutputMode::Yaml => "yaml",
            OutputMode::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when an output mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output mode '{0}' (expected one of: auto, term, text, json, yaml, csv)")]
pub struct ParseModeError(String);

impl FromStr for OutputMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

/// Whether text output carries terminal styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    /// Apply styles (ANSI escape codes)
    Styled,
    /// No styling
    Plain,
}

/// Where dumped output goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputDestination {
    /// Write to standard output
    #[default]
    Stdout,
    /// Write to a specific file
    File(PathBuf),
}

impl OutputDestination {
    /// Opens a buffered writer onto this destination.
    ///
    /// Files are created (or truncated); their parent directory must exist.
    pub fn open(&self) -> io::Result<Box<dyn Write>> {
        match self {
            OutputDestination::Stdout => Ok(Box::new(io::stdout())),
            OutputDestination::File(path) => {
                validate_path(path)?;
                Ok(Box::new(BufWriter::new(File::create(path)?)))
            }
        }
    }
}

/// A file can only be created inside an existing directory.
fn validate_path(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("output directory {} does not exist", parent.display()),
            ));
        }
    }
    Ok(())
}
