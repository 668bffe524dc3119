//! Labelled value dumping for the sequence tour.
//!
//! `seqtour-render` is the output side of the tour: producers hand it
//! sections and labelled values through the object-safe [`Dump`] trait, and
//! never touch the console themselves.
//!
//! # Sinks
//!
//! - [`Dumper`] renders to standard output or a file in an [`OutputMode`]
//! - [`Capture`] keeps [`Entry`] values in memory, for tests
//!
//! # Output Modes
//!
//! - `Auto` picks `Term` on a terminal and `Text` otherwise
//! - `Term` and `Text` share the layout described in [`text`], with and
//!   without ANSI styles
//! - `Json`, `Yaml` and `Csv` write one [`structured::Record`] per value,
//!   tagged with the section it belongs to
//!
//! # Example
//!
//! ```rust
//! use seqtour_render::{Capture, Dump, DumpExt};
//!
//! let mut capture = Capture::new();
//! let sink: &mut dyn Dump = &mut capture;
//! sink.section("Filtering", "deferred").unwrap();
//! sink.dump("Where", &[4]).unwrap();
//!
//! assert_eq!(capture.sections(), ["Filtering"]);
//! assert_eq!(capture.value("Where"), Some(&serde_json::json!([4])));
//! ```

mod error;
mod output;
mod sink;
pub mod structured;
pub mod text;

pub use error::DumpError;
pub use output::{OutputDestination, OutputMode, ParseModeError, TextMode};
pub use sink::{Capture, Dump, DumpExt, Dumper, Entry};
