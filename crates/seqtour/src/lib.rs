//! A guided tour of query-style sequence operations.
//!
//! The tour is split into twelve [`Category`] values. Each has a routine
//! that runs a handful of operators over small literal collections and
//! hands every result to a [`Dump`](seqtour_render::Dump) sink under a
//! label naming the operator.
//!
//! ```rust
//! use seqtour::{show, Category};
//! use seqtour_render::Capture;
//!
//! let mut capture = Capture::new();
//! show(Category::Filtering, &mut capture).unwrap();
//!
//! assert_eq!(capture.sections(), ["Filtering"]);
//! assert_eq!(capture.value("Where"), Some(&serde_json::json!([4])));
//! ```
//!
//! The operators themselves live in `seqtour-ops`; rendering lives in
//! `seqtour-render`.

pub mod catalog;
mod category;
mod dispatch;
mod error;
pub mod fixtures;

pub use category::{Category, Execution};
pub use dispatch::show;
pub use error::{Result, TourError};
