//! One demonstration routine per [`Category`](crate::Category).
//!
//! A routine takes the sink, dumps a labelled value per step and returns.
//! The section header is written by the dispatcher before the routine runs.

use seqtour_render::Dump;

use crate::error::Result;

pub mod aggregation;
pub mod conversion;
pub mod element;
pub mod existence;
pub mod filtering;
pub mod generation;
pub mod joining;
pub mod manipulation;
pub mod partitioning;
pub mod projection;
pub mod set_ops;
pub mod sorting;

/// Signature shared by every routine.
pub type Routine = fn(&mut dyn Dump) -> Result<()>;
