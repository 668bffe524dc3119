//! Aggregation: counting, extremes, sums and folds.
//!
//! Every step is immediate. Steps that need at least one element go through
//! the `_required` operators and propagate [`SeqError`](seqtour_ops::SeqError)
//! on an empty source.

use seqtour_ops::{SeqError, SeqExt};
use seqtour_render::{Dump, DumpExt};

use crate::error::Result;
use crate::fixtures;

pub fn run(out: &mut dyn Dump) -> Result<()> {
    let source = 1..=6;

    out.dump("Count", &source.clone().filter(|x| *x < 2).count())?;
    // A range knows its length without being walked.
    out.dump("TryGetNonEnumeratedCount", &source.clone().try_len())?;
    // A filter does not.
    out.dump(
        "TryGetNonEnumeratedCount deferred exe",
        &source.clone().filter(|x| *x > 2).try_len(),
    )?;
    out.dump("LongCount", &(source.clone().count() as u64))?;

    out.dump("Max", &source.clone().max_required()?)?;
    out.dump(
        "Max with selector",
        &source.clone().map(|x| x * -2).max_required()?,
    )?;
    out.dump("Min", &source.clone().min_required()?)?;
    out.dump(
        "Min with selector",
        &source.clone().map(|x| x * -2).min_required()?,
    )?;

    let people = fixtures::people();
    let oldest = people
        .iter()
        .max_by_key(|p| p.age)
        .ok_or(SeqError::NoElements { op: "max_by" })?;
    out.dump("MaxBy", oldest)?;
    let youngest = people
        .iter()
        .min_by_key(|p| p.age)
        .ok_or(SeqError::NoElements { op: "min_by" })?;
    out.dump("MinBy", youngest)?;

    out.dump("Sum", &source.clone().sum::<i32>())?;
    out.dump("Average", &source.clone().average()?)?;

    out.dump("Aggregate", &source.clone().reduce_required(|a, b| a + b)?)?;
    let joined = source
        .clone()
        .map(|x| x.to_string())
        .reduce_required(|acc, x| format!("{acc}, {x}"))?;
    out.dump("Aggregate over strings", &joined)?;
    out.dump("Aggregate with seed", &source.clone().fold(10, |a, b| a + b))?;

    let count = source.clone().count();
    let mean = source
        .clone()
        .aggregate(0_i32, |a, b| a + b, |sum: i32| sum as f32 / count as f32);
    out.dump("Aggregate with seed and result selector", &mean)?;

    Ok(())
}
