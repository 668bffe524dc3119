//! Projection: `Select`, `SelectMany` (both also with the element index),
//! `Cast` and `Chunk`.
//!
//! Every operator here is a lazy adapter; the `collect` calls are what run
//! them.

use seqtour_ops::SeqExt;
use seqtour_render::{Dump, DumpExt};

use crate::error::Result;

pub fn run(out: &mut dyn Dump) -> Result<()> {
    let source: Vec<i32> = (0..6).collect();

    let as_text: Vec<String> = source.iter().map(|x| x.to_string()).collect();
    out.dump("Select", &as_text)?;

    let with_index: Vec<String> = source
        .iter()
        .enumerate()
        .map(|(i, x)| format!("Value : {x}, index : {i}"))
        .collect();
    out.dump("Select with index", &with_index)?;

    let nested = vec![vec![1, 2, 3], vec![4, 5, 6]];
    let flat: Vec<i32> = nested.iter().flatten().copied().collect();
    out.dump("SelectMany", &flat)?;

    // The index is the position of the inner list, not of the element.
    let flat_with_index: Vec<String> = nested
        .iter()
        .enumerate()
        .flat_map(|(i, inner)| {
            inner
                .iter()
                .map(move |y| format!("Value : {y}, index : {i}"))
        })
        .collect();
    out.dump("SelectMany with index", &flat_with_index)?;

    let widened: Vec<i64> = source.iter().copied().map(i64::from).collect();
    out.dump("Cast", &widened)?;

    let chunks: Vec<Vec<i32>> = source.iter().copied().chunk(3).collect();
    out.dump("Chunk", &chunks)?;

    Ok(())
}
