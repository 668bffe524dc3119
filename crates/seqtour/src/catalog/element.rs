//! Element operators pick one element out of a sequence.
//!
//! The `OrDefault` flavours fall back to a value instead of failing; the
//! others return an error when nothing qualifies.

use seqtour_ops::SeqExt;
use seqtour_render::{Dump, DumpExt};

use crate::error::Result;

pub fn run(out: &mut dyn Dump) -> Result<()> {
    let source = 1..=6;

    out.dump("First", &source.clone().first_where(|x| *x > 2)?)?;
    out.dump(
        "FirstOrDefault",
        &source.clone().find(|x| *x > 8).unwrap_or(-1),
    )?;

    // Exactly one element is above five; a second match would be an error.
    out.dump("Single", &source.clone().single_where(|x| *x > 5)?)?;
    out.dump(
        "SingleOrDefault",
        &source.clone().single_where_or(|x| *x > 6, -1)?,
    )?;

    out.dump("Last", &source.clone().last_where(|x| *x > 2)?)?;
    out.dump(
        "LastOrDefault",
        &source.clone().filter(|x| *x > 8).last().unwrap_or(-1),
    )?;

    out.dump("ElementAt", &source.clone().element_at(1)?)?;
    out.dump(
        "ElementAtOrDefault",
        &source.clone().nth(12).unwrap_or_default(),
    )?;

    let empty: Vec<i32> = Vec::new();
    out.dump(
        "DefaultIfEmpty",
        &empty.into_iter().default_if_empty(5).collect::<Vec<_>>(),
    )?;

    Ok(())
}
