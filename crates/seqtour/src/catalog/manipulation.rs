//! `Append` and `Prepend` add one element at either end, lazily.

use seqtour_ops::SeqExt;
use seqtour_render::{Dump, DumpExt};

use crate::error::Result;

pub fn run(out: &mut dyn Dump) -> Result<()> {
    let source: Vec<i32> = (0..6).collect();

    out.dump(
        "Append",
        &source.iter().copied().append(6).collect::<Vec<_>>(),
    )?;
    out.dump(
        "Prepend",
        &source.iter().copied().prepend(-1).collect::<Vec<_>>(),
    )?;

    Ok(())
}
