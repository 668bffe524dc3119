//! `Where` and `OfType`. Both are lazy.

use seqtour_render::{Dump, DumpExt};

use crate::error::Result;
use crate::fixtures::{self, Item};

pub fn run(out: &mut dyn Dump) -> Result<()> {
    let above_three: Vec<i32> = (0..5).filter(|x| *x > 3).collect();
    out.dump("Where", &above_three)?;

    // Keeps only the elements of the wanted type.
    let ints: Vec<i64> = fixtures::mixed_items()
        .iter()
        .filter_map(Item::as_int)
        .collect();
    out.dump("OfType", &ints)?;

    Ok(())
}
