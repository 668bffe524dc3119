//! `Any`, `All` and `Contains`, all immediate.

use seqtour_render::{Dump, DumpExt};

use crate::error::Result;

pub fn run(out: &mut dyn Dump) -> Result<()> {
    let source: Vec<i32> = (0..6).collect();

    out.dump("Any", &source.iter().any(|x| *x < 2))?;
    out.dump("All", &source.iter().all(|x| *x < 2))?;
    out.dump("Contains", &source.contains(&12))?;

    Ok(())
}
