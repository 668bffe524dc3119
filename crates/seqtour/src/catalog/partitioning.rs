//! `Skip`, `Take`, `SkipLast`, `TakeLast`, `SkipWhile`, `TakeWhile`.

use seqtour_ops::SeqExt;
use seqtour_render::{Dump, DumpExt};

use crate::error::Result;

pub fn run(out: &mut dyn Dump) -> Result<()> {
    let source: Vec<i32> = (0..5).collect();

    out.dump("Skip", &source.iter().skip(3).collect::<Vec<_>>())?;
    out.dump("Take", &source.iter().take(3).collect::<Vec<_>>())?;
    out.dump("SkipLast", &source.iter().skip_last(3).collect::<Vec<_>>())?;
    out.dump("TakeLast", &source.iter().take_last(3).collect::<Vec<_>>())?;
    out.dump(
        "SkipWhile",
        &source.iter().skip_while(|x| **x < 2).collect::<Vec<_>>(),
    )?;
    out.dump(
        "TakeWhile",
        &source.iter().take_while(|x| **x < 2).collect::<Vec<_>>(),
    )?;

    Ok(())
}
