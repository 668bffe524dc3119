//! Sequence generation and re-typing.

use std::iter;

use seqtour_render::{Dump, DumpExt};

use crate::error::Result;
use crate::fixtures::{self, Person};

pub fn run(out: &mut dyn Dump) -> Result<()> {
    let people = fixtures::people_with_twins();

    // Borrows the list; nothing is copied.
    let borrowed: Vec<&Person> = people.iter().collect();
    out.dump("AsEnumerable", &borrowed)?;
    // Same elements behind a type-erased iterator.
    let erased: Box<dyn Iterator<Item = &Person> + '_> = Box::new(people.iter());
    out.dump("AsQueryable", &erased.collect::<Vec<_>>())?;

    out.dump("Range", &(1..=6).collect::<Vec<i32>>())?;
    out.dump("Repeat", &iter::repeat(1).take(6).collect::<Vec<i32>>())?;
    out.dump("Empty", &iter::empty::<i32>().collect::<Vec<_>>())?;

    Ok(())
}
