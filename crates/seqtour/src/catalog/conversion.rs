//! Conversions materialize a sequence into a collection.
//!
//! `HashSet` and `HashMap` carry no order, so their dumps may list the same
//! elements in any order. The `BTree` collections stand in for the frozen
//! variants and always come out sorted.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use seqtour_ops::SeqExt;
use seqtour_render::{Dump, DumpExt};

use crate::error::Result;
use crate::fixtures;

pub fn run(out: &mut dyn Dump) -> Result<()> {
    let source = 1..=6;

    let array: Box<[i32]> = source.clone().collect();
    out.dump("ToArray", &array)?;
    let list: Vec<i32> = source.clone().collect();
    out.dump("ToList", &list)?;
    let set: HashSet<i32> = source.clone().collect();
    out.dump("ToHashSet", &set)?;
    let frozen_set: BTreeSet<i32> = source.clone().collect();
    out.dump("ToFrozenSet", &frozen_set)?;

    let dictionary: HashMap<i32, i32> = source.clone().map(|x| (x, x)).collect();
    out.dump("ToDictionary", &dictionary)?;
    let frozen_dictionary: BTreeMap<i32, i32> = source.clone().map(|x| (x, x)).collect();
    out.dump("ToFrozenDictionary", &frozen_dictionary)?;

    let people = fixtures::people_with_twins();
    let by_age = people.iter().to_lookup(|p| p.age);
    out.dump("ToLookup", &by_age)?;
    out.dump("ToLookup access by key", by_age.get(&20))?;

    Ok(())
}
