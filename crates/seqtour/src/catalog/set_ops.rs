//! Set operations. Results keep the order in which elements were first
//! seen.

use seqtour_ops::SeqExt;
use seqtour_render::{Dump, DumpExt};

use crate::error::Result;
use crate::fixtures;

pub fn run(out: &mut dyn Dump) -> Result<()> {
    let repeated = [1, 2, 3, 1];
    out.dump(
        "Distinct",
        &repeated.into_iter().distinct().collect::<Vec<_>>(),
    )?;

    let people = fixtures::people_with_twins();
    out.dump(
        "DistinctBy",
        &people.iter().distinct_by(|p| p.age).collect::<Vec<_>>(),
    )?;

    let left = [1, 2, 3];
    let right = [2, 3, 4, 5];
    out.dump("Union", &left.iter().union(right.iter()).collect::<Vec<_>>())?;
    out.dump(
        "Intersect",
        &left.iter().intersect(right.iter()).collect::<Vec<_>>(),
    )?;
    out.dump("Except", &left.iter().except(right.iter()).collect::<Vec<_>>())?;

    let rivals = fixtures::rivals();
    out.dump(
        "UnionBy",
        &people
            .iter()
            .union_by(rivals.iter(), |p| p.age)
            .collect::<Vec<_>>(),
    )?;
    out.dump(
        "IntersectBy",
        &people
            .iter()
            .intersect_by(rivals.iter().map(|r| r.age), |p| p.age)
            .collect::<Vec<_>>(),
    )?;
    out.dump(
        "ExceptBy",
        &people
            .iter()
            .except_by(rivals.iter().map(|r| r.age), |p| p.age)
            .collect::<Vec<_>>(),
    )?;

    let same = [1, 2, 3];
    out.dump("SequenceEqual", &left.iter().eq(same.iter()))?;
    out.dump("SequenceEqual different", &left.iter().eq(right.iter()))?;

    Ok(())
}
