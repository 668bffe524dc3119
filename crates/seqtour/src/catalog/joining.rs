//! Zipping, joining, concatenation and grouping.

use seqtour_ops::SeqExt;
use seqtour_render::{Dump, DumpExt};

use crate::error::Result;
use crate::fixtures;

pub fn run(out: &mut dyn Dump) -> Result<()> {
    let numbers = [1, 2, 3];
    let letters = ["A", "B", "C", "D"];
    let symbols = ["*", "&", "|", "^"];

    // Stops at the shortest input, so "D" has no partner.
    out.dump(
        "Zip",
        &numbers.iter().zip(letters.iter()).collect::<Vec<_>>(),
    )?;
    out.dump(
        "Zip3",
        &numbers
            .iter()
            .zip3(letters.iter(), symbols.iter())
            .collect::<Vec<_>>(),
    )?;

    let customers = fixtures::customers();
    let products = fixtures::products();
    let purchases = customers.iter().join(
        products.iter(),
        |c| c.id,
        |p| p.person_id,
        |c, p| format!("{} bought {}", c.name, p.name),
    );
    out.dump("Join", &purchases)?;

    let baskets = customers.iter().group_join(
        products.iter(),
        |c| c.id,
        |p| p.person_id,
        |c, bought| {
            let names: Vec<&str> = bought.iter().map(|p| p.name.as_str()).collect();
            format!("{} bought {}", c.name, names.join(","))
        },
    );
    out.dump("GroupJoin", &baskets)?;

    out.dump(
        "Concat",
        &letters.iter().chain(symbols.iter()).collect::<Vec<_>>(),
    )?;

    let rivals = fixtures::rivals();
    out.dump("GroupBy", &rivals.iter().group_by(|p| p.age))?;

    Ok(())
}
