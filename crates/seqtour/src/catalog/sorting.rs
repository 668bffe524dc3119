//! Sorting. Every sort is stable: elements with equal keys keep their
//! source order.

use seqtour_ops::SeqExt;
use seqtour_render::{Dump, DumpExt};

use crate::error::Result;
use crate::fixtures::{self, Person};

pub fn run(out: &mut dyn Dump) -> Result<()> {
    let numbers = [11, 16, 9];
    out.dump(
        "Order",
        &numbers.iter().copied().order_by(|x| *x).into_vec(),
    )?;
    out.dump("Reverse", &numbers.iter().rev().collect::<Vec<_>>())?;

    let people = vec![
        Person::new("azerty", 30),
        Person::new("u2", 20),
        Person::new("rbo", 16),
        Person::new("me2", 16),
    ];
    out.dump("OrderBy", &people.iter().order_by(|p| p.age).into_vec())?;
    out.dump(
        "OrderByDescending",
        &people.iter().order_by_descending(|p| p.age).into_vec(),
    )?;

    let products = fixtures::products();
    out.dump(
        "ThenBy",
        &products
            .iter()
            .order_by(|p| p.name.clone())
            .then_by(|p| p.person_id)
            .into_vec(),
    )?;
    out.dump(
        "ThenByDescending",
        &products
            .iter()
            .order_by(|p| p.name.clone())
            .then_by_descending(|p| p.person_id)
            .into_vec(),
    )?;

    Ok(())
}
