//! Runs the routine, or routines, a [`Category`] selects.

use seqtour_render::Dump;

use crate::catalog::{self, Routine};
use crate::category::Category;
use crate::error::Result;

/// Runs the routine for `category`, or every routine for [`Category::All`].
///
/// Each routine opens its own section on `out`. The first error stops the
/// tour; routines that already ran keep their output.
pub fn show(category: Category, out: &mut dyn Dump) -> Result<()> {
    let routine: Routine = match category {
        Category::Filtering => catalog::filtering::run,
        Category::Partitioning => catalog::partitioning::run,
        Category::Projection => catalog::projection::run,
        Category::ExistenceOrQuantityChecks => catalog::existence::run,
        Category::SequenceManipulation => catalog::manipulation::run,
        Category::AggregationMethod => catalog::aggregation::run,
        Category::ElementOperators => catalog::element::run,
        Category::ConversionMethods => catalog::conversion::run,
        Category::GenerationMethods => catalog::generation::run,
        Category::SetOperations => catalog::set_ops::run,
        Category::JoiningAndGrouping => catalog::joining::run,
        Category::Sorting => catalog::sorting::run,
        Category::All => return show_all(out),
    };
    run_routine(category, routine, out)
}

fn show_all(out: &mut dyn Dump) -> Result<()> {
    for category in Category::ROUTINES {
        show(category, out)?;
    }
    Ok(())
}

fn run_routine(category: Category, routine: Routine, out: &mut dyn Dump) -> Result<()> {
    let span = tracing::debug_span!("routine", category = category.name());
    let _enter = span.enter();

    out.section(category.name(), category.execution().as_str())?;
    routine(out)?;
    tracing::debug!("routine finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqtour_render::Capture;

    #[test]
    fn test_concrete_category_opens_one_section() {
        let mut capture = Capture::new();
        show(Category::Sorting, &mut capture).unwrap();
        assert_eq!(capture.sections(), ["Sorting"]);
    }

    #[test]
    fn test_section_note_is_execution_kind() {
        let mut capture = Capture::new();
        show(Category::ElementOperators, &mut capture).unwrap();
        assert_eq!(
            capture.entries()[0],
            seqtour_render::Entry::Section {
                name: "ElementOperators".to_string(),
                note: "immediate".to_string(),
            }
        );
    }
}
