//! The closed set of demonstration categories.

use std::fmt;
use std::str::FromStr;

use crate::error::TourError;

/// When a category's operators do their work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    /// Results are computed as they are consumed.
    Deferred,
    /// Results are computed at the call site.
    Immediate,
    /// The category has operators of both kinds.
    Mixed,
}

impl Execution {
    pub fn as_str(self) -> &'static str {
        match self {
            Execution::Deferred => "deferred",
            Execution::Immediate => "immediate",
            Execution::Mixed => "deferred and immediate",
        }
    }
}

impl fmt::Display for Execution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A group of related sequence operations, or `All` of them.
///
/// Matching on this enum is always exhaustive: there is no value that
/// silently falls through to "run everything".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    Filtering,
    Partitioning,
    Projection,
    ExistenceOrQuantityChecks,
    SequenceManipulation,
    AggregationMethod,
    ElementOperators,
    ConversionMethods,
    GenerationMethods,
    SetOperations,
    JoiningAndGrouping,
    Sorting,
    #[default]
    All,
}

impl Category {
    /// The twelve concrete categories, in the order `All` runs them.
    pub const ROUTINES: [Category; 12] = [
        Category::Filtering,
        Category::Partitioning,
        Category::Projection,
        Category::ExistenceOrQuantityChecks,
        Category::SequenceManipulation,
        Category::AggregationMethod,
        Category::ElementOperators,
        Category::ConversionMethods,
        Category::GenerationMethods,
        Category::SetOperations,
        Category::JoiningAndGrouping,
        Category::Sorting,
    ];

    /// Display name, as used in section headers.
    pub fn name(self) -> &'static str {
        match self {
            Category::Filtering => "Filtering",
            Category::Partitioning => "Partitioning",
            Category::Projection => "Projection",
            Category::ExistenceOrQuantityChecks => "ExistenceOrQuantityChecks",
            Category::SequenceManipulation => "SequenceManipulation",
            Category::AggregationMethod => "AggregationMethod",
            Category::ElementOperators => "ElementOperators",
            Category::ConversionMethods => "ConversionMethods",
            Category::GenerationMethods => "GenerationMethods",
            Category::SetOperations => "SetOperations",
            Category::JoiningAndGrouping => "JoiningAndGrouping",
            Category::Sorting => "Sorting",
            Category::All => "All",
        }
    }

    /// Kebab-case name accepted on the command line.
    pub fn cli_name(self) -> String {
        let mut out = String::new();
        for (i, c) in self.name().char_indices() {
            if c.is_ascii_uppercase() && i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        }
        out
    }

    pub fn execution(self) -> Execution {
        match self {
            Category::Filtering
            | Category::Partitioning
            | Category::Projection
            | Category::SequenceManipulation
            | Category::SetOperations
            | Category::JoiningAndGrouping
            | Category::Sorting => Execution::Deferred,
            Category::ExistenceOrQuantityChecks
            | Category::AggregationMethod
            | Category::ElementOperators
            | Category::ConversionMethods => Execution::Immediate,
            Category::GenerationMethods | Category::All => Execution::Mixed,
        }
    }

    /// Operators the category's routine showcases.
    pub fn operators(self) -> &'static [&'static str] {
        match self {
            Category::Filtering => &["Where", "OfType"],
            Category::Partitioning => &[
                "Skip",
                "Take",
                "SkipLast",
                "TakeLast",
                "SkipWhile",
                "TakeWhile",
            ],
            Category::Projection => &["Select", "SelectMany", "Cast", "Chunk"],
            Category::ExistenceOrQuantityChecks => &["Any", "All", "Contains"],
            Category::SequenceManipulation => &["Append", "Prepend"],
            Category::AggregationMethod => &[
                "Count",
                "TryGetNonEnumeratedCount",
                "LongCount",
                "Max",
                "MaxBy",
                "Min",
                "MinBy",
                "Sum",
                "Average",
                "Aggregate",
            ],
            Category::ElementOperators => &[
                "First",
                "FirstOrDefault",
                "Single",
                "SingleOrDefault",
                "Last",
                "LastOrDefault",
                "ElementAt",
                "ElementAtOrDefault",
                "DefaultIfEmpty",
            ],
            Category::ConversionMethods => &[
                "ToArray",
                "ToList",
                "ToHashSet",
                "ToFrozenSet",
                "ToDictionary",
                "ToFrozenDictionary",
                "ToLookup",
            ],
            Category::GenerationMethods => {
                &["AsEnumerable", "AsQueryable", "Range", "Repeat", "Empty"]
            }
            Category::SetOperations => &[
                "Distinct",
                "DistinctBy",
                "Union",
                "UnionBy",
                "Intersect",
                "IntersectBy",
                "Except",
                "ExceptBy",
                "SequenceEqual",
            ],
            Category::JoiningAndGrouping => {
                &["Zip", "Join", "GroupJoin", "Concat", "GroupBy"]
            }
            Category::Sorting => &[
                "Order",
                "Reverse",
                "OrderBy",
                "OrderByDescending",
                "ThenBy",
                "ThenByDescending",
            ],
            Category::All => &[],
        }
    }

    /// Every category, concrete ones first, `All` last.
    pub fn iter() -> impl Iterator<Item = Category> {
        Category::ROUTINES
            .into_iter()
            .chain(std::iter::once(Category::All))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Category {
    type Err = TourError;

    /// Accepts the display name or the kebab-case name, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Category::iter()
            .find(|c| normalize(c.name()) == wanted)
            .ok_or_else(|| TourError::UnknownCategory {
                given: s.to_string(),
                expected: Category::iter()
                    .map(Category::cli_name)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
