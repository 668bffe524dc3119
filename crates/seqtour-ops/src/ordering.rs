//! Multi-key ordering for sequences.
//!
//! [`Dir`] gives a sort direction and [`Ordered`] accumulates key selectors
//! (`order_by`, then any number of `then_by`) before sorting once, when the
//! sequence is finally consumed.

use std::cmp::Ordering;
use std::fmt;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    ///
    /// `Asc` leaves the ordering unchanged, `Desc` reverses it.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }
}

type Comparator<'a, T> = Box<dyn Fn(&T, &T) -> Ordering + 'a>;

/// A sequence waiting to be sorted by one or more keys.
///
/// Built by [`SeqExt::order_by`](crate::SeqExt::order_by) or
/// [`SeqExt::order_by_descending`](crate::SeqExt::order_by_descending).
/// Additional keys only break ties left by the earlier ones. The sort is
/// stable: elements equal under every key keep their source order.
///
/// Nothing is sorted until [`Ordered::into_vec`] or iteration.
///
/// ```
/// use seqtour_ops::SeqExt;
///
/// let words = ["pear", "fig", "apple", "kiwi"];
/// let sorted: Vec<_> = words
///     .iter()
///     .order_by(|w| w.len())
///     .then_by_descending(|w| **w)
///     .into_vec();
/// assert_eq!(sorted, [&"fig", &"pear", &"kiwi", &"apple"]);
/// ```
pub struct Ordered<'a, T> {
    items: Vec<T>,
    comparators: Vec<Comparator<'a, T>>,
}

impl<'a, T> Ordered<'a, T> {
    pub(crate) fn new<I, K, F>(items: I, key: F, dir: Dir) -> Self
    where
        I: IntoIterator<Item = T>,
        K: Ord,
        F: Fn(&T) -> K + 'a,
    {
        Ordered {
            items: items.into_iter().collect(),
            comparators: Vec::new(),
        }
        .by(key, dir)
    }

    /// Adds a tie-breaking key with an explicit direction.
    pub fn by<K, F>(mut self, key: F, dir: Dir) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'a,
    {
        self.comparators
            .push(Box::new(move |a: &T, b: &T| dir.apply(key(a).cmp(&key(b)))));
        self
    }

    /// Adds an ascending tie-breaking key.
    pub fn then_by<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'a,
    {
        self.by(key, Dir::Asc)
    }

    /// Adds a descending tie-breaking key.
    pub fn then_by_descending<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'a,
    {
        self.by(key, Dir::Desc)
    }

    /// Sorts and returns the elements.
    pub fn into_vec(self) -> Vec<T> {
        let Ordered {
            mut items,
            comparators,
        } = self;
        items.sort_by(|a, b| compare_chain(a, b, &comparators));
        items
    }
}

impl<'a, T> IntoIterator for Ordered<'a, T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Ordered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ordered")
            .field("items", &self.items)
            .field("keys", &self.comparators.len())
            .finish()
    }
}

/// Compares two items key by key; the first non-equal key decides.
fn compare_chain<T>(a: &T, b: &T, comparators: &[Comparator<'_, T>]) -> Ordering {
    comparators
        .iter()
        .map(|cmp| cmp(a, b))
        .find(|ordering| *ordering != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}
