//! The [`SeqExt`] extension trait.

use std::hash::Hash;
use std::iter::{Chain, Once, Zip};

use crate::adapters::{Chunk, DefaultIfEmpty, DistinctBy, SetFilter, SetMode, SkipLast, TakeLast};
use crate::error::{Result, SeqError};
use crate::group::{self, Grouping, Lookup};
use crate::ordering::{Dir, Ordered};

/// Key selector that uses the element itself as its key.
pub type Identity<T> = fn(&T) -> T;

/// Iterator returned by [`SeqExt::zip3`].
pub type Zip3<A, B, C> = std::iter::Map<
    Zip<Zip<A, B>, C>,
    fn(
        (
            (<A as Iterator>::Item, <B as Iterator>::Item),
            <C as Iterator>::Item,
        ),
    ) -> (
        <A as Iterator>::Item,
        <B as Iterator>::Item,
        <C as Iterator>::Item,
    ),
>;

/// Query-style operators for every [`Iterator`].
///
/// Methods returning an adapter are lazy (deferred): nothing is pulled
/// from the source until the result is consumed. Methods returning a value
/// or a [`Result`] consume the source on the spot (immediate).
///
/// Operators with a precondition (an element must exist, exactly one
/// element must match, an index must be in range) report a violation as a
/// [`SeqError`] instead of a sentinel value.
pub trait SeqExt: Iterator {
    // --- partitioning ------------------------------------------------------

    /// Every element but the last `n`.
    fn skip_last(self, n: usize) -> SkipLast<Self>
    where
        Self: Sized,
    {
        SkipLast::new(self, n)
    }

    /// Only the last `n` elements.
    fn take_last(self, n: usize) -> TakeLast<Self>
    where
        Self: Sized,
    {
        TakeLast::new(self, n)
    }

    // --- projection --------------------------------------------------------

    /// Groups consecutive elements into vectors of `size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    fn chunk(self, size: usize) -> Chunk<Self>
    where
        Self: Sized,
    {
        Chunk::new(self, size)
    }

    // --- manipulation ------------------------------------------------------

    fn append(self, item: Self::Item) -> Chain<Self, Once<Self::Item>>
    where
        Self: Sized,
    {
        self.chain(std::iter::once(item))
    }

    fn prepend(self, item: Self::Item) -> Chain<Once<Self::Item>, Self>
    where
        Self: Sized,
    {
        std::iter::once(item).chain(self)
    }

    // --- element access ----------------------------------------------------

    /// First element matching `predicate`, or [`SeqError::NoMatch`].
    fn first_where<P>(mut self, predicate: P) -> Result<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.find(predicate)
            .ok_or(SeqError::NoMatch { op: "first_where" })
    }

    /// Last element matching `predicate`, or [`SeqError::NoMatch`].
    fn last_where<P>(self, predicate: P) -> Result<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(predicate)
            .last()
            .ok_or(SeqError::NoMatch { op: "last_where" })
    }

    /// The only element of the sequence.
    ///
    /// Fails with [`SeqError::NoElements`] on an empty sequence and with
    /// [`SeqError::MoreThanOneElement`] when a second element exists.
    fn single(mut self) -> Result<Self::Item>
    where
        Self: Sized,
    {
        let first = self.next().ok_or(SeqError::NoElements { op: "single" })?;
        match self.next() {
            None => Ok(first),
            Some(_) => Err(SeqError::MoreThanOneElement { op: "single" }),
        }
    }

    /// The only element matching `predicate`.
    ///
    /// Stops at the second match and fails with
    /// [`SeqError::MoreThanOneMatch`]; fails with [`SeqError::NoMatch`] when
    /// nothing matches.
    fn single_where<P>(self, predicate: P) -> Result<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        match self.filter(predicate).single() {
            Err(SeqError::NoElements { .. }) => Err(SeqError::NoMatch { op: "single_where" }),
            Err(SeqError::MoreThanOneElement { .. }) => {
                Err(SeqError::MoreThanOneMatch { op: "single_where" })
            }
            other => other,
        }
    }

    /// Like [`single_where`](SeqExt::single_where), but returns `default`
    /// when nothing matches. Several matches are still an error.
    fn single_where_or<P>(self, predicate: P, default: Self::Item) -> Result<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        match self.single_where(predicate) {
            Err(SeqError::NoMatch { .. }) => Ok(default),
            Err(SeqError::MoreThanOneMatch { .. }) => {
                Err(SeqError::MoreThanOneMatch { op: "single_where_or" })
            }
            other => other,
        }
    }

    /// Element at zero-based `index`, or [`SeqError::IndexOutOfRange`].
    fn element_at(self, index: usize) -> Result<Self::Item>
    where
        Self: Sized,
    {
        let mut len = 0;
        for item in self {
            if len == index {
                return Ok(item);
            }
            len += 1;
        }
        Err(SeqError::IndexOutOfRange { index, len })
    }

    /// The source, or `default` alone if the source turns out empty.
    fn default_if_empty(self, default: Self::Item) -> DefaultIfEmpty<Self>
    where
        Self: Sized,
    {
        DefaultIfEmpty::new(self, default)
    }

    // --- aggregation -------------------------------------------------------

    /// Length of the sequence when it is known without iterating.
    ///
    /// Sources with an exact size hint (ranges, slices, vectors) report it;
    /// adapters that cannot know their length in advance (e.g. `filter`)
    /// return `None`.
    fn try_len(&self) -> Option<usize> {
        match self.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(lower),
            _ => None,
        }
    }

    /// Arithmetic mean, or [`SeqError::NoElements`] on an empty sequence.
    fn average(self) -> Result<f64>
    where
        Self: Sized,
        Self::Item: Into<f64>,
    {
        let (sum, count) = self.fold((0.0_f64, 0usize), |(sum, count), x| {
            (sum + Into::<f64>::into(x), count + 1)
        });
        if count == 0 {
            return Err(SeqError::NoElements { op: "average" });
        }
        Ok(sum / count as f64)
    }

    /// Largest element, or [`SeqError::NoElements`].
    fn max_required(self) -> Result<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.max().ok_or(SeqError::NoElements { op: "max" })
    }

    /// Smallest element, or [`SeqError::NoElements`].
    fn min_required(self) -> Result<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.min().ok_or(SeqError::NoElements { op: "min" })
    }

    /// [`Iterator::reduce`] that treats an empty sequence as an error.
    fn reduce_required<F>(self, f: F) -> Result<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.reduce(f).ok_or(SeqError::NoElements { op: "reduce" })
    }

    /// Folds from `seed`, then maps the accumulator through `result`.
    fn aggregate<A, R, F, G>(self, seed: A, f: F, result: G) -> R
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> A,
        G: FnOnce(A) -> R,
    {
        result(self.fold(seed, f))
    }

    // --- set operations ----------------------------------------------------

    /// Drops repeated elements, keeping first occurrences.
    fn distinct(self) -> DistinctBy<Self, Identity<Self::Item>, Self::Item>
    where
        Self: Sized,
        Self::Item: Clone + Eq + Hash,
    {
        DistinctBy::new(self, <Self::Item as Clone>::clone as Identity<Self::Item>)
    }

    /// Drops elements whose key was already seen.
    fn distinct_by<K, F>(self, key: F) -> DistinctBy<Self, F, K>
    where
        Self: Sized,
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        DistinctBy::new(self, key)
    }

    /// Distinct elements of both sequences, this one first.
    fn union<J>(
        self,
        other: J,
    ) -> DistinctBy<Chain<Self, J::IntoIter>, Identity<Self::Item>, Self::Item>
    where
        Self: Sized,
        Self::Item: Clone + Eq + Hash,
        J: IntoIterator<Item = Self::Item>,
    {
        self.chain(other).distinct()
    }

    /// Union where elements are compared through `key`.
    fn union_by<J, K, F>(self, other: J, key: F) -> DistinctBy<Chain<Self, J::IntoIter>, F, K>
    where
        Self: Sized,
        J: IntoIterator<Item = Self::Item>,
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        self.chain(other).distinct_by(key)
    }

    /// Distinct elements of this sequence that also occur in `other`.
    fn intersect<J>(self, other: J) -> SetFilter<Self, Identity<Self::Item>, Self::Item>
    where
        Self: Sized,
        Self::Item: Clone + Eq + Hash,
        J: IntoIterator<Item = Self::Item>,
    {
        SetFilter::new(
            self,
            other,
            <Self::Item as Clone>::clone as Identity<Self::Item>,
            SetMode::Intersect,
        )
    }

    /// Elements whose key occurs in `keys`, one per key.
    fn intersect_by<J, K, F>(self, keys: J, key: F) -> SetFilter<Self, F, K>
    where
        Self: Sized,
        J: IntoIterator<Item = K>,
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        SetFilter::new(self, keys, key, SetMode::Intersect)
    }

    /// Distinct elements of this sequence that do not occur in `other`.
    fn except<J>(self, other: J) -> SetFilter<Self, Identity<Self::Item>, Self::Item>
    where
        Self: Sized,
        Self::Item: Clone + Eq + Hash,
        J: IntoIterator<Item = Self::Item>,
    {
        SetFilter::new(
            self,
            other,
            <Self::Item as Clone>::clone as Identity<Self::Item>,
            SetMode::Except,
        )
    }

    /// Elements whose key does not occur in `keys`, one per key.
    fn except_by<J, K, F>(self, keys: J, key: F) -> SetFilter<Self, F, K>
    where
        Self: Sized,
        J: IntoIterator<Item = K>,
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        SetFilter::new(self, keys, key, SetMode::Except)
    }

    // --- joining and grouping ----------------------------------------------

    /// Walks three sequences in lockstep, stopping at the shortest.
    fn zip3<B, C>(self, b: B, c: C) -> Zip3<Self, B::IntoIter, C::IntoIter>
    where
        Self: Sized,
        B: IntoIterator,
        C: IntoIterator,
    {
        let flatten: fn(((Self::Item, B::Item), C::Item)) -> (Self::Item, B::Item, C::Item) =
            |((a, b), c)| (a, b, c);
        self.zip(b).zip(c).map(flatten)
    }

    /// Inner join on equal keys; see [`group`](crate::group) for ordering.
    fn join<J, K, OK, IK, R, F>(self, inner: J, outer_key: OK, inner_key: IK, result: F) -> Vec<R>
    where
        Self: Sized,
        J: IntoIterator,
        K: Eq + Hash,
        OK: FnMut(&Self::Item) -> K,
        IK: FnMut(&J::Item) -> K,
        F: FnMut(&Self::Item, &J::Item) -> R,
    {
        group::join(self, inner, outer_key, inner_key, result)
    }

    /// Join that hands each outer element all of its matches at once.
    fn group_join<J, K, OK, IK, R, F>(
        self,
        inner: J,
        outer_key: OK,
        inner_key: IK,
        result: F,
    ) -> Vec<R>
    where
        Self: Sized,
        J: IntoIterator,
        K: Eq + Hash,
        OK: FnMut(&Self::Item) -> K,
        IK: FnMut(&J::Item) -> K,
        F: FnMut(&Self::Item, &[J::Item]) -> R,
    {
        group::group_join(self, inner, outer_key, inner_key, result)
    }

    /// Groups elements by key, groups ordered by first appearance.
    fn group_by<K, F>(self, key: F) -> Vec<Grouping<K, Self::Item>>
    where
        Self: Sized,
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        self.to_lookup(key).into_groupings()
    }

    /// Builds a [`Lookup`] from key to elements.
    fn to_lookup<K, F>(self, key: F) -> Lookup<K, Self::Item>
    where
        Self: Sized,
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        Lookup::from_iter_by(self, key)
    }

    // --- sorting -----------------------------------------------------------

    /// Stable ascending sort by `key`, extendable with `then_by`.
    fn order_by<'a, K, F>(self, key: F) -> Ordered<'a, Self::Item>
    where
        Self: Sized,
        K: Ord,
        F: Fn(&Self::Item) -> K + 'a,
    {
        Ordered::new(self, key, Dir::Asc)
    }

    /// Stable descending sort by `key`, extendable with `then_by`.
    fn order_by_descending<'a, K, F>(self, key: F) -> Ordered<'a, Self::Item>
    where
        Self: Sized,
        K: Ord,
        F: Fn(&Self::Item) -> K + 'a,
    {
        Ordered::new(self, key, Dir::Desc)
    }
}

impl<I: Iterator> SeqExt for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_variants() {
        assert_eq!((1..=6).single_where(|x| *x > 5), Ok(6));
        assert_eq!(
            (1..=6).single_where(|x| *x > 4),
            Err(SeqError::MoreThanOneMatch { op: "single_where" })
        );
        assert_eq!(
            (1..=6).single_where(|x| *x > 6),
            Err(SeqError::NoMatch { op: "single_where" })
        );
        assert_eq!(std::iter::once(3).single(), Ok(3));
        assert_eq!(
            std::iter::empty::<i32>().single(),
            Err(SeqError::NoElements { op: "single" })
        );
        assert_eq!(
            (1..3).single(),
            Err(SeqError::MoreThanOneElement { op: "single" })
        );
    }

    #[test]
    fn test_single_where_or_defaults_only_on_no_match() {
        assert_eq!((1..=6).single_where_or(|x| *x > 6, -1), Ok(-1));
        assert_eq!((1..=6).single_where_or(|x| *x == 2, -1), Ok(2));
        assert_eq!(
            (1..=6).single_where_or(|x| *x > 1, -1),
            Err(SeqError::MoreThanOneMatch {
                op: "single_where_or"
            })
        );
    }

    #[test]
    fn test_single_where_stops_at_second_match() {
        let mut pulled = 0;
        let result = (1..=100)
            .inspect(|_| pulled += 1)
            .single_where(|x| *x % 2 == 0);
        assert!(result.is_err());
        assert_eq!(pulled, 4);
    }

    #[test]
    fn test_first_and_last_where() {
        assert_eq!((1..=6).first_where(|x| *x > 2), Ok(3));
        assert_eq!((1..=6).last_where(|x| *x > 2), Ok(6));
        assert!((1..=6).first_where(|x| *x > 8).is_err());
        assert!((1..=6).last_where(|x| *x > 8).is_err());
    }

    #[test]
    fn test_element_at_reports_length() {
        assert_eq!((1..=6).element_at(1), Ok(2));
        assert_eq!(
            (1..=6).element_at(12),
            Err(SeqError::IndexOutOfRange { index: 12, len: 6 })
        );
    }

    #[test]
    fn test_try_len_only_for_exact_hints() {
        let range = 1..=6;
        assert_eq!(range.try_len(), Some(6));

        let filtered = (1..=6).filter(|x| *x > 2);
        assert_eq!(filtered.try_len(), None);

        assert_eq!(vec![1, 2, 3].iter().try_len(), Some(3));
    }

    #[test]
    fn test_aggregation() {
        assert_eq!((1..=6).average(), Ok(3.5));
        assert!(std::iter::empty::<i32>().average().is_err());
        assert_eq!((1..=6).max_required(), Ok(6));
        assert_eq!((1..=6).min_required(), Ok(1));
        assert_eq!((1..=6).reduce_required(|a, b| a + b), Ok(21));
        assert!(std::iter::empty::<i32>().reduce_required(|a, b| a + b).is_err());

        let mean = (1..=6).aggregate(0, |acc, x| acc + x, |sum| sum as f32 / 6.0);
        assert_eq!(mean, 3.5);
    }

    #[test]
    fn test_manipulation() {
        assert_eq!((0..3).append(3).collect::<Vec<_>>(), [0, 1, 2, 3]);
        assert_eq!((0..3).prepend(-1).collect::<Vec<_>>(), [-1, 0, 1, 2]);
    }

    #[test]
    fn test_set_operations() {
        let a = [1, 2, 3];
        let b = [2, 3, 4, 5];

        assert_eq!([1, 2, 3, 1].into_iter().distinct().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(a.into_iter().union(b).collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
        assert_eq!(a.into_iter().intersect(b).collect::<Vec<_>>(), [2, 3]);
        assert_eq!(a.into_iter().except(b).collect::<Vec<_>>(), [1]);
    }

    #[test]
    fn test_keyed_set_operations() {
        let people = [("rbo", 36), ("you", 20), ("me", 16), ("me2", 16)];
        let rivals = [("azerty", 30), ("u2", 20), ("sme", 16), ("me2", 16)];

        let union: Vec<_> = people.iter().union_by(rivals.iter(), |p| p.1).collect();
        assert_eq!(union, [&("rbo", 36), &("you", 20), &("me", 16), &("azerty", 30)]);

        let both: Vec<_> = people
            .iter()
            .intersect_by(rivals.iter().map(|r| r.1), |p| p.1)
            .collect();
        assert_eq!(both, [&("you", 20), &("me", 16)]);

        let only: Vec<_> = people
            .iter()
            .except_by(rivals.iter().map(|r| r.1), |p| p.1)
            .collect();
        assert_eq!(only, [&("rbo", 36)]);
    }

    #[test]
    fn test_zip3_stops_at_shortest() {
        let zipped: Vec<_> = [1, 2, 3]
            .into_iter()
            .zip3(["A", "B", "C", "D"], ['*', '&', '|', '^'])
            .collect();
        assert_eq!(zipped, [(1, "A", '*'), (2, "B", '&'), (3, "C", '|')]);
    }

    #[test]
    fn test_group_by_orders_groups_by_first_key() {
        let groups = [("azerty", 30), ("u2", 20), ("sme", 16), ("me2", 16)]
            .into_iter()
            .group_by(|p| p.1);
        let keys: Vec<_> = groups.iter().map(|g| g.key).collect();
        assert_eq!(keys, [30, 20, 16]);
        assert_eq!(groups[2].elements, [("sme", 16), ("me2", 16)]);
    }
}
