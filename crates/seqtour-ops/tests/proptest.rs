//! Property-based tests for the operators using proptest.

use std::collections::HashSet;

use proptest::prelude::*;
use seqtour_ops::SeqExt;

/// Counts around the source length, plus counts far beyond any buffer size.
fn any_count() -> impl Strategy<Value = usize> {
    prop_oneof![0usize..60, Just(1usize << 40), Just(usize::MAX)]
}

proptest! {
    /// `distinct` never yields the same element twice and keeps every
    /// element's first occurrence, in order.
    #[test]
    fn test_distinct_keeps_first_occurrences(items in prop::collection::vec(0i32..20, 0..60)) {
        let out: Vec<i32> = items.iter().copied().distinct().collect();

        let unique: HashSet<_> = out.iter().collect();
        prop_assert_eq!(unique.len(), out.len());

        let mut seen = HashSet::new();
        let expected: Vec<i32> = items.iter().copied().filter(|x| seen.insert(*x)).collect();
        prop_assert_eq!(out, expected);
    }

    /// `take_last(n)` is the suffix of length `min(n, len)`.
    #[test]
    fn test_take_last_is_suffix(items in prop::collection::vec(any::<i32>(), 0..50), n in any_count()) {
        let out: Vec<i32> = items.iter().copied().take_last(n).collect();
        let start = items.len().saturating_sub(n);
        prop_assert_eq!(out.as_slice(), &items[start..]);
    }

    /// `skip_last(n)` is the prefix that leaves out `n` elements.
    #[test]
    fn test_skip_last_is_prefix(items in prop::collection::vec(any::<i32>(), 0..50), n in any_count()) {
        let out: Vec<i32> = items.iter().copied().skip_last(n).collect();
        let end = items.len().saturating_sub(n);
        prop_assert_eq!(out.as_slice(), &items[..end]);
    }

    /// Chunks re-concatenate to the source and only the last may be short.
    #[test]
    fn test_chunks_cover_source(items in prop::collection::vec(any::<i32>(), 0..50), size in 1usize..8) {
        let chunks: Vec<Vec<i32>> = items.iter().copied().chunk(size).collect();
        let flat: Vec<i32> = chunks.iter().flatten().copied().collect();
        prop_assert_eq!(&flat, &items);
        if let Some((last, rest)) = chunks.split_last() {
            prop_assert!(rest.iter().all(|c| c.len() == size));
            prop_assert!(!last.is_empty() && last.len() <= size);
        }
    }

    /// `order_by` agrees with a stable sort on the same key.
    #[test]
    fn test_order_by_is_stable_sort(items in prop::collection::vec((0u8..5, any::<u16>()), 0..40)) {
        let ordered: Vec<(u8, u16)> = items.iter().copied().order_by(|p| p.0).into_vec();

        let mut expected = items.clone();
        expected.sort_by_key(|p| p.0);
        prop_assert_eq!(ordered, expected);
    }

    /// Every element of both inputs shows up in their union.
    #[test]
    fn test_union_contains_both(
        a in prop::collection::vec(0i32..30, 0..30),
        b in prop::collection::vec(0i32..30, 0..30),
    ) {
        let union: HashSet<i32> = a.iter().copied().union(b.iter().copied()).collect();
        prop_assert!(a.iter().all(|x| union.contains(x)));
        prop_assert!(b.iter().all(|x| union.contains(x)));
    }

    /// Intersect and except split the distinct elements of the left side.
    #[test]
    fn test_intersect_and_except_partition_left(
        a in prop::collection::vec(0i32..30, 0..30),
        b in prop::collection::vec(0i32..30, 0..30),
    ) {
        let both: Vec<i32> = a.iter().copied().intersect(b.iter().copied()).collect();
        let only: Vec<i32> = a.iter().copied().except(b.iter().copied()).collect();
        let distinct: HashSet<i32> = a.iter().copied().collect();

        prop_assert_eq!(both.len() + only.len(), distinct.len());
        prop_assert!(both.iter().all(|x| b.contains(x)));
        prop_assert!(only.iter().all(|x| !b.contains(x)));
    }

    /// `single_where` succeeds exactly when one element matches.
    #[test]
    fn test_single_where_iff_one_match(items in prop::collection::vec(0i32..10, 0..20), target in 0i32..10) {
        let matches = items.iter().filter(|x| **x == target).count();
        let result = items.iter().single_where(|x| **x == target);
        prop_assert_eq!(result.is_ok(), matches == 1);
    }
}
