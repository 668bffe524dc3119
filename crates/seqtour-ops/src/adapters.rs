//! Lazy iterator adapters returned by [`SeqExt`](crate::SeqExt).
//!
//! All of these pull from the source only as they are consumed. The ones
//! that must see the end of the source before yielding (`TakeLast`) buffer
//! at most `n` elements, growing the buffer only as elements arrive.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// Yields every element except the last `n`.
#[derive(Debug, Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct SkipLast<I: Iterator> {
    iter: I,
    n: usize,
    buf: VecDeque<I::Item>,
}

impl<I: Iterator> SkipLast<I> {
    pub(crate) fn new(iter: I, n: usize) -> Self {
        SkipLast {
            iter,
            n,
            buf: VecDeque::new(),
        }
    }
}

impl<I: Iterator> Iterator for SkipLast<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.push_back(self.iter.next()?);
            if self.buf.len() > self.n {
                return self.buf.pop_front();
            }
        }
    }
}

/// Yields only the last `n` elements.
#[derive(Debug, Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct TakeLast<I: Iterator> {
    iter: Option<I>,
    n: usize,
    buf: VecDeque<I::Item>,
}

impl<I: Iterator> TakeLast<I> {
    pub(crate) fn new(iter: I, n: usize) -> Self {
        TakeLast {
            iter: Some(iter),
            n,
            buf: VecDeque::new(),
        }
    }
}

impl<I: Iterator> Iterator for TakeLast<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(iter) = self.iter.take() {
            if self.n > 0 {
                for item in iter {
                    if self.buf.len() == self.n {
                        self.buf.pop_front();
                    }
                    self.buf.push_back(item);
                }
            }
        }
        self.buf.pop_front()
    }
}

/// Splits the source into vectors of `size` elements; the last may be shorter.
#[derive(Debug, Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct Chunk<I> {
    iter: I,
    size: usize,
}

impl<I> Chunk<I> {
    pub(crate) fn new(iter: I, size: usize) -> Self {
        assert!(size != 0, "chunk size must be non-zero");
        Chunk { iter, size }
    }
}

impl<I: Iterator> Iterator for Chunk<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk: Vec<_> = self.iter.by_ref().take(self.size).collect();
        (!chunk.is_empty()).then_some(chunk)
    }
}

/// Yields the source, or a single fallback element when the source is empty.
#[derive(Debug, Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct DefaultIfEmpty<I: Iterator> {
    iter: I,
    fallback: Option<I::Item>,
}

impl<I: Iterator> DefaultIfEmpty<I> {
    pub(crate) fn new(iter: I, fallback: I::Item) -> Self {
        DefaultIfEmpty {
            iter,
            fallback: Some(fallback),
        }
    }
}

impl<I: Iterator> Iterator for DefaultIfEmpty<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.iter.next() {
            Some(item) => {
                self.fallback = None;
                Some(item)
            }
            None => self.fallback.take(),
        }
    }
}

/// Yields the first element seen for each distinct key.
#[derive(Debug, Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct DistinctBy<I, F, K> {
    iter: I,
    key: F,
    seen: HashSet<K>,
}

impl<I, F, K> DistinctBy<I, F, K> {
    pub(crate) fn new(iter: I, key: F) -> Self {
        DistinctBy {
            iter,
            key,
            seen: HashSet::new(),
        }
    }
}

impl<I, F, K> Iterator for DistinctBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let DistinctBy { iter, key, seen } = self;
        iter.find(|item| seen.insert(key(item)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SetMode {
    Intersect,
    Except,
}

/// Filters the source against a set of keys taken from a second sequence.
///
/// In intersect mode an element passes when its key is in the set; in
/// except mode when it is not. Either way each key passes at most once, so
/// the output is duplicate-free.
#[derive(Debug, Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct SetFilter<I, F, K> {
    iter: I,
    key: F,
    keys: HashSet<K>,
    mode: SetMode,
}

impl<I, F, K: Eq + Hash> SetFilter<I, F, K> {
    pub(crate) fn new<J>(iter: I, keys: J, key: F, mode: SetMode) -> Self
    where
        J: IntoIterator<Item = K>,
    {
        SetFilter {
            iter,
            key,
            keys: keys.into_iter().collect(),
            mode,
        }
    }
}

impl<I, F, K> Iterator for SetFilter<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let SetFilter {
            iter,
            key,
            keys,
            mode,
        } = self;
        iter.find(|item| {
            let k = key(item);
            match mode {
                SetMode::Intersect => keys.remove(&k),
                SetMode::Except => keys.insert(k),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_last_keeps_prefix() {
        let out: Vec<_> = SkipLast::new(0..5, 3).collect();
        assert_eq!(out, [0, 1]);
        assert_eq!(SkipLast::new(0..5, 0).count(), 5);
        assert_eq!(SkipLast::new(0..2, 3).count(), 0);
    }

    #[test]
    fn test_take_last_keeps_suffix() {
        let out: Vec<_> = TakeLast::new(0..5, 3).collect();
        assert_eq!(out, [2, 3, 4]);
        assert_eq!(TakeLast::new(0..5, 0).count(), 0);
        assert_eq!(TakeLast::new(0..2, 3).collect::<Vec<_>>(), [0, 1]);
    }

    #[test]
    fn test_huge_counts_do_not_reserve_up_front() {
        assert_eq!(SkipLast::new(0..5, usize::MAX).count(), 0);
        assert_eq!(SkipLast::new(0..5, 1 << 40).count(), 0);
        assert_eq!(TakeLast::new(0..5, usize::MAX).collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
        assert_eq!(TakeLast::new(0..5, 1 << 40).collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_chunk_splits_with_short_tail() {
        let out: Vec<_> = Chunk::new(0..7, 3).collect();
        assert_eq!(out, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6]]);
        assert_eq!(Chunk::new(0..0, 3).count(), 0);
    }

    #[test]
    #[should_panic(expected = "chunk size must be non-zero")]
    fn test_chunk_rejects_zero() {
        let _ = Chunk::new(0..3, 0);
    }

    #[test]
    fn test_default_if_empty_only_fills_empty_sources() {
        let empty: Vec<i32> = DefaultIfEmpty::new(std::iter::empty(), 5).collect();
        assert_eq!(empty, [5]);

        let full: Vec<i32> = DefaultIfEmpty::new(1..3, 5).collect();
        assert_eq!(full, [1, 2]);
    }

    #[test]
    fn test_distinct_by_keeps_first_occurrence() {
        let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
        let out: Vec<_> =
            DistinctBy::new(words.into_iter(), |w: &&str| w.as_bytes()[0]).collect();
        assert_eq!(out, ["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_set_filter_modes() {
        let intersect: Vec<_> =
            SetFilter::new([1, 2, 3, 2].into_iter(), [2, 3, 4], |x: &i32| *x, SetMode::Intersect)
                .collect();
        assert_eq!(intersect, [2, 3]);

        let except: Vec<_> =
            SetFilter::new([1, 2, 3, 1].into_iter(), [2, 3, 4], |x: &i32| *x, SetMode::Except)
                .collect();
        assert_eq!(except, [1]);
    }
}
