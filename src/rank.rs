//! Streaming k-th largest maintenance.
//!
//! Four strategies share one contract: accept one new number, return the
//! current k-th largest value seen so far. Each maintains its own state
//! incrementally and never evicts anything except by the top-k policy.
//!
//! - [`FullScan`]: keeps the whole stream, full sort per query. O(N log N).
//!   Baseline / correctness reference only.
//! - [`SortedShortlist`]: k values in a sorted `Vec`, re-sorted on each
//!   admitted update. O(k) per update.
//! - [`TreeShortlist`]: k values in an ordered multiset (`BTreeMap`).
//!   O(log k) per update.
//! - [`HeapShortlist`]: k values in a binary min-heap. O(log k) per update,
//!   and the one a real system should keep.
//!
//! Admission rule, everywhere: a new value `x` enters the window only if
//! `x` is strictly greater than the current window minimum. Values tied
//! with the minimum are rejected; since all tied minima are numerically
//! equal, this never changes the reported k-th largest.
//!
//! Notes:
//! - The value type is any totally ordered scalar (`Ord + Copy`). Floats
//!   are not `Ord` and are intentionally out of scope.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};
use std::fmt;

/// Errors for strategy construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// `k` must be at least 1.
    ZeroK,
    /// The seed must contain exactly `k` values.
    Length { expected: usize, actual: usize },
    /// The seed must contain at least `k` values.
    TooShort { min: usize, actual: usize },
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroK => write!(f, "k must be at least 1"),
            Self::Length { expected, actual } => {
                write!(f, "seed must contain exactly {expected} values (got {actual})")
            }
            Self::TooShort { min, actual } => {
                write!(f, "seed must contain at least {min} values (got {actual})")
            }
        }
    }
}

impl std::error::Error for SeedError {}

fn check_seed(k: usize, len: usize) -> Result<(), SeedError> {
    if k == 0 {
        return Err(SeedError::ZeroK);
    }
    if len != k {
        return Err(SeedError::Length {
            expected: k,
            actual: len,
        });
    }
    Ok(())
}

/// Baseline strategy: retain every observation, recompute per query.
///
/// `add` is O(1) but each k-th largest query clones and sorts the whole
/// stream, so per-call cost grows without bound with stream length. Kept
/// as the correctness oracle the bounded strategies are checked against.
#[derive(Debug, Clone)]
pub struct FullScan<T> {
    k: usize,
    stream: Vec<T>,
}

impl<T: Ord + Copy> FullScan<T> {
    /// Create from an initial batch of at least `k` values.
    pub fn with_seed(k: usize, seed: &[T]) -> Result<Self, SeedError> {
        if k == 0 {
            return Err(SeedError::ZeroK);
        }
        if seed.len() < k {
            return Err(SeedError::TooShort {
                min: k,
                actual: seed.len(),
            });
        }
        Ok(Self {
            k,
            stream: seed.to_vec(),
        })
    }

    /// Append one observation and return the k-th largest over the
    /// entire stream, seed included.
    pub fn add(&mut self, x: T) -> T {
        self.stream.push(x);
        self.kth_largest()
    }

    /// Recompute the k-th largest without mutating. O(N log N).
    pub fn kth_largest(&self) -> T {
        let mut sorted = self.stream.clone();
        sorted.sort_unstable();
        sorted[sorted.len() - self.k]
    }

    /// Number of observations so far, seed included.
    pub fn seen(&self) -> usize {
        self.stream.len()
    }

    /// The rank being tracked.
    pub fn k(&self) -> usize {
        self.k
    }
}

/// Shortlist strategy: the k largest values in a sorted `Vec`.
///
/// An admitted value overwrites the minimum slot and the whole window is
/// re-sorted, which dominates the per-update cost. Reading the minimum
/// (the k-th largest) is O(1).
#[derive(Debug, Clone)]
pub struct SortedShortlist<T> {
    /// Ascending; `window[0]` is the k-th largest.
    window: Vec<T>,
}

impl<T: Ord + Copy> SortedShortlist<T> {
    /// Create from an initial batch of exactly `k` values.
    pub fn with_seed(k: usize, seed: &[T]) -> Result<Self, SeedError> {
        check_seed(k, seed.len())?;
        let mut window = seed.to_vec();
        window.sort_unstable();
        Ok(Self { window })
    }

    /// Offer one observation; return the current k-th largest.
    pub fn add(&mut self, x: T) -> T {
        if x > self.window[0] {
            self.window[0] = x;
            self.window.sort_unstable();
        }
        self.window[0]
    }

    /// The current k-th largest. O(1).
    pub fn kth_largest(&self) -> T {
        self.window[0]
    }

    /// The retained window, ascending. Always exactly `k` values.
    pub fn window(&self) -> &[T] {
        &self.window
    }

    /// The rank being tracked.
    pub fn k(&self) -> usize {
        self.window.len()
    }
}

/// Ordered-structure strategy: the k largest values in a `BTreeMap`
/// multiset (value → multiplicity).
///
/// Admission inserts the new value, then evicts one instance of the
/// smallest key, so the total multiplicity stays at k. O(log k) per
/// update.
#[derive(Debug, Clone)]
pub struct TreeShortlist<T> {
    window: BTreeMap<T, usize>,
    k: usize,
}

impl<T: Ord + Copy> TreeShortlist<T> {
    /// Create from an initial batch of exactly `k` values.
    pub fn with_seed(k: usize, seed: &[T]) -> Result<Self, SeedError> {
        check_seed(k, seed.len())?;
        let mut window = BTreeMap::new();
        for &v in seed {
            *window.entry(v).or_insert(0) += 1;
        }
        Ok(Self { window, k })
    }

    /// Offer one observation; return the current k-th largest.
    pub fn add(&mut self, x: T) -> T {
        if x > self.kth_largest() {
            *self.window.entry(x).or_insert(0) += 1;
            if let Some(mut min) = self.window.first_entry() {
                if *min.get() > 1 {
                    *min.get_mut() -= 1;
                } else {
                    min.remove();
                }
            }
        }
        self.kth_largest()
    }

    /// The current k-th largest (smallest retained key). O(log k).
    pub fn kth_largest(&self) -> T {
        match self.window.first_key_value() {
            Some((&min, _)) => min,
            // Multiplicity never drops below k >= 1.
            None => unreachable!("window holds k values"),
        }
    }

    /// The retained window flattened to a sorted `Vec`. Always exactly
    /// `k` values.
    pub fn window(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.k);
        for (&v, &count) in &self.window {
            for _ in 0..count {
                out.push(v);
            }
        }
        out
    }

    /// The rank being tracked.
    pub fn k(&self) -> usize {
        self.k
    }
}

/// Heap strategy: the k largest values in a binary min-heap.
///
/// Admission replaces the minimum in place through `peek_mut`, which
/// sifts once when the guard drops: a single combined replace, with no
/// transient k+1-element heap. O(log k) per update, O(1) min read.
#[derive(Debug, Clone)]
pub struct HeapShortlist<T> {
    window: BinaryHeap<Reverse<T>>,
}

impl<T: Ord + Copy> HeapShortlist<T> {
    /// Create from an initial batch of exactly `k` values.
    pub fn with_seed(k: usize, seed: &[T]) -> Result<Self, SeedError> {
        check_seed(k, seed.len())?;
        Ok(Self {
            window: seed.iter().map(|&v| Reverse(v)).collect(),
        })
    }

    /// Offer one observation; return the current k-th largest.
    pub fn add(&mut self, x: T) -> T {
        if x > self.kth_largest() {
            if let Some(mut min) = self.window.peek_mut() {
                *min = Reverse(x);
            }
        }
        self.kth_largest()
    }

    /// The current k-th largest (heap root). O(1).
    pub fn kth_largest(&self) -> T {
        match self.window.peek() {
            Some(&Reverse(min)) => min,
            // Construction guarantees k >= 1 elements; nothing is ever popped.
            None => unreachable!("window holds k values"),
        }
    }

    /// The retained window flattened to a sorted `Vec`. Always exactly
    /// `k` values.
    pub fn window(&self) -> Vec<T> {
        let mut out: Vec<T> = self.window.iter().map(|&Reverse(v)| v).collect();
        out.sort_unstable();
        out
    }

    /// The rank being tracked.
    pub fn k(&self) -> usize {
        self.window.len()
    }
}
