//! Lockstep coordination of the competing strategies.
//!
//! The coordinator owns one instance of each strategy, feeds every
//! incoming observation to all of them, and checks that their answers
//! agree. Disagreement is a programming error in one of the strategies
//! (or a broken seed precondition), surfaced as a first-class error
//! value rather than an assert so callers choose whether to hard-fail
//! or log and rebuild.

use crate::metrics::{LatencySample, LatencySink, Strategy};
use crate::rank::{FullScan, HeapShortlist, SeedError, SortedShortlist, TreeShortlist};
use std::fmt;
use std::time::Instant;

/// The strategies returned different k-th largest values for the same
/// observation.
///
/// Not a recoverable runtime condition: continuing would mean reporting
/// an untrustworthy result. A coordinator that produced this should be
/// discarded and reconstructed from a fresh seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disagreement<T> {
    /// The observation that exposed the divergence.
    pub observation: T,
    /// Answer from the full-scan oracle.
    pub full_scan: T,
    /// Answer from the sorted shortlist.
    pub sorted: T,
    /// Answer from the tree shortlist.
    pub tree: T,
    /// Answer from the heap shortlist.
    pub heap: T,
}

impl<T: fmt::Debug> fmt::Display for Disagreement<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "strategies disagree on the k-th largest after {:?}: \
             full-scan={:?} sorted={:?} tree={:?} heap={:?}",
            self.observation, self.full_scan, self.sorted, self.tree, self.heap
        )
    }
}

impl<T: fmt::Debug> std::error::Error for Disagreement<T> {}

/// Feeds each observation to all four strategies and checks agreement.
///
/// The strategies share no state, so feeding order is irrelevant; this
/// implementation runs them sequentially in a fixed order
/// ([`Strategy::ALL`]).
#[derive(Debug, Clone)]
pub struct Coordinator<T> {
    scan: FullScan<T>,
    sorted: SortedShortlist<T>,
    tree: TreeShortlist<T>,
    heap: HeapShortlist<T>,
}

impl<T: Ord + Copy> Coordinator<T> {
    /// Construct all four strategies from a seed of exactly `k` values.
    pub fn with_seed(k: usize, seed: &[T]) -> Result<Self, SeedError> {
        // Bounded strategies first: they carry the exact-length check.
        let sorted = SortedShortlist::with_seed(k, seed)?;
        let tree = TreeShortlist::with_seed(k, seed)?;
        let heap = HeapShortlist::with_seed(k, seed)?;
        let scan = FullScan::with_seed(k, seed)?;
        Ok(Self {
            scan,
            sorted,
            tree,
            heap,
        })
    }

    /// The rank being tracked.
    pub fn k(&self) -> usize {
        self.scan.k()
    }

    /// Number of observations so far, seed included.
    pub fn seen(&self) -> usize {
        self.scan.seen()
    }

    /// The current agreed k-th largest. O(1).
    pub fn kth_largest(&self) -> T {
        self.heap.kth_largest()
    }

    /// Feed one observation to every strategy and return the agreed
    /// k-th largest.
    pub fn process(&mut self, x: T) -> Result<T, Disagreement<T>> {
        let full_scan = self.scan.add(x);
        let sorted = self.sorted.add(x);
        let tree = self.tree.add(x);
        let heap = self.heap.add(x);
        Self::agree(x, full_scan, sorted, tree, heap)
    }

    /// Like [`process`](Self::process), but additionally measures each
    /// strategy's call and forwards one sample per strategy to `sink`.
    ///
    /// Measurement wraps the calls here so the strategies stay free of
    /// timing concerns.
    pub fn process_recording(
        &mut self,
        x: T,
        sink: &mut dyn LatencySink,
    ) -> Result<T, Disagreement<T>> {
        let start = Instant::now();
        let full_scan = self.scan.add(x);
        sink.record(LatencySample::new(Strategy::FullScan, start.elapsed()));

        let start = Instant::now();
        let sorted = self.sorted.add(x);
        sink.record(LatencySample::new(Strategy::SortedShortlist, start.elapsed()));

        let start = Instant::now();
        let tree = self.tree.add(x);
        sink.record(LatencySample::new(Strategy::TreeShortlist, start.elapsed()));

        let start = Instant::now();
        let heap = self.heap.add(x);
        sink.record(LatencySample::new(Strategy::HeapShortlist, start.elapsed()));

        Self::agree(x, full_scan, sorted, tree, heap)
    }

    fn agree(x: T, full_scan: T, sorted: T, tree: T, heap: T) -> Result<T, Disagreement<T>> {
        if full_scan == sorted && full_scan == tree && full_scan == heap {
            Ok(full_scan)
        } else {
            Err(Disagreement {
                observation: x,
                full_scan,
                sorted,
                tree,
                heap,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::LatencyReport;

    #[test]
    fn processes_a_stream_in_agreement() {
        let mut c = Coordinator::with_seed(5, &[1, 2, 3, 4, 5]).expect("seed ok");
        assert_eq!(c.k(), 5);

        assert_eq!(c.process(10).expect("agreement"), 2);
        assert_eq!(c.process(0).expect("agreement"), 2);
        assert_eq!(c.process(2).expect("agreement"), 2);
        assert_eq!(c.process(11).expect("agreement"), 3);

        assert_eq!(c.kth_largest(), 3);
        assert_eq!(c.seen(), 9);
    }

    #[test]
    fn seed_errors_surface_at_construction() {
        let err = Coordinator::with_seed(4, &[1, 2, 3]).expect_err("short seed rejected");
        assert_eq!(
            err,
            SeedError::Length {
                expected: 4,
                actual: 3
            }
        );
        let err = Coordinator::<i64>::with_seed(0, &[]).expect_err("k=0 rejected");
        assert_eq!(err, SeedError::ZeroK);
    }

    #[test]
    fn recording_emits_one_sample_per_strategy() {
        let mut c = Coordinator::with_seed(3, &[3, 1, 2]).expect("seed ok");
        let mut samples = Vec::new();

        c.process_recording(5, &mut samples).expect("agreement");
        assert_eq!(samples.len(), 4);
        let kinds: Vec<Strategy> = samples.iter().map(|s| s.strategy).collect();
        assert_eq!(kinds, Strategy::ALL.to_vec());

        c.process_recording(0, &mut samples).expect("agreement");
        assert_eq!(samples.len(), 8);
    }

    #[test]
    fn recording_report_counts_every_call() {
        let mut c = Coordinator::with_seed(2, &[0, 0]).expect("seed ok");
        let mut report = LatencyReport::new();
        for x in [1, 2, 3, 2, 1] {
            c.process_recording(x, &mut report).expect("agreement");
        }
        for strategy in Strategy::ALL {
            assert_eq!(report.summary(strategy).count, 5);
        }
    }

    #[test]
    fn disagreement_reports_every_answer() {
        let err = Disagreement {
            observation: 7,
            full_scan: 3,
            sorted: 3,
            tree: 3,
            heap: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("disagree"));
        assert!(msg.contains("heap=2"));
    }
}
