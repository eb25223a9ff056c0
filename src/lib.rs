//! `kurai`: streaming k-th largest maintenance.
//!
//! Maintains, over an unbounded stream of numbers, the current k-th
//! largest value seen so far, after every insertion, using competing
//! strategies with different asymptotic costs. The crate is a
//! comparative micro-benchmark: the strategies must always agree, and
//! their relative cost under identical input is the interesting output.
//!
//! Exposed modules:
//! - `rank`: the four strategies (full-scan baseline, sorted shortlist,
//!   tree shortlist, heap shortlist) sharing one add-and-report contract.
//! - `coordinator`: feeds each observation to every strategy in lockstep
//!   and turns disagreement into a first-class error.
//! - `metrics`: per-call latency samples and sinks for benchmark
//!   harnesses; the strategies themselves stay free of timing concerns.
//! - `walk`: random-walk stream generation for demos and benches.

#![forbid(unsafe_code)]

pub mod coordinator;
pub mod metrics;
pub mod rank;
pub mod walk;

pub use coordinator::{Coordinator, Disagreement};
pub use metrics::{LatencyReport, LatencySample, LatencySink, LatencySummary, Strategy};
pub use rank::{FullScan, HeapShortlist, SeedError, SortedShortlist, TreeShortlist};
pub use walk::IncrementWalk;
