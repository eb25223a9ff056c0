//! Latency sampling for benchmark harnesses.
//!
//! The strategies themselves return plain values and hold no timing
//! state; measurement happens around each call, at the coordinator (see
//! [`Coordinator::process_recording`](crate::Coordinator::process_recording))
//! or in whatever harness drives the strategies directly. This module
//! only defines what a measurement looks like and where it goes.

use std::fmt;
use std::time::Duration;

/// Identifies one of the competing strategies in recorded samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    FullScan,
    SortedShortlist,
    TreeShortlist,
    HeapShortlist,
}

impl Strategy {
    /// All strategies, in coordinator feeding order.
    pub const ALL: [Strategy; 4] = [
        Strategy::FullScan,
        Strategy::SortedShortlist,
        Strategy::TreeShortlist,
        Strategy::HeapShortlist,
    ];

    /// Stable label for reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::FullScan => "full-scan",
            Self::SortedShortlist => "sorted-shortlist",
            Self::TreeShortlist => "tree-shortlist",
            Self::HeapShortlist => "heap-shortlist",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::FullScan => 0,
            Self::SortedShortlist => 1,
            Self::TreeShortlist => 2,
            Self::HeapShortlist => 3,
        }
    }
}

/// One per-call latency measurement: which strategy, how long its `add`
/// took for one observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencySample {
    pub strategy: Strategy,
    pub elapsed: Duration,
}

impl LatencySample {
    pub fn new(strategy: Strategy, elapsed: Duration) -> Self {
        Self { strategy, elapsed }
    }
}

/// Destination for latency samples.
///
/// Implementations decide how samples are stored or rendered; the core
/// only appends.
pub trait LatencySink {
    fn record(&mut self, sample: LatencySample);
}

/// Raw capture: keep every sample in arrival order.
impl LatencySink for Vec<LatencySample> {
    fn record(&mut self, sample: LatencySample) {
        self.push(sample);
    }
}

/// Running aggregate for one strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatencySummary {
    pub count: u64,
    pub total: Duration,
    pub max: Duration,
}

impl LatencySummary {
    /// Mean per-call latency, or zero before any samples.
    pub fn mean(&self) -> Duration {
        if self.count == 0 {
            Duration::ZERO
        } else {
            self.total / self.count as u32
        }
    }

    fn record(&mut self, elapsed: Duration) {
        self.count += 1;
        self.total += elapsed;
        self.max = self.max.max(elapsed);
    }
}

/// Per-strategy latency aggregate, suitable for printing after a run.
///
/// Implements [`LatencySink`], so it can be handed straight to
/// `process_recording`.
#[derive(Debug, Clone, Default)]
pub struct LatencyReport {
    summaries: [LatencySummary; 4],
}

impl LatencyReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// The aggregate for one strategy.
    pub fn summary(&self, strategy: Strategy) -> &LatencySummary {
        &self.summaries[strategy.index()]
    }
}

impl LatencySink for LatencyReport {
    fn record(&mut self, sample: LatencySample) {
        self.summaries[sample.strategy.index()].record(sample.elapsed);
    }
}

impl fmt::Display for LatencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for strategy in Strategy::ALL {
            let s = self.summary(strategy);
            writeln!(
                f,
                "{:<18} calls={:<8} mean={:?} max={:?}",
                strategy.label(),
                s.count,
                s.mean(),
                s.max,
            )?;
        }
        Ok(())
    }
}
