//! Observer hooks for the strategy chain
//!
//! The chain reports each strategy attempt to a [`ChainObserver`]. The default
//! methods are empty, so [`NoopObserver`] costs nothing; [`AttemptLog`]
//! records every attempt for debugging and profiling.

use crate::strategies::StrategyKind;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Receives callbacks as the chain tries each strategy in order.
pub trait ChainObserver {
    /// A strategy is about to run.
    fn on_attempt(&mut self, _kind: StrategyKind) {}

    /// A strategy finished, producing `produced` candidates in `elapsed`.
    fn on_result(&mut self, _kind: StrategyKind, _produced: usize, _elapsed: Duration) {}
}

/// Observer that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ChainObserver for NoopObserver {}

/// Measures wall-clock time for a single strategy attempt.
#[derive(Debug, Clone, Copy)]
pub struct AttemptClock(Instant);

impl AttemptClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// One strategy attempt as seen by [`AttemptLog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyAttempt {
    pub kind: StrategyKind,
    pub produced: usize,
    #[serde(serialize_with = "serialize_micros")]
    pub elapsed: Duration,
}

fn serialize_micros<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_micros().min(u128::from(u64::MAX)) as u64)
}

/// Records every attempt in order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AttemptLog {
    attempts: Vec<StrategyAttempt>,
}

impl AttemptLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts in the order the chain made them
    pub fn attempts(&self) -> &[StrategyAttempt] {
        &self.attempts
    }

    /// The strategies that were tried, in order.
    pub fn tried(&self) -> Vec<StrategyKind> {
        self.attempts.iter().map(|a| a.kind).collect()
    }

    /// The first strategy that produced candidates, if any.
    pub fn winner(&self) -> Option<StrategyKind> {
        self.attempts.iter().find(|a| a.produced > 0).map(|a| a.kind)
    }

    /// Total time spent across all attempts.
    pub fn total_elapsed(&self) -> Duration {
        self.attempts.iter().map(|a| a.elapsed).sum()
    }
}

impl ChainObserver for AttemptLog {
    fn on_result(&mut self, kind: StrategyKind, produced: usize, elapsed: Duration) {
        self.attempts.push(StrategyAttempt {
            kind,
            produced,
            elapsed,
        });
    }
}
