//! Strategy chain execution and observation.
//!
//! ## Submodules
//!
//! - [`runner`]: the ordered [`StrategyChain`] and the caller-level
//!   [`HighlightExtractor`]
//! - [`observer`]: per-attempt callbacks for logging and profiling

pub mod observer;
pub mod runner;

pub use observer::{AttemptClock, AttemptLog, ChainObserver, NoopObserver, StrategyAttempt};
pub use runner::{ChainOutcome, Extraction, HighlightExtractor, StrategyChain};
