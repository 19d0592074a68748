//! Engine run metrics.
//!
//! `ResponseEngine::respond` does not time anything. `ResponseEngine::run`
//! (used by verbose replies) records how long the scan and the whole run took
//! and keeps the full scan so callers can inspect shadowed rules.

use super::trigger::TriggerInfo;
use crate::{Intent, KeywordRule};
use std::time::Duration;

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct RunMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    /// Time spent folding and scanning the utterance.
    pub scan: Duration,
}

/// Engine output bundled with the scan and timings.
#[derive(Debug, Clone)]
pub(crate) struct RunResult {
    pub scan: TriggerInfo,
    /// Winning rule, `None` when the fallback reply was used.
    pub winner: Option<KeywordRule>,
    pub reply: &'static str,
    pub metrics: RunMetrics,
}

impl RunResult {
    pub fn intent(&self) -> Intent {
        self.winner.map_or(Intent::Fallback, |rule| rule.intent)
    }
}
