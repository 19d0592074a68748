//! Reply selection.
//!
//! `ResponseEngine` owns a compiled rule table and answers utterances with
//! first-match-wins semantics:
//!
//! ```text
//! utterance ─▶ scan (fold + RegexSet) ─▶ earliest hit? ──yes─▶ rule.reply
//!                                              │
//!                                              └─no──▶ fallback reply
//! ```
//!
//! The engine holds no mutable state, so one instance can be shared across
//! threads and called concurrently.

use super::compiled_rules::CompiledRules;
use super::metrics::{RunMetrics, RunResult};
use super::trigger::TriggerInfo;
use crate::rules::FALLBACK_REPLY;
use crate::{KeywordRule, ResponseVerbose, Result};
use std::time::Instant;
use tracing::debug;

/// Maps free text to one canned reply using an ordered keyword rule table.
///
/// Usage: build with [`ResponseEngine::new`] (or use
/// [`default_engine`](crate::default_engine)), then call
/// [`respond`](ResponseEngine::respond).
#[derive(Debug)]
pub struct ResponseEngine {
    compiled: CompiledRules,
    fallback: &'static str,
}

impl ResponseEngine {
    /// Compile `rules` in the given order. Earlier rules take precedence.
    pub fn new(rules: Vec<KeywordRule>) -> Result<Self> {
        let compiled = CompiledRules::new(rules)?;
        debug!(rules = compiled.len(), triggers = compiled.set.len(), "compiled keyword rules");
        Ok(ResponseEngine { compiled, fallback: FALLBACK_REPLY })
    }

    /// Replace the reply used when no rule matches.
    pub fn with_fallback(mut self, reply: &'static str) -> Self {
        self.fallback = reply;
        self
    }

    pub fn rules(&self) -> &[KeywordRule] {
        self.compiled.rules()
    }

    pub fn fallback(&self) -> &'static str {
        self.fallback
    }

    /// Reply to `utterance`. Total: every input, including `""`, gets a reply.
    pub fn respond(&self, utterance: &str) -> &'static str {
        let folded = utterance.to_lowercase();
        let winner = self
            .compiled
            .set
            .matches(&folded)
            .iter()
            .next()
            .and_then(|pattern| self.compiled.triggers.get(pattern))
            .and_then(|t| self.compiled.rules.get(t.rule));

        match winner {
            Some(rule) => {
                debug!(rule = rule.name, intent = %rule.intent, "keyword rule matched");
                rule.reply
            }
            None => {
                debug!("no keyword rule matched; using fallback");
                self.fallback
            }
        }
    }

    /// Reply to `utterance` and report every matching candidate.
    pub fn respond_verbose(&self, utterance: &str) -> ResponseVerbose {
        crate::respond_verbose_with(self, utterance)
    }

    /// Like [`respond`](Self::respond) but keeps the full scan and timings.
    pub(crate) fn run(&self, utterance: &str) -> RunResult {
        let started = Instant::now();
        let scan = TriggerInfo::scan(utterance, &self.compiled);
        let scan_elapsed = started.elapsed();

        let winner = scan.first().and_then(|hit| self.compiled.rules.get(hit.rule)).copied();
        let reply = winner.map_or(self.fallback, |rule| rule.reply);

        debug!(
            hits = scan.hits.len(),
            intents = ?scan.intents,
            winner = winner.map_or("<fallback>", |rule| rule.name),
            "scanned utterance"
        );

        RunResult { scan, winner, reply, metrics: RunMetrics { total: started.elapsed(), scan: scan_elapsed } }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Intent;

    fn engine() -> ResponseEngine {
        ResponseEngine::new(vec![
            keyword_rule! { name: "first", intent: Intent::Atm, triggers: ["atm"], reply: "first" },
            keyword_rule! { name: "second", intent: Intent::Price, triggers: ["price", "atm"], reply: "second" },
        ])
        .unwrap()
        .with_fallback("fallback")
    }

    #[test]
    fn earlier_rule_wins_on_shared_trigger() {
        assert_eq!(engine().respond("atm price"), "first");
    }

    #[test]
    fn later_rule_answers_when_earlier_is_absent() {
        assert_eq!(engine().respond("What's the PRICE?"), "second");
    }

    #[test]
    fn custom_fallback_is_used() {
        assert_eq!(engine().respond("nothing relevant"), "fallback");
        assert_eq!(engine().fallback(), "fallback");
    }

    #[test]
    fn run_agrees_with_respond() {
        let engine = engine();
        for input in ["atm price", "price", "", "zzz"] {
            assert_eq!(engine.run(input).reply, engine.respond(input), "input: {input:?}");
        }
    }

    #[test]
    fn run_reports_shadowed_candidates() {
        let run = engine().run("atm price");
        assert_eq!(run.winner.map(|r| r.name), Some("first"));
        assert_eq!(run.intent(), Intent::Atm);
        let names: Vec<&str> = run.scan.hits.iter().map(|h| h.rule_name).collect();
        assert_eq!(names, vec!["first", "second", "second"]);
        assert!(run.metrics.scan <= run.metrics.total);
    }

    #[test]
    fn respond_verbose_lists_candidates_without_changing_winner() {
        let engine = engine();
        let verbose = engine.respond_verbose("ATM price");
        assert_eq!(verbose.reply, engine.respond("ATM price"));
        assert_eq!(verbose.rule.as_deref(), Some("first"));
        assert_eq!(verbose.details.folded, "atm price");
        assert_eq!(verbose.details.candidates.len(), 3);
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResponseEngine>();
    }
}
