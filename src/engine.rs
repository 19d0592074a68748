//! Keyword response engine.
//!
//! This module is the entry point for turning a free-text utterance into one
//! canned reply. It is split into focused submodules under `src/engine/`.
//!
//! ## How the parts work together
//!
//! ```text
//! rules (ordered) ──┐
//!                   │  CompiledRules::new        (compiled_rules.rs)
//!                   │    - validate triggers
//!                   │    - one RegexSet over all escaped triggers
//!                   └──────────────┬─────────────
//!                                  │
//! utterance ── TriggerInfo::scan ──┤  case-fold, single RegexSet pass
//!             (trigger.rs)         │  -> hits in table order + IntentMask
//!                                  v
//!                       ResponseEngine::run (responder.rs)
//!                         - first hit wins
//!                         - no hit -> fallback reply
//!                                  │
//!                                  v
//!                              RunResult                (metrics.rs)
//! ```
//!
//! Resolution is **first-match-wins**: the rule table order is the precedence
//! order, and later rules are never consulted once an earlier rule has a
//! trigger in the utterance. Every utterance, including the empty string,
//! produces a reply.
//!
//! ## Responsibilities by module
//!
//! - `compiled_rules.rs`: validates a rule table and builds the trigger set.
//! - `trigger.rs`: scans a folded utterance and reports every trigger hit.
//! - `responder.rs`: `ResponseEngine`, the public reply selector.
//! - `metrics.rs`: timings for verbose runs.
//!
//! ## Debugging
//!
//! Scan and selection events are emitted at `debug` level under the
//! `aquabot` tracing target.

#[path = "engine/compiled_rules.rs"]
mod compiled_rules;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/responder.rs"]
mod responder;
#[path = "engine/trigger.rs"]
mod trigger;

pub use compiled_rules::IntentMask;
pub use responder::ResponseEngine;
