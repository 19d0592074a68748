//! Trigger scanning.
//!
//! Case-folds the utterance and runs it once through the compiled `RegexSet`.
//! The scan reports *every* trigger present, not just the winner; selection
//! happens in `responder.rs`. Reporting all hits is what lets verbose runs
//! show shadowed rules.
//!
//! Case folding uses `str::to_lowercase` (full Unicode), so triggers are
//! compared against the same lowercase form the rule table is validated
//! against.

use super::compiled_rules::{CompiledRules, IntentMask, RuleId};
use crate::Intent;

/// One trigger found in the folded utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TriggerHit {
    pub rule: RuleId,
    pub rule_name: &'static str,
    pub intent: Intent,
    pub trigger: &'static str,
}

/// Result of scanning one utterance against a compiled rule table.
#[derive(Debug, Clone)]
pub(crate) struct TriggerInfo {
    pub folded: String,
    /// Hits in table order (rule order, then trigger order within a rule).
    pub hits: Vec<TriggerHit>,
    pub intents: IntentMask,
}

impl TriggerInfo {
    pub fn scan(utterance: &str, compiled: &CompiledRules) -> Self {
        let folded = utterance.to_lowercase();

        let hits: Vec<TriggerHit> = compiled
            .set
            .matches(&folded)
            .iter()
            .filter_map(|pattern| compiled.triggers.get(pattern))
            .filter_map(|t| {
                let rule = compiled.rules.get(t.rule)?;
                Some(TriggerHit { rule: t.rule, rule_name: rule.name, intent: rule.intent, trigger: t.trigger })
            })
            .collect();

        let intents = hits.iter().fold(IntentMask::empty(), |mask, hit| mask | hit.intent.mask());

        TriggerInfo { folded, hits, intents }
    }

    /// The earliest hit in table order, if any.
    pub fn first(&self) -> Option<&TriggerHit> {
        self.hits.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiled() -> CompiledRules {
        CompiledRules::new(vec![
            keyword_rule! { name: "atm", intent: Intent::Atm, triggers: ["atm", "dispenser"], reply: "A" },
            keyword_rule! { name: "price", intent: Intent::Price, triggers: ["price", "rate"], reply: "P" },
        ])
        .unwrap()
    }

    #[test]
    fn scan_folds_case_and_reports_all_hits() {
        let info = TriggerInfo::scan("ATM Rate and PRICE", &compiled());

        assert_eq!(info.folded, "atm rate and price");
        let triggers: Vec<&str> = info.hits.iter().map(|h| h.trigger).collect();
        assert_eq!(triggers, vec!["atm", "price", "rate"]);
        assert_eq!(info.intents, IntentMask::ATM | IntentMask::PRICE);
        assert_eq!(info.first().map(|h| h.rule_name), Some("atm"));
    }

    #[test]
    fn scan_of_empty_input_has_no_hits() {
        let info = TriggerInfo::scan("", &compiled());
        assert!(info.hits.is_empty());
        assert!(info.intents.is_empty());
        assert!(info.first().is_none());
    }

    #[test]
    fn triggers_match_inside_words() {
        // Plain substring semantics: "separate" contains "rate".
        let info = TriggerInfo::scan("separate bottles", &compiled());
        assert_eq!(info.first().map(|h| h.intent), Some(Intent::Price));
    }
}
