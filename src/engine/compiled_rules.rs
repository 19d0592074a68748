//! Rule compilation and indexing.
//!
//! This module holds the *static* side of the engine: the structures derived
//! from an ordered rule table once, so that answering an utterance is a single
//! scan.
//!
//! Compilation:
//!
//! 1. **Validate** every rule: at least one trigger, no empty trigger, and
//!    every trigger already lowercase (utterances are case-folded before the
//!    scan, so an uppercase trigger could never match).
//! 2. **Flatten** triggers into one list, rule by rule, trigger by trigger.
//!    The position of a trigger in that list is its pattern id in the
//!    `RegexSet`, and `TriggerRef::rule` points back into `rules`.
//! 3. **Build** a `RegexSet` from the escaped triggers, so each pattern is a
//!    plain literal substring test.
//!
//! ## Invariants
//!
//! - `triggers[i]` describes pattern `i` of `set`. The two must stay aligned.
//! - Patterns are laid out in table order, so the lowest matching pattern id
//!   always belongs to the earliest matching rule.

use crate::{Error, KeywordRule, Result};
use regex::RegexSet;

/// Rule identifier (index into the rule table).
pub(crate) type RuleId = usize;

bitflags::bitflags! {
    /// Intents that had at least one trigger present in a scanned utterance.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct IntentMask: u8 {
        const LOCATION  = 1 << 0;
        const ATM       = 1 << 1;
        const PRICE     = 1 << 2;
        const EMERGENCY = 1 << 3;
        const QUALITY   = 1 << 4;
        const BOOKING   = 1 << 5;
        const GREETING  = 1 << 6;
    }
}

/// Back-reference from a compiled pattern to its rule.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TriggerRef {
    pub rule: RuleId,
    pub trigger: &'static str,
}

/// Validated rule table plus its trigger set.
#[derive(Debug)]
pub(crate) struct CompiledRules {
    pub(crate) rules: Vec<KeywordRule>,
    pub(crate) triggers: Vec<TriggerRef>,
    pub(crate) set: RegexSet,
}

impl CompiledRules {
    /// Validate and compile `rules`, keeping their order.
    pub fn new(rules: Vec<KeywordRule>) -> Result<Self> {
        let mut triggers = Vec::new();

        for (id, rule) in rules.iter().enumerate() {
            validate(rule)?;
            triggers.extend(rule.triggers.iter().map(|&trigger| TriggerRef { rule: id, trigger }));
        }

        let set = RegexSet::new(triggers.iter().map(|t| regex::escape(t.trigger)))?;

        Ok(CompiledRules { rules, triggers, set })
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

fn validate(rule: &KeywordRule) -> Result<()> {
    if rule.triggers.is_empty() {
        return Err(Error::InvalidRule { rule: rule.name, reason: "no triggers".to_string() });
    }

    for trigger in rule.triggers {
        if trigger.is_empty() {
            return Err(Error::InvalidRule { rule: rule.name, reason: "empty trigger".to_string() });
        }
        if trigger.to_lowercase() != *trigger {
            return Err(Error::InvalidRule {
                rule: rule.name,
                reason: format!("trigger '{trigger}' is not lowercase"),
            });
        }
    }

    Ok(())
}
