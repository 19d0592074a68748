//! Canonical chat rule table.
//!
//! Order is precedence: location, ATM, price, emergency, quality, booking,
//! greeting. An utterance that mentions both "help" and a price gets the
//! price reply.
//!
//! Triggers are plain lowercase substrings, so short ones match inside longer
//! words ("hi" in "this", "rate" in "separate"). That is the contract.

use crate::{Intent, KeywordRule};

pub fn rule_location() -> KeywordRule {
    keyword_rule! {
        name: "location",
        intent: Intent::Location,
        triggers: ["near me", "location", "find"],
        reply: "I found 12 water sources within 2km of your location! The nearest is AquaSupply Tanker at 0.8km \
(₹200/1000L, Available). Would you like directions or contact details?",
    }
}

pub fn rule_atm() -> KeywordRule {
    keyword_rule! {
        name: "atm",
        intent: Intent::Atm,
        triggers: ["atm", "dispenser"],
        reply: "There are 5 Water ATMs nearby! The closest is at Station Road (₹1/L, 24/7 available). Smart Water \
ATM at Mall Plaza has the best rates at ₹0.50/L. Need specific locations?",
    }
}

pub fn rule_price() -> KeywordRule {
    keyword_rule! {
        name: "price",
        intent: Intent::Price,
        triggers: ["price", "cost", "rate"],
        reply: "Current water prices in your area: Tankers: ₹180-₹220/1000L, ATMs: ₹0.50-₹1.20/L. Blue Drop \
Services has the best tanker rates at ₹180/1000L. Want to see all suppliers?",
    }
}

pub fn rule_emergency() -> KeywordRule {
    keyword_rule! {
        name: "emergency",
        intent: Intent::Emergency,
        triggers: ["emergency", "urgent", "help"],
        reply: "For emergency water supply, call our 24/7 hotline: 1800-911-911. I can also connect you with the \
nearest available supplier right now. Crystal Clear Tankers is 1.2km away and available immediately!",
    }
}

pub fn rule_quality() -> KeywordRule {
    keyword_rule! {
        name: "quality",
        intent: Intent::Quality,
        triggers: ["quality", "safe", "pure"],
        reply: "All our registered suppliers meet BIS standards for drinking water. Water ATMs use RO+UV \
filtration. For quality reports, suppliers with ⭐⭐⭐⭐⭐ ratings are verified. Need quality certificates?",
    }
}

pub fn rule_booking() -> KeywordRule {
    keyword_rule! {
        name: "booking",
        intent: Intent::Booking,
        triggers: ["booking", "order", "schedule"],
        reply: "You can directly call suppliers to book water delivery. AquaSupply: +91-98765-43210 (Available \
now), Blue Drop: +91-98765-43212 (2hr delivery). Should I dial one for you?",
    }
}

pub fn rule_greeting() -> KeywordRule {
    keyword_rule! {
        name: "greeting",
        intent: Intent::Greeting,
        triggers: ["hi", "hello", "hey"],
        reply: "Hello! I'm here to help you find water sources quickly. You can ask me about nearby suppliers, \
ATM locations, prices, or water quality. What do you need help with?",
    }
}

pub fn get() -> Vec<KeywordRule> {
    vec![
        rule_location(),
        rule_atm(),
        rule_price(),
        rule_emergency(),
        rule_quality(),
        rule_booking(),
        rule_greeting(),
    ]
}
