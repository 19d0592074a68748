use crate::rules::{FALLBACK_REPLY, QUICK_RESPONSES, chat};
use crate::{Intent, ResponseEngine, respond, respond_verbose};

fn reply_for(intent: Intent) -> &'static str {
    chat::get().into_iter().find(|r| r.intent == intent).map_or(FALLBACK_REPLY, |r| r.reply)
}

#[test]
fn chat_examples_matching() {
    // Array of (expected_intent, utterance)
    let cases: Vec<(Intent, &str)> = vec![
        (Intent::Emergency, "Emergency water supply"),
        (Intent::Emergency, "this is URGENT"),
        (Intent::Emergency, "please help"),
        (Intent::Location, "Find water near me"),
        (Intent::Location, "what is my location"),
        (Intent::Atm, "Where is the nearest dispenser"),
        (Intent::Atm, "Which ATM has the best prices?"),
        (Intent::Price, "Water tanker prices"),
        (Intent::Price, "how much does it cost"),
        (Intent::Quality, "Is the water safe to drink?"),
        (Intent::Quality, "PURE water"),
        (Intent::Booking, "Can I schedule a delivery?"),
        (Intent::Booking, "place an order"),
        (Intent::Greeting, "hello"),
        (Intent::Greeting, "Hey there"),
        (Intent::Fallback, ""),
        (Intent::Fallback, "xyzzy"),
        (Intent::Fallback, "   "),
    ];

    for (intent, utterance) in cases {
        assert_eq!(respond(utterance), reply_for(intent), "utterance: {utterance:?}");
        assert_eq!(respond_verbose(utterance).intent, intent, "utterance: {utterance:?}");
    }
}

#[test]
fn price_takes_precedence_over_emergency() {
    let dual = "emergency! what is the price of a tanker?";
    let verbose = respond_verbose(dual);

    assert_eq!(respond(dual), reply_for(Intent::Price));
    let intents: Vec<Intent> = verbose.details.candidates.iter().map(|c| c.intent).collect();
    assert_eq!(intents, vec![Intent::Price, Intent::Emergency]);
}

#[test]
fn emergency_precedes_quality_booking_and_greeting() {
    let utterances =
        ["emergency", "is it safe? emergency", "emergency order", "hello, emergency", "urgent quality check"];
    for utterance in utterances {
        assert_eq!(respond(utterance), reply_for(Intent::Emergency), "utterance: {utterance:?}");
    }
}

#[test]
fn help_does_not_shadow_earlier_rules() {
    // Array of (expected_intent, utterance)
    let cases = [
        (Intent::Location, "Can you help me find water near me?"),
        (Intent::Location, "EMERGENCY near me"),
        (Intent::Atm, "urgent: which ATM is closest?"),
        (Intent::Atm, "emergency atm"),
        (Intent::Price, "I need help with tanker prices"),
        (Intent::Price, "emergency price"),
    ];
    for (intent, utterance) in cases {
        assert_eq!(respond_verbose(utterance).intent, intent, "utterance: {utterance:?}");
    }
}

#[test]
fn atm_takes_precedence_over_price() {
    let verbose = respond_verbose("Which ATM has the best prices?");
    assert_eq!(verbose.intent, Intent::Atm);
    assert_eq!(verbose.details.candidates.len(), 3); // atm, price, greeting ("which")
}

#[test]
fn earliest_rule_wins_for_atm_location_price_question() {
    // "locations" carries the location trigger, which precedes both ATM and price.
    let verbose = respond_verbose("What are your ATM locations and prices?");
    assert_eq!(verbose.intent, Intent::Location);

    let intents: Vec<Intent> = verbose.details.candidates.iter().map(|c| c.intent).collect();
    assert_eq!(intents, vec![Intent::Location, Intent::Atm, Intent::Price]);
}

#[test]
fn respond_is_case_insensitive() {
    assert_eq!(respond("HELLO"), respond("hello"));
    assert_eq!(respond("Dispenser"), respond("dISPENSER"));
}

#[test]
fn empty_and_unknown_input_fall_back() {
    assert_eq!(respond(""), FALLBACK_REPLY);
    assert_eq!(respond("xyzzy"), FALLBACK_REPLY);
}

#[test]
fn short_triggers_match_inside_words() {
    assert_eq!(respond("this"), reply_for(Intent::Greeting));
    assert_eq!(respond("separate bottles"), reply_for(Intent::Price));
}

#[test]
fn quick_responses_resolve_to_expected_intents() {
    let expected = [Intent::Location, Intent::Location, Intent::Price, Intent::Emergency];
    for (prompt, intent) in QUICK_RESPONSES.iter().zip(expected) {
        assert_eq!(respond_verbose(prompt).intent, intent, "prompt: {prompt:?}");
    }
}

#[test]
fn canonical_table_order_and_triggers() {
    let table: Vec<(&str, &[&str])> = chat::get().iter().map(|r| (r.name, r.triggers)).collect();
    let expected: Vec<(&str, &[&str])> = vec![
        ("location", &["near me", "location", "find"][..]),
        ("atm", &["atm", "dispenser"][..]),
        ("price", &["price", "cost", "rate"][..]),
        ("emergency", &["emergency", "urgent", "help"][..]),
        ("quality", &["quality", "safe", "pure"][..]),
        ("booking", &["booking", "order", "schedule"][..]),
        ("greeting", &["hi", "hello", "hey"][..]),
    ];
    assert_eq!(table, expected);
}

#[test]
fn canonical_table_compiles() {
    let engine = ResponseEngine::new(chat::get()).unwrap();
    assert_eq!(engine.rules().len(), 7);
    assert_eq!(engine.fallback(), FALLBACK_REPLY);
}
