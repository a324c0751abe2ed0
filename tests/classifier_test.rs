//! Classifier behavior observed from outside the crate: determinism,
//! case folding, rule priority, and the fallback path.

use concierge::{classify, reply_for, Intent};

#[test]
fn test_classify_is_pure_and_case_insensitive() {
    for text in ["HELLO", "hello", "HeLLo there"] {
        assert_eq!(classify(text), Intent::Greeting);
    }
    assert_eq!(classify("I WANT TO START A PROJECT"), Intent::ProjectInquiry);
}

#[test]
fn test_rule_order_encodes_priority() {
    // Scheduling keywords are checked before the generic project ones, so
    // a scheduling request about a project stays a scheduling request.
    assert_eq!(
        classify("can we schedule a meeting about my project"),
        Intent::Scheduling
    );
    // Pricing beats project-inquiry for the same reason.
    assert_eq!(classify("quote for a project"), Intent::Pricing);
}

#[test]
fn test_unmatched_text_falls_back() {
    for text in ["zzz", "¯\\_(ツ)_/¯", "42"] {
        assert_eq!(classify(text), Intent::General);
    }
}

#[test]
fn test_fallback_reply_is_a_real_answer() {
    let reply = reply_for(Intent::General);
    assert!(reply.contains("which aspect"));
}

#[test]
fn test_every_intent_reply_is_stable() {
    // Pure lookup: repeated calls return the identical &'static str.
    for text in ["hello", "portfolio please", "crypto integration"] {
        let intent = classify(text);
        assert_eq!(reply_for(intent), reply_for(intent));
    }
}
