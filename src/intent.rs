//! Keyword-based intent classification.
//!
//! A deliberately simple scheme: lower-case the utterance, then walk an
//! ordered rule table and return the intent of the first rule with any
//! substring hit. The ordering is a priority scheme: "schedule a project
//! call" is scheduling, not a project inquiry, because the scheduling rule
//! comes first. No rule matching at all falls back to [`Intent::General`].

use serde::{Deserialize, Serialize};

/// The fixed set of visitor intents the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Portfolio,
    Contact,
    Scheduling,
    Skills,
    Pricing,
    /// Starts the lead-intake flow when no other task is active.
    ProjectInquiry,
    Thanks,
    WebDev,
    Design,
    AiMl,
    Blockchain,
    Timeline,
    Process,
    /// Fallback when no keyword rule matches.
    General,
}

/// Ordered keyword rules, first match wins. Substring matching, not
/// word-boundary matching.
const RULES: &[(&[&str], Intent)] = &[
    (&["hello", "hi", "hey"], Intent::Greeting),
    (&["portfolio", "work", "projects"], Intent::Portfolio),
    (&["contact", "hire", "email"], Intent::Contact),
    (&["schedule", "appointment", "call", "meeting"], Intent::Scheduling),
    (&["skill", "experience", "expertise"], Intent::Skills),
    (&["price", "cost", "rate", "quote"], Intent::Pricing),
    (&["project", "need", "looking for", "help with"], Intent::ProjectInquiry),
    (&["thank"], Intent::Thanks),
    (&["web", "website", "app"], Intent::WebDev),
    (&["design", "graphic", "logo"], Intent::Design),
    (&["ai", "machine learning", "artificial intelligence"], Intent::AiMl),
    (&["blockchain", "crypto", "web3"], Intent::Blockchain),
    (&["timeline", "deadline", "how long"], Intent::Timeline),
    (&["process", "how do you work", "workflow"], Intent::Process),
];

/// Classify a visitor utterance. Pure and total: the same text always
/// yields the same intent, and unmatched text yields [`Intent::General`].
pub fn classify(text: &str) -> Intent {
    let lower = text.to_lowercase();

    for (keywords, intent) in RULES {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            tracing::debug!(?intent, "classified utterance");
            return *intent;
        }
    }

    tracing::debug!("no rule matched, falling back to general inquiry");
    Intent::General
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_rule_classifies() {
        let cases = vec![
            ("hello there", Intent::Greeting),
            ("show me the portfolio", Intent::Portfolio),
            ("how can I contact you", Intent::Contact),
            ("can we schedule a meeting", Intent::Scheduling),
            ("what skills do you have", Intent::Skills),
            ("what does it cost", Intent::Pricing),
            ("I want to start a project", Intent::ProjectInquiry),
            ("thank you so much", Intent::Thanks),
            ("I want a website", Intent::WebDev),
            ("do you do logo design", Intent::Design),
            ("machine learning services", Intent::AiMl),
            ("crypto integration", Intent::Blockchain),
            ("what's your typical timeline", Intent::Timeline),
            ("tell me about your process", Intent::Process),
        ];

        for (text, expected) in cases {
            assert_eq!(classify(text), expected, "for input {:?}", text);
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("HELLO"), classify("hello"));
        assert_eq!(classify("Show Me The PORTFOLIO"), Intent::Portfolio);
    }

    #[test]
    fn test_first_rule_wins() {
        // Scheduling is checked before the generic project keywords.
        assert_eq!(classify("schedule a call about my project"), Intent::Scheduling);
        // Greeting outranks everything that follows it.
        assert_eq!(classify("hi, what's the price"), Intent::Greeting);
    }

    #[test]
    fn test_substring_semantics() {
        // Substring matching means "hi" matches inside other words.
        assert_eq!(classify("this one"), Intent::Greeting);
        // "blockchain" contains "ai", and the ai rule is checked first, so
        // the blockchain rule is only reachable through "crypto".
        assert_eq!(classify("blockchain"), Intent::AiMl);
        // "workflow" contains "work", which portfolio claims first.
        assert_eq!(classify("workflow"), Intent::Portfolio);
    }

    #[test]
    fn test_fallback_is_general() {
        assert_eq!(classify("xyzzy"), Intent::General);
        assert_eq!(classify(""), Intent::General);
    }

    #[test]
    fn test_deterministic() {
        for _ in 0..3 {
            assert_eq!(classify("I want to start a project"), Intent::ProjectInquiry);
        }
    }
}
