//! Intent Classifier
//!
//! Maps free text to a [`Reply`]. Category selection is a pure function of the
//! utterance: lower-case it, walk [`CATEGORY_TABLE`] in order, take the first
//! row with a trigger substring present. Nothing else feeds into it, including
//! conversation history.
//!
//! Randomness only touches cosmetic fields (confidence) and the choice among
//! the five fallback replies. It is injected so tests can seed it.

use crate::actions::response_actions;
use crate::intent::{match_category, IntentCategory, FALLBACK_REPLIES};
use crate::pacing::ThinkingDelay;
use crate::reply::Reply;
use crate::suggestions::smart_suggestions;
use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Lower bound of the cosmetic confidence range
pub const CONFIDENCE_MIN: f64 = 0.80;
/// Upper bound (exclusive)
pub const CONFIDENCE_MAX: f64 = 1.00;

/// Category for an utterance, without building a reply
pub fn classify_category(utterance: &str) -> IntentCategory {
    let lower = utterance.to_lowercase();
    match_category(&lower)
        .map(|rule| rule.category)
        .unwrap_or(IntentCategory::Fallback)
}

pub struct Classifier<R: Rng = StdRng> {
    rng: R,
    thinking: ThinkingDelay,
}

impl Classifier<StdRng> {
    /// Entropy-seeded classifier
    pub fn new(thinking: ThinkingDelay) -> Self {
        Self::with_rng(StdRng::from_entropy(), thinking)
    }

    /// Deterministic classifier for tests and `--seed`
    pub fn seeded(seed: u64, thinking: ThinkingDelay) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), thinking)
    }
}

impl Default for Classifier<StdRng> {
    fn default() -> Self {
        Self::new(ThinkingDelay::default())
    }
}

impl<R: Rng> Classifier<R> {
    pub fn with_rng(rng: R, thinking: ThinkingDelay) -> Self {
        Self { rng, thinking }
    }

    /// Classify an utterance. Total: every string yields a reply, empty and
    /// whitespace-only input lands in fallback.
    pub fn classify(&mut self, utterance: &str) -> Reply {
        let lower = utterance.to_lowercase();

        let (category, text) = match match_category(&lower) {
            Some(rule) => (rule.category, rule.reply.to_string()),
            None => {
                let idx = self.rng.gen_range(0..FALLBACK_REPLIES.len());
                (IntentCategory::Fallback, FALLBACK_REPLIES[idx].to_string())
            }
        };

        let confidence = self.rng.gen_range(CONFIDENCE_MIN..CONFIDENCE_MAX);
        let processing_time = self.thinking.for_text(&text);

        debug!(
            category = category.as_str(),
            confidence,
            "classified utterance ({} chars)",
            utterance.chars().count()
        );

        Reply {
            category,
            text,
            actions: response_actions(utterance),
            confidence,
            processing_time,
            suggestions: smart_suggestions(utterance),
            timestamp: Local::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::CATEGORY_TABLE;
    use std::time::Duration;

    fn classifier() -> Classifier {
        Classifier::seeded(7, ThinkingDelay::default())
    }

    #[test]
    fn test_literal_cases() {
        let mut c = classifier();
        assert_eq!(c.classify("hello").category, IntentCategory::Greeting);
        assert_eq!(c.classify("run a security scan").category, IntentCategory::Security);

        let reply = c.classify("asdkjasd");
        assert_eq!(reply.category, IntentCategory::Fallback);
        assert!(FALLBACK_REPLIES.contains(&reply.text.as_str()));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify_category("FIREWALL rules"), IntentCategory::Security);
        assert_eq!(classify_category("Good Evening"), IntentCategory::Greeting);
    }

    #[test]
    fn test_priority_on_overlapping_triggers() {
        // "performance" is optimization, even though analytics could apply
        assert_eq!(classify_category("performance dashboard"), IntentCategory::Optimization);
        // "network" sends anything mentioning it to status
        assert_eq!(classify_category("network security"), IntentCategory::Status);
        // "learn" hits automation before education
        assert_eq!(classify_category("learn routing"), IntentCategory::Automation);
        // "hi" is a substring of "this"
        assert_eq!(classify_category("is this secure"), IntentCategory::Greeting);
    }

    #[test]
    fn test_each_category_reachable_by_own_trigger() {
        // A lone trigger may be shadowed by an earlier row, never a later one
        for rule in CATEGORY_TABLE {
            for trigger in rule.triggers {
                let got = classify_category(trigger);
                assert!(
                    got.priority() <= rule.category.priority(),
                    "'{}' landed in {} after {}",
                    trigger,
                    got,
                    rule.category
                );
            }
        }
        assert_eq!(classify_category("dhcp"), IntentCategory::DnsDhcp);
        assert_eq!(classify_category("zigbee"), IntentCategory::Iot);
        assert_eq!(classify_category("traceroute"), IntentCategory::Diagnostics);
        assert_eq!(classify_category("round robin"), IntentCategory::LoadBalancing);
    }

    #[test]
    fn test_empty_input_is_fallback() {
        let mut c = classifier();
        assert!(c.classify("").is_fallback());
        assert!(c.classify("   ").is_fallback());
    }

    #[test]
    fn test_confidence_range() {
        let mut c = classifier();
        for _ in 0..200 {
            let reply = c.classify("hello");
            assert!(reply.confidence >= CONFIDENCE_MIN && reply.confidence < CONFIDENCE_MAX);
        }
    }

    #[test]
    fn test_category_deterministic_across_calls() {
        let mut c = classifier();
        let first = c.classify("show me device inventory");
        let second = c.classify("show me device inventory");
        assert_eq!(first.category, second.category);
        assert_eq!(first.text, second.text);
    }

    #[test]
    fn test_seeded_fallback_reproducible() {
        let a = Classifier::seeded(42, ThinkingDelay::none()).classify("zzz");
        let b = Classifier::seeded(42, ThinkingDelay::none()).classify("zzz");
        assert_eq!(a.text, b.text);
        assert_eq!(a.confidence, b.confidence);
    }

    #[test]
    fn test_reply_always_has_actions_and_suggestions() {
        let mut c = classifier();
        for input in ["hello", "backup now", "qqq", "", "what is dns"] {
            let reply = c.classify(input);
            assert!(!reply.text.is_empty());
            assert!(!reply.actions.is_empty());
            assert!(!reply.suggestions.is_empty());
        }
    }

    #[test]
    fn test_processing_time_follows_reply_length() {
        let mut c = Classifier::seeded(1, ThinkingDelay::new(1, 10_000));
        let reply = c.classify("thanks");
        assert_eq!(
            reply.processing_time,
            Duration::from_millis(reply.text.chars().count() as u64)
        );
    }

    #[test]
    fn test_action_lookup_independent_of_reply_category() {
        let mut c = classifier();
        let reply = c.classify("check the sensor status");
        assert_eq!(reply.category, IntentCategory::Status);
        assert_eq!(reply.actions[0].action_id, "device_list");
    }
}
