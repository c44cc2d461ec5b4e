//! Intent Classification
//!
//! Assigns one of ADD / REMOVE / SEARCH / UNKNOWN from keyword presence.
//!
//! Keyword groups are tested in a fixed priority order and the first group
//! with a whole-word match wins:
//!
//! | Priority | Intent | Keywords |
//! |---|---|---|
//! | 1 | ADD | add, buy, need, get |
//! | 2 | REMOVE | remove, delete |
//! | 3 | SEARCH | find, search, cheapest |
//!
//! A transcript carrying words from two groups resolves to the higher
//! priority one, so "remove the cheapest item" is a REMOVE.
//!
//! # Example
//!
//! ```
//! use voice_cart_text_processing::classify_intent;
//! use voice_cart_core::Intent;
//!
//! assert_eq!(classify_intent("Remove the cheapest item"), Intent::Remove);
//! assert_eq!(classify_intent("hello there"), Intent::Unknown);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use voice_cart_core::Intent;

use crate::normalize::normalize;
use crate::vocabulary::{whole_word_alternation, ADD_KEYWORDS, REMOVE_KEYWORDS, SEARCH_KEYWORDS};

// Intent detection patterns (order matters - higher priority first)
static INTENT_PATTERNS: Lazy<Vec<(Regex, Intent)>> = Lazy::new(|| {
    vec![
        (whole_word_alternation(ADD_KEYWORDS), Intent::Add),
        (whole_word_alternation(REMOVE_KEYWORDS), Intent::Remove),
        (whole_word_alternation(SEARCH_KEYWORDS), Intent::Search),
    ]
});

/// Keyword-group intent classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify an already normalized transcript
    pub fn classify(&self, normalized: &str) -> Intent {
        INTENT_PATTERNS
            .iter()
            .find(|(pattern, _)| pattern.is_match(normalized))
            .map(|(_, intent)| *intent)
            .unwrap_or(Intent::Unknown)
    }
}

/// Classify a raw transcript (normalizes first)
pub fn classify_intent(transcript: &str) -> Intent {
    IntentClassifier.classify(&normalize(transcript))
}
