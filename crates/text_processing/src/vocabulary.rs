//! Fixed vocabularies used by the interpreter
//!
//! Slices are declared priority lists: where two entries could both match a
//! transcript, the one listed first wins, regardless of where the words occur
//! in the transcript.

use regex::Regex;

/// Keywords of the ADD intent (highest priority group)
pub const ADD_KEYWORDS: &[&str] = &["add", "buy", "need", "get"];

/// Keywords of the REMOVE intent
pub const REMOVE_KEYWORDS: &[&str] = &["remove", "delete"];

/// Keywords of the SEARCH intent (lowest priority group)
pub const SEARCH_KEYWORDS: &[&str] = &["find", "search", "cheapest"];

/// Spelled-out quantities, in tie-break order
pub const NUMBER_WORDS: &[(&str, u64)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

/// Recognized brands, in tie-break order
pub const BRANDS: &[&str] = &["colgate", "dove", "amul"];

/// Pricing, quantifier and pronoun filler removed from item names
pub const STOP_WORDS: &[&str] = &[
    "price", "rupees", "rs", "dollars", "dollar", "please", "some", "a", "an", "the", "to",
    "my", "list", "for", "i", "me", "want", "need", "of", "in", "on", "at", "is", "are",
];

/// Literal that turns on ascending price sort
pub const CHEAPEST: &str = "cheapest";

/// Every intent keyword across the three groups
pub fn all_intent_keywords() -> Vec<&'static str> {
    ADD_KEYWORDS
        .iter()
        .chain(REMOVE_KEYWORDS)
        .chain(SEARCH_KEYWORDS)
        .copied()
        .collect()
}

/// ASCII word boundary; accented letters count as separators
pub(crate) const WORD_BOUNDARY: &str = r"(?-u:\b)";

/// Compile `\b(?:w1|w2|...)\b` for a word list
pub(crate) fn whole_word_alternation(words: &[&str]) -> Regex {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("{b}(?:{alternation}){b}", b = WORD_BOUNDARY))
        .expect("word list compiles to a regex")
}

/// Compile `\bword\b`
pub(crate) fn whole_word(word: &str) -> Regex {
    whole_word_alternation(&[word])
}
