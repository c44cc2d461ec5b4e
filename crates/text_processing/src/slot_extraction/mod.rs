//! Slot Value Extraction for Shopping Commands
//!
//! Rule-based extraction of the command slots from a normalized transcript:
//! - quantity (digits, then spelled-out number words, default 1)
//! - price ceiling ("under [rs] NUMBER")
//! - sort directive ("cheapest")
//! - brand (fixed vocabulary)
//!
//! Each extractor is a read-only scan; they can run in any order.
//!
//! ## Tie-breaks
//!
//! When several number words or brands appear, the winner is the first one in
//! the declared vocabulary order (see [`crate::vocabulary`]), not the first one
//! in the transcript. "add two or one apples" yields quantity 1.
//!
//! ## Static Regex Patterns
//!
//! Patterns are compiled once using `once_cell::sync::Lazy`.

use once_cell::sync::Lazy;
use regex::Regex;
use voice_cart_core::SortOrder;

use crate::normalize::normalize;
use crate::vocabulary::{whole_word, BRANDS, CHEAPEST, NUMBER_WORDS};

// =============================================================================
// STATIC REGEX PATTERNS - Compiled once at program start
// =============================================================================

/// Standalone ASCII digit run
pub(crate) static DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)[0-9]+(?-u:\b)").expect("digit pattern"));

/// "under [rs] NUMBER", number captured in group 1
pub(crate) static PRICE_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)under\s+(?:rs\s*)?([0-9]+(?:\.[0-9]+)?)(?-u:\b)")
        .expect("price pattern")
});

static NUMBER_WORD_PATTERNS: Lazy<Vec<(Regex, u64)>> = Lazy::new(|| {
    NUMBER_WORDS
        .iter()
        .map(|(word, value)| (whole_word(word), *value))
        .collect()
});

static BRAND_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    BRANDS
        .iter()
        .map(|brand| (whole_word(brand), *brand))
        .collect()
});

/// Quantity used when the transcript names none
pub const DEFAULT_QUANTITY: u64 = 1;

// =============================================================================
// SLOT EXTRACTOR
// =============================================================================

/// Slot extractor for shopping transcripts
///
/// All methods expect normalized (lower-cased) input.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotExtractor;

impl SlotExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the requested quantity
    ///
    /// The first digit run wins and is accepted at any magnitude (saturating
    /// at `u64::MAX`). Without digits, the first number word in vocabulary
    /// order wins.
    pub fn extract_quantity(&self, text: &str) -> u64 {
        if let Some(m) = DIGITS.find(text) {
            // Only overflow can fail on a pure digit run
            return m.as_str().parse::<u64>().unwrap_or(u64::MAX);
        }

        NUMBER_WORD_PATTERNS
            .iter()
            .find(|(pattern, _)| pattern.is_match(text))
            .map(|(_, value)| *value)
            .unwrap_or(DEFAULT_QUANTITY)
    }

    /// Extract the price ceiling from "under [rs] NUMBER"
    pub fn extract_price(&self, text: &str) -> Option<f64> {
        let caps = PRICE_PHRASE.captures(text)?;
        let value = caps.get(1)?.as_str().parse::<f64>().ok()?;
        value.is_finite().then_some(value)
    }

    /// Detect the sort directive
    pub fn extract_sort(&self, text: &str) -> Option<SortOrder> {
        text.contains(CHEAPEST).then_some(SortOrder::PriceAsc)
    }

    /// Extract the brand, first vocabulary entry present as a whole word
    pub fn extract_brand(&self, text: &str) -> Option<String> {
        BRAND_PATTERNS
            .iter()
            .find(|(pattern, _)| pattern.is_match(text))
            .map(|(_, brand)| brand.to_string())
    }
}

/// Quantity of a raw transcript
pub fn extract_quantity(transcript: &str) -> u64 {
    SlotExtractor.extract_quantity(&normalize(transcript))
}

/// Price ceiling of a raw transcript
pub fn extract_price(transcript: &str) -> Option<f64> {
    SlotExtractor.extract_price(&normalize(transcript))
}
