//! Residual item name extraction
//!
//! The item name is whatever is left of the normalized transcript once every
//! recognized token is stripped. Stripping runs as an ordered list of stages:
//!
//! 1. `intent_keywords` - keywords of all three intent groups
//! 2. `price_phrase` - the whole "under [rs] NUMBER" phrase
//! 3. `stop_words` - pricing, quantifier and pronoun filler
//! 4. `brands` - brand vocabulary
//! 5. `digits` - standalone digit runs
//! 6. `number_words` - one .. ten
//!
//! followed by whitespace collapsing and trimming.
//!
//! The order is load-bearing. The price phrase goes before the stop words so
//! only a phrase the price extractor itself recognized is removed ("under the
//! 5" must not collapse into "under 5"), and digits go after the price phrase
//! so a price is removed whole instead of leaving "under ." behind. All
//! patterns are word-boundary anchored, so "add" never eats into "address".
//!
//! A number word is always removed, even when it is part of the item itself
//! ("add one plus phone" leaves "plus phone").

use once_cell::sync::Lazy;
use regex::Regex;

use crate::slot_extraction::{DIGITS, PRICE_PHRASE};
use crate::vocabulary::{all_intent_keywords, whole_word_alternation, BRANDS, NUMBER_WORDS, STOP_WORDS};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// One removal step of the pipeline
#[derive(Debug)]
pub struct StripStage {
    pub name: &'static str,
    pattern: Regex,
}

impl StripStage {
    fn new(name: &'static str, pattern: Regex) -> Self {
        Self { name, pattern }
    }

    /// Remove every match of this stage
    pub fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, "").into_owned()
    }
}

static STAGES: Lazy<Vec<StripStage>> = Lazy::new(|| {
    let number_words: Vec<&str> = NUMBER_WORDS.iter().map(|(word, _)| *word).collect();
    vec![
        StripStage::new("intent_keywords", whole_word_alternation(&all_intent_keywords())),
        StripStage::new("price_phrase", Regex::clone(&PRICE_PHRASE)),
        StripStage::new("stop_words", whole_word_alternation(STOP_WORDS)),
        StripStage::new("brands", whole_word_alternation(BRANDS)),
        StripStage::new("digits", Regex::clone(&DIGITS)),
        StripStage::new("number_words", whole_word_alternation(&number_words)),
    ]
});

/// Residual item name extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemNameExtractor;

impl ItemNameExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Stages in application order
    pub fn stages(&self) -> &'static [StripStage] {
        &STAGES
    }

    /// Extract the item name from a normalized transcript
    pub fn extract(&self, text: &str) -> String {
        let stripped = self
            .stages()
            .iter()
            .fold(text.to_string(), |acc, stage| stage.apply(&acc));

        let item = WHITESPACE.replace_all(&stripped, " ").trim().to_string();
        tracing::trace!(input = %text, item = %item, "Extracted item name");
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(name: &str) -> &'static StripStage {
        ItemNameExtractor::new()
            .stages()
            .iter()
            .find(|s| s.name == name)
            .unwrap()
    }

    #[test]
    fn test_stage_order() {
        let names: Vec<_> = ItemNameExtractor::new().stages().iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec!["intent_keywords", "price_phrase", "stop_words", "brands", "digits", "number_words"]
        );
    }

    #[test]
    fn test_intent_keyword_stage() {
        let s = stage("intent_keywords");
        assert_eq!(s.apply("add milk to my address"), " milk to my address");
        assert_eq!(s.apply("find cheapest soap"), "  soap");
    }

    #[test]
    fn test_price_phrase_stage() {
        let s = stage("price_phrase");
        assert_eq!(s.apply("soap under rs 5.50 please"), "soap  please");
        assert_eq!(s.apply("soap under 5"), "soap ");
        assert_eq!(s.apply("soap under budget"), "soap under budget");
    }

    #[test]
    fn test_stop_word_stage() {
        let s = stage("stop_words");
        assert_eq!(s.apply("i want some bread"), "   bread");
        assert_eq!(s.apply("island"), "island");
    }

    #[test]
    fn test_brand_stage() {
        let s = stage("brands");
        assert_eq!(s.apply("dove soap"), " soap");
        assert_eq!(s.apply("doves"), "doves");
    }

    #[test]
    fn test_digit_and_number_word_stages() {
        assert_eq!(stage("digits").apply("3 eggs 12"), " eggs ");
        assert_eq!(stage("digits").apply("b12 vitamins"), "b12 vitamins");
        assert_eq!(stage("number_words").apply("three eggs"), " eggs");
        assert_eq!(stage("number_words").apply("someone"), "someone");
    }

    #[test]
    fn test_price_phrase_runs_before_stop_words() {
        let extractor = ItemNameExtractor::new();
        assert_eq!(extractor.extract("find soap under the 5"), "soap under");

        // Stripping filler first would turn "under the 5" into a price phrase
        let wrong_order = stage("price_phrase").apply(&stage("stop_words").apply("soap under the 5"));
        assert!(!wrong_order.contains("under"));
    }

    #[test]
    fn test_price_phrase_runs_before_digits() {
        let extractor = ItemNameExtractor::new();
        assert_eq!(extractor.extract("find soap under rs 5.50"), "soap");

        // Stripping digits first would break the decimal apart
        let wrong_order = stage("price_phrase").apply(&stage("digits").apply("soap under 5.50"));
        assert_eq!(wrong_order.trim(), "soap under .");
    }

    #[test]
    fn test_full_pipeline() {
        let extractor = ItemNameExtractor::new();
        assert_eq!(extractor.extract("add 3 dove soap"), "soap");
        assert_eq!(extractor.extract("find cheapest toothpaste under 5"), "toothpaste");
        assert_eq!(extractor.extract("please add two bananas to my list"), "bananas");
        assert_eq!(extractor.extract("remove the almond milk"), "almond milk");
        assert_eq!(extractor.extract("add one plus phone"), "plus phone");
        assert_eq!(extractor.extract("add"), "");
        assert_eq!(extractor.extract(""), "");
    }
}
