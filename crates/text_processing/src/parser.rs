//! Command builder
//!
//! Runs every extractor over one normalized transcript and assembles the
//! results into a [`Command`]. No validation happens here beyond the defaults
//! the extractors already apply.

use voice_cart_core::Command;

use crate::intent::IntentClassifier;
use crate::item_name::ItemNameExtractor;
use crate::normalize::normalize;
use crate::slot_extraction::SlotExtractor;

/// Transcript → [`Command`] interpreter
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandParser {
    intents: IntentClassifier,
    slots: SlotExtractor,
    items: ItemNameExtractor,
}

impl CommandParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret a raw transcript
    pub fn parse(&self, transcript: &str) -> Command {
        let text = normalize(transcript);

        let command = Command {
            intent: self.intents.classify(&text),
            // A spoken "0" still means one unit
            quantity: self.slots.extract_quantity(&text).max(1),
            max_price: self.slots.extract_price(&text),
            sort: self.slots.extract_sort(&text),
            brand: self.slots.extract_brand(&text),
            item: self.items.extract(&text),
        };

        tracing::debug!(
            transcript = %transcript,
            intent = %command.intent,
            item = %command.item,
            quantity = command.quantity,
            brand = ?command.brand,
            max_price = ?command.max_price,
            sort = ?command.sort,
            "Parsed voice command"
        );

        command
    }
}

/// Interpret a raw transcript with the default parser
pub fn parse_command(transcript: &str) -> Command {
    CommandParser::new().parse(transcript)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use voice_cart_core::{Intent, SortOrder};

    #[test]
    fn test_add_with_quantity_and_brand() {
        let cmd = parse_command("add 3 dove soap");
        assert_eq!(cmd.intent, Intent::Add);
        assert_eq!(cmd.quantity, 3);
        assert_eq!(cmd.brand.as_deref(), Some("dove"));
        assert_eq!(cmd.item, "soap");
        assert_eq!(cmd.max_price, None);
        assert_eq!(cmd.sort, None);
    }

    #[test]
    fn test_cheapest_search_with_ceiling() {
        let cmd = parse_command("find cheapest toothpaste under 5");
        assert_eq!(cmd.intent, Intent::Search);
        assert_eq!(cmd.sort, Some(SortOrder::PriceAsc));
        assert_eq!(cmd.max_price, Some(5.0));
        assert_eq!(cmd.item, "toothpaste");
        assert_eq!(cmd.quantity, 5);
    }

    #[test]
    fn test_mixed_case_transcript() {
        let cmd = parse_command("Please Add Two Bananas To My List");
        assert_eq!(cmd.intent, Intent::Add);
        assert_eq!(cmd.quantity, 2);
        assert_eq!(cmd.item, "bananas");
    }

    #[test]
    fn test_remove_keeps_multi_word_item() {
        let cmd = parse_command("remove almond milk");
        assert_eq!(cmd.intent, Intent::Remove);
        assert_eq!(cmd.item, "almond milk");
        assert_eq!(cmd.quantity, 1);
    }

    #[test]
    fn test_remove_with_search_keyword() {
        let cmd = parse_command("remove the cheapest item");
        assert_eq!(cmd.intent, Intent::Remove);
        assert_eq!(cmd.sort, Some(SortOrder::PriceAsc));
        assert_eq!(cmd.item, "item");
    }

    #[test]
    fn test_zero_quantity_becomes_one() {
        let cmd = parse_command("add 0 eggs");
        assert_eq!(cmd.quantity, 1);
        assert_eq!(cmd.item, "eggs");
    }

    #[test]
    fn test_empty_transcript() {
        let cmd = parse_command("");
        assert_eq!(cmd, Command::default());
    }

    #[test]
    fn test_keyword_only_transcript_has_no_item() {
        let cmd = parse_command("add");
        assert_eq!(cmd.intent, Intent::Add);
        assert!(!cmd.has_item());
    }

    #[test]
    fn test_unknown_keeps_residual_text() {
        let cmd = parse_command("hello there");
        assert_eq!(cmd.intent, Intent::Unknown);
        assert_eq!(cmd.item, "hello there");
    }

    proptest! {
        #[test]
        fn parse_command_is_total(text in ".*") {
            let cmd = parse_command(&text);
            prop_assert!(cmd.quantity >= 1);
            prop_assert_eq!(cmd.item.as_str(), cmd.item.trim());
            prop_assert!(!cmd.item.contains("  "));
        }

        #[test]
        fn spoken_quantity_is_at_least_one(
            n in 0u64..1000,
            item in prop::sample::select(vec!["milk", "soap", "rice", "eggs"]),
        ) {
            let cmd = parse_command(&format!("add {} {}", n, item));
            prop_assert_eq!(cmd.quantity, n.max(1));
            prop_assert_eq!(cmd.item.as_str(), item);
        }
    }
}
