//! "You might also want" suggestions
//!
//! A fixed, ordered rule list evaluated against snapshots of the purchase
//! history and shopping list plus the current month. Each rule contributes at
//! most one suggestion; the result keeps first-triggered order and never
//! holds the same suggestion twice.

use std::ops::RangeInclusive;

use voice_cart_core::ShoppingListEntry;

/// Inputs every rule sees
#[derive(Debug, Clone, Copy)]
pub struct RecommendationContext<'a> {
    /// Lower-cased names, oldest first
    pub history: &'a [String],
    pub list: &'a [ShoppingListEntry],
    /// 0-indexed month (January = 0)
    pub month: u32,
}

/// Single suggestion rule
pub trait RecommendationRule: Send + Sync {
    /// Rule name for logging
    fn name(&self) -> &'static str;

    /// Suggestion when the rule triggers
    fn suggest(&self, ctx: &RecommendationContext<'_>) -> Option<String>;
}

/// Suggest a companion item once the trigger has been bought before
#[derive(Debug, Clone)]
pub struct PurchasedTogetherRule {
    pub trigger: String,
    pub suggestion: String,
}

impl RecommendationRule for PurchasedTogetherRule {
    fn name(&self) -> &'static str {
        "purchased_together"
    }

    fn suggest(&self, ctx: &RecommendationContext<'_>) -> Option<String> {
        ctx.history
            .iter()
            .any(|name| *name == self.trigger)
            .then(|| self.suggestion.clone())
    }
}

/// Suggest a seasonal item during a range of months
#[derive(Debug, Clone)]
pub struct SeasonalRule {
    pub months: RangeInclusive<u32>,
    pub suggestion: String,
}

impl RecommendationRule for SeasonalRule {
    fn name(&self) -> &'static str {
        "seasonal"
    }

    fn suggest(&self, ctx: &RecommendationContext<'_>) -> Option<String> {
        self.months
            .contains(&ctx.month)
            .then(|| self.suggestion.clone())
    }
}

/// Suggest an alternative to an item already on the list
///
/// The list name must equal the trigger exactly, case included.
#[derive(Debug, Clone)]
pub struct AlternativeRule {
    pub trigger: String,
    pub suggestion: String,
}

impl RecommendationRule for AlternativeRule {
    fn name(&self) -> &'static str {
        "alternative"
    }

    fn suggest(&self, ctx: &RecommendationContext<'_>) -> Option<String> {
        ctx.list
            .iter()
            .any(|entry| entry.name == self.trigger)
            .then(|| self.suggestion.clone())
    }
}

/// Ordered rule evaluator
pub struct RecommendationEngine {
    rules: Vec<Box<dyn RecommendationRule>>,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::with_rules(vec![
            Box::new(PurchasedTogetherRule {
                trigger: "milk".to_string(),
                suggestion: "bread".to_string(),
            }),
            // June through August
            Box::new(SeasonalRule {
                months: 5..=7,
                suggestion: "mango".to_string(),
            }),
            Box::new(AlternativeRule {
                trigger: "milk".to_string(),
                suggestion: "almond milk".to_string(),
            }),
        ])
    }
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: Vec<Box<dyn RecommendationRule>>) -> Self {
        Self { rules }
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Evaluate every rule in order
    pub fn recommend(
        &self,
        history: &[String],
        list: &[ShoppingListEntry],
        month: u32,
    ) -> Vec<String> {
        let ctx = RecommendationContext {
            history,
            list,
            month,
        };

        let mut suggestions: Vec<String> = Vec::new();
        for rule in &self.rules {
            if let Some(suggestion) = rule.suggest(&ctx) {
                if !suggestions.contains(&suggestion) {
                    tracing::trace!(rule = rule.name(), suggestion = %suggestion, "Rule triggered");
                    suggestions.push(suggestion);
                }
            }
        }
        suggestions
    }
}

impl std::fmt::Debug for RecommendationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendationEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

/// Evaluate the standard rule set
pub fn recommend(history: &[String], list: &[ShoppingListEntry], month: u32) -> Vec<String> {
    RecommendationEngine::default().recommend(history, list, month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn history(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_history_rule() {
        assert_eq!(recommend(&history(&["milk"]), &[], 0), vec!["bread"]);
        assert!(recommend(&history(&["almond milk"]), &[], 0).is_empty());
    }

    #[test]
    fn test_seasonal_and_list_rules() {
        let list = vec![ShoppingListEntry::new("milk", 1)];
        assert_eq!(recommend(&[], &list, 6), vec!["mango", "almond milk"]);
    }

    #[test]
    fn test_season_bounds() {
        assert!(recommend(&[], &[], 4).is_empty());
        assert_eq!(recommend(&[], &[], 5), vec!["mango"]);
        assert_eq!(recommend(&[], &[], 7), vec!["mango"]);
        assert!(recommend(&[], &[], 8).is_empty());
    }

    #[test]
    fn test_list_rule_is_exact() {
        let list = vec![ShoppingListEntry::new("Milk", 1)];
        assert!(recommend(&[], &list, 0).is_empty());
    }

    #[test]
    fn test_all_rules_in_order() {
        let list = vec![ShoppingListEntry::new("milk", 1)];
        assert_eq!(
            recommend(&history(&["milk"]), &list, 6),
            vec!["bread", "mango", "almond milk"]
        );
    }

    #[test]
    fn test_duplicate_suggestions_collapse() {
        let engine = RecommendationEngine::with_rules(vec![
            Box::new(SeasonalRule {
                months: 0..=11,
                suggestion: "bread".to_string(),
            }),
            Box::new(PurchasedTogetherRule {
                trigger: "milk".to_string(),
                suggestion: "bread".to_string(),
            }),
        ]);
        assert_eq!(engine.recommend(&history(&["milk"]), &[], 3), vec!["bread"]);
    }

    proptest! {
        #[test]
        fn prop_no_duplicates(
            names in proptest::collection::vec("(milk|bread|soap|mango|almond milk)", 0..8),
            month in 0u32..12,
        ) {
            let list: Vec<_> = names.iter().map(|n| ShoppingListEntry::new(n.clone(), 1)).collect();
            let out = recommend(&names, &list, month);
            let mut seen = std::collections::HashSet::new();
            prop_assert!(out.iter().all(|s| seen.insert(s.clone())));
        }
    }
}
