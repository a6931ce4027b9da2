use crate::domain::diet::entities::Topic;

/// Trigger substrings mapped to the topic they select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub topic: Topic,
    pub triggers: &'static [&'static str],
}

/// Evaluated top to bottom, first match wins.
pub const DEFAULT_RULES: &[KeywordRule] = &[
    KeywordRule {
        topic: Topic::MealSuggestions,
        triggers: &["meal", "eat", "food", "recipe"],
    },
    KeywordRule {
        topic: Topic::FoodsToAvoid,
        triggers: &["avoid", "bad", "harmful"],
    },
    KeywordRule {
        topic: Topic::VitaminD3K2,
        triggers: &["vitamin d", "vitamin k", "winter"],
    },
    KeywordRule {
        topic: Topic::RedMeatBenefits,
        triggers: &["benefit", "why", "good"],
    },
    KeywordRule {
        topic: Topic::DietExplanation,
        triggers: &["explain", "what is", "tell me"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Topic(Topic),
    /// No rule matched; the message goes to the free-form responder.
    ComplexQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingDecision {
    pub intent: Intent,
    pub trigger: Option<&'static str>,
}

/// Stateless keyword router over a read-only rule table.
///
/// Matching is plain substring containment on the lowercased message, so
/// "goodbye" selects the benefits rule through "good".
#[derive(Debug, Clone, Copy)]
pub struct IntentRouter {
    rules: &'static [KeywordRule],
}

impl Default for IntentRouter {
    fn default() -> Self {
        Self::new(DEFAULT_RULES)
    }
}

impl IntentRouter {
    pub fn new(rules: &'static [KeywordRule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [KeywordRule] {
        self.rules
    }

    pub fn route(&self, message: &str) -> RoutingDecision {
        let message = message.to_lowercase();

        self.rules
            .iter()
            .find_map(|rule| {
                rule.triggers
                    .iter()
                    .find(|trigger| message.contains(*trigger))
                    .map(|trigger| RoutingDecision {
                        intent: Intent::Topic(rule.topic),
                        trigger: Some(*trigger),
                    })
            })
            .unwrap_or(RoutingDecision {
                intent: Intent::ComplexQuery,
                trigger: None,
            })
    }
}
