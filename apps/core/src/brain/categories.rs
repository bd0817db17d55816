//! Category matching over an ordered keyword rule table.
//!
//! Rules are evaluated top to bottom and the first one that fires wins.
//! The order is a priority policy: greetings are checked first, identity and
//! crisis-adjacent topics early, broad emotional words (e.g. "mal") late.
//! Keywords are plain substrings of the normalized text, no word boundaries.

use std::fmt;

use super::normalizer::normalize;

/// Tone of a relationship topic, decided after the relational rule matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationalTone {
    Conflict,
    Breakup,
    Neutral,
}

/// Response category selected for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Greeting,
    Identity,
    Somatic,
    Grief,
    Depression,
    Relational(RelationalTone),
    Anxiety,
    Sadness,
    Fatigue,
    Anger,
    Work,
    /// Default bucket: nothing matched
    Listening,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Category {
    /// Every category with a template, default bucket last
    pub const ALL: [Category; 14] = [
        Category::Greeting,
        Category::Identity,
        Category::Somatic,
        Category::Grief,
        Category::Depression,
        Category::Relational(RelationalTone::Conflict),
        Category::Relational(RelationalTone::Breakup),
        Category::Relational(RelationalTone::Neutral),
        Category::Anxiety,
        Category::Sadness,
        Category::Fatigue,
        Category::Anger,
        Category::Work,
        Category::Listening,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Greeting => "greeting",
            Category::Identity => "identity",
            Category::Somatic => "somatic",
            Category::Grief => "grief",
            Category::Depression => "depression",
            Category::Relational(RelationalTone::Conflict) => "relational_conflict",
            Category::Relational(RelationalTone::Breakup) => "relational_breakup",
            Category::Relational(RelationalTone::Neutral) => "relational",
            Category::Anxiety => "anxiety",
            Category::Sadness => "sadness",
            Category::Fatigue => "fatigue",
            Category::Anger => "anger",
            Category::Work => "work",
            Category::Listening => "default",
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Category::Listening)
    }
}

/// A keyword predicate over normalized text
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// At least one keyword is present
    Any(&'static [&'static str]),
    /// One keyword of each set is present
    Both(&'static [&'static str], &'static [&'static str]),
}

impl Trigger {
    /// Returns the keyword that fired, if any
    fn fire(&self, text: &str) -> Option<&'static str> {
        match self {
            Trigger::Any(keywords) => first_present(keywords, text),
            Trigger::Both(first, second) => {
                let hit = first_present(first, text)?;
                first_present(second, text).map(|_| hit)
            }
        }
    }
}

fn first_present(keywords: &[&'static str], text: &str) -> Option<&'static str> {
    keywords.iter().copied().find(|kw| text.contains(kw))
}

/// A nested sub-rule of the relational topic
#[derive(Debug, Clone, Copy)]
pub struct ToneRule {
    pub tone: RelationalTone,
    pub keywords: &'static [&'static str],
}

/// What a matching rule resolves to
#[derive(Debug, Clone, Copy)]
pub enum Resolution {
    Fixed(Category),
    /// Inspect the same text again; no sub-rule hit means `Neutral`
    Relational(&'static [ToneRule]),
}

/// One entry of the priority table
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub name: &'static str,
    pub triggers: &'static [Trigger],
    pub resolution: Resolution,
}

impl CategoryRule {
    fn resolve(&self, text: &str) -> Category {
        match self.resolution {
            Resolution::Fixed(category) => category,
            Resolution::Relational(tones) => tones
                .iter()
                .find(|rule| first_present(rule.keywords, text).is_some())
                .map(|rule| Category::Relational(rule.tone))
                .unwrap_or(Category::Relational(RelationalTone::Neutral)),
        }
    }
}

const RELATIONAL_TONES: &[ToneRule] = &[
    ToneRule {
        tone: RelationalTone::Conflict,
        keywords: &["disput", "conflit", "engueul", "fache", "probleme", "crise"],
    },
    ToneRule {
        tone: RelationalTone::Breakup,
        keywords: &["rupture", "quitte", "separ", "fini"],
    },
];

/// The priority table, highest priority first
pub const DEFAULT_RULES: &[CategoryRule] = &[
    CategoryRule {
        name: "greeting",
        triggers: &[Trigger::Any(&["bonjour", "salut", "hello", "coucou", "hey"])],
        resolution: Resolution::Fixed(Category::Greeting),
    },
    CategoryRule {
        name: "identity",
        triggers: &[Trigger::Any(&[
            "gay",
            "lesbienne",
            "bi",
            "trans",
            "lgbt",
            "homo",
            "coming out",
        ])],
        resolution: Resolution::Fixed(Category::Identity),
    },
    CategoryRule {
        name: "somatic",
        triggers: &[Trigger::Any(&[
            "nausee",
            "ventre",
            "tete",
            "tremble",
            "coeur",
            "palpitation",
            "respir",
            "etouffe",
        ])],
        resolution: Resolution::Fixed(Category::Somatic),
    },
    CategoryRule {
        name: "grief",
        triggers: &[
            Trigger::Any(&["mort", "decede"]),
            Trigger::Both(
                &["perdu"],
                &["proche", "parent", "ami", "pere", "mere", "grand"],
            ),
        ],
        resolution: Resolution::Fixed(Category::Grief),
    },
    CategoryRule {
        name: "depression",
        triggers: &[Trigger::Any(&[
            "deprim",
            "depression",
            "plus envie",
            "quoi bon",
            "vide",
            "noir",
            "sens",
        ])],
        resolution: Resolution::Fixed(Category::Depression),
    },
    CategoryRule {
        name: "relational",
        triggers: &[Trigger::Any(&[
            "copine", "copain", "ami", "conjoint", "mari", "femme", "couple", "relation",
        ])],
        resolution: Resolution::Relational(RELATIONAL_TONES),
    },
    CategoryRule {
        name: "anxiety",
        triggers: &[Trigger::Any(&[
            "stress", "anxieux", "angoisse", "panique", "peur", "inquiet",
        ])],
        resolution: Resolution::Fixed(Category::Anxiety),
    },
    CategoryRule {
        name: "sadness",
        triggers: &[Trigger::Any(&["triste", "seul", "pleur", "malheur", "mal"])],
        resolution: Resolution::Fixed(Category::Sadness),
    },
    CategoryRule {
        name: "fatigue",
        triggers: &[Trigger::Any(&["fatigu", "epuis", "dormir", "creve", "hs"])],
        resolution: Resolution::Fixed(Category::Fatigue),
    },
    CategoryRule {
        name: "anger",
        triggers: &[Trigger::Any(&[
            "colere", "enerv", "frustr", "rage", "agac", "furi",
        ])],
        resolution: Resolution::Fixed(Category::Anger),
    },
    CategoryRule {
        name: "work",
        triggers: &[Trigger::Any(&[
            "travail", "boulot", "patron", "collegue", "bureau", "job",
        ])],
        resolution: Resolution::Fixed(Category::Work),
    },
];

/// Result of category matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub category: Category,
    /// Name of the rule that fired (None for the default bucket)
    pub rule: Option<&'static str>,
    /// Keyword that made the rule fire
    pub matched_keyword: Option<&'static str>,
}

impl MatchResult {
    fn unmatched() -> Self {
        Self {
            category: Category::Listening,
            rule: None,
            matched_keyword: None,
        }
    }
}

/// First-match-wins matcher over an ordered rule table
#[derive(Debug, Clone)]
pub struct CategoryMatcher {
    rules: Vec<CategoryRule>,
}

impl Default for CategoryMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryMatcher {
    /// Matcher over the built-in priority table
    pub fn new() -> Self {
        Self::with_rules(DEFAULT_RULES.to_vec())
    }

    /// Matcher over a custom table, evaluated in the given order
    pub fn with_rules(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Match already-normalized text
    pub fn match_normalized(&self, text: &str) -> MatchResult {
        if text.trim().is_empty() {
            return MatchResult::unmatched();
        }

        for rule in &self.rules {
            if let Some(keyword) = rule.triggers.iter().find_map(|t| t.fire(text)) {
                return MatchResult {
                    category: rule.resolve(text),
                    rule: Some(rule.name),
                    matched_keyword: Some(keyword),
                };
            }
        }

        MatchResult::unmatched()
    }

    /// Normalize raw text, then match it
    pub fn classify(&self, raw: &str) -> MatchResult {
        self.match_normalized(&normalize(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_rule_wins() {
        let matcher = CategoryMatcher::new();

        // "ventre" (somatic) outranks "mal" (sadness)
        let result = matcher.classify("J'ai mal au ventre");
        assert_eq!(result.category, Category::Somatic);
        assert_eq!(result.rule, Some("somatic"));
        assert_eq!(result.matched_keyword, Some("ventre"));
    }

    #[test]
    fn test_grief_needs_both_sets_for_perdu() {
        let matcher = CategoryMatcher::new();

        assert_eq!(matcher.classify("J'ai perdu mon père").category, Category::Grief);
        assert_eq!(matcher.classify("Mon chat est mort").category, Category::Grief);
        assert_eq!(
            matcher.classify("J'ai perdu mes clés").category,
            Category::Listening
        );
    }

    #[test]
    fn test_relational_tones() {
        let matcher = CategoryMatcher::new();

        assert_eq!(
            matcher.classify("Dispute dans mon couple").category,
            Category::Relational(RelationalTone::Conflict)
        );
        assert_eq!(
            matcher.classify("Rupture dans mon couple").category,
            Category::Relational(RelationalTone::Breakup)
        );
        assert_eq!(
            matcher.classify("Je pense à mon couple").category,
            Category::Relational(RelationalTone::Neutral)
        );
    }

    #[test]
    fn test_conflict_checked_before_breakup() {
        let matcher = CategoryMatcher::new();

        let result = matcher.classify("couple en crise, on parle de rupture");
        assert_eq!(result.category, Category::Relational(RelationalTone::Conflict));
    }

    #[test]
    fn test_empty_is_default() {
        let matcher = CategoryMatcher::new();

        assert_eq!(matcher.classify("").category, Category::Listening);
        assert_eq!(matcher.classify("   ").category, Category::Listening);
        assert_eq!(matcher.classify("").rule, None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::Listening.label(), "default");
        assert_eq!(
            Category::Relational(RelationalTone::Neutral).to_string(),
            "relational"
        );
        assert!(Category::Listening.is_default());
        assert!(!Category::Work.is_default());
    }
}
