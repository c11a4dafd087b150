//! Keyword categorizer for FAQ entries.
//!
//! Categories are inferred, not stored: the combined question and answer text
//! is lowercased and checked against an ordered rule table. The first rule
//! with a matching keyword wins, and [`Category::General`] catches the rest.
//!
//! An entry whose text hits keywords from several rules lands in the earliest
//! one. `"How does RootCoz work?"` is filed under Pricing & Billing because its
//! answer mentions "cost-effective" MVPs, and Pricing is checked before
//! Getting Started. That precedence is kept as-is and pinned by tests.

use std::fmt;

/// One of the five fixed FAQ category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Plans, cost, payment and refunds.
    PricingBilling,
    /// Orientation questions for new visitors.
    GettingStarted,
    /// What the platform does.
    PlatformFeatures,
    /// Geographic reach.
    AvailabilityMarkets,
    /// Fallback when nothing else matches.
    General,
}

impl Category {
    /// Every category in rule priority order, fallback last.
    pub const ALL: [Category; 5] = [
        Category::PricingBilling,
        Category::GettingStarted,
        Category::PlatformFeatures,
        Category::AvailabilityMarkets,
        Category::General,
    ];

    /// Display label, also used as the filter chip text.
    pub fn label(self) -> &'static str {
        match self {
            Category::PricingBilling => "Pricing & Billing",
            Category::GettingStarted => "Getting Started",
            Category::PlatformFeatures => "Platform & Features",
            Category::AvailabilityMarkets => "Availability & Markets",
            Category::General => "General",
        }
    }

    /// Inverse of [`Category::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A priority-ordered predicate: any keyword contained in the text selects
/// `category`.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

impl CategoryRule {
    /// `lowered` must already be lowercase.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

/// Rule table in evaluation order. General has no rule; it is the fallback.
pub const RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::PricingBilling,
        keywords: &["plan", "cost", "payment", "refund", "free"],
    },
    CategoryRule {
        category: Category::GettingStarted,
        keywords: &["what is", "how does", "getting started", "technical background"],
    },
    CategoryRule {
        category: Category::PlatformFeatures,
        keywords: &["feature", "support", "save", "data", "ai"],
    },
    CategoryRule {
        category: Category::AvailabilityMarkets,
        keywords: &["african", "market", "global", "country"],
    },
];

/// Assigns exactly one category to an FAQ entry.
pub fn categorize(question: &str, answer: &str) -> Category {
    let text = format!("{question} {answer}").to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&text))
        .map_or(Category::General, |rule| rule.category)
}
