//! Search and category filtering for the FAQ page.
//!
//! The visible list is a pure function of (query, category, catalog): both
//! predicates must hold and catalog order is preserved. It is recomputed on
//! every keystroke; the page's debounce only delays the result-count
//! announcement, never the list.

use std::fmt;

use tracing::debug;

use crate::categorize::Category;
use crate::faq::{FaqCatalog, FaqItem};

/// Message shown in place of the list when nothing matches.
pub const NO_RESULTS: &str = "No FAQs found matching your search criteria.";

/// Category chip selection. `All` is the sentinel that disables the predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        if label == Self::ALL_LABEL {
            return Some(CategoryFilter::All);
        }
        Category::from_label(label).map(CategoryFilter::Only)
    }

    pub fn admits(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Chip row for the FAQ page: `All`, then each category present in the
/// catalog in first-appearance order.
pub fn category_chips(catalog: &FaqCatalog) -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(catalog.categories().into_iter().map(CategoryFilter::Only))
        .collect()
}

/// Current search box text and chip selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqFilter {
    pub query: String,
    pub category: CategoryFilter,
}

impl FaqFilter {
    pub fn new(query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    fn needle(&self) -> String {
        self.query.to_lowercase()
    }

    pub fn matches(&self, item: &FaqItem) -> bool {
        let needle = self.needle();
        self.matches_lowered(item, &needle)
    }

    fn matches_lowered(&self, item: &FaqItem, needle: &str) -> bool {
        let matches_search = needle.is_empty() || item.mentions(needle);
        matches_search && self.category.admits(item.category)
    }

    /// Entries passing both predicates, in catalog order.
    pub fn apply<'a>(&self, catalog: &'a FaqCatalog) -> Vec<&'a FaqItem> {
        let needle = self.needle();
        let visible: Vec<&FaqItem> = catalog
            .items()
            .iter()
            .filter(|item| self.matches_lowered(item, &needle))
            .collect();
        debug!(
            query = %self.query,
            category = %self.category,
            visible = visible.len(),
            "faq filter applied"
        );
        visible
    }

    /// The filter to switch to so that `target` renders: `None` when it is
    /// already visible, otherwise the empty filter (no query, `All`).
    /// Deep links use this before scrolling to their entry.
    pub fn revealing(&self, target: &FaqItem) -> Option<FaqFilter> {
        if self.matches(target) {
            None
        } else {
            debug!(slug = %target.id, "filter reset to reveal deep link");
            Some(FaqFilter::default())
        }
    }

    /// Catalog indices of [`FaqFilter::apply`]'s result.
    pub fn visible_indices(&self, catalog: &FaqCatalog) -> Vec<usize> {
        self.apply(catalog).into_iter().map(|item| item.index).collect()
    }
}

/// Text for the result-count live region.
pub fn result_summary(visible: usize) -> String {
    match visible {
        0 => NO_RESULTS.to_string(),
        1 => "1 question found".to_string(),
        n => format!("{n} questions found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FaqEntry;
    use pretty_assertions::assert_eq;

    const SAMPLE: &[FaqEntry] = &[
        FaqEntry {
            question: "What is it?",
            answer: "A planner for founders.",
        },
        FaqEntry {
            question: "Do you take payment by card?",
            answer: "Yes.",
        },
        FaqEntry {
            question: "Where do you operate?",
            answer: "Across African markets.",
        },
    ];

    #[test]
    fn empty_filter_shows_everything_in_order() {
        let catalog = FaqCatalog::new(SAMPLE);
        assert_eq!(FaqFilter::default().visible_indices(&catalog), vec![0, 1, 2]);
    }

    #[test]
    fn query_is_case_insensitive_over_question_and_answer() {
        let catalog = FaqCatalog::new(SAMPLE);
        let by_answer = FaqFilter::new("AFRICAN", CategoryFilter::All);
        assert_eq!(by_answer.visible_indices(&catalog), vec![2]);
        let by_question = FaqFilter::new("Card", CategoryFilter::All);
        assert_eq!(by_question.visible_indices(&catalog), vec![1]);
    }

    #[test]
    fn query_and_category_combine_with_and() {
        let catalog = FaqCatalog::new(SAMPLE);
        // "What is it?" mentions "plan" in its answer, so it is Pricing too.
        let pricing = CategoryFilter::Only(Category::PricingBilling);
        assert_eq!(
            FaqFilter::new("", pricing).visible_indices(&catalog),
            vec![0, 1]
        );
        assert_eq!(
            FaqFilter::new("card", pricing).visible_indices(&catalog),
            vec![1]
        );
        assert!(
            FaqFilter::new("african", pricing)
                .apply(&catalog)
                .is_empty()
        );
    }

    #[test]
    fn revealing_keeps_a_filter_that_shows_the_target() {
        let catalog = FaqCatalog::new(SAMPLE);
        let target = catalog.get(1).expect("card entry");
        let filter = FaqFilter::new("card", CategoryFilter::Only(Category::PricingBilling));
        assert_eq!(filter.revealing(target), None);
    }

    #[test]
    fn revealing_resets_a_filter_that_hides_the_target() {
        let catalog = FaqCatalog::new(SAMPLE);
        let target = catalog.get(2).expect("markets entry");
        for filter in [
            FaqFilter::new("card", CategoryFilter::All),
            FaqFilter::new("", CategoryFilter::Only(Category::PricingBilling)),
        ] {
            let widened = filter.revealing(target).expect("target hidden");
            assert_eq!(widened, FaqFilter::default());
            assert!(widened.visible_indices(&catalog).contains(&target.index));
        }
    }

    #[test]
    fn filtering_is_repeatable() {
        let catalog = FaqCatalog::new(SAMPLE);
        let filter = FaqFilter::new("you", CategoryFilter::All);
        assert_eq!(filter.apply(&catalog), filter.apply(&catalog));
    }

    #[test]
    fn chips_start_with_all() {
        let catalog = FaqCatalog::new(SAMPLE);
        assert_eq!(
            category_chips(&catalog),
            vec![
                CategoryFilter::All,
                CategoryFilter::Only(Category::PricingBilling),
                CategoryFilter::Only(Category::AvailabilityMarkets),
            ]
        );
    }

    #[test]
    fn chip_labels_round_trip() {
        assert_eq!(CategoryFilter::from_label("All"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_label("General"),
            Some(CategoryFilter::Only(Category::General))
        );
        assert_eq!(CategoryFilter::from_label("Everything"), None);
        assert_eq!(CategoryFilter::All.to_string(), "All");
    }

    #[test]
    fn summary_text() {
        assert_eq!(result_summary(0), NO_RESULTS);
        assert_eq!(result_summary(1), "1 question found");
        assert_eq!(result_summary(7), "7 questions found");
    }
}
