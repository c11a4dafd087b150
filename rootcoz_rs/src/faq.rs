//! The FAQ catalog: authored entries plus their derived category and slug.

use std::collections::HashSet;

use serde_json::{Value, json};
use tracing::debug;

use crate::categorize::{Category, categorize};
use crate::content::{FAQS, FaqEntry, TEASER_QUESTIONS};
use crate::slug::{fragment_slug, slugify};

/// An FAQ entry with its derived fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqItem {
    /// Position in the catalog. Stable across filtering, so it keys open state.
    pub index: usize,
    pub question: &'static str,
    pub answer: &'static str,
    pub category: Category,
    /// Slug of the question, used as the URL fragment.
    pub id: String,
}

impl FaqItem {
    fn derive(index: usize, entry: &FaqEntry) -> Self {
        Self {
            index,
            question: entry.question,
            answer: entry.answer,
            category: categorize(entry.question, entry.answer),
            id: slugify(entry.question),
        }
    }

    /// DOM id of the entry's container; the deep-link scroll target.
    pub fn element_id(&self) -> String {
        format!("faq-{}", self.id)
    }

    /// Case-insensitive substring match against question or answer.
    /// `needle` must already be lowercase.
    pub fn mentions(&self, needle: &str) -> bool {
        self.question.to_lowercase().contains(needle) || self.answer.to_lowercase().contains(needle)
    }
}

/// Ordered, immutable FAQ list with derived categories and slugs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqCatalog {
    items: Vec<FaqItem>,
}

impl Default for FaqCatalog {
    fn default() -> Self {
        Self::new(FAQS)
    }
}

impl FaqCatalog {
    pub fn new(entries: &[FaqEntry]) -> Self {
        let items = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| FaqItem::derive(index, entry))
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[FaqItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FaqItem> {
        self.items.get(index)
    }

    /// First entry whose slug equals `fragment` (a leading `#` is ignored).
    pub fn find_by_slug(&self, fragment: &str) -> Option<&FaqItem> {
        let slug = fragment_slug(fragment);
        if slug.is_empty() {
            return None;
        }
        self.items.iter().find(|item| item.id == slug)
    }

    pub fn find_by_question(&self, question: &str) -> Option<&FaqItem> {
        self.items.iter().find(|item| item.question == question)
    }

    /// Looks up each question in order. Questions that are not in the
    /// catalog are skipped.
    pub fn select(&self, questions: &[&str]) -> Vec<&FaqItem> {
        questions
            .iter()
            .filter_map(|question| {
                let found = self.find_by_question(question);
                if found.is_none() {
                    debug!(question, "faq question not in catalog, skipping");
                }
                found
            })
            .collect()
    }

    /// The four entries featured on the landing page.
    pub fn teaser(&self) -> Vec<&FaqItem> {
        self.select(TEASER_QUESTIONS)
    }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|item| item.category)
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Slugs that more than one entry normalizes to.
    pub fn duplicate_slugs(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut dups = Vec::new();
        for item in &self.items {
            if !seen.insert(item.id.as_str()) && !dups.contains(&item.id.as_str()) {
                dups.push(item.id.as_str());
            }
        }
        dups
    }

    /// schema.org `FAQPage` JSON-LD for the full FAQ page.
    pub fn structured_data(&self) -> Value {
        let entities: Vec<Value> = self
            .items
            .iter()
            .map(|item| {
                json!({
                    "@type": "Question",
                    "name": item.question,
                    "acceptedAnswer": {
                        "@type": "Answer",
                        "text": item.answer,
                    }
                })
            })
            .collect();

        json!({
            "@context": "https://schema.org",
            "@type": "FAQPage",
            "mainEntity": entities,
        })
    }
}
