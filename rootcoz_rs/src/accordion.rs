//! Expand/collapse state for FAQ lists.
//!
//! The landing teaser uses [`SingleOpen`]: at most one answer visible. The
//! full FAQ page uses [`MultiOpen`], which also mirrors the most recently
//! opened entry into the URL fragment so answers can be deep-linked.

use std::collections::BTreeSet;

use tracing::debug;

use crate::env::FragmentSource;
use crate::faq::{FaqCatalog, FaqItem};

/// Keys that activate a toggle besides a pointer click.
pub fn is_toggle_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Nullable single selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleOpen {
    open: Option<usize>,
}

impl SingleOpen {
    /// Opens `index`, closing any other entry; toggling the open entry closes it.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }
}

/// Set of open entries keyed by catalog index.
///
/// Keys are catalog positions, not positions in the filtered list, so an
/// open answer stays open while the search narrows or widens around it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiOpen {
    open: BTreeSet<usize>,
}

impl MultiOpen {
    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    pub fn open_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.open.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Flips `item` only. Opening pushes its slug as the fragment; closing
    /// clears the fragment when it still points at `item`. Returns whether
    /// the entry is now open.
    pub fn toggle(&mut self, item: &FaqItem, fragment: &dyn FragmentSource) -> bool {
        if self.open.remove(&item.index) {
            if fragment.current().as_deref() == Some(item.id.as_str()) {
                fragment.clear();
            }
            debug!(slug = %item.id, "faq closed");
            false
        } else {
            self.open.insert(item.index);
            fragment.push(&item.id);
            debug!(slug = %item.id, "faq opened");
            true
        }
    }

    /// Opens the entry the current fragment points at, if any, and returns
    /// it so the caller can scroll to it. Unknown fragments are ignored.
    pub fn open_from_fragment<'a>(
        &mut self,
        catalog: &'a FaqCatalog,
        fragment: &dyn FragmentSource,
    ) -> Option<&'a FaqItem> {
        let current = fragment.current()?;
        match catalog.find_by_slug(&current) {
            Some(item) => {
                self.open.insert(item.index);
                debug!(slug = %item.id, "deep link resolved");
                Some(item)
            }
            None => {
                debug!(fragment = %current, "deep link matches no faq");
                None
            }
        }
    }
}
