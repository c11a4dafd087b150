//! Capability providers for the browser environment.
//!
//! Views never read `matchMedia`, `innerWidth`, `location.hash` or
//! `Math.random` directly. They go through these traits, which the landing
//! binary binds to the real window and tests bind to the in-memory
//! implementations below. Every trait has a sensible answer when there is no
//! browsing context at all (pre-render, native tests): motion enabled, unknown
//! width, no fragment.

use std::cell::RefCell;

/// Source of the user's reduced-motion preference.
pub trait MotionPreference {
    fn prefers_reduced_motion(&self) -> bool;
}

/// Source of the current viewport width in CSS pixels.
pub trait ViewportSize {
    /// `None` when the width cannot be read.
    fn width(&self) -> Option<f64>;
}

/// Read/write access to the URL fragment used for FAQ deep links.
pub trait FragmentSource {
    /// Current fragment without the leading `#`, `None` when empty.
    fn current(&self) -> Option<String>;
    /// Navigate to `#<slug>`, adding a history entry.
    fn push(&self, slug: &str);
    /// Drop the fragment, keeping the path.
    fn clear(&self);
}

/// Uniform random numbers in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Viewport widths at which the testimonial carousel changes density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    /// Widths below this show one card.
    pub mobile_max: f64,
    /// Widths below this (and at least `mobile_max`) show two cards.
    pub tablet_max: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max: 768.0,
            tablet_max: 1024.0,
        }
    }
}

impl Breakpoints {
    /// Cards per carousel page: 1 below `mobile_max`, 2 below `tablet_max`,
    /// otherwise 3. An unknown width renders the desktop layout.
    pub fn cards_per_view(&self, width: Option<f64>) -> usize {
        match width {
            Some(w) if w < self.mobile_max => 1,
            Some(w) if w < self.tablet_max => 2,
            _ => 3,
        }
    }
}

/// Fixed motion preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticMotion(pub bool);

impl MotionPreference for StaticMotion {
    fn prefers_reduced_motion(&self) -> bool {
        self.0
    }
}

/// Fixed viewport width.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedViewport(pub Option<f64>);

impl ViewportSize for FixedViewport {
    fn width(&self) -> Option<f64> {
        self.0
    }
}

/// In-memory URL fragment that records every navigation.
#[derive(Debug, Default)]
pub struct MemoryFragment {
    current: RefCell<Option<String>>,
    history: RefCell<Vec<Option<String>>>,
}

impl MemoryFragment {
    /// Starts at `#<slug>` as if the page had been opened from a deep link.
    pub fn at(slug: &str) -> Self {
        let fragment = Self::default();
        *fragment.current.borrow_mut() = Some(slug.to_string());
        fragment
    }

    /// Every `push`/`clear` in order; `None` marks a clear.
    pub fn history(&self) -> Vec<Option<String>> {
        self.history.borrow().clone()
    }
}

impl FragmentSource for MemoryFragment {
    fn current(&self) -> Option<String> {
        self.current.borrow().clone()
    }

    fn push(&self, slug: &str) {
        *self.current.borrow_mut() = Some(slug.to_string());
        self.history.borrow_mut().push(Some(slug.to_string()));
    }

    fn clear(&self) {
        *self.current.borrow_mut() = None;
        self.history.borrow_mut().push(None);
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    draws: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, cursor: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_per_view_breakpoints() {
        let bp = Breakpoints::default();
        assert_eq!(bp.cards_per_view(Some(375.0)), 1);
        assert_eq!(bp.cards_per_view(Some(767.9)), 1);
        assert_eq!(bp.cards_per_view(Some(768.0)), 2);
        assert_eq!(bp.cards_per_view(Some(1023.0)), 2);
        assert_eq!(bp.cards_per_view(Some(1024.0)), 3);
        assert_eq!(bp.cards_per_view(Some(1920.0)), 3);
    }

    #[test]
    fn unknown_width_is_desktop() {
        assert_eq!(Breakpoints::default().cards_per_view(None), 3);
        assert_eq!(
            Breakpoints::default().cards_per_view(FixedViewport::default().width()),
            3
        );
    }

    #[test]
    fn default_motion_is_enabled() {
        assert!(!StaticMotion::default().prefers_reduced_motion());
        assert!(StaticMotion(true).prefers_reduced_motion());
    }

    #[test]
    fn memory_fragment_records_navigation() {
        let fragment = MemoryFragment::default();
        assert_eq!(fragment.current(), None);

        fragment.push("is-there-a-free-trial");
        assert_eq!(fragment.current().as_deref(), Some("is-there-a-free-trial"));

        fragment.clear();
        assert_eq!(fragment.current(), None);
        assert_eq!(
            fragment.history(),
            vec![Some("is-there-a-free-trial".to_string()), None]
        );
    }

    #[test]
    fn memory_fragment_can_start_deep_linked() {
        let fragment = MemoryFragment::at("do-you-offer-refunds");
        assert_eq!(fragment.current().as_deref(), Some("do-you-offer-refunds"));
        assert!(fragment.history().is_empty());
    }

    #[test]
    fn sequence_random_cycles() {
        let mut rng = SequenceRandom::new(vec![0.25, 0.75]);
        assert_eq!(rng.next_unit(), 0.25);
        assert_eq!(rng.next_unit(), 0.75);
        assert_eq!(rng.next_unit(), 0.25);
        assert_eq!(SequenceRandom::new(vec![]).next_unit(), 0.0);
    }
}
