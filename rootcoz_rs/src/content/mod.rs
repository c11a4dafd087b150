//! Static content tables.
//!
//! Everything the landing site renders that is not derived state lives here
//! as `const` data. Derived values (FAQ categories and slugs, rotation
//! windows) are computed at load time by the other modules and never stored.

mod faqs;
mod industries;
mod links;
mod people;
mod testimonials;

pub use faqs::FAQS;
pub use industries::INDUSTRIES;
pub use links::{FOOTER_GROUPS, LEGAL_SHORTCUTS, NAV_LINKS, PARTNERS, SOCIAL_LINKS};
pub use people::{BUILDERS, PORTRAITS};
pub use testimonials::TESTIMONIALS;

use crate::env::RandomSource;

/// Questions featured in the landing page teaser, in teaser order.
pub const TEASER_QUESTIONS: &[&str] = &[
    "What kind of support can I expect?",
    "Is there a free trial?",
    "Can I use RootCoz without a technical background?",
    "Can I change plans anytime?",
];

/// A question and its answer, exactly as authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub photo: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub quote: &'static str,
}

impl Testimonial {
    /// Alt text for the author photo.
    pub fn photo_alt(&self) -> String {
        format!("{}, {}", self.name, self.title)
    }
}

/// A venture builder shown in the mentor orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Builder {
    pub image: &'static str,
    pub name: &'static str,
}

impl Builder {
    /// Label shown on the avatar: the first whitespace-separated word.
    pub fn first_name(&self) -> &'static str {
        self.name.split(' ').next().unwrap_or(self.name)
    }

    /// Photos shot on a white background need a light backdrop.
    pub fn has_light_backdrop(&self) -> bool {
        self.name.to_lowercase().contains("kalkidan")
    }
}

/// A card in the "Built for African Founders" portrait row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portrait {
    pub src: &'static str,
    pub alt: &'static str,
    pub background: &'static str,
    pub width_px: u32,
    pub height_px: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartnerLogo {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub name: &'static str,
    pub href: &'static str,
}

/// A titled column of footer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [Link],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    /// SVG path data for a 24x24 viewBox.
    pub icon_path: &'static str,
}

/// In-page anchor for a header nav label (`"FAQs"` -> `"#faqs"`).
pub fn nav_anchor(label: &str) -> String {
    format!("#{}", label.to_lowercase())
}

/// Returns a Fisher-Yates shuffled copy of `items`.
///
/// The mentor orbit calls this once per page load; the order is not persisted.
pub fn shuffled<T: Clone>(items: &[T], rng: &mut dyn RandomSource) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = ((rng.next_unit() * (i + 1) as f64) as usize).min(i);
        out.swap(i, j);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SequenceRandom;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_sizes() {
        assert_eq!(FAQS.len(), 15);
        assert_eq!(TESTIMONIALS.len(), 12);
        assert_eq!(INDUSTRIES.len(), 32);
        assert_eq!(BUILDERS.len(), 5);
        assert_eq!(PARTNERS.len(), 4);
        assert_eq!(FOOTER_GROUPS.len(), 4);
    }

    #[test]
    fn testimonial_ids_follow_table_order() {
        let ids: Vec<u32> = TESTIMONIALS.iter().map(|t| t.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn teaser_questions_exist_in_catalog() {
        for question in TEASER_QUESTIONS {
            assert!(
                FAQS.iter().any(|f| f.question == *question),
                "missing teaser question {question}"
            );
        }
    }

    #[test]
    fn builder_labels() {
        let builder = Builder {
            image: "x.png",
            name: "Kalkidan Tesfaye",
        };
        assert_eq!(builder.first_name(), "Kalkidan");
        assert!(builder.has_light_backdrop());
        assert!(!BUILDERS[0].has_light_backdrop());
        assert_eq!(BUILDERS[0].first_name(), "isidore");
    }

    #[test]
    fn nav_anchor_lowercases() {
        assert_eq!(nav_anchor("FAQs"), "#faqs");
        assert_eq!(nav_anchor("Pricing"), "#pricing");
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SequenceRandom::new(vec![0.9, 0.1, 0.5, 0.3]);
        let mut out = shuffled(BUILDERS, &mut rng);
        assert_eq!(out.len(), BUILDERS.len());
        out.sort_by_key(|b| b.name);
        let mut expected = BUILDERS.to_vec();
        expected.sort_by_key(|b| b.name);
        assert_eq!(out, expected);
    }

    #[test]
    fn shuffle_with_zero_draws_rotates_deterministically() {
        // j is always 0: each step swaps slot i with slot 0.
        let mut rng = SequenceRandom::new(vec![0.0]);
        let out = shuffled(&[1, 2, 3, 4], &mut rng);
        assert_eq!(out, vec![2, 3, 4, 1]);
    }

    #[test]
    fn shuffle_clamps_unit_edge() {
        let mut rng = SequenceRandom::new(vec![1.0]);
        let out = shuffled(&[1, 2, 3], &mut rng);
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn shuffle_of_short_lists_is_identity() {
        let mut rng = SequenceRandom::new(vec![0.7]);
        assert_eq!(shuffled::<u8>(&[], &mut rng), Vec::<u8>::new());
        assert_eq!(shuffled(&[7], &mut rng), vec![7]);
    }
}
