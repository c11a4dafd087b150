//! Staggered entrance delays.

/// Per-list stagger: each item waits `step_ms` longer than the one before,
/// up to `cap_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub step_ms: u32,
    pub cap_ms: Option<u32>,
}

impl Stagger {
    /// FAQ page entries.
    pub const FAQ_LIST: Stagger = Stagger {
        step_ms: 50,
        cap_ms: Some(500),
    };
    /// Testimonial cards.
    pub const TESTIMONIALS: Stagger = Stagger {
        step_ms: 100,
        cap_ms: None,
    };
    /// Industry pills.
    pub const PILLS: Stagger = Stagger {
        step_ms: 50,
        cap_ms: None,
    };
    /// Mentor avatars.
    pub const ORBIT: Stagger = Stagger {
        step_ms: 40,
        cap_ms: None,
    };

    /// Delay for the item at `index`; always 0 under reduced motion.
    pub fn delay_ms(self, index: usize, reduced_motion: bool) -> u32 {
        if reduced_motion {
            return 0;
        }
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        let delay = index.saturating_mul(self.step_ms);
        match self.cap_ms {
            Some(cap) => delay.min(cap),
            None => delay,
        }
    }

    /// Inline `transition-delay` / `animation-delay` value.
    pub fn css(self, index: usize, reduced_motion: bool) -> String {
        format!("{}ms", self.delay_ms(index, reduced_motion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faq_list_delay_is_capped() {
        assert_eq!(Stagger::FAQ_LIST.delay_ms(0, false), 0);
        assert_eq!(Stagger::FAQ_LIST.delay_ms(3, false), 150);
        assert_eq!(Stagger::FAQ_LIST.delay_ms(10, false), 500);
        assert_eq!(Stagger::FAQ_LIST.delay_ms(14, false), 500);
    }

    #[test]
    fn uncapped_lists_grow_linearly() {
        assert_eq!(Stagger::TESTIMONIALS.delay_ms(2, false), 200);
        assert_eq!(Stagger::PILLS.delay_ms(6, false), 300);
        assert_eq!(Stagger::ORBIT.delay_ms(4, false), 160);
    }

    #[test]
    fn reduced_motion_has_no_delay() {
        for stagger in [Stagger::FAQ_LIST, Stagger::TESTIMONIALS, Stagger::PILLS, Stagger::ORBIT] {
            assert_eq!(stagger.delay_ms(9, true), 0);
        }
        assert_eq!(Stagger::ORBIT.css(3, true), "0ms");
        assert_eq!(Stagger::ORBIT.css(3, false), "120ms");
    }
}
