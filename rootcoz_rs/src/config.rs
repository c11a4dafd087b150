//! Site configuration.
//!
//! Loaded from the `site.toml` embedded in the landing binary. Every field is
//! optional. The binary falls back to [`SiteConfig::default`] when the
//! document fails to parse or validate.

use std::time::Duration;

use serde::Deserialize;

use crate::env::Breakpoints;
use crate::error::{Error, Result};
use crate::timer::RotationSettings;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `EnvFilter` directive for the console logger.
    pub log_level: String,
    pub industries: IndustriesConfig,
    pub mentors: MentorsConfig,
    pub testimonials: CarouselConfig,
    pub motion: MotionConfig,
    pub viewport: ViewportConfig,
    pub deep_link: DeepLinkConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            industries: IndustriesConfig::default(),
            mentors: MentorsConfig::default(),
            testimonials: CarouselConfig::default(),
            motion: MotionConfig::default(),
            viewport: ViewportConfig::default(),
            deep_link: DeepLinkConfig::default(),
        }
    }
}

/// Industry pills under "Industry Agnostic".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IndustriesConfig {
    pub period_ms: u64,
    pub window: usize,
}

impl Default for IndustriesConfig {
    fn default() -> Self {
        Self {
            period_ms: 4000,
            window: 7,
        }
    }
}

/// Builder avatars in the guidance orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MentorsConfig {
    pub period_ms: u64,
    pub window: usize,
}

impl Default for MentorsConfig {
    fn default() -> Self {
        Self {
            period_ms: 10_000,
            window: 5,
        }
    }
}

/// The testimonial carousel; its window follows the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub period_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { period_ms: 10_000 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Gap between hiding a window and showing the next one.
    pub fade_gap_ms: u64,
    /// Delay before the FAQ page announces its result count.
    pub search_debounce_ms: u64,
    /// Visible fraction at which a section fades in.
    pub reveal_threshold: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            fade_gap_ms: 250,
            search_debounce_ms: 300,
            reveal_threshold: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub mobile_max: f64,
    pub tablet_max: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        let bp = Breakpoints::default();
        Self {
            mobile_max: bp.mobile_max,
            tablet_max: bp.tablet_max,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeepLinkConfig {
    /// Space left above a deep-linked entry for the sticky header.
    pub scroll_offset_px: f64,
    /// Wait for layout before scrolling.
    pub scroll_delay_ms: u64,
}

impl Default for DeepLinkConfig {
    fn default() -> Self {
        Self {
            scroll_offset_px: 100.0,
            scroll_delay_ms: 100,
        }
    }
}

fn invalid(key: &'static str, reason: &str) -> Error {
    Error::InvalidSetting {
        key,
        reason: reason.to_string(),
    }
}

impl SiteConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let sections = [
            (
                "industries.window",
                "industries.period_ms",
                self.industries.window,
                self.industries.period_ms,
            ),
            (
                "mentors.window",
                "mentors.period_ms",
                self.mentors.window,
                self.mentors.period_ms,
            ),
        ];
        for (window_key, period_key, window, period_ms) in sections {
            if window == 0 {
                return Err(invalid(window_key, "must be at least 1"));
            }
            if period_ms == 0 {
                return Err(invalid(period_key, "must be at least 1"));
            }
        }
        if self.testimonials.period_ms == 0 {
            return Err(invalid("testimonials.period_ms", "must be at least 1"));
        }
        let shortest_period = self
            .industries
            .period_ms
            .min(self.mentors.period_ms)
            .min(self.testimonials.period_ms);
        if self.motion.fade_gap_ms >= shortest_period {
            return Err(invalid(
                "motion.fade_gap_ms",
                "must be shorter than every rotation period",
            ));
        }
        let viewport = self.viewport;
        if viewport.mobile_max.is_nan()
            || viewport.tablet_max.is_nan()
            || viewport.mobile_max >= viewport.tablet_max
        {
            return Err(invalid(
                "viewport.mobile_max",
                "must be below viewport.tablet_max",
            ));
        }
        if !(0.0..=1.0).contains(&self.motion.reveal_threshold) {
            return Err(invalid("motion.reveal_threshold", "must be within 0.0..=1.0"));
        }
        let offset = self.deep_link.scroll_offset_px;
        if offset.is_nan() || offset < 0.0 {
            return Err(invalid("deep_link.scroll_offset_px", "must not be negative"));
        }
        Ok(())
    }

    pub fn breakpoints(&self) -> Breakpoints {
        Breakpoints {
            mobile_max: self.viewport.mobile_max,
            tablet_max: self.viewport.tablet_max,
        }
    }

    fn rotation_settings(&self, period_ms: u64, reduced_motion: bool) -> RotationSettings {
        RotationSettings {
            period: Duration::from_millis(period_ms),
            fade_gap: Duration::from_millis(self.motion.fade_gap_ms),
            reduced_motion,
        }
    }

    pub fn industry_settings(&self, reduced_motion: bool) -> RotationSettings {
        self.rotation_settings(self.industries.period_ms, reduced_motion)
    }

    pub fn mentor_settings(&self, reduced_motion: bool) -> RotationSettings {
        self.rotation_settings(self.mentors.period_ms, reduced_motion)
    }

    pub fn testimonial_settings(&self, reduced_motion: bool) -> RotationSettings {
        self.rotation_settings(self.testimonials.period_ms, reduced_motion)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.motion.search_debounce_ms)
    }

    pub fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.deep_link.scroll_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_is_default() {
        let config = SiteConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.industries.window, 7);
        assert_eq!(config.mentors.period_ms, 10_000);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
log_level = "rootcoz=debug"

[industries]
window = 5

[motion]
fade_gap_ms = 400
"#,
        )
        .expect("partial config");
        assert_eq!(config.log_level, "rootcoz=debug");
        assert_eq!(config.industries, IndustriesConfig { period_ms: 4000, window: 5 });
        assert_eq!(config.motion.fade_gap_ms, 400);
        assert_eq!(config.motion.search_debounce_ms, 300);
        assert_eq!(config.industry_settings(false).fade_gap, Duration::from_millis(400));
    }

    #[test]
    fn partial_mentor_section_keeps_mentor_period() {
        let config = SiteConfig::from_toml_str("[mentors]\nwindow = 3\n").expect("mentors");
        assert_eq!(config.mentors, MentorsConfig { period_ms: 10_000, window: 3 });
    }

    #[test]
    fn rejects_zero_window() {
        let err = SiteConfig::from_toml_str("[mentors]\nwindow = 0\n").expect_err("zero window");
        assert!(matches!(err, Error::InvalidSetting { key: "mentors.window", .. }));
    }

    #[test]
    fn rejects_fade_gap_not_shorter_than_period() {
        let err = SiteConfig::from_toml_str("[motion]\nfade_gap_ms = 5000\n")
            .expect_err("fade gap past the industry period");
        assert!(matches!(err, Error::InvalidSetting { key: "motion.fade_gap_ms", .. }));

        let err = SiteConfig::from_toml_str("[testimonials]\nperiod_ms = 250\n")
            .expect_err("period equal to the fade gap");
        assert!(matches!(err, Error::InvalidSetting { key: "motion.fade_gap_ms", .. }));

        assert!(SiteConfig::from_toml_str("[motion]\nfade_gap_ms = 3999\n").is_ok());
    }

    #[test]
    fn rejects_inverted_breakpoints() {
        let err = SiteConfig::from_toml_str("[viewport]\nmobile_max = 1200.0\n")
            .expect_err("inverted breakpoints");
        assert!(matches!(err, Error::InvalidSetting { .. }));
    }

    #[test]
    fn rejects_threshold_out_of_range() {
        assert!(SiteConfig::from_toml_str("[motion]\nreveal_threshold = 1.5\n").is_err());
    }

    #[test]
    fn syntax_error_is_config_error() {
        let err = SiteConfig::from_toml_str("log_level = ").expect_err("bad toml");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn breakpoints_follow_viewport_section() {
        let config = SiteConfig::from_toml_str("[viewport]\nmobile_max = 600.0\ntablet_max = 900.0\n")
            .expect("viewport config");
        assert_eq!(config.breakpoints().cards_per_view(Some(700.0)), 2);
        assert_eq!(config.breakpoints().cards_per_view(Some(950.0)), 3);
    }

    #[test]
    fn reduced_motion_flag_flows_into_settings() {
        let config = SiteConfig::default();
        assert!(config.mentor_settings(true).reduced_motion);
        assert_eq!(config.testimonial_settings(false).period, Duration::from_millis(10_000));
    }
}
