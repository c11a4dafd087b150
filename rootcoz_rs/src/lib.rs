//! # rootcoz
//!
//! Content and behaviour behind the RootCoz landing site, kept free of any
//! browser dependency so it can be tested natively.
//!
//! The `rootcoz-landing` binary renders these types with Leptos and binds
//! the capability traits in [`env`] and [`timer`] to the real window.
//!
//! ## Modules
//!
//! - [`content`] - static tables: FAQs, testimonials, industries, builders, links
//! - [`categorize`] - keyword rules that sort FAQs into categories
//! - [`faq`] - the FAQ catalog with derived categories and slugs
//! - [`filter`] - search box and category chip filtering
//! - [`accordion`] - single- and multi-open expand state, deep links
//! - [`rotation`] / [`timer`] - rotating windows and the timer that drives them
//! - [`env`] - capability traits for motion, viewport, fragment and randomness
//! - [`config`] - `site.toml` settings
//!
//! ## Example
//!
//! ```rust
//! use rootcoz::{CategoryFilter, FaqCatalog, FaqFilter};
//!
//! let catalog = FaqCatalog::default();
//! let hits = FaqFilter::new("trial", CategoryFilter::All).apply(&catalog);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id, "is-there-a-free-trial");
//! ```

pub mod accordion;
pub mod categorize;
pub mod config;
pub mod content;
pub mod env;
pub mod error;
pub mod faq;
pub mod filter;
pub mod motion;
pub mod rotation;
pub mod slug;
pub mod timer;

pub use accordion::{MultiOpen, SingleOpen, is_toggle_key};
pub use categorize::{Category, categorize};
pub use config::SiteConfig;
pub use env::{Breakpoints, FragmentSource, MotionPreference, RandomSource, ViewportSize};
pub use error::{Error, Result};
pub use faq::{FaqCatalog, FaqItem};
pub use filter::{CategoryFilter, FaqFilter, NO_RESULTS, category_chips, result_summary};
pub use motion::Stagger;
pub use rotation::{CarouselKey, Rotation};
pub use slug::slugify;
pub use timer::{ManualTimers, NoTimers, RotationSettings, RotationTimer, Timers};
