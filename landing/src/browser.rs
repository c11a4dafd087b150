//! Window-backed implementations of the `rootcoz` capability traits, plus
//! the few imperative DOM helpers the views need.
//!
//! Every accessor tolerates a missing `window` and answers with the
//! no-browser default instead.

use std::cell::RefCell;
use std::time::Duration;

use leptos::prelude::{IntervalHandle, TimeoutHandle, set_interval_with_handle, set_timeout_with_handle};
use rootcoz::{FragmentSource, MotionPreference, RandomSource, Timers, ViewportSize};
use tracing::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::{HtmlImageElement, ScrollBehavior, ScrollToOptions};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// `matchMedia("(prefers-reduced-motion: reduce)")`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserMotion;

impl MotionPreference for BrowserMotion {
    fn prefers_reduced_motion(&self) -> bool {
        web_sys::window()
            .and_then(|window| window.match_media(REDUCED_MOTION_QUERY).ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }
}

/// `window.innerWidth`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

impl ViewportSize for BrowserViewport {
    fn width(&self) -> Option<f64> {
        web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|width| width.as_f64())
    }
}

/// `location.hash`, written through `history.pushState` so that opening an
/// answer adds a history entry without a `hashchange` round trip.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFragment;

impl BrowserFragment {
    fn push_url(url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let pushed = window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(url)));
        if let Err(e) = pushed {
            warn!(url, error = ?e, "history.pushState failed");
        }
    }
}

impl FragmentSource for BrowserFragment {
    fn current(&self) -> Option<String> {
        let hash = web_sys::window()?.location().hash().ok()?;
        let slug = hash.trim_start_matches('#');
        if slug.is_empty() {
            None
        } else {
            Some(slug.to_string())
        }
    }

    fn push(&self, slug: &str) {
        Self::push_url(&format!("#{slug}"));
    }

    fn clear(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let path = location.pathname().unwrap_or_else(|_| "/".to_string());
        let search = location.search().unwrap_or_default();
        Self::push_url(&format!("{path}{search}"));
    }
}

/// `Math.random()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

#[derive(Debug, Clone, Copy)]
pub enum BrowserTimer {
    Interval(IntervalHandle),
    Timeout(TimeoutHandle),
}

/// `setInterval` / `setTimeout` through Leptos' handle helpers.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

impl Timers for BrowserTimers {
    type Handle = BrowserTimer;

    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Option<BrowserTimer> {
        let tick = RefCell::new(tick);
        let scheduled = set_interval_with_handle(
            move || {
                let mut tick = tick.borrow_mut();
                (*tick)();
            },
            period,
        );
        match scheduled {
            Ok(handle) => Some(BrowserTimer::Interval(handle)),
            Err(e) => {
                warn!(error = ?e, "setInterval failed");
                None
            }
        }
    }

    fn after(&self, delay: Duration, f: Box<dyn FnOnce()>) -> Option<BrowserTimer> {
        match set_timeout_with_handle(f, delay) {
            Ok(handle) => Some(BrowserTimer::Timeout(handle)),
            Err(e) => {
                warn!(error = ?e, "setTimeout failed");
                None
            }
        }
    }

    fn cancel(&self, handle: BrowserTimer) {
        match handle {
            BrowserTimer::Interval(handle) => handle.clear(),
            BrowserTimer::Timeout(handle) => handle.clear(),
        }
    }
}

fn smooth_scroll_to(window: &web_sys::Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smoothly scrolls so the element with `id` sits `offset` pixels below
/// the top of the viewport. Returns false when the element is not rendered.
pub fn scroll_to_element(id: &str, offset: f64) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(element) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
        debug!(id, "scroll target not in the document");
        return false;
    };
    let top = element.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0);
    smooth_scroll_to(&window, top - offset);
    true
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        smooth_scroll_to(&window, 0.0);
    }
}

/// Warms the HTTP cache for an image that is about to be shown.
pub fn preload_image(src: &str) {
    match HtmlImageElement::new() {
        Ok(image) => image.set_src(src),
        Err(e) => debug!(src, error = ?e, "image preload unavailable"),
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
