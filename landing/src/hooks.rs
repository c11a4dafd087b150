//! Reactive glue between the `rootcoz` state machines and the DOM.
//!
//! Everything started here is torn down in `on_cleanup`, so leaving a route
//! stops its timers, observers and window listeners.

use std::time::Duration;

use leptos::ev;
use leptos::html::ElementType;
use leptos::prelude::*;
use rootcoz::{Breakpoints, MotionPreference, Rotation, RotationSettings, RotationTimer, SiteConfig, ViewportSize};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::browser::{BrowserMotion, BrowserTimers, BrowserViewport};

pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

/// Read once per mount; a change of OS setting applies on the next visit.
pub fn use_reduced_motion() -> bool {
    BrowserMotion.prefers_reduced_motion()
}

/// A running [`RotationTimer`] and the signal mirroring its state.
#[derive(Clone, Copy)]
pub struct RotationHandle {
    pub state: ReadSignal<Rotation>,
    timer: StoredValue<RotationTimer<BrowserTimers>, LocalStorage>,
}

impl RotationHandle {
    pub fn start(&self) {
        self.timer.with_value(|timer| timer.start());
    }

    pub fn stop(&self) {
        self.timer.with_value(|timer| timer.stop());
    }

    pub fn advance(&self) {
        self.timer.with_value(|timer| timer.advance());
    }

    pub fn retreat(&self) {
        self.timer.with_value(|timer| timer.retreat());
    }

    pub fn go_to_page(&self, page: usize) {
        self.timer.with_value(|timer| timer.go_to_page(page));
    }

    pub fn set_window(&self, window: usize) {
        self.timer.with_value(|timer| {
            if let Err(e) = timer.set_window(window) {
                warn!(error = %e, window, "ignoring carousel window");
            }
        });
    }
}

/// Starts a rotation over `len` items for the lifetime of the calling
/// component. `None` (logged) when the list or window is empty.
pub fn use_rotation(
    name: &'static str,
    len: usize,
    window: usize,
    settings: RotationSettings,
) -> Option<RotationHandle> {
    let rotation = match Rotation::new(len, window) {
        Ok(rotation) => rotation,
        Err(e) => {
            warn!(rotation = name, error = %e, "rotation disabled");
            return None;
        }
    };
    let (state, set_state) = signal(rotation);
    let timer = RotationTimer::new(name, BrowserTimers, rotation, settings);
    timer.on_change(move |rotation| set_state.set(rotation));
    timer.start();

    let timer = StoredValue::new_local(timer);
    on_cleanup(move || {
        timer.try_with_value(|timer| timer.stop());
    });
    Some(RotationHandle { state, timer })
}

/// Tracks whether `target` intersects the viewport by at least
/// `threshold`. Starts false, so content fades in once observed.
pub fn use_reveal<E>(target: NodeRef<E>, threshold: f64) -> ReadSignal<bool>
where
    E: ElementType + 'static,
    E::Output: JsCast + Clone + 'static,
{
    type Observed = (IntersectionObserver, Closure<dyn FnMut(js_sys::Array)>);

    let (visible, set_visible) = signal(false);
    let observer = StoredValue::new_local(None::<Observed>);

    Effect::new(move || {
        let Some(element) = target.get() else {
            return;
        };
        if observer.with_value(|observed| observed.is_some()) {
            return;
        }
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                set_visible.set(entry.is_intersecting());
            }
        });
        let options = IntersectionObserverInit::new();
        options.set_threshold(&threshold.into());
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(io) => {
                io.observe(element.unchecked_ref());
                observer.set_value(Some((io, callback)));
            }
            Err(e) => {
                warn!(error = ?e, "IntersectionObserver unavailable, showing content");
                set_visible.set(true);
            }
        }
    });

    on_cleanup(move || {
        observer.try_update_value(|observed| {
            if let Some((io, _callback)) = observed.take() {
                io.disconnect();
            }
        });
    });
    visible
}

/// Carousel density for the current viewport, updated on resize.
pub fn use_cards_per_view(breakpoints: Breakpoints) -> ReadSignal<usize> {
    let (cards, set_cards) = signal(breakpoints.cards_per_view(BrowserViewport.width()));
    let listener = window_event_listener(ev::resize, move |_| {
        let next = breakpoints.cards_per_view(BrowserViewport.width());
        if cards.get_untracked() != next {
            set_cards.set(next);
        }
    });
    on_cleanup(move || listener.remove());
    cards
}

/// Runs `handler` whenever the URL fragment changes outside the page's own
/// `pushState` calls (back/forward, edited address bar, in-page anchors).
pub fn use_hash_change(handler: impl Fn() + 'static) {
    let listener = window_event_listener(ev::hashchange, move |_| handler());
    on_cleanup(move || listener.remove());
}

/// Mirrors `value` after it has been stable for `delay`. Each change
/// cancels the pending update, so a burst of keystrokes publishes once.
pub fn use_debounced<T>(value: Memo<T>, delay: Duration) -> ReadSignal<Option<T>>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let (settled, set_settled) = signal(None::<T>);
    let pending = StoredValue::new_local(None::<TimeoutHandle>);

    Effect::new(move || {
        let next = value.get();
        pending.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.clear();
            }
        });
        let publish = next.clone();
        match set_timeout_with_handle(move || set_settled.set(Some(publish)), delay) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(e) => {
                warn!(error = ?e, "debounce timer unavailable, publishing now");
                set_settled.set(Some(next));
            }
        }
    });

    on_cleanup(move || {
        pending.try_update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.clear();
            }
        });
    });
    settled
}
