//! Timer-driven rotation shared by every rotating section.
//!
//! [`RotationTimer`] owns one [`Rotation`] and drives it from a [`Timers`]
//! implementation. Each tick hides the window, then after the fade gap
//! advances it and shows it again. The landing binary plugs in browser
//! timers; tests use [`ManualTimers`], a virtual clock advanced by hand.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::Result;
use crate::rotation::Rotation;

/// Scheduling capability. Callbacks run on the single UI thread.
pub trait Timers {
    type Handle: Copy + fmt::Debug;

    /// Calls `tick` every `period` until cancelled. `None` when the
    /// environment cannot schedule timers.
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Option<Self::Handle>;

    /// Calls `f` once after `delay`.
    fn after(&self, delay: Duration, f: Box<dyn FnOnce()>) -> Option<Self::Handle>;

    /// Cancels a pending timer. Cancelling twice, or after a one-shot has
    /// fired, is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// Tunables for one rotating section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationSettings {
    pub period: Duration,
    pub fade_gap: Duration,
    /// When set the timer never starts and the first window stays put.
    pub reduced_motion: bool,
}

type Listener = Box<dyn FnMut(Rotation)>;

struct Shared<T: Timers> {
    name: &'static str,
    timers: T,
    settings: RotationSettings,
    rotation: Cell<Rotation>,
    interval: Cell<Option<T::Handle>>,
    fade: Cell<Option<T::Handle>>,
    listener: RefCell<Option<Listener>>,
}

impl<T: Timers + 'static> Shared<T> {
    fn publish(&self, rotation: Rotation) {
        self.rotation.set(rotation);
        // The listener is taken out while it runs so it may read the
        // rotation without a double borrow.
        let taken = self.listener.borrow_mut().take();
        if let Some(mut listener) = taken {
            listener(rotation);
            let mut slot = self.listener.borrow_mut();
            if slot.is_none() {
                *slot = Some(listener);
            }
        }
    }

    fn update(&self, change: impl FnOnce(&mut Rotation)) {
        let mut rotation = self.rotation.get();
        change(&mut rotation);
        self.publish(rotation);
    }

    fn tick(shared: &Rc<Self>) {
        // A fade still pending from the previous tick is replaced, never
        // orphaned, so `stop` can always reach it.
        shared.cancel_fade();
        shared.update(Rotation::hide);
        let weak = Rc::downgrade(shared);
        let finish: Box<dyn FnOnce()> = Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.fade.set(None);
                shared.update(Rotation::advance_and_show);
                debug!(
                    rotation = shared.name,
                    start = shared.rotation.get().start(),
                    "rotation advanced"
                );
            }
        });
        match shared.timers.after(shared.settings.fade_gap, finish) {
            Some(handle) => shared.fade.set(Some(handle)),
            None => shared.update(Rotation::advance_and_show),
        }
    }

    fn cancel_fade(&self) {
        if let Some(handle) = self.fade.take() {
            self.timers.cancel(handle);
        }
    }
}

/// A rotation plus the timers that move it.
///
/// Dropping the timer cancels everything it scheduled; pending callbacks
/// only hold weak references and become no-ops.
pub struct RotationTimer<T: Timers + 'static> {
    shared: Rc<Shared<T>>,
}

impl<T: Timers + 'static> RotationTimer<T> {
    pub fn new(
        name: &'static str,
        timers: T,
        rotation: Rotation,
        settings: RotationSettings,
    ) -> Self {
        Self {
            shared: Rc::new(Shared {
                name,
                timers,
                settings,
                rotation: Cell::new(rotation),
                interval: Cell::new(None),
                fade: Cell::new(None),
                listener: RefCell::new(None),
            }),
        }
    }

    /// Called with the new state after every change. The listener must not
    /// call back into this timer.
    pub fn on_change(&self, listener: impl FnMut(Rotation) + 'static) {
        *self.shared.listener.borrow_mut() = Some(Box::new(listener));
    }

    pub fn rotation(&self) -> Rotation {
        self.shared.rotation.get()
    }

    pub fn is_running(&self) -> bool {
        self.shared.interval.get().is_some()
    }

    /// Starts ticking. No-op under reduced motion or when already running.
    pub fn start(&self) {
        let shared = &self.shared;
        if shared.settings.reduced_motion {
            debug!(rotation = shared.name, "reduced motion, rotation stays static");
            return;
        }
        if self.is_running() {
            return;
        }
        let weak: Weak<Shared<T>> = Rc::downgrade(shared);
        let tick: Box<dyn FnMut()> = Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                Shared::tick(&shared);
            }
        });
        match shared.timers.every(shared.settings.period, tick) {
            Some(handle) => {
                shared.interval.set(Some(handle));
                debug!(
                    rotation = shared.name,
                    period_ms = shared.settings.period.as_millis() as u64,
                    "rotation started"
                );
            }
            None => warn!(rotation = shared.name, "cannot schedule rotation timer"),
        }
    }

    /// Cancels the interval and any pending fade, leaving the current
    /// window visible. Used on unmount and while the pointer hovers.
    pub fn stop(&self) {
        let shared = &self.shared;
        if let Some(handle) = shared.interval.take() {
            shared.timers.cancel(handle);
            debug!(rotation = shared.name, "rotation stopped");
        }
        shared.cancel_fade();
        if !shared.rotation.get().is_visible() {
            shared.update(Rotation::show);
        }
    }

    /// Restarts the period so a manual step is not followed by an
    /// immediate automatic one.
    fn restart_if_running(&self) {
        if self.is_running() {
            self.stop();
            self.start();
        }
    }

    fn step(&self, change: impl FnOnce(&mut Rotation)) {
        self.shared.cancel_fade();
        self.shared.update(|rotation| {
            change(rotation);
            rotation.show();
        });
        self.restart_if_running();
    }

    pub fn advance(&self) {
        self.step(Rotation::advance);
    }

    pub fn retreat(&self) {
        self.step(Rotation::retreat);
    }

    pub fn go_to_page(&self, page: usize) {
        self.step(|rotation| rotation.go_to_page(page));
    }

    /// Changes the window size, keeping the start index.
    pub fn set_window(&self, window: usize) -> Result<()> {
        let mut rotation = self.shared.rotation.get();
        if rotation.window_size() == window {
            return Ok(());
        }
        rotation.set_window(window)?;
        self.shared.publish(rotation);
        Ok(())
    }
}

impl<T: Timers + 'static> Drop for RotationTimer<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<T: Timers + 'static> fmt::Debug for RotationTimer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotationTimer")
            .field("name", &self.shared.name)
            .field("rotation", &self.shared.rotation.get())
            .field("running", &self.is_running())
            .finish()
    }
}

/// Identifier of a timer scheduled on [`ManualTimers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

enum Job {
    Every {
        period: u64,
        tick: Box<dyn FnMut()>,
    },
    Once(Box<dyn FnOnce()>),
}

struct Entry {
    id: u64,
    due: u64,
    job: Job,
}

#[derive(Default)]
struct Clock {
    now: u64,
    next_id: u64,
    entries: Vec<Entry>,
    /// Interval currently running its tick; it is out of `entries` then.
    firing: Option<u64>,
    /// Set when the firing interval cancels itself.
    firing_cancelled: bool,
}

/// Virtual millisecond clock. Clones share the same clock, so a test keeps
/// one handle and gives another to the code under test.
#[derive(Clone, Default)]
pub struct ManualTimers {
    clock: Rc<RefCell<Clock>>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed on the virtual clock.
    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now
    }

    /// Timers still scheduled.
    pub fn pending(&self) -> usize {
        self.clock.borrow().entries.len()
    }

    fn schedule(&self, due_in: u64, job: Job) -> TimerId {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + due_in;
        clock.entries.push(Entry { id, due, job });
        TimerId(id)
    }

    fn pop_due(&self, until: u64) -> Option<Entry> {
        let mut clock = self.clock.borrow_mut();
        let position = clock
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= until)
            .min_by_key(|(_, entry)| (entry.due, entry.id))
            .map(|(position, _)| position)?;
        let entry = clock.entries.remove(position);
        clock.now = entry.due;
        Some(entry)
    }

    /// Moves the clock forward, firing due timers in order. Callbacks may
    /// schedule or cancel timers.
    pub fn advance(&self, by: Duration) {
        let until = self.now_ms() + by.as_millis() as u64;
        while let Some(entry) = self.pop_due(until) {
            match entry.job {
                Job::Once(f) => f(),
                Job::Every { period, mut tick } => {
                    {
                        let mut clock = self.clock.borrow_mut();
                        clock.firing = Some(entry.id);
                        clock.firing_cancelled = false;
                    }
                    tick();
                    let mut clock = self.clock.borrow_mut();
                    clock.firing = None;
                    if !std::mem::take(&mut clock.firing_cancelled) {
                        clock.entries.push(Entry {
                            id: entry.id,
                            due: entry.due + period,
                            job: Job::Every { period, tick },
                        });
                    }
                }
            }
        }
        self.clock.borrow_mut().now = until;
    }
}

impl Timers for ManualTimers {
    type Handle = TimerId;

    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Option<TimerId> {
        let period = (period.as_millis() as u64).max(1);
        Some(self.schedule(period, Job::Every { period, tick }))
    }

    fn after(&self, delay: Duration, f: Box<dyn FnOnce()>) -> Option<TimerId> {
        Some(self.schedule(delay.as_millis() as u64, Job::Once(f)))
    }

    fn cancel(&self, handle: TimerId) {
        let mut clock = self.clock.borrow_mut();
        if clock.firing == Some(handle.0) {
            clock.firing_cancelled = true;
        }
        clock.entries.retain(|entry| entry.id != handle.0);
    }
}

/// Timers for environments without a scheduler: nothing is ever scheduled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTimers;

impl Timers for NoTimers {
    type Handle = ();

    fn every(&self, _period: Duration, _tick: Box<dyn FnMut()>) -> Option<()> {
        None
    }

    fn after(&self, _delay: Duration, _f: Box<dyn FnOnce()>) -> Option<()> {
        None
    }

    fn cancel(&self, _handle: ()) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn settings(reduced_motion: bool) -> RotationSettings {
        RotationSettings {
            period: ms(4000),
            fade_gap: ms(250),
            reduced_motion,
        }
    }

    fn industries(clock: &ManualTimers, reduced_motion: bool) -> RotationTimer<ManualTimers> {
        let rotation = Rotation::new(32, 7).expect("rotation");
        RotationTimer::new("industries", clock.clone(), rotation, settings(reduced_motion))
    }

    #[test]
    fn tick_hides_then_advances_after_gap() {
        let clock = ManualTimers::new();
        let timer = industries(&clock, false);
        timer.start();

        clock.advance(ms(4000));
        assert!(!timer.rotation().is_visible());
        assert_eq!(timer.rotation().start(), 0);

        clock.advance(ms(250));
        assert!(timer.rotation().is_visible());
        assert_eq!(timer.rotation().start(), 7);
    }

    #[test]
    fn start_after_n_ticks() {
        let clock = ManualTimers::new();
        let timer = industries(&clock, false);
        timer.start();
        clock.advance(ms(4000 * 5 + 250));
        assert_eq!(timer.rotation().start(), (5 * 7) % 32);
    }

    #[test]
    fn reduced_motion_never_moves() {
        let clock = ManualTimers::new();
        let timer = industries(&clock, true);
        timer.start();
        assert!(!timer.is_running());
        assert_eq!(clock.pending(), 0);

        clock.advance(ms(60_000));
        assert_eq!(timer.rotation().start(), 0);
        assert!(timer.rotation().is_visible());
    }

    #[test]
    fn listener_sees_every_change() {
        let clock = ManualTimers::new();
        let timer = industries(&clock, false);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        timer.on_change(move |rotation| {
            sink.borrow_mut()
                .push((rotation.start(), rotation.is_visible()))
        });
        timer.start();
        clock.advance(ms(4250));
        assert_eq!(*seen.borrow(), vec![(0, false), (7, true)]);
    }

    #[test]
    fn stop_mid_fade_cancels_and_shows() {
        let clock = ManualTimers::new();
        let timer = industries(&clock, false);
        timer.start();
        clock.advance(ms(4100));
        assert!(!timer.rotation().is_visible());

        timer.stop();
        assert!(timer.rotation().is_visible());
        assert_eq!(clock.pending(), 0);

        clock.advance(ms(20_000));
        assert_eq!(timer.rotation().start(), 0);
    }

    #[test]
    fn fade_longer_than_period_stays_cancellable() {
        let clock = ManualTimers::new();
        let timer = RotationTimer::new(
            "industries",
            clock.clone(),
            Rotation::new(32, 7).expect("rotation"),
            RotationSettings {
                fade_gap: ms(5000),
                ..settings(false)
            },
        );
        timer.start();
        clock.advance(ms(8100));
        assert_eq!(clock.pending(), 2);

        timer.stop();
        assert_eq!(clock.pending(), 0);
        let before = timer.rotation().start();
        clock.advance(ms(20_000));
        assert_eq!(timer.rotation().start(), before);
        assert!(timer.rotation().is_visible());
    }

    #[test]
    fn pause_and_resume_restarts_period() {
        let clock = ManualTimers::new();
        let timer = industries(&clock, false);
        timer.start();
        clock.advance(ms(3000));
        timer.stop();
        timer.start();
        clock.advance(ms(3000));
        assert_eq!(timer.rotation().start(), 0);
        clock.advance(ms(1250));
        assert_eq!(timer.rotation().start(), 7);
    }

    #[test]
    fn drop_cancels_pending_timers() {
        let clock = ManualTimers::new();
        let timer = industries(&clock, false);
        timer.start();
        clock.advance(ms(4100));
        assert_eq!(clock.pending(), 2);
        drop(timer);
        assert_eq!(clock.pending(), 0);
        clock.advance(ms(10_000));
    }

    #[test]
    fn instances_are_independent() {
        let clock = ManualTimers::new();
        let pills = industries(&clock, false);
        let orbit = RotationTimer::new(
            "mentors",
            clock.clone(),
            Rotation::new(12, 3).expect("rotation"),
            RotationSettings {
                period: ms(10_000),
                ..settings(false)
            },
        );
        pills.start();
        orbit.start();
        clock.advance(ms(10_250));
        assert_eq!(pills.rotation().start(), 14);
        assert_eq!(orbit.rotation().start(), 3);
    }

    #[test]
    fn manual_steps_show_immediately() {
        let clock = ManualTimers::new();
        let carousel = RotationTimer::new(
            "testimonials",
            clock.clone(),
            Rotation::new(12, 3).expect("rotation"),
            settings(false),
        );
        carousel.retreat();
        assert_eq!(carousel.rotation().start(), 9);
        carousel.advance();
        assert_eq!(carousel.rotation().start(), 0);
        carousel.go_to_page(2);
        assert_eq!(carousel.rotation().current_page(), 2);
        assert!(carousel.rotation().is_visible());
    }

    #[test]
    fn resize_changes_window() {
        let clock = ManualTimers::new();
        let carousel = RotationTimer::new(
            "testimonials",
            clock,
            Rotation::new(12, 3).expect("rotation"),
            settings(false),
        );
        carousel.set_window(1).expect("window");
        assert_eq!(carousel.rotation().page_count(), 12);
        assert!(carousel.set_window(0).is_err());
    }

    #[test]
    fn no_timers_leaves_rotation_static() {
        let timer = RotationTimer::new(
            "industries",
            NoTimers,
            Rotation::new(32, 7).expect("rotation"),
            settings(false),
        );
        timer.start();
        assert!(!timer.is_running());
        assert_eq!(timer.rotation().start(), 0);
    }

    #[test]
    fn interval_cancelled_by_its_own_tick_is_retired() {
        let clock = ManualTimers::new();
        let ticks = Rc::new(Cell::new(0));
        let handle = Rc::new(Cell::new(None));
        let (count, own, timers) = (Rc::clone(&ticks), Rc::clone(&handle), clock.clone());
        let id = clock.every(
            ms(100),
            Box::new(move || {
                count.set(count.get() + 1);
                if let Some(id) = own.get() {
                    timers.cancel(id);
                }
            }),
        );
        handle.set(id);

        clock.advance(ms(1000));
        assert_eq!(ticks.get(), 1);
        assert_eq!(clock.pending(), 0);
        let state = clock.clock.borrow();
        assert_eq!(state.firing, None);
        assert!(!state.firing_cancelled);
    }

    #[test]
    fn cancelling_a_fired_timeout_leaves_no_trace() {
        let clock = ManualTimers::new();
        let id = clock.after(ms(10), Box::new(|| {})).expect("timeout");
        clock.advance(ms(10));
        clock.cancel(id);
        assert_eq!(clock.pending(), 0);
        assert!(!clock.clock.borrow().firing_cancelled);
    }

    #[test]
    fn manual_timers_fire_in_order() {
        let clock = ManualTimers::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (delay, label) in [(30, "c"), (10, "a"), (20, "b")] {
            let sink = Rc::clone(&log);
            clock.after(ms(delay), Box::new(move || sink.borrow_mut().push(label)));
        }
        clock.advance(ms(25));
        assert_eq!(*log.borrow(), vec!["a", "b"]);
        assert_eq!(clock.now_ms(), 25);
        clock.advance(ms(5));
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }
}
