//! Fixed-size rotating windows over a static list.
//!
//! A [`Rotation`] is the state behind the industry pills, the mentor orbit
//! and the testimonial carousel: a start index, a window size and a
//! visibility flag for the cross-fade. Windows wrap modulo the list length,
//! so a window always holds exactly `window` items even when the length is
//! not a multiple of it (or is shorter than it).

use crate::error::{Error, Result};

/// Keys the testimonial carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselKey {
    /// Enter or Space on a focused control.
    Activate,
    Previous,
    Next,
}

impl CarouselKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | " " | "Spacebar" => Some(CarouselKey::Activate),
            "ArrowLeft" => Some(CarouselKey::Previous),
            "ArrowRight" => Some(CarouselKey::Next),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    start: usize,
    len: usize,
    window: usize,
    visible: bool,
}

impl Rotation {
    pub fn new(len: usize, window: usize) -> Result<Self> {
        Self::starting_at(len, window, 0)
    }

    /// `start` is reduced modulo `len`.
    pub fn starting_at(len: usize, window: usize, start: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::EmptyRotation);
        }
        if window == 0 {
            return Err(Error::ZeroWindow);
        }
        Ok(Self {
            start: start % len,
            len,
            window,
            visible: true,
        })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn window_size(&self) -> usize {
        self.window
    }

    /// False during the cross-fade gap between hide and advance.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// List indices of the current window, wrapping past the end.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.window).map(move |offset| (self.start + offset) % self.len)
    }

    /// Indices of the window that the next advance will show.
    pub fn next_indices(&self) -> Vec<usize> {
        let mut next = *self;
        next.advance();
        next.indices().collect()
    }

    /// The current window's items. `items` must have the length the
    /// rotation was built with.
    pub fn window_of<'a, T>(&self, items: &'a [T]) -> Vec<&'a T> {
        debug_assert_eq!(items.len(), self.len, "rotation built for another list");
        self.indices().filter_map(|i| items.get(i)).collect()
    }

    /// `start = (start + window) mod len`.
    pub fn advance(&mut self) {
        self.start = (self.start + self.window) % self.len;
    }

    /// Steps back one window. From the first window this jumps to
    /// `len - window`, the last full window.
    pub fn retreat(&mut self) {
        self.start = if self.start >= self.window {
            self.start - self.window
        } else {
            self.len.saturating_sub(self.window)
        };
    }

    /// Number of carousel pages, `ceil(len / window)`.
    pub fn page_count(&self) -> usize {
        self.len.div_ceil(self.window)
    }

    pub fn current_page(&self) -> usize {
        self.start / self.window
    }

    /// Jumps to `page`, clamped to the last page.
    pub fn go_to_page(&mut self, page: usize) {
        let page = page.min(self.page_count() - 1);
        self.start = (page * self.window) % self.len;
    }

    /// Changes the window size (the carousel does this on resize) and keeps
    /// the start index.
    pub fn set_window(&mut self, window: usize) -> Result<()> {
        if window == 0 {
            return Err(Error::ZeroWindow);
        }
        self.window = window;
        Ok(())
    }

    /// First half of a tick: fade the window out.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Second half of a tick: advance and fade back in.
    pub fn advance_and_show(&mut self) {
        self.advance();
        self.visible = true;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }
}
