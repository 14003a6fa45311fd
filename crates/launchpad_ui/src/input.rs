//! Input handling for sections.
//!
//! Tracks the pointer and the page scroll position between frames.

/// Last known pointer position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    position: Option<(f32, f32)>,
}

impl PointerState {
    /// Creates a pointer state with no known position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer move.
    pub fn set_pos(&mut self, x: f32, y: f32) {
        self.position = Some((x, y));
    }

    /// Forgets the position, e.g. when the pointer leaves.
    pub fn clear(&mut self) {
        self.position = None;
    }

    /// Last reported position, if any.
    #[must_use]
    pub fn position(&self) -> Option<(f32, f32)> {
        self.position
    }
}

/// Page scroll position, normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    progress: f32,
}

impl ScrollState {
    /// Creates a scroll state at the top of the page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scroll progress from a raw offset and the scrollable extent.
    ///
    /// A zero extent (nothing to scroll) pins progress to the top.
    pub fn set_offset(&mut self, offset: f32, scrollable: f32) {
        if scrollable <= 0.0 {
            self.progress = 0.0;
        } else {
            self.set_progress(offset / scrollable);
        }
    }

    /// Sets the scroll progress directly. Clamped to `[0, 1]`.
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    }

    /// Returns the scroll progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }
}
