//! Container geometry.
//!
//! Layout itself is the host's job. Sections only need to know where their
//! container sits on screen so pointer positions can be made relative to it.

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Returns the point's offset from the rectangle's center.
    #[must_use]
    pub fn offset_from_center(&self, x: f32, y: f32) -> (f32, f32) {
        let (cx, cy) = self.center();
        (x - cx, y - cy)
    }
}
