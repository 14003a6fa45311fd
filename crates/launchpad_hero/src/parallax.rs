//! # Pointer Parallax
//!
//! Decorative layers drift with the pointer. The raw target is the pointer's
//! offset from the container center, damped by [`POINTER_DAMPING`]. Two
//! springs (one per axis) chase that target, so the visible offset eases in
//! and keeps settling after the pointer stops.
//!
//! ```ignore
//! let mut parallax = PointerParallax::new();
//! parallax.set_container(Some(Rect::new(0.0, 0.0, 1280.0, 720.0)));
//!
//! parallax.pointer_move(900.0, 200.0);
//! parallax.step(1.0 / 60.0);
//! let offset = parallax.offset();
//! ```

use launchpad_ui::{PointerState, Rect, Spring2D, SpringConfig};

/// Fraction of the pointer's distance from center used as the target.
pub const POINTER_DAMPING: f32 = 0.1;
/// Spring stiffness.
pub const SPRING_STIFFNESS: f32 = 300.0;
/// Spring damping.
pub const SPRING_DAMPING: f32 = 30.0;
/// Draw scale of the second background orb. It moves by the full offset.
pub const SECONDARY_ORB_SCALE: f32 = 0.8;

/// Smoothed 2D displacement shared by decorative layers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParallaxOffset {
    /// Horizontal offset.
    pub dx: f32,
    /// Vertical offset.
    pub dy: f32,
}

impl ParallaxOffset {
    /// No displacement.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    /// Returns the offset as a tuple.
    #[must_use]
    pub const fn as_tuple(self) -> (f32, f32) {
        (self.dx, self.dy)
    }
}

/// Pointer-driven parallax source.
#[derive(Debug, Clone)]
pub struct PointerParallax {
    /// Container bounds; None until mounted.
    container: Option<Rect>,
    /// Last reported pointer position.
    pointer: PointerState,
    /// Latest raw (unsmoothed) target.
    target: ParallaxOffset,
    /// Smoothing springs.
    spring: Spring2D,
}

impl PointerParallax {
    /// Creates a parallax source with no container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            container: None,
            pointer: PointerState::new(),
            target: ParallaxOffset::ZERO,
            spring: Spring2D::new(SpringConfig::new(SPRING_STIFFNESS, SPRING_DAMPING)),
        }
    }

    /// Sets or clears the tracked container.
    ///
    /// A new container re-aims at the last known pointer position. Clearing
    /// it forgets the pointer.
    pub fn set_container(&mut self, container: Option<Rect>) {
        self.container = container;
        match (container, self.pointer.position()) {
            (Some(container), Some((x, y))) => self.aim(container, x, y),
            (None, _) => self.pointer.clear(),
            _ => {}
        }
    }

    /// Returns the tracked container.
    #[must_use]
    pub fn container(&self) -> Option<Rect> {
        self.container
    }

    /// Handles a pointer move. Ignored while there is no container or when
    /// either coordinate is not finite.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        let Some(container) = self.container else {
            return;
        };
        self.pointer.set_pos(x, y);
        self.aim(container, x, y);
    }

    fn aim(&mut self, container: Rect, x: f32, y: f32) {
        let (dx, dy) = container.offset_from_center(x, y);
        self.target = ParallaxOffset {
            dx: dx * POINTER_DAMPING,
            dy: dy * POINTER_DAMPING,
        };
        self.spring.set_target(self.target.dx, self.target.dy);
    }

    /// Advances smoothing by `dt` seconds. Call every frame.
    pub fn step(&mut self, dt: f32) {
        self.spring.update(dt);
    }

    /// Latest raw target.
    #[must_use]
    pub fn target(&self) -> ParallaxOffset {
        self.target
    }

    /// Smoothed offset to display.
    #[must_use]
    pub fn offset(&self) -> ParallaxOffset {
        let (dx, dy) = self.spring.value();
        ParallaxOffset { dx, dy }
    }

    /// Returns true once the smoothed offset has settled on the target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.spring.is_at_rest()
    }
}

impl Default for PointerParallax {
    fn default() -> Self {
        Self::new()
    }
}
