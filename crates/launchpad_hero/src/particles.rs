//! # Particle Backdrop Options
//!
//! The particle field is drawn and animated by an external renderer. The
//! hero hands it one fixed options bag at mount and never reads anything back.

use launchpad_ui::Color;

/// What the particles do when they reach the container edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutMode {
    /// Bounce off the edge.
    Bounce,
}

/// Particle shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleShape {
    /// Filled circle.
    Circle,
}

/// Effect of a click on the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickMode {
    /// Add particles at the pointer.
    Push {
        /// Particles added per click.
        quantity: u32,
    },
}

/// Effect of hovering over the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoverMode {
    /// Push particles away from the pointer.
    Repulse {
        /// Radius of the effect.
        distance: f32,
        /// Seconds the push lasts.
        duration: f32,
    },
}

/// Pointer interactions enabled on the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionModes {
    /// Click behaviour, None to disable.
    pub on_click: Option<ClickMode>,
    /// Hover behaviour, None to disable.
    pub on_hover: Option<HoverMode>,
    /// Re-layout particles when the container resizes.
    pub resize: bool,
}

/// Links drawn between nearby particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkOptions {
    /// Line color.
    pub color: Color,
    /// Maximum distance for a link.
    pub distance: f32,
    /// Line opacity.
    pub opacity: f32,
    /// Line width.
    pub width: f32,
}

/// Declarative options for the particle renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleOptions {
    /// Canvas background.
    pub background: Color,
    /// Frame rate cap.
    pub fps_limit: u32,
    /// Particle color.
    pub color: Color,
    /// Number of particles per `density_area`.
    pub particle_count: u32,
    /// Area the count is normalized against.
    pub density_area: u32,
    /// Links between particles.
    pub links: LinkOptions,
    /// Drift speed.
    pub speed: f32,
    /// Edge behaviour.
    pub out_mode: OutMode,
    /// Particle opacity.
    pub opacity: f32,
    /// Particle radius range.
    pub size: (f32, f32),
    /// Particle shape.
    pub shape: ParticleShape,
    /// Pointer interactions.
    pub interaction: InteractionModes,
    /// Scale for high-density displays.
    pub detect_retina: bool,
}

impl ParticleOptions {
    /// Options used behind the hero, tinted with `primary`.
    #[must_use]
    pub fn hero(primary: Color) -> Self {
        Self {
            background: Color::TRANSPARENT,
            fps_limit: 120,
            color: primary,
            particle_count: 80,
            density_area: 800,
            links: LinkOptions {
                color: primary,
                distance: 150.0,
                opacity: 0.1,
                width: 1.0,
            },
            speed: 1.0,
            out_mode: OutMode::Bounce,
            opacity: 0.2,
            size: (1.0, 3.0),
            shape: ParticleShape::Circle,
            interaction: InteractionModes {
                on_click: Some(ClickMode::Push { quantity: 4 }),
                on_hover: Some(HoverMode::Repulse { distance: 200.0, duration: 0.4 }),
                resize: true,
            },
            detect_retina: true,
        }
    }
}

impl Default for ParticleOptions {
    fn default() -> Self {
        Self::hero(Color::PRIMARY)
    }
}

/// External particle renderer.
pub trait ParticleBackdrop {
    /// Starts (or restarts) the field with `options`. Runs its own loop afterwards.
    fn render(&mut self, options: &ParticleOptions);
}

/// Backdrop that only logs what it was asked to draw.
#[derive(Debug, Default)]
pub struct LoggingBackdrop {
    renders: usize,
}

impl LoggingBackdrop {
    /// Number of times the field was started.
    #[must_use]
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl ParticleBackdrop for LoggingBackdrop {
    fn render(&mut self, options: &ParticleOptions) {
        self.renders += 1;
        tracing::debug!(
            particles = options.particle_count,
            link_distance = options.links.distance,
            color = %options.color,
            "particle backdrop started"
        );
    }
}
