//! Animation primitives.
//!
//! Three kinds of motion, all advanced by an explicit time delta:
//! - [`Animation`]: a one-shot tween from the current value to a target
//! - [`Spring`]: a damped oscillator that chases a moving target
//! - [`Keyframes`]: a looping track evaluated from elapsed time

use std::time::Duration;

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Cubic ease-out (the usual entrance curve).
    #[default]
    CubicOut,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// A single animated value.
#[derive(Debug, Clone)]
pub struct Animation {
    /// Current value.
    current: f32,
    /// Target value.
    target: f32,
    /// Animation progress (0-1).
    progress: f32,
    /// Animation duration (seconds).
    duration: f32,
    /// Easing function.
    easing: Easing,
    /// Start value (for interpolation).
    start: f32,
}

impl Animation {
    /// Default animation duration.
    pub const DEFAULT_DURATION: f32 = 0.3;

    /// Creates a new animation resting at the given value.
    #[must_use]
    pub fn new(value: f32, easing: Easing) -> Self {
        Self {
            current: value,
            target: value,
            progress: 1.0,
            duration: Self::DEFAULT_DURATION,
            easing,
            start: value,
        }
    }

    /// Creates an animation with custom duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration.as_secs_f32();
        self
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Returns true if the animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Sets a new target value, starting animation from current value.
    pub fn set_target(&mut self, target: f32) {
        if (target - self.target).abs() > 0.0001 {
            self.start = self.current;
            self.target = target;
            self.progress = 0.0;
        }
    }

    /// Updates the animation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.progress >= 1.0 {
            return;
        }

        if self.duration > 0.0 {
            self.progress += dt / self.duration;
        } else {
            self.progress = 1.0;
        }

        self.progress = self.progress.min(1.0);

        let eased = self.easing.apply(self.progress);
        self.current = self.start + (self.target - self.start) * eased;

        // Snap to target when complete
        if self.progress >= 1.0 {
            self.current = self.target;
        }
    }
}

/// Animated 2D vector.
#[derive(Debug, Clone)]
pub struct Animation2D {
    /// X component animation.
    pub x: Animation,
    /// Y component animation.
    pub y: Animation,
}

impl Animation2D {
    /// Creates a new 2D animation.
    #[must_use]
    pub fn new(x: f32, y: f32, easing: Easing) -> Self {
        Self {
            x: Animation::new(x, easing),
            y: Animation::new(y, easing),
        }
    }

    /// Sets the duration of both components.
    #[must_use]
    pub fn with_duration(self, duration: Duration) -> Self {
        Self {
            x: self.x.with_duration(duration),
            y: self.y.with_duration(duration),
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> (f32, f32) {
        (self.x.value(), self.y.value())
    }

    /// Sets a new target.
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.x.set_target(x);
        self.y.set_target(y);
    }

    /// Updates the animation.
    pub fn update(&mut self, dt: f32) {
        self.x.update(dt);
        self.y.update(dt);
    }

    /// Returns true if both animations are complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.x.is_complete() && self.y.is_complete()
    }
}

/// Physical constants of a damped spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Restoring force per unit of displacement.
    pub stiffness: f32,
    /// Resisting force per unit of velocity.
    pub damping: f32,
    /// Mass of the moving value.
    pub mass: f32,
    /// Displacement below which the spring may come to rest.
    pub rest_delta: f32,
    /// Speed below which the spring may come to rest.
    pub rest_speed: f32,
}

impl SpringConfig {
    /// Creates a unit-mass spring with the default rest thresholds.
    #[must_use]
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }

    /// Damping ratio. `1.0` is critical damping, below that the spring overshoots.
    #[must_use]
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// A value that follows its target through a damped oscillator.
///
/// Integration is semi-implicit Euler over fixed substeps, so a long frame
/// gives the same result as many short ones and never blows up.
#[derive(Debug, Clone)]
pub struct Spring {
    config: SpringConfig,
    position: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Largest integration step (seconds).
    pub const MAX_SUBSTEP: f32 = 1.0 / 240.0;

    /// Creates a spring resting at `value`.
    #[must_use]
    pub fn new(value: f32, config: SpringConfig) -> Self {
        Self {
            config,
            position: value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.position
    }

    /// Moves the target. The value keeps its momentum.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Returns true if the spring has settled on its target.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    /// Advances the spring by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 || self.is_at_rest() {
            return;
        }

        let steps = (dt / Self::MAX_SUBSTEP).ceil().max(1.0);
        let h = dt / steps;
        let SpringConfig { stiffness, damping, mass, .. } = self.config;

        for _ in 0..steps as u32 {
            let displacement = self.position - self.target;
            let acceleration = (-stiffness * displacement - damping * self.velocity) / mass;
            self.velocity += acceleration * h;
            self.position += self.velocity * h;
        }

        if (self.position - self.target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
        {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }
}

/// Two independent springs sharing one configuration.
#[derive(Debug, Clone)]
pub struct Spring2D {
    /// X component spring.
    pub x: Spring,
    /// Y component spring.
    pub y: Spring,
}

impl Spring2D {
    /// Creates a 2D spring resting at the origin.
    #[must_use]
    pub fn new(config: SpringConfig) -> Self {
        Self {
            x: Spring::new(0.0, config),
            y: Spring::new(0.0, config),
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> (f32, f32) {
        (self.x.value(), self.y.value())
    }

    /// Sets a new target.
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.x.set_target(x);
        self.y.set_target(y);
    }

    /// Advances both springs.
    pub fn update(&mut self, dt: f32) {
        self.x.update(dt);
        self.y.update(dt);
    }

    /// Returns true if both springs have settled.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }
}

/// A looping track of evenly spaced keyframes.
///
/// Values between keyframes are linearly interpolated. The track repeats
/// every `period`, forever.
#[derive(Debug, Clone)]
pub struct Keyframes {
    values: Vec<f32>,
    period: Duration,
}

impl Keyframes {
    /// Creates a looping track.
    #[must_use]
    pub fn looping(values: Vec<f32>, period: Duration) -> Self {
        Self { values, period }
    }

    /// Evaluates the track at `elapsed` since it started.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> f32 {
        match self.values.as_slice() {
            [] => 0.0,
            [only] => *only,
            values => {
                let period = self.period.as_secs_f64();
                if period <= 0.0 {
                    return values[0];
                }
                let phase = (elapsed.as_secs_f64() % period) / period;
                let segments = values.len() - 1;
                let position = phase * segments as f64;
                let index = (position.floor() as usize).min(segments - 1);
                let t = (position - index as f64) as f32;
                values[index] + (values[index + 1] - values[index]) * t
            }
        }
    }
}
