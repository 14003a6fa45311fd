//! Looping decorations: the badge sparkle and pulse ring, and the star
//! beside the typed headline. All are pure functions of time since mount.

use std::time::Duration;

use launchpad_ui::Keyframes;

/// Period shared by every ornament loop.
pub const ORNAMENT_PERIOD: Duration = Duration::from_secs(2);

/// Ornament values for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrnamentFrame {
    /// Badge sparkle rotation, degrees.
    pub sparkle_rotation: f32,
    /// Badge pulse ring spread, pixels.
    pub pulse_spread: f32,
    /// Badge pulse ring opacity.
    pub pulse_opacity: f32,
    /// Headline star rotation, degrees.
    pub star_rotation: f32,
}

/// Keyframe tracks for the ornaments.
#[derive(Debug, Clone)]
pub struct Ornaments {
    sparkle: Keyframes,
    pulse_spread: Keyframes,
    pulse_opacity: Keyframes,
    star: Keyframes,
}

impl Ornaments {
    /// Creates the default tracks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sparkle: Keyframes::looping(vec![0.0, 360.0], ORNAMENT_PERIOD),
            pulse_spread: Keyframes::looping(vec![0.0, 10.0, 0.0], ORNAMENT_PERIOD),
            pulse_opacity: Keyframes::looping(vec![0.3, 0.0, 0.0], ORNAMENT_PERIOD),
            star: Keyframes::looping(vec![0.0, 10.0, -10.0, 0.0], ORNAMENT_PERIOD),
        }
    }

    /// Samples every track at `elapsed` since mount.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> OrnamentFrame {
        OrnamentFrame {
            sparkle_rotation: self.sparkle.sample(elapsed),
            pulse_spread: self.pulse_spread.sample(elapsed),
            pulse_opacity: self.pulse_opacity.sample(elapsed),
            star_rotation: self.star.sample(elapsed),
        }
    }
}

impl Default for Ornaments {
    fn default() -> Self {
        Self::new()
    }
}
