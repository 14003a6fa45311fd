//! # Reveal Sequencer
//!
//! Entrance schedule for the hero content. Each element waits for its own
//! delay from mount, flips from hidden to visible, then eases its opacity
//! and offset into place.
//!
//! | element      | delay            | duration | from       |
//! |--------------|------------------|----------|------------|
//! | badge        | 0.0s             | 0.6s     | y +20      |
//! | title        | 0.2s             | 0.8s     | y +30      |
//! | subtitle     | 0.4s             | 0.6s     | y +20      |
//! | feature row  | 0.6s             | 0.6s     | -          |
//! | pill i       | 0.7s + i * 0.1s  | 0.4s     | x -20      |
//! | CTA row      | 0.8s             | 0.6s     | y +20      |
//! | trust strip  | 1.0s             | 0.6s     | -          |
//! | logo i (1-5) | 1.1s + i * 0.1s  | 0.4s     | y +10      |
//!
//! Steps do not wait on each other. The sequencer only records what was
//! revealed; the section's scheduler decides when.

use std::time::Duration;

use launchpad_ui::{Animation, Animation2D, Easing, Visual};

/// Number of feature pills.
pub const FEATURE_COUNT: u8 = 3;
/// Number of placeholder logos in the trust strip.
pub const TRUST_LOGO_COUNT: u8 = 5;
/// Extra delay per item inside a staggered group.
pub const STAGGER: Duration = Duration::from_millis(100);

/// Element revealed on mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealTarget {
    /// Countdown badge.
    Badge,
    /// Headline.
    Title,
    /// Subtitle paragraph.
    Subtitle,
    /// Row holding the feature pills.
    FeatureRow,
    /// One feature pill, 0-based.
    FeaturePill(u8),
    /// Row holding both CTAs.
    CtaRow,
    /// Trusted-by strip.
    TrustStrip,
    /// One placeholder logo, 1-based.
    TrustLogo(u8),
}

/// Whether an element has been revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Not yet revealed.
    Hidden,
    /// Revealed. Final.
    Visible,
}

/// One scheduled reveal.
#[derive(Debug, Clone)]
pub struct RevealStep {
    /// Element this step reveals.
    pub target: RevealTarget,
    /// Delay from mount.
    pub delay: Duration,
    /// Entrance tween length.
    pub duration: Duration,
    visibility: Visibility,
    opacity: Animation,
    offset: Animation2D,
}

impl RevealStep {
    fn new(target: RevealTarget, delay_ms: u64, duration_ms: u64, from: (f32, f32)) -> Self {
        let duration = Duration::from_millis(duration_ms);
        Self {
            target,
            delay: Duration::from_millis(delay_ms),
            duration,
            visibility: Visibility::Hidden,
            opacity: Animation::new(0.0, Easing::CubicOut).with_duration(duration),
            offset: Animation2D::new(from.0, from.1, Easing::CubicOut).with_duration(duration),
        }
    }

    /// Current visibility.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Current visual state.
    #[must_use]
    pub fn visual(&self) -> Visual {
        Visual {
            opacity: self.opacity.value(),
            offset: self.offset.value(),
            ..Visual::IDENTITY
        }
    }

    /// Returns true once the entrance tween has finished.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.visibility == Visibility::Visible && self.opacity.is_complete() && self.offset.is_complete()
    }
}

/// Owns the reveal steps of one mount.
#[derive(Debug, Clone)]
pub struct RevealSequencer {
    steps: Vec<RevealStep>,
}

impl RevealSequencer {
    /// Builds the schedule. Regions that are switched off get no step.
    #[must_use]
    pub fn new(show_badge: bool, show_trust_strip: bool) -> Self {
        let mut steps = Vec::with_capacity(16);

        if show_badge {
            steps.push(RevealStep::new(RevealTarget::Badge, 0, 600, (0.0, 20.0)));
        }
        steps.push(RevealStep::new(RevealTarget::Title, 200, 800, (0.0, 30.0)));
        steps.push(RevealStep::new(RevealTarget::Subtitle, 400, 600, (0.0, 20.0)));
        steps.push(RevealStep::new(RevealTarget::FeatureRow, 600, 600, (0.0, 0.0)));
        for i in 0..FEATURE_COUNT {
            let delay = 700 + u64::from(i) * STAGGER.as_millis() as u64;
            steps.push(RevealStep::new(RevealTarget::FeaturePill(i), delay, 400, (-20.0, 0.0)));
        }
        steps.push(RevealStep::new(RevealTarget::CtaRow, 800, 600, (0.0, 20.0)));
        if show_trust_strip {
            steps.push(RevealStep::new(RevealTarget::TrustStrip, 1000, 600, (0.0, 0.0)));
            for i in 1..=TRUST_LOGO_COUNT {
                let delay = 1100 + u64::from(i) * STAGGER.as_millis() as u64;
                steps.push(RevealStep::new(RevealTarget::TrustLogo(i), delay, 400, (0.0, 10.0)));
            }
        }

        Self { steps }
    }

    /// Steps in declared order.
    #[must_use]
    pub fn steps(&self) -> &[RevealStep] {
        &self.steps
    }

    /// Looks up a step.
    #[must_use]
    pub fn step(&self, target: RevealTarget) -> Option<&RevealStep> {
        self.steps.iter().find(|step| step.target == target)
    }

    /// Visibility of `target`, or None if it is not part of this mount.
    #[must_use]
    pub fn visibility(&self, target: RevealTarget) -> Option<Visibility> {
        self.step(target).map(RevealStep::visibility)
    }

    /// Visual state of `target`. Elements without a step are shown as-is.
    #[must_use]
    pub fn visual(&self, target: RevealTarget) -> Visual {
        self.step(target).map_or(Visual::IDENTITY, RevealStep::visual)
    }

    /// Reveals `target`. Returns true if it was hidden until now.
    pub fn reveal(&mut self, target: RevealTarget) -> bool {
        let Some(step) = self.steps.iter_mut().find(|step| step.target == target) else {
            return false;
        };
        if step.visibility == Visibility::Visible {
            return false;
        }

        step.visibility = Visibility::Visible;
        step.opacity.set_target(1.0);
        step.offset.set_target(0.0, 0.0);
        true
    }

    /// Advances entrance tweens by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for step in self.steps.iter_mut().filter(|s| s.visibility == Visibility::Visible) {
            step.opacity.update(dt);
            step.offset.update(dt);
        }
    }

    /// Returns true once every step is visible.
    #[must_use]
    pub fn all_revealed(&self) -> bool {
        self.steps.iter().all(|step| step.visibility == Visibility::Visible)
    }

    /// Returns true once every entrance tween has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.steps.iter().all(RevealStep::is_settled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::Scheduler;

    fn scheduled(sequencer: &RevealSequencer) -> Scheduler<RevealTarget> {
        let mut scheduler = Scheduler::new();
        for step in sequencer.steps() {
            scheduler.schedule_once(step.target, step.delay);
        }
        scheduler
    }

    fn run_until(
        sequencer: &mut RevealSequencer,
        scheduler: &mut Scheduler<RevealTarget>,
        until: Duration,
    ) -> Vec<RevealTarget> {
        let mut fired = Vec::new();
        while let Some(timer) = scheduler.pop_due(until) {
            assert!(sequencer.reveal(timer.key));
            fired.push(timer.key);
        }
        scheduler.settle(until);
        fired
    }

    #[test]
    fn test_group_delays_increase_in_declared_order() {
        let sequencer = RevealSequencer::new(true, true);
        let delay = |target| sequencer.step(target).unwrap().delay;

        let groups = [
            RevealTarget::Badge,
            RevealTarget::Title,
            RevealTarget::Subtitle,
            RevealTarget::FeatureRow,
            RevealTarget::FeaturePill(0),
            RevealTarget::CtaRow,
            RevealTarget::TrustStrip,
            RevealTarget::TrustLogo(1),
        ];
        assert!(groups.windows(2).all(|w| delay(w[0]) < delay(w[1])));
        assert_eq!(delay(RevealTarget::FeaturePill(2)) - delay(RevealTarget::FeaturePill(1)), STAGGER);
        assert_eq!(sequencer.steps().len(), 1 + 1 + 1 + 1 + 3 + 1 + 1 + 5);
    }

    #[test]
    fn test_earlier_delay_fires_first() {
        let mut sequencer = RevealSequencer::new(true, true);
        let mut scheduler = scheduled(&sequencer);

        let fired = run_until(&mut sequencer, &mut scheduler, Duration::from_secs(5));

        let delays: Vec<_> = fired.iter().map(|&t| sequencer.step(t).unwrap().delay).collect();
        assert!(delays.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(fired.len(), sequencer.steps().len());
        assert!(sequencer.all_revealed());

        // The last pill (0.9s) lands after the CTA row (0.8s).
        let position = |target| fired.iter().position(|&t| t == target).unwrap();
        assert!(position(RevealTarget::CtaRow) < position(RevealTarget::FeaturePill(2)));
        assert!(position(RevealTarget::FeaturePill(1)) < position(RevealTarget::CtaRow));
    }

    #[test]
    fn test_reveals_only_what_is_due() {
        let mut sequencer = RevealSequencer::new(true, true);
        let mut scheduler = scheduled(&sequencer);

        let fired = run_until(&mut sequencer, &mut scheduler, Duration::from_millis(750));

        assert_eq!(
            fired,
            vec![
                RevealTarget::Badge,
                RevealTarget::Title,
                RevealTarget::Subtitle,
                RevealTarget::FeatureRow,
                RevealTarget::FeaturePill(0),
            ]
        );
        assert_eq!(sequencer.visibility(RevealTarget::FeaturePill(1)), Some(Visibility::Hidden));
    }

    #[test]
    fn test_reveal_is_irreversible() {
        let mut sequencer = RevealSequencer::new(true, true);
        assert!(sequencer.reveal(RevealTarget::Title));
        assert!(!sequencer.reveal(RevealTarget::Title));

        for _ in 0..600 {
            sequencer.update(1.0 / 60.0);
            assert_eq!(sequencer.visibility(RevealTarget::Title), Some(Visibility::Visible));
        }
    }

    #[test]
    fn test_entrance_tween_settles() {
        let mut sequencer = RevealSequencer::new(true, true);
        let before = sequencer.visual(RevealTarget::Title);
        assert!(before.opacity.abs() < f32::EPSILON);
        assert_eq!(before.offset, (0.0, 30.0));

        sequencer.reveal(RevealTarget::Title);
        sequencer.update(0.4);
        let midway = sequencer.visual(RevealTarget::Title);
        assert!(midway.opacity > 0.0 && midway.opacity < 1.0);

        sequencer.update(0.5);
        let settled = sequencer.visual(RevealTarget::Title);
        assert!((settled.opacity - 1.0).abs() < f32::EPSILON);
        assert_eq!(settled.offset, (0.0, 0.0));
    }

    #[test]
    fn test_switched_off_regions_are_not_scheduled() {
        let sequencer = RevealSequencer::new(false, false);

        assert_eq!(sequencer.visibility(RevealTarget::Badge), None);
        assert_eq!(sequencer.visibility(RevealTarget::TrustStrip), None);
        assert_eq!(sequencer.visibility(RevealTarget::TrustLogo(1)), None);
        assert_eq!(sequencer.steps().len(), 7);
    }
}
