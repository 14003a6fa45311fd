//! # Hero Section
//!
//! Owns one mount of the hero: the resolved configuration, the concurrent
//! processes and the timer queue they share.
//!
//! ## Lifecycle
//!
//! ```text
//! mount ──► tick(dt) ──► tick(dt) ──► ... ──► teardown
//!   │          │
//!   │          ├─ drain due timers (typing, countdown, reveals)
//!   │          └─ advance springs and tweens
//!   │
//!   └─ start particle backdrop, first countdown recompute,
//!      schedule typing + countdown refresh + every reveal
//! ```
//!
//! The processes never talk to each other. Pointer and scroll input only
//! touch the parallax source and the scroll fade. After teardown nothing
//! fires and every input is ignored.

use std::time::Duration;

use chrono::{DateTime, Utc};
use launchpad_ui::{Color, NodeId, NodeKind, Rect, ScrollState, ViewNode, ViewTree, Visual};
use tracing::{debug, info};

use crate::config::HeroConfig;
use crate::countdown::{CountdownState, CountdownTimer, REFRESH_INTERVAL};
use crate::navigation::{CtaSlot, Navigator};
use crate::ornaments::Ornaments;
use crate::parallax::{ParallaxOffset, PointerParallax, SECONDARY_ORB_SCALE};
use crate::particles::{ParticleBackdrop, ParticleOptions};
use crate::reveal::{RevealSequencer, RevealTarget, TRUST_LOGO_COUNT};
use crate::scheduler::{Scheduler, TimerId};
use crate::tags;
use crate::typed::{cursor_visible, TypedCycleState, TypedTextCycler, CURSOR_GLYPH};

/// Scroll progress over which the content fades out.
pub const SCROLL_FADE_END: f32 = 0.5;
/// Upward travel of the content at full scroll progress.
pub const SCROLL_TRAVEL: f32 = 100.0;

/// What a timer in the section's queue drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Process {
    Typed,
    Countdown,
    Reveal(RevealTarget),
}

/// Maps scroll progress to the content's visual state.
#[must_use]
pub fn scroll_fade(progress: f32) -> Visual {
    let progress = progress.clamp(0.0, 1.0);
    Visual {
        opacity: (1.0 - progress / SCROLL_FADE_END).clamp(0.0, 1.0),
        offset: (0.0, -SCROLL_TRAVEL * progress),
        ..Visual::IDENTITY
    }
}

/// One mounted hero section.
#[derive(Debug)]
pub struct HeroSection {
    config: HeroConfig,
    scheduler: Scheduler<Process>,
    parallax: PointerParallax,
    typed: TypedTextCycler,
    countdown: CountdownTimer,
    countdown_timer: Option<TimerId>,
    reveal: RevealSequencer,
    scroll: ScrollState,
    ornaments: Ornaments,
    mounted: bool,
}

impl HeroSection {
    /// Mounts the section with a resolved configuration.
    ///
    /// Starts the particle backdrop once, computes the countdown against
    /// `now` and schedules every process.
    pub fn mount(config: HeroConfig, now: DateTime<Utc>, backdrop: &mut impl ParticleBackdrop) -> Self {
        let mut scheduler = Scheduler::new();

        let typed = TypedTextCycler::new(config.typed_strings.as_slice());
        match typed.next_delay() {
            Some(delay) => {
                scheduler.schedule_once(Process::Typed, delay);
            }
            None => debug!("no typed phrases, headline stays empty"),
        }

        let mut countdown = CountdownTimer::new(config.launch_date);
        let mut countdown_timer = None;
        if countdown.recompute(now) {
            info!(launch_date = %config.launch_date, "launch date already passed");
        } else if config.show_animated_badge {
            countdown_timer = Some(scheduler.schedule_every(Process::Countdown, REFRESH_INTERVAL));
        }

        let reveal = RevealSequencer::new(config.show_animated_badge, config.show_trusted_logos);
        for step in reveal.steps() {
            scheduler.schedule_once(Process::Reveal(step.target), step.delay);
        }

        backdrop.render(&ParticleOptions::hero(Color::PRIMARY));

        info!(
            phrases = config.typed_strings.len(),
            reveals = reveal.steps().len(),
            badge = config.show_animated_badge,
            "hero mounted"
        );

        Self {
            config,
            scheduler,
            parallax: PointerParallax::new(),
            typed,
            countdown,
            countdown_timer,
            reveal,
            scroll: ScrollState::new(),
            ornaments: Ornaments::new(),
            mounted: true,
        }
    }

    /// Returns true until [`teardown`](Self::teardown).
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Resolved configuration this mount renders.
    #[must_use]
    pub fn config(&self) -> &HeroConfig {
        &self.config
    }

    /// Time since mount, as far as the section has been ticked.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.scheduler.now()
    }

    /// Timers still queued.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Sets or clears the container bounds the parallax is measured against.
    pub fn set_container(&mut self, container: Option<Rect>) {
        if self.mounted {
            self.parallax.set_container(container);
        }
    }

    /// Handles a pointer move in page coordinates.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if self.mounted {
            self.parallax.pointer_move(x, y);
        }
    }

    /// Handles a scroll update, progress in [0, 1].
    pub fn scroll(&mut self, progress: f32) {
        if self.mounted {
            self.scroll.set_progress(progress);
        }
    }

    /// Advances the section by `dt`. `now` is the wall clock used by the countdown.
    pub fn tick(&mut self, dt: Duration, now: DateTime<Utc>) {
        if !self.mounted {
            return;
        }

        let until = self.scheduler.now() + dt;
        while let Some(fired) = self.scheduler.pop_due(until) {
            match fired.key {
                Process::Typed => {
                    self.typed.step();
                    if let Some(delay) = self.typed.next_delay() {
                        self.scheduler.schedule_once(Process::Typed, delay);
                    }
                }
                Process::Countdown => {
                    if self.countdown.recompute(now) {
                        if let Some(id) = self.countdown_timer.take() {
                            self.scheduler.cancel(id);
                        }
                        info!(launch_date = %self.config.launch_date, "countdown completed");
                    }
                }
                Process::Reveal(target) => {
                    if self.reveal.reveal(target) {
                        debug!(?target, at = ?fired.due, "revealed");
                    }
                }
            }
        }
        self.scheduler.settle(until);

        let dt = dt.as_secs_f32();
        self.parallax.step(dt);
        self.reveal.update(dt);
    }

    /// Hands the slot's configured destination to `navigator`.
    pub fn activate_cta(&self, slot: CtaSlot, navigator: &mut impl Navigator) {
        if !self.mounted {
            debug!(?slot, "CTA activated after teardown, ignored");
            return;
        }
        let destination = slot.destination(&self.config);
        info!(?slot, destination, "CTA activated");
        navigator.resolve(destination);
    }

    /// Stops every process. Nothing fires afterwards.
    pub fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        let cancelled = self.scheduler.pending();
        self.scheduler.cancel_all();
        self.countdown_timer = None;
        self.parallax.set_container(None);
        self.mounted = false;
        info!(cancelled, "hero torn down");
    }

    /// Typed headline text, without cursor.
    #[must_use]
    pub fn typed_text(&self) -> String {
        self.typed.text()
    }

    /// Typed cycler snapshot.
    #[must_use]
    pub fn typed_state(&self) -> TypedCycleState {
        self.typed.state()
    }

    /// Countdown snapshot.
    #[must_use]
    pub fn countdown(&self) -> CountdownState {
        self.countdown.state()
    }

    /// Countdown badge text.
    #[must_use]
    pub fn countdown_label(&self) -> String {
        self.countdown.label()
    }

    /// Smoothed parallax offset.
    #[must_use]
    pub fn parallax_offset(&self) -> ParallaxOffset {
        self.parallax.offset()
    }

    /// Reveal progress.
    #[must_use]
    pub fn reveal(&self) -> &RevealSequencer {
        &self.reveal
    }

    /// Visual state of the scrolling content.
    #[must_use]
    pub fn content_visual(&self) -> Visual {
        scroll_fade(self.scroll.progress())
    }

    /// Builds the view tree for the current frame.
    #[must_use]
    pub fn view(&self) -> ViewTree {
        let elapsed = self.elapsed();
        let ornaments = self.ornaments.sample(elapsed);
        let parallax = self.parallax.offset();

        let mut tree = ViewTree::new();
        let root = tree.push_root(ViewNode::container().tagged(tags::HERO));

        tree.push_child(root, ViewNode::new(NodeKind::Layer("particles")));
        tree.push_child(
            root,
            ViewNode::new(NodeKind::Layer(self.config.background_pattern.layer_name())),
        );
        tree.push_child(
            root,
            ViewNode::new(NodeKind::Layer("orb-primary")).with_visual(Visual {
                offset: parallax.as_tuple(),
                ..Visual::IDENTITY
            }),
        );
        tree.push_child(
            root,
            ViewNode::new(NodeKind::Layer("orb-accent")).with_visual(Visual {
                offset: parallax.as_tuple(),
                scale: SECONDARY_ORB_SCALE,
                ..Visual::IDENTITY
            }),
        );

        let content = tree.push_child(root, ViewNode::container().with_visual(self.content_visual()));

        if self.config.show_animated_badge {
            let badge = tree.push_child(
                content,
                ViewNode::container().with_visual(self.reveal.visual(RevealTarget::Badge)),
            );
            tree.push_child(
                badge,
                ViewNode::new(NodeKind::Layer("pulse-ring")).with_visual(Visual {
                    opacity: ornaments.pulse_opacity,
                    scale: 1.0 + ornaments.pulse_spread / 100.0,
                    ..Visual::IDENTITY
                }),
            );
            tree.push_child(
                badge,
                ViewNode::new(NodeKind::Icon("sparkles")).with_visual(Visual {
                    rotation: ornaments.sparkle_rotation,
                    ..Visual::IDENTITY
                }),
            );
            tree.push_child(badge, ViewNode::text(self.config.badge.as_str()).tagged(tags::BADGE));
            tree.push_child(badge, ViewNode::text(self.countdown.label()));
        }

        let title = tree.push_child(
            content,
            ViewNode::container().with_visual(self.reveal.visual(RevealTarget::Title)),
        );
        tree.push_child(title, ViewNode::text(self.config.title.as_str()).tagged(tags::TITLE));
        tree.push_child(title, ViewNode::text(self.typed.text()));
        tree.push_child(
            title,
            ViewNode::text(CURSOR_GLYPH).with_visual(Visual {
                opacity: if cursor_visible(elapsed) { 1.0 } else { 0.0 },
                ..Visual::IDENTITY
            }),
        );
        tree.push_child(
            title,
            ViewNode::new(NodeKind::Icon("star")).with_visual(Visual {
                rotation: ornaments.star_rotation,
                ..Visual::IDENTITY
            }),
        );

        tree.push_child(
            content,
            ViewNode::text(self.config.subtitle.as_str())
                .tagged(tags::SUBTITLE)
                .with_visual(self.reveal.visual(RevealTarget::Subtitle)),
        );

        self.push_features(&mut tree, content, parallax);
        self.push_ctas(&mut tree, content);
        if self.config.show_trusted_logos {
            self.push_trust_strip(&mut tree, content);
        }

        tree
    }

    fn push_features(&self, tree: &mut ViewTree, content: NodeId, parallax: ParallaxOffset) {
        let row = tree.push_child(
            content,
            ViewNode::container().with_visual(self.reveal.visual(RevealTarget::FeatureRow)),
        );
        for ((i, (icon, text)), tag) in (0u8..).zip(self.config.features()).zip(tags::FEATURE_TEXTS) {
            let mut visual = self.reveal.visual(RevealTarget::FeaturePill(i));
            visual.offset.0 += parallax.dx;
            visual.offset.1 += parallax.dy;

            let pill = tree.push_child(row, ViewNode::container().with_visual(visual));
            tree.push_child(pill, ViewNode::new(NodeKind::Icon(icon.name())));
            tree.push_child(pill, ViewNode::text(text).tagged(tag));
        }
    }

    fn push_ctas(&self, tree: &mut ViewTree, content: NodeId) {
        let row = tree.push_child(
            content,
            ViewNode::container().with_visual(self.reveal.visual(RevealTarget::CtaRow)),
        );
        for slot in [CtaSlot::Primary, CtaSlot::Secondary] {
            let link = NodeKind::Link {
                label: slot.label(&self.config).to_string(),
                destination: slot.destination(&self.config).to_string(),
                destination_tag: slot.destination_tag(),
            };
            tree.push_child(row, ViewNode::new(link).tagged(slot.label_tag()));
        }
    }

    fn push_trust_strip(&self, tree: &mut ViewTree, content: NodeId) {
        let strip = tree.push_child(
            content,
            ViewNode::container().with_visual(self.reveal.visual(RevealTarget::TrustStrip)),
        );
        tree.push_child(
            strip,
            ViewNode::text(self.config.trusted_by_text.as_str()).tagged(tags::TRUSTED_BY_TEXT),
        );
        for i in 1..=TRUST_LOGO_COUNT {
            tree.push_child(
                strip,
                ViewNode::new(NodeKind::Layer("logo-placeholder"))
                    .with_visual(self.reveal.visual(RevealTarget::TrustLogo(i))),
            );
        }
    }
}

impl Drop for HeroSection {
    fn drop(&mut self) {
        self.teardown();
    }
}
