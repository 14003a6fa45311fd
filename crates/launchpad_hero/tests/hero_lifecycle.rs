//! # Hero Lifecycle Tests
//!
//! End-to-end checks over a mounted section:
//!
//! 1. **Configuration**: overrides merge completely onto defaults
//! 2. **Countdown**: breakdown, monotonicity and completion
//! 3. **Typed headline**: progression and looping
//! 4. **Reveals**: ordering and irreversibility
//! 5. **Parallax**: convergence, and nothing without a container
//! 6. **CTAs and teardown**
//!
//! Run with: cargo test --package launchpad_hero --test hero_lifecycle

use std::time::Duration;

use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use launchpad_hero::navigation::NavigationRequest;
use launchpad_hero::reveal::Visibility;
use launchpad_hero::typed::TypedPhase;
use launchpad_hero::{
    resolve, tags, BackgroundPattern, ChannelNavigator, CountdownTimer, CtaSlot, HeroConfig, HeroOverrides, HeroSection,
    LoggingBackdrop, RevealTarget, TypedTextCycler,
};
use launchpad_ui::{NodeKind, Rect};

const FRAME: Duration = Duration::from_millis(16);

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap()
}

fn mount(config: HeroConfig) -> HeroSection {
    HeroSection::mount(config, epoch(), &mut LoggingBackdrop::default())
}

/// Ticks frame by frame with the wall clock following virtual time.
fn run_for(section: &mut HeroSection, total: Duration) {
    let end = section.elapsed() + total;
    while section.elapsed() < end {
        let dt = FRAME.min(end - section.elapsed());
        let now = epoch() + ChronoDuration::from_std(section.elapsed() + dt).unwrap();
        section.tick(dt, now);
        if !section.is_mounted() {
            break;
        }
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn test_every_override_lands() {
    let overrides = HeroOverrides::from_toml_str(
        r#"
        badge = "Beta in"
        title = "Ship"
        title_highlight = "faster"
        subtitle = "Sub"
        primary_cta = "Go"
        secondary_cta = "Look"
        primary_cta_href = "https://example.com/go"
        secondary_cta_href = "/look"
        feature1_icon = "shield"
        feature1_text = "One"
        feature2_icon = "globe"
        feature2_text = "Two"
        feature3_icon = "zap"
        feature3_text = "Three"
        trusted_by_text = "Loved"
        show_trusted_logos = false
        background_pattern = "grid"
        show_animated_badge = false
        launch_date = "2026-02-01T00:00:00Z"
        typed_strings = ["x"]
        "#,
    )
    .unwrap();

    let resolved = resolve(HeroConfig::defaults_at(epoch()), overrides);

    assert_eq!(
        resolved,
        HeroConfig {
            badge: "Beta in".into(),
            title: "Ship".into(),
            title_highlight: "faster".into(),
            subtitle: "Sub".into(),
            primary_cta: "Go".into(),
            secondary_cta: "Look".into(),
            primary_cta_href: "https://example.com/go".into(),
            secondary_cta_href: "/look".into(),
            feature1_icon: "shield".into(),
            feature1_text: "One".into(),
            feature2_icon: "globe".into(),
            feature2_text: "Two".into(),
            feature3_icon: "zap".into(),
            feature3_text: "Three".into(),
            trusted_by_text: "Loved".into(),
            show_trusted_logos: false,
            background_pattern: BackgroundPattern::Grid,
            show_animated_badge: false,
            launch_date: Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap(),
            typed_strings: vec!["x".to_string()],
        }
    );
}

#[test]
fn test_partial_override_keeps_the_rest() {
    let overrides = HeroOverrides::from_toml_str(r#"secondary_cta = "Book a call""#).unwrap();
    let defaults = HeroConfig::defaults_at(epoch());

    let resolved = resolve(defaults.clone(), overrides);

    assert_eq!(resolved.secondary_cta, "Book a call");
    assert_eq!(
        HeroConfig {
            secondary_cta: defaults.secondary_cta.clone(),
            ..resolved
        },
        defaults
    );
}

// ============================================================================
// COUNTDOWN
// ============================================================================

#[test]
fn test_two_days_three_hours_out() {
    let mut config = HeroConfig::defaults_at(epoch());
    config.launch_date = epoch() + ChronoDuration::days(2) + ChronoDuration::hours(3);

    let section = mount(config);
    let breakdown = section.countdown().breakdown;

    assert_eq!((breakdown.days, breakdown.hours, breakdown.minutes, breakdown.seconds), (2, 3, 0, 0));
    assert_eq!(section.countdown_label(), "2d 3h 0m 0s");
}

#[test]
fn test_countdown_never_increases_and_completes_once() {
    let target = epoch() + ChronoDuration::seconds(5);
    let mut timer = CountdownTimer::new(target);

    let mut previous = u64::MAX;
    let mut completions = 0;
    // 1500 after 3000 is the wall clock stepping backwards.
    for offset_ms in [0i64, 900, 2100, 3000, 1500, 4200, 5000, 6000, 7000] {
        if timer.recompute(epoch() + ChronoDuration::milliseconds(offset_ms)) {
            completions += 1;
        }
        let remaining = timer.state().breakdown.total_secs();
        assert!(remaining <= previous);
        previous = remaining;
    }

    assert_eq!(completions, 1);
    assert!(timer.is_completed());
    assert_eq!(timer.remaining(), Duration::ZERO);
}

#[test]
fn test_countdown_runs_to_completion_in_section() {
    let mut config = HeroConfig::defaults_at(epoch());
    config.launch_date = epoch() + ChronoDuration::seconds(3);
    let mut section = mount(config);

    run_for(&mut section, Duration::from_millis(2_500));
    assert!(!section.countdown().completed);

    run_for(&mut section, Duration::from_secs(1));
    assert!(section.countdown().completed);

    let tree = section.view();
    assert!(tree.iter_dfs().any(|id| tree.get(id).and_then(|n| n.text_content()) == Some("🎉 Launched!")));
}

#[test]
fn test_past_launch_is_completed_immediately() {
    let mut config = HeroConfig::defaults_at(epoch());
    config.launch_date = epoch() - ChronoDuration::hours(1);

    let mut section = mount(config);
    assert!(section.countdown().completed);

    run_for(&mut section, Duration::from_secs(2));
    assert!(section.countdown().completed);
    assert_eq!(section.countdown().breakdown.total_secs(), 0);
}

// ============================================================================
// TYPED HEADLINE
// ============================================================================

#[test]
fn test_typed_cycle_a_then_bc_then_a() {
    let mut cycler = TypedTextCycler::new(&["A", "BC"]);
    let mut seen = vec![cycler.text()];

    while seen.len() < 64 {
        cycler.step();
        let text = cycler.text();
        if seen.last() != Some(&text) {
            seen.push(text);
        }
        if cycler.state().index == 0 && cycler.state().phase == TypedPhase::PausingFull && seen.len() > 2 {
            break;
        }
    }

    assert_eq!(seen, vec!["", "A", "", "B", "BC", "B", "", "A"]);
}

#[test]
fn test_section_types_at_human_speed() {
    let mut config = HeroConfig::defaults_at(epoch());
    config.typed_strings = vec!["Hi".into(), "Yo".into()];
    let mut section = mount(config);

    run_for(&mut section, Duration::from_millis(200));
    assert_eq!(section.typed_text(), "Hi");

    // 2s hold, then two 50ms deletes and an 80ms empty pause.
    run_for(&mut section, Duration::from_millis(2_000 + 100 + 80 + 80));
    assert_eq!(section.typed_text(), "Y");
    assert_eq!(section.typed_state().index, 1);
}

#[test]
fn test_empty_phrase_list_is_inert() {
    let mut config = HeroConfig::defaults_at(epoch());
    config.typed_strings = Vec::new();
    let mut section = mount(config);

    run_for(&mut section, Duration::from_secs(3));
    assert_eq!(section.typed_text(), "");
}

// ============================================================================
// REVEALS
// ============================================================================

#[test]
fn test_reveals_fire_in_delay_order_and_stay() {
    let mut section = mount(HeroConfig::defaults_at(epoch()));
    let targets: Vec<_> = section.reveal().steps().iter().map(|s| (s.target, s.delay)).collect();

    let mut revealed_at = Vec::new();
    for frame in 0..200u32 {
        run_for(&mut section, FRAME);
        for &(target, _) in &targets {
            let visible = section.reveal().visibility(target) == Some(Visibility::Visible);
            let known = revealed_at.iter().any(|&(t, _)| t == target);
            if visible && !known {
                revealed_at.push((target, frame));
            }
            if known {
                assert!(visible, "{target:?} went hidden again");
            }
        }
    }

    assert_eq!(revealed_at.len(), targets.len());
    let frame_of = |target| revealed_at.iter().find(|&&(t, _)| t == target).unwrap().1;
    for &(a, delay_a) in &targets {
        for &(b, delay_b) in &targets {
            if delay_a < delay_b {
                assert!(frame_of(a) <= frame_of(b), "{a:?} after {b:?}");
            }
        }
    }
}

#[test]
fn test_hidden_regions_have_no_nodes() {
    let mut config = HeroConfig::defaults_at(epoch());
    config.show_trusted_logos = false;
    config.show_animated_badge = false;
    let section = mount(config);
    let tree = section.view();

    assert!(tree.find(tags::TRUSTED_BY_TEXT).is_none());
    assert!(tree.find(tags::BADGE).is_none());
    assert_eq!(section.reveal().visibility(RevealTarget::TrustLogo(1)), None);
}

// ============================================================================
// PARALLAX
// ============================================================================

#[test]
fn test_parallax_converges_without_oscillating_forever() {
    let mut section = mount(HeroConfig::defaults_at(epoch()));
    section.set_container(Some(Rect::new(100.0, 50.0, 1200.0, 700.0)));

    // Center is (700, 400); raw target is (-30, 15).
    section.pointer_move(400.0, 550.0);
    run_for(&mut section, Duration::from_secs(2));

    let offset = section.parallax_offset();
    assert!((offset.dx + 30.0).abs() < 0.05);
    assert!((offset.dy - 15.0).abs() < 0.05);

    run_for(&mut section, FRAME);
    assert_eq!(section.parallax_offset(), offset);
}

#[test]
fn test_orbs_and_pills_follow_parallax() {
    let mut section = mount(HeroConfig::defaults_at(epoch()));
    section.set_container(Some(Rect::new(0.0, 0.0, 1000.0, 1000.0)));
    section.pointer_move(1000.0, 500.0);
    run_for(&mut section, Duration::from_secs(3));

    let tree = section.view();
    let layer = |name: &'static str| {
        tree.iter_dfs()
            .filter_map(|id| tree.get(id))
            .find(|n| n.kind == NodeKind::Layer(name))
            .map(|n| n.visual)
            .unwrap()
    };

    let primary = layer("orb-primary");
    let accent = layer("orb-accent");
    assert!((primary.offset.0 - 50.0).abs() < 0.1);
    assert!((primary.scale - 1.0).abs() < f32::EPSILON);
    // The accent orb shares the offset and is drawn smaller.
    assert!((accent.offset.0 - 50.0).abs() < 0.1);
    assert!(accent.offset.1.abs() < 0.1);
    assert!((accent.scale - 0.8).abs() < f32::EPSILON);

    let (pill_text, _) = tree.find(tags::FEATURE_TEXTS[0]).unwrap();
    let pill = tree.get(tree.parent(pill_text).unwrap()).unwrap();
    assert!((pill.visual.offset.0 - 50.0).abs() < 0.1);
}

#[test]
fn test_pointer_without_container_is_ignored() {
    let mut section = mount(HeroConfig::defaults_at(epoch()));
    section.pointer_move(10.0, 10.0);
    run_for(&mut section, Duration::from_secs(1));

    assert_eq!(section.parallax_offset().as_tuple(), (0.0, 0.0));
}

// ============================================================================
// CTAS AND TEARDOWN
// ============================================================================

#[test]
fn test_cta_forwards_configured_destination() {
    let overrides = HeroOverrides::from_toml_str(r#"secondary_cta_href = "https://example.com/tour""#).unwrap();
    let section = mount(resolve(HeroConfig::defaults_at(epoch()), overrides));
    let (navigator, requests) = ChannelNavigator::new(ChannelNavigator::DEFAULT_CAPACITY);

    section.activate_cta(CtaSlot::Primary, &mut navigator.for_slot(CtaSlot::Primary));
    section.activate_cta(CtaSlot::Secondary, &mut navigator.for_slot(CtaSlot::Secondary));

    let received: Vec<NavigationRequest> = requests.try_iter().collect();
    assert_eq!(
        received,
        vec![
            NavigationRequest {
                destination: "/signup".into(),
                source: Some(CtaSlot::Primary),
            },
            NavigationRequest {
                destination: "https://example.com/tour".into(),
                source: Some(CtaSlot::Secondary),
            },
        ]
    );

    let tree = section.view();
    let (_, secondary) = tree.find(tags::SECONDARY_CTA).unwrap();
    assert!(matches!(
        &secondary.kind,
        NodeKind::Link { destination, destination_tag, .. }
            if destination == "https://example.com/tour" && *destination_tag == tags::SECONDARY_CTA_HREF
    ));
}

#[test]
fn test_nothing_fires_after_teardown() {
    let mut section = mount(HeroConfig::defaults_at(epoch()));
    run_for(&mut section, Duration::from_millis(500));

    let typed = section.typed_state();
    let countdown = section.countdown();
    section.teardown();
    assert_eq!(section.pending_timers(), 0);

    section.pointer_move(5.0, 5.0);
    section.scroll(1.0);
    section.tick(Duration::from_secs(30), epoch() + ChronoDuration::seconds(30));

    assert_eq!(section.typed_state(), typed);
    assert_eq!(section.countdown(), countdown);
    assert_eq!(section.reveal().visibility(RevealTarget::TrustLogo(5)), Some(Visibility::Hidden));
    assert!((section.content_visual().opacity - 1.0).abs() < f32::EPSILON);

    let (navigator, requests) = ChannelNavigator::new(1);
    section.activate_cta(CtaSlot::Primary, &mut navigator.for_slot(CtaSlot::Primary));
    assert!(requests.is_empty());
}

#[test]
fn test_typed_phase_is_typing_at_mount() {
    let section = mount(HeroConfig::defaults_at(epoch()));
    assert_eq!(section.typed_state().phase, TypedPhase::Typing);
    assert_eq!(section.typed_state().shown, 0);
}
