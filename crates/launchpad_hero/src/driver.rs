//! # Frame Driver
//!
//! Runs a mounted section on a tokio interval until the host asks it to
//! stop. Each frame passes the real elapsed time and the wall clock to
//! [`HeroSection::tick`].

use std::time::Duration;

use chrono::Utc;
use tokio::sync::oneshot;
use tokio::time::{interval, MissedTickBehavior};

use crate::section::HeroSection;

/// Default frame interval (60 Hz).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Ticks `section` every `frame_interval` until `shutdown` resolves or its
/// sender is dropped, then tears the section down and returns it.
pub async fn run(
    mut section: HeroSection,
    frame_interval: Duration,
    mut shutdown: oneshot::Receiver<()>,
) -> HeroSection {
    let mut frames = interval(frame_interval.max(Duration::from_millis(1)));
    frames.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tracing::debug!(interval = ?frame_interval, "frame driver started");
    // The first interval tick completes immediately.
    let mut last = frames.tick().await;
    let mut ticks: u64 = 0;

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            at = frames.tick() => {
                let dt = at.saturating_duration_since(last);
                last = at;
                section.tick(dt, Utc::now());
                ticks += 1;
            }
        }
    }

    tracing::debug!(ticks, elapsed = ?section.elapsed(), "frame driver stopped");
    section.teardown();
    section
}
