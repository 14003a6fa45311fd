//! # LAUNCHPAD HERO
//!
//! Orchestration for the landing-page hero section. A mounted
//! [`HeroSection`] runs several independent time-driven processes over one
//! resolved [`HeroConfig`]:
//!
//! - Pointer parallax on the background orbs and feature pills
//! - A typed headline cycling through phrases
//! - A countdown to the launch date
//! - Staggered entrance reveals
//!
//! The particle field and CTA navigation belong to collaborators behind the
//! [`ParticleBackdrop`] and [`Navigator`] traits.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        HERO SECTION                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  defaults + overrides ──► resolve() ──► HeroConfig           │
//! │                                             │                │
//! │                               mount ◄───────┘                │
//! │        ┌───────────┬──────────┬─────────┴──┬─────────────┐   │
//! │   Parallax    TypedText   Countdown    RevealSeq    Backdrop │
//! │        └───────────┴────┬─────┴────────────┘                 │
//! │                    Scheduler (virtual time, tick(dt))        │
//! │                         │                                    │
//! │                    view() ──► ViewTree (tags + visuals)      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//!
//! Every process is advanced by [`HeroSection::tick`]; the only wall-clock
//! input is the `now` handed to the countdown. [`driver::run`] supplies real
//! time on a tokio interval; tests supply their own.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod countdown;
pub mod driver;
pub mod error;
pub mod navigation;
pub mod ornaments;
pub mod parallax;
pub mod particles;
pub mod reveal;
pub mod scheduler;
pub mod section;
pub mod tags;
pub mod typed;

pub use config::{resolve, BackgroundPattern, FeatureIcon, HeroConfig, HeroOverrides};
pub use countdown::{CountdownBreakdown, CountdownState, CountdownTimer};
pub use error::{HeroError, HeroResult};
pub use navigation::{ChannelNavigator, CtaSlot, NavigationRequest, Navigator};
pub use parallax::{ParallaxOffset, PointerParallax};
pub use particles::{LoggingBackdrop, ParticleBackdrop, ParticleOptions};
pub use reveal::{RevealSequencer, RevealTarget, Visibility};
pub use scheduler::Scheduler;
pub use section::HeroSection;
pub use typed::{TypedCycleState, TypedPhase, TypedTextCycler};
