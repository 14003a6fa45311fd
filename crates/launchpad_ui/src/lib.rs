//! # LAUNCHPAD UI
//!
//! Headless presentation primitives for landing-page sections:
//! - Pointer and scroll input state
//! - Tweens, looping keyframe tracks and a discrete-time damped spring
//! - A visual node tree with stable editable tags
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                     UI PIPELINE                        │
//! ├────────────────────────────────────────────────────────┤
//! │  Input Events → Section State → View Tree → Host Draw  │
//! │       ↓               ↓              ↓                 │
//! │  Pointer/Scroll   tick(dt)      Tags + Visuals         │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Philosophy
//!
//! Nothing here owns a clock or a frame loop. Every animated value is
//! advanced by an explicit time delta, so the same inputs always produce the
//! same frames.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod input;
pub mod layout;
pub mod style;
pub mod view;

pub use animation::{Animation, Animation2D, Easing, Keyframes, Spring, Spring2D, SpringConfig};
pub use input::{PointerState, ScrollState};
pub use layout::Rect;
pub use style::Color;
pub use view::{NodeId, NodeKind, Tag, ViewNode, ViewTree, Visual};
