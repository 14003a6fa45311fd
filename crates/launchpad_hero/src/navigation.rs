//! # CTA Navigation
//!
//! Activating a call to action hands its destination to a [`Navigator`].
//! Whether that is an in-app route or an external redirect is the
//! navigator's business, not the hero's.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use launchpad_ui::Tag;

use crate::config::HeroConfig;
use crate::tags;

/// Which call to action was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CtaSlot {
    /// Main button.
    Primary,
    /// Outline button.
    Secondary,
}

impl CtaSlot {
    /// Destination configured for this slot.
    #[must_use]
    pub fn destination(self, config: &HeroConfig) -> &str {
        match self {
            Self::Primary => &config.primary_cta_href,
            Self::Secondary => &config.secondary_cta_href,
        }
    }

    /// Label configured for this slot.
    #[must_use]
    pub fn label(self, config: &HeroConfig) -> &str {
        match self {
            Self::Primary => &config.primary_cta,
            Self::Secondary => &config.secondary_cta,
        }
    }

    /// Tag of the label region.
    #[must_use]
    pub const fn label_tag(self) -> Tag {
        match self {
            Self::Primary => tags::PRIMARY_CTA,
            Self::Secondary => tags::SECONDARY_CTA,
        }
    }

    /// Tag of the configuration field that supplies the destination.
    #[must_use]
    pub const fn destination_tag(self) -> Tag {
        match self {
            Self::Primary => tags::PRIMARY_CTA_HREF,
            Self::Secondary => tags::SECONDARY_CTA_HREF,
        }
    }
}

/// External navigation resolver.
pub trait Navigator {
    /// Navigates to `destination`. The hero does not look at the outcome.
    fn resolve(&mut self, destination: &str);
}

/// A navigation request forwarded to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Where to go.
    pub destination: String,
    /// Which CTA asked.
    pub source: Option<CtaSlot>,
}

/// Navigator that forwards requests over a bounded channel.
///
/// The host drains the receiver and decides how to route each request.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    sender: Sender<NavigationRequest>,
    source: Option<CtaSlot>,
}

impl ChannelNavigator {
    /// Default channel capacity.
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Creates a navigator and the receiver the host should drain.
    #[must_use]
    pub fn new(capacity: usize) -> (Self, Receiver<NavigationRequest>) {
        let (sender, receiver) = bounded(capacity);
        (Self { sender, source: None }, receiver)
    }

    /// Returns a navigator that stamps requests with `slot`.
    #[must_use]
    pub fn for_slot(&self, slot: CtaSlot) -> Self {
        Self {
            sender: self.sender.clone(),
            source: Some(slot),
        }
    }
}

impl Navigator for ChannelNavigator {
    fn resolve(&mut self, destination: &str) {
        let request = NavigationRequest {
            destination: destination.to_string(),
            source: self.source,
        };
        match self.sender.try_send(request) {
            Ok(()) => {}
            Err(TrySendError::Full(request)) => {
                tracing::warn!(destination = %request.destination, "navigation queue full, request dropped");
            }
            Err(TrySendError::Disconnected(request)) => {
                tracing::warn!(destination = %request.destination, "navigation host gone, request dropped");
            }
        }
    }
}
