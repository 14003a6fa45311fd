//! Editable-region tags. Hosts look these up in the view tree.

use launchpad_ui::Tag;

/// Whole section.
pub const HERO: Tag = Tag("hero");
/// Badge text.
pub const BADGE: Tag = Tag("badge");
/// Static headline text.
pub const TITLE: Tag = Tag("title");
/// Subtitle paragraph.
pub const SUBTITLE: Tag = Tag("subtitle");
/// Feature pill texts, in display order.
pub const FEATURE_TEXTS: [Tag; 3] = [Tag("feature1Text"), Tag("feature2Text"), Tag("feature3Text")];
/// Primary CTA label.
pub const PRIMARY_CTA: Tag = Tag("primaryCTA");
/// Secondary CTA label.
pub const SECONDARY_CTA: Tag = Tag("secondaryCTA");
/// Primary CTA destination field.
pub const PRIMARY_CTA_HREF: Tag = Tag("primaryCTAHref");
/// Secondary CTA destination field.
pub const SECONDARY_CTA_HREF: Tag = Tag("secondaryCTAHref");
/// Trusted-by caption.
pub const TRUSTED_BY_TEXT: Tag = Tag("trustedByText");
