//! # Hero Configuration
//!
//! A [`HeroConfig`] is always complete. Callers describe only what they want
//! to change with a [`HeroOverrides`], and [`resolve`] fills every other
//! field from the defaults.
//!
//! Nothing is validated here. An empty typed-string list or a launch date in
//! the past are legal, and the components downstream cope with them.

use std::path::Path;

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use serde::Deserialize;

use crate::error::{HeroError, HeroResult};

/// Decorative background drawn behind the hero content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundPattern {
    /// Faint dot lattice.
    #[default]
    Dots,
    /// Thin grid lines.
    Grid,
    /// Diagonal color wash.
    Gradient,
}

impl BackgroundPattern {
    /// Name of the decorative layer the host draws for this pattern.
    #[must_use]
    pub const fn layer_name(self) -> &'static str {
        match self {
            Self::Dots => "pattern-dots",
            Self::Grid => "pattern-grid",
            Self::Gradient => "pattern-gradient",
        }
    }
}

/// Icon shown on a feature pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    /// Lightning bolt.
    Zap,
    /// Shield.
    Shield,
    /// Globe.
    Globe,
    /// Sparkles, used for any selector we don't know.
    Sparkles,
}

impl FeatureIcon {
    /// Maps a configured selector to an icon.
    #[must_use]
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "zap" => Self::Zap,
            "shield" => Self::Shield,
            "globe" => Self::Globe,
            _ => Self::Sparkles,
        }
    }

    /// Icon name passed to the host's icon renderer.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zap => "zap",
            Self::Shield => "shield",
            Self::Globe => "globe",
            Self::Sparkles => "sparkles",
        }
    }
}

/// How far ahead the default launch date sits.
pub const DEFAULT_LAUNCH_LEAD_DAYS: i64 = 30;

/// Complete hero configuration for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroConfig {
    /// Text in front of the countdown.
    pub badge: String,
    /// Static part of the headline.
    pub title: String,
    /// Highlighted headline phrase.
    pub title_highlight: String,
    /// Paragraph under the headline.
    pub subtitle: String,
    /// Primary call-to-action label.
    pub primary_cta: String,
    /// Secondary call-to-action label.
    pub secondary_cta: String,
    /// Primary call-to-action destination.
    pub primary_cta_href: String,
    /// Secondary call-to-action destination.
    pub secondary_cta_href: String,
    /// First feature icon selector.
    pub feature1_icon: String,
    /// First feature text.
    pub feature1_text: String,
    /// Second feature icon selector.
    pub feature2_icon: String,
    /// Second feature text.
    pub feature2_text: String,
    /// Third feature icon selector.
    pub feature3_icon: String,
    /// Third feature text.
    pub feature3_text: String,
    /// Caption above the logo strip.
    pub trusted_by_text: String,
    /// Show the trusted-by strip.
    pub show_trusted_logos: bool,
    /// Background decoration.
    pub background_pattern: BackgroundPattern,
    /// Show the animated badge with the countdown.
    pub show_animated_badge: bool,
    /// Instant the countdown runs to.
    pub launch_date: DateTime<Utc>,
    /// Phrases cycled by the typed headline.
    pub typed_strings: Vec<String>,
}

impl HeroConfig {
    /// Builds the default configuration, with the launch date measured from `now`.
    #[must_use]
    pub fn defaults_at(now: DateTime<Utc>) -> Self {
        Self {
            badge: "🚀 Product Launch in".into(),
            title: "Build the future of".into(),
            title_highlight: "AI-powered SaaS".into(),
            subtitle: "TechFlow empowers startups to build, deploy, and scale revolutionary AI \
                       applications with enterprise-grade infrastructure and lightning-fast \
                       development tools."
                .into(),
            primary_cta: "Start Free Trial".into(),
            secondary_cta: "Watch Demo".into(),
            primary_cta_href: "/signup".into(),
            secondary_cta_href: "/demo".into(),
            feature1_icon: "zap".into(),
            feature1_text: "Deploy in seconds".into(),
            feature2_icon: "shield".into(),
            feature2_text: "Enterprise security".into(),
            feature3_icon: "globe".into(),
            feature3_text: "Global CDN".into(),
            trusted_by_text: "Trusted by 500+ innovative startups".into(),
            show_trusted_logos: true,
            background_pattern: BackgroundPattern::Dots,
            show_animated_badge: true,
            launch_date: now + ChronoDuration::days(DEFAULT_LAUNCH_LEAD_DAYS),
            typed_strings: vec![
                "AI-powered SaaS".into(),
                "next-gen platforms".into(),
                "scalable solutions".into(),
                "intelligent systems".into(),
            ],
        }
    }

    /// Returns the three feature pills as (icon, text) pairs, in display order.
    #[must_use]
    pub fn features(&self) -> [(FeatureIcon, &str); 3] {
        [
            (FeatureIcon::from_selector(&self.feature1_icon), self.feature1_text.as_str()),
            (FeatureIcon::from_selector(&self.feature2_icon), self.feature2_text.as_str()),
            (FeatureIcon::from_selector(&self.feature3_icon), self.feature3_text.as_str()),
        ]
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self::defaults_at(Utc::now())
    }
}

/// Partial configuration. Every field is optional; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct HeroOverrides {
    pub badge: Option<String>,
    pub title: Option<String>,
    pub title_highlight: Option<String>,
    pub subtitle: Option<String>,
    pub primary_cta: Option<String>,
    pub secondary_cta: Option<String>,
    pub primary_cta_href: Option<String>,
    pub secondary_cta_href: Option<String>,
    pub feature1_icon: Option<String>,
    pub feature1_text: Option<String>,
    pub feature2_icon: Option<String>,
    pub feature2_text: Option<String>,
    pub feature3_icon: Option<String>,
    pub feature3_text: Option<String>,
    pub trusted_by_text: Option<String>,
    pub show_trusted_logos: Option<bool>,
    pub background_pattern: Option<BackgroundPattern>,
    pub show_animated_badge: Option<bool>,
    pub launch_date: Option<DateTime<Utc>>,
    pub typed_strings: Option<Vec<String>>,
}

impl HeroOverrides {
    /// Parses overrides from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`HeroError::ConfigParse`] if the document is malformed or a
    /// recognized key has the wrong type.
    pub fn from_toml_str(source: &str) -> HeroResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses an overrides file.
    ///
    /// # Errors
    ///
    /// Returns [`HeroError::ConfigRead`] if the file cannot be read, or
    /// [`HeroError::ConfigParse`] if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> HeroResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| HeroError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

/// Merges overrides onto defaults. Set fields win; unset fields keep the default.
#[must_use]
pub fn resolve(defaults: HeroConfig, overrides: HeroOverrides) -> HeroConfig {
    HeroConfig {
        badge: overrides.badge.unwrap_or(defaults.badge),
        title: overrides.title.unwrap_or(defaults.title),
        title_highlight: overrides.title_highlight.unwrap_or(defaults.title_highlight),
        subtitle: overrides.subtitle.unwrap_or(defaults.subtitle),
        primary_cta: overrides.primary_cta.unwrap_or(defaults.primary_cta),
        secondary_cta: overrides.secondary_cta.unwrap_or(defaults.secondary_cta),
        primary_cta_href: overrides.primary_cta_href.unwrap_or(defaults.primary_cta_href),
        secondary_cta_href: overrides.secondary_cta_href.unwrap_or(defaults.secondary_cta_href),
        feature1_icon: overrides.feature1_icon.unwrap_or(defaults.feature1_icon),
        feature1_text: overrides.feature1_text.unwrap_or(defaults.feature1_text),
        feature2_icon: overrides.feature2_icon.unwrap_or(defaults.feature2_icon),
        feature2_text: overrides.feature2_text.unwrap_or(defaults.feature2_text),
        feature3_icon: overrides.feature3_icon.unwrap_or(defaults.feature3_icon),
        feature3_text: overrides.feature3_text.unwrap_or(defaults.feature3_text),
        trusted_by_text: overrides.trusted_by_text.unwrap_or(defaults.trusted_by_text),
        show_trusted_logos: overrides.show_trusted_logos.unwrap_or(defaults.show_trusted_logos),
        background_pattern: overrides.background_pattern.unwrap_or(defaults.background_pattern),
        show_animated_badge: overrides.show_animated_badge.unwrap_or(defaults.show_animated_badge),
        launch_date: overrides.launch_date.unwrap_or(defaults.launch_date),
        typed_strings: overrides.typed_strings.unwrap_or(defaults.typed_strings),
    }
}
