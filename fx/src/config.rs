//! Site configuration: copy, trigger messages, timings and effect tuning.
//!
//! DESIGN
//! ======
//! Everything a designer might retune lives here as plain data, built once
//! and shared read-only by every behavior. Two presets reproduce the two
//! published revisions of the page: [`SiteConfig::classic`] (fifteen
//! floaters, quick fades, no idle motion) and [`SiteConfig::refined`]
//! (slogans, line-broken subtitles, idle motion, nav reveal). A JSON document
//! can override any subset of the refined preset through
//! [`SiteConfig::from_json`].

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::locale::{Locale, LocaleTable, LocaleText};
use crate::toast::{Category, ToastTiming, Trigger};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Rejected configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("locale `{0}` has no entry in the locale table")]
    MissingLocale(Locale),
    #[error("duration `{0}` must be greater than zero")]
    InvalidDuration(&'static str),
    #[error("range `{0}` is empty or negative")]
    InvalidRange(&'static str),
}

/// Messages raised by the two hero action buttons.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triggers {
    pub primary: Trigger,
    pub secondary: Trigger,
}

/// Fixed delays, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Fade-out time before a locale slot's content is swapped.
    pub text_fade_ms: u64,
    /// How long the theme transition hint stays on the root.
    pub theme_transition_ms: u64,
    pub toast_enter_ms: u64,
    pub toast_display_ms: u64,
    pub toast_exit_ms: u64,
    pub ripple_ms: u64,
    pub nav_hide_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            text_fade_ms: 300,
            theme_transition_ms: 500,
            toast_enter_ms: 10,
            toast_display_ms: 3000,
            toast_exit_ms: 500,
            ripple_ms: 600,
            nav_hide_ms: 500,
        }
    }
}

impl Timings {
    #[must_use]
    pub fn text_fade(&self) -> Duration {
        Duration::from_millis(self.text_fade_ms)
    }

    #[must_use]
    pub fn theme_transition(&self) -> Duration {
        Duration::from_millis(self.theme_transition_ms)
    }

    #[must_use]
    pub fn ripple(&self) -> Duration {
        Duration::from_millis(self.ripple_ms)
    }

    #[must_use]
    pub fn nav_hide(&self) -> Duration {
        Duration::from_millis(self.nav_hide_ms)
    }

    #[must_use]
    pub fn toast(&self) -> ToastTiming {
        ToastTiming {
            enter: Duration::from_millis(self.toast_enter_ms),
            display: Duration::from_millis(self.toast_display_ms),
            exit: Duration::from_millis(self.toast_exit_ms),
        }
    }
}

/// Floating decoration spawn parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingConfig {
    pub count: usize,
    /// Animation start delay is drawn from `[0, delay_max_s)`.
    pub delay_max_s: f64,
    /// Animation duration is drawn from `[duration_min_s, duration_min_s + duration_span_s)`.
    pub duration_min_s: f64,
    pub duration_span_s: f64,
}

impl Default for FloatingConfig {
    fn default() -> Self {
        Self { count: 8, delay_max_s: 6.0, duration_min_s: 4.0, duration_span_s: 4.0 }
    }
}

/// Scroll parallax coefficients.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Background translation per scrolled pixel.
    pub background_rate: f64,
    /// Floater translation per scrolled pixel for index 0 of each cycle.
    pub element_base_rate: f64,
    /// Extra translation rate per position within the cycle.
    pub element_rate_step: f64,
    /// Floaters cycle through this many speeds by index.
    pub rate_cycle: usize,
    /// Floater rotation, in degrees per scrolled pixel.
    pub rotation_rate: f64,
    /// Recompute at most once per animation frame instead of per event.
    pub coalesce_frames: bool,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            background_rate: 0.5,
            element_base_rate: 0.2,
            element_rate_step: 0.1,
            rate_cycle: 3,
            rotation_rate: 0.1,
            coalesce_frames: false,
        }
    }
}

/// Idle breathing (hero background) and wave (hero title) motion.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientConfig {
    pub breath_step: f64,
    pub breath_scale: f64,
    pub breath_opacity_base: f64,
    pub breath_opacity_swing: f64,
    pub wave_step: f64,
    pub wave_amplitude_px: f64,
    pub wave_delay_ms: u64,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            breath_step: 0.01,
            breath_scale: 0.05,
            breath_opacity_base: 0.8,
            breath_opacity_swing: 0.2,
            wave_step: 0.02,
            wave_amplitude_px: 5.0,
            wave_delay_ms: 3000,
        }
    }
}

impl AmbientConfig {
    #[must_use]
    pub fn wave_delay(&self) -> Duration {
        Duration::from_millis(self.wave_delay_ms)
    }
}

/// Complete configuration for one page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Locale shown when no control is pre-marked active.
    pub default_locale: Locale,
    pub locales: LocaleTable,
    pub triggers: Triggers,
    pub timings: Timings,
    pub floating: FloatingConfig,
    pub parallax: ParallaxConfig,
    /// Idle motion; `None` disables both loops.
    pub ambient: Option<AmbientConfig>,
    /// Reveal nav controls on hover instead of showing them permanently.
    pub nav_reveal: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::refined()
    }
}

impl SiteConfig {
    /// The first revision of the page.
    #[must_use]
    pub fn classic() -> Self {
        let locales = BTreeMap::from([
            (Locale::Zh, text("欢迎", None, "简洁、优雅的体验", "开始使用", "了解更多")),
            (Locale::Ja, text("ようこそ", None, "美しく、ミニマルな体験", "始める", "もっと見る")),
            (Locale::En, text("Welcome", None, "A beautiful, minimalist experience", "Get Started", "Learn More")),
        ]);
        Self {
            default_locale: Locale::Zh,
            locales,
            triggers: Triggers {
                primary: trigger("正在启动... ✨", Category::Success),
                secondary: trigger("更多信息即将到来 🚀", Category::Info),
            },
            timings: Timings { text_fade_ms: 150, ..Timings::default() },
            floating: FloatingConfig { count: 15, ..FloatingConfig::default() },
            parallax: ParallaxConfig::default(),
            ambient: None,
            nav_reveal: false,
        }
    }

    /// The second revision of the page.
    #[must_use]
    pub fn refined() -> Self {
        let locales = BTreeMap::from([
            (
                Locale::Zh,
                text("欢迎", Some("探索无限可能"), "简洁、优雅的体验<br>为你而设计", "开始使用", "了解更多"),
            ),
            (
                Locale::Ja,
                text(
                    "ようこそ",
                    Some("無限の可能性を探る"),
                    "美しく、ミニマルな体験<br>あなたのためにデザイン",
                    "始める",
                    "もっと見る",
                ),
            ),
            (
                Locale::En,
                text(
                    "Welcome",
                    Some("Explore endless possibilities"),
                    "A beautiful, minimalist experience<br>designed for you",
                    "Get Started",
                    "Learn More",
                ),
            ),
        ]);
        Self {
            default_locale: Locale::Zh,
            locales,
            triggers: Triggers {
                primary: trigger("欢迎开始您的旅程 ✨", Category::Success),
                secondary: trigger("探索更多精彩内容 🌟", Category::Info),
            },
            timings: Timings::default(),
            floating: FloatingConfig::default(),
            parallax: ParallaxConfig::default(),
            ambient: Some(AmbientConfig::default()),
            nav_reveal: true,
        }
    }

    /// Parse a JSON override of the refined preset and validate it.
    ///
    /// Top-level keys that are absent keep their preset value; a `locales`
    /// key replaces the whole table.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str::<Self>(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field invariants the type system cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for locale in Locale::ALL {
            if !self.locales.contains_key(&locale) {
                return Err(ConfigError::MissingLocale(locale));
            }
        }
        if !self.locales.contains_key(&self.default_locale) {
            return Err(ConfigError::MissingLocale(self.default_locale));
        }

        let t = &self.timings;
        for (name, value) in [
            ("toast_display_ms", t.toast_display_ms),
            ("toast_exit_ms", t.toast_exit_ms),
            ("ripple_ms", t.ripple_ms),
            ("nav_hide_ms", t.nav_hide_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidDuration(name));
            }
        }

        let f = &self.floating;
        if f.delay_max_s.is_nan() || f.delay_max_s < 0.0 {
            return Err(ConfigError::InvalidRange("floating.delay_max_s"));
        }
        let bad_min = f.duration_min_s.is_nan() || f.duration_min_s <= 0.0;
        let bad_span = f.duration_span_s.is_nan() || f.duration_span_s < 0.0;
        if bad_min || bad_span {
            return Err(ConfigError::InvalidRange("floating.duration"));
        }
        if self.parallax.rate_cycle == 0 {
            return Err(ConfigError::InvalidRange("parallax.rate_cycle"));
        }
        Ok(())
    }

    /// Strings for the default locale.
    #[must_use]
    pub fn default_text(&self) -> Option<&LocaleText> {
        self.locales.get(&self.default_locale)
    }
}

fn text(title: &str, slogan: Option<&str>, subtitle: &str, primary: &str, secondary: &str) -> LocaleText {
    LocaleText {
        title: title.to_owned(),
        slogan: slogan.map(str::to_owned),
        subtitle: subtitle.to_owned(),
        primary: primary.to_owned(),
        secondary: secondary.to_owned(),
    }
}

fn trigger(message: &str, category: Category) -> Trigger {
    Trigger { message: message.to_owned(), category }
}
