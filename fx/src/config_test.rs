#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Presets
// =============================================================

#[test]
fn default_is_refined() {
    assert_eq!(SiteConfig::default(), SiteConfig::refined());
}

#[test]
fn both_presets_validate() {
    assert!(SiteConfig::classic().validate().is_ok());
    assert!(SiteConfig::refined().validate().is_ok());
}

#[test]
fn classic_preset_matches_first_revision() {
    let config = SiteConfig::classic();
    assert_eq!(config.floating.count, 15);
    assert_eq!(config.timings.text_fade_ms, 150);
    assert!(config.ambient.is_none());
    assert!(!config.nav_reveal);
    assert!(config.locales.values().all(|t| t.slogan.is_none()));
    assert_eq!(config.triggers.primary.message, "正在启动... ✨");
    assert_eq!(config.triggers.secondary.message, "更多信息即将到来 🚀");
}

#[test]
fn refined_preset_matches_second_revision() {
    let config = SiteConfig::refined();
    assert_eq!(config.floating.count, 8);
    assert_eq!(config.timings.text_fade_ms, 300);
    assert!(config.ambient.is_some());
    assert!(config.nav_reveal);
    assert!(config.locales.values().all(|t| t.subtitle.contains("<br>")));
    assert_eq!(config.triggers.primary.category, Category::Success);
    assert_eq!(config.triggers.secondary.category, Category::Info);
}

#[test]
fn toast_timing_comes_from_timings() {
    let timing = Timings::default().toast();
    assert_eq!(timing.enter, Duration::from_millis(10));
    assert_eq!(timing.display, Duration::from_millis(3000));
    assert_eq!(timing.exit, Duration::from_millis(500));
}

#[test]
fn default_text_is_default_locale_entry() {
    let config = SiteConfig::refined();
    assert_eq!(config.default_text().map(|t| t.title.as_str()), Some("欢迎"));
}

// =============================================================
// JSON overrides
// =============================================================

#[test]
fn empty_json_is_refined_preset() {
    let config = SiteConfig::from_json("{}");
    assert!(config.is_ok_and(|c| c == SiteConfig::refined()));
}

#[test]
fn partial_nested_override_keeps_other_fields() {
    let config = SiteConfig::from_json(r#"{ "timings": { "ripple_ms": 900 }, "nav_reveal": false }"#);
    let Ok(config) = config else {
        panic!("override rejected");
    };
    assert_eq!(config.timings.ripple_ms, 900);
    assert_eq!(config.timings.toast_display_ms, 3000);
    assert!(!config.nav_reveal);
    assert_eq!(config.floating.count, 8);
}

#[test]
fn ambient_null_disables_idle_motion() {
    let config = SiteConfig::from_json(r#"{ "ambient": null }"#);
    assert!(config.is_ok_and(|c| c.ambient.is_none()));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(SiteConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
}

#[test]
fn partial_locale_table_is_rejected() {
    let raw = r#"{
        "locales": {
            "zh": { "title": "欢迎", "subtitle": "s", "primary": "p", "secondary": "s" }
        }
    }"#;
    assert!(matches!(SiteConfig::from_json(raw), Err(ConfigError::MissingLocale(Locale::Ja))));
}

#[test]
fn unknown_locale_key_is_a_parse_error() {
    let raw = r#"{ "locales": { "fr": { "title": "t", "subtitle": "s", "primary": "p", "secondary": "s" } } }"#;
    assert!(matches!(SiteConfig::from_json(raw), Err(ConfigError::Parse(_))));
}

// =============================================================
// validate
// =============================================================

#[test]
fn zero_durations_are_rejected() {
    let mut config = SiteConfig::refined();
    config.timings.toast_display_ms = 0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidDuration("toast_display_ms"))));
}

#[test]
fn negative_ranges_are_rejected() {
    let mut config = SiteConfig::refined();
    config.floating.duration_span_s = -1.0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange("floating.duration"))));

    let mut config = SiteConfig::refined();
    config.floating.delay_max_s = f64::NAN;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange("floating.delay_max_s"))));

    let mut config = SiteConfig::refined();
    config.floating.delay_max_s = -0.5;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange("floating.delay_max_s"))));

    let mut config = SiteConfig::refined();
    config.floating.duration_min_s = f64::NAN;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange("floating.duration"))));

    let mut config = SiteConfig::refined();
    config.floating.duration_min_s = 0.0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange("floating.duration"))));
}

#[test]
fn zero_rate_cycle_is_rejected() {
    let mut config = SiteConfig::refined();
    config.parallax.rate_cycle = 0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange("parallax.rate_cycle"))));
}
