use std::rc::Rc;

use super::*;
use crate::config::SiteConfig;
use crate::dom::Element;
use crate::memory::{ManualScheduler, MemoryDocument, MemoryElement};

// =============================================================
// Helpers
// =============================================================

struct Page {
    doc: MemoryDocument,
    sched: Rc<ManualScheduler>,
    zh: MemoryElement,
    ja: MemoryElement,
    en: MemoryElement,
    title: MemoryElement,
    subtitle: MemoryElement,
    primary: MemoryElement,
}

fn lang_btn(code: &str) -> MemoryElement {
    MemoryElement::new("a").with_class("lang-btn").with_attribute("data-lang", code)
}

fn page() -> Page {
    let doc = MemoryDocument::new();
    let zh = doc.mount(lang_btn("zh").with_class("active"));
    let ja = doc.mount(lang_btn("ja"));
    let en = doc.mount(lang_btn("en"));
    let title = doc.mount(MemoryElement::new("h1").with_class("hero-title").with_text("欢迎"));
    let subtitle = doc.mount(MemoryElement::new("p").with_class("hero-subtitle"));
    let primary = doc.mount(MemoryElement::new("button").with_id("primaryBtn").with_class("cta-btn"));
    doc.mount(MemoryElement::new("button").with_id("secondaryBtn").with_class("cta-btn"));
    Page { doc, sched: Rc::new(ManualScheduler::new()), zh, ja, en, title, subtitle, primary }
}

fn switcher(page: &Page, config: &SiteConfig) -> Rc<LocaleSwitcher> {
    let sched: Rc<dyn Scheduler> = page.sched.clone();
    match LocaleSwitcher::setup(&page.doc, sched, config.locales.clone(), config.default_locale, config.timings.text_fade()) {
        Ok(switcher) => switcher,
        Err(err) => panic!("setup failed: {err}"),
    }
}

fn active_codes(page: &Page) -> Vec<String> {
    [&page.zh, &page.ja, &page.en]
        .into_iter()
        .filter(|c| c.has_class("active"))
        .filter_map(|c| c.attribute("data-lang"))
        .collect()
}

// =============================================================
// Locale codes
// =============================================================

#[test]
fn locale_codes_parse_case_insensitively() {
    assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
    assert_eq!(" ja ".parse::<Locale>(), Ok(Locale::Ja));
    assert_eq!("fr".parse::<Locale>(), Err(LocaleError::UnknownCode("fr".to_owned())));
}

#[test]
fn locale_serializes_as_code() {
    let json = serde_json::to_string(&Locale::Ja).unwrap_or_default();
    assert_eq!(json, "\"ja\"");
}

// =============================================================
// render
// =============================================================

#[test]
fn render_marks_only_subtitle_as_markup() {
    let config = SiteConfig::refined();
    let updates = render(&config.locales[&Locale::En]);
    let markup = updates
        .iter()
        .filter(|u| matches!(u.content, SlotContent::Markup(_)))
        .map(|u| u.slot)
        .collect::<Vec<_>>();
    assert_eq!(markup, vec![Slot::Subtitle]);
}

#[test]
fn render_skips_absent_slogan() {
    let config = SiteConfig::classic();
    let slots = render(&config.locales[&Locale::Zh]).iter().map(|u| u.slot).collect::<Vec<_>>();
    assert_eq!(slots, vec![Slot::Title, Slot::Subtitle, Slot::Primary, Slot::Secondary]);
}

#[test]
fn render_includes_slogan_when_present() {
    let config = SiteConfig::refined();
    let updates = render(&config.locales[&Locale::Ja]);
    assert_eq!(updates.len(), 5);
    assert_eq!(
        updates[1],
        SlotUpdate { slot: Slot::Slogan, content: SlotContent::Text("無限の可能性を探る".to_owned()) }
    );
}

#[test]
fn lookup_rejects_unknown_and_missing() {
    let mut table = SiteConfig::refined().locales;
    assert!(matches!(lookup(&table, "xx"), Err(LocaleError::UnknownCode(_))));
    table.remove(&Locale::Ja);
    assert!(matches!(lookup(&table, "ja"), Err(LocaleError::Missing(Locale::Ja))));
    assert!(lookup(&table, "en").is_ok_and(|(locale, _)| locale == Locale::En));
}

// =============================================================
// LocaleSwitcher
// =============================================================

#[test]
fn setup_takes_initial_locale_from_marked_control() {
    let page = page();
    page.zh.remove_class("active");
    page.ja.add_class("active");
    let s = switcher(&page, &SiteConfig::refined());
    assert_eq!(s.active(), Locale::Ja);
    assert_eq!(active_codes(&page), vec!["ja".to_owned()]);
}

#[test]
fn setup_falls_back_to_default_locale() {
    let page = page();
    page.zh.remove_class("active");
    let mut config = SiteConfig::refined();
    config.default_locale = Locale::En;
    let s = switcher(&page, &config);
    assert_eq!(s.active(), Locale::En);
    assert_eq!(active_codes(&page), vec!["en".to_owned()]);
}

#[test]
fn setup_ignores_marked_control_with_unknown_code() {
    let page = page();
    page.zh.remove_class("active");
    let rogue = page.doc.mount(lang_btn("fr").with_class("active"));
    let s = switcher(&page, &SiteConfig::refined());
    assert_eq!(s.active(), Locale::Zh);
    assert_eq!(active_codes(&page), vec!["zh".to_owned()]);
    assert!(!rogue.has_class("active"));
}

#[test]
fn setup_without_controls_fails() {
    let doc = MemoryDocument::new();
    let config = SiteConfig::refined();
    let sched: Rc<dyn Scheduler> = Rc::new(ManualScheduler::new());
    let result = LocaleSwitcher::setup(&doc, sched, config.locales, Locale::Zh, config.timings.text_fade());
    assert!(matches!(result, Err(SetupError::EmptySelection { behavior: Behavior::Locale, .. })));
}

#[test]
fn click_switches_after_fade_and_prevents_navigation() {
    let page = page();
    let config = SiteConfig::refined();
    let s = switcher(&page, &config);

    let prevented = page.doc.click(&page.en);
    assert!(prevented);
    assert_eq!(s.active(), Locale::En);
    assert_eq!(page.title.style("opacity").as_deref(), Some("0"));
    assert_eq!(page.title.style("transform").as_deref(), Some("translateY(10px)"));
    assert_eq!(page.title.content(), "欢迎");

    page.sched.advance_ms(299);
    assert_eq!(page.title.content(), "欢迎");
    page.sched.advance_ms(1);
    assert_eq!(page.title.text().as_deref(), Some("Welcome"));
    assert_eq!(page.title.style("opacity").as_deref(), Some("1"));
    assert_eq!(page.title.style("transform").as_deref(), Some("translateY(0)"));
    assert_eq!(page.primary.text().as_deref(), Some("Get Started"));
}

#[test]
fn en_zh_en_round_trip_restores_exact_subtitle() {
    let page = page();
    let config = SiteConfig::refined();
    let _switcher = switcher(&page, &config);

    page.doc.click(&page.en);
    page.sched.advance_ms(300);
    assert_eq!(active_codes(&page), vec!["en".to_owned()]);
    let first = page.subtitle.markup();

    page.doc.click(&page.zh);
    assert_eq!(active_codes(&page), vec!["zh".to_owned()]);
    page.sched.advance_ms(300);
    assert_eq!(page.subtitle.markup().as_deref(), Some("简洁、优雅的体验<br>为你而设计"));

    page.doc.click(&page.en);
    page.sched.advance_ms(300);
    assert_eq!(page.subtitle.markup(), first);
    assert_eq!(page.subtitle.markup().as_deref(), Some("A beautiful, minimalist experience<br>designed for you"));
    assert_eq!(active_codes(&page), vec!["en".to_owned()]);
}

#[test]
fn exactly_one_control_is_active_after_every_switch() {
    let page = page();
    let s = switcher(&page, &SiteConfig::refined());
    let clicks = [(&page.ja, Locale::Ja), (&page.en, Locale::En), (&page.ja, Locale::Ja), (&page.zh, Locale::Zh)];
    for (control, locale) in clicks {
        page.doc.click(control);
        assert_eq!(active_codes(&page), vec![locale.code().to_owned()]);
        assert_eq!(s.active(), locale);
    }
}

#[test]
fn clicks_after_switcher_is_dropped_are_ignored() {
    let page = page();
    drop(switcher(&page, &SiteConfig::refined()));
    page.doc.click(&page.en);
    assert_eq!(active_codes(&page), vec!["zh".to_owned()]);
    assert_eq!(page.sched.pending_timers(), 0);
}

#[test]
fn duplicate_controls_mark_the_one_clicked() {
    let page = page();
    let footer_en = page.doc.mount(lang_btn("en"));
    let _switcher = switcher(&page, &SiteConfig::refined());

    page.doc.click(&footer_en);
    assert!(footer_en.has_class("active"));
    assert!(!page.en.has_class("active"));
    assert!(!page.zh.has_class("active"));

    page.doc.click(&page.en);
    assert!(page.en.has_class("active"));
    assert!(!footer_en.has_class("active"));
}

#[test]
fn missing_slots_are_skipped() {
    let page = page();
    let s = switcher(&page, &SiteConfig::refined());
    page.doc.click(&page.ja);
    page.sched.advance_ms(300);
    assert_eq!(s.active(), Locale::Ja);
    assert_eq!(page.doc.find_all(".hero-slogan").len(), 0);
    assert_eq!(page.title.text().as_deref(), Some("ようこそ"));
}

#[test]
fn unknown_code_changes_nothing() {
    let page = page();
    let s = switcher(&page, &SiteConfig::refined());
    let rogue = page.doc.mount(lang_btn("fr"));
    assert!(matches!(s.activate(&rogue.handle()), Err(LocaleError::UnknownCode(_))));
    assert_eq!(s.active(), Locale::Zh);
    assert_eq!(active_codes(&page), vec!["zh".to_owned()]);
    assert_eq!(page.sched.pending_timers(), 0);
}

#[test]
fn missing_table_entry_fails_closed() {
    let page = page();
    let mut config = SiteConfig::refined();
    config.locales.remove(&Locale::Ja);
    let s = switcher(&page, &config);
    assert_eq!(s.switch(Locale::Ja), Err(LocaleError::Missing(Locale::Ja)));
    assert_eq!(s.active(), Locale::Zh);
    assert!(page.title.style("opacity").is_none());
}

#[test]
fn unlabeled_control_is_rejected() {
    let page = page();
    let s = switcher(&page, &SiteConfig::refined());
    let bare = MemoryElement::new("a").with_class("lang-btn");
    assert_eq!(s.activate(&bare.handle()), Err(LocaleError::Unlabeled));
}
