use super::*;
use crate::dom::Element;
use crate::memory::{ManualScheduler, MemoryDocument, MemoryElement};

// =============================================================
// Helpers
// =============================================================

struct Page {
    doc: MemoryDocument,
    sched: Rc<ManualScheduler>,
    nav: MemoryElement,
    languages: MemoryElement,
    theme: MemoryElement,
    outside: MemoryElement,
}

fn page() -> Page {
    let doc = MemoryDocument::new();
    let languages = MemoryElement::new("div").with_class("language-selector");
    let theme = MemoryElement::new("button").with_class("theme-toggle");
    let nav = doc.mount(MemoryElement::new("nav").with_class("top-nav").with_child(&languages).with_child(&theme));
    let outside = doc.mount(MemoryElement::new("main"));
    Page { doc, sched: Rc::new(ManualScheduler::new()), nav, languages, theme, outside }
}

fn bind(page: &Page) -> Rc<NavReveal> {
    let sched: Rc<dyn Scheduler> = page.sched.clone();
    match NavReveal::setup(&page.doc, sched, Duration::from_millis(500)) {
        Ok(nav) => nav,
        Err(err) => panic!("setup failed: {err}"),
    }
}

fn enter(page: &Page) {
    page.doc.dispatch(&page.nav, Event::new(EventKind::MouseEnter));
}

fn leave(page: &Page) {
    page.doc.dispatch(&page.nav, Event::new(EventKind::MouseLeave));
}

fn opacities(el: &MemoryElement) -> Vec<String> {
    el.style_history("opacity").into_iter().flatten().collect()
}

// =============================================================
// Setup
// =============================================================

#[test]
fn controls_start_hidden() {
    let page = page();
    let nav = bind(&page);
    assert_eq!(nav.visibility(), NavVisibility::Hidden);
    for target in [&page.languages, &page.theme] {
        assert_eq!(target.style("opacity").as_deref(), Some("0"));
        assert_eq!(target.style("transform").as_deref(), Some("translateX(20px)"));
        assert!(target.style("transition").is_some());
    }
}

#[test]
fn setup_requires_container() {
    let doc = MemoryDocument::new();
    let sched: Rc<dyn Scheduler> = Rc::new(ManualScheduler::new());
    let result = NavReveal::setup(&doc, sched, Duration::from_millis(500));
    assert!(matches!(result, Err(SetupError::MissingElement { behavior: Behavior::NavReveal, .. })));
}

#[test]
fn setup_requires_some_target() {
    let doc = MemoryDocument::new();
    doc.mount(MemoryElement::new("nav").with_class("top-nav"));
    let sched: Rc<dyn Scheduler> = Rc::new(ManualScheduler::new());
    let result = NavReveal::setup(&doc, sched, Duration::from_millis(500));
    assert!(matches!(result, Err(SetupError::EmptySelection { behavior: Behavior::NavReveal, .. })));
}

// =============================================================
// Reveal and hide
// =============================================================

#[test]
fn enter_reveals_both_controls_at_once() {
    let page = page();
    let nav = bind(&page);
    enter(&page);
    assert_eq!(nav.visibility(), NavVisibility::Shown);
    for target in [&page.languages, &page.theme] {
        assert_eq!(target.style("opacity").as_deref(), Some("1"));
        assert_eq!(target.style("transform").as_deref(), Some("translateX(0px)"));
    }
}

#[test]
fn leave_hides_after_delay() {
    let page = page();
    let nav = bind(&page);
    enter(&page);
    leave(&page);
    assert!(nav.hide_pending());

    page.sched.advance_ms(499);
    assert_eq!(nav.visibility(), NavVisibility::Shown);
    page.sched.advance_ms(1);
    assert_eq!(nav.visibility(), NavVisibility::Hidden);
    assert!(!nav.hide_pending());
    assert_eq!(page.theme.style("opacity").as_deref(), Some("0"));
}

#[test]
fn reenter_within_delay_does_not_flicker() {
    let page = page();
    let nav = bind(&page);
    enter(&page);
    leave(&page);
    page.sched.advance_ms(300);
    enter(&page);
    assert!(!nav.hide_pending());
    page.sched.advance_ms(1000);

    assert_eq!(nav.visibility(), NavVisibility::Shown);
    for target in [&page.languages, &page.theme] {
        assert_eq!(opacities(target), vec!["0".to_owned(), "1".to_owned()]);
    }
}

#[test]
fn repeated_leaves_restart_the_delay() {
    let page = page();
    let nav = bind(&page);
    enter(&page);
    leave(&page);
    page.sched.advance_ms(400);
    leave(&page);
    page.sched.advance_ms(400);
    assert_eq!(nav.visibility(), NavVisibility::Shown);
    page.sched.advance_ms(100);
    assert_eq!(nav.visibility(), NavVisibility::Hidden);
    assert_eq!(page.sched.pending_timers(), 0);
}

#[test]
fn touch_inside_reveals_and_outside_hides() {
    let page = page();
    let nav = bind(&page);

    page.doc.dispatch(&page.theme, Event::new(EventKind::TouchStart));
    assert_eq!(nav.visibility(), NavVisibility::Shown);
    assert!(!nav.hide_pending());

    page.doc.dispatch(&page.outside, Event::new(EventKind::TouchStart));
    assert!(nav.hide_pending());
    page.sched.advance_ms(500);
    assert_eq!(nav.visibility(), NavVisibility::Hidden);
}

#[test]
fn cancel_hide_keeps_controls_shown() {
    let page = page();
    let nav = bind(&page);
    nav.reveal();
    nav.schedule_hide();
    nav.cancel_hide();
    page.sched.advance_ms(1000);
    assert_eq!(nav.visibility(), NavVisibility::Shown);
}
