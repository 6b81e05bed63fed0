#![allow(clippy::float_cmp)]

use super::*;
use crate::dom::Element;
use crate::memory::{ManualScheduler, MemoryDocument, MemoryElement};

// =============================================================
// Helpers
// =============================================================

struct Page {
    doc: Rc<MemoryDocument>,
    sched: Rc<ManualScheduler>,
    button: MemoryElement,
}

fn page() -> Page {
    let doc = Rc::new(MemoryDocument::new());
    let button = doc.mount(
        MemoryElement::new("button")
            .with_id("primaryBtn")
            .with_class("cta-btn")
            .with_rect(Rect::new(100.0, 200.0, 160.0, 48.0)),
    );
    doc.mount(MemoryElement::new("button").with_id("secondaryBtn").with_class("cta-btn"));
    doc.mount(MemoryElement::new("a").with_class("lang-btn").with_attribute("data-lang", "zh"));
    Page { doc, sched: Rc::new(ManualScheduler::new()), button }
}

fn bind(page: &Page) -> usize {
    let doc: Rc<dyn Document> = page.doc.clone();
    let sched: Rc<dyn Scheduler> = page.sched.clone();
    setup(&doc, &sched, Duration::from_millis(600)).unwrap_or(0)
}

fn ripples(host: &MemoryElement) -> Vec<MemoryElement> {
    host.children().into_iter().filter(|c| c.has_class("ripple")).collect()
}

// =============================================================
// geometry
// =============================================================

#[test]
fn geometry_centers_on_pointer() {
    let g = geometry(Rect::new(100.0, 200.0, 160.0, 48.0), 130.0, 210.0);
    assert_eq!(g.size, 160.0);
    assert_eq!(g.left, 130.0 - 100.0 - 80.0);
    assert_eq!(g.top, 210.0 - 200.0 - 80.0);
}

#[test]
fn geometry_uses_longer_side() {
    let g = geometry(Rect::new(0.0, 0.0, 40.0, 90.0), 20.0, 45.0);
    assert_eq!(g.size, 90.0);
    assert_eq!(g.left, -25.0);
    assert_eq!(g.top, 0.0);
}

// =============================================================
// setup / spawn
// =============================================================

#[test]
fn setup_binds_buttons_and_locale_controls() {
    let page = page();
    assert_eq!(bind(&page), 3);
}

#[test]
fn setup_without_controls_fails() {
    let doc: Rc<dyn Document> = Rc::new(MemoryDocument::new());
    let sched: Rc<dyn Scheduler> = Rc::new(ManualScheduler::new());
    let result = setup(&doc, &sched, Duration::from_millis(600));
    assert!(matches!(result, Err(SetupError::EmptySelection { behavior: Behavior::Ripple, .. })));
}

#[test]
fn click_spawns_styled_ripple_at_pointer() {
    let page = page();
    bind(&page);
    page.doc.click_at(&page.button, 130.0, 210.0);

    let spawned = ripples(&page.button);
    assert_eq!(spawned.len(), 1);
    let ripple = &spawned[0];
    assert_eq!(ripple.tag(), "span");
    assert_eq!(ripple.style("width").as_deref(), Some("160px"));
    assert_eq!(ripple.style("height").as_deref(), Some("160px"));
    assert_eq!(ripple.style("left").as_deref(), Some("-50px"));
    assert_eq!(ripple.style("top").as_deref(), Some("-70px"));
    assert_eq!(ripple.style("transform").as_deref(), Some("scale(0)"));
    assert_eq!(ripple.style("animation").as_deref(), Some("rippleEffect 0.6s linear"));
    assert_eq!(ripple.style("pointer-events").as_deref(), Some("none"));
}

#[test]
fn ripple_is_removed_after_lifetime() {
    let page = page();
    bind(&page);
    page.doc.click(&page.button);
    page.sched.advance_ms(599);
    assert_eq!(ripples(&page.button).len(), 1);
    page.sched.advance_ms(1);
    assert!(ripples(&page.button).is_empty());
}

#[test]
fn rapid_clicks_each_expire_on_their_own_schedule() {
    let page = page();
    bind(&page);
    for _ in 0..3 {
        page.doc.click(&page.button);
        page.sched.advance_ms(100);
    }
    assert_eq!(ripples(&page.button).len(), 3);

    // clicks at 0, 100, 200; now 300
    page.sched.advance_ms(300);
    assert_eq!(ripples(&page.button).len(), 2);
    page.sched.advance_ms(100);
    assert_eq!(ripples(&page.button).len(), 1);
    page.sched.advance_ms(100);
    assert!(ripples(&page.button).is_empty());
}
