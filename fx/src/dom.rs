//! Element accessor abstraction.
//!
//! DESIGN
//! ======
//! Behaviors never touch `web_sys` directly. They read and mutate the page
//! through [`Element`] and [`Document`], which the browser adapter implements
//! over the real DOM and [`crate::memory`] implements over an in-memory tree.
//! Handles are `Rc<dyn Element>`: the engine is single-threaded and element
//! identity is shared between listeners and behavior state.

use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;

use crate::error::SetupError;
use crate::site::Behavior;

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// Shared handle to a page element.
pub type ElementRef = Rc<dyn Element>;

/// Event callback. Listeners live as long as the element they are bound to.
pub type Listener = Rc<dyn Fn(&Event)>;

/// Axis-aligned box in viewport coordinates, as `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
}

/// The event kinds the engine listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    MouseEnter,
    MouseLeave,
    TouchStart,
    Scroll,
}

impl EventKind {
    /// DOM event type name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
            Self::TouchStart => "touchstart",
            Self::Scroll => "scroll",
        }
    }

    /// Whether the event propagates from its target up to the window.
    #[must_use]
    pub fn bubbles(self) -> bool {
        matches!(self, Self::Click | Self::TouchStart)
    }
}

/// A dispatched event as seen by listeners.
pub struct Event {
    pub kind: EventKind,
    pub client_x: f64,
    pub client_y: f64,
    pub target: Option<ElementRef>,
    default_prevented: Cell<bool>,
}

impl Event {
    #[must_use]
    pub fn new(kind: EventKind) -> Self {
        Self { kind, client_x: 0.0, client_y: 0.0, target: None, default_prevented: Cell::new(false) }
    }

    /// Attach pointer coordinates in viewport space.
    #[must_use]
    pub fn at(mut self, client_x: f64, client_y: f64) -> Self {
        self.client_x = client_x;
        self.client_y = client_y;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: ElementRef) -> Self {
        self.target = Some(target);
        self
    }

    /// Ask the host to suppress the browser's default action.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// One page element.
///
/// Mutations that the browser can reject are infallible here; adapters log
/// and swallow host failures because nothing a behavior does is critical.
pub trait Element {
    fn as_any(&self) -> &dyn Any;

    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);

    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    /// Inline style property, e.g. `opacity`.
    fn style(&self, property: &str) -> Option<String>;
    fn set_style(&self, property: &str, value: &str);
    fn clear_style(&self, property: &str);

    /// Replace all content with a text node.
    fn set_text(&self, text: &str);
    /// Replace all content by parsing `markup` as HTML.
    ///
    /// Only developer-authored strings from the site configuration may reach
    /// this; anything user-provided goes through [`Element::set_text`].
    fn set_markup(&self, markup: &str);

    fn bounding_rect(&self) -> Rect;

    fn append_child(&self, child: &ElementRef);
    /// Detach from the parent. Detached elements ignore this.
    fn remove(&self);
    /// Whether `other` is this element or one of its descendants.
    fn contains(&self, other: &ElementRef) -> bool;

    fn listen(&self, kind: EventKind, listener: Listener);
}

/// The page as a whole.
pub trait Document {
    /// The `<html>` element.
    fn root(&self) -> ElementRef;
    fn body(&self) -> Option<ElementRef>;

    fn element_by_id(&self, id: &str) -> Option<ElementRef>;
    /// All matches in document order.
    fn query_all(&self, selector: &str) -> Vec<ElementRef>;
    fn create_element(&self, tag: &str) -> Option<ElementRef>;

    /// Vertical scroll offset of the window in CSS pixels.
    fn scroll_y(&self) -> f64;

    /// Listen on the window itself (scroll, global touches).
    fn listen_window(&self, kind: EventKind, listener: Listener);

    /// First match in document order.
    fn query(&self, selector: &str) -> Option<ElementRef> {
        if let Some(id) = selector.strip_prefix('#') {
            if !id.contains([' ', ',', '.']) {
                return self.element_by_id(id);
            }
        }
        self.query_all(selector).into_iter().next()
    }
}

/// Look up an element a behavior cannot work without.
pub fn require(document: &dyn Document, behavior: Behavior, selector: &'static str) -> Result<ElementRef, SetupError> {
    document
        .query(selector)
        .ok_or(SetupError::MissingElement { behavior, selector })
}

/// Look up a non-empty set of elements.
pub fn require_all(
    document: &dyn Document,
    behavior: Behavior,
    selector: &'static str,
) -> Result<Vec<ElementRef>, SetupError> {
    let found = document.query_all(selector);
    if found.is_empty() {
        return Err(SetupError::EmptySelection { behavior, selector });
    }
    Ok(found)
}

/// Look up an element that improves a behavior but is not required by it.
pub fn optional(document: &dyn Document, behavior: Behavior, selector: &str) -> Option<ElementRef> {
    let found = document.query(selector);
    if found.is_none() {
        log::debug!("{behavior}: optional element `{selector}` not present");
    }
    found
}

/// Format a pixel length for a style value.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}
