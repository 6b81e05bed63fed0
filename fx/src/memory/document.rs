//! In-memory element tree with selector lookup and event dispatch.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::dom::{Document, Element, ElementRef, Event, EventKind, Listener, Rect};

static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Debug, PartialEq, Eq)]
enum Content {
    Empty,
    Text(String),
    Markup(String),
}

struct Node {
    key: u64,
    tag: String,
    attributes: RefCell<BTreeMap<String, String>>,
    classes: RefCell<Vec<String>>,
    styles: RefCell<BTreeMap<String, String>>,
    style_log: RefCell<Vec<(String, Option<String>)>>,
    content: RefCell<Content>,
    children: RefCell<Vec<MemoryElement>>,
    parent: RefCell<Weak<Node>>,
    rect: Cell<Rect>,
    listeners: RefCell<Vec<(EventKind, Listener)>>,
}

/// Element in a [`MemoryDocument`]. Cloning yields another handle to the
/// same node.
#[derive(Clone)]
pub struct MemoryElement(Rc<Node>);

impl MemoryElement {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(Node {
            key: NEXT_KEY.fetch_add(1, Ordering::Relaxed),
            tag: tag.to_ascii_lowercase(),
            attributes: RefCell::new(BTreeMap::new()),
            classes: RefCell::new(Vec::new()),
            styles: RefCell::new(BTreeMap::new()),
            style_log: RefCell::new(Vec::new()),
            content: RefCell::new(Content::Empty),
            children: RefCell::new(Vec::new()),
            parent: RefCell::new(Weak::new()),
            rect: Cell::new(Rect::default()),
            listeners: RefCell::new(Vec::new()),
        }))
    }

    // --- Builders ---

    #[must_use]
    pub fn with_id(self, id: &str) -> Self {
        self.set_attribute("id", id);
        self
    }

    #[must_use]
    pub fn with_class(self, class: &str) -> Self {
        for name in class.split_whitespace() {
            self.add_class(name);
        }
        self
    }

    #[must_use]
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    #[must_use]
    pub fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    #[must_use]
    pub fn with_rect(self, rect: Rect) -> Self {
        self.0.rect.set(rect);
        self
    }

    /// Append `child` and return `self`, for building trees inline.
    #[must_use]
    pub fn with_child(self, child: &MemoryElement) -> Self {
        self.append(child);
        self
    }

    // --- Handles ---

    /// Erase to the shared trait-object handle behaviors work with.
    #[must_use]
    pub fn handle(&self) -> ElementRef {
        Rc::new(self.clone())
    }

    /// Recover the concrete element behind a handle.
    #[must_use]
    pub fn from_handle(handle: &ElementRef) -> Option<Self> {
        handle.as_any().downcast_ref::<Self>().cloned()
    }

    #[must_use]
    pub fn same_node(&self, other: &Self) -> bool {
        self.0.key == other.0.key
    }

    // --- Inspection ---

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.0.tag
    }

    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.attribute("id")
    }

    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.0.classes.borrow().clone()
    }

    /// Current content as a string: text, markup source, or empty.
    #[must_use]
    pub fn content(&self) -> String {
        match &*self.0.content.borrow() {
            Content::Empty => String::new(),
            Content::Text(text) | Content::Markup(text) => text.clone(),
        }
    }

    /// Content if it was last set through the text path.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        match &*self.0.content.borrow() {
            Content::Text(text) => Some(text.clone()),
            _ => None,
        }
    }

    /// Content if it was last set through the markup path.
    #[must_use]
    pub fn markup(&self) -> Option<String> {
        match &*self.0.content.borrow() {
            Content::Markup(markup) => Some(markup.clone()),
            _ => None,
        }
    }

    #[must_use]
    pub fn children(&self) -> Vec<MemoryElement> {
        self.0.children.borrow().clone()
    }

    #[must_use]
    pub fn parent(&self) -> Option<MemoryElement> {
        self.0.parent.borrow().upgrade().map(MemoryElement)
    }

    /// Every value written to `property`, oldest first; `None` marks a clear.
    #[must_use]
    pub fn style_history(&self, property: &str) -> Vec<Option<String>> {
        self.0
            .style_log
            .borrow()
            .iter()
            .filter(|(name, _)| name == property)
            .map(|(_, value)| value.clone())
            .collect()
    }

    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.0
            .listeners
            .borrow()
            .iter()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    /// Append without going through a trait-object handle.
    pub fn append(&self, child: &MemoryElement) {
        child.detach();
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0.children.borrow_mut().push(child.clone());
    }

    fn detach(&self) {
        let parent = self.0.parent.borrow().upgrade();
        if let Some(parent) = parent {
            parent
                .children
                .borrow_mut()
                .retain(|c| c.0.key != self.0.key);
        }
        *self.0.parent.borrow_mut() = Weak::new();
    }

    fn clear_children(&self) {
        let children = std::mem::take(&mut *self.0.children.borrow_mut());
        for child in children {
            *child.0.parent.borrow_mut() = Weak::new();
        }
    }

    fn listeners_for(&self, kind: EventKind) -> Vec<Listener> {
        self.0
            .listeners
            .borrow()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, l)| Rc::clone(l))
            .collect()
    }

    fn descendants(&self, out: &mut Vec<MemoryElement>) {
        for child in self.children() {
            out.push(child.clone());
            child.descendants(out);
        }
    }

    fn matches(&self, selector: &Compound) -> bool {
        if selector.tag.as_deref().is_some_and(|tag| tag != self.0.tag) {
            return false;
        }
        if selector
            .id
            .as_deref()
            .is_some_and(|id| self.id().as_deref() != Some(id))
        {
            return false;
        }
        selector.classes.iter().all(|class| self.has_class(class))
    }
}

impl Element for MemoryElement {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .attributes
            .borrow_mut()
            .insert(name.to_owned(), value.to_owned());
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.0.classes.borrow_mut().push(class.to_owned());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.classes.borrow_mut().retain(|c| c != class);
    }

    fn style(&self, property: &str) -> Option<String> {
        self.0.styles.borrow().get(property).cloned()
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0
            .styles
            .borrow_mut()
            .insert(property.to_owned(), value.to_owned());
        self.0
            .style_log
            .borrow_mut()
            .push((property.to_owned(), Some(value.to_owned())));
    }

    fn clear_style(&self, property: &str) {
        self.0.styles.borrow_mut().remove(property);
        self.0
            .style_log
            .borrow_mut()
            .push((property.to_owned(), None));
    }

    fn set_text(&self, text: &str) {
        self.clear_children();
        *self.0.content.borrow_mut() = Content::Text(text.to_owned());
    }

    fn set_markup(&self, markup: &str) {
        self.clear_children();
        *self.0.content.borrow_mut() = Content::Markup(markup.to_owned());
    }

    fn bounding_rect(&self) -> Rect {
        self.0.rect.get()
    }

    fn append_child(&self, child: &ElementRef) {
        match Self::from_handle(child) {
            Some(child) => self.append(&child),
            None => log::warn!("memory document: cannot adopt a foreign element"),
        }
    }

    fn remove(&self) {
        self.detach();
    }

    fn contains(&self, other: &ElementRef) -> bool {
        let Some(mut cursor) = Self::from_handle(other) else {
            return false;
        };
        loop {
            if cursor.same_node(self) {
                return true;
            }
            match cursor.parent() {
                Some(parent) => cursor = parent,
                None => return false,
            }
        }
    }

    fn listen(&self, kind: EventKind, listener: Listener) {
        self.0.listeners.borrow_mut().push((kind, listener));
    }
}

/// One compound selector: `tag#id.class.class`.
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() || raw.contains(char::is_whitespace) {
            return None;
        }
        let mut compound = Self { tag: None, id: None, classes: Vec::new() };
        let mut rest = raw;
        let tag_end = rest.find(['#', '.']).unwrap_or(rest.len());
        if tag_end > 0 {
            compound.tag = Some(rest[..tag_end].to_ascii_lowercase());
        }
        rest = &rest[tag_end..];
        while let Some(marker) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['#', '.']).unwrap_or(body.len());
            let name = body[..end].to_owned();
            if name.is_empty() {
                return None;
            }
            if marker == '#' {
                compound.id = Some(name);
            } else {
                compound.classes.push(name);
            }
            rest = &body[end..];
        }
        Some(compound)
    }
}

/// In-memory page: an `<html>` root with a `<body>`, a scroll offset and
/// window-level listeners.
///
/// Selector support covers what the engine uses: comma-separated lists of
/// `tag#id.class` compounds. Descendant combinators match nothing.
pub struct MemoryDocument {
    root: MemoryElement,
    body: Option<MemoryElement>,
    scroll_y: Cell<f64>,
    window_listeners: RefCell<Vec<(EventKind, Listener)>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        let root = MemoryElement::new("html");
        let body = MemoryElement::new("body");
        root.append(&body);
        Self {
            root,
            body: Some(body),
            scroll_y: Cell::new(0.0),
            window_listeners: RefCell::new(Vec::new()),
        }
    }

    /// A document whose `<body>` is missing, for degraded-markup tests.
    #[must_use]
    pub fn without_body() -> Self {
        Self {
            root: MemoryElement::new("html"),
            body: None,
            scroll_y: Cell::new(0.0),
            window_listeners: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn html(&self) -> MemoryElement {
        self.root.clone()
    }

    /// The `<body>`, or the root when the body is missing.
    #[must_use]
    pub fn body_element(&self) -> MemoryElement {
        self.body.clone().unwrap_or_else(|| self.root.clone())
    }

    /// Append `element` to the body and return it.
    pub fn mount(&self, element: MemoryElement) -> MemoryElement {
        self.body_element().append(&element);
        element
    }

    #[must_use]
    pub fn find(&self, selector: &str) -> Option<MemoryElement> {
        self.find_all(selector).into_iter().next()
    }

    /// All attached elements matching `selector`, in document order.
    #[must_use]
    pub fn find_all(&self, selector: &str) -> Vec<MemoryElement> {
        let compounds = selector
            .split(',')
            .filter_map(Compound::parse)
            .collect::<Vec<_>>();
        if compounds.is_empty() {
            return Vec::new();
        }
        let mut all = vec![self.root.clone()];
        self.root.descendants(&mut all);
        all.into_iter()
            .filter(|el| compounds.iter().any(|c| el.matches(c)))
            .collect()
    }

    #[must_use]
    pub fn window_listener_count(&self, kind: EventKind) -> usize {
        self.window_listeners
            .borrow()
            .iter()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    /// Deliver `event` to `target`, its ancestors and the window, following
    /// the bubbling rules of its kind. Returns whether a listener prevented
    /// the default action.
    pub fn dispatch(&self, target: &MemoryElement, event: Event) -> bool {
        let event = if event.target.is_some() {
            event
        } else {
            event.with_target(target.handle())
        };
        for listener in target.listeners_for(event.kind) {
            listener(&event);
        }
        if event.kind.bubbles() {
            let mut cursor = target.parent();
            while let Some(el) = cursor {
                for listener in el.listeners_for(event.kind) {
                    listener(&event);
                }
                cursor = el.parent();
            }
            self.fire_window(&event);
        }
        event.default_prevented()
    }

    /// Click `target` at viewport coordinates.
    pub fn click_at(&self, target: &MemoryElement, client_x: f64, client_y: f64) -> bool {
        self.dispatch(target, Event::new(EventKind::Click).at(client_x, client_y))
    }

    /// Click `target` at the center of its bounding rect.
    pub fn click(&self, target: &MemoryElement) -> bool {
        let rect = target.bounding_rect();
        self.click_at(target, rect.left + rect.width / 2.0, rect.top + rect.height / 2.0)
    }

    /// Scroll the window to `y` and fire a scroll event.
    pub fn scroll_to(&self, y: f64) {
        self.scroll_y.set(y);
        self.fire_window(&Event::new(EventKind::Scroll));
    }

    fn fire_window(&self, event: &Event) {
        let listeners = self
            .window_listeners
            .borrow()
            .iter()
            .filter(|(k, _)| *k == event.kind)
            .map(|(_, l)| Rc::clone(l))
            .collect::<Vec<_>>();
        for listener in listeners {
            listener(event);
        }
    }
}

impl Document for MemoryDocument {
    fn root(&self) -> ElementRef {
        self.root.handle()
    }

    fn body(&self) -> Option<ElementRef> {
        self.body.as_ref().map(MemoryElement::handle)
    }

    fn element_by_id(&self, id: &str) -> Option<ElementRef> {
        let mut all = vec![self.root.clone()];
        self.root.descendants(&mut all);
        all.into_iter()
            .find(|el| el.id().as_deref() == Some(id))
            .map(|el| el.handle())
    }

    fn query_all(&self, selector: &str) -> Vec<ElementRef> {
        self.find_all(selector)
            .iter()
            .map(MemoryElement::handle)
            .collect()
    }

    fn create_element(&self, tag: &str) -> Option<ElementRef> {
        Some(MemoryElement::new(tag).handle())
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn listen_window(&self, kind: EventKind, listener: Listener) {
        self.window_listeners.borrow_mut().push((kind, listener));
    }
}
