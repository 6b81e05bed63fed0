//! `Element` and `Document` over the live DOM.

use std::any::Any;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CssStyleDeclaration, HtmlElement, MouseEvent, Window};

use super::warn_js;
use crate::dom::{Document, Element, ElementRef, Event, EventKind, Listener, Rect};

/// Handle to a live DOM element.
#[derive(Clone)]
pub struct WebElement {
    element: web_sys::Element,
}

impl WebElement {
    #[must_use]
    pub fn wrap(element: web_sys::Element) -> ElementRef {
        Rc::new(Self { element })
    }

    #[must_use]
    pub fn raw(&self) -> &web_sys::Element {
        &self.element
    }

    fn style_declaration(&self) -> Option<CssStyleDeclaration> {
        self.element.dyn_ref::<HtmlElement>().map(HtmlElement::style)
    }

    fn unwrap_handle(handle: &ElementRef) -> Option<&Self> {
        handle.as_any().downcast_ref::<Self>()
    }
}

impl Element for WebElement {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(err) = self.element.set_attribute(name, value) {
            warn_js("set_attribute", &err);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.element.class_list().add_1(class) {
            warn_js("classList.add", &err);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.element.class_list().remove_1(class) {
            warn_js("classList.remove", &err);
        }
    }

    fn style(&self, property: &str) -> Option<String> {
        let value = match self.style_declaration()?.get_property_value(property) {
            Ok(value) => value,
            Err(err) => {
                warn_js("style.getPropertyValue", &err);
                return None;
            }
        };
        if value.is_empty() { None } else { Some(value) }
    }

    fn set_style(&self, property: &str, value: &str) {
        let Some(style) = self.style_declaration() else {
            return;
        };
        if let Err(err) = style.set_property(property, value) {
            warn_js("style.setProperty", &err);
        }
    }

    fn clear_style(&self, property: &str) {
        let Some(style) = self.style_declaration() else {
            return;
        };
        if let Err(err) = style.remove_property(property) {
            warn_js("style.removeProperty", &err);
        }
    }

    fn set_text(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn set_markup(&self, markup: &str) {
        self.element.set_inner_html(markup);
    }

    fn bounding_rect(&self) -> Rect {
        let rect = self.element.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    fn append_child(&self, child: &ElementRef) {
        let Some(child) = Self::unwrap_handle(child) else {
            log::warn!("append_child: element does not belong to this document");
            return;
        };
        if let Err(err) = self.element.append_child(&child.element) {
            warn_js("appendChild", &err);
        }
    }

    fn remove(&self) {
        self.element.remove();
    }

    fn contains(&self, other: &ElementRef) -> bool {
        Self::unwrap_handle(other).is_some_and(|other| self.element.contains(Some(other.element.as_ref())))
    }

    fn listen(&self, kind: EventKind, listener: Listener) {
        bind(self.element.as_ref(), kind, listener);
    }
}

/// The live page.
pub struct WebDocument {
    window: Window,
    document: web_sys::Document,
    root: web_sys::Element,
}

impl WebDocument {
    /// `None` when the window has no loaded document.
    #[must_use]
    pub fn new(window: Window) -> Option<Self> {
        let document = window.document()?;
        let root = document.document_element()?;
        Some(Self { window, document, root })
    }
}

impl Document for WebDocument {
    fn root(&self) -> ElementRef {
        WebElement::wrap(self.root.clone())
    }

    fn body(&self) -> Option<ElementRef> {
        self.document.body().map(|body| WebElement::wrap(body.into()))
    }

    fn element_by_id(&self, id: &str) -> Option<ElementRef> {
        self.document.get_element_by_id(id).map(WebElement::wrap)
    }

    fn query_all(&self, selector: &str) -> Vec<ElementRef> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                warn_js("querySelectorAll", &err);
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_ref::<web_sys::Element>().cloned())
            .map(WebElement::wrap)
            .collect()
    }

    fn create_element(&self, tag: &str) -> Option<ElementRef> {
        match self.document.create_element(tag) {
            Ok(element) => Some(WebElement::wrap(element)),
            Err(err) => {
                warn_js("createElement", &err);
                None
            }
        }
    }

    fn scroll_y(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(y) => y,
            Err(err) => {
                warn_js("scrollY", &err);
                0.0
            }
        }
    }

    fn listen_window(&self, kind: EventKind, listener: Listener) {
        bind(self.window.as_ref(), kind, listener);
    }
}

fn translate(kind: EventKind, raw: &web_sys::Event) -> Event {
    let mut event = Event::new(kind);
    if let Some(mouse) = raw.dyn_ref::<MouseEvent>() {
        event = event.at(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
    }
    if let Some(target) = raw.target().and_then(|t| t.dyn_ref::<web_sys::Element>().cloned()) {
        event = event.with_target(WebElement::wrap(target));
    }
    event
}

fn bind(target: &web_sys::EventTarget, kind: EventKind, listener: Listener) {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |raw: web_sys::Event| {
        let event = translate(kind, &raw);
        listener(&event);
        if event.default_prevented() {
            raw.prevent_default();
        }
    });
    match target.add_event_listener_with_callback(kind.as_str(), closure.as_ref().unchecked_ref()) {
        Ok(()) => closure.forget(),
        Err(err) => warn_js("addEventListener", &err),
    }
}
