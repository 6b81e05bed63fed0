//! Scroll-driven parallax for the hero background and floating elements.
//!
//! Every scroll event recomputes every transform from the current offset.
//! With `coalesce_frames` set, events between two frames collapse into one
//! recomputation on the next frame using the latest offset.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::config::ParallaxConfig;
use crate::dom::{Document, ElementRef, Event, EventKind, px};
use crate::error::SetupError;
use crate::schedule::Scheduler;
use crate::selectors;
use crate::site::Behavior;

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

/// Background translation for a scroll offset.
#[must_use]
pub fn background_offset(scroll_y: f64, config: &ParallaxConfig) -> f64 {
    scroll_y * config.background_rate
}

/// Translation rate of the floating element at `index`.
#[must_use]
pub fn element_rate(index: usize, config: &ParallaxConfig) -> f64 {
    let position = index % config.rate_cycle.max(1);
    #[allow(clippy::cast_precision_loss)]
    let step = position as f64;
    config.element_base_rate + step * config.element_rate_step
}

/// `(translate_y_px, rotate_deg)` for the floating element at `index`.
#[must_use]
pub fn element_offset(scroll_y: f64, index: usize, config: &ParallaxConfig) -> (f64, f64) {
    (scroll_y * element_rate(index, config), scroll_y * config.rotation_rate)
}

pub struct Parallax {
    document: Rc<dyn Document>,
    scheduler: Rc<dyn Scheduler>,
    background: Option<ElementRef>,
    elements: Vec<ElementRef>,
    config: ParallaxConfig,
    frame_pending: Cell<bool>,
}

impl Parallax {
    /// Listen for window scrolls. Needs a background or at least one
    /// floating element to move.
    pub fn setup(
        document: Rc<dyn Document>,
        scheduler: Rc<dyn Scheduler>,
        elements: Vec<ElementRef>,
        config: ParallaxConfig,
    ) -> Result<Rc<Self>, SetupError> {
        let background = document.query(selectors::HERO_BACKGROUND);
        if background.is_none() && elements.is_empty() {
            return Err(SetupError::EmptySelection {
                behavior: Behavior::Parallax,
                selector: selectors::HERO_BACKGROUND,
            });
        }

        let parallax =
            Rc::new(Self { document, scheduler, background, elements, config, frame_pending: Cell::new(false) });
        let weak: Weak<Self> = Rc::downgrade(&parallax);
        parallax.document.listen_window(
            EventKind::Scroll,
            Rc::new(move |_: &Event| {
                if let Some(parallax) = weak.upgrade() {
                    parallax.on_scroll();
                }
            }),
        );
        Ok(parallax)
    }

    /// Apply every transform for `scroll_y`.
    pub fn apply(&self, scroll_y: f64) {
        if let Some(background) = &self.background {
            background.set_style(
                "transform",
                &format!("translateY({})", px(background_offset(scroll_y, &self.config))),
            );
        }
        for (index, element) in self.elements.iter().enumerate() {
            let (translate, rotate) = element_offset(scroll_y, index, &self.config);
            element.set_style("transform", &format!("translateY({}) rotate({rotate}deg)", px(translate)));
        }
    }

    fn on_scroll(self: &Rc<Self>) {
        if !self.config.coalesce_frames {
            self.apply(self.document.scroll_y());
            return;
        }
        if self.frame_pending.replace(true) {
            return;
        }
        let weak = Rc::downgrade(self);
        self.scheduler.request_frame(Box::new(move |_| {
            if let Some(parallax) = weak.upgrade() {
                parallax.frame_pending.set(false);
                parallax.apply(parallax.document.scroll_y());
            }
        }));
    }
}
