//! Auto-dismissing toast notifications.
//!
//! Each call to [`Notifier::notify`] builds an independent overlay anchored
//! top-right: parked off-screen, slid in after a short delay, held, slid
//! back out and detached. There is no queue; concurrent toasts overlap.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{GLASS_EASING, TOAST_OFFSCREEN_PX, TOAST_Z_INDEX};
use crate::dom::{self, Document, ElementRef, Event, EventKind, px};
use crate::error::SetupError;
use crate::schedule::Scheduler;
use crate::site::Behavior;

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Intent of a notification; also its CSS modifier class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Success,
    #[default]
    Info,
    Warning,
    Error,
}

impl Category {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message a control raises when pressed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    pub message: String,
    #[serde(default)]
    pub category: Category,
}

/// Toast lifecycle timing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTiming {
    /// Delay before sliding in, so the off-screen start is painted first.
    pub enter: Duration,
    /// Time from creation until the exit slide starts.
    pub display: Duration,
    /// Exit slide length; the node is detached when it ends.
    pub exit: Duration,
}

/// Builds toasts into the document body.
pub struct Notifier {
    document: Rc<dyn Document>,
    scheduler: Rc<dyn Scheduler>,
    timing: ToastTiming,
}

impl Notifier {
    #[must_use]
    pub fn new(document: Rc<dyn Document>, scheduler: Rc<dyn Scheduler>, timing: ToastTiming) -> Self {
        Self { document, scheduler, timing }
    }

    /// Show `message` and schedule its dismissal. Returns the toast element,
    /// or `None` when the document cannot host one.
    pub fn notify(&self, message: &str, category: Category) -> Option<ElementRef> {
        let Some(body) = self.document.body() else {
            log::warn!("notification dropped, document has no body: {message}");
            return None;
        };
        let Some(toast) = self.document.create_element("div") else {
            log::warn!("notification dropped, element creation failed: {message}");
            return None;
        };

        toast.add_class("notification");
        toast.add_class(category.as_str());
        toast.set_text(message);
        style_toast(&toast, self.timing.exit);
        body.append_child(&toast);

        let entering = Rc::clone(&toast);
        self.scheduler.set_timeout(
            self.timing.enter,
            Box::new(move || entering.set_style("transform", "translateX(0)")),
        );

        let leaving = Rc::clone(&toast);
        let scheduler = Rc::clone(&self.scheduler);
        let exit = self.timing.exit;
        self.scheduler.set_timeout(
            self.timing.display,
            Box::new(move || {
                leaving.set_style("transform", &offscreen());
                scheduler.set_timeout(exit, Box::new(move || leaving.remove()));
            }),
        );

        log::debug!("notification shown ({category}): {message}");
        Some(toast)
    }
}

fn offscreen() -> String {
    format!("translateX({})", px(TOAST_OFFSCREEN_PX))
}

fn style_toast(toast: &ElementRef, exit: Duration) {
    let transition = format!("all {}s {GLASS_EASING}", exit.as_secs_f64());
    let parked = offscreen();
    for (property, value) in [
        ("position", "fixed"),
        ("top", "20px"),
        ("right", "20px"),
        ("padding", "1rem 2rem"),
        ("background", "var(--glass-bg-hover)"),
        ("border", "1px solid var(--border-color)"),
        ("border-radius", "12px"),
        ("backdrop-filter", "blur(20px)"),
        ("-webkit-backdrop-filter", "blur(20px)"),
        ("color", "var(--text-primary)"),
        ("z-index", TOAST_Z_INDEX),
        ("transform", parked.as_str()),
        ("transition", transition.as_str()),
        ("box-shadow", "0 8px 30px var(--shadow-medium)"),
    ] {
        toast.set_style(property, value);
    }
}

/// Make the control at `selector` raise `trigger` when clicked.
pub fn bind_trigger(
    document: &dyn Document,
    notifier: &Rc<Notifier>,
    behavior: Behavior,
    selector: &'static str,
    trigger: Trigger,
) -> Result<(), SetupError> {
    let control = dom::require(document, behavior, selector)?;
    let notifier = Rc::clone(notifier);
    control.listen(
        EventKind::Click,
        Rc::new(move |_: &Event| {
            notifier.notify(&trigger.message, trigger.category);
        }),
    );
    Ok(())
}
