//! Ripple feedback on button presses.

use std::rc::Rc;
use std::time::Duration;

use crate::dom::{self, Document, ElementRef, Event, EventKind, Rect, px};
use crate::error::SetupError;
use crate::schedule::Scheduler;
use crate::selectors;
use crate::site::Behavior;

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

/// Placement of one ripple inside its host control, in the host's local
/// pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    /// Diameter: the larger side of the host.
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

/// Center a circle as large as the host's longer side on the pointer.
#[must_use]
pub fn geometry(host: Rect, client_x: f64, client_y: f64) -> RippleGeometry {
    let size = host.width.max(host.height);
    RippleGeometry {
        size,
        left: client_x - host.left - size / 2.0,
        top: client_y - host.top - size / 2.0,
    }
}

/// Spawn one ripple in `host` for a press at the event's pointer position
/// and schedule its removal after `lifetime`.
pub fn spawn(
    document: &dyn Document,
    scheduler: &dyn Scheduler,
    host: &ElementRef,
    event: &Event,
    lifetime: Duration,
) -> Option<ElementRef> {
    let ripple = document.create_element("span")?;
    let g = geometry(host.bounding_rect(), event.client_x, event.client_y);
    let (size, left, top) = (px(g.size), px(g.left), px(g.top));
    let animation = format!("rippleEffect {}s linear", lifetime.as_secs_f64());

    for (property, value) in [
        ("position", "absolute"),
        ("width", size.as_str()),
        ("height", size.as_str()),
        ("left", left.as_str()),
        ("top", top.as_str()),
        ("background", "rgba(255, 255, 255, 0.5)"),
        ("border-radius", "50%"),
        ("transform", "scale(0)"),
        ("animation", animation.as_str()),
        ("pointer-events", "none"),
    ] {
        ripple.set_style(property, value);
    }
    ripple.add_class("ripple");
    host.append_child(&ripple);

    let expiring = Rc::clone(&ripple);
    scheduler.set_timeout(lifetime, Box::new(move || expiring.remove()));
    Some(ripple)
}

/// Bind ripples to every control matching [`selectors::RIPPLE_CONTROLS`].
/// Returns how many controls were bound.
pub fn setup(
    document: &Rc<dyn Document>,
    scheduler: &Rc<dyn Scheduler>,
    lifetime: Duration,
) -> Result<usize, SetupError> {
    let controls = dom::require_all(document.as_ref(), Behavior::Ripple, selectors::RIPPLE_CONTROLS)?;
    for control in &controls {
        let document = Rc::clone(document);
        let scheduler = Rc::clone(scheduler);
        let host = Rc::clone(control);
        control.listen(
            EventKind::Click,
            Rc::new(move |event: &Event| {
                if spawn(document.as_ref(), scheduler.as_ref(), &host, event, lifetime).is_none() {
                    log::warn!("ripple skipped, element creation failed");
                }
            }),
        );
    }
    Ok(controls.len())
}
