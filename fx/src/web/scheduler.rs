//! `Scheduler` over `setTimeout` and `requestAnimationFrame`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use super::warn_js;
use crate::schedule::{FrameId, Scheduler, TimerId};

/// Browser timers keyed by engine-issued ids.
///
/// A fired `Timeout` cannot be dropped from inside its own callback, so it
/// is parked in `spent` and released when the next timer fires.
pub struct WebScheduler {
    window: Window,
    next_id: Cell<u64>,
    timers: Rc<RefCell<HashMap<u64, Timeout>>>,
    spent: Rc<RefCell<Option<Timeout>>>,
}

impl WebScheduler {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self {
            window,
            next_id: Cell::new(0),
            timers: Rc::new(RefCell::new(HashMap::new())),
            spent: Rc::new(RefCell::new(None)),
        }
    }
}

impl Scheduler for WebScheduler {
    fn set_timeout(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);

        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timers = Rc::clone(&self.timers);
        let spent = Rc::clone(&self.spent);
        let timeout = Timeout::new(millis, move || {
            let fired = timers.borrow_mut().remove(&id);
            *spent.borrow_mut() = fired;
            task();
        });
        self.timers.borrow_mut().insert(id, timeout);
        TimerId(id)
    }

    fn clear_timeout(&self, id: TimerId) {
        let cancelled = self.timers.borrow_mut().remove(&id.0);
        if let Some(timeout) = cancelled {
            timeout.cancel();
        }
    }

    fn request_frame(&self, task: Box<dyn FnOnce(f64)>) -> FrameId {
        let callback = Closure::once_into_js(move |timestamp: f64| task(timestamp));
        match self.window.request_animation_frame(callback.unchecked_ref()) {
            Ok(handle) => FrameId(u64::from(handle.unsigned_abs())),
            Err(err) => {
                warn_js("requestAnimationFrame", &err);
                FrameId(0)
            }
        }
    }

    fn cancel_frame(&self, id: FrameId) {
        let Ok(handle) = i32::try_from(id.0) else {
            return;
        };
        if handle == 0 {
            return;
        }
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            warn_js("cancelAnimationFrame", &err);
        }
    }
}
