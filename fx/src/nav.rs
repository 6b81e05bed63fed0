//! Reveal-on-hover for the top navigation controls.
//!
//! Two states and one cancellable timer: entering (or touching) the nav
//! shows the language selector and theme toggle at once; leaving it, or
//! touching anywhere outside it, hides them after a delay unless the
//! pointer comes back first.

use std::cell::Cell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::consts::{GLASS_EASING, NAV_HIDDEN_OFFSET_PX};
use crate::dom::{self, Document, ElementRef, Event, EventKind, px};
use crate::error::SetupError;
use crate::schedule::{Scheduler, TimerId};
use crate::selectors;
use crate::site::Behavior;

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavVisibility {
    #[default]
    Hidden,
    Shown,
}

pub struct NavReveal {
    container: ElementRef,
    targets: Vec<ElementRef>,
    scheduler: Rc<dyn Scheduler>,
    hide_delay: Duration,
    visibility: Cell<NavVisibility>,
    hide_timer: Cell<Option<TimerId>>,
}

impl NavReveal {
    /// Hide the controls and bind the container and window listeners.
    pub fn setup(
        document: &dyn Document,
        scheduler: Rc<dyn Scheduler>,
        hide_delay: Duration,
    ) -> Result<Rc<Self>, SetupError> {
        let container = dom::require(document, Behavior::NavReveal, selectors::TOP_NAV)?;
        let targets = [selectors::LANGUAGE_SELECTOR, selectors::NAV_THEME_TOGGLE]
            .into_iter()
            .filter_map(|selector| dom::optional(document, Behavior::NavReveal, selector))
            .collect::<Vec<_>>();
        if targets.is_empty() {
            return Err(SetupError::EmptySelection {
                behavior: Behavior::NavReveal,
                selector: selectors::LANGUAGE_SELECTOR,
            });
        }

        let nav = Rc::new(Self {
            container,
            targets,
            scheduler,
            hide_delay,
            visibility: Cell::new(NavVisibility::Hidden),
            hide_timer: Cell::new(None),
        });
        for target in &nav.targets {
            target.set_style("transition", &format!("all 0.3s {GLASS_EASING}"));
        }
        nav.paint(NavVisibility::Hidden);

        for kind in [EventKind::MouseEnter, EventKind::TouchStart] {
            let weak: Weak<Self> = Rc::downgrade(&nav);
            nav.container.listen(
                kind,
                Rc::new(move |_: &Event| {
                    if let Some(nav) = weak.upgrade() {
                        nav.reveal();
                    }
                }),
            );
        }

        let weak: Weak<Self> = Rc::downgrade(&nav);
        nav.container.listen(
            EventKind::MouseLeave,
            Rc::new(move |_: &Event| {
                if let Some(nav) = weak.upgrade() {
                    nav.schedule_hide();
                }
            }),
        );

        let weak: Weak<Self> = Rc::downgrade(&nav);
        document.listen_window(
            EventKind::TouchStart,
            Rc::new(move |event: &Event| {
                let Some(nav) = weak.upgrade() else {
                    return;
                };
                let inside = event
                    .target
                    .as_ref()
                    .is_some_and(|target| nav.container.contains(target));
                if !inside {
                    nav.schedule_hide();
                }
            }),
        );
        Ok(nav)
    }

    #[must_use]
    pub fn visibility(&self) -> NavVisibility {
        self.visibility.get()
    }

    /// Whether a hide is scheduled and not yet fired.
    #[must_use]
    pub fn hide_pending(&self) -> bool {
        self.hide_timer.get().is_some()
    }

    /// Show the controls now, cancelling any scheduled hide.
    pub fn reveal(&self) {
        self.cancel_hide();
        if self.visibility.replace(NavVisibility::Shown) != NavVisibility::Shown {
            self.paint(NavVisibility::Shown);
        }
    }

    /// Hide after the configured delay. Re-scheduling restarts the delay.
    pub fn schedule_hide(self: &Rc<Self>) {
        self.cancel_hide();
        let weak = Rc::downgrade(self);
        let id = self.scheduler.set_timeout(
            self.hide_delay,
            Box::new(move || {
                if let Some(nav) = weak.upgrade() {
                    nav.hide_timer.set(None);
                    nav.hide();
                }
            }),
        );
        self.hide_timer.set(Some(id));
    }

    /// Hide the controls now.
    pub fn hide(&self) {
        self.cancel_hide();
        if self.visibility.replace(NavVisibility::Hidden) != NavVisibility::Hidden {
            self.paint(NavVisibility::Hidden);
        }
    }

    /// Drop any scheduled hide.
    pub fn cancel_hide(&self) {
        if let Some(id) = self.hide_timer.take() {
            self.scheduler.clear_timeout(id);
        }
    }

    fn paint(&self, visibility: NavVisibility) {
        let (opacity, offset) = match visibility {
            NavVisibility::Shown => ("1", 0.0),
            NavVisibility::Hidden => ("0", NAV_HIDDEN_OFFSET_PX),
        };
        let transform = format!("translateX({})", px(offset));
        for target in &self.targets {
            target.set_style("opacity", opacity);
            target.set_style("transform", &transform);
        }
    }
}
