//! Light/dark theme toggle.
//!
//! Reads the persisted preference at startup and applies a `data-theme`
//! attribute to the root element. Toggling writes the complement back to
//! the attribute and the store, and briefly sets a transition on the root
//! so the stylesheet can animate the palette change.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: an unavailable store means every load starts
//! light and toggles are not remembered, which is never surfaced to the user.

use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::str::FromStr;
use std::time::Duration;

use crate::consts::{THEME_ATTRIBUTE, THEME_KEY, THEME_TRANSITION};
use crate::dom::{self, Document, ElementRef, Event, EventKind};
use crate::error::SetupError;
use crate::schedule::Scheduler;
use crate::selectors;
use crate::site::Behavior;
use crate::store::PreferenceStore;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Indicator shown on the toggle: moon for dark, sun for light.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Light => "☀️",
            Self::Dark => "🌙",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Read the stored theme, falling back to light on absence or failure.
pub fn read_preference(store: &dyn PreferenceStore) -> Theme {
    match store.read(THEME_KEY) {
        Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|err| {
            log::warn!("ignoring stored theme: {err}");
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(err) => {
            log::warn!("theme preference unreadable, using default: {err}");
            Theme::default()
        }
    }
}

/// Persist `theme`. Failures are logged; the applied theme stands.
pub fn write_preference(store: &dyn PreferenceStore, theme: Theme) {
    if let Err(err) = store.write(THEME_KEY, theme.as_str()) {
        log::warn!("theme preference not saved: {err}");
    }
}

/// The toggle control bound to the root element and glyph.
pub struct ThemeToggle {
    root: ElementRef,
    glyph: ElementRef,
    store: Rc<dyn PreferenceStore>,
    scheduler: Rc<dyn Scheduler>,
    transition: Duration,
    generation: Rc<Cell<u64>>,
}

impl ThemeToggle {
    /// Apply the stored theme without animation and bind the toggle.
    pub fn setup(
        document: &dyn Document,
        store: Rc<dyn PreferenceStore>,
        scheduler: Rc<dyn Scheduler>,
        transition: Duration,
    ) -> Result<Rc<Self>, SetupError> {
        let control = dom::require(document, Behavior::Theme, selectors::THEME_TOGGLE)?;
        let glyph = dom::require(document, Behavior::Theme, selectors::THEME_ICON)?;

        let toggle = Rc::new(Self {
            root: document.root(),
            glyph,
            store,
            scheduler,
            transition,
            generation: Rc::new(Cell::new(0)),
        });
        let initial = read_preference(toggle.store.as_ref());
        toggle.apply(initial);

        let weak: Weak<Self> = Rc::downgrade(&toggle);
        control.listen(
            EventKind::Click,
            Rc::new(move |_: &Event| {
                if let Some(toggle) = weak.upgrade() {
                    toggle.toggle();
                }
            }),
        );
        log::debug!("theme toggle bound, initial theme {initial}");
        Ok(toggle)
    }

    /// Theme currently applied to the root. Missing or unknown reads as light.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.root
            .attribute(THEME_ATTRIBUTE)
            .map_or(Theme::default(), |raw| raw.parse::<Theme>().unwrap_or_default())
    }

    /// Set the attribute and glyph without animating.
    pub fn apply(&self, theme: Theme) {
        self.root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        self.glyph.set_text(theme.glyph());
    }

    /// Switch to the complement of the current theme, animate, persist.
    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.apply(next);
        self.hint_transition();
        write_preference(self.store.as_ref(), next);
        log::debug!("theme toggled to {next}");
        next
    }

    fn hint_transition(&self) {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        self.root.set_style("transition", THEME_TRANSITION);

        let root = Rc::clone(&self.root);
        let latest = Rc::clone(&self.generation);
        self.scheduler.set_timeout(
            self.transition,
            Box::new(move || {
                // A newer toggle owns the hint; only its timer clears it.
                if latest.get() == generation {
                    root.clear_style("transition");
                }
            }),
        );
    }
}
