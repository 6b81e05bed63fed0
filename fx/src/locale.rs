//! Locale table rendering and the hero text switcher.
//!
//! DESIGN
//! ======
//! The translation table is immutable configuration and [`render`] is a pure
//! function from one [`LocaleText`] to an ordered list of slot updates. The
//! switcher owns the active locale as an explicit value; the `active` class
//! on the controls mirrors it and is never read back.
//!
//! The subtitle is the only slot rendered as markup. Its strings come from
//! the developer-authored configuration, never from user input.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{ACTIVE_CLASS, LOCALE_ATTRIBUTE, TEXT_FADE_OFFSET_PX};
use crate::dom::{self, Document, ElementRef, Event, EventKind, px};
use crate::error::SetupError;
use crate::schedule::Scheduler;
use crate::selectors;
use crate::site::Behavior;

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

/// Supported display languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Zh,
    Ja,
    En,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Zh, Locale::Ja, Locale::En];

    /// Code used in `data-lang` attributes.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::Ja => "ja",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" => Ok(Self::Zh),
            "ja" => Ok(Self::Ja),
            "en" => Ok(Self::En),
            _ => Err(LocaleError::UnknownCode(s.to_owned())),
        }
    }
}

/// Why a locale switch was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("unknown locale code `{0}`")]
    UnknownCode(String),
    #[error("locale `{0}` has no entry in the locale table")]
    Missing(Locale),
    #[error("locale control has no `data-lang` attribute")]
    Unlabeled,
}

/// Display strings for one locale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleText {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slogan: Option<String>,
    /// Rendered as markup; may contain inline tags such as `<br>`.
    pub subtitle: String,
    pub primary: String,
    pub secondary: String,
}

/// Locale code to display strings.
pub type LocaleTable = BTreeMap<Locale, LocaleText>;

/// Regions of the hero whose text follows the locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Title,
    Slogan,
    Subtitle,
    Primary,
    Secondary,
}

impl Slot {
    pub const ALL: [Slot; 5] = [Slot::Title, Slot::Slogan, Slot::Subtitle, Slot::Primary, Slot::Secondary];

    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            Self::Title => selectors::HERO_TITLE,
            Self::Slogan => selectors::HERO_SLOGAN,
            Self::Subtitle => selectors::HERO_SUBTITLE,
            Self::Primary => selectors::PRIMARY_ACTION,
            Self::Secondary => selectors::SECONDARY_ACTION,
        }
    }
}

/// New content for one slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlotContent {
    Text(String),
    Markup(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotUpdate {
    pub slot: Slot,
    pub content: SlotContent,
}

/// Render one locale's strings into slot updates, in display order.
///
/// The slogan is omitted when the locale has none.
#[must_use]
pub fn render(text: &LocaleText) -> Vec<SlotUpdate> {
    let mut updates = Vec::with_capacity(Slot::ALL.len());
    updates.push(SlotUpdate { slot: Slot::Title, content: SlotContent::Text(text.title.clone()) });
    if let Some(slogan) = &text.slogan {
        updates.push(SlotUpdate { slot: Slot::Slogan, content: SlotContent::Text(slogan.clone()) });
    }
    updates.push(SlotUpdate { slot: Slot::Subtitle, content: SlotContent::Markup(text.subtitle.clone()) });
    updates.push(SlotUpdate { slot: Slot::Primary, content: SlotContent::Text(text.primary.clone()) });
    updates.push(SlotUpdate { slot: Slot::Secondary, content: SlotContent::Text(text.secondary.clone()) });
    updates
}

/// Resolve a `data-lang` code against the table.
pub fn lookup<'a>(table: &'a LocaleTable, code: &str) -> Result<(Locale, &'a LocaleText), LocaleError> {
    let locale = code.parse::<Locale>()?;
    let text = table.get(&locale).ok_or(LocaleError::Missing(locale))?;
    Ok((locale, text))
}

/// Fade `element` out, then swap its content and fade it back in after
/// `delay`. Concurrent swaps on one element are not coalesced.
pub fn fade_swap(scheduler: &dyn Scheduler, element: &ElementRef, content: SlotContent, delay: Duration) {
    element.set_style("opacity", "0");
    element.set_style("transform", &format!("translateY({})", px(TEXT_FADE_OFFSET_PX)));

    let element = Rc::clone(element);
    scheduler.set_timeout(
        delay,
        Box::new(move || {
            match &content {
                SlotContent::Text(text) => element.set_text(text),
                SlotContent::Markup(markup) => element.set_markup(markup),
            }
            element.set_style("opacity", "1");
            element.set_style("transform", "translateY(0)");
        }),
    );
}

/// Locale switcher bound to the locale controls and hero slots.
pub struct LocaleSwitcher {
    controls: Vec<ElementRef>,
    slots: Vec<(Slot, ElementRef)>,
    table: LocaleTable,
    scheduler: Rc<dyn Scheduler>,
    fade: Duration,
    active: Cell<Locale>,
}

impl LocaleSwitcher {
    /// Bind to every `.lang-btn` and whichever hero slots exist.
    ///
    /// The initial locale is the one whose control already carries the
    /// active marker, else `default`.
    pub fn setup(
        document: &dyn Document,
        scheduler: Rc<dyn Scheduler>,
        table: LocaleTable,
        default: Locale,
        fade: Duration,
    ) -> Result<Rc<Self>, SetupError> {
        let controls = dom::require_all(document, Behavior::Locale, selectors::LOCALE_CONTROLS)?;
        let slots = Slot::ALL
            .iter()
            .filter_map(|&slot| dom::optional(document, Behavior::Locale, slot.selector()).map(|el| (slot, el)))
            .collect::<Vec<_>>();

        let initial = controls
            .iter()
            .filter(|c| c.has_class(ACTIVE_CLASS))
            .find_map(|c| match c.attribute(LOCALE_ATTRIBUTE)?.parse::<Locale>() {
                Ok(locale) => Some(locale),
                Err(err) => {
                    log::warn!("active locale control ignored: {err}");
                    None
                }
            })
            .unwrap_or(default);

        let switcher = Rc::new(Self { controls, slots, table, scheduler, fade, active: Cell::new(initial) });
        switcher.mark(initial, None);

        for control in &switcher.controls {
            let weak: Weak<Self> = Rc::downgrade(&switcher);
            let target = Rc::clone(control);
            control.listen(
                EventKind::Click,
                Rc::new(move |event: &Event| {
                    event.prevent_default();
                    if let Some(switcher) = weak.upgrade() {
                        if let Err(err) = switcher.activate(&target) {
                            log::warn!("locale switch ignored: {err}");
                        }
                    }
                }),
            );
        }
        log::debug!("locale switcher bound to {} controls, {} slots", switcher.controls.len(), switcher.slots.len());
        Ok(switcher)
    }

    /// The locale currently displayed.
    #[must_use]
    pub fn active(&self) -> Locale {
        self.active.get()
    }

    /// Handle activation of one locale control.
    pub fn activate(&self, control: &ElementRef) -> Result<Locale, LocaleError> {
        let code = control.attribute(LOCALE_ATTRIBUTE).ok_or(LocaleError::Unlabeled)?;
        let (locale, text) = lookup(&self.table, &code)?;
        self.show(locale, text, Some(control));
        Ok(locale)
    }

    /// Switch to `locale`. Fails closed: a locale missing from the table
    /// changes nothing.
    pub fn switch(&self, locale: Locale) -> Result<(), LocaleError> {
        let text = self.table.get(&locale).ok_or(LocaleError::Missing(locale))?;
        self.show(locale, text, None);
        Ok(())
    }

    fn show(&self, locale: Locale, text: &LocaleText, activated: Option<&ElementRef>) {
        self.mark(locale, activated);
        self.active.set(locale);

        for update in render(text) {
            if let Some((_, element)) = self.slots.iter().find(|(slot, _)| *slot == update.slot) {
                fade_swap(self.scheduler.as_ref(), element, update.content, self.fade);
            }
        }
        log::debug!("locale switched to {locale}");
    }

    /// Move the active marker to `activated`, or to the first control for
    /// `locale` when the switch did not come from a control.
    fn mark(&self, locale: Locale, activated: Option<&ElementRef>) {
        for control in &self.controls {
            control.remove_class(ACTIVE_CLASS);
        }
        let target = activated.or_else(|| {
            self.controls
                .iter()
                .find(|c| c.attribute(LOCALE_ATTRIBUTE).is_some_and(|code| code.parse::<Locale>() == Ok(locale)))
        });
        if let Some(control) = target {
            control.add_class(ACTIVE_CLASS);
        }
    }
}
