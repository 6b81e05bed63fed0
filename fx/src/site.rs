//! Page controller: boots every behavior against one environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host builds an [`Env`] (real browser or in-memory) and calls
//! [`Site::boot`] once the markup is mounted. Behaviors are independent:
//! one that cannot find its elements is logged and recorded in
//! [`Site::skipped`] while the rest keep working.

use std::fmt;
use std::rc::Rc;

use rand::Rng;

use crate::ambient::{self, AnimationTask};
use crate::config::SiteConfig;
use crate::dom::{self, Document, ElementRef};
use crate::error::SetupError;
use crate::floating;
use crate::locale::LocaleSwitcher;
use crate::nav::NavReveal;
use crate::parallax::Parallax;
use crate::ripple;
use crate::schedule::Scheduler;
use crate::selectors;
use crate::store::PreferenceStore;
use crate::theme::ThemeToggle;
use crate::toast::{self, Category, Notifier};

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

/// The independently booted behaviors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Behavior {
    Theme,
    Locale,
    PrimaryAction,
    SecondaryAction,
    Floating,
    Parallax,
    Ripple,
    Breathing,
    Wave,
    NavReveal,
}

impl Behavior {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Theme => "theme-toggle",
            Self::Locale => "locale-switcher",
            Self::PrimaryAction => "primary-action",
            Self::SecondaryAction => "secondary-action",
            Self::Floating => "floating-elements",
            Self::Parallax => "scroll-parallax",
            Self::Ripple => "ripple",
            Self::Breathing => "ambient-breathing",
            Self::Wave => "ambient-wave",
            Self::NavReveal => "nav-reveal",
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host services the behaviors run against.
#[derive(Clone)]
pub struct Env {
    pub document: Rc<dyn Document>,
    pub scheduler: Rc<dyn Scheduler>,
    pub store: Rc<dyn PreferenceStore>,
}

/// Every booted behavior, kept alive for the lifetime of the page.
pub struct Site {
    config: Rc<SiteConfig>,
    notifier: Rc<Notifier>,
    theme: Option<Rc<ThemeToggle>>,
    locale: Option<Rc<LocaleSwitcher>>,
    floating: Vec<ElementRef>,
    parallax: Option<Rc<Parallax>>,
    ripple_controls: usize,
    ambient: Vec<AnimationTask>,
    nav: Option<Rc<NavReveal>>,
    skipped: Vec<SetupError>,
}

impl Site {
    /// Boot every behavior `config` enables, in page order.
    pub fn boot<R: Rng>(env: &Env, config: SiteConfig, rng: &mut R) -> Self {
        let config = Rc::new(config);
        let document = env.document.as_ref();
        let timings = config.timings;
        let mut skipped = Vec::new();

        let theme = keep(
            &mut skipped,
            ThemeToggle::setup(
                document,
                Rc::clone(&env.store),
                Rc::clone(&env.scheduler),
                timings.theme_transition(),
            ),
        );

        let locale = keep(
            &mut skipped,
            LocaleSwitcher::setup(
                document,
                Rc::clone(&env.scheduler),
                config.locales.clone(),
                config.default_locale,
                timings.text_fade(),
            ),
        );

        let notifier =
            Rc::new(Notifier::new(Rc::clone(&env.document), Rc::clone(&env.scheduler), timings.toast()));
        keep(
            &mut skipped,
            toast::bind_trigger(
                document,
                &notifier,
                Behavior::PrimaryAction,
                selectors::PRIMARY_ACTION,
                config.triggers.primary.clone(),
            ),
        );
        keep(
            &mut skipped,
            toast::bind_trigger(
                document,
                &notifier,
                Behavior::SecondaryAction,
                selectors::SECONDARY_ACTION,
                config.triggers.secondary.clone(),
            ),
        );

        let floating = keep(&mut skipped, floating::setup(document, &config.floating, rng)).unwrap_or_default();

        let parallax = keep(
            &mut skipped,
            Parallax::setup(
                Rc::clone(&env.document),
                Rc::clone(&env.scheduler),
                floating.clone(),
                config.parallax,
            ),
        );

        let ripple_controls =
            keep(&mut skipped, ripple::setup(&env.document, &env.scheduler, timings.ripple())).unwrap_or(0);

        let mut ambient = Vec::new();
        if let Some(ambient_config) = config.ambient {
            let breathing = dom::require(document, Behavior::Breathing, selectors::HERO_BACKGROUND)
                .map(|bg| ambient::breathing(Rc::clone(&env.scheduler), bg, ambient_config));
            ambient.extend(keep(&mut skipped, breathing));
            let wave = dom::require(document, Behavior::Wave, selectors::HERO_TITLE)
                .map(|title| ambient::wave(Rc::clone(&env.scheduler), title, ambient_config));
            ambient.extend(keep(&mut skipped, wave));
        }

        let nav = if config.nav_reveal {
            keep(&mut skipped, NavReveal::setup(document, Rc::clone(&env.scheduler), timings.nav_hide()))
        } else {
            None
        };

        log::info!("site initialized, {} behavior(s) skipped ✨", skipped.len());
        Self { config, notifier, theme, locale, floating, parallax, ripple_controls, ambient, nav, skipped }
    }

    /// Raise a toast outside of any trigger.
    pub fn notify(&self, message: &str, category: Category) -> Option<ElementRef> {
        self.notifier.notify(message, category)
    }

    /// Stop idle animation and any pending nav hide. Event listeners stay
    /// bound; the document owns them.
    pub fn teardown(&self) {
        for task in &self.ambient {
            task.stop();
        }
        if let Some(nav) = &self.nav {
            nav.cancel_hide();
        }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn theme(&self) -> Option<&Rc<ThemeToggle>> {
        self.theme.as_ref()
    }

    #[must_use]
    pub fn locale(&self) -> Option<&Rc<LocaleSwitcher>> {
        self.locale.as_ref()
    }

    #[must_use]
    pub fn floating_elements(&self) -> &[ElementRef] {
        &self.floating
    }

    #[must_use]
    pub fn parallax(&self) -> Option<&Rc<Parallax>> {
        self.parallax.as_ref()
    }

    #[must_use]
    pub fn ripple_controls(&self) -> usize {
        self.ripple_controls
    }

    #[must_use]
    pub fn ambient_tasks(&self) -> &[AnimationTask] {
        &self.ambient
    }

    #[must_use]
    pub fn nav(&self) -> Option<&Rc<NavReveal>> {
        self.nav.as_ref()
    }

    /// Behaviors that failed to bind, with the reason.
    #[must_use]
    pub fn skipped(&self) -> &[SetupError] {
        &self.skipped
    }

    #[must_use]
    pub fn is_skipped(&self, behavior: Behavior) -> bool {
        self.skipped.iter().any(|err| err.behavior() == behavior)
    }
}

fn keep<T>(skipped: &mut Vec<SetupError>, result: Result<T, SetupError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("behavior skipped: {err}");
            skipped.push(err);
            None
        }
    }
}
