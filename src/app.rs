//! Root application component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the markup the interaction engine binds to, with the default
//! locale's strings already in place, then boots `fx::Site` once the DOM
//! exists. Every later mutation (theme, locale, toasts, motion) belongs to
//! the engine; nothing here is reactive.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use fx::SiteConfig;
use fx::locale::LocaleText;

use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

#[cfg(feature = "csr")]
thread_local! {
    static SITE: std::cell::RefCell<Option<fx::Site>> = const { std::cell::RefCell::new(None) };
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::default();
    let active = config.default_locale;
    let text = initial_text(&config);

    #[cfg(feature = "csr")]
    {
        let boot_config = config.clone();
        Effect::new(move || {
            SITE.with(|slot| {
                let mut slot = slot.borrow_mut();
                if slot.is_none() {
                    *slot = fx::web::boot(boot_config.clone());
                }
            });
        });
    }

    view! {
        <Title text="Glassfront"/>
        <Meta name="description" content=page_description(&text)/>

        <NavBar active=active/>
        <main>
            <Hero text=text/>
        </main>
    }
}

/// Strings rendered before the engine takes over.
///
/// A configuration without an entry for its default locale renders empty
/// slots rather than failing; the engine fills them on the first switch.
pub fn initial_text(config: &SiteConfig) -> LocaleText {
    config.default_text().cloned().unwrap_or_else(|| LocaleText {
        title: String::new(),
        slogan: None,
        subtitle: String::new(),
        primary: String::new(),
        secondary: String::new(),
    })
}

/// Meta description: the slogan when there is one, else the title.
pub fn page_description(text: &LocaleText) -> String {
    text.slogan.clone().unwrap_or_else(|| text.title.clone())
}
