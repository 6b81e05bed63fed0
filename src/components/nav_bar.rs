//! Top navigation: locale controls and the theme toggle.

use leptos::prelude::*;

use fx::locale::Locale;
use fx::selectors;
use fx::theme::Theme;

use super::bare;

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

/// Label shown on a locale control, in that locale's own script.
pub fn locale_label(locale: Locale) -> &'static str {
    match locale {
        Locale::Zh => "中文",
        Locale::Ja => "日本語",
        Locale::En => "EN",
    }
}

/// Fixed top navigation. `active` is marked so the switcher starts there.
#[component]
pub fn NavBar(active: Locale) -> impl IntoView {
    let controls = Locale::ALL
        .into_iter()
        .map(|locale| {
            view! {
                <a
                    href="#"
                    class=bare(selectors::LOCALE_CONTROLS)
                    class:active={locale == active}
                    data-lang=locale.code()
                >
                    {locale_label(locale)}
                </a>
            }
        })
        .collect_view();

    // Classic pages show these permanently; the engine hides them when
    // nav reveal is on.
    view! {
        <nav class=bare(selectors::TOP_NAV)>
            <div class=bare(selectors::LANGUAGE_SELECTOR)>{controls}</div>
            <button
                id=bare(selectors::THEME_TOGGLE)
                class=bare(selectors::NAV_THEME_TOGGLE)
                aria-label="Toggle theme"
            >
                <span id=bare(selectors::THEME_ICON)>{Theme::default().glyph()}</span>
            </button>
        </nav>
    }
}
