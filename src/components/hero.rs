//! Hero section: background, floating container, copy and the two actions.

use leptos::prelude::*;

use fx::locale::LocaleText;
use fx::selectors;

use super::bare;

/// Hero section with the initial locale's strings.
///
/// The subtitle is rendered as markup; it only ever comes from the
/// developer-authored locale table.
#[component]
pub fn Hero(text: LocaleText) -> impl IntoView {
    let LocaleText { title, slogan, subtitle, primary, secondary } = text;
    let slogan = slogan.map(|slogan| view! { <p class=bare(selectors::HERO_SLOGAN)>{slogan}</p> });

    view! {
        <section class="hero">
            <div class=bare(selectors::HERO_BACKGROUND)></div>
            <div id=bare(selectors::FLOATING_CONTAINER) class="floating-elements"></div>
            <div class="hero-content">
                <h1 class=bare(selectors::HERO_TITLE)>{title}</h1>
                {slogan}
                <p class=bare(selectors::HERO_SUBTITLE) inner_html=subtitle></p>
                <div class="hero-actions">
                    <button id=bare(selectors::PRIMARY_ACTION) class="cta-btn primary">{primary}</button>
                    <button id=bare(selectors::SECONDARY_ACTION) class="cta-btn secondary">{secondary}</button>
                </div>
            </div>
        </section>
    }
}
