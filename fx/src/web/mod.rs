//! Browser adapter: the engine's host seams over `web-sys`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leptos shell renders the markup, then calls [`boot`] once from the
//! browser. Everything behind this module is WASM-only and compiled with the
//! `web` feature; the rest of the crate never names a `web_sys` type.
//!
//! TRADE-OFFS
//! ==========
//! Event listeners are leaked into the page (`Closure::forget`). Behaviors
//! bind once for the page lifetime, so there is nothing to unbind.

mod element;
mod scheduler;
mod store;

use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsValue;

use crate::config::SiteConfig;
use crate::site::{Env, Site};

pub use element::{WebDocument, WebElement};
pub use scheduler::WebScheduler;
pub use store::LocalStorage;

/// Host services for the current browser window, or `None` outside a page.
pub fn environment() -> Option<Env> {
    let window = web_sys::window()?;
    let document = WebDocument::new(window.clone())?;
    let store = LocalStorage::new(&window);
    Some(Env {
        document: Rc::new(document),
        scheduler: Rc::new(WebScheduler::new(window)),
        store: Rc::new(store),
    })
}

/// Seed for decoration layout; varies per page load.
#[must_use]
pub fn seed() -> u64 {
    js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits()
}

/// Boot every behavior against the live page.
pub fn boot(config: SiteConfig) -> Option<Site> {
    let Some(env) = environment() else {
        log::warn!("no browser window; interaction engine not started");
        return None;
    };
    let mut rng = SmallRng::seed_from_u64(seed());
    Some(Site::boot(&env, config, &mut rng))
}

pub(crate) fn warn_js(action: &str, err: &JsValue) {
    log::warn!("{action} failed: {err:?}");
}
