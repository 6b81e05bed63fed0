//! Interaction engine for the Glassfront landing page.
//!
//! Every visual behavior of the page (theme toggle, locale switcher, ripple
//! feedback, toast notifications, floating decorations, scroll parallax,
//! ambient idle motion, navigation reveal) lives here, written against a
//! small element accessor abstraction instead of the browser DOM. The host
//! crate only builds a concrete [`site::Env`] and calls [`site::Site::boot`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`dom`] | `Element` / `Document` accessor traits and event types |
//! | [`schedule`] | Deferred-callback and per-frame scheduling trait |
//! | [`store`] | Durable key-value preference store trait |
//! | [`config`] | Immutable site configuration and the two presets |
//! | [`theme`] | Light/dark toggle with persisted preference |
//! | [`locale`] | Locale table rendering and the fading text switcher |
//! | [`ripple`] | Pointer ripple overlays on buttons |
//! | [`toast`] | Auto-dismissing notifications and their triggers |
//! | [`floating`] | Randomized decorative elements |
//! | [`parallax`] | Scroll-proportional transforms |
//! | [`ambient`] | Cancellable per-frame idle animations |
//! | [`nav`] | Debounced reveal-on-hover for the top navigation |
//! | [`site`] | Controller that boots every behavior independently |
//! | [`memory`] | In-memory document, virtual clock and store for tests |
//! | `web` | `web-sys` adapter (feature `web`) |

pub mod ambient;
pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod floating;
pub mod locale;
pub mod memory;
pub mod nav;
pub mod parallax;
pub mod ripple;
pub mod schedule;
pub mod selectors;
pub mod site;
pub mod store;
pub mod theme;
pub mod toast;
#[cfg(feature = "web")]
pub mod web;

pub use config::SiteConfig;
pub use site::{Env, Site};
