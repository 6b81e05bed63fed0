//! Page skeleton components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the ids and classes the `fx` engine looks up. They are
//! static: the engine mutates the rendered nodes directly after boot. Names
//! are derived from `fx::selectors` so markup and lookups cannot drift.

pub mod hero;
pub mod nav_bar;


/// Id or class name of a single `#id` / `.class` selector.
pub fn bare(selector: &'static str) -> &'static str {
    selector.trim_start_matches(['#', '.'])
}
