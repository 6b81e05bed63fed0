//! Randomized floating decorations.
//!
//! Spawned once at startup; CSS keyframes drive their motion and the
//! spawner never revisits them. The parallax behavior receives the spawned
//! handles so it can offset them on scroll.

use rand::Rng;

use crate::config::FloatingConfig;
use crate::dom::{self, Document, ElementRef};
use crate::error::SetupError;
use crate::selectors::{self, FLOATING_ELEMENT_CLASS};
use crate::site::Behavior;

#[cfg(test)]
#[path = "floating_test.rs"]
mod floating_test;

/// Randomized placement and timing for one decoration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Percent of the container width, in `[0, 100)`.
    pub left_pct: f64,
    /// Percent of the container height, in `[0, 100)`.
    pub top_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

/// Draw one placement, each field uniform over its range.
pub fn sample<R: Rng>(rng: &mut R, config: &FloatingConfig) -> Placement {
    Placement {
        left_pct: rng.random_range(0.0..100.0),
        top_pct: rng.random_range(0.0..100.0),
        delay_s: uniform(rng, 0.0, config.delay_max_s),
        duration_s: uniform(rng, config.duration_min_s, config.duration_span_s),
    }
}

fn uniform<R: Rng>(rng: &mut R, start: f64, span: f64) -> f64 {
    if span > 0.0 { start + rng.random_range(0.0..span) } else { start }
}

/// Create `config.count` decorations inside `container`.
pub fn spawn<R: Rng>(
    document: &dyn Document,
    container: &ElementRef,
    config: &FloatingConfig,
    rng: &mut R,
) -> Vec<ElementRef> {
    let mut spawned = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        let Some(element) = document.create_element("div") else {
            log::warn!("floating element creation failed, stopping at {}", spawned.len());
            break;
        };
        let p = sample(rng, config);
        element.add_class(FLOATING_ELEMENT_CLASS);
        element.set_style("left", &format!("{}%", p.left_pct));
        element.set_style("top", &format!("{}%", p.top_pct));
        element.set_style("animation-delay", &format!("{}s", p.delay_s));
        element.set_style("animation-duration", &format!("{}s", p.duration_s));
        container.append_child(&element);
        spawned.push(element);
    }
    spawned
}

/// Find the container and populate it.
pub fn setup<R: Rng>(
    document: &dyn Document,
    config: &FloatingConfig,
    rng: &mut R,
) -> Result<Vec<ElementRef>, SetupError> {
    let container = dom::require(document, Behavior::Floating, selectors::FLOATING_CONTAINER)?;
    let spawned = spawn(document, &container, config, rng);
    log::debug!("spawned {} floating elements", spawned.len());
    Ok(spawned)
}
