//! Selectors naming the elements the page markup must provide.
//!
//! Ids start with `#`, classes with `.`; a comma joins alternatives. These
//! are the only places the engine reaches into the document.

pub const THEME_TOGGLE: &str = "#themeToggle";
pub const THEME_ICON: &str = "#themeIcon";

pub const LOCALE_CONTROLS: &str = ".lang-btn";
pub const HERO_TITLE: &str = ".hero-title";
pub const HERO_SLOGAN: &str = ".hero-slogan";
pub const HERO_SUBTITLE: &str = ".hero-subtitle";

pub const PRIMARY_ACTION: &str = "#primaryBtn";
pub const SECONDARY_ACTION: &str = "#secondaryBtn";

/// Every control that emits a ripple when pressed.
pub const RIPPLE_CONTROLS: &str = ".lang-btn, .cta-btn";

pub const FLOATING_CONTAINER: &str = "#floatingElements";
pub const FLOATING_ELEMENT_CLASS: &str = "floating-element";
pub const HERO_BACKGROUND: &str = ".hero-background";

pub const TOP_NAV: &str = ".top-nav";
pub const LANGUAGE_SELECTOR: &str = ".language-selector";
pub const NAV_THEME_TOGGLE: &str = ".theme-toggle";
