//! Shared constants for the interaction engine.

// ── Theme ───────────────────────────────────────────────────────

/// Attribute on the root element that the stylesheet keys its palette on.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Preference store key holding `"light"` or `"dark"`.
pub const THEME_KEY: &str = "theme";

/// Transition applied to the root while the palette changes.
pub const THEME_TRANSITION: &str = "all 0.5s cubic-bezier(0.25, 0.46, 0.45, 0.94)";

// ── Locale ──────────────────────────────────────────────────────

/// Attribute on each locale control carrying its language code.
pub const LOCALE_ATTRIBUTE: &str = "data-lang";

/// Class marking the currently selected locale control.
pub const ACTIVE_CLASS: &str = "active";

/// Vertical offset, in pixels, a text slot drops by while faded out.
pub const TEXT_FADE_OFFSET_PX: f64 = 10.0;

// ── Toast ───────────────────────────────────────────────────────

/// Horizontal offset, in pixels, of a toast parked off-screen.
pub const TOAST_OFFSCREEN_PX: f64 = 400.0;

/// Easing shared by toast slides and the nav reveal.
pub const GLASS_EASING: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";

/// Stacking order for toasts, above the fixed navigation.
pub const TOAST_Z_INDEX: &str = "1001";

// ── Nav reveal ──────────────────────────────────────────────────

/// Horizontal offset, in pixels, of hidden nav controls.
pub const NAV_HIDDEN_OFFSET_PX: f64 = 20.0;
