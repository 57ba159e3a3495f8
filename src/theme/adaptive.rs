//! Light/dark theme pairs selected by the OS color mode.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};

use super::theme::Theme;

/// Light or dark display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

/// Token sets for light and dark display modes.
///
/// The set matching the detected mode is injected when a component renders.
///
/// # Example
///
/// ```rust
/// use further::{AdaptiveTheme, Theme};
///
/// let light = Theme::new().add("text", "#111111");
/// let dark = Theme::new().add("text", "#eeeeee");
/// let adaptive = AdaptiveTheme::new(light, dark);
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    /// Pairs a light and a dark token set.
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// Returns the variant for an explicit color mode.
    pub fn variant(&self, mode: ColorMode) -> &Theme {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// The variant for the mode detected right now.
    pub(crate) fn resolve(&self) -> Theme {
        self.variant(detect_color_mode()).clone()
    }
}

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Replaces the color mode detector, e.g. to pin a mode in tests.
///
/// The default asks the OS through `dark-light`.
pub fn set_theme_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

pub(crate) fn detect_color_mode() -> ColorMode {
    let detector = MODE_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

#[allow(unreachable_patterns)]
fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        _ => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serial_test::serial;

    #[test]
    fn test_variant_selects_by_mode() {
        let adaptive = AdaptiveTheme::new(
            Theme::new().add("text", "black"),
            Theme::new().add("text", "white"),
        );
        assert_eq!(adaptive.variant(ColorMode::Light).get("text"), Some(&json!("black")));
        assert_eq!(adaptive.variant(ColorMode::Dark).get("text"), Some(&json!("white")));
    }

    #[test]
    #[serial]
    fn test_resolve_follows_detector() {
        let adaptive = AdaptiveTheme::new(
            Theme::new().add("text", "black"),
            Theme::new().add("text", "white"),
        );

        set_theme_detector(|| ColorMode::Dark);
        assert_eq!(adaptive.resolve().get("text"), Some(&json!("white")));

        set_theme_detector(|| ColorMode::Light);
        assert_eq!(adaptive.resolve().get("text"), Some(&json!("black")));
    }
}
