//! Themes injected into props when components render.
//!
//! This module provides:
//!
//! - [`Theme`]: A named collection of tokens with fluent builder API
//! - [`AdaptiveTheme`]: Light/dark theme pairs with OS detection
//! - [`ThemeChoice`]: Either of the above, held by a render context
//! - [`ColorMode`]: Light or dark color mode enum

mod adaptive;
mod choice;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{set_theme_detector, AdaptiveTheme, ColorMode};
pub use choice::ThemeChoice;
pub use theme::Theme;
