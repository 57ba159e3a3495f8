//! The theme a render context carries.

use super::adaptive::AdaptiveTheme;
use super::theme::Theme;

/// A fixed token set, or a light/dark pair picked at render time.
///
/// Adaptive choices consult the mode detector on every render.
#[derive(Debug, Clone)]
pub enum ThemeChoice {
    Theme(Theme),
    Adaptive(AdaptiveTheme),
}

impl ThemeChoice {
    /// The tokens to inject for this render.
    pub(crate) fn resolve(&self) -> Theme {
        match self {
            ThemeChoice::Theme(theme) => theme.clone(),
            ThemeChoice::Adaptive(adaptive) => adaptive.resolve(),
        }
    }
}

impl From<Theme> for ThemeChoice {
    fn from(theme: Theme) -> Self {
        ThemeChoice::Theme(theme)
    }
}

impl From<AdaptiveTheme> for ThemeChoice {
    fn from(adaptive: AdaptiveTheme) -> Self {
        ThemeChoice::Adaptive(adaptive)
    }
}
