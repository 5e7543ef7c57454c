//! Dark/light theme preference

/// Process-wide colour scheme flag, owned by `AppState`.
///
/// Not persisted; the starting value comes from config or `--dark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    dark: bool,
}

impl ThemeState {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark
    }

    pub fn toggle(&mut self) {
        self.dark = !self.dark;
        tracing::debug!(
            "Theme switched to {}",
            if self.dark { "dark" } else { "light" }
        );
    }
}
