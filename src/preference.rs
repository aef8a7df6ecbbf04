//! The persisted theme preference and its wire encoding.

/// User choice of visual theme.
///
/// The preference is stored as the raw string `"light"` or `"dark"`; any
/// other stored value is read back as `Light`, which is also the value used
/// when nothing has been stored yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
}

impl Default for ThemePreference {
    fn default() -> Self {
        // Fresh sessions start light.
        ThemePreference::Light
    }
}

impl ThemePreference {
    /// The string persisted to the durable store.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Interprets a stored value. Unrecognized values degrade to `Light`.
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    /// Derives the preference from the dark-marker state of a surface.
    pub fn from_dark_marker(dark: bool) -> Self {
        if dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemePreference::Dark)
    }

    /// The opposite preference.
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Glyph shown on the toggle control: the sun offers a way out of the
    /// dark theme, the moon a way into it.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            ThemePreference::Light => "🌙",
            ThemePreference::Dark => "☀️",
        }
    }
}
