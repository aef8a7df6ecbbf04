//! Visual mapping from the theme preference to egui visuals.
//!
//! The shell only tracks marker state; this module defines what the dark
//! marker actually looks like when the host is an egui application.

use egui::{Color32, Visuals};
use once_cell::sync::Lazy;

use crate::preference::ThemePreference;

static LIGHT_VISUALS: Lazy<Visuals> = Lazy::new(light_visuals);
static DARK_VISUALS: Lazy<Visuals> = Lazy::new(dark_visuals);

/// Returns the visuals matching a preference.
pub fn visuals_for(preference: ThemePreference) -> Visuals {
    match preference {
        ThemePreference::Light => LIGHT_VISUALS.clone(),
        ThemePreference::Dark => DARK_VISUALS.clone(),
    }
}

/// Installs the visuals for a preference on the egui context.
pub fn apply_preference(ctx: &egui::Context, preference: ThemePreference) {
    ctx.set_visuals(visuals_for(preference));
}

fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();
    visuals.panel_fill = Color32::from_rgb(248, 248, 248);
    visuals.extreme_bg_color = Color32::from_rgb(255, 255, 255);
    visuals.selection.bg_fill = Color32::from_rgb(180, 200, 255);
    visuals.hyperlink_color = Color32::from_rgb(0, 160, 180);
    visuals
}

fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = hex_to_color32("#272727");
    visuals.extreme_bg_color = hex_to_color32("#101010");
    visuals.selection.bg_fill = hex_to_color32("#325078");
    visuals.hyperlink_color = hex_to_color32("#1abc9c");
    visuals.warn_fg_color = hex_to_color32("#f39c12");
    visuals.error_fg_color = hex_to_color32("#e74c3c");
    visuals
}

/// Converts a hex color string (like "#272727") to Color32.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visuals_track_the_preference() {
        assert!(!visuals_for(ThemePreference::Light).dark_mode);
        assert!(visuals_for(ThemePreference::Dark).dark_mode);
    }

    #[test]
    fn hex_parsing_handles_malformed_input() {
        assert_eq!(hex_to_color32("#1abc9c"), Color32::from_rgb(26, 188, 156));
        assert_eq!(hex_to_color32("1abc9c"), Color32::from_rgb(26, 188, 156));
        assert_eq!(hex_to_color32("#fff"), Color32::from_rgb(0, 0, 0));
    }
}
