//! Header panel UI rendering
//!
//! Hosts the theme toggle control. The button's glyph comes from the shell's
//! control state so the display can never drift from what the controller set.

use eframe::egui;
use themeswitch::{Shell, THEME_TOGGLE_ID};

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User activated the theme toggle control
    ThemeTogglePressed,
}

/// Renders the application header with the theme toggle control.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `shell` - The hosting shell holding the toggle control
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, shell: &Shell) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Theme Switch").strong());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(control) = shell.control(THEME_TOGGLE_ID) {
                let button = ui
                    .button(control.glyph())
                    .on_hover_text("Switch between light and dark theme");
                if button.clicked() {
                    interaction = Some(HeaderInteraction::ThemeTogglePressed);
                }
            }
        });
    });

    interaction
}
