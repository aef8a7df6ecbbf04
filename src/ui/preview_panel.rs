//! Theme preview panel.
//!
//! Shows sample widgets and the palette of the active theme so a toggle is
//! immediately visible, plus the persisted UI scale control.

use eframe::egui;
use egui::RichText;
use themeswitch::ThemePreference;

/// Renders the preview panel.
///
/// Returns true when the UI scale changed and should be re-applied.
pub fn render_preview(
    ui: &mut egui::Ui,
    ui_scale: &mut f32,
    preference: ThemePreference,
) -> bool {
    ui.heading("Theme preview");
    ui.add_space(4.0);

    let status = match preference {
        ThemePreference::Light => "Light theme active",
        ThemePreference::Dark => "Dark theme active",
    };
    ui.label(RichText::new(status).strong());
    ui.label("The choice is stored and restored on the next start.");

    ui.separator();

    let visuals = ui.visuals().clone();
    let swatches = [
        ("Panel", visuals.panel_fill),
        ("Canvas", visuals.extreme_bg_color),
        ("Selection", visuals.selection.bg_fill),
        ("Hyperlink", visuals.hyperlink_color),
        ("Warning", visuals.warn_fg_color),
        ("Error", visuals.error_fg_color),
    ];
    for (name, color) in swatches {
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, color);
            ui.label(name);
        });
    }

    ui.separator();

    ui.label(RichText::new("Sample widgets").strong());
    ui.horizontal(|ui| {
        let _ = ui.button("A button");
        ui.hyperlink_to("a hyperlink", "https://www.egui.rs");
    });
    ui.label(RichText::new("A warning line").color(visuals.warn_fg_color));
    ui.label(RichText::new("An error line").color(visuals.error_fg_color));

    ui.separator();

    let response = ui.add(egui::Slider::new(ui_scale, 0.75..=1.5).text("UI scale"));
    // Re-apply only once the drag settles so the slider does not rescale
    // under the pointer.
    response.drag_stopped() || (response.changed() && !response.dragged())
}
