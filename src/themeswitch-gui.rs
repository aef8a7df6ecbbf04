//! Theme Switch GUI Application
//!
//! A small egui host for the persisted dark/light theme controller. The
//! stored preference is applied before the first frame is painted, the
//! toggle control binds once the widget tree exists, and every toggle is
//! written back to persistent storage immediately.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::time::Instant;

use eframe::egui;

mod ui;

use themeswitch::{storage, theme, Shell, ThemeController, THEME_TOGGLE_ID};

const UI_SCALE_KEY: &str = "ui_scale";

/// Main application entry point that initializes and launches the GUI.
fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Theme Switch"),
        ..Default::default()
    };

    eframe::run_native(
        "Theme Switch",
        options,
        Box::new(|cc| Ok(Box::new(ThemeSwitchApp::new(cc)))),
    )
}

/// The hosting application: owns the shell and the theme controller.
struct ThemeSwitchApp {
    /// Shell model the controller operates on
    shell: Shell,
    /// The theme controller
    controller: ThemeController,
    /// Persisted UI scale factor
    ui_scale: f32,
}

impl ThemeSwitchApp {
    /// Creates the app with the stored preference already applied, so the
    /// first painted frame uses the right theme.
    fn new(cc: &eframe::CreationContext) -> Self {
        let mut shell = Shell::new();
        // The toggle control is declared up front, like the markup it stands
        // in for; binding still waits for the first frame.
        shell.insert_control(THEME_TOGGLE_ID);

        let mut controller = ThemeController::new();
        controller.apply_early(&mut shell, cc.storage);
        theme::apply_preference(&cc.egui_ctx, controller.preference());

        let ui_scale = storage::load_setting_or(cc.storage, UI_SCALE_KEY, 1.0);
        cc.egui_ctx.set_zoom_factor(ui_scale);

        Self {
            shell,
            controller,
            ui_scale,
        }
    }

    fn handle_interaction(&mut self, interaction: ui::header::HeaderInteraction, frame: &mut eframe::Frame) {
        match interaction {
            ui::header::HeaderInteraction::ThemeTogglePressed => {
                if let Some(mut event) = self.shell.activate(THEME_TOGGLE_ID) {
                    for _ in 0..event.fired().len() {
                        self.controller.handle_activation(
                            &mut self.shell,
                            frame.storage_mut(),
                            &mut event,
                        );
                    }
                }
            }
        }
    }
}

impl eframe::App for ThemeSwitchApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage::save_preference(storage, self.controller.preference());
        storage::save_setting(storage, UI_SCALE_KEY, &self.ui_scale);
    }

    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // The widget tree exists from the first frame on; that is this
        // host's content-ready signal.
        if !self.shell.content_ready() {
            self.shell.mark_content_ready();
            self.controller
                .initialize(&mut self.shell, frame.storage(), Instant::now());
        }
        self.controller
            .poll(&mut self.shell, frame.storage(), Instant::now());

        // Apply current theme
        theme::apply_preference(ctx, self.controller.preference());

        let interaction = egui::TopBottomPanel::top("header")
            .show(ctx, |ui| ui::header::render_header(ui, &self.shell))
            .inner;

        egui::CentralPanel::default().show(ctx, |ui| {
            if ui::preview_panel::render_preview(ui, &mut self.ui_scale, self.controller.preference())
            {
                ctx.set_zoom_factor(self.ui_scale);
            }
        });

        if let Some(interaction) = interaction {
            self.handle_interaction(interaction, frame);
        }
    }
}
