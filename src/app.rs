// src/app.rs
use eframe::egui;

use crate::settings::Settings;
use crate::state::{AppState, Screen};

pub struct CloudOptimizerApp {
    state: AppState,
}

impl CloudOptimizerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let mut state = AppState::new(settings);
        state.start_health_probe(&cc.egui_ctx);
        Self { state }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            // Tab selection using buttons
            let tabs = [(Screen::Home, "Home"), (Screen::Dashboard, "Dashboard")];

            for (screen, label) in tabs {
                if ui
                    .selectable_label(self.state.current_screen == screen, label)
                    .clicked()
                {
                    self.state.current_screen = screen;
                }
            }
        });
    }
}

impl eframe::App for CloudOptimizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Worker threads report back through the channel; apply their
        // results before drawing this frame.
        self.state.drain_events();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state.current_screen {
                Screen::Home => {
                    crate::ui::home::show_home_view(ui, &mut self.state);
                }
                Screen::Dashboard => {
                    crate::ui::dashboard::show_dashboard_view(ui, &mut self.state);
                }
            }
        });

        // Show error modal if needed
        let error_msg = self.state.error_message.clone(); // Clone first
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }
}
