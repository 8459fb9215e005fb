use eframe::egui;

use rusty_sorter::state::{AppState, Settings};

use crate::ui::panels;

/// Storage key for [`Settings`].
const SETTINGS_KEY: &str = "rusty-sorter-settings";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SorterApp {
    pub state: AppState,
}

impl SorterApp {
    /// Restore the user's last selections, if eframe persisted any.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings: Settings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, SETTINGS_KEY))
            .unwrap_or_default();
        log::debug!("Starting with settings {settings:?}");

        Self {
            state: AppState::with_settings(settings),
        }
    }
}

impl eframe::App for SorterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: load / generate ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: sort and save ----
        egui::TopBottomPanel::bottom("bottom_bar").show(ctx, |ui| {
            panels::bottom_bar(ui, &mut self.state);
        });

        // ---- Central panel: data ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::data_view(ui, &mut self.state);
        });

        panels::notification_window(ctx, &mut self.state);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, SETTINGS_KEY, &self.state.settings);
    }
}
