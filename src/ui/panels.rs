use eframe::egui::{self, Align2, Context, RichText, ScrollArea, TextEdit, Ui};

use rusty_sorter::data::{DataKind, SortAlgorithm, GENERATION_SIZES};
use rusty_sorter::state::{AppState, Notification};

// ---------------------------------------------------------------------------
// Top bar – load and generate
// ---------------------------------------------------------------------------

/// Render the input controls: file path, load, browse, kind, size, generate.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.label("File:");
        let path_field = ui.add(
            TextEdit::singleline(&mut state.settings.file_path)
                .hint_text("path/to/data.txt")
                .desired_width(240.0),
        );
        let submitted =
            path_field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Load").clicked() || submitted {
            state.load_from_path();
        }
        if ui.button("Browse…").clicked() {
            open_file_dialog(state);
        }

        ui.separator();

        ui.label("Generate:");
        egui::ComboBox::from_id_salt("data_kind")
            .selected_text(state.settings.kind.name())
            .show_ui(ui, |ui: &mut Ui| {
                for kind in DataKind::ALL {
                    ui.selectable_value(&mut state.settings.kind, kind, kind.name());
                }
            });
        egui::ComboBox::from_id_salt("data_size")
            .selected_text(state.settings.size.to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for size in GENERATION_SIZES {
                    ui.selectable_value(&mut state.settings.size, size, size.to_string());
                }
            });
        if ui.button("Generate").clicked() {
            state.generate();
        }
    });
}

// ---------------------------------------------------------------------------
// Bottom bar – sort and save
// ---------------------------------------------------------------------------

/// Render the algorithm selector, output path and the sort button.
pub fn bottom_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        egui::ComboBox::from_id_salt("sort_algorithm")
            .selected_text(state.settings.algorithm.to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for algo in SortAlgorithm::ALL {
                    ui.selectable_value(&mut state.settings.algorithm, algo, algo.to_string());
                }
            });

        ui.label("Save to:");
        ui.add(TextEdit::singleline(&mut state.settings.output_path).desired_width(180.0));

        if ui.button(RichText::new("Sort and save").strong()).clicked() {
            state.sort_and_save();
        }

        ui.separator();

        let lines = state.display_text.lines().count();
        ui.label(format!("{lines} lines"));
        if let Some(detected) = state.detected_label() {
            ui.separator();
            ui.label(RichText::new(detected).strong());
        }
        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(msg);
        }
    });
}

// ---------------------------------------------------------------------------
// Central display
// ---------------------------------------------------------------------------

/// Render the editable data area.
pub fn data_view(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.add(
                TextEdit::multiline(&mut state.display_text)
                    .code_editor()
                    .desired_width(f32::INFINITY)
                    .desired_rows(24)
                    .hint_text("Load a file, generate data, or type one value per line"),
            );
        });
}

// ---------------------------------------------------------------------------
// Notification window
// ---------------------------------------------------------------------------

/// Show the pending notification, if any, until the user presses OK.
pub fn notification_window(ctx: &Context, state: &mut AppState) {
    let Some(note) = state.notification.clone() else {
        return;
    };

    let mut text = RichText::new(note.message());
    if matches!(note, Notification::Error(_)) {
        text = text.color(egui::Color32::RED);
    }

    egui::Window::new(note.title())
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui: &mut Ui| {
            ui.label(text);
            ui.add_space(8.0);
            ui.vertical_centered(|ui: &mut Ui| {
                if ui.button("OK").clicked() {
                    state.dismiss_notification();
                }
            });
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open data file")
        .add_filter("Text files", &["txt"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(path);
    }
}
