mod app;
mod ui;

use app::SorterApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Sorter – Data Sorting",
        options,
        Box::new(|cc| Ok(Box::new(SorterApp::new(cc)))),
    )
}
