#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod views;

use app::PendsimApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_title("Pendsim"),
        ..Default::default()
    };

    eframe::run_native(
        "Pendsim",
        options,
        Box::new(|cc| Ok(Box::new(PendsimApp::new(cc)))),
    )
}
