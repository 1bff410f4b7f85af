//! Renju GUI entry point

use renju::ui::RenjuApp;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Renju"),
        ..Default::default()
    };

    eframe::run_native(
        "Renju",
        options,
        Box::new(|cc| Ok(Box::new(RenjuApp::new(cc)))),
    )
}
