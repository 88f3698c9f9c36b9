mod domain;
mod infrastructure;
mod presentation;

use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 640.0])
            .with_title("Feeder Link"),
        ..Default::default()
    };

    eframe::run_native(
        "Feeder Link",
        options,
        Box::new(|cc| Ok(Box::new(presentation::app::FeederLinkApp::new(cc)))),
    )
}
