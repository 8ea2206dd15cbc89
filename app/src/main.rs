mod app;
mod defaults;
mod preview;

use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(defaults::WINDOW_SIZE)
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "QR Code Generator",
        options,
        Box::new(|cc| Ok(Box::new(app::StudioApp::new(cc)))),
    )
}
