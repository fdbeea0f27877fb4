mod app;
mod color;
mod state;
mod ui;

use app::FourierFunApp;
use eframe::egui;

const WINDOW_TITLE: &str = "Fourier Fun";

fn main() -> eframe::Result {
    env_logger::init();
    log::info!("starting {WINDOW_TITLE} {}", env!("CARGO_PKG_VERSION"));

    let viewport = egui::ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_inner_size([1100.0, 760.0])
        .with_min_inner_size([720.0, 480.0]);

    eframe::run_native(
        WINDOW_TITLE,
        eframe::NativeOptions {
            viewport,
            ..Default::default()
        },
        Box::new(|cc| Ok(Box::new(FourierFunApp::new(cc)))),
    )
}
