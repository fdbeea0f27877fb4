use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

/// Top-level window: inputs on the left, the series in the middle, the
/// spectrum docked underneath and a status line at the very bottom.
#[derive(Default)]
pub struct FourierFunApp {
    pub state: AppState,
}

impl FourierFunApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self::default()
    }
}

impl eframe::App for FourierFunApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = &mut self.state;

        egui::TopBottomPanel::top("menu").show(ctx, |ui| panels::top_bar(ui, state));
        egui::TopBottomPanel::bottom("status")
            .show(ctx, |ui| panels::status_bar(ui, state));

        egui::SidePanel::left("components")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| panels::side_panel(ui, state));

        if state.show_spectrum && state.samples.is_some() {
            egui::TopBottomPanel::bottom("spectrum")
                .resizable(true)
                .default_height(240.0)
                .show(ctx, |ui| plot::spectrum_plot(ui, state));
        }

        egui::CentralPanel::default().show(ctx, |ui| plot::series_plot(ui, state));
    }
}
