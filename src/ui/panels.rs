use std::path::Path;

use anyhow::Context;
use eframe::egui::{self, Color32, DragValue, RichText, ScrollArea, Ui};

use fourier_fun::series::loader;

use crate::color::component_color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – component input
// ---------------------------------------------------------------------------

/// Render the left input panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Components");
    ui.separator();

    // ---- Step 1: how many components ----
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Count");
        ui.add(DragValue::new(&mut state.count_input).speed(0.1));
        if ui.button("Declare").clicked() {
            state.declare_count();
        }
    });

    ui.label(format!("State: {}", state.store.state()));
    if let Some(n) = state.store.declared_count() {
        ui.label(format!(
            "{} of {n} collected, {} remaining",
            state.store.collected_count(),
            state.store.remaining()
        ));
    }
    ui.separator();

    // ---- Step 2: one amplitude/frequency pair at a time ----
    let accepting = state.store.remaining() > 0;
    egui::Grid::new("component_input")
        .num_columns(2)
        .show(ui, |ui: &mut Ui| {
            ui.label("Amplitude");
            ui.add_enabled(
                accepting,
                DragValue::new(&mut state.amplitude_input).speed(0.01),
            );
            ui.end_row();

            ui.label("Frequency");
            ui.add_enabled(
                accepting,
                DragValue::new(&mut state.frequency_input)
                    .speed(0.1)
                    .suffix(" cyc"),
            );
            ui.end_row();
        });
    if ui
        .add_enabled(accepting, egui::Button::new("Add component"))
        .clicked()
    {
        state.add_component();
    }
    ui.separator();

    // ---- Domain settings ----
    ui.strong("Domain");
    let before = state.settings;
    egui::Grid::new("domain_settings")
        .num_columns(2)
        .show(ui, |ui: &mut Ui| {
            ui.label("Start");
            ui.add(DragValue::new(&mut state.settings.domain_start).speed(0.05));
            ui.end_row();

            ui.label("End");
            ui.add(DragValue::new(&mut state.settings.domain_end).speed(0.05));
            ui.end_row();

            ui.label("Samples");
            ui.add(
                DragValue::new(&mut state.settings.sample_count)
                    .speed(8)
                    .range(2..=1 << 16),
            );
            ui.end_row();
        });
    if state.settings != before && state.store.is_complete() {
        state.evaluate();
    }
    ui.separator();

    // ---- Collected components ----
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (i, component) in state.store.collected().iter().enumerate() {
                let text = RichText::new(format!("{}. {component}", i + 1))
                    .color(component_color(&state.component_colors, i));
                ui.label(text);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open series…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let complete = state.store.is_complete();
            if ui
                .add_enabled(complete, egui::Button::new("Save series…"))
                .clicked()
            {
                save_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.samples.is_some(), egui::Button::new("Export samples…"))
                .clicked()
            {
                export_samples_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.toggle_value(&mut state.show_components, "Components");
        ui.toggle_value(&mut state.show_spectrum, "Spectrum");
        if ui
            .selectable_label(state.minmax_scaling, "Min-Max Scaling")
            .clicked()
        {
            state.minmax_scaling = !state.minmax_scaling;
        }
    });
}

// ---------------------------------------------------------------------------
// Status bar
// ---------------------------------------------------------------------------

/// Session summary on the left, last error on the right.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        match &state.samples {
            Some(samples) => ui.label(format!(
                "{} components, {} samples over [{}, {}]",
                state.component_samples.len(),
                samples.len(),
                state.settings.domain_start,
                state.settings.domain_end
            )),
            None => ui.label(format!("Session {}", state.store.state())),
        };
        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open sine series")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_file(&path) {
            Ok(records) => {
                log::info!("Loaded {} components from {}", records.len(), path.display());
                state.set_components(records.into_iter().map(Into::into).collect());
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Save sine series")
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .set_file_name("series.json")
        .save_file();

    if let Some(path) = file {
        let result = state
            .store
            .components()
            .map_err(anyhow::Error::from)
            .and_then(|spec| loader::save_file(&path, &spec));
        finish_write(state, &path, result);
    }
}

pub fn export_samples_dialog(state: &mut AppState) {
    let Some(samples) = &state.samples else {
        return;
    };
    let file = rfd::FileDialog::new()
        .set_title("Export samples")
        .add_filter("CSV", &["csv"])
        .set_file_name("samples.csv")
        .save_file();

    if let Some(path) = file {
        let result = std::fs::File::create(&path)
            .with_context(|| format!("creating {}", path.display()))
            .and_then(|f| loader::export_samples_csv(f, samples));
        finish_write(state, &path, result);
    }
}

fn finish_write(state: &mut AppState, path: &Path, result: anyhow::Result<()>) {
    match result {
        Ok(()) => {
            log::info!("Wrote {}", path.display());
            state.status_message = None;
        }
        Err(e) => {
            log::error!("Failed to write file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
