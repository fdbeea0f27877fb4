use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use fourier_fun::series::SampleSet;
use fourier_fun::series::evaluator::normalize_values;

use crate::color::{SERIES_COLOR, SPECTRUM_COLOR, component_color};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Series plot (central panel)
// ---------------------------------------------------------------------------

/// The summed series, with each component drawn underneath when enabled.
pub fn series_plot(ui: &mut Ui, state: &AppState) {
    let Some(samples) = &state.samples else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Declare a component count and add components to plot the series");
        });
        return;
    };

    let scaled = state.minmax_scaling;
    Plot::new("series_plot")
        .legend(Legend::default())
        .x_axis_label("t")
        .y_axis_label(if scaled { "Value (scaled)" } else { "Value" })
        .show(ui, |plot_ui| {
            if state.show_components {
                for (i, part) in state.component_samples.iter().enumerate() {
                    plot_ui.line(
                        Line::new(points(part, scaled))
                            .name(format!("component {}", i + 1))
                            .color(component_color(&state.component_colors, i))
                            .width(1.0),
                    );
                }
            }
            plot_ui.line(
                Line::new(points(samples, scaled))
                    .name("sum")
                    .color(SERIES_COLOR)
                    .width(2.0),
            );
        });
}

fn points(set: &SampleSet, minmax_scaling: bool) -> PlotPoints {
    if !minmax_scaling {
        return set.points().into();
    }
    let scaled = normalize_values(&set.values(), 0.0, 1.0);
    set.iter()
        .zip(scaled)
        .map(|(s, y)| [s.t, y])
        .collect()
}

// ---------------------------------------------------------------------------
// Spectrum plot (bottom panel)
// ---------------------------------------------------------------------------

/// Magnitude per frequency bin; hovering a point shows its phase.
pub fn spectrum_plot(ui: &mut Ui, state: &AppState) {
    let magnitudes: PlotPoints = state
        .spectrum
        .iter()
        .map(|bin| [bin.frequency, bin.magnitude])
        .collect();
    let spectrum = state.spectrum.clone();

    Plot::new("spectrum_plot")
        .x_axis_label("Frequency (cycles per unit)")
        .y_axis_label("Magnitude")
        .label_formatter(move |_, point| {
            let nearest = spectrum.iter().min_by(|a, b| {
                (a.frequency - point.x)
                    .abs()
                    .total_cmp(&(b.frequency - point.x).abs())
            });
            match nearest {
                Some(bin) => format!(
                    "f = {:.3}\n|X| = {:.4}\nφ = {:.3} rad",
                    bin.frequency, bin.magnitude, bin.phase
                ),
                None => String::new(),
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(magnitudes)
                    .name("magnitude")
                    .color(SPECTRUM_COLOR)
                    .width(1.5),
            );
        });
}
