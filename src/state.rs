use eframe::egui::Color32;

use fourier_fun::series::evaluator::evaluate_components;
use fourier_fun::series::spectrum::magnitude_spectrum;
use fourier_fun::series::{
    ComponentStore, EvaluationSettings, SampleSet, SeriesError, SessionState, SpectrumBin,
};

use crate::color::generate_palette;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything one evaluation produces.
struct Evaluation {
    samples: SampleSet,
    components: Vec<SampleSet>,
    spectrum: Vec<SpectrumBin>,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Components collected for the current session.
    pub store: ComponentStore,

    /// Domain and resolution for evaluation.
    pub settings: EvaluationSettings,

    /// Pending input values, bound to the side panel widgets.
    pub count_input: i64,
    pub amplitude_input: f64,
    pub frequency_input: f64,

    /// Summed series of the last evaluation.
    pub samples: Option<SampleSet>,

    /// Each component on its own, same points as `samples`.
    pub component_samples: Vec<SampleSet>,

    /// Magnitude spectrum of `samples`.
    pub spectrum: Vec<SpectrumBin>,

    /// One colour per component.
    pub component_colors: Vec<Color32>,

    pub show_components: bool,
    pub show_spectrum: bool,
    pub minmax_scaling: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            store: ComponentStore::new(),
            settings: EvaluationSettings::default(),
            count_input: 3,
            amplitude_input: 0.5,
            frequency_input: 2.0,
            samples: None,
            component_samples: Vec::new(),
            spectrum: Vec::new(),
            component_colors: Vec::new(),
            show_components: false,
            show_spectrum: true,
            minmax_scaling: false,
            status_message: None,
        }
    }
}

impl AppState {
    /// Start a new input session with `count_input` components.
    pub fn declare_count(&mut self) {
        match self.store.declare_count(self.count_input) {
            Ok(()) => {
                self.clear_results();
                self.status_message = None;
                // A zero-length series is ready at once.
                self.evaluate_if_ready();
            }
            Err(e) => self.report(e),
        }
    }

    /// Push the pending amplitude/frequency pair into the store.
    pub fn add_component(&mut self) {
        match self
            .store
            .add_component(self.amplitude_input, self.frequency_input)
        {
            Ok(()) => {
                self.status_message = None;
                self.evaluate_if_ready();
            }
            Err(e) => self.report(e),
        }
    }

    /// Replace the session with components read from a file.
    pub fn set_components(&mut self, pairs: Vec<(f64, f64)>) {
        match self.store.replace_with(pairs) {
            Ok(()) => {
                if let Some(n) = self.store.declared_count() {
                    self.count_input = n as i64;
                }
                self.clear_results();
                self.status_message = None;
                self.evaluate();
            }
            Err(e) => self.report(e),
        }
    }

    /// Re-run the evaluation with the current settings.
    ///
    /// Every result is computed first; the store and the plotted data
    /// change together or not at all.
    pub fn evaluate(&mut self) {
        match self.compute() {
            Ok((store, evaluation)) => {
                self.store = store;
                self.component_colors = generate_palette(evaluation.components.len());
                self.samples = Some(evaluation.samples);
                self.component_samples = evaluation.components;
                self.spectrum = evaluation.spectrum;
                self.status_message = None;
            }
            Err(e) => self.report(e),
        }
    }

    fn compute(&self) -> Result<(ComponentStore, Evaluation), SeriesError> {
        let mut store = self.store.clone();
        let samples = store.evaluate(&self.settings)?;
        let spec = store.components()?;
        let s = &self.settings;
        let components =
            evaluate_components(&spec, s.domain_start, s.domain_end, s.sample_count)?;
        let spectrum = magnitude_spectrum(&samples)?;
        Ok((
            store,
            Evaluation {
                samples,
                components,
                spectrum,
            },
        ))
    }

    fn evaluate_if_ready(&mut self) {
        if self.store.state() == SessionState::Ready {
            self.evaluate();
        }
    }

    pub fn clear_results(&mut self) {
        self.samples = None;
        self.component_samples.clear();
        self.spectrum.clear();
        self.component_colors.clear();
    }

    fn report(&mut self, e: SeriesError) {
        log::warn!("{e}");
        self.status_message = Some(e.to_string());
    }
}
