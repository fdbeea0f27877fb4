/// Series layer: component store, evaluation, spectrum, and files.
///
/// Architecture:
/// ```text
///  typed input / .json / .csv
///        │
///        ▼
///   ┌──────────────┐
///   │    store      │  declare_count → add_component … → SeriesSpec
///   └──────────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │  evaluator    │  Σ A·sin(2π·f·t) over [start, end] → SampleSet
///   └──────────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │  spectrum     │  FFT of the SampleSet → Vec<SpectrumBin>
///   └──────────────┘
/// ```

pub mod error;
pub mod evaluator;
pub mod loader;
pub mod model;
pub mod settings;
pub mod spectrum;
pub mod store;

pub use error::{Result, SeriesError};
pub use model::{Sample, SampleSet, SeriesSpec, SineComponent, SpectrumBin};
pub use settings::EvaluationSettings;
pub use store::{ComponentStore, SessionState};
