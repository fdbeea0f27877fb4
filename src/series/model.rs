use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{Result, SeriesError};

// ---------------------------------------------------------------------------
// SineComponent – one term of the series
// ---------------------------------------------------------------------------

/// One `amplitude · sin(2π · frequency · t)` term.
///
/// Fields are private so a component can only exist once its values have
/// been checked by [`SineComponent::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SineComponent {
    amplitude: f64,
    /// Cycles per unit domain.
    frequency: f64,
}

impl SineComponent {
    /// Validate and build a component.
    ///
    /// Amplitude may be any finite value, including zero or negative.
    /// Frequency must be finite and not negative.
    pub fn new(amplitude: f64, frequency: f64) -> Result<Self> {
        if !amplitude.is_finite() {
            return Err(SeriesError::invalid(format!(
                "amplitude must be finite, got {amplitude}"
            )));
        }
        if !frequency.is_finite() {
            return Err(SeriesError::invalid(format!(
                "frequency must be finite, got {frequency}"
            )));
        }
        if frequency < 0.0 {
            return Err(SeriesError::invalid(format!(
                "frequency must not be negative, got {frequency}"
            )));
        }
        Ok(SineComponent {
            amplitude,
            frequency,
        })
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Value of this term at domain point `t`.
    pub fn value_at(&self, t: f64) -> f64 {
        self.amplitude * (std::f64::consts::TAU * self.frequency * t).sin()
    }
}

impl fmt::Display for SineComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} · sin(2π · {:.3} · t)", self.amplitude, self.frequency)
    }
}

// ---------------------------------------------------------------------------
// SeriesSpec – the complete component list of one session
// ---------------------------------------------------------------------------

/// Ordered, complete set of components. Order is summation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeriesSpec {
    components: Vec<SineComponent>,
}

impl SeriesSpec {
    /// Wrap components that have already been validated.
    pub fn from_components(components: Vec<SineComponent>) -> Self {
        SeriesSpec { components }
    }

    pub fn components(&self) -> &[SineComponent] {
        &self.components
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SineComponent> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Summed value at `t`, in component order.
    pub fn value_at(&self, t: f64) -> f64 {
        self.components
            .iter()
            .fold(0.0, |acc, c| acc + c.value_at(t))
    }
}

impl<'a> IntoIterator for &'a SeriesSpec {
    type Item = &'a SineComponent;
    type IntoIter = std::slice::Iter<'a, SineComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

// ---------------------------------------------------------------------------
// Samples
// ---------------------------------------------------------------------------

/// One `(t, value)` point of an evaluated series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub t: f64,
    pub value: f64,
}

/// Samples in ascending `t` order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    pub(crate) fn from_samples(samples: Vec<Sample>) -> Self {
        SampleSet { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value).collect()
    }

    /// Distance between neighbouring `t` values, if there are at least two.
    pub fn spacing(&self) -> Option<f64> {
        match self.samples.as_slice() {
            [first, .., last] => Some((last.t - first.t) / (self.samples.len() - 1) as f64),
            _ => None,
        }
    }

    /// Points as `[t, value]` pairs, the shape plotting widgets expect.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.samples.iter().map(|s| [s.t, s.value]).collect()
    }
}

// ---------------------------------------------------------------------------
// SpectrumBin
// ---------------------------------------------------------------------------

/// One bin of a spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumBin {
    /// Cycles per unit domain.
    pub frequency: f64,
    /// Scaled to amplitude units.
    pub magnitude: f64,
    /// Radians in `(-π, π]`, from `atan2(im, re)`.
    pub phase: f64,
}
