use serde::{Deserialize, Serialize};

use super::error::{Result, SeriesError};

/// Default number of samples per evaluation.
pub const DEFAULT_SAMPLE_COUNT: usize = 1024;

/// Domain and resolution used when evaluating a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationSettings {
    pub domain_start: f64,
    pub domain_end: f64,
    pub sample_count: usize,
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            domain_start: 0.0,
            domain_end: 1.0,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

impl EvaluationSettings {
    /// Check the same conditions the evaluator checks.
    pub fn validate(&self) -> Result<()> {
        if self.sample_count < 2 {
            return Err(SeriesError::invalid(format!(
                "at least 2 samples are needed, got {}",
                self.sample_count
            )));
        }
        if !self.domain_start.is_finite() || !self.domain_end.is_finite() {
            return Err(SeriesError::invalid(format!(
                "domain bounds must be finite, got [{}, {}]",
                self.domain_start, self.domain_end
            )));
        }
        if self.domain_end <= self.domain_start {
            return Err(SeriesError::invalid(format!(
                "domain end {} must be greater than start {}",
                self.domain_end, self.domain_start
            )));
        }
        if !(self.domain_end - self.domain_start).is_finite() {
            return Err(SeriesError::invalid(format!(
                "domain [{}, {}] is too wide to sample",
                self.domain_start, self.domain_end
            )));
        }
        // Neighbouring points must stay apart after rounding.
        let magnitude = self.domain_start.abs().max(self.domain_end.abs());
        if self.step() <= 4.0 * f64::EPSILON * magnitude {
            return Err(SeriesError::invalid(format!(
                "domain [{}, {}] is too narrow for {} distinct samples",
                self.domain_start, self.domain_end, self.sample_count
            )));
        }
        Ok(())
    }

    /// Distance between neighbouring sample points.
    pub fn step(&self) -> f64 {
        (self.domain_end - self.domain_start) / (self.sample_count as f64 - 1.0)
    }
}
