use log::debug;

use super::error::Result;
use super::model::{Sample, SampleSet, SeriesSpec, SineComponent};
use super::settings::EvaluationSettings;

// ---------------------------------------------------------------------------
// Summation
// ---------------------------------------------------------------------------

/// Sum the series at `sample_count` evenly spaced points of
/// `[domain_start, domain_end]`, both ends included.
///
/// Each value is `Σ A·sin(2π·f·t)`, added up in component order, so the
/// same inputs always give the same bits.
pub fn evaluate(
    spec: &SeriesSpec,
    domain_start: f64,
    domain_end: f64,
    sample_count: usize,
) -> Result<SampleSet> {
    let points = domain_points(domain_start, domain_end, sample_count)?;
    let samples = points
        .into_iter()
        .map(|t| Sample {
            t,
            value: spec.value_at(t),
        })
        .collect();

    debug!(
        "evaluated {} components at {sample_count} points over [{domain_start}, {domain_end}]",
        spec.len()
    );
    Ok(SampleSet::from_samples(samples))
}

/// Evaluate each component on its own, over the same points as [`evaluate`].
pub fn evaluate_components(
    spec: &SeriesSpec,
    domain_start: f64,
    domain_end: f64,
    sample_count: usize,
) -> Result<Vec<SampleSet>> {
    let points = domain_points(domain_start, domain_end, sample_count)?;
    Ok(spec
        .iter()
        .map(|component| sample_component(component, &points))
        .collect())
}

fn sample_component(component: &SineComponent, points: &[f64]) -> SampleSet {
    let samples = points
        .iter()
        .map(|&t| Sample {
            t,
            value: component.value_at(t),
        })
        .collect();
    SampleSet::from_samples(samples)
}

/// Evenly spaced points; the last one is `domain_end` exactly.
fn domain_points(domain_start: f64, domain_end: f64, sample_count: usize) -> Result<Vec<f64>> {
    let settings = EvaluationSettings {
        domain_start,
        domain_end,
        sample_count,
    };
    settings.validate()?;

    let step = settings.step();
    let last = sample_count - 1;
    Ok((0..sample_count)
        .map(|i| {
            if i == last {
                domain_end
            } else {
                domain_start + i as f64 * step
            }
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Linearly rescale `values` into `[min, max]`.
///
/// Only an exactly flat input has no range to stretch; every value then
/// maps to the midpoint of the target range.
pub fn normalize_values(values: &[f64], min: f64, max: f64) -> Vec<f64> {
    let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = hi - lo;
    if range == 0.0 {
        return vec![(min + max) / 2.0; values.len()];
    }
    values
        .iter()
        .map(|&v| min + (v - lo) / range * (max - min))
        .collect()
}
