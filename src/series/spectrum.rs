use log::debug;
use rustfft::{num_complex::Complex, FftPlanner};

use super::error::{Result, SeriesError};
use super::model::{SampleSet, SpectrumBin};

/// Magnitude spectrum of an evaluated series.
///
/// Returns bins `0..=N/2`. Bin `k` sits at `k / (N · dt)` cycles per unit
/// domain, where `dt` is the sample spacing. Magnitudes are in amplitude
/// units: `|X₀| / N` for DC and `2·|Xₖ| / N` above it, so a sine that lands
/// on a bin shows up with its own amplitude. Each bin keeps its phase too.
pub fn magnitude_spectrum(samples: &SampleSet) -> Result<Vec<SpectrumBin>> {
    let n = samples.len();
    let dt = match samples.spacing() {
        Some(dt) if dt > 0.0 => dt,
        _ => {
            return Err(SeriesError::invalid(format!(
                "a spectrum needs at least 2 distinct samples, got {n}"
            )))
        }
    };

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);
    let mut buffer: Vec<Complex<f64>> = samples
        .iter()
        .map(|s| Complex::new(s.value, 0.0))
        .collect();
    fft.process(&mut buffer);

    let n_f = n as f64;
    let resolution = 1.0 / (n_f * dt);
    let bins: Vec<SpectrumBin> = buffer
        .iter()
        .take(n / 2 + 1)
        .enumerate()
        .map(|(k, c)| {
            let scale = if k == 0 { 1.0 } else { 2.0 };
            SpectrumBin {
                frequency: k as f64 * resolution,
                magnitude: scale * c.norm() / n_f,
                phase: c.arg(),
            }
        })
        .collect();

    debug!("spectrum: {} bins, resolution {resolution:.4}", bins.len());
    Ok(bins)
}
