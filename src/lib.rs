//! Sine component collection and Fourier series evaluation.
//!
//! The library holds everything that does not need a window: the component
//! store with its input workflow, the evaluator, the magnitude spectrum and
//! series files. The `fourier-fun` binary is an egui front end over it.

pub mod series;
