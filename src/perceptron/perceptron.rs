use rand::prelude::*;
use std::f64::consts::PI;

use crate::error::PerceptronError;

/// Single-layer perceptron with a step activation.
///
/// The bias is folded into the weights ("bias trick"): every input gets a
/// constant `1.0` appended, so `weights.len() == n_inputs + 1`.
#[derive(Debug, Clone)]
pub struct Perceptron {
    weights: Vec<f64>,
    alpha: f64,
}

impl Perceptron {
    /// Random weights from N(0, 1) / sqrt(n_inputs), using the thread RNG.
    pub fn new(n_inputs: usize, alpha: f64) -> Perceptron {
        Perceptron::with_rng(n_inputs, alpha, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(n_inputs: usize, alpha: f64, rng: &mut R) -> Perceptron {
        let scale = 1.0 / (n_inputs.max(1) as f64).sqrt();
        let weights = (0..=n_inputs)
            .map(|_| sample_standard_normal(rng) * scale)
            .collect();
        Perceptron { weights, alpha }
    }

    /// Starts from explicit weights; the last one is the bias.
    pub fn from_weights(weights: Vec<f64>, alpha: f64) -> Perceptron {
        Perceptron { weights, alpha }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len().saturating_sub(1)
    }

    /// Heaviside step: 1 for strictly positive input, else 0.
    pub fn step(x: f64) -> f64 {
        if x > 0.0 { 1.0 } else { 0.0 }
    }

    /// Runs the perceptron learning rule for `epochs` passes over the data.
    ///
    /// On a wrong prediction the weights move by `-alpha * (pred - target) * x`.
    /// Returns the number of misclassified samples in the last epoch, so `0`
    /// means the data was fit.
    pub fn fit(&mut self, inputs: &[Vec<f64>], targets: &[f64], epochs: usize) -> Result<usize, PerceptronError> {
        if inputs.is_empty() {
            return Err(PerceptronError::EmptyDataset);
        }
        if inputs.len() != targets.len() {
            return Err(PerceptronError::SampleCount { inputs: inputs.len(), targets: targets.len() });
        }
        for x in inputs {
            self.check_width(x)?;
        }

        let mut mistakes = 0;
        for _ in 0..epochs {
            mistakes = 0;
            for (x, &target) in inputs.iter().zip(targets) {
                let pred = Perceptron::step(self.activation(x));
                if pred != target {
                    mistakes += 1;
                    let error = pred - target;
                    for (w, xi) in self.weights.iter_mut().zip(with_bias(x)) {
                        *w -= self.alpha * error * xi;
                    }
                }
            }
        }
        Ok(mistakes)
    }

    /// Predicts 0 or 1 for one sample.
    pub fn predict(&self, x: &[f64]) -> Result<f64, PerceptronError> {
        self.check_width(x)?;
        Ok(Perceptron::step(self.activation(x)))
    }

    fn activation(&self, x: &[f64]) -> f64 {
        self.weights.iter().zip(with_bias(x)).map(|(w, xi)| w * xi).sum()
    }

    fn check_width(&self, x: &[f64]) -> Result<(), PerceptronError> {
        if x.len() != self.n_inputs() {
            return Err(PerceptronError::InputWidth { expected: self.n_inputs(), actual: x.len() });
        }
        Ok(())
    }
}

fn with_bias(x: &[f64]) -> impl Iterator<Item = f64> + '_ {
    x.iter().copied().chain(std::iter::once(1.0))
}

/// Samples a single value from N(0, 1) using the Box-Muller transform.
fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // Draw two independent uniform samples in (0, 1] to avoid log(0).
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = 1.0 - rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}
