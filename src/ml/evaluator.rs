// ============================================================
// Layer 5 — Evaluator
// ============================================================
// Scores any Regressor on held-out samples. It only sees the
// trait, so a stub regressor is enough to test it.

use anyhow::Result;

use crate::domain::sample::EncodedSample;
use crate::domain::traits::Regressor;
use crate::infra::metrics::SquaredErrorAccumulator;

/// Expected vs. predicted output for one test sample
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub expected: Vec<f32>,
    pub actual:   Vec<f32>,
}

#[derive(Debug, Clone)]
pub struct Evaluation {
    pub predictions: Vec<Prediction>,
    /// Mean squared error over the test set; NaN if it was empty
    pub mse: f64,
}

/// Run `model` on every test sample and accumulate squared error.
pub fn evaluate<R: Regressor + ?Sized>(model: &R, test: &[EncodedSample]) -> Result<Evaluation> {
    let mut acc         = SquaredErrorAccumulator::new();
    let mut predictions = Vec::with_capacity(test.len());

    for sample in test {
        let actual = model.run(&sample.input)?;
        acc.add(&sample.output, &actual);
        predictions.push(Prediction { expected: sample.output.clone(), actual });
    }

    Ok(Evaluation { predictions, mse: acc.mean() })
}

/// Run `model` on each fixed input vector.
pub fn predict_all<R: Regressor + ?Sized>(model: &R, inputs: &[Vec<f32>]) -> Result<Vec<Vec<f32>>> {
    inputs.iter().map(|x| model.run(x)).collect()
}
