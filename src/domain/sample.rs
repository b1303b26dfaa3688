// ============================================================
// Layer 3 — Encoded Sample Domain Type
// ============================================================
// A record after encoding: purely numeric input and output
// vectors, ready to be batched into tensors.
//
// Both pipelines share this type. They differ only in what
// `output` holds:
//   memory   → [rings / ratio]   (bounded target)
//   dataflow → [rings]           (raw target)

use serde::{Deserialize, Serialize};

/// One numeric training example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedSample {
    /// Feature vector, one value per input neuron
    pub input: Vec<f32>,

    /// Target vector; always a single value for ring regression
    pub output: Vec<f32>,
}

impl EncodedSample {
    pub fn new(input: Vec<f32>, output: Vec<f32>) -> Self {
        Self { input, output }
    }

    pub fn input_size(&self) -> usize {
        self.input.len()
    }

    pub fn output_size(&self) -> usize {
        self.output.len()
    }
}
