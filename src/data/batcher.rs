// ============================================================
// Layer 4 — Regression Batcher
// ============================================================
// Implements Burn's Batcher trait to stack a Vec<EncodedSample>
// into two float tensors.
//
//   Input:  N samples, each with F inputs and 1 output
//   Output: inputs  [N, F]
//           targets [N, 1]
//
// Samples are flattened row by row, then reshaped:
//   [s1_f1, s1_f2, ..., s1_fF, s2_f1, ..., sN_fF] → [N, F]

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::domain::sample::EncodedSample;

// ─── RegressionBatch ──────────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct RegressionBatch<B: Backend> {
    /// Feature rows — shape: [batch_size, input_size]
    pub inputs: Tensor<B, 2>,

    /// Target rows — shape: [batch_size, output_size]
    pub targets: Tensor<B, 2>,
}

// ─── RegressionBatcher ────────────────────────────────────────────────────────
/// Stateless: the target device is supplied per call by the DataLoader.
#[derive(Clone, Debug, Default)]
pub struct RegressionBatcher;

impl RegressionBatcher {
    pub fn new() -> Self {
        Self
    }
}

impl<B: Backend> Batcher<B, EncodedSample, RegressionBatch<B>> for RegressionBatcher {
    fn batch(&self, items: Vec<EncodedSample>, device: &B::Device) -> RegressionBatch<B> {
        let batch_size  = items.len();
        let input_size  = items.first().map_or(0, |s| s.input_size());
        let output_size = items.first().map_or(0, |s| s.output_size());

        let input_flat: Vec<f32> = items
            .iter()
            .flat_map(|s| s.input.iter().copied())
            .collect();

        let target_flat: Vec<f32> = items
            .iter()
            .flat_map(|s| s.output.iter().copied())
            .collect();

        let inputs = Tensor::<B, 2>::from_data(
            TensorData::new(input_flat, [batch_size, input_size]),
            device,
        );
        let targets = Tensor::<B, 2>::from_data(
            TensorData::new(target_flat, [batch_size, output_size]),
            device,
        );

        RegressionBatch { inputs, targets }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::{ndarray::NdArrayDevice, NdArray};

    type TestBackend = NdArray;

    #[test]
    fn test_batch_shapes() {
        let device = NdArrayDevice::default();
        let items  = vec![
            EncodedSample::new(vec![0.0, 0.1, 0.2], vec![0.3]),
            EncodedSample::new(vec![1.0, 1.1, 1.2], vec![1.3]),
        ];

        let batch: RegressionBatch<TestBackend> = RegressionBatcher::new().batch(items, &device);

        assert_eq!(batch.inputs.dims(), [2, 3]);
        assert_eq!(batch.targets.dims(), [2, 1]);
    }

    #[test]
    fn test_rows_stay_in_order() {
        let device = NdArrayDevice::default();
        let items  = vec![
            EncodedSample::new(vec![1.0, 2.0], vec![10.0]),
            EncodedSample::new(vec![3.0, 4.0], vec![20.0]),
        ];

        let batch: RegressionBatch<TestBackend> = RegressionBatcher::new().batch(items, &device);

        let inputs: Vec<f32>  = batch.inputs.into_data().to_vec().unwrap();
        let targets: Vec<f32> = batch.targets.into_data().to_vec().unwrap();
        assert_eq!(inputs, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(targets, vec![10.0, 20.0]);
    }
}
