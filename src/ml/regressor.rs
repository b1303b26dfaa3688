// ============================================================
// Layer 5 — BurnRegressor
// ============================================================
// The concrete Regressor: a FeedForward module on the NdArray
// CPU backend, trained with the loop in trainer.rs.
//
//   train() → runs the SGD loop, keeps the fitted weights
//   run()   → one forward pass on the inference backend

use anyhow::{anyhow, ensure, Result};
use burn::{
    backend::{ndarray::NdArrayDevice, Autodiff, NdArray},
    module::AutodiffModule,
    prelude::*,
};

use crate::domain::sample::EncodedSample;
use crate::domain::traits::{Regressor, TrainingSummary};
use crate::infra::metrics::EpochMetrics;
use crate::ml::model::{FeedForward, FeedForwardConfig};
use crate::ml::trainer::{run_training, TrainOptions};

pub type TrainBackend = Autodiff<NdArray>;
pub type InferBackend = NdArray;

pub struct BurnRegressor {
    network: FeedForwardConfig,
    options: TrainOptions,
    model:   FeedForward<TrainBackend>,
    history: Vec<EpochMetrics>,
    device:  NdArrayDevice,
}

impl BurnRegressor {
    /// Build an untrained network with freshly initialised weights.
    pub fn new(network: FeedForwardConfig, options: TrainOptions) -> Self {
        let device = NdArrayDevice::default();
        let model  = network.init::<TrainBackend>(&device);
        tracing::info!(
            "Network ready: {} inputs, hidden {:?}, {} outputs ({:?})",
            network.input_size,
            network.hidden_sizes,
            network.output_size,
            network.output_activation,
        );
        Self { network, options, model, history: Vec::new(), device }
    }

    /// Every epoch of every train() call so far
    pub fn history(&self) -> &[EpochMetrics] {
        &self.history
    }

    fn check_shapes(&self, samples: &[EncodedSample]) -> Result<()> {
        for (i, s) in samples.iter().enumerate() {
            ensure!(
                s.input_size() == self.network.input_size
                    && s.output_size() == self.network.output_size,
                "sample {} has shape {}→{}, network expects {}→{}",
                i,
                s.input_size(),
                s.output_size(),
                self.network.input_size,
                self.network.output_size,
            );
        }
        Ok(())
    }
}

impl Regressor for BurnRegressor {
    fn train(
        &mut self,
        train:      &[EncodedSample],
        validation: &[EncodedSample],
    ) -> Result<TrainingSummary> {
        self.check_shapes(train)?;
        self.check_shapes(validation)?;

        let (model, history) =
            run_training(self.model.clone(), train, validation, &self.options)?;
        self.model = model;

        self.history.extend(history.iter().cloned());

        // Zero epochs leaves the initial weights in place
        Ok(match history.last() {
            Some(last) => TrainingSummary {
                epochs_run:     history.len(),
                final_loss:     last.train_loss,
                final_val_loss: last.val_loss,
            },
            None => TrainingSummary {
                epochs_run:     0,
                final_loss:     f64::NAN,
                final_val_loss: None,
            },
        })
    }

    fn run(&self, input: &[f32]) -> Result<Vec<f32>> {
        ensure!(
            input.len() == self.network.input_size,
            "input has {} values, network expects {}",
            input.len(),
            self.network.input_size,
        );

        let model: FeedForward<InferBackend> = self.model.valid();
        let x = Tensor::<InferBackend, 2>::from_data(
            TensorData::new(input.to_vec(), [1, input.len()]),
            &self.device,
        );

        model
            .forward(x)
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| anyhow!("Cannot read prediction tensor: {e:?}"))
    }
}
