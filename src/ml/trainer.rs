// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Plain SGD over Burn's DataLoader, minimising MSE.
//
//   - Training runs on B (an AutodiffBackend) so loss.backward()
//     yields gradients for every Linear parameter
//   - model.valid() drops the autodiff wrapper; validation
//     batches are built on B::InnerBackend to match
//   - One epoch = one pass over the train set. With batch_size 1
//     this is online learning, one update per sample
//   - Optional early stop once the epoch's mean training error
//     falls below `error_threshold`
//   - Objective::HalfMse backprops ½·MSE, the classic delta rule
//     Δw = lr·(t−o)·o(1−o)·x. The logged loss is always full MSE

use anyhow::{ensure, Result};
use burn::{
    data::dataloader::DataLoaderBuilder,
    module::AutodiffModule,
    optim::{momentum::MomentumConfig, GradientsParams, Optimizer, SgdConfig},
    prelude::*,
    tensor::backend::AutodiffBackend,
};
use serde::{Deserialize, Serialize};

use crate::data::{
    batcher::{RegressionBatch, RegressionBatcher},
    dataset::SampleDataset,
};
use crate::domain::sample::EncodedSample;
use crate::infra::metrics::EpochMetrics;
use crate::ml::model::FeedForward;

/// How each epoch is reported on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogStyle {
    /// `iterations: N, training error: E`
    Iterations,
    /// `Epoch N/T | loss=... | val_loss=...`
    Epochs,
}

/// Which squared-error objective the gradients are taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Objective {
    /// mean((o - t)²)
    Mse,
    /// ½·mean((o - t)²)
    HalfMse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainOptions {
    pub epochs:          usize,
    pub batch_size:      usize,
    pub learning_rate:   f64,
    /// SGD momentum; None for vanilla SGD
    pub momentum:        Option<f64>,
    /// Stop as soon as the mean training error drops below this
    pub error_threshold: Option<f64>,
    /// Reshuffle train batches every epoch with this seed; None keeps file order
    pub shuffle_seed:    Option<u64>,
    /// Print every n-th epoch; 0 silences the per-epoch lines
    pub log_period:      usize,
    pub log_style:       LogStyle,
    pub objective:       Objective,
}

pub fn run_training<B: AutodiffBackend>(
    mut model:  FeedForward<B>,
    train:      &[EncodedSample],
    validation: &[EncodedSample],
    opts:       &TrainOptions,
) -> Result<(FeedForward<B>, Vec<EpochMetrics>)> {
    ensure!(opts.batch_size > 0, "batch size must be at least 1");
    ensure!(!train.is_empty(), "cannot train on an empty train set");

    // ── SGD optimiser ─────────────────────────────────────────────────────────
    // v = μ*v + g
    // θ = θ - lr * v
    let mut optim_cfg = SgdConfig::new();
    if let Some(m) = opts.momentum {
        optim_cfg = optim_cfg.with_momentum(Some(
            MomentumConfig::new().with_momentum(m).with_dampening(0.0),
        ));
    }
    let mut optim = optim_cfg.init();

    // ── Training data loader (AutodiffBackend) ────────────────────────────────
    let mut train_builder =
        DataLoaderBuilder::<B, EncodedSample, RegressionBatch<B>>::new(RegressionBatcher::new())
            .batch_size(opts.batch_size)
            .num_workers(1);
    if let Some(seed) = opts.shuffle_seed {
        train_builder = train_builder.shuffle(seed);
    }
    let train_loader = train_builder.build(SampleDataset::from(train));

    // ── Validation data loader (InnerBackend — no autodiff overhead) ──────────
    let val_loader = (!validation.is_empty()).then(|| {
        DataLoaderBuilder::<B::InnerBackend, EncodedSample, RegressionBatch<B::InnerBackend>>::new(
            RegressionBatcher::new(),
        )
        .batch_size(opts.batch_size)
        .num_workers(1)
        .build(SampleDataset::from(validation))
    });

    let mut history = Vec::with_capacity(opts.epochs);

    for epoch in 1..=opts.epochs {
        // ── Training phase ────────────────────────────────────────────────────
        let mut loss_sum = 0.0f64;
        let mut batches  = 0usize;

        for batch in train_loader.iter() {
            let loss = model.forward_loss(batch.inputs, batch.targets);

            loss_sum += loss.clone().into_scalar().elem::<f64>();
            batches  += 1;

            let grads = match opts.objective {
                Objective::Mse     => loss.backward(),
                Objective::HalfMse => loss.mul_scalar(0.5).backward(),
            };
            let grads = GradientsParams::from_grads(grads, &model);
            model = optim.step(opts.learning_rate, model, grads);
        }
        let train_loss = mean(loss_sum, batches);

        // ── Validation phase ──────────────────────────────────────────────────
        let val_loss = val_loader.as_ref().map(|loader| {
            let model_valid = model.valid();
            let mut sum     = 0.0f64;
            let mut count   = 0usize;
            for batch in loader.iter() {
                sum += model_valid
                    .forward_loss(batch.inputs, batch.targets)
                    .into_scalar()
                    .elem::<f64>();
                count += 1;
            }
            mean(sum, count)
        });

        let metrics = EpochMetrics::new(epoch, train_loss, val_loss);
        if opts.log_period > 0 && epoch % opts.log_period == 0 {
            match opts.log_style {
                LogStyle::Iterations => println!("{}", metrics.iteration_line()),
                LogStyle::Epochs     => println!("{}", metrics.epoch_line(opts.epochs)),
            }
        }
        history.push(metrics);

        if let Some(threshold) = opts.error_threshold {
            if train_loss < threshold {
                tracing::info!(
                    "Training error {:.6} below threshold {} after {} epochs",
                    train_loss, threshold, epoch
                );
                break;
            }
        }
    }

    tracing::info!("Training complete after {} epochs", history.len());
    Ok((model, history))
}

fn mean(sum: f64, count: usize) -> f64 {
    if count > 0 { sum / count as f64 } else { f64::NAN }
}
