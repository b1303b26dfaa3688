// ============================================================
// Layer 2 — MemoryUseCase (in-memory trainer)
// ============================================================
// Orchestrates the JSON pipeline in order:
//
//   Step 1: Load records from JSON         (Layer 4 - data)
//   Step 2: Encode, scale label by ratio   (Layer 4 - data)
//   Step 3: Seeded shuffle + split         (Layer 4 - data)
//   Step 4: Build the default network      (Layer 5 - ml)
//   Step 5: Train, one log line per iter   (Layer 5 - ml)
//   Step 6: Score the held-out rows        (Layer 5 - ml)
//
// The network follows the classic generic-trainer defaults:
// one sigmoid hidden layer of max(3, inputs / 2) units, sigmoid
// output, online delta-rule SGD (½·MSE gradients) with learning
// rate 0.3 and momentum 0.1, stopping early once training error
// drops below 0.005.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::{
    loader::JsonRecordLoader,
    preprocessor::{prepare_data, DEFAULT_RATIO},
    splitter::{resolve_seed, seeded_rng, shuffle, split},
};
use crate::domain::record::AbaloneRecord;
use crate::domain::sample::EncodedSample;
use crate::domain::traits::{RecordSource, Regressor, TrainingSummary};
use crate::infra::metrics::MetricsLogger;
use crate::ml::{
    evaluator::evaluate,
    model::{FeedForwardConfig, OutputActivation},
    regressor::BurnRegressor,
    trainer::{LogStyle, Objective, TrainOptions},
};

// ─── Configuration ────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    pub data_path:       String,
    /// Divisor applied to the ring count before training
    pub ratio:           f32,
    pub train_ratio:     f64,
    pub iterations:      usize,
    pub learning_rate:   f64,
    pub momentum:        f64,
    pub error_threshold: f64,
    pub log_period:      usize,
    pub seed:            Option<u64>,
    pub metrics_out:     Option<String>,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            data_path:       "data/abalone.json".to_string(),
            ratio:           DEFAULT_RATIO,
            train_ratio:     0.75,
            iterations:      500,
            learning_rate:   0.3,
            momentum:        0.1,
            error_threshold: 0.005,
            log_period:      1,
            seed:            None,
            metrics_out:     None,
        }
    }
}

/// What a finished run produced
#[derive(Debug, Clone)]
pub struct MemoryReport {
    pub seed:      u64,
    /// The shuffled partition the network was trained and scored on
    pub train:     Vec<EncodedSample>,
    pub test:      Vec<EncodedSample>,
    pub training:  TrainingSummary,
    /// Mean squared error on the scaled label
    pub mse:       f64,
}

// ─── MemoryUseCase ────────────────────────────────────────────────────────────
pub struct MemoryUseCase {
    config: MemoryConfig,
}

impl MemoryUseCase {
    pub fn new(config: MemoryConfig) -> Self {
        Self { config }
    }

    /// Load the JSON file and run the full pipeline on it
    pub fn execute(&self) -> Result<MemoryReport> {
        let cfg = &self.config;
        tracing::debug!("Memory config: {}", serde_json::to_string(cfg)?);

        // ── Step 1: Load records ──────────────────────────────────────────────
        let records = JsonRecordLoader::new(&cfg.data_path).load_all()?;
        self.run_on(&records)
    }

    /// Steps 2-6 on records already in memory
    pub fn run_on(&self, records: &[AbaloneRecord]) -> Result<MemoryReport> {
        let cfg = &self.config;

        // ── Step 2: Encode ────────────────────────────────────────────────────
        let mut samples = prepare_data(records, cfg.ratio)?;

        // ── Step 3: Shuffle + split ───────────────────────────────────────────
        let seed = resolve_seed(cfg.seed);
        tracing::info!("Shuffling {} samples with seed {}", samples.len(), seed);
        shuffle(&mut samples, &mut seeded_rng(seed));
        let (train, test) = split(samples, cfg.train_ratio)?;
        tracing::info!("Split: {} train, {} test", train.len(), test.len());

        // ── Step 4: Network ───────────────────────────────────────────────────
        let inputs  = AbaloneRecord::FEATURE_COUNT;
        let network = FeedForwardConfig::new(inputs, vec![(inputs / 2).max(3)])
            .with_output_activation(OutputActivation::Sigmoid);
        let options = TrainOptions {
            epochs:          cfg.iterations,
            batch_size:      1,
            learning_rate:   cfg.learning_rate,
            momentum:        Some(cfg.momentum),
            error_threshold: Some(cfg.error_threshold),
            shuffle_seed:    None,
            log_period:      cfg.log_period,
            log_style:       LogStyle::Iterations,
            objective:       Objective::HalfMse,
        };
        let mut regressor = BurnRegressor::new(network, options);

        // ── Step 5: Train ─────────────────────────────────────────────────────
        let training = regressor.train(&train, &[])?;
        println!("trained");

        if let Some(path) = &cfg.metrics_out {
            MetricsLogger::new(path)?.write_all(regressor.history())?;
        }

        // ── Step 6: Evaluate ──────────────────────────────────────────────────
        let evaluation = evaluate(&regressor, &test)?;
        for p in &evaluation.predictions {
            println!(
                "Expected {} Actual {}",
                p.expected[0] * cfg.ratio,
                p.actual[0] * cfg.ratio,
            );
        }
        println!("{}", evaluation.mse);

        Ok(MemoryReport {
            seed,
            train,
            test,
            training,
            mse:       evaluation.mse,
        })
    }
}
