// ============================================================
// Layer 2 — DataflowUseCase (batched trainer)
// ============================================================
// Orchestrates the CSV pipeline in order:
//
//   Step 1: Load records from CSV               (Layer 4 - data)
//   Step 2: Encode, keep the raw ring count     (Layer 4 - data)
//   Step 3: Buffered shuffle, split on batches  (Layer 4 - data)
//   Step 4: Build the two-layer network         (Layer 5 - ml)
//   Step 5: Fit with per-epoch validation       (Layer 5 - ml)
//   Step 6: Predict the three probe specimens   (Layer 5 - ml)
//
// Network: one sigmoid hidden layer of hidden_factor × inputs
// units, one linear output unit, plain SGD at 0.01 on MSE.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    loader::CsvRecordLoader,
    preprocessor::prepare_raw,
    splitter::{resolve_seed, seeded_rng, shuffle_buffered, split_batches},
};
use crate::domain::record::AbaloneRecord;
use crate::domain::traits::{RecordSource, Regressor, TrainingSummary};
use crate::infra::metrics::MetricsLogger;
use crate::ml::{
    evaluator::predict_all,
    model::{FeedForwardConfig, OutputActivation},
    regressor::BurnRegressor,
    trainer::{LogStyle, Objective, TrainOptions},
};

// ─── Probe specimens ──────────────────────────────────────────────────────────
/// Three real dataset rows (F, M, I) with their known ring counts.
/// Feature order: sex, length, diameter, height, whole, shucked, viscera, shell
pub const PROBES: [([f32; AbaloneRecord::FEATURE_COUNT], u32); 3] = [
    ([0.0, 0.53, 0.42,  0.135, 0.677, 0.2565, 0.1415, 0.21 ], 9),
    ([1.0, 0.44, 0.365, 0.125, 0.516, 0.2155, 0.114,  0.155], 10),
    ([0.5, 0.33, 0.255, 0.08,  0.205, 0.0895, 0.0395, 0.055], 7),
];

// ─── Configuration ────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataflowConfig {
    pub data_path:      String,
    pub train_ratio:    f64,
    pub batch_size:     usize,
    pub shuffle_buffer: usize,
    pub epochs:         usize,
    pub learning_rate:  f64,
    /// Hidden width as a multiple of the input width
    pub hidden_factor:  usize,
    pub seed:           Option<u64>,
    pub metrics_out:    Option<String>,
}

impl Default for DataflowConfig {
    fn default() -> Self {
        Self {
            data_path:      "data/abalone.csv".to_string(),
            train_ratio:    0.75,
            batch_size:     100,
            shuffle_buffer: 100,
            epochs:         200,
            learning_rate:  0.01,
            hidden_factor:  2,
            seed:           None,
            metrics_out:    None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DataflowReport {
    pub seed:           u64,
    pub train_len:      usize,
    pub validation_len: usize,
    pub training:       TrainingSummary,
    /// Raw network output for each entry of PROBES, in order
    pub probe_outputs:  Vec<Vec<f32>>,
}

// ─── DataflowUseCase ──────────────────────────────────────────────────────────
pub struct DataflowUseCase {
    config: DataflowConfig,
}

impl DataflowUseCase {
    pub fn new(config: DataflowConfig) -> Self {
        Self { config }
    }

    /// Load the CSV file and run the full pipeline on it
    pub fn execute(&self) -> Result<DataflowReport> {
        let cfg = &self.config;
        tracing::debug!("Dataflow config: {}", serde_json::to_string(cfg)?);

        // ── Step 1: Load records ──────────────────────────────────────────────
        let records = CsvRecordLoader::new(&cfg.data_path).load_all()?;
        self.run_on(&records)
    }

    /// Steps 2-6 on records already in memory
    pub fn run_on(&self, records: &[AbaloneRecord]) -> Result<DataflowReport> {
        let cfg = &self.config;
        ensure!(cfg.hidden_factor > 0, "hidden factor must be at least 1");

        // ── Step 2: Encode ────────────────────────────────────────────────────
        let samples = prepare_raw(records);
        let inputs  = samples
            .first()
            .map_or(AbaloneRecord::FEATURE_COUNT, |s| s.input_size());

        // ── Step 3: Shuffle, batch, take/skip ─────────────────────────────────
        let seed     = resolve_seed(cfg.seed);
        let mut rng  = seeded_rng(seed);
        tracing::info!(
            "Shuffling {} samples (buffer {}) with seed {}",
            samples.len(), cfg.shuffle_buffer, seed
        );
        let shuffled = shuffle_buffered(samples, cfg.shuffle_buffer, &mut rng)?;
        let (train, validation) = split_batches(shuffled, cfg.train_ratio, cfg.batch_size)?;
        ensure!(
            !train.is_empty(),
            "not enough rows for one training batch of {} (train ratio {})",
            cfg.batch_size,
            cfg.train_ratio
        );
        tracing::info!(
            "Split: {} train batches ({} samples), {} validation samples",
            train.len() / cfg.batch_size,
            train.len(),
            validation.len()
        );

        // ── Step 4: Network ───────────────────────────────────────────────────
        let network = FeedForwardConfig::new(inputs, vec![inputs * cfg.hidden_factor])
            .with_output_activation(OutputActivation::Linear);
        let options = TrainOptions {
            epochs:          cfg.epochs,
            batch_size:      cfg.batch_size,
            learning_rate:   cfg.learning_rate,
            momentum:        None,
            error_threshold: None,
            shuffle_seed:    Some(seed),
            log_period:      1,
            log_style:       LogStyle::Epochs,
            objective:       Objective::Mse,
        };
        let mut regressor = BurnRegressor::new(network, options);

        // ── Step 5: Fit ───────────────────────────────────────────────────────
        let training = regressor.train(&train, &validation)?;

        if let Some(path) = &cfg.metrics_out {
            MetricsLogger::new(path)?.write_all(regressor.history())?;
        }

        // ── Step 6: Probe predictions ─────────────────────────────────────────
        let probe_inputs: Vec<Vec<f32>> = PROBES.iter().map(|(x, _)| x.to_vec()).collect();
        let probe_outputs = predict_all(&regressor, &probe_inputs)?;
        for (output, (_, rings)) in probe_outputs.iter().zip(PROBES.iter()) {
            println!("{:?} (known rings: {})", output, rings);
        }

        Ok(DataflowReport {
            seed,
            train_len: train.len(),
            validation_len: validation.len(),
            training,
            probe_outputs,
        })
    }
}
