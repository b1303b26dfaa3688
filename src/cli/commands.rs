// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `memory` and `dataflow`, and all
// their flags. Every default reproduces the reference run of
// the corresponding pipeline.

use clap::{Args, Subcommand};

use crate::application::{
    dataflow_use_case::DataflowConfig,
    memory_use_case::MemoryConfig,
};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train on the JSON dataset with the in-memory online trainer,
    /// then report error on the held-out rows
    Memory(MemoryArgs),

    /// Train on the CSV dataset with batched SGD and validation,
    /// then predict three probe specimens
    Dataflow(DataflowArgs),
}

#[derive(Args, Debug)]
pub struct MemoryArgs {
    /// JSON array of abalone records
    #[arg(long, default_value = "data/abalone.json")]
    pub data: String,

    /// Divisor applied to the ring count so the target fits in (0, 1]
    #[arg(long, default_value_t = 29.0)]
    pub ratio: f32,

    /// Fraction of shuffled rows used for training
    #[arg(long, default_value_t = 0.75)]
    pub train_ratio: f64,

    /// Maximum passes over the train set
    #[arg(long, default_value_t = 500)]
    pub iterations: usize,

    #[arg(long, default_value_t = 0.3)]
    pub learning_rate: f64,

    #[arg(long, default_value_t = 0.1)]
    pub momentum: f64,

    /// Stop once the mean training error falls below this
    #[arg(long, default_value_t = 0.005)]
    pub error_threshold: f64,

    /// Print the training error every N iterations (0 = never)
    #[arg(long, default_value_t = 1)]
    pub log_period: usize,

    /// Shuffle seed; a random one is drawn and logged when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write per-iteration losses to this CSV file
    #[arg(long)]
    pub metrics_out: Option<String>,
}

impl From<MemoryArgs> for MemoryConfig {
    fn from(a: MemoryArgs) -> Self {
        MemoryConfig {
            data_path:       a.data,
            ratio:           a.ratio,
            train_ratio:     a.train_ratio,
            iterations:      a.iterations,
            learning_rate:   a.learning_rate,
            momentum:        a.momentum,
            error_threshold: a.error_threshold,
            log_period:      a.log_period,
            seed:            a.seed,
            metrics_out:     a.metrics_out,
        }
    }
}

#[derive(Args, Debug)]
pub struct DataflowArgs {
    /// CSV file with a header row
    #[arg(long, default_value = "data/abalone.csv")]
    pub data: String,

    /// Fraction of rows (rounded down to whole batches) used for training
    #[arg(long, default_value_t = 0.75)]
    pub train_ratio: f64,

    #[arg(long, default_value_t = 100)]
    pub batch_size: usize,

    /// Size of the bounded shuffle buffer
    #[arg(long, default_value_t = 100)]
    pub shuffle_buffer: usize,

    #[arg(long, default_value_t = 200)]
    pub epochs: usize,

    #[arg(long, default_value_t = 0.01)]
    pub learning_rate: f64,

    /// Hidden layer width as a multiple of the input width
    #[arg(long, default_value_t = 2)]
    pub hidden_factor: usize,

    /// Shuffle seed; a random one is drawn and logged when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write per-epoch losses to this CSV file
    #[arg(long)]
    pub metrics_out: Option<String>,
}

impl From<DataflowArgs> for DataflowConfig {
    fn from(a: DataflowArgs) -> Self {
        DataflowConfig {
            data_path:      a.data,
            train_ratio:    a.train_ratio,
            batch_size:     a.batch_size,
            shuffle_buffer: a.shuffle_buffer,
            epochs:         a.epochs,
            learning_rate:  a.learning_rate,
            hidden_factor:  a.hidden_factor,
            seed:           a.seed,
            metrics_out:    a.metrics_out,
        }
    }
}
