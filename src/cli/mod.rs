// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses the command line with clap and hands a config to the
// matching use case. No computation happens here.
//
//   1. `memory`   — JSON dataset, online trainer, test-set MSE
//   2. `dataflow` — CSV dataset, batched trainer, probe predictions

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, DataflowArgs, MemoryArgs};

#[derive(Parser, Debug)]
#[command(
    name = "abalone-rings",
    version = "0.1.0",
    about = "Train a feed-forward regressor to predict abalone ring counts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Memory(args)   => run_memory(args),
            Commands::Dataflow(args) => run_dataflow(args),
        }
    }
}

fn run_memory(args: MemoryArgs) -> Result<()> {
    use crate::application::memory_use_case::MemoryUseCase;

    tracing::info!("Starting in-memory training on: {}", args.data);
    let report = MemoryUseCase::new(args.into()).execute()?;
    tracing::info!(
        "Done: {} train / {} test rows, {} iterations, mse={:.6}, seed={}",
        report.train.len(),
        report.test.len(),
        report.training.epochs_run,
        report.mse,
        report.seed
    );
    Ok(())
}

fn run_dataflow(args: DataflowArgs) -> Result<()> {
    use crate::application::dataflow_use_case::DataflowUseCase;

    tracing::info!("Starting dataflow training on: {}", args.data);
    let report = DataflowUseCase::new(args.into()).execute()?;
    tracing::info!(
        "Done: {} train / {} validation rows, {} epochs, final loss={:.6}, val_loss={:?}, seed={}",
        report.train_len,
        report.validation_len,
        report.training.epochs_run,
        report.training.final_loss,
        report.training.final_val_loss,
        report.seed
    );
    Ok(())
}
