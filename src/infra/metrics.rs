// ============================================================
// Layer 6 — Training Metrics
// ============================================================
// Per-epoch loss records, the console line formats for both
// pipelines, an optional CSV log of the whole run, and the
// squared-error accumulator used when scoring a test set.
//
// Example CSV output (--metrics-out run.csv):
//   epoch,train_loss,val_loss
//   1,0.031245,0.030892
//   2,0.028901,
//
// An empty val_loss cell means no validation set was used.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// One row of metrics for a single pass over the train set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochMetrics {
    /// The epoch (iteration) number, starting at 1
    pub epoch: usize,

    /// Mean MSE over all training batches of this epoch
    pub train_loss: f64,

    /// Mean MSE over the validation batches, if any were given
    pub val_loss: Option<f64>,
}

impl EpochMetrics {
    pub fn new(epoch: usize, train_loss: f64, val_loss: Option<f64>) -> Self {
        Self { epoch, train_loss, val_loss }
    }

    /// Line printed by the in-memory trainer
    pub fn iteration_line(&self) -> String {
        format!("iterations: {}, training error: {}", self.epoch, self.train_loss)
    }

    /// Line printed by the dataflow trainer
    pub fn epoch_line(&self, total_epochs: usize) -> String {
        match self.val_loss {
            Some(val) => format!(
                "Epoch {:>3}/{} | loss={:.6} | val_loss={:.6}",
                self.epoch, total_epochs, self.train_loss, val,
            ),
            None => format!(
                "Epoch {:>3}/{} | loss={:.6}",
                self.epoch, total_epochs, self.train_loss,
            ),
        }
    }
}

// ─── MetricsLogger ────────────────────────────────────────────────────────────
/// Writes a run's epoch metrics to a CSV file, one row per epoch.
pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let csv_path = path.into();
        if let Some(dir) = csv_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create '{}'", dir.display()))?;
        }
        Ok(Self { csv_path })
    }

    /// Write all rows, replacing any previous file.
    pub fn write_all(&self, rows: &[EpochMetrics]) -> Result<()> {
        let mut w = csv::Writer::from_path(&self.csv_path)
            .with_context(|| format!("Cannot create '{}'", self.csv_path.display()))?;

        for row in rows {
            w.serialize(row)?;
        }
        w.flush()?;

        tracing::debug!("Wrote {} metric rows to '{}'", rows.len(), self.csv_path.display());
        Ok(())
    }

    #[cfg(test)]
    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}

// ─── SquaredErrorAccumulator ──────────────────────────────────────────────────
/// Running sum of squared errors, averaged per sample.
#[derive(Debug, Clone, Default)]
pub struct SquaredErrorAccumulator {
    total: f64,
    count: usize,
}

impl SquaredErrorAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one sample's error, summed over its output components.
    pub fn add(&mut self, expected: &[f32], actual: &[f32]) {
        self.total += expected
            .iter()
            .zip(actual)
            .map(|(e, a)| (*a as f64 - *e as f64).powi(2))
            .sum::<f64>();
        self.count += 1;
    }

    #[cfg(test)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean squared error; NaN when nothing was added
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.total / self.count as f64
        }
    }
}
