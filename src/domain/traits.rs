// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two seams of the system:
//
//   RecordSource → where abalone rows come from (JSON, CSV)
//   Regressor    → whatever network learns from encoded samples
//
// The application layer only talks to these traits, so the
// evaluation logic can be exercised with a stub regressor and
// no training backend at all.

use anyhow::Result;

use crate::domain::record::AbaloneRecord;
use crate::domain::sample::EncodedSample;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can load abalone records.
///
/// Implementations:
///   - JsonRecordLoader → a JSON array of records
///   - CsvRecordLoader  → a CSV file with a header row
pub trait RecordSource {
    /// Load every record, in file order.
    fn load_all(&self) -> Result<Vec<AbaloneRecord>>;
}

// ─── Regressor ────────────────────────────────────────────────────────────────
/// What a finished training run reports back.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSummary {
    /// How many passes over the train set actually ran
    pub epochs_run: usize,

    /// Mean training loss of the last pass
    pub final_loss: f64,

    /// Mean validation loss of the last pass, if a validation set was given
    pub final_val_loss: Option<f64>,
}

/// A trainable network treated as an injected capability.
///
/// Implementations:
///   - BurnRegressor → feed-forward net on Burn's NdArray backend
pub trait Regressor {
    /// Fit on `train`, reporting loss on `validation` after each pass.
    /// `validation` may be empty.
    fn train(
        &mut self,
        train:      &[EncodedSample],
        validation: &[EncodedSample],
    ) -> Result<TrainingSummary>;

    /// Run inference on one feature vector.
    fn run(&self, input: &[f32]) -> Result<Vec<f32>>;
}
