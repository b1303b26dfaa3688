// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the files on disk and the tensors fed to
// the network:
//
//   abalone.json / abalone.csv
//       │
//       ▼
//   JsonRecordLoader / CsvRecordLoader → typed AbaloneRecords
//       │
//       ▼
//   preprocessor      → EncodedSamples (sex encoded, label scaled)
//       │
//       ▼
//   splitter          → seeded shuffle + train/test split
//       │
//       ▼
//   SampleDataset     → implements Burn's Dataset trait
//       │
//       ▼
//   RegressionBatcher → stacks samples into tensor batches

/// Loads abalone records from JSON or CSV
pub mod loader;

/// Encodes records into numeric samples
pub mod preprocessor;

/// Seeded shuffles and train/test splits
pub mod splitter;

/// Implements Burn's Dataset trait for encoded samples
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;
