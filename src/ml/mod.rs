// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// All Burn model and optimiser code lives here.
//
//   model.rs     — FeedForward: dense layers, sigmoid hidden
//                  activations, sigmoid or linear output, MSE loss
//
//   trainer.rs   — SGD training loop over Burn's DataLoader with
//                  optional momentum, validation and early stop
//
//   regressor.rs — BurnRegressor, the Regressor implementation
//                  the application layer trains and queries
//
//   evaluator.rs — test-set MSE and fixed-probe predictions,
//                  written against the Regressor trait only

/// Feed-forward network architecture
pub mod model;

/// SGD training loop with validation
pub mod trainer;

/// Burn-backed Regressor implementation
pub mod regressor;

/// Scoring and prediction helpers
pub mod evaluator;
