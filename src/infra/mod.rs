// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns used by the ML and application layers:
//
//   metrics.rs — epoch loss records, console line formats, the
//                optional CSV metrics log, and the squared-error
//                accumulator used to score a test set.

/// Training metrics and error accumulation
pub mod metrics;
