// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing the problem:
// abalone records, their encoded form, and the abstractions the
// rest of the system plugs into.
//
// Rules for this layer:
//   - NO Burn types
//   - NO file I/O
//   - Only plain data and traits

/// A raw abalone measurement row and its categorical sex field
pub mod record;

/// The numeric input/output form of a record
pub mod sample;

/// Core abstractions (traits) that other layers implement
pub mod traits;
