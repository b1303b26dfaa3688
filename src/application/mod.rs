// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Each use case wires the data, ML and infra layers into one
// linear pipeline: load → encode → split → train → evaluate.
//
// Rules for this layer:
//   - No tensor or model code here
//   - No argument parsing (that's Layer 1)
//   - Only workflow coordination and result reporting

/// JSON pipeline: scaled label, online trainer, test-set MSE
pub mod memory_use_case;

/// CSV pipeline: raw label, batched trainer, probe predictions
pub mod dataflow_use_case;
