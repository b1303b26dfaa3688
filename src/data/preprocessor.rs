// ============================================================
// Layer 4 — Sample Preprocessor
// ============================================================
// Turns typed AbaloneRecords into numeric EncodedSamples.
//
//   prepare_data → memory pipeline; label scaled by `ratio`
//   prepare_raw  → dataflow pipeline; label left as-is
//
// The default ratio 29 is the largest ring count in the
// dataset, so the scaled label sits inside (0, 1] and the
// sigmoid output layer can reach it.

use anyhow::{ensure, Result};

use crate::domain::record::AbaloneRecord;
use crate::domain::sample::EncodedSample;

/// Default divisor applied to the ring count
pub const DEFAULT_RATIO: f32 = 29.0;

/// Encode every record with its label divided by `ratio`.
/// Order and count are preserved.
pub fn prepare_data(records: &[AbaloneRecord], ratio: f32) -> Result<Vec<EncodedSample>> {
    ensure!(
        ratio.is_finite() && ratio > 0.0,
        "normalisation ratio must be a positive number, got {ratio}"
    );

    Ok(records
        .iter()
        .map(|r| EncodedSample::new(r.features().to_vec(), vec![r.rings as f32 / ratio]))
        .collect())
}

/// Encode every record with the raw ring count as the label.
pub fn prepare_raw(records: &[AbaloneRecord]) -> Vec<EncodedSample> {
    records
        .iter()
        .map(|r| EncodedSample::new(r.features().to_vec(), vec![r.rings as f32]))
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Sex;

    fn record(sex: Sex, length: f32, rings: u32) -> AbaloneRecord {
        AbaloneRecord {
            sex,
            length,
            diameter:       0.42,
            height:         0.135,
            whole_weight:   0.677,
            shucked_weight: 0.2565,
            viscera_weight: 0.1415,
            shell_weight:   0.21,
            rings,
        }
    }

    #[test]
    fn test_output_is_label_over_ratio() {
        let records = vec![record(Sex::Female, 0.5, 10)];
        for ratio in [1.0f32, 29.0, 3.5] {
            let samples = prepare_data(&records, ratio).unwrap();
            assert_eq!(samples[0].output, vec![10.0 / ratio]);
        }
    }

    #[test]
    fn test_input_has_one_value_per_feature() {
        let samples = prepare_data(&[record(Sex::Male, 0.5, 7)], DEFAULT_RATIO).unwrap();
        assert_eq!(samples[0].input_size(), AbaloneRecord::FEATURE_COUNT);
        assert_eq!(samples[0].output_size(), 1);
    }

    #[test]
    fn test_only_sex_is_replaced() {
        let r = record(Sex::Infant, 0.33, 7);
        let samples = prepare_data(std::slice::from_ref(&r), DEFAULT_RATIO).unwrap();
        let input = &samples[0].input;

        assert_eq!(input[0], 0.5);
        assert_eq!(
            &input[1..],
            &[r.length, r.diameter, r.height, r.whole_weight,
              r.shucked_weight, r.viscera_weight, r.shell_weight]
        );
    }

    #[test]
    fn test_order_and_count_preserved() {
        let records: Vec<AbaloneRecord> = (1..=5)
            .map(|i| record(Sex::Male, i as f32 / 10.0, i))
            .collect();
        let samples = prepare_data(&records, DEFAULT_RATIO).unwrap();

        assert_eq!(samples.len(), 5);
        for (i, s) in samples.iter().enumerate() {
            assert_eq!(s.input[1], (i + 1) as f32 / 10.0);
        }
    }

    #[test]
    fn test_non_positive_ratio_rejected() {
        let records = vec![record(Sex::Female, 0.5, 10)];
        assert!(prepare_data(&records, 0.0).is_err());
        assert!(prepare_data(&records, -1.0).is_err());
        assert!(prepare_data(&records, f32::NAN).is_err());
    }

    #[test]
    fn test_raw_keeps_ring_count() {
        let samples = prepare_raw(&[record(Sex::Female, 0.5, 12)]);
        assert_eq!(samples[0].output, vec![12.0]);
        assert_eq!(samples[0].input[0], 0.0);
    }
}
