use burn::data::dataset::Dataset;

use crate::domain::sample::EncodedSample;

/// In-memory Burn dataset over encoded samples.
pub struct SampleDataset {
    samples: Vec<EncodedSample>,
}

impl SampleDataset {
    pub fn new(samples: Vec<EncodedSample>) -> Self { Self { samples } }
}

impl From<&[EncodedSample]> for SampleDataset {
    fn from(samples: &[EncodedSample]) -> Self {
        Self::new(samples.to_vec())
    }
}

impl Dataset<EncodedSample> for SampleDataset {
    fn get(&self, index: usize) -> Option<EncodedSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_len() {
        let ds = SampleDataset::new(vec![
            EncodedSample::new(vec![0.0, 1.0], vec![0.5]),
            EncodedSample::new(vec![1.0, 0.0], vec![0.25]),
        ]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.get(1).unwrap().output, vec![0.25]);
        assert!(ds.get(2).is_none());
    }
}
