// ============================================================
// Layer 4 — Shuffling and Train/Test Splitting
// ============================================================
// Every random decision goes through an explicit, seeded RNG so
// a run can be replayed exactly by passing the same --seed.
//
//   shuffle           → full Fisher-Yates permutation
//   shuffle_buffered  → windowed shuffle over a bounded buffer
//   split             → first floor(n * ratio) items are train
//   split_batches     → train set rounded down to whole batches
//
// None of these functions drop or duplicate items: the train and
// test halves always partition the input.

use anyhow::{ensure, Result};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// Return `seed` if given, otherwise draw a fresh one.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::thread_rng().gen())
}

/// Deterministic RNG for a given seed.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Shuffle `samples` in place with an unbiased Fisher-Yates pass.
pub fn shuffle<T, R: Rng + ?Sized>(samples: &mut [T], rng: &mut R) {
    samples.shuffle(rng);
}

/// Shuffle through a bounded buffer of `buffer_size` items.
///
/// The buffer is filled from the front of the input. Each further
/// item evicts a randomly chosen buffered item to the output and
/// takes its slot. When the input runs out, the buffer is drained
/// in random order. With `buffer_size >= len` this is a full shuffle.
pub fn shuffle_buffered<T, R: Rng + ?Sized>(
    samples:     Vec<T>,
    buffer_size: usize,
    rng:         &mut R,
) -> Result<Vec<T>> {
    ensure!(buffer_size > 0, "shuffle buffer size must be at least 1");

    let mut out    = Vec::with_capacity(samples.len());
    let mut buffer = Vec::with_capacity(buffer_size.min(samples.len()));

    for item in samples {
        if buffer.len() < buffer_size {
            buffer.push(item);
            continue;
        }
        let slot = rng.gen_range(0..buffer.len());
        out.push(std::mem::replace(&mut buffer[slot], item));
    }

    while !buffer.is_empty() {
        let slot = rng.gen_range(0..buffer.len());
        out.push(buffer.swap_remove(slot));
    }

    Ok(out)
}

/// Split into (train, test): the first `floor(n * train_ratio)` items
/// are train, the rest test. `train_ratio` must lie in [0, 1].
pub fn split<T>(mut samples: Vec<T>, train_ratio: f64) -> Result<(Vec<T>, Vec<T>)> {
    ensure!(
        (0.0..=1.0).contains(&train_ratio),
        "train ratio must be within [0, 1], got {train_ratio}"
    );

    let total    = samples.len();
    let split_at = train_len(total, train_ratio);
    let test     = samples.split_off(split_at);

    tracing::debug!("Dataset split: {} train, {} test", samples.len(), test.len());
    Ok((samples, test))
}

/// Split into (train, validation) on batch boundaries.
///
/// The nominal train length `floor(n * train_ratio)` is rounded down
/// to a whole number of `batch_size` batches; everything after those
/// batches becomes validation.
pub fn split_batches<T>(
    mut samples: Vec<T>,
    train_ratio: f64,
    batch_size:  usize,
) -> Result<(Vec<T>, Vec<T>)> {
    ensure!(batch_size > 0, "batch size must be at least 1");
    ensure!(
        (0.0..=1.0).contains(&train_ratio),
        "train ratio must be within [0, 1], got {train_ratio}"
    );

    let train_batches = train_len(samples.len(), train_ratio) / batch_size;
    let validation    = samples.split_off(train_batches * batch_size);

    tracing::debug!(
        "Batch split: {} train batches ({} samples), {} validation samples",
        train_batches,
        samples.len(),
        validation.len(),
    );
    Ok((samples, validation))
}

fn train_len(total: usize, train_ratio: f64) -> usize {
    ((total as f64 * train_ratio).floor() as usize).min(total)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut v: Vec<usize>) -> Vec<usize> {
        v.sort_unstable();
        v
    }

    #[test]
    fn test_split_sizes_follow_floor() {
        for (n, r) in [(100usize, 0.75f64), (10, 0.75), (7, 0.5), (3, 0.9), (1, 0.75)] {
            let items: Vec<usize> = (0..n).collect();
            let (train, test)     = split(items, r).unwrap();
            assert_eq!(train.len(), (n as f64 * r).floor() as usize);
            assert_eq!(train.len() + test.len(), n);
        }
    }

    #[test]
    fn test_split_edges() {
        let (train, test) = split((0..10).collect::<Vec<usize>>(), 1.0).unwrap();
        assert_eq!((train.len(), test.len()), (10, 0));

        let (train, test) = split((0..10).collect::<Vec<usize>>(), 0.0).unwrap();
        assert_eq!((train.len(), test.len()), (0, 10));

        let (train, test) = split(Vec::<usize>::new(), 0.75).unwrap();
        assert!(train.is_empty() && test.is_empty());
    }

    #[test]
    fn test_split_rejects_bad_ratio() {
        assert!(split(vec![1, 2, 3], 1.5).is_err());
        assert!(split(vec![1, 2, 3], -0.1).is_err());
    }

    #[test]
    fn test_shuffle_then_split_partitions_input() {
        let items: Vec<usize> = (0..50).collect();
        let mut shuffled      = items.clone();
        shuffle(&mut shuffled, &mut seeded_rng(7));

        let (train, test) = split(shuffled, 0.7).unwrap();
        let mut union     = train;
        union.extend(test);
        assert_eq!(sorted(union), items);
    }

    #[test]
    fn test_same_seed_same_permutation() {
        let mut a: Vec<usize> = (0..100).collect();
        let mut b             = a.clone();
        shuffle(&mut a, &mut seeded_rng(42));
        shuffle(&mut b, &mut seeded_rng(42));
        assert_eq!(a, b);

        let mut c: Vec<usize> = (0..100).collect();
        shuffle(&mut c, &mut seeded_rng(43));
        assert_ne!(a, c);
    }

    #[test]
    fn test_buffered_shuffle_preserves_items() {
        let items: Vec<usize> = (0..257).collect();
        for buffer in [1usize, 10, 100, 1000] {
            let out = shuffle_buffered(items.clone(), buffer, &mut seeded_rng(3)).unwrap();
            assert_eq!(out.len(), items.len());
            assert_eq!(sorted(out), items);
        }
    }

    #[test]
    fn test_buffer_of_one_keeps_order() {
        let items: Vec<usize> = (0..20).collect();
        let out = shuffle_buffered(items.clone(), 1, &mut seeded_rng(9)).unwrap();
        assert_eq!(out, items);
    }

    #[test]
    fn test_buffered_shuffle_rejects_zero_buffer() {
        assert!(shuffle_buffered(vec![1, 2], 0, &mut seeded_rng(1)).is_err());
    }

    #[test]
    fn test_split_batches_rounds_down_to_whole_batches() {
        // floor(4177 * 0.75) = 3132 → 31 batches of 100 → 3100 train
        let items: Vec<usize> = (0..4177).collect();
        let (train, val)      = split_batches(items, 0.75, 100).unwrap();
        assert_eq!(train.len(), 3100);
        assert_eq!(val.len(), 1077);
    }

    #[test]
    fn test_split_batches_small_dataset_has_no_train_batches() {
        let items: Vec<usize> = (0..50).collect();
        let (train, val)      = split_batches(items, 0.75, 100).unwrap();
        assert!(train.is_empty());
        assert_eq!(val.len(), 50);
    }

    #[test]
    fn test_four_row_scenario() {
        let (train, test) = split(vec!['a', 'b', 'c', 'd'], 0.75).unwrap();
        assert_eq!(train, vec!['a', 'b', 'c']);
        assert_eq!(test, vec!['d']);
    }
}
