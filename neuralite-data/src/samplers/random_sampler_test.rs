// neuralite-data/src/samplers/random_sampler_test.rs

use super::*;
use std::collections::HashSet;

#[test]
fn test_random_sampler_len() {
    assert_eq!(RandomSampler::new(false, None).len(10), 10);
    assert_eq!(RandomSampler::new(false, Some(5)).len(10), 5);
    assert_eq!(RandomSampler::new(true, Some(15)).len(10), 15);
    assert_eq!(RandomSampler::new(false, Some(15)).len(10), 0);
    assert_eq!(RandomSampler::new(true, None).len(0), 0);
}

#[test]
fn test_no_replacement_is_a_permutation_prefix() {
    let indices: Vec<usize> = RandomSampler::new(false, Some(5)).iter(10).collect();
    assert_eq!(indices.len(), 5);
    let unique: HashSet<usize> = indices.iter().copied().collect();
    assert_eq!(unique.len(), 5);
    assert!(indices.iter().all(|&i| i < 10));

    let full: HashSet<usize> = RandomSampler::new(false, None).iter(7).collect();
    assert_eq!(full, (0..7).collect());
}

#[test]
fn test_no_replacement_more_than_dataset_returns_empty() {
    let sampler = RandomSampler::new(false, Some(10));
    assert_eq!(sampler.iter(5).count(), 0);
}

#[test]
fn test_with_replacement_stays_in_range() {
    let indices: Vec<usize> = RandomSampler::new(true, Some(50)).iter(3).collect();
    assert_eq!(indices.len(), 50);
    assert!(indices.iter().all(|&i| i < 3));
}

#[test]
fn test_empty_dataset() {
    for sampler in [
        RandomSampler::new(false, None),
        RandomSampler::new(true, None),
        RandomSampler::new(false, Some(5)),
        RandomSampler::new(true, Some(5)),
    ] {
        assert_eq!(sampler.iter(0).count(), 0);
    }
}

#[test]
fn test_seeded_sampler_is_reproducible() {
    let a: Vec<usize> = RandomSampler::seeded(42).iter(20).collect();
    let b: Vec<usize> = RandomSampler::seeded(42).iter(20).collect();
    assert_eq!(a, b);

    let sampler = RandomSampler::seeded(42);
    let first: Vec<usize> = sampler.iter(20).collect();
    let second: Vec<usize> = sampler.iter(20).collect();
    assert_eq!(first, second);

    let other: Vec<usize> = RandomSampler::seeded(43).iter(20).collect();
    assert_ne!(a, other);

    let with_replacement = RandomSampler::new(true, Some(8)).with_seed(1);
    assert_eq!(
        with_replacement.iter(4).collect::<Vec<_>>(),
        with_replacement.iter(4).collect::<Vec<_>>()
    );
}
