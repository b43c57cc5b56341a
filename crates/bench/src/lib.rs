use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 800;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Input shapes used across the sorting benchmarks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pattern {
    RandomUniform,
    Ascending,
    Descending,
    NearlySorted1pctSwaps,
    FewUnique,
}

pub const ALL_PATTERNS: [Pattern; 5] = [
    Pattern::RandomUniform,
    Pattern::Ascending,
    Pattern::Descending,
    Pattern::NearlySorted1pctSwaps,
    Pattern::FewUnique,
];

impl Pattern {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::FewUnique => "few_unique",
        }
    }
}

pub fn generate<R: Rng>(rng: &mut R, pattern: Pattern, size: usize) -> Vec<u64> {
    match pattern {
        Pattern::RandomUniform => (0..size).map(|_| rng.random()).collect(),
        Pattern::Ascending => (0..size as u64).collect(),
        Pattern::Descending => (0..size as u64).rev().collect(),
        Pattern::NearlySorted1pctSwaps => {
            let mut data: Vec<u64> = (0..size as u64).collect();
            if size > 1 {
                let swaps = (size / 100).max(1);
                for _ in 0..swaps {
                    let a = rng.random_range(0..size);
                    let b = rng.random_range(0..size);
                    data.swap(a, b);
                }
            }
            data
        }
        Pattern::FewUnique => (0..size).map(|_| rng.random_range(0..8)).collect(),
    }
}

/// Stable per-case seed so every algorithm sees the same input for a case.
#[inline]
pub fn seed_for(pattern: Pattern, size: usize) -> u64 {
    let p = ALL_PATTERNS
        .iter()
        .position(|&x| x == pattern)
        .unwrap_or_default() as u64;
    mix_seed(RNG_SEED ^ (p << 48) ^ size as u64)
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_have_requested_len() {
        let mut rng = default_rng();
        for &pattern in &ALL_PATTERNS {
            for size in [0_usize, 1, 2, 100] {
                assert_eq!(generate(&mut rng, pattern, size).len(), size, "{}", pattern.label());
            }
        }
    }

    #[test]
    fn seeds_differ_per_case() {
        assert_ne!(
            seed_for(Pattern::Ascending, 1024),
            seed_for(Pattern::Descending, 1024)
        );
        assert_ne!(
            seed_for(Pattern::FewUnique, 1024),
            seed_for(Pattern::FewUnique, 2048)
        );
    }
}
