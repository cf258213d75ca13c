// Run configuration bounds and random dataset generation

use rand::Rng;

use crate::algorithms::AlgorithmId;

pub const MIN_SIZE: usize = 5;
pub const MAX_SIZE: usize = 50;
pub const DEFAULT_SIZE: usize = 16;

pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 100;
pub const DEFAULT_SPEED: u8 = 50;

pub const VALUE_MIN: i32 = 5;
pub const VALUE_MAX: i32 = 99;

/// Input values plus the search target, when the algorithm needs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub values: Vec<i32>,
    pub target: Option<i32>,
}

pub fn clamp_size(requested: usize) -> usize {
    requested.clamp(MIN_SIZE, MAX_SIZE)
}

pub fn clamp_speed(requested: u8) -> u8 {
    requested.clamp(MIN_SPEED, MAX_SPEED)
}

/// Draw a fresh dataset for `algorithm` from `rng`.
///
/// Binary and jump search get pre-sorted values. Search targets flip a fair
/// coin between a value present in the array and one guaranteed absent, so
/// both run shapes show up during normal use. `None` stands for an
/// unrecognized algorithm and gets a plain unsorted array with no target.
pub fn generate<R: Rng>(rng: &mut R, algorithm: Option<AlgorithmId>, size: usize) -> Dataset {
    let size = clamp_size(size);
    let mut values: Vec<i32> = (0..size)
        .map(|_| rng.random_range(VALUE_MIN..=VALUE_MAX))
        .collect();
    if algorithm.is_some_and(AlgorithmId::needs_sorted_input) {
        values.sort_unstable();
    }
    let target = algorithm
        .is_some_and(AlgorithmId::needs_target)
        .then(|| choose_target(rng, &values));
    Dataset { values, target }
}

fn choose_target<R: Rng>(rng: &mut R, values: &[i32]) -> i32 {
    if values.is_empty() {
        return 0;
    }
    if rng.random_bool(0.5) {
        values[rng.random_range(0..values.len())]
    } else {
        values.iter().copied().max().unwrap_or(VALUE_MAX) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_clamping() {
        assert_eq!(clamp_size(0), MIN_SIZE);
        assert_eq!(clamp_size(1000), MAX_SIZE);
        assert_eq!(clamp_size(16), 16);
        assert_eq!(clamp_speed(0), MIN_SPEED);
        assert_eq!(clamp_speed(255), MAX_SPEED);
    }

    #[test]
    fn test_sorted_search_dataset() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..20 {
            let dataset = generate(&mut rng, Some(AlgorithmId::BinarySearch), 30);
            assert!(dataset.values.windows(2).all(|w| w[0] <= w[1]));
            assert!(dataset.target.is_some());
        }
    }

    #[test]
    fn test_value_range() {
        let mut rng = Pcg32::seed_from_u64(11);
        let dataset = generate(&mut rng, Some(AlgorithmId::BubbleSort), 50);
        assert_eq!(dataset.values.len(), 50);
        assert!(dataset
            .values
            .iter()
            .all(|&v| (VALUE_MIN..=VALUE_MAX).contains(&v)));
        assert!(dataset.target.is_none());
    }

    #[test]
    fn test_absent_target_rule() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..50 {
            let dataset = generate(&mut rng, Some(AlgorithmId::LinearSearch), 10);
            let target = dataset.target.expect("searches always get a target");
            if !dataset.values.contains(&target) {
                let max = dataset.values.iter().copied().max().expect("non-empty");
                assert_eq!(target, max + 1);
            }
        }
    }
}
