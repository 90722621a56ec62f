//! Demo value generation for the bars being sorted.

use rand::prelude::*;

use super::ArrayConfig;

/// Value type of the sequence being sorted (rendered as bar heights).
pub type Value = i64;

/// Generate a fresh random array from configuration.
///
/// Values are drawn uniformly from `[min_value, max_value]`. With a seed the
/// result is deterministic. The range must not be inverted; see
/// [`VisualizerConfig::validate`](super::VisualizerConfig::validate).
pub fn generate_values(config: &ArrayConfig) -> Vec<Value> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_values_with(&mut rng, config)
}

/// Generate values using a caller-provided RNG.
pub fn generate_values_with<R: Rng + ?Sized>(rng: &mut R, config: &ArrayConfig) -> Vec<Value> {
    (0..config.size)
        .map(|_| rng.gen_range(config.min_value..=config.max_value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_within_range() {
        let config = ArrayConfig {
            size: 200,
            min_value: 5,
            max_value: 500,
            seed: Some(1),
        };
        let values = generate_values(&config);
        assert_eq!(values.len(), 200);
        assert!(values.iter().all(|v| (5..=500).contains(v)));
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let config = ArrayConfig {
            seed: Some(42),
            ..Default::default()
        };
        assert_eq!(generate_values(&config), generate_values(&config));
    }

    #[test]
    fn test_single_value_range() {
        let config = ArrayConfig {
            size: 4,
            min_value: 9,
            max_value: 9,
            seed: None,
        };
        assert_eq!(generate_values(&config), vec![9, 9, 9, 9]);
    }
}
