//! Integer generator honoring the configured bounds.

use crate::config::Configuration;
use crate::error::GenerateError;
use rand::Rng;

/// Inclusive window an integer field is sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntWindow {
    pub low: i64,
    pub high: i64,
}

/// Resolve the active integer policy for a field of width `[type_min, type_max]`.
///
/// - `int_range` → `[low, high]`
/// - `min_int` and `max_int` → `[min, max]`
/// - `min_int` only → `[min, type_max]`
/// - `max_int` only → `[0, max]`
/// - nothing → `[1, type_max]`, so the unset value `0` is never produced
///
/// The result is clamped to the field width; an empty window is an error.
pub fn resolve_int_window(
    config: &Configuration,
    type_min: i64,
    type_max: i64,
) -> Result<IntWindow, GenerateError> {
    let (low, high) = match (config.int_range(), config.min_int(), config.max_int()) {
        (Some(range), _, _) => (range.low, range.high),
        (None, Some(min), Some(max)) => (min, max),
        (None, Some(min), None) => (min, type_max),
        (None, None, Some(max)) => (0, max),
        (None, None, None) => (1, type_max),
    };

    let window = IntWindow {
        low: low.max(type_min),
        high: high.min(type_max),
    };

    if window.low > window.high {
        return Err(GenerateError::invalid(format!(
            "integer window [{low}, {high}] is empty for a field of range [{type_min}, {type_max}]"
        )));
    }

    Ok(window)
}

/// Generate a random integer in the given window (inclusive).
pub fn generate_int_window<R: Rng>(rng: &mut R, window: IntWindow) -> i64 {
    rng.random_range(window.low..=window.high)
}

/// Generate a value for an `i32` field.
pub fn generate_i32<R: Rng>(rng: &mut R, config: &Configuration) -> Result<i32, GenerateError> {
    let window = resolve_int_window(config, i32::MIN.into(), i32::MAX.into())?;
    let value = generate_int_window(rng, window);
    i32::try_from(value)
        .map_err(|_| GenerateError::invalid(format!("{value} does not fit in an i32 field")))
}

/// Generate a value for an `i64` field.
pub fn generate_i64<R: Rng>(rng: &mut R, config: &Configuration) -> Result<i64, GenerateError> {
    let window = resolve_int_window(config, i64::MIN, i64::MAX)?;
    Ok(generate_int_window(rng, window))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigurationBuilder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const I32_MIN: i64 = i32::MIN as i64;
    const I32_MAX: i64 = i32::MAX as i64;

    fn window(config: &Configuration) -> Result<IntWindow, GenerateError> {
        resolve_int_window(config, I32_MIN, I32_MAX)
    }

    #[test]
    fn test_unconfigured_window_excludes_zero() {
        let config = Configuration::default();
        assert_eq!(
            window(&config).unwrap(),
            IntWindow {
                low: 1,
                high: I32_MAX
            }
        );
    }

    #[test]
    fn test_max_only_window_starts_at_zero() {
        let config = ConfigurationBuilder::new().max_int(5).build().unwrap();
        assert_eq!(window(&config).unwrap(), IntWindow { low: 0, high: 5 });
    }

    #[test]
    fn test_min_only_window_runs_to_type_max() {
        let config = ConfigurationBuilder::new().min_int(5).build().unwrap();
        assert_eq!(
            window(&config).unwrap(),
            IntWindow {
                low: 5,
                high: I32_MAX
            }
        );
    }

    #[test]
    fn test_min_and_max_window() {
        let config = ConfigurationBuilder::new()
            .max_int(9)
            .min_int(-4)
            .build()
            .unwrap();
        assert_eq!(window(&config).unwrap(), IntWindow { low: -4, high: 9 });
    }

    #[test]
    fn test_range_is_clamped_to_width() {
        let config = ConfigurationBuilder::new()
            .int_range(i64::MIN, i64::MAX)
            .build()
            .unwrap();
        assert_eq!(
            window(&config).unwrap(),
            IntWindow {
                low: I32_MIN,
                high: I32_MAX
            }
        );
    }

    #[test]
    fn test_negative_max_only_is_empty() {
        let config = ConfigurationBuilder::new().max_int(-1).build().unwrap();
        assert!(matches!(
            window(&config),
            Err(GenerateError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_min_beyond_width_is_empty() {
        let config = ConfigurationBuilder::new()
            .min_int(I32_MAX + 1)
            .build()
            .unwrap();
        assert!(window(&config).is_err());
        // The same bound is fine for a 64-bit field.
        assert!(resolve_int_window(&config, i64::MIN, i64::MAX).is_ok());
    }

    #[test]
    fn test_generate_i32_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = ConfigurationBuilder::new().int_range(20, 22).build().unwrap();

        for _ in 0..1000 {
            let value = generate_i32(&mut rng, &config).unwrap();
            assert!((20..=22).contains(&value));
        }
    }

    #[test]
    fn test_generate_i32_hits_both_endpoints() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = ConfigurationBuilder::new().int_range(20, 22).build().unwrap();

        let values: Vec<i32> = (0..200)
            .map(|_| generate_i32(&mut rng, &config).unwrap())
            .collect();
        assert!(values.contains(&20));
        assert!(values.contains(&22));
    }

    #[test]
    fn test_generate_i64_default_is_positive() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = Configuration::default();

        for _ in 0..1000 {
            assert!(generate_i64(&mut rng, &config).unwrap() > 0);
        }
    }
}
