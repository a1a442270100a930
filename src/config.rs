//! Generation options and the fluent builder that assembles them.
//!
//! A [`Configuration`] is built once per call chain and never mutated after
//! it has been handed to a generator:
//!
//! ```rust
//! use angie::configure;
//!
//! let config = configure().min_int(18).max_int(80).build().unwrap();
//! assert_eq!(config.min_int(), Some(18));
//! assert_eq!(config.max_int(), Some(80));
//! ```
//!
//! Options can also be loaded from YAML:
//!
//! ```yaml
//! int_range:
//!   low: 20
//!   high: 22
//! date_range:
//!   start: 2020-01-01T00:00:00Z
//!   end: 2024-12-31T23:59:59Z
//! default_list_count: 10
//! seed: 42
//! ```

use crate::error::GenerateError;
use crate::generator::Generator;
use crate::record::Record;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Number of records produced by `create_list` when no count is given.
pub const DEFAULT_LIST_COUNT: usize = 25;

/// Inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    /// Lowest value that may be generated
    pub low: i64,
    /// Highest value that may be generated
    pub high: i64,
}

/// Inclusive window for generated timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Earliest instant (RFC 3339 in YAML)
    pub start: DateTime<Utc>,
    /// Latest instant (RFC 3339 in YAML)
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Window used when no date range is configured.
    pub fn fallback() -> Self {
        // Both instants are valid calendar dates, so `single()` always resolves.
        let start = Utc
            .with_ymd_and_hms(2000, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or_default();
        let end = Utc
            .with_ymd_and_hms(2029, 12, 31, 23, 59, 59)
            .single()
            .unwrap_or_default();
        Self { start, end }
    }
}

/// Generation options.
///
/// Fields are private: a configuration is only produced by
/// [`ConfigurationBuilder::build`], [`Configuration::from_yaml`] or
/// [`Default`], and stays unchanged afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    min_int: Option<i64>,
    max_int: Option<i64>,
    int_range: Option<IntRange>,
    date_range: Option<DateRange>,
    default_list_count: usize,
    seed: Option<u64>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            min_int: None,
            max_int: None,
            int_range: None,
            date_range: None,
            default_list_count: DEFAULT_LIST_COUNT,
            seed: None,
        }
    }
}

impl Configuration {
    /// Parse and validate a configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, GenerateError> {
        let config: Configuration = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GenerateError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Lower integer bound set with `min_int`.
    pub fn min_int(&self) -> Option<i64> {
        self.min_int
    }

    /// Upper integer bound set with `max_int`.
    pub fn max_int(&self) -> Option<i64> {
        self.max_int
    }

    /// Integer range set with `int_range`.
    pub fn int_range(&self) -> Option<IntRange> {
        self.int_range
    }

    /// Timestamp window, falling back to [`DateRange::fallback`].
    pub fn date_range(&self) -> DateRange {
        self.date_range.unwrap_or_else(DateRange::fallback)
    }

    /// Number of records `create_list` produces.
    pub fn default_list_count(&self) -> usize {
        self.default_list_count
    }

    /// Fixed RNG seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Check the options for contradictions.
    ///
    /// Windows that are only empty for a particular field width (for example
    /// `min_int` above `i32::MAX`) are reported later, when such a field is
    /// generated.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.default_list_count == 0 {
            return Err(GenerateError::invalid(
                "default_list_count must be greater than zero",
            ));
        }

        if let Some(range) = self.int_range {
            if self.min_int.is_some() || self.max_int.is_some() {
                return Err(GenerateError::invalid(
                    "int_range cannot be combined with min_int or max_int",
                ));
            }
            if range.low > range.high {
                return Err(GenerateError::invalid(format!(
                    "int_range low {} is greater than high {}",
                    range.low, range.high
                )));
            }
        }

        if let (Some(min), Some(max)) = (self.min_int, self.max_int) {
            if min > max {
                return Err(GenerateError::invalid(format!(
                    "min_int {min} is greater than max_int {max}"
                )));
            }
        }

        if let Some(range) = self.date_range {
            if range.start > range.end {
                return Err(GenerateError::invalid(format!(
                    "date_range start {} is after end {}",
                    range.start, range.end
                )));
            }
        }

        Ok(())
    }
}

/// Fluent, consuming builder for [`Configuration`].
///
/// Every method takes the builder by value and returns it, so two chains
/// never share state. Between `int_range` and `min_int`/`max_int` the last
/// call wins; `min_int` and `max_int` combine with each other.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ConfigurationBuilder {
    config: Configuration,
}

impl ConfigurationBuilder {
    /// Start from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Upper bound for generated integers.
    pub fn max_int(mut self, max: i64) -> Self {
        self.config.int_range = None;
        self.config.max_int = Some(max);
        self
    }

    /// Lower bound for generated integers.
    pub fn min_int(mut self, min: i64) -> Self {
        self.config.int_range = None;
        self.config.min_int = Some(min);
        self
    }

    /// Inclusive range for generated integers.
    pub fn int_range(mut self, low: i64, high: i64) -> Self {
        self.config.min_int = None;
        self.config.max_int = None;
        self.config.int_range = Some(IntRange { low, high });
        self
    }

    /// Inclusive window for generated timestamps.
    pub fn date_range(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.config.date_range = Some(DateRange { start, end });
        self
    }

    /// Number of records `create_list` produces.
    pub fn list_count(mut self, count: usize) -> Self {
        self.config.default_list_count = count;
        self
    }

    /// Seed the random source for reproducible output.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Validate and return the finished configuration.
    pub fn build(self) -> Result<Configuration, GenerateError> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build, then create a new record.
    pub fn create_new<T: Record>(self) -> Result<T, GenerateError> {
        Generator::new(self.build()?)?.create_new()
    }

    /// Build, then fill the unset fields of `instance`.
    pub fn fill<T: Record>(self, instance: T) -> Result<T, GenerateError> {
        Generator::new(self.build()?)?.fill(instance)
    }

    /// Build, then create `default_list_count` records.
    pub fn create_list<T: Record>(self) -> Result<Vec<T>, GenerateError> {
        Generator::new(self.build()?)?.create_list()
    }

    /// Build, then create exactly `count` records.
    pub fn create_list_of<T: Record>(self, count: usize) -> Result<Vec<T>, GenerateError> {
        Generator::new(self.build()?)?.create_list_of(count)
    }
}

impl From<Configuration> for ConfigurationBuilder {
    fn from(config: Configuration) -> Self {
        Self { config }
    }
}
