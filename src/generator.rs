//! Record generator: creates new records and fills unset fields.

use crate::config::Configuration;
use crate::error::GenerateError;
use crate::generators::{check_field, generate_field};
use crate::presence::has_value;
use crate::record::{FieldDescriptor, Record};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::any::type_name;

/// Generator that produces and completes records.
///
/// Each generator owns its own random source, seeded from the configuration
/// or, when no seed is configured, from the thread RNG. The seed in use is
/// logged at debug level so a failing test can be replayed with
/// `configure().seed(..)`.
#[derive(Debug)]
pub struct Generator {
    /// Options every field is generated under
    config: Configuration,
    /// Seed the RNG was created from
    seed: u64,
    /// Random source
    rng: StdRng,
}

impl Generator {
    /// Create a new generator, validating the configuration.
    pub fn new(config: Configuration) -> Result<Self, GenerateError> {
        config.validate()?;

        let seed = config.seed().unwrap_or_else(|| rand::rng().random());
        tracing::debug!("Creating generator with seed {}", seed);

        Ok(Self {
            config,
            seed,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Get the seed the random source was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Construct a default `T` and fill every field.
    pub fn create_new<T: Record>(&mut self) -> Result<T, GenerateError> {
        let instance = T::construct()?;
        self.fill(instance)
    }

    /// Fill the unset fields of `instance` and hand it back.
    ///
    /// The instance is consumed; use [`Generator::fill_in_place`] to keep it
    /// when generation fails.
    pub fn fill<T: Record>(&mut self, mut instance: T) -> Result<T, GenerateError> {
        self.fill_in_place(&mut instance)?;
        Ok(instance)
    }

    /// Fill the unset fields of `instance`, returning how many were written.
    ///
    /// Fields that already hold a value, and fields of unsupported kinds,
    /// are left exactly as they were. Every pending field is checked against
    /// the configuration before the first write, so on `Err` the instance is
    /// unchanged.
    pub fn fill_in_place<T: Record>(&mut self, instance: &mut T) -> Result<usize, GenerateError> {
        let pending: Vec<FieldDescriptor> = T::descriptors()
            .into_iter()
            .filter(|descriptor| {
                if !descriptor.kind.is_supported() {
                    tracing::debug!(
                        "Skipping {}.{} of unsupported type {:?}",
                        type_name::<T>(),
                        descriptor.name,
                        descriptor.kind
                    );
                    return false;
                }
                !has_value(&*instance, descriptor)
            })
            .collect();

        for descriptor in &pending {
            check_field(descriptor.kind, &self.config)?;
        }

        let mut written = 0;
        for descriptor in pending {
            let Some(slot) = instance.field_mut(descriptor.name) else {
                continue;
            };

            if generate_field(slot, descriptor.name, &self.config, &mut self.rng)? {
                tracing::trace!("Generated {}.{}", type_name::<T>(), descriptor.name);
                written += 1;
            }
        }

        tracing::debug!("Filled {} field(s) on {}", written, type_name::<T>());
        Ok(written)
    }

    /// Create `default_list_count` records.
    pub fn create_list<T: Record>(&mut self) -> Result<Vec<T>, GenerateError> {
        self.create_list_of(self.config.default_list_count())
    }

    /// Create exactly `count` records, in generation order.
    pub fn create_list_of<T: Record>(&mut self, count: usize) -> Result<Vec<T>, GenerateError> {
        (0..count).map(|_| self.create_new()).collect()
    }
}
