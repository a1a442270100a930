//! Angie
//!
//! Fills test records with plausible non-default values so fixtures do not
//! have to be written out by hand.
//!
//! # Architecture
//!
//! ```text
//! configure() ──► ConfigurationBuilder ──► Configuration
//!                                               │
//!                                               ▼
//!                     ┌──────────────────────────────────┐
//!  Record ──────────► │            Generator             │
//!  (derive or impl)   │                                  │
//!                     │  for each field descriptor:      │
//!                     │    has_value? ── yes ──► keep    │
//!                     │        │                         │
//!                     │        no                        │
//!                     │        ▼                         │
//!                     │   generators::generate_field     │
//!                     └──────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use angie::Record;
//!
//! #[derive(Debug, Default, Record)]
//! struct Person {
//!     first_name: String,
//!     last_name: String,
//!     age: i32,
//! }
//!
//! let person: Person = angie::create_new().unwrap();
//! assert!(!person.first_name.is_empty());
//! assert!(person.age > 0);
//!
//! let kid: Person = angie::configure().int_range(5, 12).create_new().unwrap();
//! assert!((5..=12).contains(&kid.age));
//!
//! let existing = Person { first_name: "Angie".into(), ..Default::default() };
//! let filled = angie::fill(existing).unwrap();
//! assert_eq!(filled.first_name, "Angie");
//!
//! let people: Vec<Person> = angie::create_list().unwrap();
//! assert_eq!(people.len(), angie::DEFAULT_LIST_COUNT);
//! ```
//!
//! # Supported field types
//!
//! - `i32`, `i64` - random integers, never `0` unless configured
//! - `String`, `Option<String>` - text chosen from the field name
//!   (`first_name`, `email`, `title`, ...)
//! - `chrono::DateTime<Utc>` - timestamps inside the configured window
//! - `uuid::Uuid` - random v4 UUIDs
//!
//! Any other field type is left untouched.

// Lets `#[derive(Record)]` expand to `::angie::...` paths inside this crate.
extern crate self as angie;

pub mod config;
pub mod error;
pub mod generator;
pub mod generators;
pub mod presence;
pub mod record;

pub use config::{Configuration, ConfigurationBuilder, DateRange, IntRange, DEFAULT_LIST_COUNT};
pub use error::GenerateError;
pub use generator::Generator;
pub use record::{FieldDescriptor, FieldKind, FieldMut, FieldRef, Record};

#[cfg(feature = "derive")]
pub use angie_derive::Record;

/// Start a configuration chain, e.g. `configure().max_int(5).create_new::<T>()`.
pub fn configure() -> ConfigurationBuilder {
    ConfigurationBuilder::new()
}

/// Create a new `T` with every supported field populated.
pub fn create_new<T: Record>() -> Result<T, GenerateError> {
    Generator::new(Configuration::default())?.create_new()
}

/// Populate the unset fields of `instance`, keeping the ones already set.
pub fn fill<T: Record>(instance: T) -> Result<T, GenerateError> {
    Generator::new(Configuration::default())?.fill(instance)
}

/// Create [`DEFAULT_LIST_COUNT`] new records.
pub fn create_list<T: Record>() -> Result<Vec<T>, GenerateError> {
    Generator::new(Configuration::default())?.create_list()
}

/// Create exactly `count` new records.
pub fn create_list_of<T: Record>(count: usize) -> Result<Vec<T>, GenerateError> {
    Generator::new(Configuration::default())?.create_list_of(count)
}
