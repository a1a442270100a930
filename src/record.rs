//! Field introspection for generated records.
//!
//! Rust has no runtime reflection, so a record describes its own settable
//! fields through the [`Record`] trait. `#[derive(Record)]` implements it for
//! plain structs; hand-written impls are fine too.
//!
//! ```rust
//! use angie::{FieldKind, Record};
//!
//! #[derive(Debug, Default, Record)]
//! struct Person {
//!     first_name: String,
//!     age: i32,
//! }
//!
//! let fields = Person::descriptors();
//! assert_eq!(fields[0].name, "first_name");
//! assert_eq!(fields[1].kind, FieldKind::Int32);
//! ```

use crate::error::GenerateError;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Declared type of a record field.
///
/// Dispatch over generators is a `match` on this enum, so supporting a new
/// field type means adding a variant here plus a synthesizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// 32-bit signed integer
    Int32,

    /// 64-bit signed integer
    Int64,

    /// Owned string; the empty string counts as unset
    Text,

    /// Nullable string; `None` counts as unset
    OptionalText,

    /// UTC timestamp; the Unix epoch counts as unset
    Timestamp,

    /// UUID; the nil UUID counts as unset
    Uuid,

    /// Any other type, carrying its name for diagnostics
    Unsupported(&'static str),
}

impl FieldKind {
    /// Whether a generator exists for this kind.
    pub fn is_supported(&self) -> bool {
        !matches!(self, FieldKind::Unsupported(_))
    }
}

/// Name and declared kind of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name as written in the struct
    pub name: &'static str,

    /// Declared kind
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Create a new field descriptor.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Shared view of a field's current value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRef<'a> {
    Int32(&'a i32),
    Int64(&'a i64),
    Text(&'a String),
    OptionalText(&'a Option<String>),
    Timestamp(&'a DateTime<Utc>),
    Uuid(&'a Uuid),
    Unsupported,
}

/// Mutable slot a generated value is written into.
#[derive(Debug, PartialEq)]
pub enum FieldMut<'a> {
    Int32(&'a mut i32),
    Int64(&'a mut i64),
    Text(&'a mut String),
    OptionalText(&'a mut Option<String>),
    Timestamp(&'a mut DateTime<Utc>),
    Uuid(&'a mut Uuid),
    Unsupported,
}

/// A record whose fields the generator can enumerate, read and assign.
pub trait Record: Sized {
    /// Create an instance with every field at its default.
    fn construct() -> Result<Self, GenerateError>;

    /// Describe the settable fields in declaration order.
    fn descriptors() -> Vec<FieldDescriptor>;

    /// Read a field by name. `None` if the record has no such field.
    fn field(&self, name: &str) -> Option<FieldRef<'_>>;

    /// Borrow a field for assignment. `None` if the record has no such field.
    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>>;
}
