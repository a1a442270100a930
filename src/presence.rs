//! Decides whether a field already carries a value worth keeping.
//!
//! A field is unset when it holds its type's default: `0` for integers,
//! the empty string for `String`, `None` for `Option<String>`, the Unix
//! epoch for timestamps and the nil UUID. A caller-written `0` is therefore
//! indistinguishable from "never set" and gets overwritten.

use crate::record::{FieldDescriptor, FieldRef, Record};
use chrono::{DateTime, Utc};

/// Whether `descriptor`'s field on `instance` already has a value.
///
/// Unsupported kinds and names the record does not resolve report `false`;
/// no generator exists for them, so they are left untouched either way.
pub fn has_value<T: Record>(instance: &T, descriptor: &FieldDescriptor) -> bool {
    match instance.field(descriptor.name) {
        Some(field) => is_present(field),
        None => false,
    }
}

/// Presence rule for a single field value.
pub fn is_present(field: FieldRef<'_>) -> bool {
    match field {
        FieldRef::Int32(value) => *value != 0,
        FieldRef::Int64(value) => *value != 0,
        FieldRef::Text(value) => !value.is_empty(),
        // Any non-null string counts, including an empty one.
        FieldRef::OptionalText(value) => value.is_some(),
        FieldRef::Timestamp(value) => *value != DateTime::<Utc>::default(),
        FieldRef::Uuid(value) => !value.is_nil(),
        FieldRef::Unsupported => false,
    }
}
