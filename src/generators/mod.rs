//! Value generators for each supported field kind.
//!
//! [`generate_field`] dispatches on the slot's variant; the submodules hold
//! the per-kind sampling logic.

pub mod numeric;
pub mod text;
pub mod timestamp;
pub mod uuid;

use crate::config::Configuration;
use crate::error::GenerateError;
use crate::record::{FieldKind, FieldMut};
use rand::Rng;

/// Check that a field of `kind` can be generated under `config`.
///
/// Only integer windows depend on the field, so other kinds always pass.
pub fn check_field(kind: FieldKind, config: &Configuration) -> Result<(), GenerateError> {
    match kind {
        FieldKind::Int32 => {
            numeric::resolve_int_window(config, i32::MIN.into(), i32::MAX.into())?;
        }
        FieldKind::Int64 => {
            numeric::resolve_int_window(config, i64::MIN, i64::MAX)?;
        }
        _ => {}
    }
    Ok(())
}

/// Write a freshly generated value into `slot`.
///
/// Returns `Ok(false)` for unsupported slots, which are left untouched.
pub fn generate_field<R: Rng>(
    slot: FieldMut<'_>,
    field_name: &str,
    config: &Configuration,
    rng: &mut R,
) -> Result<bool, GenerateError> {
    match slot {
        FieldMut::Int32(value) => *value = numeric::generate_i32(rng, config)?,

        FieldMut::Int64(value) => *value = numeric::generate_i64(rng, config)?,

        FieldMut::Text(value) => *value = text::generate_text(rng, field_name),

        FieldMut::OptionalText(value) => *value = Some(text::generate_text(rng, field_name)),

        FieldMut::Timestamp(value) => {
            *value = timestamp::generate_timestamp_range(rng, config.date_range())
        }

        FieldMut::Uuid(value) => *value = uuid::generate_uuid_v4(rng),

        FieldMut::Unsupported => return Ok(false),
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigurationBuilder;
    use chrono::{DateTime, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_int_slot() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = ConfigurationBuilder::new().int_range(3, 3).build().unwrap();
        let mut age = 0i32;

        let written = generate_field(FieldMut::Int32(&mut age), "age", &config, &mut rng).unwrap();

        assert!(written);
        assert_eq!(age, 3);
    }

    #[test]
    fn test_generate_optional_text_slot() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut nickname: Option<String> = None;

        generate_field(
            FieldMut::OptionalText(&mut nickname),
            "nickname",
            &Configuration::default(),
            &mut rng,
        )
        .unwrap();

        assert!(nickname.is_some_and(|n| !n.is_empty()));
    }

    #[test]
    fn test_generate_timestamp_slot() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut created = DateTime::<Utc>::default();

        generate_field(
            FieldMut::Timestamp(&mut created),
            "created",
            &Configuration::default(),
            &mut rng,
        )
        .unwrap();

        assert_ne!(created, DateTime::<Utc>::default());
    }

    #[test]
    fn test_unsupported_slot_is_skipped() {
        let mut rng = StdRng::seed_from_u64(42);
        let written = generate_field(
            FieldMut::Unsupported,
            "comments",
            &Configuration::default(),
            &mut rng,
        )
        .unwrap();

        assert!(!written);
    }

    #[test]
    fn test_check_field_depends_on_width() {
        let config = ConfigurationBuilder::new()
            .min_int(3_000_000_000)
            .build()
            .unwrap();

        assert!(matches!(
            check_field(FieldKind::Int32, &config),
            Err(GenerateError::InvalidConfiguration(_))
        ));
        assert!(check_field(FieldKind::Int64, &config).is_ok());
        assert!(check_field(FieldKind::Text, &config).is_ok());
    }

    #[test]
    fn test_empty_window_is_an_error() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = ConfigurationBuilder::new().max_int(-5).build().unwrap();
        let mut age = 0i32;

        let result = generate_field(FieldMut::Int32(&mut age), "age", &config, &mut rng);

        assert!(matches!(result, Err(GenerateError::InvalidConfiguration(_))));
        assert_eq!(age, 0);
    }
}
