//! Property-based checks for bounds and idempotence.

mod common;

use angie::{configure, Generator};
use common::Person;
use proptest::prelude::*;

fn any_person() -> impl Strategy<Value = Person> {
    (
        prop::option::of("[A-Za-z]{0,8}"),
        "[A-Za-z]{0,8}",
        prop::option::of("[a-z]{0,8}@example\\.com"),
        any::<i32>(),
    )
        .prop_map(|(first, last, email, age)| Person {
            first_name: first.unwrap_or_default(),
            last_name: last,
            email,
            age,
        })
}

proptest! {
    #[test]
    fn fill_is_idempotent(person in any_person(), seed in any::<u64>()) {
        let mut generator = Generator::new(configure().seed(seed).build().unwrap()).unwrap();

        let once = generator.fill(person).unwrap();
        let twice = generator.fill(once.clone()).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn fill_preserves_present_fields(person in any_person()) {
        let filled = angie::fill(person.clone()).unwrap();

        if !person.first_name.is_empty() {
            prop_assert_eq!(&filled.first_name, &person.first_name);
        }
        if !person.last_name.is_empty() {
            prop_assert_eq!(&filled.last_name, &person.last_name);
        }
        if person.email.is_some() {
            prop_assert_eq!(&filled.email, &person.email);
        }
        if person.age != 0 {
            prop_assert_eq!(filled.age, person.age);
        }
    }

    #[test]
    fn range_is_respected(low in -1000i64..1000, width in 0i64..50, seed in any::<u64>()) {
        let high = low + width;
        let person: Person = configure().int_range(low, high).seed(seed).create_new().unwrap();

        let age = i64::from(person.age);
        prop_assert!(age >= low && age <= high);
    }

    #[test]
    fn max_is_respected(max in 0i64..10_000, seed in any::<u64>()) {
        let person: Person = configure().max_int(max).seed(seed).create_new().unwrap();

        let age = i64::from(person.age);
        prop_assert!((0..=max).contains(&age));
    }

    #[test]
    fn min_is_respected(min in -10_000i64..10_000, seed in any::<u64>()) {
        let person: Person = configure().min_int(min).seed(seed).create_new().unwrap();

        prop_assert!(i64::from(person.age) >= min);
    }
}
