//! Property-based tests for the container primitives.
//!
//! `Array` is checked against a plain `Vec`, and `Map` against a model
//! `Vec<(String, Value)>` with upsert semantics.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use ly_value::{Array, Map, Value, ValueError, CAPACITY_STEP, INITIAL_CAPACITY};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::null()),
        any::<i64>().prop_map(Value::int),
        (-1.0e9..1.0e9_f64).prop_map(Value::float),
        any::<bool>().prop_map(Value::bool),
        "[a-z]{0,8}".prop_map(Value::string),
    ]
}

fn key() -> impl Strategy<Value = String> {
    // Small alphabet so sequences revisit keys.
    "[a-e]{1,2}"
}

fn model_upsert(model: &mut Vec<(String, Value)>, key: &str, value: Value) -> Option<Value> {
    match model.iter_mut().find(|(k, _)| k == key) {
        Some((_, slot)) => Some(std::mem::replace(slot, value)),
        None => {
            model.push((key.to_owned(), value));
            None
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    #[test]
    fn pushed_values_read_back(values in prop::collection::vec(scalar(), 0..600)) {
        let mut array = Array::new();
        for value in &values {
            array.push(value.clone());
        }

        prop_assert_eq!(array.len(), values.len());
        for (i, expected) in values.iter().enumerate() {
            let index = i64::try_from(i).unwrap();
            prop_assert_eq!(array.get(index).unwrap(), expected);
        }

        let len = i64::try_from(values.len()).unwrap();
        prop_assert_eq!(
            array.get(len),
            Err(ValueError::IndexOutOfBounds { index: len, len: values.len() })
        );
        prop_assert!(array.get(-1).is_err());
    }

    #[test]
    fn capacity_grows_in_fixed_steps(count in 0_usize..1_000) {
        let mut array = Array::new();
        for n in 0..count {
            array.push(Value::int(i64::try_from(n).unwrap()));
        }

        let extra = count.saturating_sub(INITIAL_CAPACITY);
        let steps = extra.div_ceil(CAPACITY_STEP);
        prop_assert!(array.capacity() >= INITIAL_CAPACITY + steps * CAPACITY_STEP);
        prop_assert!(array.capacity() >= array.len());
    }

    #[test]
    fn map_behaves_like_model_upsert(
        ops in prop::collection::vec((key(), scalar()), 0..300)
    ) {
        let mut map = Map::new();
        let mut model: Vec<(String, Value)> = Vec::new();

        for (k, v) in ops {
            let expected = model_upsert(&mut model, &k, v.clone());
            // Lookups go through a freshly built key with equal content.
            let previous = map.insert(String::from(k.as_str()), v);
            prop_assert_eq!(previous, expected);
            prop_assert_eq!(map.len(), model.len());
        }

        let entries: Vec<(String, Value)> = map
            .iter()
            .map(|(k, v)| (k.to_owned(), v.clone()))
            .collect();
        prop_assert_eq!(&entries, &model);

        for (i, (k, v)) in model.iter().enumerate() {
            prop_assert_eq!(map.index_of(k), Some(i));
            prop_assert_eq!(map.lookup(&k.clone()).unwrap(), v);
        }
        prop_assert!(map.lookup("zzz").unwrap_err().is_not_found());
    }

    #[test]
    fn map_remove_keeps_remaining_order(
        keys in prop::collection::vec(key(), 1..40),
        victim in key()
    ) {
        let mut map = Map::new();
        let mut model: Vec<(String, Value)> = Vec::new();
        for (n, k) in keys.iter().enumerate() {
            let value = Value::int(i64::try_from(n).unwrap());
            map.insert(k.as_str(), value.clone());
            model_upsert(&mut model, k, value);
        }

        let removed = map.remove(&victim);
        let position = model.iter().position(|(k, _)| *k == victim);
        let expected = position.map(|i| model.remove(i).1);
        prop_assert_eq!(removed, expected);

        let remaining: Vec<&str> = map.keys().collect();
        let model_keys: Vec<&str> = model.iter().map(|(k, _)| k.as_str()).collect();
        prop_assert_eq!(remaining, model_keys);
        for (i, (k, _)) in model.iter().enumerate() {
            prop_assert_eq!(map.index_of(k), Some(i));
        }
    }
}
