use pretty_assertions::assert_eq;

use super::*;
use crate::growth::CAPACITY_STEP;

#[test]
fn test_new_array_is_empty() {
    let array = Array::new();
    assert!(array.is_empty());
    assert_eq!(array.len(), 0);
    assert!(array.capacity() >= INITIAL_CAPACITY);
}

#[test]
fn test_push_then_get_last() {
    let mut array = Array::new();
    array.push(Value::int(1));
    array.push(Value::string("two"));
    let last = i64::try_from(array.len()).unwrap() - 1;
    assert_eq!(array.get(last).unwrap(), &Value::string("two"));
    assert_eq!(array.get(0).unwrap(), &Value::int(1));
}

#[test]
fn test_growth_preserves_order() {
    let mut array = Array::new();
    for i in 0..=256 {
        array.push(Value::int(i));
        let last = i64::try_from(array.len()).unwrap() - 1;
        assert_eq!(array.get(last).unwrap(), &Value::int(i));
    }
    assert_eq!(array.len(), 257);
    assert!(array.capacity() >= INITIAL_CAPACITY + CAPACITY_STEP);
    for (i, item) in array.iter().enumerate() {
        assert_eq!(item.as_int(), Some(i64::try_from(i).unwrap()));
    }
}

#[test]
fn test_small_capacity_grows_by_step() {
    let mut array = Array::with_capacity(1);
    array.push(Value::Bool(true));
    array.push(Value::Bool(false));
    assert!(array.capacity() >= 1 + CAPACITY_STEP);
    assert_eq!(array.len(), 2);
}

#[test]
fn test_try_push() {
    let mut array = Array::with_capacity(0);
    array.try_push(Value::int(5)).unwrap();
    assert_eq!(array.as_slice(), &[Value::int(5)]);
}

#[test]
fn test_get_out_of_bounds() {
    let mut array = Array::new();
    array.push(Value::int(1));
    array.push(Value::int(2));

    assert_eq!(
        array.get(-1),
        Err(ValueError::IndexOutOfBounds { index: -1, len: 2 })
    );
    assert_eq!(
        array.get(2),
        Err(ValueError::IndexOutOfBounds { index: 2, len: 2 })
    );
    assert_eq!(
        Array::new().get(0),
        Err(ValueError::IndexOutOfBounds { index: 0, len: 0 })
    );
}

#[test]
fn test_set_replaces_in_place() {
    let mut array = Array::from(vec![Value::int(1), Value::int(2)]);
    let old = array.set(1, Value::Float(2.5)).unwrap();
    assert_eq!(old, Value::int(2));
    assert_eq!(array.get(1).unwrap(), &Value::Float(2.5));
    assert_eq!(array.len(), 2);

    assert!(array.set(5, Value::Null).is_err());
    assert_eq!(array.len(), 2);
}

#[test]
fn test_get_mut() {
    let mut array = Array::from(vec![Value::int(1)]);
    *array.get_mut(0).unwrap() = Value::Bool(true);
    assert_eq!(array.first(), Some(&Value::Bool(true)));
    assert!(array.get_mut(-3).is_err());
}

#[test]
fn test_pop() {
    let mut array = Array::from(vec![Value::int(1), Value::int(2)]);
    assert_eq!(array.pop(), Some(Value::int(2)));
    assert_eq!(array.last(), Some(&Value::int(1)));
    assert_eq!(array.pop(), Some(Value::int(1)));
    assert_eq!(array.pop(), None);
}

#[test]
fn test_collect_and_into_iter() {
    let array: Array = (1..=3).map(Value::int).collect();
    let ints: Vec<i64> = array.iter().filter_map(Value::as_int).collect();
    assert_eq!(ints, vec![1, 2, 3]);

    let owned: Vec<Value> = array.into_iter().collect();
    assert_eq!(owned, vec![Value::int(1), Value::int(2), Value::int(3)]);
}

#[test]
fn test_clone_is_deep() {
    let mut original = Array::from(vec![Value::array(Array::from(vec![Value::int(1)]))]);
    let copy = original.clone();
    original
        .get_mut(0)
        .unwrap()
        .as_array_mut()
        .unwrap()
        .push(Value::int(2));

    assert_eq!(copy.get(0).unwrap().as_array().unwrap().len(), 1);
    assert_eq!(original.get(0).unwrap().as_array().unwrap().len(), 2);
}

#[test]
fn test_out_of_bounds_errors_match_helper() {
    let mut array = Array::from(vec![Value::Null]);
    assert_eq!(array.get(-2), Err(ValueError::index_out_of_bounds(-2, 1)));
    assert_eq!(
        array.get_mut(1).map(|v| v.clone()),
        Err(ValueError::index_out_of_bounds(1, 1))
    );
}
