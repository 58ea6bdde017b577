use pretty_assertions::assert_eq;

use super::*;
use crate::array::Array;
use crate::class::ClassInstance;
use crate::map::Map;

fn sample_dict() -> Value {
    let nested = Array::from(vec![Value::Bool(true), Value::Float(2.5)]);
    let map: Map = [("a", Value::int(1)), ("b", Value::array(nested))]
        .into_iter()
        .collect();
    Value::dict(map)
}

fn rendered(value: &Value) -> Vec<(String, String)> {
    value
        .walk()
        .map(|(path, v)| (path.to_string(), format!("{v:?}")))
        .collect()
}

#[test]
fn test_walk_scalar_yields_root_only() {
    let value = Value::int(7);
    let items: Vec<_> = value.walk().collect();
    assert_eq!(items.len(), 1);
    assert!(items[0].0.is_root());
    assert_eq!(items[0].1, &Value::int(7));
}

#[test]
fn test_walk_dict_with_nested_array() {
    let value = sample_dict();
    let paths: Vec<String> = value.walk().map(|(path, _)| path.to_string()).collect();
    assert_eq!(paths, vec!["$", "$.a", "$.b", "$.b[0]", "$.b[1]"]);

    let leaves: Vec<&Value> = value
        .walk()
        .filter(|(_, v)| !v.type_index().is_aggregate())
        .map(|(_, v)| v)
        .collect();
    assert_eq!(
        leaves,
        vec![&Value::int(1), &Value::Bool(true), &Value::Float(2.5)]
    );
}

#[test]
fn test_walk_class_visits_variables_then_methods() {
    let mut instance = ClassInstance::new("Point");
    instance.set_variable("x", Value::int(10));
    instance.set_variable("coords", Value::array((1..=3).map(Value::int).collect()));
    instance.set_method("norm", Value::function("Point.norm"));
    let value = Value::class(instance);

    assert_eq!(
        rendered(&value)
            .into_iter()
            .map(|(path, _)| path)
            .collect::<Vec<_>>(),
        vec![
            "$",
            "$::x",
            "$::coords",
            "$::coords[0]",
            "$::coords[1]",
            "$::coords[2]",
            "$::norm()",
        ]
    );
}

#[test]
fn test_walk_depth_and_last_segment() {
    let value = sample_dict();
    let (path, v) = value.walk().last().unwrap();
    assert_eq!(v, &Value::Float(2.5));
    assert_eq!(path.depth(), 2);
    assert_eq!(path.last(), Some(PathSegment::Index(1)));
    assert_eq!(
        path.segments(),
        &[PathSegment::Key("b"), PathSegment::Index(1)]
    );
}

#[test]
fn test_at_follows_segments() {
    let value = sample_dict();
    assert_eq!(value.at(&[]), Some(&value));
    assert_eq!(value.at(&[PathSegment::Key("a")]), Some(&Value::int(1)));
    assert_eq!(
        value.at(&[PathSegment::Key("b"), PathSegment::Index(0)]),
        Some(&Value::Bool(true))
    );
    assert_eq!(value.at(&[PathSegment::Index(0)]), None);
    assert_eq!(
        value.at(&[PathSegment::Key("b"), PathSegment::Index(9)]),
        None
    );
}

#[test]
fn test_walk_paths_resolve_back_to_values() {
    let mut instance = ClassInstance::new("Node");
    instance.set_variable("payload", sample_dict());
    instance.set_method("visit", Value::function("Node.visit"));
    let value = Value::class(instance);

    for (path, v) in value.walk() {
        assert_eq!(value.at(path.segments()), Some(v), "path {path}");
    }
}

#[test]
fn test_walk_deep_nesting_does_not_recurse() {
    let mut value = Value::int(0);
    for _ in 0..1_000 {
        let mut wrapper = Array::with_capacity(1);
        wrapper.push(value);
        value = Value::array(wrapper);
    }
    assert_eq!(value.walk().count(), 1_001);
    assert_eq!(value.walk().last().map(|(path, _)| path.depth()), Some(1_000));
}
