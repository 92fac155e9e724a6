//! Shared shape-discovery pass.
//!
//! Walks an arbitrary JSON object depth-first, classifies every leaf into a
//! [`Kind`], and records each distinct object-typed subtree as a named
//! [`Shape`]. Every language backend consumes the resulting shape list; the
//! only per-backend knob at this stage is whether object keys are visited in
//! insertion order or sorted alphabetically.
//!
//! Naming rules:
//! - nested object under key `k` → `to_pascal_case(k)`
//! - array of objects under key `k` → `to_pascal_case(singularize(k))`,
//!   sampling only `array[0]` as the representative subtree
//!
//! A derived name is discovered at most once per call; the first subtree
//! encountered under a name wins and later same-named subtrees are only
//! referenced. The discovered set lives on the call stack — nothing is shared
//! across calls.

use indexmap::IndexSet;
use serde_json::{Map, Value};

use crate::ir::{Field, Kind, Literal, Shape};
use crate::naming::{is_iso_datetime, singularize, to_pascal_case};

/// Key visitation order during discovery and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrder {
    /// Object's own insertion order (most backends).
    Insertion,
    /// Alphabetical (cpp, go, rust).
    Sorted,
}

/// Discover all shapes reachable from `root`, pre-order, root shape first.
pub fn discover(root: &Map<String, Value>, root_name: &str, order: KeyOrder) -> Vec<Shape> {
    let mut seen: IndexSet<String> = IndexSet::new();
    let mut shapes: Vec<Shape> = Vec::new();
    let root_shape = to_pascal_case(root_name);
    seen.insert(root_shape.clone());
    walk(root, &root_shape, order, &mut seen, &mut shapes);
    shapes
}

fn walk(
    map: &Map<String, Value>,
    name: &str,
    order: KeyOrder,
    seen: &mut IndexSet<String>,
    shapes: &mut Vec<Shape>,
) {
    // Reserve the slot up front so parents precede their nested shapes.
    let slot = shapes.len();
    shapes.push(Shape { name: name.to_string(), fields: Vec::new() });

    let mut keys: Vec<&String> = map.keys().collect();
    if order == KeyOrder::Sorted {
        keys.sort();
    }

    let mut fields = Vec::with_capacity(keys.len());
    for key in keys {
        let value = &map[key];
        let kind = classify(key, value, order, seen, shapes);
        fields.push(Field { key: key.clone(), kind, literal: literal_of(value) });
    }
    shapes[slot].fields = fields;
}

/// Scalar sample retained for default-value rendering; compound values and
/// nulls carry no literal.
fn literal_of(value: &Value) -> Option<Literal> {
    match value {
        Value::Bool(b) => Some(Literal::Bool(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Literal::Int(i))
            } else {
                let f = n.as_f64()?;
                if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64
                {
                    Some(Literal::Int(f as i64))
                } else {
                    Some(Literal::Float(f))
                }
            }
        }
        Value::String(s) => Some(Literal::Str(s.clone())),
        _ => None,
    }
}

/// Map one sampled value to its [`Kind`], recursing into nested shapes.
fn classify(
    key: &str,
    value: &Value,
    order: KeyOrder,
    seen: &mut IndexSet<String>,
    shapes: &mut Vec<Shape>,
) -> Kind {
    match value {
        Value::Null => Kind::Null,
        Value::Bool(_) => Kind::Bool,
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                Kind::Int
            } else {
                // Mirror the `value % 1 === 0` integer test: 2.0 is an integer.
                match n.as_f64() {
                    Some(f) if f.is_finite() && f.fract() == 0.0 => Kind::Int,
                    _ => Kind::Float,
                }
            }
        }
        Value::String(s) => {
            if is_iso_datetime(s) {
                Kind::Date
            } else {
                Kind::Str
            }
        }
        Value::Array(items) => match items.first() {
            None => Kind::List(Box::new(Kind::Unknown)),
            Some(Value::Object(elem)) => {
                let shape_name = to_pascal_case(singularize(key));
                if seen.insert(shape_name.clone()) {
                    walk(elem, &shape_name, order, seen, shapes);
                }
                Kind::List(Box::new(Kind::Shape(shape_name)))
            }
            // Homogeneity assumption: only the first element is inspected.
            Some(first) => Kind::List(Box::new(classify(key, first, order, seen, shapes))),
        },
        Value::Object(nested) => {
            let shape_name = to_pascal_case(key);
            if seen.insert(shape_name.clone()) {
                walk(nested, &shape_name, order, seen, shapes);
            }
            Kind::Shape(shape_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(v: &Value) -> &Map<String, Value> {
        v.as_object().unwrap()
    }

    #[test]
    fn flat_primitives_classify_per_kind() {
        let doc = json!({
            "id": 123,
            "share": 0.5,
            "whole": 2.0,
            "name": "x",
            "when": "2025-07-29T12:00:00Z",
            "ok": true,
            "gone": null,
            "tags": ["a", "b"],
            "empty": []
        });
        let shapes = discover(as_map(&doc), "Root", KeyOrder::Insertion);
        assert_eq!(shapes.len(), 1);
        let kinds: Vec<&Kind> = shapes[0].fields.iter().map(|f| &f.kind).collect();
        assert_eq!(*kinds[0], Kind::Int);
        assert_eq!(*kinds[1], Kind::Float);
        assert_eq!(*kinds[2], Kind::Int, "2.0 is whole-valued");
        assert_eq!(*kinds[3], Kind::Str);
        assert_eq!(*kinds[4], Kind::Date);
        assert_eq!(*kinds[5], Kind::Bool);
        assert_eq!(*kinds[6], Kind::Null);
        assert_eq!(*kinds[7], Kind::List(Box::new(Kind::Str)));
        assert_eq!(*kinds[8], Kind::List(Box::new(Kind::Unknown)));
    }

    #[test]
    fn nested_shapes_come_after_their_parent() {
        let doc = json!({
            "outer_level": {
                "inner_list": [{"item_value": 1, "item_name": "one"}]
            }
        });
        let shapes = discover(as_map(&doc), "ComplexData", KeyOrder::Insertion);
        let names: Vec<&str> = shapes.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["ComplexData", "OuterLevel", "InnerList"]);
        assert_eq!(
            shapes[1].fields[0].kind,
            Kind::List(Box::new(Kind::Shape("InnerList".into())))
        );
    }

    #[test]
    fn array_item_shape_name_is_singularized() {
        let doc = json!({"posts": [{"title": "t"}], "status": [{"code": 1}]});
        let shapes = discover(as_map(&doc), "Root", KeyOrder::Insertion);
        let names: Vec<&str> = shapes.iter().map(|s| s.name.as_str()).collect();
        // "status" singularizes naively to "Statu"; that is the contract.
        assert_eq!(names, ["Root", "Post", "Statu"]);
    }

    #[test]
    fn sorted_order_changes_field_sequence_only() {
        let doc = json!({"b": 1, "a": 2});
        let insertion = discover(as_map(&doc), "Root", KeyOrder::Insertion);
        let sorted = discover(as_map(&doc), "Root", KeyOrder::Sorted);
        let ins: Vec<&str> = insertion[0].fields.iter().map(|f| f.key.as_str()).collect();
        let srt: Vec<&str> = sorted[0].fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(ins, ["b", "a"]);
        assert_eq!(srt, ["a", "b"]);
    }

    #[test]
    fn duplicate_shape_name_first_discovered_wins() {
        let doc = json!({
            "profile": {"name": "x"},
            "account": {"profile": {"age": 3, "city": "y"}}
        });
        let shapes = discover(as_map(&doc), "Root", KeyOrder::Insertion);
        let profiles: Vec<&Shape> = shapes.iter().filter(|s| s.name == "Profile").collect();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].fields.len(), 1);
        assert_eq!(profiles[0].fields[0].key, "name");
    }

    #[test]
    fn empty_array_of_arrays_and_mixed_depth() {
        let doc = json!({"grid": [[1, 2], [3]]});
        let shapes = discover(as_map(&doc), "Root", KeyOrder::Insertion);
        assert_eq!(
            shapes[0].fields[0].kind,
            Kind::List(Box::new(Kind::List(Box::new(Kind::Int))))
        );
    }

    #[test]
    fn discovery_is_deterministic() {
        let doc = json!({"a": {"b": {"c": 1}}, "list": [{"v": true}]});
        let one = discover(as_map(&doc), "Root", KeyOrder::Insertion);
        let two = discover(as_map(&doc), "Root", KeyOrder::Insertion);
        let n1: Vec<_> = one.iter().map(|s| (&s.name, s.fields.len())).collect();
        let n2: Vec<_> = two.iter().map(|s| (&s.name, s.fields.len())).collect();
        assert_eq!(n1, n2);
    }
}
