//! Go struct generation with json tags.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::infer::{KeyOrder, discover};
use crate::ir::{Kind, shapes_mention};
use crate::naming::to_pascal_case;
use crate::output::require_object;

const INVALID_INPUT: &str = "Invalid or empty JSON object provided.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GoOptions {
    pub package_name: String,
    /// Pointer field types, reflecting that any field may be absent.
    pub use_pointers: bool,
}

impl Default for GoOptions {
    fn default() -> Self {
        Self { package_name: "main".into(), use_pointers: true }
    }
}

pub fn generate(json: &Value, root_name: &str, options: &GoOptions) -> Result<String, Error> {
    let root = require_object(json, INVALID_INPUT, true)?;
    // Go emission sorts object keys alphabetically.
    let shapes = discover(root, root_name, KeyOrder::Sorted);

    let mut out = String::new();
    out.push_str(&format!("package {}\n", options.package_name));
    if shapes_mention(&shapes, |k| matches!(k, Kind::Date)) {
        out.push_str("\nimport \"time\"\n");
    }

    for shape in shapes.iter().rev() {
        out.push('\n');
        out.push_str(&format!("type {} struct {{\n", shape.name));
        for field in &shape.fields {
            let ident = to_pascal_case(&field.key);
            let ty = field_type(&field.kind, options.use_pointers);
            out.push_str(&format!(
                "\t{ident} {ty} `json:\"{},omitempty\"`\n",
                field.key
            ));
        }
        out.push_str("}\n");
    }
    Ok(out)
}

fn field_type(kind: &Kind, use_pointers: bool) -> String {
    match kind {
        // interface{} is already nilable; never pointer-wrapped.
        Kind::Null | Kind::Unknown => "interface{}".into(),
        Kind::List(elem) => format!("[]{}", elem_type(elem, use_pointers)),
        other => {
            let base = base_type(other);
            if use_pointers { format!("*{base}") } else { base }
        }
    }
}

fn elem_type(kind: &Kind, use_pointers: bool) -> String {
    match kind {
        Kind::Null | Kind::Unknown => "interface{}".into(),
        Kind::List(inner) => format!("[]{}", elem_type(inner, use_pointers)),
        // Slice elements of struct type stay pointers; scalars do not.
        Kind::Shape(name) if use_pointers => format!("*{name}"),
        other => base_type(other),
    }
}

fn base_type(kind: &Kind) -> String {
    match kind {
        Kind::Bool => "bool".into(),
        Kind::Int => "int".into(),
        Kind::Float => "float64".into(),
        Kind::Date => "time.Time".into(),
        Kind::Str => "string".into(),
        Kind::Shape(name) => name.clone(),
        Kind::Null | Kind::Unknown | Kind::List(_) => unreachable!("handled by callers"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_list_scenario_produces_three_structs() {
        let doc = json!({
            "outer_level": {
                "inner_list": [{"item_value": 1, "item_name": "one"}]
            }
        });
        let out = generate(&doc, "ComplexData", &GoOptions::default()).unwrap();
        assert!(out.contains("package main\n"));
        assert!(out.contains("type ComplexData struct {\n\tOuterLevel *OuterLevel `json:\"outer_level,omitempty\"`\n}\n"));
        assert!(out.contains("type OuterLevel struct {\n\tInnerList []*InnerList `json:\"inner_list,omitempty\"`\n}\n"));
        // Keys sort alphabetically: item_name before item_value.
        assert!(out.contains("type InnerList struct {\n\tItemName *string `json:\"item_name,omitempty\"`\n\tItemValue *int `json:\"item_value,omitempty\"`\n}\n"));
    }

    #[test]
    fn time_import_only_with_dates() {
        let with_date = generate(
            &json!({"created_at": "2025-07-29T12:00:00Z"}),
            "M",
            &GoOptions::default(),
        )
        .unwrap();
        assert!(with_date.contains("import \"time\"\n"));
        assert!(with_date.contains("CreatedAt *time.Time"));

        let without = generate(&json!({"a": 1}), "M", &GoOptions::default()).unwrap();
        assert!(!without.contains("import"));
    }

    #[test]
    fn pointers_toggle_off() {
        let out = generate(
            &json!({"count": 3, "rate": 0.5, "ok": true}),
            "Stats",
            &GoOptions { use_pointers: false, ..Default::default() },
        )
        .unwrap();
        assert!(out.contains("Count int `json:\"count,omitempty\"`"));
        assert!(out.contains("Rate float64 `json:\"rate,omitempty\"`"));
        assert!(out.contains("Ok bool `json:\"ok,omitempty\"`"));
    }

    #[test]
    fn null_and_empty_arrays_fall_back_to_interface() {
        let out = generate(&json!({"x": null, "xs": []}), "M", &GoOptions::default()).unwrap();
        assert!(out.contains("X interface{} `json:\"x,omitempty\"`"));
        assert!(out.contains("Xs []interface{} `json:\"xs,omitempty\"`"));
    }

    #[test]
    fn empty_object_is_rejected() {
        let err = generate(&json!({}), "Empty", &GoOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid or empty JSON object provided.");
    }
}
