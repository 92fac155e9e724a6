//! R S3 constructor generation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::infer::{KeyOrder, discover};
use crate::naming::to_snake_case;
use crate::output::require_object;

const INVALID_INPUT: &str = "Invalid JSON object provided.";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ROptions {}

pub fn generate(json: &Value, root_name: &str, _options: &ROptions) -> Result<String, Error> {
    let root = require_object(json, INVALID_INPUT, true)?;
    let shapes = discover(root, root_name, KeyOrder::Insertion);

    let mut out = String::new();
    for (i, shape) in shapes.iter().rev().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let class_name = to_snake_case(&shape.name);
        let idents: Vec<String> = shape.fields.iter().map(|f| to_snake_case(&f.key)).collect();
        let params: Vec<String> = idents.iter().map(|i| format!("{i} = NULL")).collect();
        out.push_str(&format!("new_{class_name} <- function({}) {{\n", params.join(", ")));
        out.push_str("  structure(\n    list(\n");
        for (j, ident) in idents.iter().enumerate() {
            let comma = if j + 1 < idents.len() { "," } else { "" };
            out.push_str(&format!("      {ident} = {ident}{comma}\n"));
        }
        out.push_str(&format!("    ),\n    class = \"{class_name}\"\n  )\n}}\n"));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn constructors_with_null_defaults() {
        let doc = json!({"userId": 1, "name": "x", "prefs": {"dark": true}});
        let out = generate(&doc, "UserData", &ROptions::default()).unwrap();
        assert!(out.contains("new_user_data <- function(user_id = NULL, name = NULL, prefs = NULL) {\n"));
        assert!(out.contains("      user_id = user_id,\n"));
        assert!(out.contains("    class = \"user_data\"\n"));
        assert!(out.contains("new_prefs <- function(dark = NULL) {\n"));
        assert!(out.find("new_prefs").unwrap() < out.find("new_user_data").unwrap());
    }

    #[test]
    fn empty_object_message_is_the_r_variant() {
        let err = generate(&json!({}), "Empty", &ROptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid JSON object provided.");
    }
}
