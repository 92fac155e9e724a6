//! Elixir struct generation with optional typespecs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::infer::{KeyOrder, discover};
use crate::ir::Kind;
use crate::naming::to_snake_case;
use crate::output::require_object;

const INVALID_INPUT: &str = "Invalid or empty JSON object provided.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElixirOptions {
    /// Emit `@type t :: %__MODULE__{...}` alongside each defstruct.
    pub typespecs: bool,
}

impl Default for ElixirOptions {
    fn default() -> Self {
        Self { typespecs: true }
    }
}

pub fn generate(json: &Value, root_name: &str, options: &ElixirOptions) -> Result<String, Error> {
    let root = require_object(json, INVALID_INPUT, true)?;
    let shapes = discover(root, root_name, KeyOrder::Insertion);

    let mut out = String::new();
    for (i, shape) in shapes.iter().rev().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("defmodule {} do\n", shape.name));
        let atoms: Vec<String> = shape
            .fields
            .iter()
            .map(|f| format!(":{}", to_snake_case(&f.key)))
            .collect();
        out.push_str(&format!("  defstruct [{}]\n", atoms.join(", ")));

        if options.typespecs {
            out.push_str("\n  @type t :: %__MODULE__{\n");
            for (j, field) in shape.fields.iter().enumerate() {
                let ident = to_snake_case(&field.key);
                let comma = if j + 1 < shape.fields.len() { "," } else { "" };
                out.push_str(&format!(
                    "          {ident}: {} | nil{comma}\n",
                    type_token(&field.kind)
                ));
            }
            out.push_str("        }\n");
        }
        out.push_str("end\n");
    }
    Ok(out)
}

fn type_token(kind: &Kind) -> String {
    match kind {
        Kind::Null | Kind::Unknown => "term()".into(),
        Kind::Bool => "boolean()".into(),
        Kind::Int => "integer()".into(),
        Kind::Float => "float()".into(),
        Kind::Date => "DateTime.t()".into(),
        Kind::Str => "String.t()".into(),
        Kind::Shape(name) => format!("{name}.t()"),
        Kind::List(elem) => format!("[{}]", type_token(elem)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "userId": 1,
            "name": "a",
            "score": 1.5,
            "joined": "2025-07-29T12:00:00Z",
            "profile": {"bio": "b"},
            "tags": ["x"],
            "extra": null
        })
    }

    #[test]
    fn modules_with_defstruct_and_typespecs() {
        let out = generate(&sample(), "User", &ElixirOptions::default()).unwrap();
        assert!(out.contains("defmodule User do\n"));
        assert!(out.contains(
            "  defstruct [:user_id, :name, :score, :joined, :profile, :tags, :extra]\n"
        ));
        assert!(out.contains("  @type t :: %__MODULE__{\n"));
        assert!(out.contains("          user_id: integer() | nil,\n"));
        assert!(out.contains("          name: String.t() | nil,\n"));
        assert!(out.contains("          score: float() | nil,\n"));
        assert!(out.contains("          joined: DateTime.t() | nil,\n"));
        assert!(out.contains("          profile: Profile.t() | nil,\n"));
        assert!(out.contains("          tags: [String.t()] | nil,\n"));
        assert!(out.contains("          extra: term() | nil\n"));
        assert!(out.find("defmodule Profile").unwrap() < out.find("defmodule User").unwrap());
    }

    #[test]
    fn typespecs_can_be_disabled() {
        let opts = ElixirOptions { typespecs: false };
        let out = generate(&json!({"id": 1}), "Item", &opts).unwrap();
        assert!(out.contains("  defstruct [:id]\n"));
        assert!(!out.contains("@type"));
    }

    #[test]
    fn empty_object_is_rejected() {
        let err = generate(&json!({}), "Empty", &ElixirOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid or empty JSON object provided.");
    }
}
