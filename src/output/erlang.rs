//! Erlang record generation with type annotations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::infer::{KeyOrder, discover};
use crate::ir::Kind;
use crate::naming::to_snake_case;
use crate::output::require_object;

const INVALID_INPUT: &str = "Invalid or empty JSON object provided.";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ErlangOptions {}

/// Empty objects degenerate into an empty record rather than erroring.
pub fn generate(json: &Value, root_name: &str, _options: &ErlangOptions) -> Result<String, Error> {
    let root = require_object(json, INVALID_INPUT, false)?;
    let shapes = discover(root, root_name, KeyOrder::Insertion);

    let mut out = String::new();
    for (i, shape) in shapes.iter().rev().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let record = to_snake_case(&shape.name);
        if shape.fields.is_empty() {
            out.push_str(&format!("-record({record}, {{}}).\n"));
            continue;
        }
        out.push_str(&format!("-record({record}, {{\n"));
        for (j, field) in shape.fields.iter().enumerate() {
            let ident = to_snake_case(&field.key);
            let comma = if j + 1 < shape.fields.len() { "," } else { "" };
            out.push_str(&format!(
                "    {ident} :: {} | undefined{comma}\n",
                type_token(&field.kind)
            ));
        }
        out.push_str("}).\n");
    }
    Ok(out)
}

fn type_token(kind: &Kind) -> String {
    match kind {
        Kind::Null | Kind::Unknown => "term()".into(),
        Kind::Bool => "boolean()".into(),
        Kind::Int => "integer()".into(),
        Kind::Float => "float()".into(),
        Kind::Date | Kind::Str => "binary()".into(),
        Kind::Shape(name) => format!("#{}{{}}", to_snake_case(name)),
        Kind::List(elem) => format!("[{}]", type_token(elem)),
    }
}
