//! Java POJO generation. Deliberately minimal: public fields, no accessors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::infer::{KeyOrder, discover};
use crate::ir::{Kind, shapes_mention};
use crate::naming::to_camel_case;
use crate::output::require_object;

const INVALID_INPUT: &str = "Invalid or empty JSON object provided.";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JavaOptions {}

pub fn generate(json: &Value, root_name: &str, _options: &JavaOptions) -> Result<String, Error> {
    let root = require_object(json, INVALID_INPUT, true)?;
    let shapes = discover(root, root_name, KeyOrder::Insertion);

    let mut out = String::new();
    if shapes_mention(&shapes, |k| matches!(k, Kind::List(_))) {
        out.push_str("import java.util.List;\n");
    }
    for shape in shapes.iter().rev() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("public class {} {{\n", shape.name));
        for field in &shape.fields {
            let ident = to_camel_case(&field.key);
            out.push_str(&format!("    public {} {ident};\n", type_token(&field.kind)));
        }
        out.push_str("}\n");
    }
    Ok(out)
}

fn type_token(kind: &Kind) -> String {
    match kind {
        Kind::Null | Kind::Unknown => "Object".into(),
        Kind::Bool => "Boolean".into(),
        Kind::Int => "Integer".into(),
        Kind::Float => "Double".into(),
        Kind::Date | Kind::Str => "String".into(),
        Kind::Shape(name) => name.clone(),
        Kind::List(elem) => format!("List<{}>", type_token(elem)),
    }
}
