//! C# class generation with System.Text.Json attributes.

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
pub struct CSharpOptions {
    /// Wrap declarations in `namespace <name> { ... }`.
    pub namespace: Option<String>,
    /// Nullable annotations (`string?`, `int?`) on every property.
    pub nullable_reference_types: bool,
    /// `[JsonPropertyName("...")]` on every property.
    pub json_property_attributes: bool,
}

impl Default for CSharpOptions {
    fn default() -> Self {
        Self {
            namespace: None,
            nullable_reference_types: true,
            json_property_attributes: true,
        }
    }
}

pub fn generate(json: &Value, root_name: &str, options: &CSharpOptions) -> Result<String, Error> {
    let root = require_object(json, INVALID_INPUT, true)?;
    let shapes = discover(root, root_name, KeyOrder::Insertion);

    let mut out = String::new();
    if shapes_mention(&shapes, |k| matches!(k, Kind::Date)) {
        out.push_str("using System;\n");
    }
    if shapes_mention(&shapes, |k| matches!(k, Kind::List(_))) {
        out.push_str("using System.Collections.Generic;\n");
    }
    if options.json_property_attributes {
        out.push_str("using System.Text.Json.Serialization;\n");
    }

    let (indent, mut body) = match &options.namespace {
        Some(ns) => {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("namespace {ns}\n{{\n"));
            ("    ", String::new())
        }
        None => ("", String::new()),
    };

    for shape in shapes.iter().rev() {
        if !body.is_empty() {
            body.push('\n');
        }
        body.push_str(&format!("{indent}public class {}\n{indent}{{\n", shape.name));
        for field in &shape.fields {
            let ident = to_pascal_case(&field.key);
            if options.json_property_attributes {
                body.push_str(&format!(
                    "{indent}    [JsonPropertyName(\"{}\")]\n",
                    field.key
                ));
            }
            let mut ty = type_token(&field.kind);
            if options.nullable_reference_types {
                ty.push('?');
            }
            body.push_str(&format!(
                "{indent}    public {ty} {ident} {{ get; set; }}\n"
            ));
        }
        body.push_str(&format!("{indent}}}\n"));
    }

    if options.namespace.is_some() {
        out.push_str(&body);
        out.push_str("}\n");
    } else {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&body);
    }
    Ok(out)
}

fn type_token(kind: &Kind) -> String {
    match kind {
        Kind::Null | Kind::Unknown => "object".into(),
        Kind::Bool => "bool".into(),
        Kind::Int => "int".into(),
        Kind::Float => "double".into(),
        Kind::Date => "DateTime".into(),
        Kind::Str => "string".into(),
        Kind::Shape(name) => name.clone(),
        Kind::List(elem) => format!("List<{}>", type_token(elem)),
    }
}
