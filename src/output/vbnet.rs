//! VB.NET class generation with auto-implemented properties.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::infer::{KeyOrder, discover};
use crate::ir::{Kind, Shape};
use crate::naming::to_pascal_case;
use crate::output::require_object;

const INVALID_INPUT: &str = "Invalid or empty JSON object provided.";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VbNetOptions {
    /// Wrap all classes in a `Namespace` block.
    pub namespace: Option<String>,
}

pub fn generate(json: &Value, root_name: &str, options: &VbNetOptions) -> Result<String, Error> {
    let root = require_object(json, INVALID_INPUT, true)?;
    let shapes = discover(root, root_name, KeyOrder::Insertion);

    let indent = if options.namespace.is_some() { "    " } else { "" };
    let mut body = String::new();
    for (i, shape) in shapes.iter().rev().enumerate() {
        if i > 0 {
            body.push('\n');
        }
        render_class(&mut body, shape, indent);
    }

    let mut out = String::new();
    match &options.namespace {
        Some(ns) => {
            out.push_str(&format!("Namespace {ns}\n\n"));
            out.push_str(&body);
            out.push_str("\nEnd Namespace\n");
        }
        None => out.push_str(&body),
    }
    Ok(out)
}

fn render_class(out: &mut String, shape: &Shape, indent: &str) {
    out.push_str(&format!("{indent}Public Class {}\n", shape.name));
    for field in &shape.fields {
        let ident = to_pascal_case(&field.key);
        out.push_str(&format!(
            "{indent}    Public Property {ident} As {}\n",
            type_token(&field.kind)
        ));
    }
    out.push_str(&format!("{indent}End Class\n"));
}

fn type_token(kind: &Kind) -> String {
    match kind {
        Kind::Null | Kind::Unknown => "Object".into(),
        Kind::Bool => "Boolean?".into(),
        Kind::Int => "Long?".into(),
        Kind::Float => "Double?".into(),
        Kind::Date => "DateTime?".into(),
        Kind::Str => "String".into(),
        Kind::Shape(name) => name.clone(),
        Kind::List(elem) => format!("List(Of {})", type_token(elem)),
    }
}
