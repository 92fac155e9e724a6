//! Python dataclass generation with optional `from_dict` hydration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::infer::{KeyOrder, discover};
use crate::ir::{Kind, Shape, shapes_mention};
use crate::naming::to_snake_case;
use crate::output::require_object;

const INVALID_INPUT: &str = "Invalid or empty JSON object provided.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PythonOptions {
    pub frozen: bool,
    pub slots: bool,
    /// Emit a `from_dict` classmethod mapping original JSON keys.
    pub from_dict: bool,
    /// Map ISO date-time strings to `datetime` (plain `str` when off).
    pub use_datetime: bool,
}

impl Default for PythonOptions {
    fn default() -> Self {
        Self { frozen: false, slots: false, from_dict: true, use_datetime: true }
    }
}

pub fn generate(json: &Value, root_name: &str, options: &PythonOptions) -> Result<String, Error> {
    let root = require_object(json, INVALID_INPUT, true)?;
    let shapes = discover(root, root_name, KeyOrder::Insertion);

    let mut out = String::new();
    out.push_str("from dataclasses import dataclass\n");
    if options.use_datetime && shapes_mention(&shapes, |k| matches!(k, Kind::Date)) {
        out.push_str("from datetime import datetime\n");
    }
    let mut typing: Vec<&str> = Vec::new();
    if shapes_mention(&shapes, |k| matches!(k, Kind::Null | Kind::Unknown)) {
        typing.push("Any");
    }
    if shapes_mention(&shapes, |k| matches!(k, Kind::List(_))) {
        typing.push("List");
    }
    typing.push("Optional");
    out.push_str(&format!("from typing import {}\n", typing.join(", ")));

    for shape in shapes.iter().rev() {
        out.push('\n');
        render_class(&mut out, shape, options);
    }
    Ok(out)
}

fn render_class(out: &mut String, shape: &Shape, options: &PythonOptions) {
    out.push('\n');
    let mut args: Vec<&str> = Vec::new();
    if options.frozen {
        args.push("frozen=True");
    }
    if options.slots {
        args.push("slots=True");
    }
    if args.is_empty() {
        out.push_str("@dataclass\n");
    } else {
        out.push_str(&format!("@dataclass({})\n", args.join(", ")));
    }
    out.push_str(&format!("class {}:\n", shape.name));
    for field in &shape.fields {
        let ident = to_snake_case(&field.key);
        let ty = type_token(&field.kind, options);
        out.push_str(&format!("    {ident}: Optional[{ty}] = None\n"));
    }

    if options.from_dict {
        out.push('\n');
        out.push_str("    @classmethod\n");
        out.push_str(&format!(
            "    def from_dict(cls, data: dict) -> \"{}\":\n",
            shape.name
        ));
        out.push_str("        return cls(\n");
        for field in &shape.fields {
            let ident = to_snake_case(&field.key);
            let get = format!("data.get(\"{}\")", field.key);
            let expr = match &field.kind {
                Kind::Shape(name) => format!(
                    "{name}.from_dict({get}) if {get} is not None else None"
                ),
                Kind::Date if options.use_datetime => format!(
                    "datetime.fromisoformat({get}) if {get} is not None else None"
                ),
                Kind::List(elem) => match elem.as_ref() {
                    Kind::Shape(name) => format!(
                        "[{name}.from_dict(item) for item in {get}] if {get} is not None else None"
                    ),
                    _ => get,
                },
                _ => get,
            };
            out.push_str(&format!("            {ident}={expr},\n"));
        }
        out.push_str("        )\n");
    }
}

fn type_token(kind: &Kind, options: &PythonOptions) -> String {
    match kind {
        Kind::Null | Kind::Unknown => "Any".into(),
        Kind::Bool => "bool".into(),
        Kind::Int => "int".into(),
        Kind::Float => "float".into(),
        Kind::Date => {
            if options.use_datetime {
                "datetime".into()
            } else {
                "str".into()
            }
        }
        Kind::Str => "str".into(),
        Kind::Shape(name) => name.clone(),
        Kind::List(elem) => format!("List[{}]", type_token(elem, options)),
    }
}
