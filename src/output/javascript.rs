//! JavaScript class generation (ES2020, constructor-based hydration).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::infer::{KeyOrder, discover};
use crate::ir::{Kind, Shape};
use crate::naming::to_camel_case;
use crate::output::require_object;

const INVALID_INPUT: &str = "Invalid or empty JSON object provided.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JavaScriptOptions {
    /// Emit a `@property`-style JSDoc block above each class.
    pub use_jsdoc: bool,
    /// Prefix each class with `export`.
    pub export_classes: bool,
}

impl Default for JavaScriptOptions {
    fn default() -> Self {
        Self { use_jsdoc: true, export_classes: true }
    }
}

/// Empty objects degenerate into a zero-field class rather than erroring.
pub fn generate(json: &Value, root_name: &str, options: &JavaScriptOptions) -> Result<String, Error> {
    let root = require_object(json, INVALID_INPUT, false)?;
    let shapes = discover(root, root_name, KeyOrder::Insertion);

    let mut out = String::new();
    for (i, shape) in shapes.iter().rev().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_class(&mut out, shape, options);
    }
    Ok(out)
}

fn render_class(out: &mut String, shape: &Shape, options: &JavaScriptOptions) {
    if options.use_jsdoc && !shape.fields.is_empty() {
        out.push_str("/**\n");
        for field in &shape.fields {
            let ident = to_camel_case(&field.key);
            out.push_str(&format!(" * @property {{{}}} {}\n", jsdoc_token(&field.kind), ident));
        }
        out.push_str(" */\n");
    }
    let export = if options.export_classes { "export " } else { "" };
    out.push_str(&format!("{export}class {} {{\n", shape.name));
    out.push_str("  constructor(data = {}) {\n");
    for field in &shape.fields {
        let ident = to_camel_case(&field.key);
        let access = format!("data['{}']", field.key);
        let expr = match &field.kind {
            Kind::Shape(name) => {
                format!("{access} != null ? new {name}({access}) : null")
            }
            Kind::List(elem) => match elem.as_ref() {
                Kind::Shape(name) => format!(
                    "Array.isArray({access}) ? {access}.map((item) => new {name}(item)) : null"
                ),
                _ => format!("{access} ?? null"),
            },
            _ => format!("{access} ?? null"),
        };
        out.push_str(&format!("    this.{ident} = {expr};\n"));
    }
    out.push_str("  }\n");
    out.push_str("}\n");
}

fn jsdoc_token(kind: &Kind) -> String {
    match kind {
        Kind::Null | Kind::Unknown => "*".into(),
        Kind::Bool => "boolean".into(),
        Kind::Int | Kind::Float => "number".into(),
        Kind::Date | Kind::Str => "string".into(),
        Kind::Shape(name) => name.clone(),
        Kind::List(elem) => format!("Array<{}>", jsdoc_token(elem)),
    }
}
