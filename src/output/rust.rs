//! Rust struct generation with serde derives.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::infer::{KeyOrder, discover};
use crate::ir::{Kind, shapes_mention};
use crate::naming::to_snake_case;
use crate::output::require_object;

const INVALID_INPUT: &str = "Invalid or empty JSON object provided.";

// Field identifiers that would collide with Rust keywords get raw-ident form.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern", "fn",
    "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
    "return", "static", "struct", "trait", "true", "false", "type", "unsafe", "use", "where",
    "while",
];

// Keywords the raw-ident syntax cannot express; these get a trailing `_`.
const UNRAWABLE: &[&str] = &["crate", "self", "super"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RustOptions {
    pub derive_serde: bool,
    /// Add `#[serde(default)]` to every field.
    pub use_serde_default: bool,
    pub derive_debug: bool,
    pub derive_clone: bool,
    /// Map ISO date-time strings to `DateTime<Utc>` instead of `String`.
    pub use_chrono: bool,
}

impl Default for RustOptions {
    fn default() -> Self {
        Self {
            derive_serde: true,
            use_serde_default: false,
            derive_debug: true,
            derive_clone: true,
            use_chrono: false,
        }
    }
}

pub fn generate(json: &Value, root_name: &str, options: &RustOptions) -> Result<String, Error> {
    let root = require_object(json, INVALID_INPUT, true)?;
    // Rust emission sorts object keys alphabetically.
    let shapes = discover(root, root_name, KeyOrder::Sorted);

    let mut out = String::new();
    if options.use_chrono && shapes_mention(&shapes, |k| matches!(k, Kind::Date)) {
        out.push_str("use chrono::{DateTime, Utc};\n");
    }
    if options.derive_serde {
        out.push_str("use serde::{Deserialize, Serialize};\n");
    }

    for shape in shapes.iter().rev() {
        out.push('\n');
        let derives = derive_list(options);
        if !derives.is_empty() {
            out.push_str(&format!("#[derive({})]\n", derives.join(", ")));
        }
        out.push_str(&format!("pub struct {} {{\n", shape.name));
        for field in &shape.fields {
            let ident = escape_ident(&to_snake_case(&field.key));
            // Raw idents serialize without the r# prefix; trailing-underscore
            // escapes do not, so they always need a rename.
            let serialized = ident.strip_prefix("r#").unwrap_or(&ident);
            if options.derive_serde && serialized != field.key {
                out.push_str(&format!("    #[serde(rename = \"{}\")]\n", field.key));
            }
            if options.derive_serde && options.use_serde_default {
                out.push_str("    #[serde(default)]\n");
            }
            let ty = type_token(&field.kind, options);
            out.push_str(&format!("    pub {ident}: Option<{ty}>,\n"));
        }
        out.push_str("}\n");
    }
    Ok(out)
}

fn derive_list(options: &RustOptions) -> Vec<&'static str> {
    let mut derives = Vec::new();
    if options.derive_debug {
        derives.push("Debug");
    }
    if options.derive_clone {
        derives.push("Clone");
    }
    if options.derive_serde {
        derives.push("Serialize");
        derives.push("Deserialize");
    }
    derives
}

fn escape_ident(ident: &str) -> String {
    if UNRAWABLE.contains(&ident) {
        format!("{ident}_")
    } else if KEYWORDS.contains(&ident) {
        format!("r#{ident}")
    } else {
        ident.to_string()
    }
}

fn type_token(kind: &Kind, options: &RustOptions) -> String {
    match kind {
        Kind::Null | Kind::Unknown => "serde_json::Value".into(),
        Kind::Bool => "bool".into(),
        Kind::Int => "i64".into(),
        Kind::Float => "f64".into(),
        Kind::Date => {
            if options.use_chrono {
                "DateTime<Utc>".into()
            } else {
                "String".into()
            }
        }
        Kind::Str => "String".into(),
        Kind::Shape(name) => name.clone(),
        Kind::List(elem) => format!("Vec<{}>", type_token(elem, options)),
    }
}
