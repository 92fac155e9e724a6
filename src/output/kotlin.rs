//! Kotlin data class generation with pluggable serialization annotations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::infer::{KeyOrder, discover};
use crate::ir::Kind;
use crate::naming::to_camel_case;
use crate::output::require_object;

const INVALID_INPUT: &str = "Invalid or empty JSON object provided.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KotlinSerialization {
    /// `@Serializable` + `@SerialName` (kotlinx.serialization).
    Kotlinx,
    /// `@SerializedName` (Gson).
    Gson,
    /// No annotations.
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KotlinOptions {
    pub use_data_class: bool,
    /// `T? = null` fields when true, plain `T` when false.
    pub nullable_fields: bool,
    pub serialization: KotlinSerialization,
}

impl Default for KotlinOptions {
    fn default() -> Self {
        Self {
            use_data_class: true,
            nullable_fields: true,
            serialization: KotlinSerialization::Kotlinx,
        }
    }
}

pub fn generate(json: &Value, root_name: &str, options: &KotlinOptions) -> Result<String, Error> {
    let root = require_object(json, INVALID_INPUT, true)?;
    let shapes = discover(root, root_name, KeyOrder::Insertion);

    let mut out = String::new();
    match options.serialization {
        KotlinSerialization::Kotlinx => {
            out.push_str("import kotlinx.serialization.SerialName\n");
            out.push_str("import kotlinx.serialization.Serializable\n");
        }
        KotlinSerialization::Gson => {
            out.push_str("import com.google.gson.annotations.SerializedName\n");
        }
        KotlinSerialization::None => {}
    }

    for shape in shapes.iter().rev() {
        if !out.is_empty() {
            out.push('\n');
        }
        if options.serialization == KotlinSerialization::Kotlinx {
            out.push_str("@Serializable\n");
        }
        let keyword = if options.use_data_class { "data class" } else { "class" };
        out.push_str(&format!("{keyword} {}(\n", shape.name));
        for (i, field) in shape.fields.iter().enumerate() {
            let ident = to_camel_case(&field.key);
            let annotation = match options.serialization {
                KotlinSerialization::Kotlinx if ident != field.key => {
                    format!("@SerialName(\"{}\") ", field.key)
                }
                KotlinSerialization::Gson => format!("@SerializedName(\"{}\") ", field.key),
                _ => String::new(),
            };
            let ty = type_token(&field.kind);
            let suffix = if options.nullable_fields { "? = null" } else { "" };
            let comma = if i + 1 < shape.fields.len() { "," } else { "" };
            out.push_str(&format!("    {annotation}val {ident}: {ty}{suffix}{comma}\n"));
        }
        out.push_str(")\n");
    }
    Ok(out)
}

fn type_token(kind: &Kind) -> String {
    match kind {
        Kind::Null | Kind::Unknown => "Any".into(),
        Kind::Bool => "Boolean".into(),
        Kind::Int => "Int".into(),
        Kind::Float => "Double".into(),
        Kind::Date | Kind::Str => "String".into(),
        Kind::Shape(name) => name.clone(),
        Kind::List(elem) => format!("List<{}>", type_token(elem)),
    }
}
