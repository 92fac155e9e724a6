//! C++ struct generation over nlohmann::json.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::infer::{KeyOrder, discover};
use crate::ir::{Kind, shapes_mention};
use crate::naming::to_snake_case;
use crate::output::require_object;

const INVALID_INPUT: &str = "Invalid or empty JSON object";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CppOptions {
    /// Wrap every field in `std::optional<T>`.
    pub use_optional: bool,
    /// Emit `NLOHMANN_DEFINE_TYPE_NON_INTRUSIVE_WITH_DEFAULT` per struct.
    pub json_serialization: bool,
}

impl Default for CppOptions {
    fn default() -> Self {
        Self { use_optional: true, json_serialization: true }
    }
}

pub fn generate(json: &Value, root_name: &str, options: &CppOptions) -> Result<String, Error> {
    let root = require_object(json, INVALID_INPUT, true)?;
    // C++ emission sorts object keys alphabetically.
    let shapes = discover(root, root_name, KeyOrder::Sorted);

    let mut out = String::new();
    if shapes_mention(&shapes, |k| matches!(k, Kind::Int)) {
        out.push_str("#include <cstdint>\n");
    }
    if options.use_optional {
        out.push_str("#include <optional>\n");
    }
    if shapes_mention(&shapes, |k| matches!(k, Kind::Str | Kind::Date)) {
        out.push_str("#include <string>\n");
    }
    if shapes_mention(&shapes, |k| matches!(k, Kind::List(_))) {
        out.push_str("#include <vector>\n");
    }
    if options.json_serialization
        || shapes_mention(&shapes, |k| matches!(k, Kind::Null | Kind::Unknown))
    {
        out.push_str("\n#include <nlohmann/json.hpp>\n");
    }

    for shape in shapes.iter().rev() {
        out.push('\n');
        out.push_str(&format!("struct {} {{\n", shape.name));
        for field in &shape.fields {
            let ident = to_snake_case(&field.key);
            let base = type_token(&field.kind);
            let ty = if options.use_optional {
                format!("std::optional<{base}>")
            } else {
                base
            };
            out.push_str(&format!("    {ty} {ident};\n"));
        }
        out.push_str("};\n");
        if options.json_serialization {
            let idents: Vec<String> =
                shape.fields.iter().map(|f| to_snake_case(&f.key)).collect();
            out.push_str(&format!(
                "NLOHMANN_DEFINE_TYPE_NON_INTRUSIVE_WITH_DEFAULT({}, {})\n",
                shape.name,
                idents.join(", ")
            ));
        }
    }
    Ok(out)
}

fn type_token(kind: &Kind) -> String {
    match kind {
        Kind::Null | Kind::Unknown => "nlohmann::json".into(),
        Kind::Bool => "bool".into(),
        Kind::Int => "int64_t".into(),
        Kind::Float => "double".into(),
        Kind::Date | Kind::Str => "std::string".into(),
        Kind::Shape(name) => name.clone(),
        Kind::List(elem) => format!("std::vector<{}>", type_token(elem)),
    }
}
