//! Swift struct/class generation with Codable conformance.

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
pub struct SwiftOptions {
    /// `struct` when true, `class` when false.
    pub use_struct: bool,
    pub optional_fields: bool,
    /// Conform to `Codable` and emit `CodingKeys` where keys differ.
    pub codable: bool,
    /// Annotate each declaration with `@MainActor`.
    pub is_main_actor: bool,
}

impl Default for SwiftOptions {
    fn default() -> Self {
        Self { use_struct: true, optional_fields: true, codable: true, is_main_actor: false }
    }
}

pub fn generate(json: &Value, root_name: &str, options: &SwiftOptions) -> Result<String, Error> {
    let root = require_object(json, INVALID_INPUT, true)?;
    let shapes = discover(root, root_name, KeyOrder::Insertion);

    let mut out = String::new();
    out.push_str("import Foundation\n");
    for shape in shapes.iter().rev() {
        out.push('\n');
        render_declaration(&mut out, shape, options);
    }
    Ok(out)
}

fn render_declaration(out: &mut String, shape: &Shape, options: &SwiftOptions) {
    if options.is_main_actor {
        out.push_str("@MainActor\n");
    }
    let keyword = if options.use_struct { "struct" } else { "class" };
    let conformance = if options.codable { ": Codable" } else { "" };
    out.push_str(&format!("{keyword} {}{conformance} {{\n", shape.name));

    for field in &shape.fields {
        let ident = to_camel_case(&field.key);
        let ty = type_token(&field.kind);
        let optional = if options.optional_fields { "?" } else { "" };
        out.push_str(&format!("    var {ident}: {ty}{optional}\n"));
    }

    // CodingKeys only when some identifier diverges from its JSON key.
    let needs_keys = options.codable
        && shape.fields.iter().any(|f| to_camel_case(&f.key) != f.key);
    if needs_keys {
        out.push('\n');
        out.push_str("    enum CodingKeys: String, CodingKey {\n");
        for field in &shape.fields {
            let ident = to_camel_case(&field.key);
            if ident == field.key {
                out.push_str(&format!("        case {ident}\n"));
            } else {
                out.push_str(&format!("        case {ident} = \"{}\"\n", field.key));
            }
        }
        out.push_str("    }\n");
    }
    out.push_str("}\n");
}

fn type_token(kind: &Kind) -> String {
    match kind {
        Kind::Null | Kind::Unknown => "Any".into(),
        Kind::Bool => "Bool".into(),
        Kind::Int => "Int".into(),
        Kind::Float => "Double".into(),
        Kind::Date => "Date".into(),
        Kind::Str => "String".into(),
        Kind::Shape(name) => name.clone(),
        Kind::List(elem) => format!("[{}]", type_token(elem)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "id": 1,
            "display_name": "a",
            "created_at": "2025-07-29T12:00:00Z",
            "settings": {"dark_mode": true},
            "scores": [1.5]
        })
    }

    #[test]
    fn codable_structs_with_coding_keys() {
        let out = generate(&sample(), "User", &SwiftOptions::default()).unwrap();
        assert!(out.starts_with("import Foundation\n"));
        assert!(out.contains("struct User: Codable {\n"));
        assert!(out.contains("    var id: Int?\n"));
        assert!(out.contains("    var displayName: String?\n"));
        assert!(out.contains("    var createdAt: Date?\n"));
        assert!(out.contains("    var settings: Settings?\n"));
        assert!(out.contains("    var scores: [Double]?\n"));
        assert!(out.contains("        case id\n"));
        assert!(out.contains("        case displayName = \"display_name\"\n"));
        // Settings is declared before User.
        assert!(out.find("struct Settings").unwrap() < out.find("struct User").unwrap());
    }

    #[test]
    fn coding_keys_skipped_when_no_key_differs() {
        let out = generate(&json!({"id": 1, "name": "x"}), "M", &SwiftOptions::default()).unwrap();
        assert!(!out.contains("CodingKeys"));
    }

    #[test]
    fn main_actor_adds_exactly_one_line_per_type() {
        let base = generate(&sample(), "User", &SwiftOptions::default()).unwrap();
        let actor = generate(
            &sample(),
            "User",
            &SwiftOptions { is_main_actor: true, ..Default::default() },
        )
        .unwrap();
        assert_eq!(actor.matches("@MainActor\n").count(), 2);
        assert_eq!(actor.replace("@MainActor\n", ""), base);
    }

    #[test]
    fn class_mode_and_required_fields() {
        let out = generate(
            &json!({"id": 1}),
            "M",
            &SwiftOptions { use_struct: false, optional_fields: false, ..Default::default() },
        )
        .unwrap();
        assert!(out.contains("class M: Codable {\n"));
        assert!(out.contains("    var id: Int\n"));
    }

    #[test]
    fn empty_object_is_rejected() {
        let err = generate(&json!({}), "Empty", &SwiftOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid or empty JSON object provided.");
    }
}
