//! TypeScript type/interface generation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::infer::{KeyOrder, discover};
use crate::ir::Kind;
use crate::naming::to_camel_case;
use crate::output::require_object;

const INVALID_INPUT: &str = "Invalid or empty JSON object provided.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeScriptOptions {
    /// `type X = {...}` when true, `interface X {...}` when false.
    pub use_type: bool,
    /// Append `?` to every field.
    pub optional_fields: bool,
    /// Prefix every field with `readonly`.
    pub readonly_fields: bool,
    /// Append `| null` to every field type.
    pub allow_nulls: bool,
}

impl Default for TypeScriptOptions {
    fn default() -> Self {
        Self {
            use_type: true,
            optional_fields: true,
            readonly_fields: true,
            allow_nulls: false,
        }
    }
}

pub fn generate(json: &Value, root_name: &str, options: &TypeScriptOptions) -> Result<String, Error> {
    let root = require_object(json, INVALID_INPUT, true)?;
    let shapes = discover(root, root_name, KeyOrder::Insertion);

    let mut out = String::new();
    for (i, shape) in shapes.iter().rev().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if options.use_type {
            out.push_str(&format!("export type {} = {{\n", shape.name));
        } else {
            out.push_str(&format!("export interface {} {{\n", shape.name));
        }
        for field in &shape.fields {
            let ident = to_camel_case(&field.key);
            let modifier = if options.readonly_fields { "readonly " } else { "" };
            let optional = if options.optional_fields { "?" } else { "" };
            let mut ty = type_token(&field.kind);
            if options.allow_nulls && field.kind != Kind::Null {
                ty.push_str(" | null");
            }
            out.push_str(&format!("  {modifier}{ident}{optional}: {ty};\n"));
        }
        if options.use_type {
            out.push_str("};\n");
        } else {
            out.push_str("}\n");
        }
    }
    Ok(out)
}

fn type_token(kind: &Kind) -> String {
    match kind {
        Kind::Null => "null".into(),
        Kind::Bool => "boolean".into(),
        Kind::Int | Kind::Float => "number".into(),
        Kind::Date => "Date | string".into(),
        Kind::Str => "string".into(),
        Kind::Shape(name) => name.clone(),
        Kind::Unknown => "any".into(),
        Kind::List(elem) => {
            let inner = type_token(elem);
            if inner.contains(" | ") {
                format!("({inner})[]")
            } else {
                format!("{inner}[]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_data() -> Value {
        json!({
            "id": 123,
            "name": "Test User",
            "is_active": true,
            "created_at": "2025-07-29T12:00:00Z",
            "preferences": {"newsletter": false},
            "roles": ["admin", "editor"],
            "profile_picture": null
        })
    }

    #[test]
    fn default_options_render_readonly_optional_types() {
        let out = generate(&user_data(), "UserData", &TypeScriptOptions::default()).unwrap();
        assert!(out.contains("export type Preferences = {\n  readonly newsletter?: boolean;\n};\n"));
        assert!(out.contains("export type UserData = {"));
        assert!(out.contains("  readonly id?: number;\n"));
        assert!(out.contains("  readonly name?: string;\n"));
        assert!(out.contains("  readonly isActive?: boolean;\n"));
        assert!(out.contains("  readonly createdAt?: Date | string;\n"));
        assert!(out.contains("  readonly preferences?: Preferences;\n"));
        assert!(out.contains("  readonly roles?: string[];\n"));
        assert!(out.contains("  readonly profilePicture?: null;\n"));
        // Nested type is declared before the root that references it.
        assert!(out.find("Preferences = {").unwrap() < out.find("UserData = {").unwrap());
    }

    #[test]
    fn interface_mode_drops_the_assignment_form() {
        let opts = TypeScriptOptions { use_type: false, ..Default::default() };
        let out = generate(&user_data(), "UserData", &opts).unwrap();
        assert!(out.contains("export interface UserData {"));
        assert!(!out.contains("export type"));
    }

    #[test]
    fn option_toggles_are_orthogonal() {
        let base = generate(&user_data(), "UserData", &TypeScriptOptions::default()).unwrap();
        let no_readonly = generate(
            &user_data(),
            "UserData",
            &TypeScriptOptions { readonly_fields: false, ..Default::default() },
        )
        .unwrap();
        assert_eq!(base.replace("readonly ", ""), no_readonly);

        let no_optional = generate(
            &user_data(),
            "UserData",
            &TypeScriptOptions { optional_fields: false, ..Default::default() },
        )
        .unwrap();
        assert_eq!(base.replace("?:", ":"), no_optional);
    }

    #[test]
    fn allow_nulls_appends_null_everywhere_except_null_fields() {
        let opts = TypeScriptOptions { allow_nulls: true, ..Default::default() };
        let out = generate(&user_data(), "UserData", &opts).unwrap();
        assert!(out.contains("readonly id?: number | null;"));
        assert!(out.contains("readonly createdAt?: Date | string | null;"));
        assert!(out.contains("readonly profilePicture?: null;"));
    }

    #[test]
    fn date_arrays_are_parenthesized() {
        let doc = json!({"stamps": ["2025-07-29T12:00:00Z"]});
        let out = generate(&doc, "Log", &TypeScriptOptions::default()).unwrap();
        assert!(out.contains("readonly stamps?: (Date | string)[];"));
    }

    #[test]
    fn empty_object_is_rejected_with_exact_message() {
        let err = generate(&json!({}), "Empty", &TypeScriptOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid or empty JSON object provided.");
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate(&user_data(), "UserData", &TypeScriptOptions::default()).unwrap();
        let b = generate(&user_data(), "UserData", &TypeScriptOptions::default()).unwrap();
        assert_eq!(a, b);
    }
}
