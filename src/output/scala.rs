//! Scala case class generation.

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
pub struct ScalaOptions {
    /// `Option[T] = None` fields instead of bare types.
    pub use_option_types: bool,
}

impl Default for ScalaOptions {
    fn default() -> Self {
        Self { use_option_types: true }
    }
}

pub fn generate(json: &Value, root_name: &str, options: &ScalaOptions) -> Result<String, Error> {
    let root = require_object(json, INVALID_INPUT, true)?;
    let shapes = discover(root, root_name, KeyOrder::Insertion);

    let mut out = String::new();
    for (i, shape) in shapes.iter().rev().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("case class {}(\n", shape.name));
        for (j, field) in shape.fields.iter().enumerate() {
            let ident = to_camel_case(&field.key);
            let ty = type_token(&field.kind);
            let comma = if j + 1 < shape.fields.len() { "," } else { "" };
            if options.use_option_types && !matches!(field.kind, Kind::Null | Kind::Unknown) {
                out.push_str(&format!("  {ident}: Option[{ty}] = None{comma}\n"));
            } else {
                out.push_str(&format!("  {ident}: {ty}{comma}\n"));
            }
        }
        out.push_str(")\n");
    }
    Ok(out)
}

fn type_token(kind: &Kind) -> String {
    match kind {
        Kind::Null | Kind::Unknown => "Any".into(),
        Kind::Bool => "Boolean".into(),
        Kind::Int => "Long".into(),
        Kind::Float => "Double".into(),
        Kind::Date => "java.time.Instant".into(),
        Kind::Str => "String".into(),
        Kind::Shape(name) => name.clone(),
        Kind::List(elem) => format!("Seq[{}]", type_token(elem)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "user_id": 1,
            "name": "a",
            "score": 1.5,
            "joined": "2025-07-29T12:00:00Z",
            "profile": {"bio": "b"},
            "tags": ["x"],
            "extra": null
        })
    }

    #[test]
    fn option_wrapped_case_classes() {
        let out = generate(&sample(), "User", &ScalaOptions::default()).unwrap();
        assert!(out.contains("case class User(\n"));
        assert!(out.contains("  userId: Option[Long] = None,\n"));
        assert!(out.contains("  name: Option[String] = None,\n"));
        assert!(out.contains("  score: Option[Double] = None,\n"));
        assert!(out.contains("  joined: Option[java.time.Instant] = None,\n"));
        assert!(out.contains("  profile: Option[Profile] = None,\n"));
        assert!(out.contains("  tags: Option[Seq[String]] = None,\n"));
        // Null fields stay Any, never Option[Any].
        assert!(out.contains("  extra: Any\n"));
        assert!(out.find("case class Profile").unwrap() < out.find("case class User").unwrap());
    }

    #[test]
    fn bare_types_without_option() {
        let opts = ScalaOptions { use_option_types: false };
        let out = generate(&sample(), "User", &opts).unwrap();
        assert!(out.contains("  userId: Long,\n"));
        assert!(out.contains("  tags: Seq[String],\n"));
        assert!(!out.contains("Option["));
    }

    #[test]
    fn empty_object_is_rejected() {
        let err = generate(&json!({}), "Empty", &ScalaOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid or empty JSON object provided.");
    }
}
