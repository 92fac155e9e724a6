//! Ruby class generation with attr_accessor and hash-based initialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::infer::{KeyOrder, discover};
use crate::ir::Kind;
use crate::naming::to_snake_case;
use crate::output::require_object;

const INVALID_INPUT: &str = "Invalid or empty JSON object provided.";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RubyOptions {
    /// `initialize(id: nil, ...)` keyword arguments instead of a hash.
    pub keyword_init: bool,
}

pub fn generate(json: &Value, root_name: &str, options: &RubyOptions) -> Result<String, Error> {
    let root = require_object(json, INVALID_INPUT, true)?;
    let shapes = discover(root, root_name, KeyOrder::Insertion);

    let mut out = String::new();
    for (i, shape) in shapes.iter().rev().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("class {}\n", shape.name));
        let idents: Vec<String> = shape.fields.iter().map(|f| to_snake_case(&f.key)).collect();
        let symbols: Vec<String> = idents.iter().map(|i| format!(":{i}")).collect();
        out.push_str(&format!("  attr_accessor {}\n\n", symbols.join(", ")));

        if options.keyword_init {
            let params: Vec<String> = idents.iter().map(|i| format!("{i}: nil")).collect();
            out.push_str(&format!("  def initialize({})\n", params.join(", ")));
            for ident in &idents {
                out.push_str(&format!("    @{ident} = {ident}\n"));
            }
        } else {
            out.push_str("  def initialize(attributes = {})\n");
            for field in &shape.fields {
                let ident = to_snake_case(&field.key);
                let access = format!("attributes['{}']", field.key);
                let expr = match &field.kind {
                    Kind::Shape(name) => format!("{name}.new({access}) if {access}"),
                    Kind::List(elem) => match elem.as_ref() {
                        Kind::Shape(name) => format!(
                            "({access} || []).map {{ |item| {name}.new(item) }}"
                        ),
                        _ => access,
                    },
                    _ => access,
                };
                out.push_str(&format!("    @{ident} = {expr}\n"));
            }
        }
        out.push_str("  end\nend\n");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "userName": "a",
            "profile": {"bio": "b"},
            "posts": [{"title": "t"}]
        })
    }

    #[test]
    fn hash_init_with_nested_construction() {
        let out = generate(&sample(), "Account", &RubyOptions::default()).unwrap();
        assert!(out.contains("class Account\n"));
        assert!(out.contains("  attr_accessor :user_name, :profile, :posts\n"));
        assert!(out.contains("  def initialize(attributes = {})\n"));
        assert!(out.contains("    @user_name = attributes['userName']\n"));
        assert!(out.contains("    @profile = Profile.new(attributes['profile']) if attributes['profile']\n"));
        assert!(out.contains("    @posts = (attributes['posts'] || []).map { |item| Post.new(item) }\n"));
        assert!(out.find("class Post").unwrap() < out.find("class Account").unwrap());
    }

    #[test]
    fn keyword_init_uses_named_parameters() {
        let out = generate(
            &json!({"a": 1, "b": 2}),
            "M",
            &RubyOptions { keyword_init: true },
        )
        .unwrap();
        assert!(out.contains("  def initialize(a: nil, b: nil)\n"));
        assert!(out.contains("    @a = a\n"));
    }

    #[test]
    fn empty_object_is_rejected() {
        let err = generate(&json!({}), "Empty", &RubyOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid or empty JSON object provided.");
    }
}
