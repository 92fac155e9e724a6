//! Dart class generation with fromJson/toJson glue.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::infer::{KeyOrder, discover};
use crate::ir::{Kind, Literal, Shape};
use crate::naming::to_camel_case;
use crate::output::require_object;

const INVALID_INPUT: &str = "Invalid or empty JSON object provided.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DartOptions {
    /// `int? id;` style fields. Forced off by `required_fields`.
    pub nullable_fields: bool,
    /// Non-null `final` fields with `required` constructor parameters.
    pub required_fields: bool,
    /// Seed scalar constructor parameters with the sampled JSON values.
    pub use_values_as_defaults: bool,
    /// Map ISO date-time strings to `DateTime` (with parse/serialize glue).
    pub support_date_time: bool,
    /// Emit `fromJson` factory and `toJson` method.
    pub json_methods: bool,
}

impl Default for DartOptions {
    fn default() -> Self {
        Self {
            nullable_fields: true,
            required_fields: false,
            use_values_as_defaults: false,
            support_date_time: true,
            json_methods: true,
        }
    }
}

impl DartOptions {
    /// `required_fields` and `nullable_fields` are mutually exclusive;
    /// `required_fields` wins. Other generators do not cross-validate —
    /// this normalization is specific to the Dart backend.
    fn normalized(&self) -> DartOptions {
        let mut opts = self.clone();
        if opts.required_fields {
            opts.nullable_fields = false;
        }
        opts
    }
}

/// Empty objects degenerate into a zero-field class rather than erroring.
pub fn generate(json: &Value, root_name: &str, options: &DartOptions) -> Result<String, Error> {
    let root = require_object(json, INVALID_INPUT, false)?;
    let options = options.normalized();
    let shapes = discover(root, root_name, KeyOrder::Insertion);

    let mut out = String::new();
    for (i, shape) in shapes.iter().rev().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_class(&mut out, shape, &options);
    }
    Ok(out)
}

fn render_class(out: &mut String, shape: &Shape, options: &DartOptions) {
    out.push_str(&format!("class {} {{\n", shape.name));

    for field in &shape.fields {
        let ident = to_camel_case(&field.key);
        let ty = type_token(&field.kind, options);
        if options.required_fields {
            out.push_str(&format!("  final {ty} {ident};\n"));
        } else if options.nullable_fields && !matches!(field.kind, Kind::Null | Kind::Unknown) {
            out.push_str(&format!("  {ty}? {ident};\n"));
        } else {
            out.push_str(&format!("  {ty} {ident};\n"));
        }
    }

    // Constructor.
    out.push('\n');
    if shape.fields.is_empty() {
        out.push_str(&format!("  {}();\n", shape.name));
    } else {
        out.push_str(&format!("  {}({{\n", shape.name));
        for field in &shape.fields {
            let ident = to_camel_case(&field.key);
            if options.required_fields {
                out.push_str(&format!("    required this.{ident},\n"));
            } else if options.use_values_as_defaults {
                match default_literal(field.literal.as_ref(), &field.kind, options) {
                    Some(default) => {
                        out.push_str(&format!("    this.{ident} = {default},\n"))
                    }
                    None => out.push_str(&format!("    this.{ident},\n")),
                }
            } else {
                out.push_str(&format!("    this.{ident},\n"));
            }
        }
        out.push_str("  });\n");
    }

    if options.json_methods {
        render_from_json(out, shape, options);
        render_to_json(out, shape, options);
    }
    out.push_str("}\n");
}

fn render_from_json(out: &mut String, shape: &Shape, options: &DartOptions) {
    out.push('\n');
    out.push_str(&format!(
        "  factory {0}.fromJson(Map<String, dynamic> json) {{\n    return {0}(\n",
        shape.name
    ));
    for field in &shape.fields {
        let ident = to_camel_case(&field.key);
        let access = format!("json['{}']", field.key);
        let expr = match &field.kind {
            Kind::Shape(name) => {
                format!("{access} != null ? {name}.fromJson({access}) : null")
            }
            Kind::Date if options.support_date_time => {
                format!("{access} != null ? DateTime.parse({access}) : null")
            }
            Kind::List(elem) => match elem.as_ref() {
                Kind::Shape(name) => format!(
                    "{access} != null ? ({access} as List).map((item) => {name}.fromJson(item)).toList() : null"
                ),
                Kind::Null | Kind::Unknown => access.clone(),
                _ => format!(
                    "{access} != null ? List<{}>.from({access}) : null",
                    type_token(elem, options)
                ),
            },
            _ => access.clone(),
        };
        out.push_str(&format!("      {ident}: {expr},\n"));
    }
    out.push_str("    );\n  }\n");
}

fn render_to_json(out: &mut String, shape: &Shape, options: &DartOptions) {
    out.push('\n');
    out.push_str("  Map<String, dynamic> toJson() {\n    return {\n");
    for field in &shape.fields {
        let ident = to_camel_case(&field.key);
        let null_aware = if options.required_fields { "" } else { "?" };
        let expr = match &field.kind {
            Kind::Shape(_) => format!("{ident}{null_aware}.toJson()"),
            Kind::Date if options.support_date_time => {
                format!("{ident}{null_aware}.toIso8601String()")
            }
            Kind::List(elem) => match elem.as_ref() {
                Kind::Shape(_) => {
                    format!("{ident}{null_aware}.map((item) => item.toJson()).toList()")
                }
                _ => ident.clone(),
            },
            _ => ident.clone(),
        };
        out.push_str(&format!("      '{}': {expr},\n", field.key));
    }
    out.push_str("    };\n  }\n");
}

/// Defaults apply to scalar fields only; dates, shapes and lists keep the
/// plain parameter form even when `useValuesAsDefaults` is on.
fn default_literal(
    literal: Option<&Literal>,
    kind: &Kind,
    options: &DartOptions,
) -> Option<String> {
    if options.support_date_time && matches!(kind, Kind::Date) {
        return None;
    }
    match literal? {
        Literal::Bool(b) => Some(b.to_string()),
        Literal::Int(i) => Some(i.to_string()),
        Literal::Float(f) => Some(f.to_string()),
        Literal::Str(s) => Some(format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))),
    }
}

fn type_token(kind: &Kind, options: &DartOptions) -> String {
    match kind {
        Kind::Null | Kind::Unknown => "dynamic".into(),
        Kind::Bool => "bool".into(),
        Kind::Int => "int".into(),
        Kind::Float => "double".into(),
        Kind::Date => {
            if options.support_date_time {
                "DateTime".into()
            } else {
                "String".into()
            }
        }
        Kind::Str => "String".into(),
        Kind::Shape(name) => name.clone(),
        Kind::List(elem) => format!("List<{}>", type_token(elem, options)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "id": 42,
            "title": "hello",
            "rating": 4.5,
            "created_at": "2025-07-29T12:00:00Z",
            "author": {"name": "a"},
            "comments": [{"body": "b"}],
            "tags": ["x"]
        })
    }

    #[test]
    fn default_options_render_nullable_fields_with_json_glue() {
        let out = generate(&sample(), "Post", &DartOptions::default()).unwrap();
        assert!(out.contains("class Post {\n"));
        assert!(out.contains("  int? id;\n"));
        assert!(out.contains("  double? rating;\n"));
        assert!(out.contains("  DateTime? createdAt;\n"));
        assert!(out.contains("  Author? author;\n"));
        assert!(out.contains("  List<Comment>? comments;\n"));
        assert!(out.contains("  List<String>? tags;\n"));
        assert!(out.contains(
            "      createdAt: json['created_at'] != null ? DateTime.parse(json['created_at']) : null,\n"
        ));
        assert!(out.contains(
            "      comments: json['comments'] != null ? (json['comments'] as List).map((item) => Comment.fromJson(item)).toList() : null,\n"
        ));
        assert!(out.contains("      'created_at': createdAt?.toIso8601String(),\n"));
        assert!(out.contains("      'author': author?.toJson(),\n"));
    }

    #[test]
    fn empty_object_degenerates_instead_of_throwing() {
        let out = generate(&json!({}), "EmptyModel", &DartOptions::default()).unwrap();
        assert!(out.contains("class EmptyModel {\n"));
        assert!(out.contains("  EmptyModel();\n"));
        assert!(out.contains("  factory EmptyModel.fromJson(Map<String, dynamic> json) {\n"));
        assert!(out.contains("  Map<String, dynamic> toJson() {\n    return {\n    };\n  }\n"));
    }

    #[test]
    fn required_fields_force_nullable_off() {
        let opts = DartOptions {
            required_fields: true,
            nullable_fields: true, // contradictory on purpose; required wins
            ..Default::default()
        };
        let out = generate(&sample(), "Post", &opts).unwrap();
        assert!(out.contains("  final int id;\n"));
        assert!(!out.contains("int? id"));
        assert!(out.contains("    required this.id,\n"));
        assert!(out.contains("      'author': author.toJson(),\n"));
    }

    #[test]
    fn values_as_defaults_seed_scalar_parameters_only() {
        let opts = DartOptions { use_values_as_defaults: true, ..Default::default() };
        let out = generate(&sample(), "Post", &opts).unwrap();
        assert!(out.contains("    this.id = 42,\n"));
        assert!(out.contains("    this.title = 'hello',\n"));
        assert!(out.contains("    this.rating = 4.5,\n"));
        // Dates, shapes, and lists stay plain parameters.
        assert!(out.contains("    this.createdAt,\n"));
        assert!(out.contains("    this.author,\n"));
        assert!(out.contains("    this.comments,\n"));
    }

    #[test]
    fn date_time_support_toggles_to_plain_strings() {
        let opts = DartOptions { support_date_time: false, ..Default::default() };
        let out = generate(&sample(), "Post", &opts).unwrap();
        assert!(out.contains("  String? createdAt;\n"));
        assert!(out.contains("      createdAt: json['created_at'],\n"));
        assert!(out.contains("      'created_at': createdAt,\n"));
        assert!(!out.contains("DateTime"));
    }

    #[test]
    fn non_object_root_still_errors() {
        let err = generate(&json!("nope"), "X", &DartOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid or empty JSON object provided.");
    }
}
