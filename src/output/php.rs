//! PHP 8 class generation with typed properties and fromArray hydration.

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
pub struct PhpOptions {
    /// Emit `declare(strict_types=1);` after the opening tag.
    pub strict_types: bool,
    /// Emit a static `fromArray` hydrator per class.
    pub from_array: bool,
}

impl Default for PhpOptions {
    fn default() -> Self {
        Self { strict_types: true, from_array: true }
    }
}

pub fn generate(json: &Value, root_name: &str, options: &PhpOptions) -> Result<String, Error> {
    let root = require_object(json, INVALID_INPUT, true)?;
    let shapes = discover(root, root_name, KeyOrder::Insertion);

    let mut out = String::new();
    out.push_str("<?php\n");
    if options.strict_types {
        out.push_str("\ndeclare(strict_types=1);\n");
    }
    for shape in shapes.iter().rev() {
        out.push('\n');
        render_class(&mut out, shape, options);
    }
    Ok(out)
}

fn render_class(out: &mut String, shape: &Shape, options: &PhpOptions) {
    out.push_str(&format!("class {}\n{{\n", shape.name));
    for field in &shape.fields {
        let ident = to_camel_case(&field.key);
        if let Kind::List(elem) = &field.kind {
            if let Kind::Shape(name) = elem.as_ref() {
                out.push_str(&format!("    /** @var {name}[]|null */\n"));
            }
        }
        out.push_str(&format!(
            "    public {} ${ident} = null;\n",
            type_declaration(&field.kind)
        ));
    }

    if options.from_array {
        out.push('\n');
        out.push_str("    public static function fromArray(array $data): self\n    {\n");
        out.push_str("        $model = new self();\n");
        for field in &shape.fields {
            let ident = to_camel_case(&field.key);
            let access = format!("$data['{}']", field.key);
            let expr = match &field.kind {
                Kind::Shape(name) => format!(
                    "isset({access}) ? {name}::fromArray({access}) : null"
                ),
                Kind::List(elem) => match elem.as_ref() {
                    Kind::Shape(name) => format!(
                        "isset({access}) ? array_map(static fn ($item) => {name}::fromArray($item), {access}) : null"
                    ),
                    _ => format!("{access} ?? null"),
                },
                _ => format!("{access} ?? null"),
            };
            out.push_str(&format!("        $model->{ident} = {expr};\n"));
        }
        out.push_str("        return $model;\n");
        out.push_str("    }\n");
    }
    out.push_str("}\n");
}

fn type_declaration(kind: &Kind) -> String {
    match kind {
        // `mixed` already includes null and cannot take a `?` prefix.
        Kind::Null | Kind::Unknown => "mixed".into(),
        Kind::Bool => "?bool".into(),
        Kind::Int => "?int".into(),
        Kind::Float => "?float".into(),
        Kind::Date | Kind::Str => "?string".into(),
        Kind::Shape(name) => format!("?{name}"),
        Kind::List(_) => "?array".into(),
    }
}
