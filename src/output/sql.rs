//! SQL schema generation: one table per discovered shape.
//!
//! Nested objects become foreign-key columns on the owning table; arrays of
//! objects become child tables carrying a link column back to the owner.
//! Tables emit in reverse discovery order so `REFERENCES` targets for nested
//! objects already exist; the child-to-parent link column is emitted without
//! a `REFERENCES` clause because the parent table appears later in the
//! script.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::infer::{KeyOrder, discover};
use crate::ir::{Kind, Shape};
use crate::naming::to_snake_case;
use crate::output::require_object;

const INVALID_INPUT: &str = "Invalid JSON data";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    Postgres,
    Mysql,
    Sqlite,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SqlOptions {
    pub dialect: SqlDialect,
}

impl Default for SqlOptions {
    fn default() -> Self {
        Self { dialect: SqlDialect::Postgres }
    }
}

pub fn generate(json: &Value, root_name: &str, options: &SqlOptions) -> Result<String, Error> {
    let root = require_object(json, INVALID_INPUT, true)?;
    let shapes = discover(root, root_name, KeyOrder::Insertion);

    // Owner lookup for array-of-object children: child shape name -> owner table.
    let mut owners: Vec<(String, String)> = Vec::new();
    for shape in &shapes {
        for field in &shape.fields {
            if let Kind::List(elem) = &field.kind {
                if let Kind::Shape(child) = elem.as_ref() {
                    owners.push((child.clone(), to_snake_case(&shape.name)));
                }
            }
        }
    }

    let mut out = String::new();
    for (i, shape) in shapes.iter().rev().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_table(&mut out, shape, &owners, options.dialect);
    }
    Ok(out)
}

fn render_table(out: &mut String, shape: &Shape, owners: &[(String, String)], dialect: SqlDialect) {
    let table = to_snake_case(&shape.name);
    out.push_str(&format!("CREATE TABLE {table} (\n"));

    let mut columns: Vec<String> = vec![format!("    id {}", primary_key(dialect))];
    if let Some((_, owner)) = owners.iter().find(|(child, _)| *child == shape.name) {
        columns.push(format!("    {owner}_id {}", integer_type(dialect)));
    }
    for field in &shape.fields {
        let column = to_snake_case(&field.key);
        match &field.kind {
            Kind::Shape(name) => {
                let target = to_snake_case(name);
                columns.push(format!(
                    "    {column}_id {} REFERENCES {target}(id)",
                    integer_type(dialect)
                ));
            }
            Kind::List(elem) => match elem.as_ref() {
                // Child table links back to this one; no column here.
                Kind::Shape(_) => {}
                _ => columns.push(format!("    {column} {}", json_type(dialect))),
            },
            kind => columns.push(format!("    {column} {}", scalar_type(kind, dialect))),
        }
    }
    out.push_str(&columns.join(",\n"));
    out.push_str("\n);\n");
}

fn primary_key(dialect: SqlDialect) -> &'static str {
    match dialect {
        SqlDialect::Postgres => "BIGSERIAL PRIMARY KEY",
        SqlDialect::Mysql => "BIGINT AUTO_INCREMENT PRIMARY KEY",
        SqlDialect::Sqlite => "INTEGER PRIMARY KEY AUTOINCREMENT",
    }
}

fn integer_type(dialect: SqlDialect) -> &'static str {
    match dialect {
        SqlDialect::Postgres | SqlDialect::Mysql => "BIGINT",
        SqlDialect::Sqlite => "INTEGER",
    }
}

fn json_type(dialect: SqlDialect) -> &'static str {
    match dialect {
        SqlDialect::Postgres => "JSONB",
        SqlDialect::Mysql => "JSON",
        SqlDialect::Sqlite => "TEXT",
    }
}

fn scalar_type(kind: &Kind, dialect: SqlDialect) -> &'static str {
    match kind {
        Kind::Int => integer_type(dialect),
        Kind::Float => match dialect {
            SqlDialect::Postgres => "DOUBLE PRECISION",
            SqlDialect::Mysql => "DOUBLE",
            SqlDialect::Sqlite => "REAL",
        },
        Kind::Bool => match dialect {
            SqlDialect::Postgres => "BOOLEAN",
            SqlDialect::Mysql => "TINYINT(1)",
            SqlDialect::Sqlite => "INTEGER",
        },
        Kind::Date => match dialect {
            SqlDialect::Postgres => "TIMESTAMPTZ",
            SqlDialect::Mysql => "DATETIME",
            SqlDialect::Sqlite => "TEXT",
        },
        Kind::Str => "TEXT",
        Kind::Null | Kind::Unknown => json_type(dialect),
        Kind::Shape(_) | Kind::List(_) => unreachable!("handled by render_table"),
    }
}
