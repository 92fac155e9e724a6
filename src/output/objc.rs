//! Objective-C interface/implementation generation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::infer::{KeyOrder, discover};
use crate::ir::{Kind, Shape};
use crate::naming::to_camel_case;
use crate::output::require_object;

const INVALID_INPUT: &str = "Invalid JSON object";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjcOptions {
    /// Prefix applied to every generated class name (e.g. "ABC").
    pub class_prefix: String,
}

pub fn generate(json: &Value, root_name: &str, options: &ObjcOptions) -> Result<String, Error> {
    let root = require_object(json, INVALID_INPUT, true)?;
    let shapes = discover(root, root_name, KeyOrder::Insertion);

    let mut out = String::new();
    out.push_str("#import <Foundation/Foundation.h>\n");
    for shape in shapes.iter().rev() {
        out.push('\n');
        render_interface(&mut out, shape, options);
    }
    for shape in shapes.iter().rev() {
        out.push('\n');
        render_implementation(&mut out, shape, options);
    }
    Ok(out)
}

fn class_name(name: &str, options: &ObjcOptions) -> String {
    format!("{}{name}", options.class_prefix)
}

fn render_interface(out: &mut String, shape: &Shape, options: &ObjcOptions) {
    out.push_str(&format!("@interface {} : NSObject\n\n", class_name(&shape.name, options)));
    for field in &shape.fields {
        let ident = to_camel_case(&field.key);
        out.push_str(&format!(
            "@property (nonatomic, strong) {} {ident};\n",
            type_token(&field.kind, options)
        ));
    }
    out.push_str("\n- (instancetype)initWithDictionary:(NSDictionary *)dictionary;\n");
    out.push_str("\n@end\n");
}

fn render_implementation(out: &mut String, shape: &Shape, options: &ObjcOptions) {
    out.push_str(&format!("@implementation {}\n\n", class_name(&shape.name, options)));
    out.push_str("- (instancetype)initWithDictionary:(NSDictionary *)dictionary {\n");
    out.push_str("    self = [super init];\n    if (self) {\n");
    for field in &shape.fields {
        let ident = to_camel_case(&field.key);
        let access = format!("dictionary[@\"{}\"]", field.key);
        let expr = match &field.kind {
            Kind::Shape(name) => format!(
                "[[{} alloc] initWithDictionary:{access}]",
                class_name(name, options)
            ),
            _ => access,
        };
        out.push_str(&format!("        _{ident} = {expr};\n"));
    }
    out.push_str("    }\n    return self;\n}\n\n@end\n");
}

fn type_token(kind: &Kind, options: &ObjcOptions) -> String {
    match kind {
        Kind::Null | Kind::Unknown => "id".into(),
        Kind::Bool | Kind::Int | Kind::Float => "NSNumber *".into(),
        Kind::Date => "NSDate *".into(),
        Kind::Str => "NSString *".into(),
        Kind::Shape(name) => format!("{} *", class_name(name, options)),
        Kind::List(elem) => match elem.as_ref() {
            Kind::Null | Kind::Unknown => "NSArray *".into(),
            inner => format!("NSArray<{}> *", type_token(inner, options).trim_end()),
        },
    }
}
