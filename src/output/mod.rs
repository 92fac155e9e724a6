//! Output backends, one module per target language.
//!
//! Every backend exposes the same contract:
//!
//! ```ignore
//! pub fn generate(json: &Value, root_name: &str, options: &<Lang>Options)
//!     -> Result<String, Error>
//! ```
//!
//! Backends share the discovery pass in [`crate::infer`] and differ only in
//! rendering: type tokens, casing, key order, empty-input policy, and their
//! option matrix. Declarations are emitted in reverse discovery order so
//! nested types precede the types that reference them.

pub mod cpp;
pub mod csharp;
pub mod dart;
pub mod elixir;
pub mod erlang;
pub mod go;
pub mod java;
pub mod javascript;
pub mod kotlin;
pub mod objc;
pub mod php;
pub mod python;
pub mod r;
pub mod ruby;
pub mod rust;
pub mod scala;
pub mod sql;
pub mod swift;
pub mod typescript;
pub mod vbnet;

pub use cpp::CppOptions;
pub use csharp::CSharpOptions;
pub use dart::DartOptions;
pub use elixir::ElixirOptions;
pub use erlang::ErlangOptions;
pub use go::GoOptions;
pub use java::JavaOptions;
pub use javascript::JavaScriptOptions;
pub use kotlin::{KotlinOptions, KotlinSerialization};
pub use objc::ObjcOptions;
pub use php::PhpOptions;
pub use python::PythonOptions;
pub use r::ROptions;
pub use ruby::RubyOptions;
pub use rust::RustOptions;
pub use scala::ScalaOptions;
pub use sql::{SqlDialect, SqlOptions};
pub use swift::SwiftOptions;
pub use typescript::TypeScriptOptions;
pub use vbnet::VbNetOptions;

use serde_json::{Map, Value};

use crate::error::Error;

/// Root validation shared by every backend. `message` is the backend's exact
/// error wording; `reject_empty` is false only for the backends that
/// degenerate into a zero-field declaration.
pub(crate) fn require_object<'a>(
    json: &'a Value,
    message: &'static str,
    reject_empty: bool,
) -> Result<&'a Map<String, Value>, Error> {
    let map = json.as_object().ok_or(Error::InvalidInput(message))?;
    if reject_empty && map.is_empty() {
        return Err(Error::InvalidInput(message));
    }
    Ok(map)
}
