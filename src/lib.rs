//! Generate data-model declarations from a JSON sample, for twenty target
//! languages.
//!
//! The pipeline is a single shared discovery pass followed by per-language
//! rendering:
//!
//! ```text
//! serde_json::Value
//!        │ infer::discover        (shape discovery, naming, key order)
//!        ▼
//!   Vec<ir::Shape>
//!        │ output::<lang>::generate   (type tokens, casing, option matrix)
//!        ▼
//!      String
//! ```
//!
//! [`Language`] ties the two together and dispatches on a language name:
//!
//! ```
//! use json_modelgen::Language;
//! use serde_json::json;
//!
//! let doc = json!({"id": 1, "tags": ["a"]});
//! let src = Language::TypeScript.generate(&doc, "Item", None)?;
//! assert!(src.contains("export type Item"));
//! # Ok::<(), json_modelgen::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod infer;
pub mod ir;
pub mod language;
pub mod naming;
pub mod output;
pub mod path_de;

pub use error::Error;
pub use infer::{KeyOrder, discover};
pub use ir::{Field, Kind, Literal, Shape};
pub use language::Language;
