//! Target language registry and dispatch.

use serde_json::Value;

use crate::error::Error;
use crate::output;
use crate::path_de::from_value_with_path;

/// One variant per output backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    TypeScript,
    JavaScript,
    Python,
    Go,
    Rust,
    Swift,
    Kotlin,
    Java,
    CSharp,
    Cpp,
    Php,
    Dart,
    Ruby,
    R,
    ObjectiveC,
    Sql,
    VbNet,
    Scala,
    Erlang,
    Elixir,
}

impl Language {
    pub const ALL: [Language; 20] = [
        Language::TypeScript,
        Language::JavaScript,
        Language::Python,
        Language::Go,
        Language::Rust,
        Language::Swift,
        Language::Kotlin,
        Language::Java,
        Language::CSharp,
        Language::Cpp,
        Language::Php,
        Language::Dart,
        Language::Ruby,
        Language::R,
        Language::ObjectiveC,
        Language::Sql,
        Language::VbNet,
        Language::Scala,
        Language::Erlang,
        Language::Elixir,
    ];

    /// Canonical name, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::Java => "java",
            Language::CSharp => "csharp",
            Language::Cpp => "cpp",
            Language::Php => "php",
            Language::Dart => "dart",
            Language::Ruby => "ruby",
            Language::R => "r",
            Language::ObjectiveC => "objc",
            Language::Sql => "sql",
            Language::VbNet => "vbnet",
            Language::Scala => "scala",
            Language::Erlang => "erlang",
            Language::Elixir => "elixir",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Language::TypeScript => "ts",
            Language::JavaScript => "js",
            Language::Python => "py",
            Language::Go => "go",
            Language::Rust => "rs",
            Language::Swift => "swift",
            Language::Kotlin => "kt",
            Language::Java => "java",
            Language::CSharp => "cs",
            Language::Cpp => "hpp",
            Language::Php => "php",
            Language::Dart => "dart",
            Language::Ruby => "rb",
            Language::R => "r",
            Language::ObjectiveC => "m",
            Language::Sql => "sql",
            Language::VbNet => "vb",
            Language::Scala => "scala",
            Language::Erlang => "hrl",
            Language::Elixir => "ex",
        }
    }

    pub fn from_name(name: &str) -> Result<Language, Error> {
        let lowered = name.to_ascii_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.name() == lowered)
            .ok_or_else(|| Error::UnknownLanguage(name.to_string()))
    }

    /// Run this language's backend. `options` is an untyped JSON block
    /// (typically one entry of an options file keyed by language name);
    /// `None` means backend defaults.
    pub fn generate(
        &self,
        json: &Value,
        root_name: &str,
        options: Option<&Value>,
    ) -> Result<String, Error> {
        fn opts<T>(options: Option<&Value>) -> Result<T, Error>
        where
            T: Default + serde::de::DeserializeOwned,
        {
            match options {
                None => Ok(T::default()),
                Some(value) => {
                    from_value_with_path(value.clone()).map_err(Error::InvalidOptions)
                }
            }
        }

        match self {
            Language::TypeScript => output::typescript::generate(json, root_name, &opts(options)?),
            Language::JavaScript => output::javascript::generate(json, root_name, &opts(options)?),
            Language::Python => output::python::generate(json, root_name, &opts(options)?),
            Language::Go => output::go::generate(json, root_name, &opts(options)?),
            Language::Rust => output::rust::generate(json, root_name, &opts(options)?),
            Language::Swift => output::swift::generate(json, root_name, &opts(options)?),
            Language::Kotlin => output::kotlin::generate(json, root_name, &opts(options)?),
            Language::Java => output::java::generate(json, root_name, &opts(options)?),
            Language::CSharp => output::csharp::generate(json, root_name, &opts(options)?),
            Language::Cpp => output::cpp::generate(json, root_name, &opts(options)?),
            Language::Php => output::php::generate(json, root_name, &opts(options)?),
            Language::Dart => output::dart::generate(json, root_name, &opts(options)?),
            Language::Ruby => output::ruby::generate(json, root_name, &opts(options)?),
            Language::R => output::r::generate(json, root_name, &opts(options)?),
            Language::ObjectiveC => output::objc::generate(json, root_name, &opts(options)?),
            Language::Sql => output::sql::generate(json, root_name, &opts(options)?),
            Language::VbNet => output::vbnet::generate(json, root_name, &opts(options)?),
            Language::Scala => output::scala::generate(json, root_name, &opts(options)?),
            Language::Erlang => output::erlang::generate(json, root_name, &opts(options)?),
            Language::Elixir => output::elixir::generate(json, root_name, &opts(options)?),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_name(s)
    }
}
