//! Minimal CLI: JSON sample in, model declarations out.
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;

use crate::language::Language;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate data-model source code from JSON samples
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    /// target languages (e.g. typescript go sql)
    #[arg(long, short, num_args = 1.., required_unless_present = "all_languages")]
    lang: Vec<Language>,

    /// generate every supported language
    #[arg(long, default_value_t = false, conflicts_with = "lang")]
    all_languages: bool,

    /// top-level type name
    #[arg(long, default_value = "DataModel")]
    root_name: String,

    /// JSON Pointer to select a subnode in each document (e.g. /data/items/0)
    #[arg(long)]
    json_pointer: Option<String>,

    /// options file: a JSON object keyed by language name
    #[arg(long)]
    options: Option<PathBuf>,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,

    /// output directory (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        // debug path
        if self.no_op {
            eprintln!("{self:#?}");
            return Ok(());
        }

        let languages: Vec<Language> = if self.all_languages {
            Language::ALL.to_vec()
        } else {
            self.lang.clone()
        };

        let options_by_lang: serde_json::Map<String, serde_json::Value> = match &self.options {
            None => serde_json::Map::new(),
            Some(path) => {
                let source = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read options file {}", path.display()))?;
                crate::path_de::from_str_with_path(&source)
                    .map_err(|msg| anyhow::anyhow!("invalid options file: {msg}"))?
            }
        };

        let source_paths = resolve_file_path_patterns(&self.input)?;
        for source_path in source_paths {
            let document = self.load_document(&source_path)?;
            let stem = source_path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| self.root_name.clone());

            // 1) generate every requested language in parallel
            let results: Vec<(Language, anyhow::Result<String>)> = languages
                .par_iter()
                .map(|lang| {
                    let generated = lang
                        .generate(&document, &self.root_name, options_by_lang.get(lang.name()))
                        .with_context(|| {
                            format!("{}: {} generation failed", source_path.display(), lang)
                        });
                    (*lang, generated)
                })
                .collect();

            // 2) write them out in a stable order
            for (lang, generated) in results {
                let generated = generated?;
                match self.out.as_ref() {
                    Some(out_dir) => {
                        std::fs::create_dir_all(out_dir).with_context(|| {
                            format!("failed to create output directory {}", out_dir.display())
                        })?;
                        let target = out_dir.join(format!("{stem}.{}", lang.extension()));
                        std::fs::write(&target, &generated).with_context(|| {
                            format!("failed to write {}", target.display())
                        })?;
                    }
                    None => println!("{generated}"),
                }
            }
        }
        Ok(())
    }

    fn load_document(&self, source_path: &PathBuf) -> anyhow::Result<serde_json::Value> {
        let source = std::fs::read_to_string(source_path)
            .with_context(|| format!("failed to read source file {}", source_path.display()))?;
        let json_value = serde_json::from_str::<serde_json::Value>(&source)
            .with_context(|| format!("failed to parse JSON in {}", source_path.display()))?;
        match &self.json_pointer {
            None => Ok(json_value),
            Some(pointer) => json_value.pointer(pointer).cloned().with_context(|| {
                format!("JSON pointer {pointer} matched nothing in {}", source_path.display())
            }),
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn resolve_file_path_patterns<I>(patterns: I) -> anyhow::Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            // Treat as a glob pattern
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                matched_any = true;
                out.push(entry?);
            }
            if !matched_any {
                // Pattern was explicitly a glob but matched nothing -> surface as an error
                anyhow::bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            // Treat as a literal path
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
