// Strongly-typed IR for the renderers. No serde_json::Value past this point.

/// Inferred type of one JSON field, as sampled from the input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// The sampled value was literally `null`.
    Null,
    Bool,
    /// Whole-valued number (`value % 1 == 0`), including e.g. `2.0`.
    Int,
    Float,
    /// String matching the strict ISO-8601 date-time pattern.
    Date,
    Str,
    List(Box<Kind>),
    /// Reference to a discovered shape by its derived name.
    Shape(String),
    /// Element of an empty array; renders as each language's untyped fallback.
    Unknown,
}

/// Scalar value sampled from the input, kept for backends that can render
/// field defaults from the source document (`useValuesAsDefaults`).
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

#[derive(Debug, Clone)]
pub struct Field {
    /// Original JSON key, used verbatim in serialization annotations.
    pub key: String,
    pub kind: Kind,
    /// Present only for scalar fields.
    pub literal: Option<Literal>,
}

/// A named object-typed subtree slated for its own declaration.
#[derive(Debug, Clone)]
pub struct Shape {
    pub name: String,
    pub fields: Vec<Field>,
}

impl Kind {
    /// True if this kind, or any list element under it, satisfies `pred`.
    pub fn mentions(&self, pred: &dyn Fn(&Kind) -> bool) -> bool {
        if pred(self) {
            return true;
        }
        match self {
            Kind::List(elem) => elem.mentions(pred),
            _ => false,
        }
    }
}

/// Whether any field of any shape mentions a kind satisfying `pred`.
/// Renderers use this to emit imports only when actually needed.
pub fn shapes_mention(shapes: &[Shape], pred: impl Fn(&Kind) -> bool) -> bool {
    shapes
        .iter()
        .flat_map(|s| s.fields.iter())
        .any(|f| f.kind.mentions(&pred))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mentions_descends_into_lists() {
        let k = Kind::List(Box::new(Kind::List(Box::new(Kind::Date))));
        assert!(k.mentions(&|k| matches!(k, Kind::Date)));
        assert!(!k.mentions(&|k| matches!(k, Kind::Bool)));
    }

    #[test]
    fn shapes_mention_scans_all_fields() {
        let shapes = vec![Shape {
            name: "Root".into(),
            fields: vec![
                Field { key: "a".into(), kind: Kind::Int, literal: Some(Literal::Int(1)) },
                Field {
                    key: "b".into(),
                    kind: Kind::List(Box::new(Kind::Shape("B".into()))),
                    literal: None,
                },
            ],
        }];
        assert!(shapes_mention(&shapes, |k| matches!(k, Kind::Shape(_))));
        assert!(!shapes_mention(&shapes, |k| matches!(k, Kind::Float)));
    }
}
