use serde::Serialize;

/// Inferred value category for one handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerKind {
    Bool,
    Int,
    Float,
    Text,
    List,
    /// Body matched none of the type heuristics. The record is retained for
    /// reporting but lands in no generator bucket.
    Unknown,
}

impl std::fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            HandlerKind::Bool => "bool",
            HandlerKind::Int => "int",
            HandlerKind::Float => "float",
            HandlerKind::Text => "string",
            HandlerKind::List => "list",
            HandlerKind::Unknown => "unknown",
        };
        write!(f, "{label}")
    }
}

/// One inferred description of a single `edit_*` handler.
#[derive(Debug, Clone, Serialize)]
pub struct HandlerRecord {
    /// Handler suffix, without the `edit_` prefix.
    pub name: String,

    /// Identifier of the field the handler mutates.
    pub variable: String,

    /// Inferred value category.
    pub kind: HandlerKind,

    /// Default literal, type-specific escaping applied (lower-cased for
    /// bool, embedded quotes escaped for string).
    pub default: String,

    /// Lower bound literal; only populated for int/float handlers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,

    /// Upper bound literal; only populated for int/float handlers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,

    /// Deduplicated legal values; only meaningful for list handlers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub legal_values: Vec<String>,

    /// True when the body carries domain-specific logic or exceeds the size
    /// threshold. Overrides bucket placement regardless of `kind`.
    pub is_custom: bool,
}

/// Classifier output for one body; the caller supplies the name.
#[derive(Debug, Clone)]
pub struct Classification {
    pub variable: String,
    pub kind: HandlerKind,
    pub default: String,
    pub min: Option<String>,
    pub max: Option<String>,
    pub legal_values: Vec<String>,
    pub is_custom: bool,
}

/// Per-bucket record counts. Custom overrides the type bucket.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BucketCounts {
    pub bools: usize,
    pub ints: usize,
    pub floats: usize,
    pub strings: usize,
    pub lists: usize,
    pub custom: usize,
    pub unknown: usize,
}

impl BucketCounts {
    /// Tallies records the way the generator buckets them.
    pub fn tally(handlers: &[HandlerRecord]) -> Self {
        let mut counts = Self::default();
        for handler in handlers {
            if handler.is_custom {
                counts.custom += 1;
                continue;
            }
            match handler.kind {
                HandlerKind::Bool => counts.bools += 1,
                HandlerKind::Int => counts.ints += 1,
                HandlerKind::Float => counts.floats += 1,
                HandlerKind::Text => counts.strings += 1,
                HandlerKind::List => counts.lists += 1,
                HandlerKind::Unknown => counts.unknown += 1,
            }
        }
        counts
    }
}
