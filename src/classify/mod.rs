//! Lexical-cue classifier for handler bodies.
//!
//! Handler bodies in the configuration module follow a handful of
//! copy-pasted idioms, so surface patterns are enough to recover the value
//! type, the mutated field, the default literal and any bounds. The rules
//! run in a fixed precedence order; the list check and the custom check run
//! independently and may override the earlier result.

use lazy_static::lazy_static;
use regex::Regex;

pub mod types;

pub use types::{BucketCounts, Classification, HandlerKind, HandlerRecord};

/// Library calls whose presence flags a handler as custom: the generic
/// editors cannot reproduce date formatting or substring matching logic.
pub const CUSTOM_MARKERS: &[&str] = &["strftime", "strstr", "localtime"];

/// Bodies longer than this count as custom even when a type pattern
/// matches. Long handlers almost always carry extra validation, and an
/// incorrectly genericized handler is a correctness bug while an
/// incorrectly preserved one merely loses some consolidation.
pub const CUSTOM_SIZE_THRESHOLD: usize = 500;

lazy_static! {
    /// Unconditional default assignment under the PARM_ACT_DFLT branch.
    /// Every replaceable handler must carry one.
    static ref DEFAULT_ASSIGN: Regex =
        Regex::new(r"(?s)PARM_ACT_DFLT.*?(\w+)\s*=\s*([^;]+);").unwrap();
    static ref INT_LOWER: Regex = Regex::new(r"\(parm_in <\s*(\d+)\)").unwrap();
    static ref INT_UPPER: Regex = Regex::new(r"\(parm_in >\s*(\d+)\)").unwrap();
    static ref FLOAT_LOWER: Regex = Regex::new(r"\(parm_in <\s*([\d.-]+)\)").unwrap();
    static ref FLOAT_UPPER: Regex = Regex::new(r"\(parm_in >\s*([\d.-]+)\)").unwrap();
    static ref LIST_VALUE: Regex = Regex::new(r#"\(parm == "(\w+)"\)"#).unwrap();
}

/// Tunables for custom-handler detection.
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    /// Body length above which a handler counts as custom.
    pub custom_threshold: usize,

    /// Additional markers on top of [`CUSTOM_MARKERS`].
    pub extra_custom_markers: Vec<String>,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            custom_threshold: CUSTOM_SIZE_THRESHOLD,
            extra_custom_markers: Vec::new(),
        }
    }
}

/// Classifies one handler body (the text between its outermost braces).
///
/// Returns `None` when the body lacks the `PARM_ACT_DFLT` default
/// assignment, the well-formedness gate every replaceable handler must
/// pass. Callers must report such handlers rather than drop them silently.
pub fn classify_body(body: &str, options: &ClassifyOptions) -> Option<Classification> {
    let caps = DEFAULT_ASSIGN.captures(body)?;
    let variable = caps[1].to_string();
    let mut default = caps[2].trim().to_string();

    let mut kind = HandlerKind::Unknown;
    let mut min = None;
    let mut max = None;
    let mut legal_values = Vec::new();

    if body.contains("edit_set_bool") && body.contains("edit_get_bool") {
        kind = HandlerKind::Bool;
        default = default.to_lowercase();
    } else if body.contains(&format!("{variable} = parm;"))
        && !body.contains("atoi")
        && !body.contains("atof")
    {
        kind = HandlerKind::Text;
        default = default.replace('"', "\\\"");
    } else if body.contains("atoi") {
        kind = HandlerKind::Int;
        min = Some(
            INT_LOWER
                .captures(body)
                .map_or_else(|| "1".to_string(), |c| c[1].to_string()),
        );
        max = Some(
            INT_UPPER
                .captures(body)
                .map_or_else(|| "INT_MAX".to_string(), |c| c[1].to_string()),
        );
    } else if body.contains("atof") {
        kind = HandlerKind::Float;
        min = Some(
            FLOAT_LOWER
                .captures(body)
                .map_or_else(|| "-1.0".to_string(), |c| c[1].to_string()),
        );
        max = Some(
            FLOAT_UPPER
                .captures(body)
                .map_or_else(|| "1.0".to_string(), |c| c[1].to_string()),
        );
    }

    // A list marker overrides whichever scalar pattern matched above.
    if body.contains("PARM_ACT_LIST") && body.contains("||") {
        kind = HandlerKind::List;
        for cap in LIST_VALUE.captures_iter(body) {
            let value = cap[1].to_string();
            if !legal_values.contains(&value) {
                legal_values.push(value);
            }
        }
    }

    let mut is_custom = CUSTOM_MARKERS.iter().any(|marker| body.contains(marker))
        || options
            .extra_custom_markers
            .iter()
            .any(|marker| body.contains(marker.as_str()));
    if body.len() > options.custom_threshold {
        is_custom = true;
    }

    Some(Classification {
        variable,
        kind,
        default,
        min,
        max,
        legal_values,
        is_custom,
    })
}
