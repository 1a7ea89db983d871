//! Handler discovery over a full implementation file.
//!
//! Finds every `cls_config::edit_*` definition matching the fixed handler
//! signature, captures its body with nesting-aware brace matching, and
//! delegates classification to [`crate::classify`]. Handlers whose body
//! fails the default-assignment gate are collected by name rather than
//! dropped silently.

use anyhow::{Result, bail};
use lazy_static::lazy_static;
use regex::Regex;

use crate::classify::{ClassifyOptions, HandlerRecord, classify_body};
use crate::text::find_block_end;

/// Helper suffixes that are already generic and never re-extracted.
pub const SKIP_HANDLERS: &[&str] = &[
    "set_bool",
    "get_bool",
    "generic_bool",
    "generic_int",
    "generic_float",
    "generic_string",
    "generic_list",
];

lazy_static! {
    /// The fixed handler signature: owner-qualified name, one input string
    /// and one action enum.
    static ref HANDLER_SIG: Regex =
        Regex::new(r"void cls_config::edit_(\w+)\(std::string &parm, enum PARM_ACT pact\)")
            .unwrap();
}

/// Everything learned from one extraction pass.
#[derive(Debug, Default)]
pub struct ExtractionReport {
    /// Classified handlers, in source order.
    pub handlers: Vec<HandlerRecord>,

    /// Handlers whose body lacked the default-assignment marker.
    pub rejected: Vec<String>,

    /// Suffixes skipped because they are already generic helpers.
    pub skipped: Vec<String>,
}

/// Options for one extraction pass.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    pub classify: ClassifyOptions,

    /// Additional suffixes to skip on top of [`SKIP_HANDLERS`].
    pub extra_skip: Vec<String>,
}

impl ExtractOptions {
    fn is_skipped(&self, name: &str) -> bool {
        SKIP_HANDLERS.contains(&name) || self.extra_skip.iter().any(|skip| skip == name)
    }
}

/// Scans a full implementation file for handler definitions.
///
/// Errors when a handler body never closes before end of file; a truncated
/// scan would otherwise swallow every remaining definition.
pub fn extract_handlers(source: &str, options: &ExtractOptions) -> Result<ExtractionReport> {
    let mut report = ExtractionReport::default();

    for caps in HANDLER_SIG.captures_iter(source) {
        let name = caps[1].to_string();
        let sig_end = caps.get(0).unwrap().end();

        // Anything but whitespace between the signature and a brace means
        // this match is a declaration, not a definition.
        let Some(open_rel) = source[sig_end..].find('{') else {
            continue;
        };
        let open_idx = sig_end + open_rel;
        if !source[sig_end..open_idx].trim().is_empty() {
            continue;
        }
        let Some(close_idx) = find_block_end(source, open_idx) else {
            bail!("unbalanced braces: edit_{name} never closes before end of file");
        };
        let body = &source[open_idx + 1..close_idx];

        if options.is_skipped(&name) {
            report.skipped.push(name);
            continue;
        }

        match classify_body(body, &options.classify) {
            Some(c) => report.handlers.push(HandlerRecord {
                name,
                variable: c.variable,
                kind: c.kind,
                default: c.default,
                min: c.min,
                max: c.max,
                legal_values: c.legal_values,
                is_custom: c.is_custom,
            }),
            None => report.rejected.push(name),
        }
    }

    Ok(report)
}
