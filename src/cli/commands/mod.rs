//! Command implementations for the dispatchgen CLI.
//!
//! Each command lives in its own module. The helpers here merge CLI
//! arguments with file configuration so every command resolves options the
//! same way.

use crate::cli::Output;
use crate::config::DispatchgenConfig;
use crate::extract::{ExtractOptions, ExtractionReport};

pub mod extract;
pub mod generate;
pub mod strip;

/// Merges config-file values with per-command CLI overrides.
pub(crate) fn extract_options(
    threshold: Option<usize>,
    skip: &[String],
    config: &DispatchgenConfig,
) -> ExtractOptions {
    let mut classify = config.classify_options();
    if let Some(threshold) = threshold {
        classify.custom_threshold = threshold;
    }

    let mut extra_skip = config.skip_handlers.clone();
    extra_skip.extend(skip.iter().cloned());

    ExtractOptions {
        classify,
        extra_skip,
    }
}

/// Reports handlers excluded from generation so nothing vanishes silently.
pub(crate) fn report_exclusions(report: &ExtractionReport, output: &Output) {
    if !report.rejected.is_empty() {
        output.warning(&format!(
            "{} handlers had no default assignment and were excluded:",
            report.rejected.len()
        ));
        for name in &report.rejected {
            output.list_item(&format!("edit_{name}"));
        }
    }

    let unknown: Vec<&str> = report
        .handlers
        .iter()
        .filter(|h| h.kind == crate::classify::HandlerKind::Unknown && !h.is_custom)
        .map(|h| h.name.as_str())
        .collect();
    if !unknown.is_empty() {
        output.warning(&format!(
            "{} handlers matched no type heuristic and land in no bucket:",
            unknown.len()
        ));
        for name in unknown {
            output.list_item(&format!("edit_{name}"));
        }
    }
}
