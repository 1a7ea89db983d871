//! Declaration-line removal for the header file.

use lazy_static::lazy_static;
use regex::Regex;

use super::{AllowList, StripAction, StripOutcome};

lazy_static! {
    static ref DECL_SIG: Regex = Regex::new(r"void (edit_\w+)\(").unwrap();
}

/// Drops the single-line declarations of non-protected handlers.
/// Declarations are one statement each, so unlike the implementation pass
/// no boundary tracking is needed; every non-declaration line passes
/// through unchanged.
pub fn strip_decls(source: &str, allow: &AllowList) -> StripOutcome {
    let mut output: Vec<&str> = Vec::new();
    let mut log = Vec::new();
    let mut removed = 0usize;

    for line in source.lines() {
        if line.contains("void edit_") {
            if let Some(caps) = DECL_SIG.captures(line) {
                let name = caps[1].to_string();
                if !allow.is_protected(&name) {
                    removed += 1;
                    log.push(StripAction::Removed(name));
                    continue;
                }
                log.push(StripAction::Kept(name));
            }
        }
        output.push(line);
    }

    let mut text = output.join("\n");
    if source.ends_with('\n') && !text.is_empty() {
        text.push('\n');
    }

    StripOutcome { text, removed, log }
}
