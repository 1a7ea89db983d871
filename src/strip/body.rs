//! Function-body removal via a brace-balanced line scan.

use anyhow::{Result, bail};
use lazy_static::lazy_static;
use regex::Regex;

use super::{AllowList, StripAction, StripOutcome};
use crate::text::LineBraces;

lazy_static! {
    static ref IMPL_SIG: Regex = Regex::new(r"^void cls_config::(edit_\w+)\(").unwrap();
}

/// Removes every non-protected handler definition from an implementation
/// file.
///
/// Lines outside removal mode pass through untouched and in order. A
/// removed function disappears from its signature line through its closing
/// brace, along with any immediately following blank lines so repeated
/// removals do not accumulate blank-line debris.
///
/// Errors when a function is still open at end of file; silently eating the
/// remainder of the file would be data loss.
pub fn strip_impl(source: &str, allow: &AllowList) -> Result<StripOutcome> {
    let lines: Vec<&str> = source.lines().collect();
    let mut output: Vec<&str> = Vec::with_capacity(lines.len());
    let mut log = Vec::new();
    let mut removed = 0usize;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if let Some(caps) = IMPL_SIG.captures(line) {
            let name = caps[1].to_string();
            if allow.is_protected(&name) {
                log.push(StripAction::Kept(name));
            } else {
                i = skip_function(&lines, i, &name)?;
                removed += 1;
                log.push(StripAction::Removed(name));
                continue;
            }
        }

        output.push(line);
        i += 1;
    }

    let mut text = output.join("\n");
    if source.ends_with('\n') && !text.is_empty() {
        text.push('\n');
    }

    Ok(StripOutcome { text, removed, log })
}

/// Advances past one function definition starting at `sig_idx`, returning
/// the index of the first line after the definition and its trailing blank
/// run. Counting starts on the signature line itself so one-line
/// definitions are handled too.
fn skip_function(lines: &[&str], sig_idx: usize, name: &str) -> Result<usize> {
    let mut braces = LineBraces::new();
    let mut depth: i64 = 0;
    let mut in_function = false;

    let mut i = sig_idx;
    while i < lines.len() {
        let delta = braces.feed(lines[i]);
        if delta.opens > 0 {
            in_function = true;
        }
        depth += delta.opens as i64;
        depth -= delta.closes as i64;

        if in_function && depth == 0 {
            i += 1;
            while i < lines.len() && lines[i].trim().is_empty() {
                i += 1;
            }
            return Ok(i);
        }
        i += 1;
    }

    bail!("unbalanced braces: {name} still open at end of file");
}
