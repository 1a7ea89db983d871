//! The protected-name set shared by both strip passes.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

/// Functions that must survive every strip pass: the custom handlers the
/// generated dispatch still calls, the generic editors it delegates to,
/// and the dispatch/category machinery itself.
pub const PRESERVED_HANDLERS: &[&str] = &[
    "edit_log_file",
    "edit_target_dir",
    "edit_text_changes",
    "edit_picture_filename",
    "edit_movie_filename",
    "edit_snapshot_filename",
    "edit_timelapse_filename",
    "edit_device_id",
    "edit_pause",
    // Generic handlers and utilities
    "edit_set_bool",
    "edit_get_bool",
    "edit_generic_bool",
    "edit_generic_int",
    "edit_generic_float",
    "edit_generic_string",
    "edit_generic_list",
    // Dispatch and category functions
    "dispatch_edit",
    "edit_cat",
    "edit_get",
    "edit_set",
    "edit_list",
];

lazy_static! {
    /// Category dispatch functions (edit_cat00 through edit_cat18).
    static ref CATEGORY_DISPATCH: Regex = Regex::new(r"^edit_cat\d+$").unwrap();
}

/// Immutable set of function names exempt from removal. Built once before
/// a removal pass runs and passed by reference into both removers.
#[derive(Debug, Clone)]
pub struct AllowList {
    names: HashSet<String>,
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new()
    }
}

impl AllowList {
    /// The built-in allow-list.
    pub fn new() -> Self {
        Self {
            names: PRESERVED_HANDLERS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The built-in allow-list widened with caller-supplied names. The
    /// built-ins can never be removed from the set.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        list.names.extend(extra.into_iter().map(Into::into));
        list
    }

    /// The single protection predicate both strip passes consult.
    pub fn is_protected(&self, name: &str) -> bool {
        self.names.contains(name) || CATEGORY_DISPATCH.is_match(name)
    }
}
