//! Removal passes that excise redundant handlers once the generated
//! dispatch function is in place.
//!
//! Both passes share one [`AllowList`] predicate so the implementation and
//! declaration files can never drift out of sync about which names are
//! protected.

pub mod allowlist;
pub mod body;
pub mod decls;

pub use allowlist::AllowList;
pub use body::strip_impl;
pub use decls::strip_decls;

/// Keep/remove decision for one function, logged for operator review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripAction {
    Kept(String),
    Removed(String),
}

/// Result of one strip pass.
#[derive(Debug)]
pub struct StripOutcome {
    /// The cleaned file content.
    pub text: String,

    /// Number of functions (or declarations) removed.
    pub removed: usize,

    /// Per-function decisions, in scan order.
    pub log: Vec<StripAction>,
}
