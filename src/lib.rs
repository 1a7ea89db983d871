//! # dispatchgen - Consolidate Handwritten Config Handlers
//!
//! A source-to-source transformation toolkit for configuration modules that
//! grew one near-identical `edit_*` handler per parameter. dispatchgen
//! classifies every handler by the kind of value it edits, generates a single
//! consolidated dispatch function, and strips the now-redundant handler
//! bodies and declarations while preserving an allow-list of names.
//!
//! ## Quick Start
//!
//! ```bash
//! # Classify the handlers in an implementation file
//! dispatchgen extract src/conf.cpp
//!
//! # Generate the consolidated dispatch function
//! dispatchgen generate src/conf.cpp --output dispatch.txt
//!
//! # Once the dispatch function is validated, strip the redundant handlers
//! dispatchgen strip-impl src/conf.cpp --output src/conf.cpp.new
//! dispatchgen strip-decls src/conf.hpp --output src/conf.hpp.new
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod extract;
pub mod generate;
pub mod strip;
pub mod text;

pub use cli::{Cli, Output};
pub use config::DispatchgenConfig;

/// Result type alias for dispatchgen operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
