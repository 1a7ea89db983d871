//! Minimal lexical utilities for scanning C++ source text.

pub mod braces;

pub use braces::{BraceDelta, LineBraces, find_block_end};
