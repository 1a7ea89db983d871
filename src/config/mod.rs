//! Configuration management for dispatchgen.
//!
//! An optional YAML file can widen the allow-list or the extractor
//! skip-list and tune custom-handler detection. All fields are additive:
//! the built-in protected names can never be disabled from config.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::classify::{CUSTOM_SIZE_THRESHOLD, ClassifyOptions};

/// Configuration loaded from `--config <FILE>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchgenConfig {
    /// Extra function names both strip passes must keep.
    #[serde(default)]
    pub preserve: Vec<String>,

    /// Extra handler suffixes the extractor should ignore.
    #[serde(default)]
    pub skip_handlers: Vec<String>,

    /// Body length above which a handler counts as custom.
    #[serde(default = "default_custom_threshold")]
    pub custom_threshold: usize,

    /// Additional library calls that mark a handler as custom.
    #[serde(default)]
    pub custom_markers: Vec<String>,
}

fn default_custom_threshold() -> usize {
    CUSTOM_SIZE_THRESHOLD
}

impl Default for DispatchgenConfig {
    fn default() -> Self {
        Self {
            preserve: Vec::new(),
            skip_handlers: Vec::new(),
            custom_threshold: default_custom_threshold(),
            custom_markers: Vec::new(),
        }
    }
}

impl DispatchgenConfig {
    /// Loads the given config file, or the defaults when none is given.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {path}"))?;
                serde_yml::from_str(&raw)
                    .with_context(|| format!("Invalid config file: {path}"))
            }
            None => Ok(Self::default()),
        }
    }

    /// The classifier tunables this config describes.
    pub fn classify_options(&self) -> ClassifyOptions {
        ClassifyOptions {
            custom_threshold: self.custom_threshold,
            extra_custom_markers: self.custom_markers.clone(),
        }
    }
}
