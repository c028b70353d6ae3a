use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants;
use crate::error::Result;

/// Optional per-run settings read from `transform.toml` inside the data
/// directory. The file is optional and anything absent falls back to
/// the built-in defaults. Namespace bindings are compile-time constants
/// and never configurable.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub flush: FlushConfig,
}

/// Row thresholds at which the two large datasets serialize a shard.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FlushConfig {
    pub gene_textmined_rows: usize,
    pub gene_predictive_rows: usize,
}

impl Default for FlushConfig {
    fn default() -> Self {
        Self {
            gene_textmined_rows: constants::GENE_TEXTMINED_FLUSH_ROWS,
            gene_predictive_rows: constants::GENE_PREDICTIVE_FLUSH_ROWS,
        }
    }
}

impl Config {
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(constants::CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }
}
