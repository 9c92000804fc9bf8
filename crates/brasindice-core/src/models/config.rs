//! Configuration for the price table parser.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BrasindiceError, Result};

/// Fixed column count of the BRASINDICE feed.
pub const DEFAULT_EXPECTED_COLUMNS: usize = 23;

/// Lines sampled by the pre-flight check.
pub const DEFAULT_PREFLIGHT_SAMPLE_LINES: usize = 10;

/// Throughput assumption used for duration estimates. A fixed constant,
/// not derived from measurement.
pub const DEFAULT_ESTIMATED_LINES_PER_SECOND: usize = 200;

/// Parser configuration.
///
/// The defaults match the published feed layout; they are knobs so callers
/// can keep importing when the vendor revises the format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Exact number of columns a data line must tokenize into.
    pub expected_columns: usize,

    /// How many leading lines the pre-flight check tokenizes.
    pub preflight_sample_lines: usize,

    /// Assumed parse throughput for duration estimates.
    pub estimated_lines_per_second: usize,

    /// Strip a single trailing `\r` from each line before processing.
    /// Feeds exported on Windows carry `\r\n` endings; with this off the
    /// `\r` stays attached to the last field of every line.
    pub strip_carriage_returns: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            expected_columns: DEFAULT_EXPECTED_COLUMNS,
            preflight_sample_lines: DEFAULT_PREFLIGHT_SAMPLE_LINES,
            estimated_lines_per_second: DEFAULT_ESTIMATED_LINES_PER_SECOND,
            strip_carriage_returns: true,
        }
    }
}

impl ParserConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| BrasindiceError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| BrasindiceError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
