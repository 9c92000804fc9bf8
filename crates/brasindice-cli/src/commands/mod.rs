//! CLI subcommands.

pub mod batch;
pub mod check;
pub mod parse;

use std::path::Path;

use anyhow::Context;
use encoding_rs::WINDOWS_1252;
use tracing::debug;

use brasindice_core::ParserConfig;

/// Load parser configuration, falling back to defaults.
pub fn load_config(path: Option<&str>) -> anyhow::Result<ParserConfig> {
    match path {
        Some(p) => ParserConfig::from_file(Path::new(p))
            .with_context(|| format!("failed to load config from {}", p)),
        None => Ok(ParserConfig::default()),
    }
}

/// Read a price table file into a string.
///
/// The published feeds are legacy Windows exports: bytes that are not valid
/// UTF-8 are decoded as Windows-1252.
pub fn read_table_file(path: &Path) -> anyhow::Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            debug!(
                "{} is not valid UTF-8, decoding as Windows-1252",
                path.display()
            );
            let (text, _, _) = WINDOWS_1252.decode(err.as_bytes());
            Ok(text.into_owned())
        }
    }
}
