//! Batch parser and pre-flight validator for BRASINDICE price table files.

use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

use crate::error::RowError;
use crate::models::config::ParserConfig;
use crate::models::row::ParsedRow;

use super::row::map_row;
use super::tokenizer::tokenize_line;

/// Characters of the offending line attached to structural errors.
const LINE_PREVIEW_CHARS: usize = 100;

/// One rejected input line. Never fatal to the batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineError {
    /// 1-indexed position among the non-blank lines.
    pub line: usize,
    /// Human-readable rejection reason.
    pub message: String,
    /// Diagnostic payload, e.g. a preview of the offending line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Aggregate line counts of one parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Non-blank input lines.
    pub total: usize,
    /// Lines mapped into rows.
    pub parsed: usize,
    /// Lines rejected.
    pub errors: usize,
}

/// Result of parsing one file.
///
/// `success` is all-or-nothing: any rejected line makes it `false`, even
/// though every line is still processed and the valid rows are returned.
/// The invariants `total == parsed + errors`, `rows.len() == parsed` and
/// `errors.len() == errors` always hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    pub success: bool,
    pub rows: Vec<ParsedRow>,
    pub errors: Vec<LineError>,
    pub stats: ParseStats,
}

/// Pre-flight check outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    /// Non-blank lines in the file.
    pub row_count: usize,
    /// Sampled lines with the wrong column count.
    pub error_count: usize,
    pub file_size_kb: f64,
    /// `ceil(row_count / estimated_lines_per_second)`.
    pub estimated_duration_seconds: u64,
    pub message: String,
}

/// Parser for BRASINDICE price table files.
///
/// A pure function of its input string: no I/O, no retries, no state
/// across calls. Safe to invoke repeatedly or in parallel across
/// independent inputs.
#[derive(Debug, Clone, Default)]
pub struct BrasindiceParser {
    config: ParserConfig,
}

impl BrasindiceParser {
    /// Create a parser with the default feed configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with an explicit configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Set whether a trailing `\r` is stripped from each line.
    pub fn with_carriage_return_stripping(mut self, strip: bool) -> Self {
        self.config.strip_carriage_returns = strip;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a whole price table file.
    ///
    /// Lines are independently tokenized and mapped; a rejected line
    /// becomes an error entry and never aborts the batch.
    pub fn parse(&self, content: &str) -> ParseResult {
        let lines = self.data_lines(content);
        info!("parsing {} data lines", lines.len());

        let mut rows = Vec::new();
        let mut errors = Vec::new();

        for (idx, line) in lines.iter().enumerate() {
            let fields = tokenize_line(line);
            match map_row(&fields, &self.config) {
                Ok(row) => rows.push(row),
                Err(err) => errors.push(line_error(idx + 1, err, line)),
            }
        }

        let stats = ParseStats {
            total: lines.len(),
            parsed: rows.len(),
            errors: errors.len(),
        };
        let success = stats.errors == 0;

        debug!(
            "parsed {} rows, rejected {} lines, success={}",
            stats.parsed, stats.errors, success
        );

        ParseResult {
            success,
            rows,
            errors,
            stats,
        }
    }

    /// Cheap structural sanity check before committing to a full parse.
    ///
    /// Tokenizes only the first `preflight_sample_lines` non-blank lines
    /// and counts column-count mismatches. Never fails: an empty file
    /// yields an invalid report with an explanatory message.
    pub fn validate(&self, content: &str, file_size_bytes: u64) -> ValidationReport {
        let lines = self.data_lines(content);
        let row_count = lines.len();
        let sample = row_count.min(self.config.preflight_sample_lines);

        let error_count = lines[..sample]
            .iter()
            .filter(|line| tokenize_line(line).len() != self.config.expected_columns)
            .count();

        let is_valid = error_count == 0 && row_count > 0;
        let estimated_duration_seconds =
            row_count.div_ceil(self.config.estimated_lines_per_second) as u64;
        let file_size_kb = file_size_bytes as f64 / 1024.0;

        let message = if row_count == 0 {
            "file contains no data lines".to_string()
        } else if error_count > 0 {
            format!(
                "{} of the first {} lines do not have {} columns",
                error_count, sample, self.config.expected_columns
            )
        } else {
            format!(
                "{} data lines, estimated {}s to import",
                row_count, estimated_duration_seconds
            )
        };

        ValidationReport {
            is_valid,
            row_count,
            error_count,
            file_size_kb,
            estimated_duration_seconds,
            message,
        }
    }

    /// Split into lines, optionally dropping a trailing `\r`, and discard
    /// blank lines before counting.
    fn data_lines<'a>(&self, content: &'a str) -> Vec<&'a str> {
        content
            .split('\n')
            .map(|line| {
                if self.config.strip_carriage_returns {
                    line.strip_suffix('\r').unwrap_or(line)
                } else {
                    line
                }
            })
            .filter(|line| !line.trim().is_empty())
            .collect()
    }
}

fn line_error(line_no: usize, err: RowError, line: &str) -> LineError {
    let data = match err {
        RowError::ColumnCount { .. } => {
            let preview: String = line.chars().take(LINE_PREVIEW_CHARS).collect();
            Some(json!({ "line_preview": preview }))
        }
        RowError::MissingField(field) => Some(json!({ "field": field })),
    };
    LineError {
        line: line_no,
        message: err.to_string(),
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::row::sample_fields;
    use pretty_assertions::assert_eq;

    fn quoted_line(fields: &[String]) -> String {
        fields
            .iter()
            .map(|f| format!("\"{}\"", f))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn sample_line() -> String {
        quoted_line(&sample_fields())
    }

    #[test]
    fn test_parse_single_valid_line() {
        let result = BrasindiceParser::new().parse(&sample_line());

        assert!(result.success);
        assert_eq!(result.stats, ParseStats { total: 1, parsed: 1, errors: 0 });
        assert_eq!(result.rows[0].external_code, "0001_12345_001");
    }

    #[test]
    fn test_blank_lines_are_not_counted() {
        let content = format!("\n  \n{}\n\n", sample_line());
        let result = BrasindiceParser::new().parse(&content);

        assert_eq!(result.stats.total, 1);
        assert!(result.success);
    }

    #[test]
    fn test_mixed_batch_keeps_partial_rows() {
        // One good row, one missing the item code, one with 20 fields.
        let mut missing_id = sample_fields();
        missing_id[2] = String::new();
        let mut short = sample_fields();
        short.truncate(20);

        let content = format!(
            "{}\n{}\n{}",
            sample_line(),
            quoted_line(&missing_id),
            quoted_line(&short)
        );
        let result = BrasindiceParser::new().parse(&content);

        assert!(!result.success);
        assert_eq!(result.stats, ParseStats { total: 3, parsed: 1, errors: 2 });
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].line, 2);
        assert_eq!(result.errors[1].line, 3);
    }

    #[test]
    fn test_structural_error_carries_line_preview() {
        let result = BrasindiceParser::new().parse("a,b,c");

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].message, "expected 23 columns, found 3");
        assert_eq!(result.errors[0].data, Some(json!({ "line_preview": "a,b,c" })));
    }

    #[test]
    fn test_aggregate_invariant() {
        let content = format!("{}\nbad,line\n{}", sample_line(), sample_line());
        let result = BrasindiceParser::new().parse(&content);

        assert_eq!(result.stats.total, result.stats.parsed + result.stats.errors);
        assert_eq!(result.rows.len(), result.stats.parsed);
        assert_eq!(result.errors.len(), result.stats.errors);
        assert_eq!(result.success, result.stats.errors == 0);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let content = format!("{}\nbad,line", sample_line());
        let parser = BrasindiceParser::new();

        assert_eq!(parser.parse(&content), parser.parse(&content));
    }

    #[test]
    fn test_crlf_is_stripped_by_default() {
        let content = format!("{}\r\n", sample_line());
        let with_crlf = BrasindiceParser::new().parse(&content);
        let without = BrasindiceParser::new().parse(&sample_line());

        assert_eq!(with_crlf.rows, without.rows);
    }

    #[test]
    fn test_crlf_stays_attached_when_stripping_disabled() {
        let content = format!("{}\r\n", sample_line());
        let result = BrasindiceParser::new()
            .with_carriage_return_stripping(false)
            .parse(&content);

        // The \r stays attached through tokenization; the field cleaners
        // trim it, so a quoted feed still maps cleanly.
        assert!(result.success);
        assert_eq!(result.rows.len(), 1);
    }

    #[test]
    fn test_validate_clean_file() {
        let content = format!("{}\n{}", sample_line(), sample_line());
        let report = BrasindiceParser::new().validate(&content, 2048);

        assert!(report.is_valid);
        assert_eq!(report.row_count, 2);
        assert_eq!(report.error_count, 0);
        assert_eq!(report.file_size_kb, 2.0);
        assert_eq!(report.estimated_duration_seconds, 1);
    }

    #[test]
    fn test_validate_samples_only_leading_lines() {
        // 11 good lines then a bad one: the bad line is outside the sample.
        let mut lines: Vec<String> = (0..11).map(|_| sample_line()).collect();
        lines.push("bad,line".to_string());
        let content = lines.join("\n");

        let report = BrasindiceParser::new().validate(&content, 4096);
        assert!(report.is_valid);
        assert_eq!(report.row_count, 12);
    }

    #[test]
    fn test_validate_flags_bad_columns() {
        let content = format!("{}\nbad,line", sample_line());
        let report = BrasindiceParser::new().validate(&content, 1024);

        assert!(!report.is_valid);
        assert_eq!(report.error_count, 1);
    }

    #[test]
    fn test_validate_empty_file() {
        let report = BrasindiceParser::new().validate("\n  \n", 4);

        assert!(!report.is_valid);
        assert_eq!(report.row_count, 0);
        assert_eq!(report.estimated_duration_seconds, 0);
        assert_eq!(report.message, "file contains no data lines");
    }

    #[test]
    fn test_duration_estimate_rounds_up() {
        let lines: Vec<String> = (0..201).map(|_| sample_line()).collect();
        let report = BrasindiceParser::new().validate(&lines.join("\n"), 1 << 20);

        assert_eq!(report.estimated_duration_seconds, 2);
    }
}
