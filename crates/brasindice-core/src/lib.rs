//! Core library for BRASINDICE price table import.
//!
//! This crate provides:
//! - A quoted-field tokenizer for the fixed 23-column feed
//! - Field cleaning (decimal-comma numbers, EAN repair) and concentration
//!   extraction from presentation strings
//! - Batch parsing with per-line errors and aggregate statistics
//! - A cheap pre-flight validator for upload flows
//! - Projection into the generic reference-item payload
//!
//! The parser performs no I/O: file acquisition and persistence are
//! collaborator responsibilities.

pub mod error;
pub mod models;
pub mod table;

pub use error::{BrasindiceError, Result, RowError};
pub use models::config::ParserConfig;
pub use models::reference::ReferenceItemPayload;
pub use models::row::{ParsedRow, RowExtra};
pub use table::{BrasindiceParser, LineError, ParseResult, ParseStats, ValidationReport};
