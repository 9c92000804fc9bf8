//! Field cleaning and derivation rules for the BRASINDICE feed.

pub mod clean;
pub mod concentration;
pub mod patterns;

pub use clean::{clean_ean, clean_string, parse_number};
pub use concentration::extract_concentration;
