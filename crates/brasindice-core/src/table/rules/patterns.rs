//! Regex patterns for concentration extraction.
//!
//! Alternations list compound units before simple units throughout: `mg/ml`
//! is an independent unit, not `mg` followed by a stray `/ml`, and swapping
//! the order silently changes output for inputs like `5 + 2 mg/ml`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Rule 1: parenthesized combination, e.g. "(0,15 + 0,03) mg"
    pub static ref PAREN_COMBINATION: Regex = Regex::new(
        r"(?i)^\s*\(\s*(\d+(?:[.,]\d+)?(?:\s*\+\s*\d+(?:[.,]\d+)?)+)\s*\)\s*((?:mg/ml|mcg/ml|mg/g|mcg/g|ui/ml|mcg/dose|mg|mcg|ui|g|ml)\b|%)"
    ).unwrap();

    // Rule 2: additive with compound units on both sides, e.g. "5 mg/ml + 2 mg/ml"
    pub static ref ADDITIVE_COMPOUND: Regex = Regex::new(
        r"(?i)^\s*(\d+(?:[.,]\d+)?)\s*(mg/ml|mcg/ml|mg/g|mcg/g|ui/ml)\b\s*\+\s*(\d+(?:[.,]\d+)?)\s*(mg/ml|mcg/ml|mg/g|mcg/g|ui/ml)\b"
    ).unwrap();

    // Rule 3: additive with the unit repeated, e.g. "100 mg + 20 mg"
    pub static ref ADDITIVE_REPEATED_UNIT: Regex = Regex::new(
        r"(?i)^\s*(\d+(?:[.,]\d+)?)\s*(mg/ml|mcg/ml|mg/g|mcg/g|ui/ml|mg|mcg|ui|g|ml)\b\s*\+\s*(\d+(?:[.,]\d+)?)\s*(mg/ml|mcg/ml|mg/g|mcg/g|ui/ml|mg|mcg|ui|g|ml)\b"
    ).unwrap();

    // Rule 4: compact additive, unit stated once, e.g. "80 + 12,5 mg"
    pub static ref ADDITIVE_COMPACT: Regex = Regex::new(
        r"(?i)^\s*(\d+(?:[.,]\d+)?)\s*\+\s*(\d+(?:[.,]\d+)?)\s*(mg/ml|mcg/ml|mg/g|mcg/g|ui/ml|mg|mcg|ui|g|ml)\b"
    ).unwrap();

    // Rule 5: ratio with optional left unit, e.g. "6 / 200 mcg", "250 mg/5 ml"
    pub static ref RATIO: Regex = Regex::new(
        r"(?i)^\s*(\d+(?:[.,]\d+)?)\s*(mg|mcg|ui|g)?\s*/\s*(\d+(?:[.,]\d+)?)\s*(mg|mcg|ui|g|ml)\b"
    ).unwrap();

    // Rule 6: simple leading concentration, e.g. "50 mg", "10 mg/ml", "10%"
    pub static ref LEADING_SIMPLE: Regex = Regex::new(
        r"(?i)^\s*(\d+(?:[.,]\d+)?)\s*((?:mg/ml|mcg/ml|mg/g|mcg/g|ui/ml|mcg/dose|mg|mcg|ui|g|ml)\b|%)"
    ).unwrap();

    // Rule 7: bare percentage anywhere in the text
    pub static ref BARE_PERCENT: Regex = Regex::new(
        r"(\d+(?:[.,]\d+)?)\s*%"
    ).unwrap();

    // Rule 8: suspension fallback anywhere in the text, e.g. "susp 250 mg/5 ml"
    pub static ref SUSPENSION_FALLBACK: Regex = Regex::new(
        r"(?i)(\d+(?:[.,]\d+)?)\s*(mg|mcg|g)\s*/\s*(\d+(?:[.,]\d+)?)\s*ml\b"
    ).unwrap();
}
