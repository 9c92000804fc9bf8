//! Mapping of tokenized lines into [`ParsedRow`] values.

use crate::error::RowError;
use crate::models::config::ParserConfig;
use crate::models::row::{ParsedRow, RowExtra};

use super::rules::{clean_ean, clean_string, extract_concentration, parse_number};

/// Fixed positional layout of the 23-column feed.
///
/// Indices 21 (edition number) and 22 (ICMS bracket) are carried by the
/// feed but unused here.
mod col {
    pub const MANUFACTURER_CODE: usize = 0;
    pub const MANUFACTURER_NAME: usize = 1;
    pub const ITEM_CODE: usize = 2;
    pub const PRODUCT_NAME: usize = 3;
    pub const PRESENTATION_CODE: usize = 4;
    pub const PRESENTATION: usize = 5;
    pub const EAN: usize = 6;
    pub const TISS: usize = 7;
    pub const TUSS: usize = 8;
    pub const GGREM: usize = 9;
    pub const ANVISA: usize = 10;
    pub const QUANTITY: usize = 11;
    pub const PF: usize = 12;
    pub const UNIT_PF: usize = 13;
    pub const PMC: usize = 14;
    pub const UNIT_PMC: usize = 15;
    pub const IPI: usize = 16;
    pub const CATEGORY: usize = 17;
    pub const DISPENSAVEL: usize = 18;
    pub const ULT_REAJUSTE: usize = 19;
    pub const HIERARQUIA: usize = 20;
}

/// Map one tokenized line into a [`ParsedRow`].
///
/// The line must tokenize to exactly the configured column count; no
/// partial mapping is attempted otherwise. The three identity fields
/// (manufacturer code, item code, presentation code) must be non-empty.
pub fn map_row(fields: &[String], config: &ParserConfig) -> Result<ParsedRow, RowError> {
    if fields.len() != config.expected_columns {
        return Err(RowError::ColumnCount {
            expected: config.expected_columns,
            found: fields.len(),
        });
    }

    let manufacturer_code = clean_string(&fields[col::MANUFACTURER_CODE])
        .ok_or(RowError::MissingField("manufacturer_code"))?;
    let item_code =
        clean_string(&fields[col::ITEM_CODE]).ok_or(RowError::MissingField("item_code"))?;
    let presentation_code = clean_string(&fields[col::PRESENTATION_CODE])
        .ok_or(RowError::MissingField("presentation_code"))?;

    let external_code = format!("{}_{}_{}", manufacturer_code, item_code, presentation_code);

    let presentation = clean_string(&fields[col::PRESENTATION]);
    let concentration = presentation
        .as_deref()
        .and_then(extract_concentration);

    let dispensavel = clean_string(&fields[col::DISPENSAVEL])
        .map(|v| v.to_uppercase() == "S")
        .unwrap_or(false);

    Ok(ParsedRow {
        external_code,
        product_name: clean_string(&fields[col::PRODUCT_NAME]).unwrap_or_default(),
        presentation,
        concentration,
        quantity: parse_number(&fields[col::QUANTITY]),
        tiss: clean_string(&fields[col::TISS]),
        tuss: clean_string(&fields[col::TUSS]),
        ean: clean_ean(&fields[col::EAN]),
        manufacturer_code,
        manufacturer_name: clean_string(&fields[col::MANUFACTURER_NAME]),
        category: clean_string(&fields[col::CATEGORY]),
        pf: parse_number(&fields[col::PF]),
        pmc: parse_number(&fields[col::PMC]),
        unit_pf: parse_number(&fields[col::UNIT_PF]),
        unit_pmc: parse_number(&fields[col::UNIT_PMC]),
        // The feed has no unit columns; downstream fills these.
        entry_unit: None,
        base_unit: None,
        extra: RowExtra {
            ggrem: clean_string(&fields[col::GGREM]),
            anvisa: clean_string(&fields[col::ANVISA]),
            ipi: parse_number(&fields[col::IPI]),
            dispensavel,
            ult_reajuste: clean_string(&fields[col::ULT_REAJUSTE]),
            hierarquia: clean_string(&fields[col::HIERARQUIA]),
        },
    })
}

#[cfg(test)]
pub(crate) fn sample_fields() -> Vec<String> {
    [
        "0001",              // manufacturer code
        "EMS",               // manufacturer name
        "12345",             // item code
        "DIPIRONA SODICA",   // product name
        "001",               // presentation code
        "500 mg com 30 cpr", // presentation
        "7891234567890",     // ean
        "1234567",           // tiss
        "90123456",          // tuss
        "501234567890123",   // ggrem
        "1012345678901",     // anvisa
        "30",                // quantity
        "10,50",             // pf
        "0,35",              // unit pf
        "14,20",             // pmc
        "0,47",              // unit pmc
        "2,5",               // ipi
        "GENERICO",          // category
        "S",                 // dispensavel
        "01/02/2024",        // ult reajuste
        "M",                 // hierarquia
        "45",                // edition (unused)
        "18",                // icms (unused)
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
