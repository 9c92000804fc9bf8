//! Projection of parsed rows into the generic reference item payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::row::ParsedRow;

/// The shape the reference-item persistence collaborator expects.
///
/// Prices and low-priority fields are folded into the open `extra_data`
/// map; only the attributes shared by every reference source stay flat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceItemPayload {
    pub external_code: String,
    pub name: String,
    pub presentation: Option<String>,
    pub concentration: Option<String>,
    pub quantity: Option<f64>,
    pub tiss: Option<String>,
    pub tuss: Option<String>,
    pub ean: Option<String>,
    pub manufacturer_code: String,
    pub manufacturer_name: Option<String>,
    pub category: Option<String>,
    /// Always `None`: the feed has no subcategory concept.
    pub subcategory: Option<String>,
    pub entry_unit: Option<String>,
    pub base_unit: Option<String>,
    pub extra_data: Map<String, Value>,
}

impl ReferenceItemPayload {
    /// Flatten a parsed row into the persistence payload.
    pub fn from_row(row: &ParsedRow) -> Self {
        let mut extra_data = Map::new();
        extra_data.insert("pf".into(), opt_number(row.pf));
        extra_data.insert("pmc".into(), opt_number(row.pmc));
        extra_data.insert("unit_pf".into(), opt_number(row.unit_pf));
        extra_data.insert("unit_pmc".into(), opt_number(row.unit_pmc));
        extra_data.insert("ggrem".into(), opt_string(row.extra.ggrem.as_deref()));
        extra_data.insert("anvisa".into(), opt_string(row.extra.anvisa.as_deref()));
        extra_data.insert("ipi".into(), opt_number(row.extra.ipi));
        extra_data.insert("dispensavel".into(), Value::from(row.extra.dispensavel));
        extra_data.insert(
            "ult_reajuste".into(),
            opt_string(row.extra.ult_reajuste.as_deref()),
        );
        extra_data.insert(
            "hierarquia".into(),
            opt_string(row.extra.hierarquia.as_deref()),
        );

        Self {
            external_code: row.external_code.clone(),
            name: row.product_name.clone(),
            presentation: row.presentation.clone(),
            concentration: row.concentration.clone(),
            quantity: row.quantity,
            tiss: row.tiss.clone(),
            tuss: row.tuss.clone(),
            ean: row.ean.clone(),
            manufacturer_code: row.manufacturer_code.clone(),
            manufacturer_name: row.manufacturer_name.clone(),
            category: row.category.clone(),
            subcategory: None,
            entry_unit: row.entry_unit.clone(),
            base_unit: row.base_unit.clone(),
            extra_data,
        }
    }
}

impl From<&ParsedRow> for ReferenceItemPayload {
    fn from(row: &ParsedRow) -> Self {
        Self::from_row(row)
    }
}

fn opt_number(value: Option<f64>) -> Value {
    value.map(Value::from).unwrap_or(Value::Null)
}

fn opt_string(value: Option<&str>) -> Value {
    value.map(Value::from).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::row::RowExtra;
    use pretty_assertions::assert_eq;

    fn sample_row() -> ParsedRow {
        ParsedRow {
            external_code: "0001_12345_001".to_string(),
            product_name: "DIPIRONA SODICA".to_string(),
            presentation: Some("500 mg com 30 cpr".to_string()),
            concentration: Some("500MG".to_string()),
            quantity: Some(30.0),
            tiss: Some("1234567".to_string()),
            tuss: None,
            ean: Some("7891234567890".to_string()),
            manufacturer_code: "0001".to_string(),
            manufacturer_name: Some("EMS".to_string()),
            category: Some("GENERICO".to_string()),
            pf: Some(10.5),
            pmc: Some(14.2),
            unit_pf: Some(0.35),
            unit_pmc: None,
            entry_unit: None,
            base_unit: None,
            extra: RowExtra {
                ggrem: Some("501234567890123".to_string()),
                anvisa: None,
                ipi: Some(2.5),
                dispensavel: true,
                ult_reajuste: Some("01/02/2024".to_string()),
                hierarquia: None,
            },
        }
    }

    #[test]
    fn test_from_row_flattens_prices_into_extra_data() {
        let payload = ReferenceItemPayload::from_row(&sample_row());

        assert_eq!(payload.external_code, "0001_12345_001");
        assert_eq!(payload.name, "DIPIRONA SODICA");
        assert_eq!(payload.extra_data["pf"], Value::from(10.5));
        assert_eq!(payload.extra_data["unit_pmc"], Value::Null);
        assert_eq!(payload.extra_data["dispensavel"], Value::from(true));
        assert_eq!(payload.extra_data["ggrem"], Value::from("501234567890123"));
        assert_eq!(payload.extra_data["anvisa"], Value::Null);
    }

    #[test]
    fn test_units_and_subcategory_stay_null() {
        let payload = ReferenceItemPayload::from_row(&sample_row());
        assert_eq!(payload.subcategory, None);
        assert_eq!(payload.entry_unit, None);
        assert_eq!(payload.base_unit, None);
    }
}
