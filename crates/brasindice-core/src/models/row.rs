//! Row models produced by the price table parser.

use serde::{Deserialize, Serialize};

/// A single product/presentation entry mapped from one line of the feed.
///
/// Constructed once per valid input line and immutable afterwards. Its only
/// identity is `external_code`; the parser holds no state across lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRow {
    /// Composite identity: `manufacturer_code + "_" + item_code + "_" +
    /// presentation_code`. Unique even when the same product is sold by
    /// multiple manufacturers under the same catalog entry.
    pub external_code: String,

    /// Product name. Empty when the source field is blank.
    pub product_name: String,

    /// Free-text presentation description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentation: Option<String>,

    /// Normalized drug-strength token derived from the presentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concentration: Option<String>,

    /// Units per package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    /// TISS procedure code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiss: Option<String>,

    /// TUSS procedure code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuss: Option<String>,

    /// EAN barcode, normalized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ean: Option<String>,

    /// Manufacturer (laboratory) code.
    pub manufacturer_code: String,

    /// Manufacturer (laboratory) name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_name: Option<String>,

    /// Commercial category (e.g. generic, similar, reference).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Factory price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pf: Option<f64>,

    /// Maximum consumer price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pmc: Option<f64>,

    /// Factory price per unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_pf: Option<f64>,

    /// Maximum consumer price per unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_pmc: Option<f64>,

    /// Always `None`: the feed carries no unit columns. Downstream fills
    /// this from other reference sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_unit: Option<String>,

    /// Always `None`, same reason as `entry_unit`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_unit: Option<String>,

    /// Lower-priority attributes kept for traceability.
    pub extra: RowExtra,
}

/// Low-priority row attributes, preserved but not promoted to top level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowExtra {
    /// GGREM code from the CMED price lists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ggrem: Option<String>,

    /// ANVISA registry number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anvisa: Option<String>,

    /// IPI tax rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipi: Option<f64>,

    /// Whether the item is dispensable (feed flag "S").
    pub dispensavel: bool,

    /// Last price adjustment, kept as the raw feed string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ult_reajuste: Option<String>,

    /// Hierarchy marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarquia: Option<String>,
}
