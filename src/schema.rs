use crate::regions::Region;
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::RangeInclusive;

/// Years the upstream products feed has data for.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 2020..=2023;

/// Default number of rows shown in the ranked seller/location views.
pub const DEFAULT_TOP_N: usize = 5;

/// One row of the feed exactly as the upstream products API serves it.
/// Field names and the `dd/mm/YYYY` date format are the wire contract;
/// [`crate::ingestion::ingest_feed`] turns these into validated
/// [`Transaction`]s.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RawTransaction {
    #[serde(rename = "Categoria do Produto")]
    #[schemars(description = "Product category the sold item belongs to")]
    pub category: String,

    #[serde(rename = "Preço")]
    #[schemars(description = "Sale price in BRL. Must be finite and non-negative")]
    pub price: f64,

    #[serde(rename = "Local da compra")]
    #[schemars(description = "Brazilian state where the purchase was made")]
    pub location: String,

    #[schemars(description = "Latitude of the purchase location")]
    pub lat: f64,

    #[schemars(description = "Longitude of the purchase location")]
    pub lon: f64,

    #[serde(rename = "Vendedor")]
    #[schemars(description = "Name of the seller who closed the sale")]
    pub seller: String,

    #[serde(rename = "Data da Compra")]
    #[schemars(description = "Purchase date in dd/mm/YYYY format")]
    pub purchase_date: String,
}

impl RawTransaction {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(RawTransaction)
    }

    /// JSON-schema rendering of the feed contract, for the fetch collaborator.
    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}

/// A validated sales transaction. Immutable once ingested; one pipeline run
/// treats the collection as a read-only ordered sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Transaction {
    pub category: String,
    pub price: f64,
    pub location: String,
    pub lat: f64,
    pub lon: f64,
    pub seller: String,
    pub purchase_date: NaiveDate,
}

/// Revenue and sale count for one purchase location, with the coordinates
/// shared by every transaction at that location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSummary {
    pub location: String,
    pub lat: f64,
    pub lon: f64,
    pub total_revenue: f64,
    pub sale_count: usize,
}

/// Revenue and sale count for one calendar month. `month_end` is the last
/// calendar day of the bucket; `month_name` is the English display name the
/// monthly charts label their x-axis with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub month_end: NaiveDate,
    pub total_revenue: f64,
    pub sale_count: usize,
}

/// Revenue and sale count for one product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub total_revenue: f64,
    pub sale_count: usize,
}

/// Revenue and sale count for one seller. Both metrics always travel
/// together; the ranked views pick which column to sort by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerSummary {
    pub seller: String,
    pub total_revenue: f64,
    pub sale_count: usize,
}

/// The four grouped tables one aggregation pass produces. Location, category
/// and seller tables preserve first-seen order; the month table is
/// chronological.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SummaryTables {
    pub by_location: Vec<LocationSummary>,
    pub by_month: Vec<MonthSummary>,
    pub by_category: Vec<CategorySummary>,
    pub by_seller: Vec<SellerSummary>,
}

/// Narrowing parameters for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FilterParams {
    #[serde(default)]
    #[schemars(description = "Restrict to one Brazilian macro-region. None means all regions")]
    pub region: Option<Region>,

    #[serde(default)]
    #[schemars(description = "Restrict to purchases made in this year. None means the whole period")]
    pub year: Option<i32>,

    #[serde(default)]
    #[schemars(description = "Restrict to these sellers. None or empty means no seller restriction")]
    pub sellers: Option<HashSet<String>>,

    #[serde(default = "default_top_n")]
    #[schemars(description = "How many rows the ranked views keep. The reporting UI offers 2 to 10")]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            region: None,
            year: None,
            sellers: None,
            top_n: DEFAULT_TOP_N,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_generation() {
        let schema_json = RawTransaction::schema_as_json().unwrap();
        assert!(schema_json.contains("Categoria do Produto"));
        assert!(schema_json.contains("Data da Compra"));
        assert!(schema_json.contains("lat"));
    }

    #[test]
    fn test_raw_transaction_uses_feed_field_names() {
        let json = r#"{
            "Categoria do Produto": "livros",
            "Preço": 92.45,
            "Local da compra": "São Paulo",
            "lat": -22.19,
            "lon": -48.79,
            "Vendedor": "Beatriz Moraes",
            "Data da Compra": "01/01/2020"
        }"#;

        let raw: RawTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(raw.category, "livros");
        assert_eq!(raw.location, "São Paulo");
        assert_eq!(raw.purchase_date, "01/01/2020");

        let round_trip = serde_json::to_string(&raw).unwrap();
        assert!(round_trip.contains("Categoria do Produto"));
    }

    #[test]
    fn test_filter_params_defaults() {
        let params: FilterParams = serde_json::from_str("{}").unwrap();
        assert!(params.region.is_none());
        assert!(params.year.is_none());
        assert!(params.sellers.is_none());
        assert_eq!(params.top_n, DEFAULT_TOP_N);
    }
}
