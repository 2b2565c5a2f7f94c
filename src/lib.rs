//! # Sales Summary Builder
//!
//! A library for turning a raw sales-transaction feed into the grouped,
//! ranked summary tables a reporting dashboard renders.
//!
//! ## Core Concepts
//!
//! - **Feed**: the ordered sequence of raw transaction rows served by the
//!   upstream products API (Portuguese field names, `dd/mm/YYYY` dates)
//! - **Transaction**: a validated row (category, price, location with
//!   coordinates, seller, purchase date)
//! - **Summary tables**: one grouping pass produces four tables (by location,
//!   by month, by category, by seller), every row carrying both the revenue
//!   total and the sale count
//! - **Top-N**: a metric-sorted slice of a summary table, ties broken by
//!   first-seen order so output is deterministic
//! - **Unit ladder**: the `["", "thousand", "million"]` suffix list the
//!   headline figures are scaled with
//!
//! ## Example
//!
//! ```rust,ignore
//! use sales_summary_builder::*;
//!
//! let feed_body = fetch_products(region, year)?; // external collaborator
//! let report = ingest_json(&feed_body)?;
//! println!("{} rows skipped", report.skipped_count());
//!
//! let params = FilterParams {
//!     sellers: Some(["Beatriz Moraes".to_string()].into()),
//!     top_n: 5,
//!     ..Default::default()
//! };
//!
//! let summary = build_sales_summary(&report.transactions, &params)?;
//! println!("{}", summary.revenue_display); // e.g. "R$ 2.50 million"
//! for seller in &summary.top_sellers_by_revenue {
//!     println!("{}: {}", seller.seller, seller.total_revenue);
//! }
//! ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod format;
pub mod ingestion;
pub mod rank;
pub mod regions;
pub mod schema;
pub mod utils;

pub use aggregate::aggregate;
pub use error::{Result, SalesSummaryError};
pub use filter::filter_transactions;
pub use format::{format_magnitude, UNIT_LADDER};
pub use ingestion::{ingest_feed, ingest_json, IngestReport, SkippedRow};
pub use rank::{top_n, Metric, RankableRow};
pub use regions::{region_of, Region};
pub use schema::*;

use log::{debug, info};
use serde::Serialize;

/// Currency prefix on the headline revenue figure.
pub const CURRENCY_PREFIX: &str = "R$";

/// Everything one pipeline run hands the presentation layer: the four full
/// tables, the ranked slices the report views render, and the two formatted
/// headline strings.
#[derive(Debug, Clone, Serialize)]
pub struct SalesSummary {
    pub tables: SummaryTables,

    pub top_locations_by_revenue: Vec<LocationSummary>,
    pub top_locations_by_count: Vec<LocationSummary>,
    pub top_categories_by_revenue: Vec<CategorySummary>,
    pub top_categories_by_count: Vec<CategorySummary>,
    pub top_sellers_by_revenue: Vec<SellerSummary>,
    pub top_sellers_by_count: Vec<SellerSummary>,

    /// Total revenue over the filtered set, `R$`-prefixed and unit-scaled.
    pub revenue_display: String,
    /// Total number of filtered transactions, unit-scaled.
    pub sales_display: String,
}

pub struct SalesSummaryProcessor;

impl SalesSummaryProcessor {
    /// Runs the full pipeline: validate params, filter, aggregate, rank,
    /// format headlines. Stateless; every call recomputes from scratch.
    pub fn process(transactions: &[Transaction], params: &FilterParams) -> Result<SalesSummary> {
        validate_params(params)?;

        info!(
            "Building sales summary over {} transactions",
            transactions.len()
        );

        let filtered = filter_transactions(transactions, params);
        debug!(
            "{} of {} transactions survive the region/year/seller filters",
            filtered.len(),
            transactions.len()
        );

        let tables = aggregate(&filtered);
        debug!(
            "Aggregated into {} locations, {} months, {} categories, {} sellers",
            tables.by_location.len(),
            tables.by_month.len(),
            tables.by_category.len(),
            tables.by_seller.len()
        );

        let total_revenue: f64 = filtered.iter().map(|t| t.price).sum();
        let revenue_display = format_magnitude(total_revenue, CURRENCY_PREFIX)?;
        let sales_display = format_magnitude(filtered.len() as f64, "")?;

        let n = params.top_n;
        Ok(SalesSummary {
            top_locations_by_revenue: top_n(&tables.by_location, Metric::Revenue, n),
            top_locations_by_count: top_n(&tables.by_location, Metric::Count, n),
            top_categories_by_revenue: top_n(&tables.by_category, Metric::Revenue, n),
            top_categories_by_count: top_n(&tables.by_category, Metric::Count, n),
            top_sellers_by_revenue: top_n(&tables.by_seller, Metric::Revenue, n),
            top_sellers_by_count: top_n(&tables.by_seller, Metric::Count, n),
            tables,
            revenue_display,
            sales_display,
        })
    }
}

pub fn build_sales_summary(
    transactions: &[Transaction],
    params: &FilterParams,
) -> Result<SalesSummary> {
    SalesSummaryProcessor::process(transactions, params)
}

fn validate_params(params: &FilterParams) -> Result<()> {
    if params.top_n == 0 {
        return Err(SalesSummaryError::InvalidQuantity(params.top_n));
    }

    if let Some(year) = params.year {
        if !SUPPORTED_YEARS.contains(&year) {
            return Err(SalesSummaryError::UnsupportedYear(year));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn transaction(category: &str, price: f64, location: &str, seller: &str) -> Transaction {
        Transaction {
            category: category.to_string(),
            price,
            location: location.to_string(),
            lat: -22.19,
            lon: -48.79,
            seller: seller.to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2022, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_end_to_end_processing() {
        let transactions = vec![
            transaction("livros", 1200.0, "São Paulo", "Ana"),
            transaction("livros", 800.0, "São Paulo", "Bruno"),
            transaction("eletronicos", 3000.0, "São Paulo", "Ana"),
        ];

        let summary =
            SalesSummaryProcessor::process(&transactions, &FilterParams::default()).unwrap();

        assert_eq!(summary.tables.by_category.len(), 2);
        assert_eq!(summary.tables.by_seller.len(), 2);
        assert_eq!(summary.revenue_display, "R$ 5.00 thousand");
        assert_eq!(summary.sales_display, "3.00 ");

        assert_eq!(summary.top_sellers_by_revenue[0].seller, "Ana");
        assert_eq!(summary.top_sellers_by_revenue[0].total_revenue, 4200.0);
        assert_eq!(
            summary.top_categories_by_count[0].category,
            summary.tables.by_category[0].category
        );
    }

    #[test]
    fn test_empty_input_produces_empty_summary() {
        let summary = build_sales_summary(&[], &FilterParams::default()).unwrap();

        assert!(summary.tables.by_location.is_empty());
        assert!(summary.top_sellers_by_revenue.is_empty());
        assert_eq!(summary.revenue_display, "R$ 0.00 ");
        assert_eq!(summary.sales_display, "0.00 ");
    }

    #[test]
    fn test_param_validation() {
        let transactions = vec![transaction("livros", 10.0, "São Paulo", "Ana")];

        let zero_n = FilterParams {
            top_n: 0,
            ..Default::default()
        };
        assert!(matches!(
            build_sales_summary(&transactions, &zero_n),
            Err(SalesSummaryError::InvalidQuantity(0))
        ));

        let bad_year = FilterParams {
            year: Some(2019),
            ..Default::default()
        };
        assert!(matches!(
            build_sales_summary(&transactions, &bad_year),
            Err(SalesSummaryError::UnsupportedYear(2019))
        ));
    }
}
