use crate::schema::{
    CategorySummary, LocationSummary, MonthSummary, SellerSummary, SummaryTables, Transaction,
};
use crate::utils::{month_display_name, month_end_of};
use chrono::Datelike;
use std::collections::{BTreeMap, HashMap};

/// Groups transactions into the four summary tables in a single pass, both
/// metrics accumulated together.
///
/// The location, category and seller tables keep first-seen order; the
/// downstream ranker relies on that order for deterministic tie-breaking.
/// The month table is keyed by `(year, month)` and comes out chronological.
/// An empty input yields four empty tables.
pub fn aggregate(transactions: &[Transaction]) -> SummaryTables {
    let mut by_location: Vec<LocationSummary> = Vec::new();
    let mut location_index: HashMap<String, usize> = HashMap::new();

    let mut by_month: BTreeMap<(i32, u32), MonthSummary> = BTreeMap::new();

    let mut by_category: Vec<CategorySummary> = Vec::new();
    let mut category_index: HashMap<String, usize> = HashMap::new();

    let mut by_seller: Vec<SellerSummary> = Vec::new();
    let mut seller_index: HashMap<String, usize> = HashMap::new();

    for transaction in transactions {
        let idx = *location_index
            .entry(transaction.location.clone())
            .or_insert_with(|| {
                // Coordinates come from the first transaction at the location;
                // ingestion has already rejected conflicting pairs.
                by_location.push(LocationSummary {
                    location: transaction.location.clone(),
                    lat: transaction.lat,
                    lon: transaction.lon,
                    total_revenue: 0.0,
                    sale_count: 0,
                });
                by_location.len() - 1
            });
        by_location[idx].total_revenue += transaction.price;
        by_location[idx].sale_count += 1;

        let (year, month) = (
            transaction.purchase_date.year(),
            transaction.purchase_date.month(),
        );
        let month_row = by_month.entry((year, month)).or_insert_with(|| MonthSummary {
            year,
            month,
            month_name: month_display_name(month).to_string(),
            month_end: month_end_of(transaction.purchase_date),
            total_revenue: 0.0,
            sale_count: 0,
        });
        month_row.total_revenue += transaction.price;
        month_row.sale_count += 1;

        let idx = *category_index
            .entry(transaction.category.clone())
            .or_insert_with(|| {
                by_category.push(CategorySummary {
                    category: transaction.category.clone(),
                    total_revenue: 0.0,
                    sale_count: 0,
                });
                by_category.len() - 1
            });
        by_category[idx].total_revenue += transaction.price;
        by_category[idx].sale_count += 1;

        let idx = *seller_index
            .entry(transaction.seller.clone())
            .or_insert_with(|| {
                by_seller.push(SellerSummary {
                    seller: transaction.seller.clone(),
                    total_revenue: 0.0,
                    sale_count: 0,
                });
                by_seller.len() - 1
            });
        by_seller[idx].total_revenue += transaction.price;
        by_seller[idx].sale_count += 1;
    }

    SummaryTables {
        by_location,
        by_month: by_month.into_values().collect(),
        by_category,
        by_seller,
    }
}
