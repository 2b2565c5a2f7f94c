use crate::error::{Result, SalesSummaryError};
use crate::schema::{RawTransaction, Transaction};
use crate::utils::parse_feed_date;
use log::warn;
use std::collections::HashMap;

/// Two coordinate pairs closer than this are considered the same point.
pub const COORDINATE_TOLERANCE: f64 = 1e-6;

/// One feed row that failed validation, with the row's position in the feed
/// and why it was rejected.
#[derive(Debug, Clone)]
pub struct SkippedRow {
    pub index: usize,
    pub reason: String,
}

/// Outcome of one ingestion pass: the rows that survived validation, in feed
/// order, plus everything that was skipped. An all-skipped (or empty) feed is
/// a valid outcome, not an error.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub transactions: Vec<Transaction>,
    pub skipped: Vec<SkippedRow>,
}

impl IngestReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Converts raw feed rows into validated [`Transaction`]s.
///
/// Malformed rows are skipped and reported, never fatal: the feed is external
/// and one bad row must not take the whole batch down. A location is pinned
/// to the coordinates of its first valid row; later rows that disagree beyond
/// [`COORDINATE_TOLERANCE`] are rejected as a data-integrity failure.
pub fn ingest_feed(rows: &[RawTransaction]) -> IngestReport {
    let mut report = IngestReport::default();
    let mut first_coords: HashMap<String, (f64, f64)> = HashMap::new();

    for (index, row) in rows.iter().enumerate() {
        match validate_row(index, row, &first_coords) {
            Ok(transaction) => {
                first_coords
                    .entry(transaction.location.clone())
                    .or_insert((transaction.lat, transaction.lon));
                report.transactions.push(transaction);
            }
            Err(err) => {
                warn!("Skipping feed row {}: {}", index, err);
                report.skipped.push(SkippedRow {
                    index,
                    reason: err.to_string(),
                });
            }
        }
    }

    report
}

/// Parses a feed body (a JSON array of rows as the products API serves them)
/// and ingests it.
pub fn ingest_json(body: &str) -> Result<IngestReport> {
    let rows: Vec<RawTransaction> = serde_json::from_str(body)?;
    Ok(ingest_feed(&rows))
}

fn validate_row(
    index: usize,
    row: &RawTransaction,
    first_coords: &HashMap<String, (f64, f64)>,
) -> Result<Transaction> {
    if row.category.trim().is_empty() {
        return Err(invalid(index, "missing product category"));
    }
    if row.location.trim().is_empty() {
        return Err(invalid(index, "missing purchase location"));
    }
    if row.seller.trim().is_empty() {
        return Err(invalid(index, "missing seller name"));
    }
    if !row.price.is_finite() || row.price < 0.0 {
        return Err(invalid(
            index,
            &format!("price {} is not a finite non-negative number", row.price),
        ));
    }
    if !row.lat.is_finite() || !row.lon.is_finite() {
        return Err(invalid(index, "non-finite coordinates"));
    }

    let purchase_date = parse_feed_date(&row.purchase_date)?;

    if let Some(&(first_lat, first_lon)) = first_coords.get(row.location.as_str()) {
        if (row.lat - first_lat).abs() > COORDINATE_TOLERANCE
            || (row.lon - first_lon).abs() > COORDINATE_TOLERANCE
        {
            return Err(SalesSummaryError::ConflictingCoordinates {
                location: row.location.clone(),
                first_lat,
                first_lon,
                lat: row.lat,
                lon: row.lon,
            });
        }
    }

    Ok(Transaction {
        category: row.category.clone(),
        price: row.price,
        location: row.location.clone(),
        lat: row.lat,
        lon: row.lon,
        seller: row.seller.clone(),
        purchase_date,
    })
}

fn invalid(row: usize, details: &str) -> SalesSummaryError {
    SalesSummaryError::InvalidTransaction {
        row,
        details: details.to_string(),
    }
}
