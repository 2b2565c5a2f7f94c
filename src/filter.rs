use crate::regions::region_of;
use crate::schema::{FilterParams, Transaction};
use chrono::Datelike;

/// Narrows the transaction set by region, year and seller allow-list.
///
/// Region and year behave as the predicates the feed provider applies
/// upstream: absent means unrestricted. A location missing from the region
/// catalogue never matches a concrete region filter. The input is never
/// mutated and the surviving rows keep their feed order, so filtering twice
/// with the same params equals filtering once.
pub fn filter_transactions(transactions: &[Transaction], params: &FilterParams) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|transaction| matches_params(transaction, params))
        .cloned()
        .collect()
}

fn matches_params(transaction: &Transaction, params: &FilterParams) -> bool {
    if let Some(region) = params.region {
        if region_of(&transaction.location) != Some(region) {
            return false;
        }
    }

    if let Some(year) = params.year {
        if transaction.purchase_date.year() != year {
            return false;
        }
    }

    if let Some(sellers) = &params.sellers {
        if !sellers.is_empty() && !sellers.contains(&transaction.seller) {
            return false;
        }
    }

    true
}
