use crate::schema::{CategorySummary, LocationSummary, MonthSummary, SellerSummary};
use std::cmp::Ordering;

/// Which summary column a ranked view sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Revenue,
    Count,
}

/// A summary row the ranker can order. Every table carries both metrics, so
/// every row type exposes both.
pub trait RankableRow {
    fn metric_value(&self, metric: Metric) -> f64;
}

impl RankableRow for LocationSummary {
    fn metric_value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Revenue => self.total_revenue,
            Metric::Count => self.sale_count as f64,
        }
    }
}

impl RankableRow for MonthSummary {
    fn metric_value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Revenue => self.total_revenue,
            Metric::Count => self.sale_count as f64,
        }
    }
}

impl RankableRow for CategorySummary {
    fn metric_value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Revenue => self.total_revenue,
            Metric::Count => self.sale_count as f64,
        }
    }
}

impl RankableRow for SellerSummary {
    fn metric_value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Revenue => self.total_revenue,
            Metric::Count => self.sale_count as f64,
        }
    }
}

/// Returns the `min(n, len)` highest rows by `metric`, descending.
///
/// Ties break on the row's position in the input table, which the aggregator
/// keeps in first-seen order. The tie-break is part of the sort key rather
/// than an appeal to sort stability. The input is left untouched.
pub fn top_n<T: RankableRow + Clone>(rows: &[T], metric: Metric, n: usize) -> Vec<T> {
    let mut ordered: Vec<(usize, &T)> = rows.iter().enumerate().collect();

    ordered.sort_by(|(left_idx, left), (right_idx, right)| {
        right
            .metric_value(metric)
            .partial_cmp(&left.metric_value(metric))
            .unwrap_or(Ordering::Equal)
            .then(left_idx.cmp(right_idx))
    });

    ordered
        .into_iter()
        .take(n)
        .map(|(_, row)| row.clone())
        .collect()
}
