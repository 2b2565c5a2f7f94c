use thiserror::Error;

#[derive(Error, Debug)]
pub enum SalesSummaryError {
    #[error("Invalid purchase date: {0}")]
    InvalidDate(String),

    #[error("Invalid transaction at row {row}: {details}")]
    InvalidTransaction { row: usize, details: String },

    #[error("Conflicting coordinates for location '{location}': first seen ({first_lat}, {first_lon}), row has ({lat}, {lon})")]
    ConflictingCoordinates {
        location: String,
        first_lat: f64,
        first_lon: f64,
        lat: f64,
        lon: f64,
    },

    #[error("Cannot format value {0}: must be finite and non-negative")]
    UnformattableValue(f64),

    #[error("Unsupported year {0}: the feed covers 2020 through 2023")]
    UnsupportedYear(i32),

    #[error("Invalid display quantity {0}: must be at least 1")]
    InvalidQuantity(usize),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SalesSummaryError>;
