//! Validation errors

use thiserror::Error;

/// Errors that can occur while validating query parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A saved query was combined with ad-hoc metrics or group-bys
    #[error("Query modes are mutually exclusive: a saved query may not also specify metrics or group_by")]
    MutuallyExclusiveModes,
    /// Neither a saved query nor any metric or group-by was given
    #[error("No query target: specify a saved_query, or at least one metric or group_by")]
    NoQueryTarget,
    #[error("saved_query must be a non-empty string")]
    EmptySavedQuery,
    /// Order-by string that names neither a metric nor a group-by of the query
    #[error("Order by '{name}' is neither a known metric nor a known group_by")]
    UnknownOrderByName { name: String },
    #[error("Invalid limit {limit}: limit must be >= 0")]
    InvalidLimit { limit: i64 },
}
