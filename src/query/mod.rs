//! Query parameter types (nouns)
//!
//! Loose input bags as supplied by callers, the typed order-by entries, and
//! the strict, mode-tagged requests produced by the validator.

mod order;
mod params;

pub use order::{OrderBy, OrderByGroupBy, OrderByMetric, OrderSpec};
pub use params::{
    AdhocQueryParametersStrict, QueryParameters, QueryParametersStrict,
    SavedQueryQueryParametersStrict,
};
