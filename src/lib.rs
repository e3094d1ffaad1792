//! semquery - Typed query parameters for semantic layer query APIs
//!
//! This library provides:
//! - Query parameter types (loose input bags, typed order-by entries, strict requests)
//! - Order-by resolution against the metrics and group-bys of a query
//! - Query parameter validation into ad-hoc or saved-query requests
//! - Parameter loading from YAML/JSON
//! - Model support: camelCase wire naming, deprecation warnings, GraphQL fragments
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `query/` - parameter types (QueryParameters, OrderSpec, QueryParametersStrict)
//! - `model/` - API model types and base-model helpers (Metric, Dimension, TimeGranularity)
//!
//! **Verb modules** (transformations):
//! - `parser/` - YAML → QueryParameters
//! - `validator/` - QueryParameters → QueryParametersStrict
//!
//! # Example
//!
//! ```
//! use semquery::{validate_query_parameters, QueryParameters, QueryParametersStrict};
//!
//! let params = QueryParameters {
//!     metrics: Some(vec!["revenue".into()]),
//!     group_by: Some(vec!["metric_time".into()]),
//!     order_by: Some(vec!["-revenue".into()]),
//!     ..Default::default()
//! };
//! let strict = validate_query_parameters(params)?;
//! assert!(matches!(strict, QueryParametersStrict::Adhoc(_)));
//! # Ok::<(), semquery::ValidationError>(())
//! ```

pub mod query;
pub mod model;
pub mod validator;
pub mod parser;
pub mod error;

// Re-export commonly used types
pub use query::{
    AdhocQueryParametersStrict, OrderBy, OrderByGroupBy, OrderByMetric, OrderSpec,
    QueryParameters, QueryParametersStrict, SavedQueryQueryParametersStrict,
};
pub use validator::{resolve_order_by, validate_query_parameters, ValidationError};
pub use model::{GraphQLFragment, GraphQLFragmentMixin};
pub use error::ParseError;
