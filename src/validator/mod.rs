//! Query parameter validator (verb module)
//!
//! QueryParameters → QueryParametersStrict, resolving every order-by entry
//! against the names requested in the same query.

mod error;
mod order;
mod validate;

pub use error::ValidationError;
pub use order::resolve_order_by;
pub use validate::validate_query_parameters;
