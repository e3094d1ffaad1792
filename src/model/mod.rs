//! Model types and base-model support (nouns)
//!
//! Models decode from camelCase wire mappings, can mark fields deprecated,
//! and describe themselves as GraphQL fragments.

mod deprecation;
mod dimension;
mod fragment;
mod metric;
mod naming;
mod time;

use serde::de::DeserializeOwned;

pub use deprecation::{deprecated_type_message, warn_deprecated, warn_deprecated_field};
pub use dimension::{Dimension, DimensionType};
pub use fragment::{normalize_query, FragmentField, GraphQLFragment, GraphQLFragmentMixin};
pub use metric::{Metric, MetricType};
pub use naming::{camel_case_to_snake_case, snake_case_to_camel_case};
#[allow(deprecated)]
pub use time::TimeGranularity;
pub use time::{DatePart, ParseTimeError};

/// Decode a model from a camelCase-keyed mapping
pub fn decode_model<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(value)
}
