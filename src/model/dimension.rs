//! Dimension metadata as returned by the semantic layer API
#![allow(deprecated)]

use serde::{Deserialize, Serialize};
use super::deprecation::warn_deprecated_field;
use super::fragment::{FragmentField, GraphQLFragmentMixin};
use super::time::TimeGranularity;

/// Kind of dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DimensionType {
    Categorical,
    Time,
}

/// A dimension that queries can group by
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub dimension_type: DimensionType,
    pub label: Option<String>,
    #[serde(default)]
    pub is_partition: bool,
    pub expr: Option<String>,
    #[serde(default)]
    queryable_granularities: Vec<TimeGranularity>,
    /// Grains this dimension can be queried at (time dimensions only)
    #[serde(default)]
    pub queryable_time_granularities: Vec<String>,
}

impl Dimension {
    /// Standard grains this dimension can be queried at
    #[deprecated(note = "use `queryable_time_granularities`, which includes custom grains")]
    pub fn queryable_granularities(&self) -> &[TimeGranularity] {
        warn_deprecated_field(
            "Dimension",
            "queryable_granularities",
            "Since the introduction of custom time granularities, `Dimension.queryable_granularities` \
             is deprecated. Use `queryable_time_granularities` instead.",
        );
        &self.queryable_granularities
    }

    pub fn is_time(&self) -> bool {
        self.dimension_type == DimensionType::Time
    }
}

impl GraphQLFragmentMixin for Dimension {
    fn gql_model_name() -> &'static str {
        "Dimension"
    }

    fn gql_fields() -> Vec<FragmentField> {
        vec![
            FragmentField::Scalar("name"),
            FragmentField::Scalar("description"),
            FragmentField::Scalar("type"),
            FragmentField::Scalar("label"),
            FragmentField::Scalar("is_partition"),
            FragmentField::Scalar("expr"),
            FragmentField::Scalar("queryable_granularities"),
            FragmentField::Scalar("queryable_time_granularities"),
        ]
    }
}
