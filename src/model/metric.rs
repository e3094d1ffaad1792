//! Metric metadata as returned by the semantic layer API
#![allow(deprecated)]

use serde::{Deserialize, Serialize};
use super::deprecation::warn_deprecated_field;
use super::dimension::Dimension;
use super::fragment::{FragmentField, GraphQLFragmentMixin};
use super::time::TimeGranularity;

/// How a metric is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricType {
    Simple,
    Ratio,
    Cumulative,
    Derived,
    Conversion,
}

/// A metric that queries can request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub metric_type: MetricType,
    pub label: Option<String>,
    /// Dimensions this metric can be grouped by
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
    #[serde(default)]
    queryable_granularities: Vec<TimeGranularity>,
    #[serde(default)]
    pub queryable_time_granularities: Vec<String>,
    #[serde(default)]
    pub requires_metric_time: bool,
}

impl Metric {
    #[deprecated(note = "use `queryable_time_granularities`, which includes custom grains")]
    pub fn queryable_granularities(&self) -> &[TimeGranularity] {
        warn_deprecated_field(
            "Metric",
            "queryable_granularities",
            "Since the introduction of custom time granularities, `Metric.queryable_granularities` \
             is deprecated. Use `queryable_time_granularities` instead.",
        );
        &self.queryable_granularities
    }

    /// Get a dimension by name
    pub fn get_dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }

    /// Get all dimension names
    pub fn dimension_names(&self) -> Vec<&str> {
        self.dimensions.iter().map(|d| d.name.as_str()).collect()
    }
}

impl GraphQLFragmentMixin for Metric {
    fn gql_model_name() -> &'static str {
        "Metric"
    }

    fn gql_fields() -> Vec<FragmentField> {
        vec![
            FragmentField::Scalar("name"),
            FragmentField::Scalar("description"),
            FragmentField::Scalar("type"),
            FragmentField::Scalar("label"),
            FragmentField::nested::<Dimension>("dimensions"),
            FragmentField::Scalar("queryable_granularities"),
            FragmentField::Scalar("queryable_time_granularities"),
            FragmentField::Scalar("requires_metric_time"),
        ]
    }
}
