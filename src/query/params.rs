//! Query parameter bags

use serde::{Deserialize, Serialize};
use super::order::{OrderBy, OrderSpec};

/// Loosely typed query parameters as supplied by a caller
///
/// Either `saved_query` or at least one of `metrics` / `group_by` selects
/// what to query; the validator decides which mode applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<Vec<OrderSpec>>,
    /// Filter expressions, e.g. `"{{ Dimension('metric_time') }} > '2024-01-01'"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#where: Option<Vec<String>>,
    /// Row limit; `None` means unlimited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Whether the server may answer from its cache. Defaults to true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_cache: Option<bool>,
}

/// A validated ad-hoc query over metrics and/or group-bys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdhocQueryParametersStrict {
    /// `None` queries every metric implied by `group_by`
    pub metrics: Option<Vec<String>>,
    pub group_by: Option<Vec<String>>,
    pub order_by: Vec<OrderBy>,
    pub r#where: Vec<String>,
    pub limit: Option<u64>,
    pub read_cache: bool,
}

/// A validated invocation of a server-defined saved query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedQueryQueryParametersStrict {
    pub saved_query: String,
    pub order_by: Vec<OrderBy>,
    pub r#where: Vec<String>,
    pub limit: Option<u64>,
    pub read_cache: bool,
}

/// A validated request, tagged by query mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryParametersStrict {
    Adhoc(AdhocQueryParametersStrict),
    SavedQuery(SavedQueryQueryParametersStrict),
}

impl QueryParametersStrict {
    pub fn order_by(&self) -> &[OrderBy] {
        match self {
            QueryParametersStrict::Adhoc(p) => &p.order_by,
            QueryParametersStrict::SavedQuery(p) => &p.order_by,
        }
    }

    pub fn is_saved_query(&self) -> bool {
        matches!(self, QueryParametersStrict::SavedQuery(_))
    }
}

impl From<AdhocQueryParametersStrict> for QueryParametersStrict {
    fn from(value: AdhocQueryParametersStrict) -> Self {
        QueryParametersStrict::Adhoc(value)
    }
}

impl From<SavedQueryQueryParametersStrict> for QueryParametersStrict {
    fn from(value: SavedQueryQueryParametersStrict) -> Self {
        QueryParametersStrict::SavedQuery(value)
    }
}

fn typed_specs(order_by: Vec<OrderBy>) -> Vec<OrderSpec> {
    order_by.into_iter().map(OrderSpec::Typed).collect()
}

fn signed_limit(limit: Option<u64>) -> Option<i64> {
    limit.map(|l| i64::try_from(l).unwrap_or(i64::MAX))
}

impl From<AdhocQueryParametersStrict> for QueryParameters {
    fn from(value: AdhocQueryParametersStrict) -> Self {
        QueryParameters {
            metrics: value.metrics,
            group_by: value.group_by,
            saved_query: None,
            order_by: Some(typed_specs(value.order_by)),
            r#where: Some(value.r#where),
            limit: signed_limit(value.limit),
            read_cache: Some(value.read_cache),
        }
    }
}

impl From<SavedQueryQueryParametersStrict> for QueryParameters {
    fn from(value: SavedQueryQueryParametersStrict) -> Self {
        QueryParameters {
            metrics: None,
            group_by: None,
            saved_query: Some(value.saved_query),
            order_by: Some(typed_specs(value.order_by)),
            r#where: Some(value.r#where),
            limit: signed_limit(value.limit),
            read_cache: Some(value.read_cache),
        }
    }
}

impl From<QueryParametersStrict> for QueryParameters {
    fn from(value: QueryParametersStrict) -> Self {
        match value {
            QueryParametersStrict::Adhoc(p) => p.into(),
            QueryParametersStrict::SavedQuery(p) => p.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::OrderByMetric;

    #[test]
    fn test_query_parameters_deserialize_snake_case() {
        let params: QueryParameters = serde_json::from_str(
            r#"{"metrics": ["revenue"], "group_by": ["metric_time"], "where": ["1=1"], "limit": 10, "read_cache": false}"#,
        )
        .unwrap();

        assert_eq!(params.metrics, Some(vec!["revenue".to_string()]));
        assert_eq!(params.group_by, Some(vec!["metric_time".to_string()]));
        assert_eq!(params.r#where, Some(vec!["1=1".to_string()]));
        assert_eq!(params.limit, Some(10));
        assert_eq!(params.read_cache, Some(false));
        assert!(params.saved_query.is_none());
        assert!(params.order_by.is_none());
    }

    #[test]
    fn test_query_parameters_rejects_unknown_keys() {
        let result: Result<QueryParameters, _> = serde_json::from_str(r#"{"metricz": ["a"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_strict_serializes_camel_case() {
        let strict = QueryParametersStrict::from(SavedQueryQueryParametersStrict {
            saved_query: "weekly_revenue".to_string(),
            order_by: vec![OrderByMetric::new("revenue").into()],
            r#where: vec![],
            limit: None,
            read_cache: true,
        });

        let json = serde_json::to_value(&strict).unwrap();
        assert_eq!(json["savedQuery"], "weekly_revenue");
        assert_eq!(json["readCache"], true);
        assert_eq!(json["orderBy"][0]["metric"]["name"], "revenue");
        assert!(json["limit"].is_null());
    }
}
