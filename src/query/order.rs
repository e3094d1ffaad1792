//! Order-by types

use serde::{Deserialize, Serialize};

/// Order results by a metric
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderByMetric {
    pub name: String,
    #[serde(default)]
    pub descending: bool,
}

/// Order results by a group-by dimension
///
/// `grain` refines a time dimension (e.g. `"day"`, `"month"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderByGroupBy {
    pub name: String,
    #[serde(default)]
    pub grain: Option<String>,
    #[serde(default)]
    pub descending: bool,
}

impl OrderByMetric {
    /// Ascending order by `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descending: false,
        }
    }

    pub fn descending(mut self) -> Self {
        self.descending = true;
        self
    }
}

impl OrderByGroupBy {
    /// Ascending order by `name`, optionally at `grain`
    pub fn new(name: impl Into<String>, grain: Option<String>) -> Self {
        Self {
            name: name.into(),
            grain,
            descending: false,
        }
    }

    pub fn descending(mut self) -> Self {
        self.descending = true;
        self
    }
}

/// A resolved order-by entry
///
/// On the wire: `{ metric: { name, descending } }` or
/// `{ groupBy: { name, grain, descending } }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderBy {
    Metric(OrderByMetric),
    GroupBy(OrderByGroupBy),
}

impl OrderBy {
    /// Name of the metric or group-by being ordered on
    pub fn name(&self) -> &str {
        match self {
            OrderBy::Metric(m) => &m.name,
            OrderBy::GroupBy(g) => &g.name,
        }
    }

    pub fn is_descending(&self) -> bool {
        match self {
            OrderBy::Metric(m) => m.descending,
            OrderBy::GroupBy(g) => g.descending,
        }
    }
}

impl From<OrderByMetric> for OrderBy {
    fn from(value: OrderByMetric) -> Self {
        OrderBy::Metric(value)
    }
}

impl From<OrderByGroupBy> for OrderBy {
    fn from(value: OrderByGroupBy) -> Self {
        OrderBy::GroupBy(value)
    }
}

/// An order-by entry as supplied by the caller
///
/// Either a raw string (`"name"`, `"+name"`, `"-name"`) still to be resolved
/// against the query's metrics and group-bys, or an already typed entry that
/// is taken as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderSpec {
    Raw(String),
    Typed(OrderBy),
}

impl From<&str> for OrderSpec {
    fn from(value: &str) -> Self {
        OrderSpec::Raw(value.to_string())
    }
}

impl From<String> for OrderSpec {
    fn from(value: String) -> Self {
        OrderSpec::Raw(value)
    }
}

impl From<OrderBy> for OrderSpec {
    fn from(value: OrderBy) -> Self {
        OrderSpec::Typed(value)
    }
}

impl From<OrderByMetric> for OrderSpec {
    fn from(value: OrderByMetric) -> Self {
        OrderSpec::Typed(OrderBy::Metric(value))
    }
}

impl From<OrderByGroupBy> for OrderSpec {
    fn from(value: OrderByGroupBy) -> Self {
        OrderSpec::Typed(OrderBy::GroupBy(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_spec_deserialize_raw_and_typed() {
        let specs: Vec<OrderSpec> = serde_json::from_str(
            r#"["-revenue", {"metric": {"name": "orders"}}, {"groupBy": {"name": "ds", "grain": "day", "descending": true}}]"#,
        )
        .unwrap();

        assert_eq!(specs[0], OrderSpec::Raw("-revenue".to_string()));
        assert_eq!(specs[1], OrderSpec::from(OrderByMetric::new("orders")));
        assert_eq!(
            specs[2],
            OrderSpec::from(OrderByGroupBy::new("ds", Some("day".to_string())).descending())
        );
    }

    #[test]
    fn test_order_by_wire_shape() {
        let order = OrderBy::from(OrderByGroupBy::new("ds", None));
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"groupBy": {"name": "ds", "grain": null, "descending": false}})
        );
        assert_eq!(order.name(), "ds");
        assert!(!order.is_descending());
    }
}
