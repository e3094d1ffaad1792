use tracing::debug;
use crate::query::{OrderBy, OrderByGroupBy, OrderByMetric, OrderSpec};
use super::error::ValidationError;

/// Resolve one order-by spec into a typed entry
///
/// Typed specs are returned unchanged. Raw strings take an optional `+`/`-`
/// direction prefix (`-` is descending) followed by a name, which is looked
/// up in `valid_metric_names` first and `valid_group_by_names` second.
pub fn resolve_order_by(
    valid_metric_names: &[&str],
    valid_group_by_names: &[&str],
    spec: OrderSpec,
) -> Result<OrderBy, ValidationError> {
    let raw = match spec {
        OrderSpec::Typed(order) => return Ok(order),
        OrderSpec::Raw(raw) => raw,
    };

    let (name, descending) = split_direction(&raw);

    let order = if valid_metric_names.iter().any(|m| *m == name) {
        OrderBy::Metric(OrderByMetric {
            name: name.to_string(),
            descending,
        })
    } else if valid_group_by_names.iter().any(|g| *g == name) {
        OrderBy::GroupBy(OrderByGroupBy {
            name: name.to_string(),
            grain: None,
            descending,
        })
    } else {
        return Err(ValidationError::UnknownOrderByName {
            name: name.to_string(),
        });
    };

    debug!(spec = %raw, resolved = ?order, "resolved order by");
    Ok(order)
}

/// Split `"-name"` / `"+name"` / `"name"` into the name and its direction
fn split_direction(raw: &str) -> (&str, bool) {
    if let Some(name) = raw.strip_prefix('-') {
        (name, true)
    } else if let Some(name) = raw.strip_prefix('+') {
        (name, false)
    } else {
        (raw, false)
    }
}
