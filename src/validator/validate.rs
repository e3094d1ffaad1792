use tracing::debug;
use crate::query::{
    AdhocQueryParametersStrict, OrderBy, OrderSpec, QueryParameters, QueryParametersStrict,
    SavedQueryQueryParametersStrict,
};
use super::error::ValidationError;
use super::order::resolve_order_by;

/// Validate a parameter bag into a strict, mode-tagged request
///
/// A bag with `saved_query` becomes a saved-query request; a bag with
/// `metrics` and/or `group_by` becomes an ad-hoc request. The two modes are
/// mutually exclusive. Validation is all-or-nothing: the first violated
/// constraint is returned and no request is produced.
pub fn validate_query_parameters(
    params: QueryParameters,
) -> Result<QueryParametersStrict, ValidationError> {
    let QueryParameters {
        metrics,
        group_by,
        saved_query,
        order_by,
        r#where,
        limit,
        read_cache,
    } = params;

    // 1. Saved queries define their shape server-side
    if saved_query.is_some() && (metrics.is_some() || group_by.is_some()) {
        return Err(ValidationError::MutuallyExclusiveModes);
    }

    let order_by = order_by.unwrap_or_default();
    let r#where = r#where.unwrap_or_default();
    let read_cache = read_cache.unwrap_or(true);

    // 2. Saved-query mode
    if let Some(saved_query) = saved_query {
        if saved_query.is_empty() {
            return Err(ValidationError::EmptySavedQuery);
        }
        debug!(%saved_query, "validating saved query parameters");

        // No metric or group-by names are known for a saved query, so only
        // typed order-by entries can pass here.
        let order_by = resolve_all(&[], &[], order_by)?;
        let limit = validate_limit(limit)?;

        return Ok(QueryParametersStrict::SavedQuery(SavedQueryQueryParametersStrict {
            saved_query,
            order_by,
            r#where,
            limit,
            read_cache,
        }));
    }

    // 3. Ad-hoc mode needs at least one metric or group-by
    let has_metrics = metrics.as_ref().is_some_and(|m| !m.is_empty());
    let has_group_by = group_by.as_ref().is_some_and(|g| !g.is_empty());
    if !has_metrics && !has_group_by {
        return Err(ValidationError::NoQueryTarget);
    }
    debug!(?metrics, ?group_by, "validating ad-hoc query parameters");

    // 4. Ordering may only reference what this query requests
    let metric_names = names(metrics.as_deref());
    let group_by_names = names(group_by.as_deref());
    let order_by = resolve_all(&metric_names, &group_by_names, order_by)?;
    let limit = validate_limit(limit)?;

    Ok(QueryParametersStrict::Adhoc(AdhocQueryParametersStrict {
        metrics,
        group_by,
        order_by,
        r#where,
        limit,
        read_cache,
    }))
}

fn names(list: Option<&[String]>) -> Vec<&str> {
    list.unwrap_or_default().iter().map(String::as_str).collect()
}

fn resolve_all(
    valid_metric_names: &[&str],
    valid_group_by_names: &[&str],
    specs: Vec<OrderSpec>,
) -> Result<Vec<OrderBy>, ValidationError> {
    specs
        .into_iter()
        .map(|spec| resolve_order_by(valid_metric_names, valid_group_by_names, spec))
        .collect()
}

fn validate_limit(limit: Option<i64>) -> Result<Option<u64>, ValidationError> {
    limit
        .map(|l| u64::try_from(l).map_err(|_| ValidationError::InvalidLimit { limit: l }))
        .transpose()
}
