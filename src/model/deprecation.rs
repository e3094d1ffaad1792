//! Deprecation warnings for model types and fields
//!
//! Each deprecation key warns once per process through `tracing`.

use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};
use tracing::warn;

static WARNED: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();

/// Log `message` as a deprecation warning the first time `key` is seen
///
/// Returns true if the warning was emitted by this call.
pub fn warn_deprecated(key: &str, message: &str) -> bool {
    let warned = WARNED.get_or_init(Default::default);
    let first = match warned.lock() {
        Ok(mut keys) => keys.insert(key.to_string()),
        Err(poisoned) => poisoned.into_inner().insert(key.to_string()),
    };
    if first {
        warn!(target: "semquery::deprecation", key, "{}", message);
    }
    first
}

/// Warn that a field of a model is deprecated
pub fn warn_deprecated_field(model: &str, field: &str, message: &str) -> bool {
    warn_deprecated(&format!("{}.{}", model, field), message)
}

/// Deprecation message for a whole type: the custom text, or `"<Type> is deprecated"`
pub fn deprecated_type_message(type_name: &str, custom: Option<&str>) -> String {
    match custom {
        Some(message) => message.to_string(),
        None => format!("{} is deprecated", type_name),
    }
}
