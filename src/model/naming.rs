//! Naming convention helpers
//!
//! Host code uses snake_case; the wire uses camelCase.

/// Convert `snake_case` to `camelCase`
///
/// The first segment is kept as is, so `Hello_world` becomes `HelloWorld`.
/// Strings without underscores are returned unchanged.
pub fn snake_case_to_camel_case(s: &str) -> String {
    let mut parts = s.split('_');
    let mut out = parts.next().unwrap_or_default().to_string();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Convert `camelCase` to `snake_case`
pub fn camel_case_to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
