//! Parameter-default resolution for delegated invocations.

/// Resolve a caller-supplied parameter against its default.
///
/// The supplied value wins only when present and non-empty; an explicitly
/// empty value collapses to the default, the same substitution the
/// dispatched workflows have always seen.
pub fn or_default(supplied: Option<&str>, default: &str) -> String {
    match supplied {
        Some(value) if !value.is_empty() => value.to_owned(),
        _ => default.to_owned(),
    }
}
