//! Station name normalization.

/// Normalize a display name for lookup.
///
/// Trims whitespace and drops a trailing parenthesised qualifier, so
/// `"서울역(1호선)"` and `"서울역"` compare equal. Live feeds and the
/// dataset disagree on these qualifiers.
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    let base = match trimmed.find('(') {
        Some(idx) if trimmed.ends_with(')') && idx > 0 => &trimmed[..idx],
        _ => trimmed,
    };
    base.trim().to_string()
}
