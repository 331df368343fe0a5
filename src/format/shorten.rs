//! Display shortening for names and chain addresses.
//!
//! Both functions count `char`s rather than bytes so multi-byte names are
//! never cut inside a code point.

/// Marker appended (or inserted) where characters were dropped.
pub const OMISSION_MARKER: &str = "...";

/// Characters kept at each end of a shortened address.
pub const ADDRESS_EDGE_CHARS: usize = 4;

/// Shortens a label to at most `max_len` characters plus the omission marker.
///
/// Values that already fit are returned unchanged; `None` becomes an empty
/// string.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(shorten(Some("Acme"), 20), "Acme");
/// assert_eq!(shorten(Some("Filecoin Foundation"), 8), "Filecoin...");
/// assert_eq!(shorten(None, 20), "");
/// ```
#[must_use]
pub fn shorten(value: Option<&str>, max_len: usize) -> String {
    let value = value.unwrap_or_default();
    match value.char_indices().nth(max_len) {
        None => value.to_string(),
        Some((cut, _)) => format!("{}{OMISSION_MARKER}", &value[..cut]),
    }
}

/// Shortens an address to a fixed `prefix...suffix` form.
///
/// Unlike [`shorten`] the result width does not depend on a length budget:
/// the first and last [`ADDRESS_EDGE_CHARS`] characters are always kept.
/// Addresses too short to lose anything are returned unchanged.
#[must_use]
pub fn shorten_address(address: &str) -> String {
    let char_count = address.chars().count();
    if char_count <= ADDRESS_EDGE_CHARS * 2 + OMISSION_MARKER.len() {
        return address.to_string();
    }

    let prefix: String = address.chars().take(ADDRESS_EDGE_CHARS).collect();
    let suffix: String = address
        .chars()
        .skip(char_count - ADDRESS_EDGE_CHARS)
        .collect();
    format!("{prefix}{OMISSION_MARKER}{suffix}")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::fits("Acme", 20, "Acme")]
    #[case::exact("abcde", 5, "abcde")]
    #[case::truncated("Filecoin Foundation", 8, "Filecoin...")]
    #[case::zero_budget("abc", 0, "...")]
    #[case::multibyte("żółć gęślą jaźń", 4, "żółć...")]
    #[case::empty("", 3, "")]
    fn test_shorten(#[case] value: &str, #[case] max_len: usize, #[case] expected: &str) {
        assert_eq!(shorten(Some(value), max_len), expected);
    }

    #[test]
    fn test_shorten_absent_is_empty() {
        assert_eq!(shorten(None, 20), "");
    }

    #[test]
    fn test_shorten_result_is_bounded_prefix() {
        let value = "Organisation with a very long descriptive name";
        for max_len in 0..value.len() {
            let short = shorten(Some(value), max_len);
            let kept = short.strip_suffix(OMISSION_MARKER).unwrap();
            assert!(value.starts_with(kept));
            assert!(short.chars().count() <= max_len + OMISSION_MARKER.len());
        }
    }

    #[rstest]
    #[case::typical("f0123456789abcdef", "f012...cdef")]
    #[case::robust(
        "f1qwertyuiopasdfghjklzxcvbnmqwertyuiopas",
        "f1qw...opas"
    )]
    #[case::short_kept("f01", "f01")]
    #[case::boundary_kept("f0123456789", "f0123456789")]
    #[case::just_over("f01234567890", "f012...7890")]
    fn test_shorten_address(#[case] address: &str, #[case] expected: &str) {
        assert_eq!(shorten_address(address), expected);
    }
}
