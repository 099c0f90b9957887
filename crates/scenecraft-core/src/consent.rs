//! Terms-of-use consent gate
//!
//! Requests must carry an explicit acceptance signal; the gate is a pure
//! function of the header value.

/// Header carrying the consent signal
pub const CONSENT_HEADER: &str = "x-user-agreement";

/// Whether the consent header value signals acceptance
///
/// Only the literal `"true"` (ASCII case-insensitive) passes; any other
/// value, including an absent header, fails.
#[inline]
#[must_use]
pub fn check_consent(header_value: Option<&str>) -> bool {
    header_value.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_literal_true() {
        assert!(check_consent(Some("true")));
        assert!(check_consent(Some("True")));
        assert!(check_consent(Some("TRUE")));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!check_consent(None));
        assert!(!check_consent(Some("false")));
        assert!(!check_consent(Some("")));
        assert!(!check_consent(Some("yes")));
        assert!(!check_consent(Some(" true")));
    }
}
