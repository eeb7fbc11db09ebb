//! Input normalization.

use std::borrow::Cow;

/// Prepare raw input for splitting.
///
/// Returns `None` for absent, empty, or whitespace-only input; there is
/// nothing to split and the caller should produce an empty thread. Otherwise
/// drops a leading byte-order mark and folds `\r\n` line endings into `\n`,
/// borrowing the input when nothing needs rewriting.
///
/// ```rust
/// use strands::normalize;
///
/// assert!(normalize(None).is_none());
/// assert!(normalize(Some("  \r\n\t ")).is_none());
/// assert_eq!(normalize(Some("a\r\nb")).as_deref(), Some("a\nb"));
/// ```
#[must_use]
pub fn normalize(text: Option<&str>) -> Option<Cow<'_, str>> {
    let text = text?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    if text.trim().is_empty() {
        return None;
    }

    if text.contains("\r\n") {
        Some(Cow::Owned(text.replace("\r\n", "\n")))
    } else {
        Some(Cow::Borrowed(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_inputs() {
        assert!(normalize(None).is_none());
        assert!(normalize(Some("")).is_none());
        assert!(normalize(Some("   \n  ")).is_none());
        assert!(normalize(Some("\u{feff}")).is_none());
    }

    #[test]
    fn test_borrows_when_clean() {
        let text = "one\ntwo";
        assert!(matches!(normalize(Some(text)), Some(Cow::Borrowed("one\ntwo"))));
    }

    #[test]
    fn test_folds_crlf() {
        let normalized = normalize(Some("one\r\n\r\ntwo\r\n")).unwrap();
        assert_eq!(normalized, "one\n\ntwo\n");
    }

    #[test]
    fn test_lone_carriage_return_kept() {
        let normalized = normalize(Some("one\rtwo")).unwrap();
        assert_eq!(normalized, "one\rtwo");
    }

    #[test]
    fn test_strips_bom() {
        assert_eq!(normalize(Some("\u{feff}hello")).unwrap(), "hello");
    }
}
