//! String utility functions

/// Truncate text to `max_len` characters, appending `...` when cut
pub fn truncate_preview(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        format!("{}...", text.chars().take(max_len).collect::<String>())
    } else {
        text.to_string()
    }
}

/// Case-insensitive substring match
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Pad or cut to an exact display width (in chars)
pub fn fit_width(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        if width == 0 {
            return String::new();
        }
        let mut cut: String = text.chars().take(width - 1).collect();
        cut.push('…');
        cut
    } else {
        format!("{}{}", text, " ".repeat(width - count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_preview_short() {
        assert_eq!(truncate_preview("hello", 30), "hello");
    }

    #[test]
    fn test_truncate_preview_long() {
        let text = "a".repeat(31);
        assert_eq!(truncate_preview(&text, 30), format!("{}...", "a".repeat(30)));
    }

    #[test]
    fn test_truncate_preview_multibyte() {
        assert_eq!(truncate_preview("日本語テキスト", 3), "日本語...");
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Weather Agent", "agent"));
        assert!(!contains_ignore_case("Weather", "agent"));
    }

    #[test]
    fn test_fit_width() {
        assert_eq!(fit_width("abc", 5), "abc  ");
        assert_eq!(fit_width("abcdef", 4), "abc…");
        assert_eq!(fit_width("abcd", 4), "abcd");
        assert_eq!(fit_width("abc", 0), "");
    }
}
