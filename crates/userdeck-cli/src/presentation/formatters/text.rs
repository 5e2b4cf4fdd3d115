/// Truncate to at most `max_chars` characters, marking the cut with `...`
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }

    let kept: String = text.chars().take(max_chars - 3).collect();
    format!("{}...", kept)
}

/// Truncate then right-pad with spaces to exactly `width` characters
pub fn pad_to_width(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let len = cut.chars().count();
    format!("{}{}", cut, " ".repeat(width.saturating_sub(len)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("Zoë Ødegård", 20), "Zoë Ødegård");
        assert_eq!(truncate("Zoë Ødegård", 6), "Zoë...");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdefgh", 6), "abc...");
    }
}
