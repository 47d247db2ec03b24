//! Character-aware string helpers shared by the animator and the widgets.

use unicode_width::UnicodeWidthStr;

/// Number of `char`s in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// The prefix of `s` made of its first `n` chars, always cut on a char boundary.
pub fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Shorten `s` to at most `width` display columns, ending with `…` when cut.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthStr::width(c.encode_utf8(&mut [0; 4]));
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Hello", 0, "")]
    #[case("Hello", 1, "H")]
    #[case("Hello", 5, "Hello")]
    #[case("Hello", 9, "Hello")]
    #[case("héllo", 2, "hé")]
    #[case("日本語", 2, "日本")]
    #[case("", 3, "")]
    fn test_char_prefix(#[case] s: &str, #[case] n: usize, #[case] expected: &str) {
        assert_eq!(char_prefix(s, n), expected);
    }

    #[test]
    fn test_char_len_counts_chars_not_bytes() {
        assert_eq!(char_len("héllo"), 5);
        assert_eq!(char_len("日本語"), 3);
    }

    #[rstest]
    #[case("short", 10, "short")]
    #[case("a longer title", 6, "a lon…")]
    #[case("日本語テキスト", 5, "日本…")]
    #[case("anything", 0, "")]
    fn test_truncate_to_width(#[case] s: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(truncate_to_width(s, width), expected);
    }
}
