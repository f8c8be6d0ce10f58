/// Default maximum snippet length in characters.
pub const DEFAULT_MAX_LEN: usize = 220;

/// Characters of context kept to the left of the first match.
const LEFT_CONTEXT: usize = 80;

const ELLIPSIS: char = '…';

/// Extract an excerpt of `text` centered near the first query token match.
///
/// Tokens are tried in the order given; the first one that occurs anywhere
/// in the lowercased text decides the window position, even if a later
/// token matches earlier in the text. When nothing matches, the window
/// starts at the beginning. The excerpt keeps the original casing, is
/// trimmed, and carries an ellipsis on each side that was cut.
///
/// Window positions are character indices, so a window never splits a
/// code point.
pub fn snippet(query_tokens: &[String], text: &str, max_len: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = text.chars().collect();
    // One lowercase char per original char keeps match positions aligned
    // with the original text.
    let lower: String = chars
        .iter()
        .map(|c| c.to_lowercase().next().unwrap_or(*c))
        .collect();

    let pos = query_tokens
        .iter()
        .find_map(|token| lower.find(token.as_str()))
        .map(|byte_idx| lower[..byte_idx].chars().count())
        .unwrap_or(0);

    let start = pos.saturating_sub(LEFT_CONTEXT);
    let end = chars.len().min(start + max_len);

    let excerpt: String = chars[start..end].iter().collect();

    let mut out = String::new();
    if start > 0 {
        out.push(ELLIPSIS);
    }
    out.push_str(excerpt.trim());
    if end < chars.len() {
        out.push(ELLIPSIS);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn empty_text_yields_empty_snippet() {
        assert_eq!(snippet(&tokens(&["kemiskinan"]), "", DEFAULT_MAX_LEN), "");
    }

    #[test]
    fn short_text_is_returned_whole() {
        let s = snippet(
            &tokens(&["medan"]),
            "Garis kemiskinan kota Medan",
            DEFAULT_MAX_LEN,
        );
        assert_eq!(s, "Garis kemiskinan kota Medan");
    }

    #[test]
    fn original_casing_is_preserved() {
        let s = snippet(&tokens(&["medan"]), "Kota MEDAN 2023", DEFAULT_MAX_LEN);
        assert!(s.contains("MEDAN"));
    }

    #[test]
    fn no_match_returns_head_of_text() {
        let text = "a".repeat(500);
        let s = snippet(&tokens(&["zzz"]), &text, DEFAULT_MAX_LEN);
        assert!(!s.starts_with('…'));
        assert!(s.ends_with('…'));
        assert_eq!(s.chars().count(), DEFAULT_MAX_LEN + 1);
    }

    #[test]
    fn window_is_bounded() {
        let text = format!("{}kemiskinan{}", "x".repeat(300), "y".repeat(300));
        let s = snippet(&tokens(&["kemiskinan"]), &text, DEFAULT_MAX_LEN);
        // At most max_len content chars plus one ellipsis on each side.
        assert!(s.chars().count() <= DEFAULT_MAX_LEN + 2);
        assert!(s.contains("kemiskinan"));
    }

    #[test]
    fn match_deep_in_text_gets_both_ellipses() {
        let text = format!("{}kemiskinan{}", "x".repeat(300), "y".repeat(300));
        let s = snippet(&tokens(&["kemiskinan"]), &text, DEFAULT_MAX_LEN);
        assert!(s.starts_with('…'));
        assert!(s.ends_with('…'));
    }

    #[test]
    fn left_context_is_eighty_chars() {
        let text = format!("{}kemiskinan{}", "x".repeat(200), "y".repeat(200));
        let s = snippet(&tokens(&["kemiskinan"]), &text, DEFAULT_MAX_LEN);
        // 80 chars of left context survive, between the ellipsis and the match.
        assert!(s.contains(&format!("{}kemiskinan", "x".repeat(80))));
        assert!(!s.contains(&format!("{}kemiskinan", "x".repeat(81))));
    }

    #[test]
    fn token_order_wins_over_text_position() {
        // "zebra" is the first token, so its match decides the window even
        // though "alpha" occurs earlier in the text.
        let text =
            format!("alpha {}zebra{}", "x".repeat(200), "y".repeat(200));
        let s = snippet(&tokens(&["zebra", "alpha"]), &text, DEFAULT_MAX_LEN);
        assert!(s.contains("zebra"));
        assert!(s.starts_with('…'));
    }

    #[test]
    fn multibyte_text_never_panics() {
        let text = "Médan—statistik “resmi” 2023 ".repeat(40);
        let s = snippet(&tokens(&["2023"]), &text, DEFAULT_MAX_LEN);
        assert!(s.contains("2023"));
        assert!(s.chars().count() <= DEFAULT_MAX_LEN + 2);
    }

    #[test]
    fn result_is_trimmed() {
        let text = format!("{}   kemiskinan", "x".repeat(100));
        // Window starts 80 chars before the match, inside the run of x's,
        // so nothing to trim on the left; the right edge is the text end.
        let s = snippet(&tokens(&["kemiskinan"]), &text, DEFAULT_MAX_LEN);
        assert!(!s.ends_with(' '));
    }

    #[test]
    fn custom_max_len_applies() {
        let text = "kemiskinan ".repeat(50);
        let s = snippet(&tokens(&["kemiskinan"]), &text, 40);
        assert!(s.chars().count() <= 40 + 2);
    }
}
