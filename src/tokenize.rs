/// Split free text into lowercase word and number tokens.
///
/// Every character that is not a Unicode letter, digit, or whitespace is
/// treated as a separator. Token order and duplicates are preserved; there
/// is no stemming or deduplication.
pub fn tokenize(s: &str) -> Vec<String> {
    s.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
