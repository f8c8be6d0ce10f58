use crate::record::Record;

/// Per-field weights applied when a query token occurs in that field.
#[derive(Debug, Clone, Copy)]
pub struct FieldWeights {
    pub title: f64,
    pub description: f64,
    pub text: f64,
}

/// Weights for plain token containment: title outranks description,
/// description outranks body text.
pub const MATCH_WEIGHTS: FieldWeights = FieldWeights {
    title: 5.0,
    description: 3.0,
    text: 1.0,
};

/// Extra weights earned by tokens that look like a four-digit year.
pub const YEAR_WEIGHTS: FieldWeights = FieldWeights {
    title: 2.0,
    description: 1.0,
    text: 0.5,
};

/// Whether a token is a candidate year: exactly four ASCII digits.
pub fn is_year_token(token: &str) -> bool {
    token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit())
}

/// Score a record against the query tokens.
///
/// Matching is case-insensitive substring containment, not word-boundary
/// matching, so "data" matches inside "database". Year tokens earn their
/// boost on top of the plain containment weight. The result is a plain
/// sum, never normalized by record or query length.
pub fn score(query_tokens: &[String], record: &Record) -> f64 {
    let title = record.title.to_lowercase();
    let description = record.description.to_lowercase();
    let text = record.text.to_lowercase();

    let mut score = 0.0;
    for token in query_tokens {
        if title.contains(token.as_str()) {
            score += MATCH_WEIGHTS.title;
        }
        if description.contains(token.as_str()) {
            score += MATCH_WEIGHTS.description;
        }
        if text.contains(token.as_str()) {
            score += MATCH_WEIGHTS.text;
        }
    }

    for year in query_tokens.iter().filter(|t| is_year_token(t)) {
        if title.contains(year.as_str()) {
            score += YEAR_WEIGHTS.title;
        }
        if description.contains(year.as_str()) {
            score += YEAR_WEIGHTS.description;
        }
        if text.contains(year.as_str()) {
            score += YEAR_WEIGHTS.text;
        }
    }

    score
}
