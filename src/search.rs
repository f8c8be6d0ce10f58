use serde::{Deserialize, Serialize};

use crate::{
    corpus::Corpus,
    error::Result,
    record::Record,
    score,
    snippet,
    tokenize::tokenize,
};

/// Maximum number of results returned per query.
pub const RESULT_LIMIT: usize = 10;

/// Label identifying the corpus origin, attached to every result.
pub const SOURCE_LABEL: &str = "BPS Kota Medan";

/// A search request as received from a caller.
///
/// Chat-style callers send the query in a `message` field; plain search
/// callers use `query`. Either may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: Option<String>,
    pub message: Option<String>,
}

/// A single ranked result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub url: String,
    pub title: String,
    pub snippet: String,
    pub score: f64,
    pub source: String,
}

/// The response object handed back to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchHit>,
}

/// Resolve a request into the single trimmed query string the engine
/// consumes. A non-empty `query` wins over `message`; both absent or
/// empty resolves to the empty string.
pub fn resolve_query(request: &SearchRequest) -> String {
    request
        .query
        .as_deref()
        .filter(|q| !q.is_empty())
        .or_else(|| request.message.as_deref().filter(|m| !m.is_empty()))
        .unwrap_or("")
        .trim()
        .to_string()
}

/// Run the full search pipeline against the corpus.
///
/// 1. Tokenize the trimmed query (an empty query short-circuits to an
///    empty result list without scoring anything)
/// 2. Score every record, keeping only strictly positive scores
/// 3. Stable sort descending, so equal scores keep corpus order
/// 4. Truncate to [`RESULT_LIMIT`] and round scores to 2 decimals
/// 5. Extract a snippet from the description, falling back to body text
pub fn execute_search(query: &str, corpus: &Corpus) -> SearchResponse {
    let query = query.trim();
    if query.is_empty() {
        return SearchResponse {
            query: String::new(),
            results: Vec::new(),
        };
    }

    let tokens = tokenize(query);

    let mut scored: Vec<(f64, &Record)> = corpus
        .records()
        .iter()
        .map(|record| (score::score(&tokens, record), record))
        .filter(|(s, _)| *s > 0.0)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    let results = scored
        .into_iter()
        .take(RESULT_LIMIT)
        .map(|(s, record)| {
            let snippet_source = if record.description.is_empty() {
                &record.text
            } else {
                &record.description
            };
            let title = if record.title.is_empty() {
                record.url.clone()
            } else {
                record.title.clone()
            };

            SearchHit {
                url: record.url.clone(),
                title,
                snippet: snippet::snippet(
                    &tokens,
                    snippet_source,
                    snippet::DEFAULT_MAX_LEN,
                ),
                score: round2(s),
                source: SOURCE_LABEL.to_string(),
            }
        })
        .collect();

    SearchResponse {
        query: query.to_string(),
        results,
    }
}

/// Round to 2 decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format results for human-readable terminal output.
pub fn format_human(response: &SearchResponse) {
    if response.results.is_empty() {
        println!("No results found.");
        return;
    }

    for (i, hit) in response.results.iter().enumerate() {
        println!("{:>3}. [{:.2}] {}", i + 1, hit.score, hit.title);
        println!("     {}", hit.url);
        if !hit.snippet.is_empty() {
            println!("     {}", hit.snippet);
        }
    }
    println!("\n{} result(s)", response.results.len());
}

/// Format the response as a single JSON line on stdout.
pub fn format_json(response: &SearchResponse) -> Result<()> {
    println!("{}", serde_json::to_string(response)?);
    Ok(())
}
