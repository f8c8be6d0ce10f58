use serde::{Deserialize, Serialize};

/// One scraped page from the BPS Kota Medan site.
///
/// The `url` is the record's identity: the scraper deduplicates on it
/// before writing the corpus file. Missing fields deserialize as empty
/// strings rather than failing the whole corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Canonical link to the source page, unique within the corpus.
    #[serde(default)]
    pub url: String,
    /// Short human-readable label.
    #[serde(default)]
    pub title: String,
    /// Short summary text.
    #[serde(default)]
    pub description: String,
    /// Full body text; may be long.
    #[serde(default)]
    pub text: String,
}
