//! aida - keyword search over a scraped BPS Kota Medan corpus.
//!
//! aida loads a pre-built corpus of scraped web records (url, title,
//! description, body text) wholesale into memory and ranks records against
//! free-text queries using weighted case-insensitive substring matching
//! with a four-digit-year boost. Each result carries a bounded snippet
//! centered on the first query token match.
//!
//! # Quick start
//!
//! ```
//! use aida::{Corpus, Record, search};
//!
//! let corpus = Corpus::new(vec![Record {
//!     url: "https://medankota.bps.go.id/kemiskinan-2023".into(),
//!     title: "Data Kemiskinan 2023".into(),
//!     description: "Garis kemiskinan kota Medan tahun 2023".into(),
//!     text: String::new(),
//! }]);
//!
//! let response = search::execute_search("kemiskinan 2023", &corpus);
//! assert_eq!(response.results.len(), 1);
//! assert_eq!(response.results[0].score, 19.0);
//! ```

pub mod cli;
pub mod corpus;
pub mod error;
pub mod mcp;
pub mod record;
pub mod score;
pub mod search;
pub mod snippet;
pub mod tokenize;

pub use corpus::Corpus;
pub use error::{Error, Result};
pub use record::Record;
