use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    error::{Error, Result},
    record::Record,
};

/// Default corpus filename produced by the scraper.
pub const CORPUS_FILENAME: &str = "bps_index.json";

/// Environment variable overriding the corpus file location.
pub const CORPUS_ENV_VAR: &str = "AIDA_CORPUS";

/// On-disk corpus layout: a JSON document with a top-level `records` array.
#[derive(Debug, Deserialize)]
struct CorpusFile {
    #[serde(default)]
    records: Vec<Record>,
}

/// The full in-memory record set.
///
/// Loaded once at startup and never mutated afterwards, so it can be
/// shared across concurrent queries without locking.
#[derive(Debug, Default)]
pub struct Corpus {
    records: Vec<Record>,
}

impl Corpus {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Load the corpus from a JSON file with a top-level `records` field.
    ///
    /// A missing or null `records` field yields an empty corpus.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::CorpusNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;

        let file: CorpusFile = serde_json::from_str(&contents)?;
        Ok(Self {
            records: file.records,
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Resolve the corpus file from, in order of priority:
/// 1. An explicit path (from --corpus)
/// 2. The AIDA_CORPUS environment variable
/// 3. bps_index.json in the XDG data directory (~/.local/share/aida/)
pub fn resolve_corpus_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Ok(val) = std::env::var(CORPUS_ENV_VAR) {
        return Ok(PathBuf::from(val));
    }

    let data_home = xdg::BaseDirectories::with_prefix("aida")
        .get_data_home()
        .ok_or_else(|| {
            Error::Config("could not determine XDG data home directory".into())
        })?;

    Ok(data_home.join(CORPUS_FILENAME))
}
