use thiserror::Error;

/// Errors that can arise while building a lexicon or assembling a case.
///
/// None of these are retried by the engine. A failed assembly never yields a
/// partial [`Scenario`](crate::model::Scenario).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaseError {
    /// A language pack is missing, or one of its required pools is empty or malformed.
    #[error("configuration error ({language}): {pool}")]
    Configuration { language: String, pool: String },

    /// `pick_one` was asked to choose from a pool with no entries.
    #[error("pool '{pool}' is empty")]
    EmptyPool { pool: String },

    /// `pick_many` was asked for more distinct entries than the pool holds.
    #[error("pool '{pool}' exhausted: requested {requested}, only {available} available")]
    PoolExhausted {
        pool: String,
        requested: usize,
        available: usize,
    },

    /// A template references a placeholder that was not bound.
    #[error("missing substitution for '{{{key}}}'")]
    MissingSubstitution { key: String },

    #[error("unknown category '{0}' (expected homicide, cyber or theft)")]
    UnknownCategory(String),

    #[error("unknown language '{0}' (expected tr or en)")]
    UnknownLanguage(String),

    /// A lexicon file could not be parsed.
    #[error("lexicon parse error: {0}")]
    Lexicon(String),
}

impl CaseError {
    pub(crate) fn config(language: impl ToString, pool: impl Into<String>) -> Self {
        CaseError::Configuration {
            language: language.to_string(),
            pool: pool.into(),
        }
    }

    /// True for both pick failures (empty pool, not enough distinct entries).
    pub fn is_pool_exhaustion(&self) -> bool {
        matches!(
            self,
            CaseError::EmptyPool { .. } | CaseError::PoolExhausted { .. }
        )
    }
}
