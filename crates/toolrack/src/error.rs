use std::fmt;

/// Unified error type for the toolrack crate.
///
/// Only store-layer and catalog-layer faults travel as errors. Expected
/// conditions (unknown ids, out-of-range moves, an empty store) are handled
/// as no-ops or fallbacks and never surface here.
#[derive(Debug, Clone)]
pub enum EngineError {
    /// The per-user selection store failed to load or save.
    Store(String),
    /// The catalog source could not be fetched or parsed.
    Catalog(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Store(msg) => write!(f, "selection store error: {msg}"),
            EngineError::Catalog(msg) => write!(f, "catalog error: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}

/// Result type alias using [`EngineError`].
pub type EngineResult<T> = Result<T, EngineError>;
